//! Per-group dispatch, sequential or on the rayon pool

use rayon::prelude::*;

use super::group::Group;
use crate::config::ParallelConfig;
use crate::error::Result;

/// Run `f` once per group and collect the results in group order
///
/// The first error aborts the pass; no partial results are returned.
pub(crate) fn map_groups<T, F>(groups: &[Group], config: &ParallelConfig, f: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(&Group) -> Result<T> + Send + Sync,
{
    if !config.should_parallelize(groups.len()) {
        return groups.iter().map(f).collect();
    }

    let run = || groups.par_iter().map(&f).collect::<Result<Vec<T>>>();

    match config.max_threads {
        Some(threads) if threads < rayon::current_num_threads() => {
            log::debug!(
                "dispatching {} groups on a local pool of {} threads",
                groups.len(),
                threads
            );
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?;
            pool.install(run)
        }
        _ => {
            log::debug!(
                "dispatching {} groups on the global pool ({} threads)",
                groups.len(),
                rayon::current_num_threads()
            );
            run()
        }
    }
}
