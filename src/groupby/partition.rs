//! Bucketing of rows into groups

use std::sync::Arc;

use super::assign::Assignment;
use super::group::Group;
use crate::dataframe::DataFrame;
use crate::error::{Error, Result};

/// Build one `Group` per id in `assignment`, ordered by id
///
/// Rows are bucketed in a single pass, so positions inside each group come
/// out ascending. Every group carries every column of `frame`, sliced to its
/// rows.
pub fn partition(
    frame: &DataFrame,
    assignment: &Assignment,
    grouping_columns: &Arc<[String]>,
) -> Result<Vec<Group>> {
    let group_count = assignment.group_count();
    let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); group_count];

    for (row, &id) in assignment.row_to_group.iter().enumerate() {
        buckets
            .get_mut(id)
            .ok_or(Error::IndexOutOfBounds {
                index: id,
                size: group_count,
            })?
            .push(row);
    }

    buckets
        .into_iter()
        .zip(assignment.exemplars.iter())
        .enumerate()
        .map(|(id, (rows, key))| {
            let slice = frame.take_rows(&rows)?;
            Ok(Group::new(
                id,
                key.clone(),
                rows,
                slice,
                Arc::clone(grouping_columns),
            ))
        })
        .collect()
}
