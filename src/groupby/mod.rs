//! Grouping engine
//!
//! A grouping pass scans the table once, resolving each row's composite key
//! through a [`KeyIndex`] to a dense group id (`assign`), then buckets rows by
//! id and slices the table per group (`partition`). [`GroupedDataFrame`]
//! wraps the result and offers modify and aggregate on top of it.

pub mod assign;
pub mod builtins;
pub mod function;
pub mod key_index;
pub mod partition;

mod aggregate;
mod display;
mod execute;
mod group;
mod grouped;
mod key;
mod modify;

use std::sync::Arc;

use crate::dataframe::DataFrame;
use crate::error::Result;

pub use assign::Assignment;
pub use function::{from_fn, FnFunction, FunctionOutput, GroupFunction};
pub use group::Group;
pub use grouped::GroupedDataFrame;
pub use key::{CompositeKey, GroupId};
pub use key_index::KeyIndex;

/// Group `frame` by `columns`
pub fn group_by<I, S>(frame: impl Into<Arc<DataFrame>>, columns: I) -> Result<GroupedDataFrame>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    GroupedDataFrame::new(frame, columns)
}
