use std::sync::Arc;

use super::key::{CompositeKey, GroupId};
use crate::column::Column;
use crate::dataframe::{DataFrame, Rows};
use crate::error::Result;
use crate::value::Value;

/// One group of a grouped table
///
/// A group is a snapshot taken at grouping time: its id, its key, the
/// ascending positions of its rows in the base table and a copy of those
/// rows.
#[derive(Debug, Clone)]
pub struct Group {
    id: GroupId,
    key: CompositeKey,
    row_positions: Vec<usize>,
    frame: DataFrame,
    grouping_columns: Arc<[String]>,
}

impl Group {
    pub(crate) fn new(
        id: GroupId,
        key: CompositeKey,
        row_positions: Vec<usize>,
        frame: DataFrame,
        grouping_columns: Arc<[String]>,
    ) -> Self {
        Self {
            id,
            key,
            row_positions,
            frame,
            grouping_columns,
        }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Key shared by every row of the group
    pub fn key(&self) -> &CompositeKey {
        &self.key
    }

    /// Key value for one grouping column
    pub fn key_value(&self, column: &str) -> Option<&Value> {
        self.grouping_columns
            .iter()
            .position(|c| c == column)
            .and_then(|idx| self.key.get(idx))
    }

    /// Positions of the group's rows in the base table, ascending
    pub fn row_positions(&self) -> &[usize] {
        &self.row_positions
    }

    pub fn grouping_colnames(&self) -> &[String] {
        &self.grouping_columns
    }

    /// Number of rows in the group
    pub fn len(&self) -> usize {
        self.row_positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_positions.is_empty()
    }

    /// The group's rows as a table
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// One column restricted to the group's rows
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.frame.column(name)
    }

    /// Several columns restricted to the group's rows, in the order given
    pub fn columns<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&Column>> {
        names.iter().map(|n| self.column(n.as_ref())).collect()
    }

    pub fn rows(&self) -> Rows<'_> {
        self.frame.rows()
    }
}
