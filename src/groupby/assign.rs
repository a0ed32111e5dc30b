//! Per-row group assignment

use super::key::{CompositeKey, GroupId};
use super::key_index::KeyIndex;
use crate::dataframe::DataFrame;
use crate::error::{Error, Result};

/// Outcome of one assignment scan
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Group id of every row, by row position
    pub(crate) row_to_group: Vec<GroupId>,
    /// Exemplar key of every group, by group id
    pub(crate) exemplars: Vec<CompositeKey>,
    /// Key to id mapping built by the scan
    pub(crate) index: KeyIndex,
}

impl Assignment {
    pub fn row_to_group(&self) -> &[GroupId] {
        &self.row_to_group
    }

    pub fn exemplars(&self) -> &[CompositeKey] {
        &self.exemplars
    }

    pub fn key_index(&self) -> &KeyIndex {
        &self.index
    }

    pub fn group_count(&self) -> usize {
        self.exemplars.len()
    }
}

/// Scan `frame` once and give every row the id of its composite key
///
/// # Arguments
/// * `frame` - Table to scan
/// * `grouping_columns` - Columns whose values form the key
///
/// # Returns
/// * `Result<Assignment>` - Row ids and one exemplar key per group
pub fn assign<S: AsRef<str>>(frame: &DataFrame, grouping_columns: &[S]) -> Result<Assignment> {
    if grouping_columns.is_empty() {
        return Err(Error::EmptyGroupingColumns);
    }
    let positions = frame.column_positions(grouping_columns)?;

    let mut index = KeyIndex::new();
    let mut row_to_group = Vec::with_capacity(frame.nrow());
    let mut exemplars: Vec<CompositeKey> = Vec::new();

    for row in frame.rows() {
        let mut values = Vec::with_capacity(positions.len());
        for &col_idx in &positions {
            let value = row.get_at(col_idx).ok_or(Error::IndexOutOfBounds {
                index: col_idx,
                size: frame.ncol(),
            })?;
            values.push(value.clone());
        }
        let key = CompositeKey::new(values);

        let id = index.find(&key);
        if id == exemplars.len() {
            exemplars.push(key);
        }
        row_to_group.push(id);
    }

    Ok(Assignment {
        row_to_group,
        exemplars,
        index,
    })
}
