//! Grouped table: a base table plus its grouping

use std::sync::Arc;

use super::assign::assign;
use super::group::Group;
use super::key::{CompositeKey, GroupId};
use super::key_index::KeyIndex;
use super::partition::partition;
use crate::config::GroupConfig;
use crate::dataframe::DataFrame;
use crate::error::{Error, Result};
use crate::value::Value;

/// A table split into groups of rows with equal grouping-column values
///
/// Grouping is done eagerly when the value is built and never changes
/// afterwards; operations that change the grouping return a new
/// `GroupedDataFrame`. The base table is shared, not copied.
#[derive(Debug, Clone)]
pub struct GroupedDataFrame {
    /// Table the grouping was computed from
    base: Arc<DataFrame>,
    /// Grouping key columns
    grouping_columns: Arc<[String]>,
    /// Groups, indexed by group id
    groups: Vec<Group>,
    /// Group id of each base row
    row_to_group: Vec<GroupId>,
    /// Key to group id, from the grouping pass
    key_index: KeyIndex,
    config: GroupConfig,
}

pub(crate) fn collect_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names.into_iter().map(|s| s.as_ref().to_string()).collect()
}

impl GroupedDataFrame {
    /// Group a table by one or more columns
    ///
    /// # Arguments
    /// * `frame` - Base table
    /// * `columns` - Grouping column names
    ///
    /// # Returns
    /// * `Result<GroupedDataFrame>` - Fails with `EmptyGroupingColumns` or `ColumnNotFound`
    pub fn new<I, S>(frame: impl Into<Arc<DataFrame>>, columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(frame, columns, GroupConfig::default())
    }

    /// Group a table using explicit execution and display settings
    pub fn with_config<I, S>(
        frame: impl Into<Arc<DataFrame>>,
        columns: I,
        config: GroupConfig,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let base: Arc<DataFrame> = frame.into();
        let grouping_columns: Arc<[String]> = collect_names(columns).into();

        let assignment = assign(&base, &grouping_columns[..])?;
        let groups = partition(&base, &assignment, &grouping_columns)?;

        log::debug!(
            "grouped {} rows into {} groups by {:?}",
            base.nrow(),
            groups.len(),
            grouping_columns
        );

        Ok(Self {
            base,
            grouping_columns,
            groups,
            row_to_group: assignment.row_to_group,
            key_index: assignment.index,
            config,
        })
    }

    /// Groups in ascending id order
    ///
    /// Each call returns a fresh iterator over the same groups.
    pub fn groups(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups()
    }

    /// Look up a group by id
    pub fn group_by_id(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(id)
    }

    /// Look up a group by its key values, given in grouping-column order
    pub fn find_group(&self, key: &[Value]) -> Option<&Group> {
        let key = CompositeKey::new(key.to_vec());
        self.key_index
            .get(&key)
            .and_then(|id| self.groups.get(id))
    }

    /// Number of groups
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Group id of every base row, by row position
    pub fn group_ids(&self) -> &[GroupId] {
        &self.row_to_group
    }

    /// Group id of one base row
    pub fn group_of_row(&self, row: usize) -> Option<GroupId> {
        self.row_to_group.get(row).copied()
    }

    /// The base table, unchanged
    pub fn ungroup(&self) -> &DataFrame {
        &self.base
    }

    /// Shared handle to the base table
    pub fn base(&self) -> Arc<DataFrame> {
        Arc::clone(&self.base)
    }

    /// Drop the grouping and return the base table handle
    pub fn into_ungrouped(self) -> Arc<DataFrame> {
        self.base
    }

    /// Column names of the base table
    pub fn colnames(&self) -> &[String] {
        self.base.colnames()
    }

    pub fn grouping_colnames(&self) -> &[String] {
        &self.grouping_columns
    }

    pub fn config(&self) -> &GroupConfig {
        &self.config
    }

    /// Replace the execution and display settings, keeping the grouping
    pub fn set_config(mut self, config: GroupConfig) -> Self {
        self.config = config;
        self
    }

    /// Keep only some columns, re-grouped on the same grouping columns
    ///
    /// Every grouping column must be among `columns`.
    pub fn subset<I, S>(&self, columns: I) -> Result<GroupedDataFrame>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let columns = collect_names(columns);
        let frame = self.base.column_subset(&columns)?;

        if let Some(dropped) = self
            .grouping_columns
            .iter()
            .find(|g| !columns.contains(*g))
        {
            return Err(Error::InvalidArgument(format!(
                "subset must keep grouping column '{}'",
                dropped
            )));
        }

        Self::with_config(frame, self.grouping_columns.iter(), self.config.clone())
    }

    /// Re-group the base table on `columns` plus the current grouping columns
    ///
    /// The requested columns come first; current grouping columns that were
    /// not requested are appended in their existing order.
    pub fn group<I, S>(&self, columns: I) -> Result<GroupedDataFrame>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut columns = collect_names(columns);
        for existing in self.grouping_columns.iter() {
            if !columns.contains(existing) {
                columns.push(existing.clone());
            }
        }

        Self::with_config(Arc::clone(&self.base), columns, self.config.clone())
    }

    pub(crate) fn groups_slice(&self) -> &[Group] {
        &self.groups
    }
}

impl<'a> IntoIterator for &'a GroupedDataFrame {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl DataFrame {
    /// Group the DataFrame
    ///
    /// The grouping holds its own handle to a clone of this table (column
    /// buffers are shared), so `ungroup()` returns that clone rather than
    /// `self`. To keep the caller's handle as the base, use `into_grouped`
    /// or `GroupedDataFrame::new` with an `Arc<DataFrame>`.
    ///
    /// # Arguments
    /// * `columns` - Column names for grouping
    ///
    /// # Returns
    /// * `Result<GroupedDataFrame>` - Grouping result sharing this table's column data
    pub fn group_by<I, S>(&self, columns: I) -> Result<GroupedDataFrame>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        GroupedDataFrame::new(self.clone(), columns)
    }

    /// Group the DataFrame, taking ownership of it
    pub fn into_grouped<I, S>(self, columns: I) -> Result<GroupedDataFrame>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        GroupedDataFrame::new(self, columns)
    }
}
