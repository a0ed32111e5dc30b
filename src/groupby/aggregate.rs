//! Per-group aggregation into a new, ungrouped table

use super::builtins::{Count, Max, Mean, Min, Sum};
use super::execute::map_groups;
use super::function::{FunctionOutput, GroupFunction};
use super::grouped::{collect_names, GroupedDataFrame};
use crate::column::Column;
use crate::dataframe::DataFrame;
use crate::error::{Error, Result};

impl GroupedDataFrame {
    /// Reduce `input_columns` of each group to a single value
    ///
    /// The result has one row per group, in group id order: the grouping
    /// columns (holding each group's key) followed by `new_column`.
    ///
    /// # Arguments
    /// * `function` - Function returning a scalar per group
    /// * `new_column` - Name of the result column
    /// * `input_columns` - Columns passed to the function, none of them a grouping column
    ///
    /// # Returns
    /// * `Result<DataFrame>` - The aggregated table
    pub fn aggregate<F, I, S>(
        &self,
        function: &F,
        new_column: &str,
        input_columns: I,
    ) -> Result<DataFrame>
    where
        F: GroupFunction + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let input_columns = collect_names(input_columns);
        self.check_group_arguments(function, new_column, &input_columns)?;
        if self.grouping_colnames().iter().any(|c| c == new_column) {
            return Err(Error::DuplicateColumnName(new_column.to_string()));
        }

        log::debug!(
            "aggregate '{}' over {:?} -> '{}' ({} groups)",
            function.name(),
            input_columns,
            new_column,
            self.group_count()
        );

        let groups = self.groups_slice();
        let results = map_groups(groups, &self.config().parallel, |group| {
            let inputs = group.columns(&input_columns)?;
            match function.call(&inputs)? {
                FunctionOutput::Scalar(value) => Ok(value),
                FunctionOutput::Sequence(_) => {
                    Err(Error::ScalarExpected(function.name().to_string()))
                }
            }
        })?;

        let mut columns = Vec::with_capacity(self.grouping_colnames().len() + 1);
        for (idx, name) in self.grouping_colnames().iter().enumerate() {
            let keys = groups
                .iter()
                .map(|g| g.key().get(idx).cloned().unwrap_or_default())
                .collect();
            columns.push(Column::new(name.clone(), keys)?);
        }
        columns.push(Column::new(new_column, results)?);

        DataFrame::from_columns(columns)
    }

    /// Shortcut: sum of `column` per group, stored in `{column}_sum`
    pub fn sum(&self, column: &str) -> Result<DataFrame> {
        self.aggregate(&Sum, &format!("{}_sum", column), [column])
    }

    /// Shortcut: mean of `column` per group, stored in `{column}_mean`
    pub fn mean(&self, column: &str) -> Result<DataFrame> {
        self.aggregate(&Mean, &format!("{}_mean", column), [column])
    }

    /// Shortcut: minimum of `column` per group, stored in `{column}_min`
    pub fn min(&self, column: &str) -> Result<DataFrame> {
        self.aggregate(&Min, &format!("{}_min", column), [column])
    }

    /// Shortcut: maximum of `column` per group, stored in `{column}_max`
    pub fn max(&self, column: &str) -> Result<DataFrame> {
        self.aggregate(&Max, &format!("{}_max", column), [column])
    }

    /// Shortcut: non-null count of `column` per group, stored in `{column}_count`
    pub fn count(&self, column: &str) -> Result<DataFrame> {
        self.aggregate(&Count, &format!("{}_count", column), [column])
    }
}
