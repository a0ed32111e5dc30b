//! Per-group modify: one output value per input row, scattered back into
//! base-table row order

use super::execute::map_groups;
use super::function::{check_arguments, FunctionOutput, GroupFunction};
use super::grouped::{collect_names, GroupedDataFrame};
use crate::column::Column;
use crate::error::{Error, Result};
use crate::value::Value;

impl GroupedDataFrame {
    /// Apply `function` to `input_columns` within each group and add the
    /// result as `new_column`
    ///
    /// The function is called once per group and must return a sequence with
    /// exactly one value per row of the group; the i-th value lands on the
    /// group's i-th row (ascending base position). The base table is not
    /// modified: the result is a new table, grouped on the same columns.
    ///
    /// # Arguments
    /// * `function` - Function to apply
    /// * `new_column` - Name of the column to add
    /// * `input_columns` - Columns passed to the function, none of them a grouping column
    ///
    /// # Returns
    /// * `Result<GroupedDataFrame>` - The extended, re-grouped table
    pub fn modify<F, I, S>(
        &self,
        function: &F,
        new_column: &str,
        input_columns: I,
    ) -> Result<GroupedDataFrame>
    where
        F: GroupFunction + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let input_columns = collect_names(input_columns);
        self.check_group_arguments(function, new_column, &input_columns)?;
        if self.ungroup().contains_column(new_column) {
            return Err(Error::DuplicateColumnName(new_column.to_string()));
        }

        log::debug!(
            "modify '{}' over {:?} -> '{}' ({} groups)",
            function.name(),
            input_columns,
            new_column,
            self.group_count()
        );

        let groups = self.groups_slice();
        let results = map_groups(groups, &self.config().parallel, |group| {
            let inputs = group.columns(&input_columns)?;
            match function.call(&inputs)? {
                FunctionOutput::Sequence(values) if values.len() == group.len() => Ok(values),
                FunctionOutput::Sequence(values) => Err(Error::LengthMismatch {
                    expected: group.len(),
                    actual: values.len(),
                }),
                FunctionOutput::Scalar(_) => Err(Error::InvalidArgument(format!(
                    "function '{}' must return a sequence for modify",
                    function.name()
                ))),
            }
        })?;

        let mut scattered = vec![Value::Null; self.ungroup().nrow()];
        for (group, values) in groups.iter().zip(results) {
            for (&pos, value) in group.row_positions().iter().zip(values) {
                scattered[pos] = value;
            }
        }

        let frame = self
            .ungroup()
            .column_bind(Column::new(new_column, scattered)?)?;

        GroupedDataFrame::with_config(frame, self.grouping_colnames(), self.config().clone())
    }

    /// Shared checks for modify and aggregate, including that no input column
    /// is a grouping column
    pub(crate) fn check_group_arguments<F>(
        &self,
        function: &F,
        new_column: &str,
        input_columns: &[String],
    ) -> Result<()>
    where
        F: GroupFunction + ?Sized,
    {
        check_arguments(self.ungroup(), function, new_column, input_columns)?;

        if let Some(col) = input_columns
            .iter()
            .find(|c| self.grouping_colnames().contains(*c))
        {
            return Err(Error::InvalidArgument(format!(
                "input column '{}' is a grouping column",
                col
            )));
        }
        Ok(())
    }
}
