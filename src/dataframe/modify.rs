//! Modify over a whole, ungrouped table

use super::core::DataFrame;
use crate::column::Column;
use crate::error::{Error, Result};
use crate::groupby::function::{check_arguments, FunctionOutput, GroupFunction};

impl DataFrame {
    /// Apply `function` to whole input columns and append the result
    ///
    /// The table is treated as a single group: the function must return one
    /// value per row. Returns a new table; `self` is unchanged.
    pub fn modify<F, I, S>(&self, function: &F, new_column: &str, input_columns: I) -> Result<DataFrame>
    where
        F: GroupFunction + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let input_columns: Vec<String> = input_columns
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();
        check_arguments(self, function, new_column, &input_columns)?;
        if self.contains_column(new_column) {
            return Err(Error::DuplicateColumnName(new_column.to_string()));
        }

        log::debug!(
            "modify '{}' over {:?} -> '{}' ({} rows, ungrouped)",
            function.name(),
            input_columns,
            new_column,
            self.nrow()
        );

        let inputs = input_columns
            .iter()
            .map(|name| self.column(name))
            .collect::<Result<Vec<&Column>>>()?;

        let values = match function.call(&inputs)? {
            FunctionOutput::Sequence(values) if values.len() == self.nrow() => values,
            FunctionOutput::Sequence(values) => {
                return Err(Error::LengthMismatch {
                    expected: self.nrow(),
                    actual: values.len(),
                })
            }
            FunctionOutput::Scalar(_) => {
                return Err(Error::InvalidArgument(format!(
                    "function '{}' must return a sequence for modify",
                    function.name()
                )))
            }
        };

        self.column_bind(Column::new(new_column, values)?)
    }
}
