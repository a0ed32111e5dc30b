//! Null-skipping summary statistics over a column

use super::common::{Column, ColumnType};
use crate::error::{Error, Result};
use crate::value::Value;

impl Column {
    /// Sum of the non-null values
    ///
    /// Int64 columns sum to `Int64`, Float64 columns to `Float64`. An empty or
    /// all-null column sums to `Int64(0)`.
    pub fn sum(&self) -> Result<Value> {
        match self.column_type {
            ColumnType::Null => Ok(Value::Int64(0)),
            ColumnType::Int64 => {
                let mut sum: i64 = 0;
                for v in self.data.iter().filter_map(Value::as_i64) {
                    sum = sum.checked_add(v).ok_or_else(|| {
                        Error::ComputationError(format!("integer overflow summing '{}'", self.name))
                    })?;
                }
                Ok(Value::Int64(sum))
            }
            ColumnType::Float64 => Ok(Value::Float64(
                self.data.iter().filter_map(Value::as_f64).sum(),
            )),
            found => Err(self.not_numeric(found)),
        }
    }

    /// Mean of the non-null values, `Null` when there are none
    pub fn mean(&self) -> Result<Value> {
        match self.column_type {
            ColumnType::Null | ColumnType::Int64 | ColumnType::Float64 => {
                let (sum, count) = self
                    .data
                    .iter()
                    .filter_map(Value::as_f64)
                    .fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
                if count == 0 {
                    Ok(Value::Null)
                } else {
                    Ok(Value::Float64(sum / count as f64))
                }
            }
            found => Err(self.not_numeric(found)),
        }
    }

    /// Smallest non-null value, `Null` when there are none
    pub fn min(&self) -> Value {
        self.data
            .iter()
            .filter(|v| !v.is_null())
            .min()
            .cloned()
            .unwrap_or(Value::Null)
    }

    /// Largest non-null value, `Null` when there are none
    pub fn max(&self) -> Value {
        self.data
            .iter()
            .filter(|v| !v.is_null())
            .max()
            .cloned()
            .unwrap_or(Value::Null)
    }

    pub(crate) fn not_numeric(&self, found: ColumnType) -> Error {
        Error::ColumnTypeMismatch {
            name: self.name.clone(),
            expected: ColumnType::Float64,
            found,
        }
    }
}
