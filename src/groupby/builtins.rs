//! Ready-made group functions
//!
//! Each function reads a single input column. `Sum`, `Mean`, `Min`, `Max`
//! and `Count` reduce it to a scalar for aggregate; `Identity`,
//! `CumulativeSum` and `Demean` return one value per row for modify.

use super::function::{FunctionOutput, GroupFunction};
use crate::column::{Column, ColumnType};
use crate::error::{Error, Result};
use crate::value::Value;

fn single<'a>(name: &str, columns: &[&'a Column]) -> Result<&'a Column> {
    match columns {
        [column] => Ok(*column),
        _ => Err(Error::InvalidArgument(format!(
            "function '{}' takes 1 input column(s), {} given",
            name,
            columns.len()
        ))),
    }
}

macro_rules! unary_function {
    ($ty:ident, $name:literal, |$col:ident| $body:expr) => {
        impl GroupFunction for $ty {
            fn name(&self) -> &str {
                $name
            }

            fn arity(&self) -> Option<usize> {
                Some(1)
            }

            fn call(&self, columns: &[&Column]) -> Result<FunctionOutput> {
                let $col = single($name, columns)?;
                $body
            }
        }
    };
}

/// Sum of the non-null values
#[derive(Debug, Clone, Copy, Default)]
pub struct Sum;

/// Mean of the non-null values
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

/// Smallest non-null value
#[derive(Debug, Clone, Copy, Default)]
pub struct Min;

/// Largest non-null value
#[derive(Debug, Clone, Copy, Default)]
pub struct Max;

/// Number of non-null values
#[derive(Debug, Clone, Copy, Default)]
pub struct Count;

/// The input column, unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

/// Running total within the group; nulls stay null and do not add
#[derive(Debug, Clone, Copy, Default)]
pub struct CumulativeSum;

/// Each value minus the group mean, as Float64; nulls stay null
#[derive(Debug, Clone, Copy, Default)]
pub struct Demean;

unary_function!(Sum, "sum", |col| Ok(FunctionOutput::Scalar(col.sum()?)));
unary_function!(Mean, "mean", |col| Ok(FunctionOutput::Scalar(col.mean()?)));
unary_function!(Min, "min", |col| Ok(FunctionOutput::Scalar(col.min())));
unary_function!(Max, "max", |col| Ok(FunctionOutput::Scalar(col.max())));
unary_function!(Count, "count", |col| Ok(FunctionOutput::scalar(
    col.count() as i64
)));
unary_function!(Identity, "identity", |col| Ok(FunctionOutput::Sequence(
    col.values().to_vec()
)));
unary_function!(CumulativeSum, "cumsum", |col| cumulative_sum(col));
unary_function!(Demean, "demean", |col| demean(col));

fn cumulative_sum(col: &Column) -> Result<FunctionOutput> {
    let values = match col.column_type() {
        ColumnType::Int64 | ColumnType::Null => {
            let mut total: i64 = 0;
            let mut out = Vec::with_capacity(col.len());
            for value in col.iter() {
                match value.as_i64() {
                    Some(v) => {
                        total = total.checked_add(v).ok_or_else(|| {
                            Error::ComputationError(format!(
                                "integer overflow in cumulative sum of '{}'",
                                col.name()
                            ))
                        })?;
                        out.push(Value::Int64(total));
                    }
                    None => out.push(Value::Null),
                }
            }
            out
        }
        ColumnType::Float64 => {
            let mut total = 0.0;
            col.iter()
                .map(|value| match value.as_f64() {
                    Some(v) => {
                        total += v;
                        Value::Float64(total)
                    }
                    None => Value::Null,
                })
                .collect()
        }
        found => return Err(col.not_numeric(found)),
    };
    Ok(FunctionOutput::Sequence(values))
}

fn demean(col: &Column) -> Result<FunctionOutput> {
    let mean = match col.mean()? {
        Value::Float64(m) => m,
        // nothing to centre on
        _ => return Ok(FunctionOutput::Sequence(vec![Value::Null; col.len()])),
    };
    Ok(FunctionOutput::Sequence(
        col.iter()
            .map(|value| match value.as_f64() {
                Some(v) => Value::Float64(v - mean),
                None => Value::Null,
            })
            .collect(),
    ))
}
