//! Common test fixtures
//!
//! Provides the small tables shared by the integration tests.

#![allow(dead_code)]

use grouptab::error::Result;
use grouptab::{Column, DataFrame, Value};

/// Turn on test logging once; later calls are no-ops
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Six rows; grouped by `a` they form three pairs: {0,3}, {1,4}, {2,5}
///
/// a = [1, 2, 3, 1, 2, 3]
/// b = ["a", "b", "c", "c", "a", "b"]
/// c = ["x"; 6]
pub fn setup_test_df() -> Result<DataFrame> {
    DataFrame::from_columns(vec![
        Column::int64("a", vec![1, 2, 3, 1, 2, 3]),
        Column::string("b", vec!["a", "b", "c", "c", "a", "b"]),
        Column::string("c", vec!["x"; 6]),
    ])
}

/// Ten rows keyed by a string group with an integer and a float measure
pub fn setup_sales_df() -> Result<DataFrame> {
    DataFrame::from_columns(vec![
        Column::string(
            "group",
            vec!["A", "B", "A", "B", "A", "C", "B", "C", "C", "A"],
        ),
        Column::int64("value", vec![10, 25, 15, 30, 22, 18, 24, 12, 16, 20]),
        Column::float64(
            "price",
            vec![1.0, 2.5, 1.5, 3.0, 2.0, 4.0, 2.5, 3.5, 4.5, 1.0],
        ),
    ])
}

/// `n` rows cycling through `groups` keys
pub fn setup_wide_df(n: usize, groups: usize) -> Result<DataFrame> {
    let keys = (0..n).map(|i| (i % groups) as i64).collect();
    let values = (0..n).map(|i| i as i64).collect();
    DataFrame::from_columns(vec![
        Column::int64("key", keys),
        Column::int64("value", values),
    ])
}

/// Look up the aggregated value for a single-column key
pub fn find_group_value(result: &DataFrame, key_col: &str, key: Value, col: &str) -> Result<Value> {
    let keys = result.column(key_col)?;
    let values = result.column(col)?;
    let idx = keys
        .iter()
        .position(|v| *v == key)
        .ok_or_else(|| grouptab::Error::InvalidArgument(format!("no group {}", key)))?;
    Ok(values.get(idx)?.clone())
}
