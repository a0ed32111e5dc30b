//! In-memory tables with SQL-style group by, per-group modify and per-group
//! aggregate.
//!
//! ```
//! use grouptab::{Column, DataFrame};
//! use grouptab::groupby::builtins::Sum;
//!
//! let df = DataFrame::from_columns(vec![
//!     Column::string("k", vec!["a", "b", "a"]),
//!     Column::int64("v", vec![1, 2, 3]),
//! ])?;
//! let totals = df.group_by(["k"])?.aggregate(&Sum, "total", ["v"])?;
//! assert_eq!(totals.nrow(), 2);
//! # Ok::<(), grouptab::Error>(())
//! ```

pub mod column;
pub mod config;
pub mod dataframe;
pub mod error;
pub mod groupby;
pub mod value;

// Re-export commonly used types
pub use column::{Column, ColumnType};
pub use config::{DisplayConfig, GroupConfig, ParallelConfig};
pub use dataframe::{DataFrame, Row};
pub use error::{Error, Result};
pub use groupby::{
    group_by, CompositeKey, FunctionOutput, Group, GroupFunction, GroupId, GroupedDataFrame,
};
pub use value::Value;

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
