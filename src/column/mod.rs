mod common;
mod stats;

pub use common::{Column, ColumnType};
