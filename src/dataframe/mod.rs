//! In-memory table implementation

// Core structure and construction
pub mod core;

// Positional row views
pub mod row;

// Column bind, column subset and row gathering
pub mod ops;

// Whole-table modify
pub mod modify;

// Text rendering
pub(crate) mod display;

// Re-exports
pub use self::core::DataFrame;
pub use row::{Row, Rows};
