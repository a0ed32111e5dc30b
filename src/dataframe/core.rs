//! Core DataFrame structure and basic accessors

use std::collections::HashMap;

use crate::column::Column;
use crate::error::{Error, Result};

/// Column-oriented in-memory table
///
/// Column names are unique; every column has `row_count` values. Rows are
/// identified by position.
#[derive(Debug, Clone, Default)]
pub struct DataFrame {
    // column data
    pub(crate) columns: Vec<Column>,
    // column name -> position
    pub(crate) column_indices: HashMap<String, usize>,
    // column order
    pub(crate) column_names: Vec<String>,
    pub(crate) row_count: usize,
}

impl DataFrame {
    /// Create a new empty DataFrame
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a DataFrame from a list of columns
    ///
    /// # Arguments
    /// * `columns` - Columns in display order
    ///
    /// # Returns
    /// * `Result<DataFrame>` - Fails on duplicate names or unequal lengths
    pub fn from_columns<I>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = Column>,
    {
        let mut df = Self::new();
        for column in columns {
            df.add_column(column)?;
        }
        Ok(df)
    }

    /// Append a column in place
    pub fn add_column(&mut self, column: Column) -> Result<()> {
        if self.column_indices.contains_key(column.name()) {
            return Err(Error::DuplicateColumnName(column.name().to_string()));
        }

        if self.columns.is_empty() {
            self.row_count = column.len();
        } else if column.len() != self.row_count {
            return Err(Error::InconsistentRowCount {
                expected: self.row_count,
                found: column.len(),
            });
        }

        let name = column.name().to_string();
        self.column_indices.insert(name.clone(), self.columns.len());
        self.column_names.push(name);
        self.columns.push(column);
        Ok(())
    }

    /// Number of rows
    pub fn nrow(&self) -> usize {
        self.row_count
    }

    /// Number of columns
    pub fn ncol(&self) -> usize {
        self.columns.len()
    }

    /// Column names in order
    pub fn colnames(&self) -> &[String] {
        &self.column_names
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.column_indices.contains_key(name)
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Result<&Column> {
        let idx = self.column_position(name)?;
        Ok(&self.columns[idx])
    }

    /// Positional index of a column
    pub fn column_position(&self, name: &str) -> Result<usize> {
        self.column_indices
            .get(name)
            .copied()
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    /// Positional indices of several columns, in the order given
    pub fn column_positions<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<usize>> {
        names
            .iter()
            .map(|name| self.column_position(name.as_ref()))
            .collect()
    }

    pub fn column_at(&self, idx: usize) -> Option<&Column> {
        self.columns.get(idx)
    }
}

impl PartialEq for DataFrame {
    fn eq(&self, other: &Self) -> bool {
        self.row_count == other.row_count
            && self.column_names == other.column_names
            && self.columns == other.columns
    }
}
