use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::value::Value;

/// Enumeration identifying the semantic type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    /// Empty or all-null column
    Null,
    Boolean,
    Int64,
    Float64,
    String,
}

/// A named column of values of a single semantic type
///
/// The value buffer is shared (`Arc<[Value]>`), so cloning a column, and
/// therefore a `DataFrame`, does not copy cell data.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub(crate) name: String,
    pub(crate) data: Arc<[Value]>,
    pub(crate) column_type: ColumnType,
}

impl Column {
    /// Create a new column, checking that every non-null value has the same type
    ///
    /// # Arguments
    /// * `name` - Column name
    /// * `values` - Column values
    ///
    /// # Returns
    /// * `Result<Column>` - The column, or `ColumnTypeMismatch` for mixed types
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Result<Self> {
        let name = name.into();
        let mut column_type = ColumnType::Null;

        for value in &values {
            let found = value.column_type();
            if found == ColumnType::Null {
                continue;
            }
            if column_type == ColumnType::Null {
                column_type = found;
            } else if column_type != found {
                return Err(Error::ColumnTypeMismatch {
                    name,
                    expected: column_type,
                    found,
                });
            }
        }

        Ok(Self {
            name,
            data: values.into(),
            column_type,
        })
    }

    /// Create a column from anything convertible into values
    pub fn from_values<I, V>(name: impl Into<String>, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::new(name, values.into_iter().map(Into::into).collect())
    }

    /// Create an Int64 column
    pub fn int64(name: impl Into<String>, values: Vec<i64>) -> Self {
        Self::typed(name, values, ColumnType::Int64)
    }

    /// Create a Float64 column
    pub fn float64(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self::typed(name, values, ColumnType::Float64)
    }

    /// Create a String column
    pub fn string<S: Into<String>>(name: impl Into<String>, values: Vec<S>) -> Self {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        Self::typed(name, values, ColumnType::String)
    }

    /// Create a Boolean column
    pub fn boolean(name: impl Into<String>, values: Vec<bool>) -> Self {
        Self::typed(name, values, ColumnType::Boolean)
    }

    fn typed<T: Into<Value>>(name: impl Into<String>, values: Vec<T>, ty: ColumnType) -> Self {
        let data: Vec<Value> = values.into_iter().map(Into::into).collect();
        let column_type = if data.is_empty() { ColumnType::Null } else { ty };
        Self {
            name: name.into(),
            data: data.into(),
            column_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return a copy of this column under a different name
    pub fn rename(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: Arc::clone(&self.data),
            column_type: self.column_type,
        }
    }

    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the value at a position
    pub fn get(&self, index: usize) -> Result<&Value> {
        self.data.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            size: self.data.len(),
        })
    }

    pub fn values(&self) -> &[Value] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.data.iter()
    }

    /// Gather the values at `positions`, in the order given
    pub fn take(&self, positions: &[usize]) -> Result<Self> {
        let mut values = Vec::with_capacity(positions.len());
        for &pos in positions {
            values.push(self.get(pos)?.clone());
        }

        Ok(Self {
            name: self.name.clone(),
            data: values.into(),
            column_type: self.column_type,
        })
    }

    /// Number of non-null values
    pub fn count(&self) -> usize {
        self.data.iter().filter(|v| !v.is_null()).count()
    }
}

impl<'a> IntoIterator for &'a Column {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
