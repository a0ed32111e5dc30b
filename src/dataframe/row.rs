//! Positional row views

use super::core::DataFrame;
use crate::error::{Error, Result};
use crate::value::Value;

/// A borrowed view of one row
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    frame: &'a DataFrame,
    position: usize,
}

impl<'a> Row<'a> {
    /// Position of this row in its table
    pub fn position(&self) -> usize {
        self.position
    }

    /// Value of the named column in this row
    pub fn get(&self, column: &str) -> Result<&'a Value> {
        self.frame.column(column)?.get(self.position)
    }

    /// Value at a column position
    pub fn get_at(&self, column_idx: usize) -> Option<&'a Value> {
        self.frame
            .column_at(column_idx)
            .and_then(|col| col.values().get(self.position))
    }

    /// Values in column order
    pub fn values(&self) -> impl Iterator<Item = &'a Value> + 'a {
        let position = self.position;
        self.frame
            .columns()
            .iter()
            .map(move |col| &col.values()[position])
    }

    pub fn to_vec(&self) -> Vec<Value> {
        self.values().cloned().collect()
    }
}

/// Iterator over the rows of a table, in position order
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    frame: &'a DataFrame,
    next: usize,
}

impl<'a> Iterator for Rows<'a> {
    type Item = Row<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.frame.nrow() {
            return None;
        }
        let row = Row {
            frame: self.frame,
            position: self.next,
        };
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.frame.nrow().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}

impl DataFrame {
    /// Row view at a position
    pub fn row(&self, position: usize) -> Result<Row<'_>> {
        if position >= self.row_count {
            return Err(Error::IndexOutOfBounds {
                index: position,
                size: self.row_count,
            });
        }
        Ok(Row {
            frame: self,
            position,
        })
    }

    /// Iterate rows in position order
    pub fn rows(&self) -> Rows<'_> {
        Rows {
            frame: self,
            next: 0,
        }
    }
}

impl<'a> IntoIterator for &'a DataFrame {
    type Item = Row<'a>;
    type IntoIter = Rows<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows()
    }
}
