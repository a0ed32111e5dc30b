//! Operations that derive a new DataFrame from an existing one

use super::core::DataFrame;
use crate::column::Column;
use crate::error::Result;

impl DataFrame {
    /// Return a new DataFrame with `column` appended
    ///
    /// The receiver is left untouched. Fails with `DuplicateColumnName` when
    /// the name is taken and `InconsistentRowCount` when the length differs
    /// from `nrow()`.
    pub fn column_bind(&self, column: Column) -> Result<DataFrame> {
        let mut df = self.clone();
        df.add_column(column)?;
        Ok(df)
    }

    /// Return a new DataFrame restricted to the named columns, in the order given
    pub fn column_subset<I, S>(&self, names: I) -> Result<DataFrame>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut df = DataFrame::new();
        for name in names {
            let column = self.column(name.as_ref())?;
            df.add_column(column.clone())?;
        }
        // a subset with no columns still describes the same rows
        if df.ncol() == 0 {
            df.row_count = self.row_count;
        }
        Ok(df)
    }

    /// Return a new DataFrame holding the rows at `positions`, in that order
    pub fn take_rows(&self, positions: &[usize]) -> Result<DataFrame> {
        let mut df = DataFrame::new();
        for column in &self.columns {
            df.add_column(column.take(positions)?)?;
        }
        if df.ncol() == 0 {
            df.row_count = positions.len();
        }
        Ok(df)
    }
}
