//! Text rendering shared by `DataFrame` and the grouped preview

use std::fmt;

use super::core::DataFrame;
use crate::config::DisplayConfig;
use crate::value::Value;

const IDX_WIDTH: usize = 5;
const CELL_WIDTH: usize = 15;

pub(crate) fn format_cell(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        other => other.to_string(),
    }
}

pub(crate) fn write_header(f: &mut fmt::Formatter<'_>, names: &[String]) -> fmt::Result {
    write!(f, "{:<width$} |", "idx", width = IDX_WIDTH)?;
    for name in names {
        write!(f, " {:<width$} |", name, width = CELL_WIDTH)?;
    }
    writeln!(f)?;

    write!(f, "{:-<width$}-+", "", width = IDX_WIDTH)?;
    for _ in names {
        write!(f, "-{:-<width$}-+", "", width = CELL_WIDTH)?;
    }
    writeln!(f)
}

pub(crate) fn write_row<'a, I>(f: &mut fmt::Formatter<'_>, label: &str, values: I) -> fmt::Result
where
    I: IntoIterator<Item = &'a Value>,
{
    write!(f, "{:<width$} |", label, width = IDX_WIDTH)?;
    for value in values {
        write!(f, " {:<width$} |", format_cell(value), width = CELL_WIDTH)?;
    }
    writeln!(f)
}

pub(crate) fn write_separator(f: &mut fmt::Formatter<'_>, ncol: usize) -> fmt::Result {
    write!(f, "{:<width$} |", "---", width = IDX_WIDTH)?;
    for _ in 0..ncol {
        write!(f, " {:<width$} |", "---", width = CELL_WIDTH)?;
    }
    writeln!(f)
}

impl DataFrame {
    /// Render at most `max_rows` rows
    pub fn render(&self, max_rows: usize) -> String {
        Preview {
            frame: self,
            max_rows,
        }
        .to_string()
    }
}

struct Preview<'a> {
    frame: &'a DataFrame,
    max_rows: usize,
}

impl fmt::Display for Preview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let df = self.frame;
        if df.ncol() == 0 {
            return write!(f, "DataFrame ({} rows x 0 columns)", df.nrow());
        }

        writeln!(f, "DataFrame ({} rows x {} columns):", df.nrow(), df.ncol())?;
        write_header(f, df.colnames())?;

        for row in df.rows().take(self.max_rows) {
            write_row(f, &row.position().to_string(), row.values())?;
        }

        if df.nrow() > self.max_rows {
            writeln!(f, "... ({} more rows)", df.nrow() - self.max_rows)?;
        }

        Ok(())
    }
}

impl fmt::Display for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max_rows = DisplayConfig::default().max_rows;
        fmt::Display::fmt(
            &Preview {
                frame: self,
                max_rows,
            },
            f,
        )
    }
}
