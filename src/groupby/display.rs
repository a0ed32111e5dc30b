//! Bounded text preview of a grouped table

use std::fmt;

use super::grouped::GroupedDataFrame;
use crate::dataframe::display::{write_header, write_row, write_separator};

impl fmt::Display for GroupedDataFrame {
    /// Shows the first `display.max_groups` groups, at most
    /// `display.max_rows_per_group` rows each, with a `---` row between groups.
    /// Row labels are base-table positions.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display = &self.config().display;
        let base = self.ungroup();

        writeln!(
            f,
            "GroupedDataFrame ({} rows x {} columns, {} groups by [{}]):",
            base.nrow(),
            base.ncol(),
            self.group_count(),
            self.grouping_colnames().join(", ")
        )?;
        write_header(f, base.colnames())?;

        let shown = self.group_count().min(display.max_groups);
        for (i, group) in self.groups().take(shown).enumerate() {
            if i > 0 {
                write_separator(f, base.ncol())?;
            }
            for (row, &pos) in group
                .rows()
                .zip(group.row_positions())
                .take(display.max_rows_per_group)
            {
                write_row(f, &pos.to_string(), row.values())?;
            }
        }

        if self.group_count() > shown {
            writeln!(f, "... ({} more groups)", self.group_count() - shown)?;
        }
        Ok(())
    }
}
