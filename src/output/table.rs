//! Table output formatter

use comfy_table::{presets::NOTHING, Table};

use super::{Formatter, RecordView};
use crate::error::Result;

/// Aligned columns without borders, followed by a total line
pub struct TableFormatter {
    pub no_header: bool,
}

impl Formatter for TableFormatter {
    fn format(&self, view: &RecordView<'_>) -> Result<String> {
        let mut table = Table::new();
        table.load_preset(NOTHING);

        if !self.no_header {
            table.set_header(view.columns.iter().map(|c| c.header).collect::<Vec<_>>());
        }

        for record in view.records {
            table.add_row(
                view.columns
                    .iter()
                    .map(|c| c.value(record))
                    .collect::<Vec<_>>(),
            );
        }

        let mut out = table.to_string();
        if !self.no_header {
            out.push_str(&format!("\n\nTotal: {} {}", view.records.len(), view.label));
        }
        Ok(out)
    }
}
