//! CSV output formatter

use super::{escape_csv, Formatter, RecordView};
use crate::error::Result;

/// Formatter for CSV output
pub struct CsvFormatter {
    pub no_header: bool,
}

impl Formatter for CsvFormatter {
    fn format(&self, view: &RecordView<'_>) -> Result<String> {
        let mut lines: Vec<String> = Vec::with_capacity(view.records.len() + 1);

        if !self.no_header {
            lines.push(
                view.columns
                    .iter()
                    .map(|c| c.key())
                    .collect::<Vec<_>>()
                    .join(","),
            );
        }

        for record in view.records {
            lines.push(
                view.columns
                    .iter()
                    .map(|c| escape_csv(&c.value(record)))
                    .collect::<Vec<_>>()
                    .join(","),
            );
        }

        Ok(lines.join("\n"))
    }
}
