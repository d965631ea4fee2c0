//! Output formatting module
//!
//! Records are rendered through a column view: table and CSV show the
//! selected columns, JSON and YAML print the full records.

mod columns;
mod common;
mod csv;
mod json;
mod table;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::ibm::Record;

pub use self::columns::*;
pub use self::common::escape_csv;
pub use self::csv::CsvFormatter;
pub use self::json::{JsonFormatter, YamlFormatter};
pub use self::table::TableFormatter;

/// One displayed column: header plus the dotted field path it reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    pub field: &'static str,
    /// Shown when the field is absent or null
    pub default: &'static str,
}

impl Column {
    pub const fn new(header: &'static str, field: &'static str) -> Self {
        Self {
            header,
            field,
            default: "",
        }
    }

    pub const fn or(self, default: &'static str) -> Self {
        Self { default, ..self }
    }

    /// Display value of this column for `record`
    pub fn value(&self, record: &Record) -> String {
        let value = record.display_field(self.field);
        if value.is_empty() {
            self.default.to_string()
        } else {
            value
        }
    }

    /// Machine-friendly header for CSV (`activity.authn_count` → `activity_authn_count`)
    pub fn key(&self) -> String {
        self.field.replace('.', "_")
    }
}

/// Records plus the columns and label to render them with
pub struct RecordView<'a> {
    pub records: &'a [Record],
    pub columns: &'a [Column],
    /// Plural noun for the total line ("projects", "service IDs")
    pub label: &'a str,
}

/// Trait for output formatters
pub trait Formatter {
    /// Render the view to a string ready for stdout
    fn format(&self, view: &RecordView<'_>) -> Result<String>;
}

/// Formatter for the requested output format
pub fn formatter_for(format: OutputFormat, no_header: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter { no_header }),
        OutputFormat::Csv => Box::new(CsvFormatter { no_header }),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Yaml => Box::new(YamlFormatter),
    }
}

/// Print records in the requested format
pub fn output_records(
    records: &[Record],
    columns: &[Column],
    label: &str,
    format: OutputFormat,
    no_header: bool,
) -> Result<()> {
    let view = RecordView {
        records,
        columns,
        label,
    };
    let rendered = formatter_for(format, no_header).format(&view)?;
    println!("{}", rendered);
    Ok(())
}
