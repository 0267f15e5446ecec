pub mod json;
pub mod table;
pub mod xlsx;

pub use json::{JsonConfig, convert_to_json, report_to_value};
pub use table::{TableConfig, convert_to_table, write_table};
pub use xlsx::{XlsxConfig, convert_to_xlsx, write_xlsx};

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::Result;
use crate::report::Report;

/// Report file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Xlsx,
    Csv,
    Json,
}

impl OutputFormat {
    /// Infers the format from a file extension. `.csv` and `.json` select
    /// text output; anything else is written as an xlsx workbook.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Xlsx,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xlsx" => Ok(Self::Xlsx),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: xlsx, csv, json", s)),
        }
    }
}

/// Renders `report` in `format` as the bytes of the output file.
pub fn render_report(report: &Report, format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Xlsx => convert_to_xlsx(report, &XlsxConfig::default()),
        OutputFormat::Csv => Ok(convert_to_table(report, &TableConfig::default())?.into_bytes()),
        OutputFormat::Json => Ok(convert_to_json(report, &JsonConfig { pretty: true })?.into_bytes()),
    }
}

/// Writes `report` to `path` in `format`, replacing any existing file.
pub fn write_report(report: &Report, path: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Xlsx => write_xlsx(report, path, &XlsxConfig::default()),
        _ => {
            fs::write(path, render_report(report, format)?)?;
            Ok(())
        }
    }
}
