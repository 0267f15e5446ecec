//! Input rows and the output report.
//!
//! The input table is an xlsx workbook (first worksheet) or a CSV file with
//! `URL_ID` and `URL` columns; any other columns are ignored. The report keeps one [`ReportRow`] per scored article,
//! in input order.

use std::io::Read;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::metrics::MetricsRecord;
use crate::{LexisError, Result};

/// One article to fetch and score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRow {
    /// Opaque identifier, carried through to the report unchanged.
    #[serde(rename = "URL_ID")]
    pub url_id: String,
    #[serde(rename = "URL")]
    pub url: String,
}

impl InputRow {
    pub fn new(url_id: impl Into<String>, url: impl Into<String>) -> Self {
        Self { url_id: url_id.into(), url: url.into() }
    }
}

/// A scored article.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "URL_ID")]
    pub url_id: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(flatten)]
    pub metrics: MetricsRecord,
}

impl ReportRow {
    pub fn new(input: InputRow, metrics: MetricsRecord) -> Self {
        Self { url_id: input.url_id, url: input.url, metrics }
    }
}

/// Ordered collection of scored articles.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Report {
    rows: Vec<ReportRow>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: ReportRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<ReportRow> for Report {
    fn from_iter<I: IntoIterator<Item = ReportRow>>(iter: I) -> Self {
        Self { rows: iter.into_iter().collect() }
    }
}

/// Reads input rows from any CSV source.
pub fn read_input<R: Read>(reader: R) -> Result<Vec<InputRow>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    rdr.deserialize::<InputRow>().map(|row| row.map_err(LexisError::from)).collect()
}

const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| WORKBOOK_EXTENSIONS.iter().any(|w| ext.eq_ignore_ascii_case(w)))
}

/// Renders a cell as an opaque identifier or URL.
///
/// Spreadsheets store numeric ids as floats, so integral values drop the
/// trailing `.0` and `37` stays `"37"`.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(n) => n.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        other => other.to_string().trim().to_string(),
    }
}

fn column_index(header: &[Data], name: &str) -> Result<usize> {
    header
        .iter()
        .position(|cell| cell_text(cell) == name)
        .ok_or_else(|| LexisError::MissingColumn { column: name.to_string() })
}

/// Reads input rows from the first worksheet of a workbook.
///
/// The first row is the header. Rows where both `URL_ID` and `URL` are blank
/// are skipped.
///
/// # Errors
///
/// Returns [`LexisError::Workbook`] when the file cannot be opened as a
/// workbook and [`LexisError::MissingColumn`] when the header lacks `URL_ID`
/// or `URL`.
pub fn read_input_workbook(path: impl AsRef<Path>) -> Result<Vec<InputRow>> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path)?;
    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range?,
        None => return Err(calamine::Error::Msg("workbook has no worksheets").into()),
    };

    let mut rows = range.rows();
    let header = rows.next().unwrap_or_default();
    let id_col = column_index(header, "URL_ID")?;
    let url_col = column_index(header, "URL")?;

    let input: Vec<InputRow> = rows
        .map(|row| {
            let cell = |i: usize| row.get(i).map(cell_text).unwrap_or_default();
            InputRow::new(cell(id_col), cell(url_col))
        })
        .filter(|row| !(row.url_id.is_empty() && row.url.is_empty()))
        .collect();

    debug!(path = %path.display(), rows = input.len(), "read input workbook");
    Ok(input)
}

/// Reads input rows from an xlsx/xls/ods workbook or a CSV file, chosen by
/// extension.
///
/// # Errors
///
/// Returns [`LexisError::FileNotFound`] when the file is missing,
/// [`LexisError::Csv`] when a CSV row lacks `URL_ID` or `URL`, and the
/// errors of [`read_input_workbook`] for workbooks.
pub fn read_input_file(path: impl AsRef<Path>) -> Result<Vec<InputRow>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LexisError::FileNotFound(path.to_path_buf()));
    }
    if is_workbook(path) {
        return read_input_workbook(path);
    }
    read_input(std::fs::File::open(path)?)
}
