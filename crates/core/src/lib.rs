pub mod error;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod formatters;
pub mod lexicon;
pub mod metrics;
pub mod parse;
pub mod pipeline;
pub mod report;
pub mod syllables;
pub mod tokenize;

pub use error::{LexisError, Result};
#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, HttpSource, fetch_article_text, fetch_file};
pub use formatters::{
    JsonConfig, OutputFormat, TableConfig, XlsxConfig, convert_to_json, convert_to_table, convert_to_xlsx,
    render_report, write_report, write_xlsx,
};
pub use lexicon::{Encoding, Lexicon, LexiconPaths, Lexicons};
pub use metrics::{EPSILON, FIELD_NAMES, MetricValue, MetricsRecord, compute_metrics, score_text};
pub use parse::Document;
pub use pipeline::{ArticleSource, Pipeline, RowEvent, RunSummary, SkippedRow};
pub use report::{InputRow, Report, ReportRow, read_input, read_input_file, read_input_workbook};
#[doc(hidden)]
pub use tokenize::TokenStream;
