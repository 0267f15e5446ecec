//! Error types for Lexis operations.
//!
//! This module defines the main error type [`LexisError`] which represents
//! every failure that can occur while loading lexicons, fetching articles,
//! computing metrics and reading or writing report tables.
//!
//! # Example
//!
//! ```rust
//! use lexis_core::{LexisError, Result};
//!
//! fn require_text(text: &str) -> Result<&str> {
//!     if text.trim().is_empty() {
//!         return Err(LexisError::EmptyArticle);
//!     }
//!     Ok(text)
//! }
//!
//! assert!(require_text("   ").is_err());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fetching and scoring operations.
///
/// Per-row variants ([`LexisError::HttpError`], [`LexisError::Timeout`],
/// [`LexisError::InvalidUrl`], [`LexisError::EmptyArticle`],
/// [`LexisError::DegenerateText`]) cause a single report row to be skipped.
/// The remaining variants abort the run.
#[derive(Error, Debug)]
pub enum LexisError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    ///
    /// Returned when a URL cannot be parsed, is malformed, or uses a scheme
    /// the fetcher does not support.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors, usually an invalid CSS selector.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// A UTF-8 lexicon file contained invalid byte sequences.
    #[error("Invalid character encoding in {}", path.display())]
    InvalidEncoding { path: PathBuf },

    /// File not found.
    ///
    /// Returned when a lexicon, input table or local article is missing.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Standard I/O errors for file reads and writes.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed input table or failed table write.
    #[error("Table error: {0}")]
    Csv(#[from] csv::Error),

    /// Unreadable or malformed input workbook.
    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    /// Failed to build or save an xlsx report.
    #[error("Failed to write workbook: {0}")]
    WorkbookWrite(#[from] rust_xlsxwriter::XlsxError),

    /// The input table has no column with this header.
    #[error("Input table has no {column} column")]
    MissingColumn { column: String },

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The fetched page had no paragraph text.
    #[error("Article has no paragraph text")]
    EmptyArticle,

    /// Text produced no sentences or no words after stopword removal, so the
    /// per-sentence and per-word ratios are undefined.
    #[error("Text is degenerate ({sentences} sentences, {words} cleaned words)")]
    DegenerateText { sentences: usize, words: usize },
}

/// Result type alias for LexisError.
///
/// This is a convenience alias for `std::result::Result<T, LexisError>`.
pub type Result<T> = std::result::Result<T, LexisError>;
