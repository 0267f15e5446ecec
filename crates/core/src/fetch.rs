//! Article fetching from URLs and local files.
//!
//! This module retrieves HTML for a report row and reduces it to the
//! paragraph text the metrics are computed on. `http`/`https` URLs go through
//! reqwest; `file://` URLs are read from disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use crate::lexicon::Encoding;
use crate::parse::Document;
use crate::pipeline::ArticleSource;
use crate::{LexisError, Result};

/// HTTP client configuration for fetching web pages.
///
/// This struct controls timeout and user agent settings for HTTP requests.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 30, user_agent: "Mozilla/5.0 (compatible; Lexis/1.0)".to_string() }
    }
}

/// Article source backed by a reusable HTTP client.
///
/// One client is built per run and shared by every row, so connection pools
/// survive across articles hosted on the same site.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    config: FetchConfig,
}

impl HttpSource {
    /// Builds the HTTP client from `config`.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(LexisError::HttpError)?;

        Ok(Self { client, config })
    }

    /// Fetches the raw HTML behind `url`.
    ///
    /// Redirects are followed. A non-success status is logged but the body is
    /// still returned, since error pages are scored like any other page.
    pub async fn fetch_html(&self, url: &str) -> Result<String> {
        let parsed_url = Url::parse(url).map_err(|e| LexisError::InvalidUrl(format!("{}: {}", url, e)))?;

        match parsed_url.scheme() {
            "http" | "https" => {}
            "file" => {
                let path = parsed_url
                    .to_file_path()
                    .map_err(|_| LexisError::InvalidUrl(format!("{}: not a local path", url)))?;
                return fetch_file(path);
            }
            other => {
                return Err(LexisError::InvalidUrl(format!(
                    "{}: unsupported scheme {} (expected http, https or file)",
                    url, other
                )));
            }
        }

        let response = self
            .client
            .get(parsed_url)
            .header("User-Agent", &self.config.user_agent)
            .header(
                "Accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LexisError::Timeout { timeout: self.config.timeout }
                } else {
                    LexisError::HttpError(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, %status, "non-success status, scoring the returned page anyway");
        }

        let content = response.text().await?;
        debug!(url, bytes = content.len(), "fetched page");

        Ok(content)
    }
}

impl ArticleSource for HttpSource {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let html = self.fetch_html(url).await?;
        Ok(Document::parse(&html).paragraph_text())
    }
}

/// Fetches the paragraph text of a single article with a one-off client.
pub async fn fetch_article_text(url: &str, config: &FetchConfig) -> Result<String> {
    HttpSource::new(config.clone())?.fetch_text(url).await
}

/// Reads HTML content from a local file.
///
/// Pages that are not valid UTF-8 are decoded as Latin-1, so a saved
/// single-byte page is scored instead of failing.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn fetch_file(path: impl AsRef<Path>) -> Result<String> {
    let path_buf = PathBuf::from(path.as_ref());

    if !path_buf.exists() {
        return Err(LexisError::FileNotFound(path_buf));
    }

    let bytes = fs::read(&path_buf)?;
    match String::from_utf8(bytes) {
        Ok(html) => Ok(html),
        Err(e) => {
            debug!(path = %path_buf.display(), "local page is not UTF-8, decoding as Latin-1");
            Encoding::Latin1.decode(e.into_bytes(), &path_buf)
        }
    }
}
