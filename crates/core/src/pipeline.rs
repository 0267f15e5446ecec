//! Row-by-row report generation.
//!
//! Each input row is fetched, scored and appended to the report in order.
//! Rows never affect each other: a failed fetch, an empty page or degenerate
//! text drops that row with a warning and processing moves on.

use std::future::Future;

use tracing::{debug, info, warn};

use crate::lexicon::Lexicons;
use crate::metrics::score_text;
use crate::report::{InputRow, Report, ReportRow};
use crate::{LexisError, Result};

/// Provides the paragraph text behind a URL.
pub trait ArticleSource {
    /// Returns the article text, or an error when it cannot be retrieved.
    fn fetch_text(&self, url: &str) -> impl Future<Output = Result<String>>;
}

/// A row that was left out of the report.
#[derive(Debug)]
pub struct SkippedRow {
    pub row: InputRow,
    pub reason: LexisError,
}

/// Progress notification for a single row.
#[derive(Debug)]
pub enum RowEvent<'a> {
    Started { index: usize, total: usize, row: &'a InputRow },
    Scored { index: usize, row: &'a ReportRow },
    Skipped { index: usize, skipped: &'a SkippedRow },
}

/// Result of a full run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub report: Report,
    pub skipped: Vec<SkippedRow>,
}

/// Fetches and scores articles against a fixed set of lexicons.
pub struct Pipeline<'a, S> {
    source: S,
    lexicons: &'a Lexicons,
}

impl<'a, S: ArticleSource> Pipeline<'a, S> {
    pub fn new(source: S, lexicons: &'a Lexicons) -> Self {
        Self { source, lexicons }
    }

    /// Fetches and scores a single row.
    ///
    /// # Errors
    ///
    /// Propagates the fetch error, returns [`LexisError::EmptyArticle`] when
    /// the page has no paragraph text, and [`LexisError::DegenerateText`]
    /// when the text cannot be scored.
    pub async fn analyze(&self, row: &InputRow) -> Result<ReportRow> {
        let text = self.source.fetch_text(&row.url).await?;
        if text.trim().is_empty() {
            return Err(LexisError::EmptyArticle);
        }

        let metrics = score_text(&text, self.lexicons)?;
        Ok(ReportRow::new(row.clone(), metrics))
    }

    /// Processes every row in order.
    pub async fn run(&self, rows: Vec<InputRow>) -> RunSummary {
        self.run_with_progress(rows, |_| {}).await
    }

    /// Processes every row in order, reporting progress through `on_event`.
    pub async fn run_with_progress<F>(&self, rows: Vec<InputRow>, mut on_event: F) -> RunSummary
    where
        F: FnMut(RowEvent<'_>),
    {
        let total = rows.len();
        let mut summary = RunSummary::default();

        for (index, row) in rows.into_iter().enumerate() {
            on_event(RowEvent::Started { index, total, row: &row });

            match self.analyze(&row).await {
                Ok(scored) => {
                    debug!(url_id = %row.url_id, words = scored.metrics.word_count, "scored article");
                    on_event(RowEvent::Scored { index, row: &scored });
                    summary.report.push(scored);
                }
                Err(reason) => {
                    warn!(url_id = %row.url_id, url = %row.url, error = %reason, "skipping row");
                    let skipped = SkippedRow { row, reason };
                    on_event(RowEvent::Skipped { index, skipped: &skipped });
                    summary.skipped.push(skipped);
                }
            }
        }

        info!(scored = summary.report.len(), skipped = summary.skipped.len(), "run finished");
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use std::collections::HashMap;

    struct StaticSource {
        pages: HashMap<&'static str, &'static str>,
    }

    impl ArticleSource for StaticSource {
        async fn fetch_text(&self, url: &str) -> Result<String> {
            self.pages
                .get(url)
                .map(|text| text.to_string())
                .ok_or_else(|| LexisError::InvalidUrl(url.to_string()))
        }
    }

    fn source() -> StaticSource {
        let pages = HashMap::from([
            ("https://a.test", "I love this. It is wonderful and great."),
            ("https://b.test", "This is bad. Really bad."),
            ("https://empty.test", "  \n"),
            ("https://stop.test", "The end."),
        ]);
        StaticSource { pages }
    }

    fn lexicons() -> Lexicons {
        Lexicons::new(
            Lexicon::from_words(["love", "wonderful", "great"]),
            Lexicon::from_words(["bad"]),
            Lexicon::from_words(["the", "end", "."]),
        )
    }

    #[tokio::test]
    async fn test_failed_fetch_is_skipped_and_later_rows_run() {
        let lexicons = lexicons();
        let pipeline = Pipeline::new(source(), &lexicons);
        let rows = vec![
            InputRow::new("1", "https://a.test"),
            InputRow::new("2", "https://missing.test"),
            InputRow::new("3", "https://b.test"),
        ];

        let summary = pipeline.run(rows).await;

        let ids: Vec<&str> = summary.report.rows().iter().map(|r| r.url_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(summary.skipped.len(), 1);
        assert_eq!(summary.skipped[0].row.url_id, "2");
        assert!(matches!(summary.skipped[0].reason, LexisError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_empty_article_never_reaches_engine() {
        let lexicons = lexicons();
        let pipeline = Pipeline::new(source(), &lexicons);
        let result = pipeline.analyze(&InputRow::new("e", "https://empty.test")).await;
        assert!(matches!(result, Err(LexisError::EmptyArticle)));
    }

    #[tokio::test]
    async fn test_degenerate_text_is_skipped() {
        let lexicons = lexicons();
        let pipeline = Pipeline::new(source(), &lexicons);
        let summary = pipeline.run(vec![InputRow::new("s", "https://stop.test")]).await;

        assert!(summary.report.is_empty());
        assert!(matches!(summary.skipped[0].reason, LexisError::DegenerateText { .. }));
    }

    #[tokio::test]
    async fn test_scores_carry_input_identifiers() {
        let lexicons = lexicons();
        let pipeline = Pipeline::new(source(), &lexicons);
        let row = pipeline.analyze(&InputRow::new("bctech2011", "https://b.test")).await.unwrap();

        assert_eq!(row.url_id, "bctech2011");
        assert_eq!(row.url, "https://b.test");
        assert_eq!(row.metrics.negative_score, 2);
        assert_eq!(row.metrics.positive_score, 0);
    }

    #[tokio::test]
    async fn test_progress_events() {
        let lexicons = lexicons();
        let pipeline = Pipeline::new(source(), &lexicons);
        let rows = vec![InputRow::new("1", "https://a.test"), InputRow::new("2", "https://missing.test")];

        let mut events = Vec::new();
        pipeline
            .run_with_progress(rows, |event| {
                events.push(match event {
                    RowEvent::Started { index, total, .. } => format!("start {}/{}", index, total),
                    RowEvent::Scored { index, .. } => format!("scored {}", index),
                    RowEvent::Skipped { index, .. } => format!("skipped {}", index),
                })
            })
            .await;

        assert_eq!(events, vec!["start 0/2", "scored 0", "start 1/2", "skipped 1"]);
    }

    #[tokio::test]
    async fn test_empty_input_gives_empty_report() {
        let lexicons = lexicons();
        let summary = Pipeline::new(source(), &lexicons).run(Vec::new()).await;
        assert!(summary.report.is_empty());
        assert!(summary.skipped.is_empty());
    }
}
