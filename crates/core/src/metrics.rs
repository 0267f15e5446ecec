//! Readability and sentiment metrics for a single article.
//!
//! [`compute_metrics`] segments the text, drops stopwords and derives the
//! thirteen scores of a [`MetricsRecord`]. It is a pure function of its
//! arguments: the same text and lexicons always give a bit-identical record.
//!
//! # Example
//!
//! ```rust
//! use lexis_core::lexicon::Lexicon;
//! use lexis_core::metrics::compute_metrics;
//!
//! let positive = Lexicon::from_words(["love", "wonderful", "great"]);
//! let negative = Lexicon::default();
//! let stopwords = Lexicon::default();
//!
//! let record = compute_metrics("I love this. It is wonderful and great.", &positive, &negative, &stopwords).unwrap();
//! assert_eq!(record.positive_score, 3);
//! assert_eq!(record.negative_score, 0);
//! assert!(record.polarity_score > 0.99);
//! ```

use std::fmt;

use serde::Serialize;

use crate::lexicon::{Lexicon, Lexicons};
use crate::syllables;
use crate::tokenize::TokenStream;
use crate::{LexisError, Result};

/// Added to the polarity and subjectivity denominators.
pub const EPSILON: f64 = 0.000001;

/// Tokens counted as first-person pronouns, matched whole and case-insensitively.
pub const PERSONAL_PRONOUNS: [&str; 5] = ["i", "we", "my", "ours", "us"];

/// Column names, in report order.
pub const FIELD_NAMES: [&str; 13] = [
    "POSITIVE SCORE",
    "NEGATIVE SCORE",
    "POLARITY SCORE",
    "SUBJECTIVITY SCORE",
    "AVG SENTENCE LENGTH",
    "PERCENTAGE OF COMPLEX WORDS",
    "FOG INDEX",
    "AVG NUMBER OF WORDS PER SENTENCE",
    "COMPLEX WORD COUNT",
    "WORD COUNT",
    "SYLLABLE PER WORD",
    "PERSONAL PRONOUNS",
    "AVG WORD LENGTH",
];

/// The thirteen scores computed for one article.
///
/// All word-based figures are taken over the cleaned words, i.e. the tokens
/// left after stopword removal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricsRecord {
    #[serde(rename = "POSITIVE SCORE")]
    pub positive_score: usize,
    #[serde(rename = "NEGATIVE SCORE")]
    pub negative_score: usize,
    /// `(positive - negative) / (positive + negative + EPSILON)`.
    #[serde(rename = "POLARITY SCORE")]
    pub polarity_score: f64,
    /// `(positive + negative) / (word_count + EPSILON)`.
    #[serde(rename = "SUBJECTIVITY SCORE")]
    pub subjectivity_score: f64,
    /// Cleaned words over raw sentence count.
    #[serde(rename = "AVG SENTENCE LENGTH")]
    pub avg_sentence_length: f64,
    #[serde(rename = "PERCENTAGE OF COMPLEX WORDS")]
    pub percentage_complex_words: f64,
    /// `0.4 * (avg_sentence_length + percentage_complex_words)`.
    #[serde(rename = "FOG INDEX")]
    pub fog_index: f64,
    /// Same value as `avg_sentence_length`; kept as its own report column.
    #[serde(rename = "AVG NUMBER OF WORDS PER SENTENCE")]
    pub avg_words_per_sentence: f64,
    #[serde(rename = "COMPLEX WORD COUNT")]
    pub complex_word_count: usize,
    #[serde(rename = "WORD COUNT")]
    pub word_count: usize,
    #[serde(rename = "SYLLABLE PER WORD")]
    pub syllables_per_word: f64,
    #[serde(rename = "PERSONAL PRONOUNS")]
    pub personal_pronouns: usize,
    #[serde(rename = "AVG WORD LENGTH")]
    pub avg_word_length: f64,
}

/// A single report cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Count(usize),
    Ratio(f64),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Count(n) => write!(f, "{}", n),
            MetricValue::Ratio(x) => write!(f, "{}", x),
        }
    }
}

impl MetricValue {
    pub fn as_f64(self) -> f64 {
        match self {
            MetricValue::Count(n) => n as f64,
            MetricValue::Ratio(x) => x,
        }
    }
}

impl MetricsRecord {
    /// Values in the same order as [`FIELD_NAMES`].
    pub fn values(&self) -> [MetricValue; 13] {
        use MetricValue::{Count, Ratio};
        [
            Count(self.positive_score),
            Count(self.negative_score),
            Ratio(self.polarity_score),
            Ratio(self.subjectivity_score),
            Ratio(self.avg_sentence_length),
            Ratio(self.percentage_complex_words),
            Ratio(self.fog_index),
            Ratio(self.avg_words_per_sentence),
            Count(self.complex_word_count),
            Count(self.word_count),
            Ratio(self.syllables_per_word),
            Count(self.personal_pronouns),
            Ratio(self.avg_word_length),
        ]
    }

    /// Looks a field up by its report column name.
    pub fn get(&self, name: &str) -> Option<MetricValue> {
        FIELD_NAMES
            .iter()
            .position(|field| *field == name)
            .map(|i| self.values()[i])
    }
}

/// Computes every metric for `text`.
///
/// # Errors
///
/// Returns [`LexisError::DegenerateText`] when the text has no sentences or
/// no words survive stopword removal, since the per-sentence and per-word
/// ratios would divide by zero.
pub fn compute_metrics(
    text: &str, positive: &Lexicon, negative: &Lexicon, stopwords: &Lexicon,
) -> Result<MetricsRecord> {
    let stream = TokenStream::new(text, stopwords);
    let sentence_count = stream.sentences.len();
    let word_count = stream.cleaned_words.len();

    if sentence_count == 0 || word_count == 0 {
        return Err(LexisError::DegenerateText { sentences: sentence_count, words: word_count });
    }

    let mut positive_score = 0;
    let mut negative_score = 0;
    let mut complex_word_count = 0;
    let mut syllable_count = 0;
    let mut personal_pronouns = 0;
    let mut char_count = 0;

    for word in &stream.cleaned_words {
        let lower = word.to_lowercase();

        if positive.contains(&lower) {
            positive_score += 1;
        }
        if negative.contains(&lower) {
            negative_score += 1;
        }

        if syllables::is_complex(word) {
            complex_word_count += 1;
        }
        syllable_count += syllables::estimate(word);
        char_count += word.chars().count();

        if PERSONAL_PRONOUNS.contains(&lower.as_str()) {
            personal_pronouns += 1;
        }
    }

    let words = word_count as f64;
    let avg_sentence_length = words / sentence_count as f64;
    let percentage_complex_words = (complex_word_count as f64 / words) * 100.0;
    let scored = (positive_score + negative_score) as f64;

    Ok(MetricsRecord {
        positive_score,
        negative_score,
        polarity_score: (positive_score as f64 - negative_score as f64) / (scored + EPSILON),
        subjectivity_score: scored / (words + EPSILON),
        avg_sentence_length,
        percentage_complex_words,
        fog_index: 0.4 * (avg_sentence_length + percentage_complex_words),
        avg_words_per_sentence: words / sentence_count as f64,
        complex_word_count,
        word_count,
        syllables_per_word: syllable_count as f64 / words,
        personal_pronouns,
        avg_word_length: char_count as f64 / words,
    })
}

/// Computes metrics with a bundle of loaded lexicons.
pub fn score_text(text: &str, lexicons: &Lexicons) -> Result<MetricsRecord> {
    compute_metrics(text, &lexicons.positive, &lexicons.negative, &lexicons.stopwords)
}
