//! Sentence and word segmentation.
//!
//! Both segmenters follow Unicode Text Segmentation (UAX #29). Word
//! tokenization is treebank-style: punctuation marks become tokens of their
//! own, while contractions such as `don't` stay whole.

use unicode_segmentation::UnicodeSegmentation;

use crate::lexicon::Lexicon;

/// Splits `text` into sentences.
///
/// Only segments containing at least one alphabetic or numeric character are
/// returned, so stray punctuation and blank paragraphs never count as
/// sentences.
pub fn sentences(text: &str) -> Vec<&str> {
    text.unicode_sentences().map(str::trim).collect()
}

/// Splits `text` into word and punctuation tokens, dropping whitespace.
pub fn words(text: &str) -> Vec<&str> {
    text.split_word_bounds()
        .filter(|token| !token.trim().is_empty())
        .collect()
}

/// Keeps the tokens that are not stopwords, preserving order and duplicates.
pub fn clean_words<'a>(words: &[&'a str], stopwords: &Lexicon) -> Vec<&'a str> {
    words.iter().copied().filter(|word| !stopwords.contains(word)).collect()
}

/// Segmented view of one article's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream<'a> {
    pub sentences: Vec<&'a str>,
    pub words: Vec<&'a str>,
    pub cleaned_words: Vec<&'a str>,
}

impl<'a> TokenStream<'a> {
    pub fn new(text: &'a str, stopwords: &Lexicon) -> Self {
        let sentences = sentences(text);
        let words = words(text);
        let cleaned_words = clean_words(&words, stopwords);
        Self { sentences, words, cleaned_words }
    }
}
