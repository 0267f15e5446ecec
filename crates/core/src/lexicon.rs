//! Word lists used for sentiment scoring and stopword removal.
//!
//! A [`Lexicon`] is an immutable set of lowercase words. [`Lexicons`] bundles
//! the three instances a metrics computation needs: positive words, negative
//! words and the union of every stopword category.
//!
//! Files hold one word per line. Lines are trimmed and lowercased; blank lines
//! and `;` comment lines are skipped.
//!
//! # Example
//!
//! ```rust
//! use lexis_core::lexicon::Lexicon;
//!
//! let lexicon = Lexicon::from_words(["Good", "  great "]);
//! assert!(lexicon.contains("GOOD"));
//! assert!(lexicon.contains("great"));
//! assert_eq!(lexicon.len(), 2);
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{LexisError, Result};

/// Stopword category files, unioned into a single stopword lexicon.
pub const STOPWORD_FILES: [&str; 7] = [
    "StopWords_Auditor.txt",
    "StopWords_Currencies.txt",
    "StopWords_DatesandNumbers.txt",
    "StopWords_Generic.txt",
    "StopWords_GenericLong.txt",
    "StopWords_Geographic.txt",
    "StopWords_Names.txt",
];

pub const POSITIVE_FILE: &str = "positive-words.txt";
pub const NEGATIVE_FILE: &str = "negative-words.txt";

/// Text encoding of a lexicon file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Strict UTF-8; invalid sequences are an error.
    Utf8,
    /// ISO-8859-1. Every byte maps to the code point of the same value, so
    /// decoding never fails.
    Latin1,
}

impl Encoding {
    pub(crate) fn decode(self, bytes: Vec<u8>, path: &Path) -> Result<String> {
        match self {
            Encoding::Utf8 => {
                String::from_utf8(bytes).map_err(|_| LexisError::InvalidEncoding { path: path.to_path_buf() })
            }
            Encoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
        }
    }
}

/// An immutable set of lowercase reference words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    /// Builds a lexicon from in-memory words, normalizing each one.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words.into_iter().filter_map(|w| normalize_line(w.as_ref())).collect();
        Self { words }
    }

    /// Parses file contents, one word per line.
    pub fn parse(contents: &str) -> Self {
        Self::from_words(contents.lines())
    }

    /// Loads and unions every file in `paths`, decoding each with `encoding`.
    ///
    /// # Errors
    ///
    /// Returns [`LexisError::FileNotFound`] for a missing file and
    /// [`LexisError::InvalidEncoding`] when a UTF-8 file is malformed.
    pub fn load<P: AsRef<Path>>(paths: &[P], encoding: Encoding) -> Result<Self> {
        let mut lexicon = Self::default();

        for path in paths {
            let path = path.as_ref();
            if !path.exists() {
                return Err(LexisError::FileNotFound(path.to_path_buf()));
            }

            let contents = encoding.decode(fs::read(path)?, path)?;
            let before = lexicon.len();
            lexicon.words.extend(contents.lines().filter_map(normalize_line));
            debug!(path = %path.display(), added = lexicon.len() - before, "loaded lexicon file");
        }

        Ok(lexicon)
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Adds a word, returning whether it was new.
    pub fn insert(&mut self, word: &str) -> bool {
        match normalize_line(word) {
            Some(w) => self.words.insert(w),
            None => false,
        }
    }
}

fn normalize_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with(';') {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Locations of the nine lexicon files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconPaths {
    pub positive: PathBuf,
    pub negative: PathBuf,
    pub stopwords: Vec<PathBuf>,
}

impl LexiconPaths {
    /// Resolves the fixed file names against `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            positive: dir.join(POSITIVE_FILE),
            negative: dir.join(NEGATIVE_FILE),
            stopwords: STOPWORD_FILES.iter().map(|name| dir.join(name)).collect(),
        }
    }
}

impl Default for LexiconPaths {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

/// The three read-only lexicons threaded into every metrics computation.
#[derive(Debug, Clone, Default)]
pub struct Lexicons {
    pub positive: Lexicon,
    pub negative: Lexicon,
    pub stopwords: Lexicon,
}

impl Lexicons {
    pub fn new(positive: Lexicon, negative: Lexicon, stopwords: Lexicon) -> Self {
        Self { positive, negative, stopwords }
    }

    /// Loads all lexicons: positive words as UTF-8, negative words and
    /// stopwords as Latin-1.
    pub fn load(paths: &LexiconPaths) -> Result<Self> {
        let positive = Lexicon::load(std::slice::from_ref(&paths.positive), Encoding::Utf8)?;
        let negative = Lexicon::load(std::slice::from_ref(&paths.negative), Encoding::Latin1)?;
        let stopwords = Lexicon::load(&paths.stopwords, Encoding::Latin1)?;

        debug!(
            positive = positive.len(),
            negative = negative.len(),
            stopwords = stopwords.len(),
            "lexicons ready"
        );

        Ok(Self { positive, negative, stopwords })
    }
}
