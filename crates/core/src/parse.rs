//! HTML parsing and paragraph extraction.
//!
//! This module provides the [`Document`] and [`Element`] types for parsing
//! fetched HTML and pulling out the paragraph text the metrics are computed on.
//!
//! # Example
//!
//! ```rust
//! use lexis_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <body>
//!             <h1>Title</h1>
//!             <p>First paragraph.</p>
//!             <p>Second paragraph.</p>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html);
//! assert_eq!(doc.paragraph_text(), "First paragraph.\nSecond paragraph.\n");
//! ```

use scraper::{Html, Selector};

use crate::{LexisError, Result};

/// Represents a parsed HTML document.
///
/// A Document wraps an HTML page and provides methods for querying elements
/// using CSS selectors and collecting article text.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// Parsing is lenient: malformed markup is repaired the way browsers do,
    /// so this never fails.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`LexisError::HtmlParseError`] if the selector is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lexis_core::parse::Document;
    ///
    /// let html = r#"<p class="content">First</p><p class="content">Second</p>"#;
    /// let doc = Document::parse(html);
    /// let elements = doc.select("p.content").unwrap();
    /// assert_eq!(elements.len(), 2);
    /// ```
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel =
            Selector::parse(selector).map_err(|e| LexisError::HtmlParseError(format!("Invalid selector: {}", e)))?;

        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Concatenates the text of every `<p>` element in document order.
    ///
    /// Each paragraph is followed by a newline, so the last paragraph's final
    /// sentence is always terminated by a paragraph break.
    pub fn paragraph_text(&self) -> String {
        let Ok(paragraphs) = self.select("p") else {
            return String::new();
        };

        paragraphs.iter().fold(String::new(), |mut acc, p| {
            acc.push_str(&p.text());
            acc.push('\n');
            acc
        })
    }
}

/// A wrapper around scraper's ElementRef.
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the text content of this element.
    ///
    /// Returns the concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }
}
