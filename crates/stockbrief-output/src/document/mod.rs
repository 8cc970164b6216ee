//! Document sinks.
//!
//! A sink accepts headings and labeled paragraphs in order and writes the
//! finished document on [`DocumentSink::save`].

mod html;
mod markdown;
mod text;

pub use html::HtmlDocument;
pub use markdown::MarkdownDocument;
pub use text::TextDocument;

use crate::report::ReportError;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Heading depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// Document title
    Title,
    /// Section sub-heading
    Section,
}

/// Receives the report structure and produces a document.
pub trait DocumentSink: fmt::Debug {
    /// File extension, without the leading dot.
    fn extension(&self) -> &'static str;

    /// Append a heading.
    fn add_heading(&mut self, text: &str, level: HeadingLevel);

    /// Append a paragraph showing an underlined label with the value on the next line.
    fn add_labeled_paragraph(&mut self, label: &str, value: &str);

    /// The document as written so far.
    fn render(&self) -> String;

    /// Write the document to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn save(&self, path: &Path) -> Result<(), ReportError> {
        fs::write(path, self.render())?;
        Ok(())
    }
}

/// Content appended to a document, kept until rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Block {
    Heading { level: HeadingLevel, text: String },
    Paragraph { label: String, value: String },
}

/// Available document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    /// Plain text with underlined headings and labels
    #[default]
    Text,
    /// Markdown
    Markdown,
    /// Standalone HTML page
    Html,
}

impl DocumentFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
            Self::Html => "html",
        }
    }

    /// Create an empty document of this format.
    pub fn create_document(self) -> Box<dyn DocumentSink> {
        match self {
            Self::Text => Box::new(TextDocument::new()),
            Self::Markdown => Box::new(MarkdownDocument::new()),
            Self::Html => Box::new(HtmlDocument::new()),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for DocumentFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "txt" | "text" => Ok(Self::Text),
            "md" | "markdown" => Ok(Self::Markdown),
            "html" | "htm" => Ok(Self::Html),
            other => Err(ReportError::UnknownFormat(other.to_string())),
        }
    }
}
