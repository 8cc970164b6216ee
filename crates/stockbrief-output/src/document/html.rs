use super::{Block, DocumentSink, HeadingLevel};

/// Standalone HTML page.
#[derive(Debug, Clone, Default)]
pub struct HtmlDocument {
    blocks: Vec<Block>,
}

impl HtmlDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    fn title(&self) -> &str {
        self.blocks
            .iter()
            .find_map(|block| match block {
                Block::Heading {
                    level: HeadingLevel::Title,
                    text,
                } => Some(text.as_str()),
                _ => None,
            })
            .unwrap_or_default()
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl DocumentSink for HtmlDocument {
    fn extension(&self) -> &'static str {
        "html"
    }

    fn add_heading(&mut self, text: &str, level: HeadingLevel) {
        self.blocks.push(Block::Heading {
            level,
            text: text.to_string(),
        });
    }

    fn add_labeled_paragraph(&mut self, label: &str, value: &str) {
        self.blocks.push(Block::Paragraph {
            label: label.to_string(),
            value: value.to_string(),
        });
    }

    fn render(&self) -> String {
        let mut output = String::new();

        output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        output.push_str("<meta charset=\"utf-8\">\n");
        output.push_str(&format!("<title>{}</title>\n", escape(self.title())));
        output.push_str("</head>\n<body>\n");

        for block in &self.blocks {
            match block {
                Block::Heading { level, text } => {
                    let tag = match level {
                        HeadingLevel::Title => "h1",
                        HeadingLevel::Section => "h2",
                    };
                    output.push_str(&format!("<{tag}>{}</{tag}>\n", escape(text)));
                }
                Block::Paragraph { label, value } => {
                    output.push_str(&format!(
                        "<p><u>{}</u><br>{}</p>\n",
                        escape(label),
                        escape(value)
                    ));
                }
            }
        }

        output.push_str("</body>\n</html>\n");
        output
    }
}
