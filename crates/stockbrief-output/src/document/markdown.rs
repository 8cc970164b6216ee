use super::{Block, DocumentSink, HeadingLevel};

/// Markdown document.
///
/// Markdown has no underline syntax, so labels use inline `<u>` tags, which
/// common renderers accept. Values follow on a hard line break. Text is
/// backslash-escaped so upstream strings cannot inject markup.
#[derive(Debug, Clone, Default)]
pub struct MarkdownDocument {
    blocks: Vec<Block>,
}

impl MarkdownDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '>' | '#' | '|' => {
                escaped.push('\\');
                escaped.push(c);
            }
            // Keep each value inside its own paragraph.
            '\n' | '\r' => escaped.push(' '),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl DocumentSink for MarkdownDocument {
    fn extension(&self) -> &'static str {
        "md"
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

        for block in &self.blocks {
            match block {
                Block::Heading { level, text } => {
                    let prefix = match level {
                        HeadingLevel::Title => "#",
                        HeadingLevel::Section => "##",
                    };
                    output.push_str(&format!("{prefix} {}\n\n", escape(text)));
                }
                Block::Paragraph { label, value } => {
                    output.push_str(&format!(
                        "<u>{}</u>  \n{}\n\n",
                        escape(label),
                        escape(value)
                    ));
                }
            }
        }

        output
    }
}
