use super::{Block, DocumentSink, HeadingLevel};

/// Plain-text document.
///
/// Titles are underlined with `=`, sections with `-` and labels with `~`.
#[derive(Debug, Clone, Default)]
pub struct TextDocument {
    blocks: Vec<Block>,
}

impl TextDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }
}

fn underline(output: &mut String, text: &str, marker: char) {
    output.push_str(text);
    output.push('\n');
    output.extend(std::iter::repeat_n(marker, text.chars().count()));
    output.push('\n');
}

impl DocumentSink for TextDocument {
    fn extension(&self) -> &'static str {
        "txt"
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
                    let marker = match level {
                        HeadingLevel::Title => '=',
                        HeadingLevel::Section => '-',
                    };
                    underline(&mut output, text, marker);
                }
                Block::Paragraph { label, value } => {
                    underline(&mut output, label, '~');
                    output.push_str(value);
                    output.push('\n');
                }
            }
            output.push('\n');
        }

        output
    }
}
