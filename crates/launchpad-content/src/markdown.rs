//! Markdown to HTML conversion.

use pulldown_cmark::{html, Options, Parser};

/// Errors reported by a markdown renderer.
#[derive(Debug, thiserror::Error)]
#[error("Markdown rendering failed: {0}")]
pub struct MarkdownError(pub String);

/// Something that can turn markdown into HTML.
pub trait MarkdownRenderer: Send + Sync {
    fn parse(&self, markdown: &str) -> Result<String, MarkdownError>;
}

/// CommonMark renderer backed by pulldown-cmark.
#[derive(Debug, Clone, Copy, Default)]
pub struct PulldownRenderer;

impl PulldownRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl MarkdownRenderer for PulldownRenderer {
    fn parse(&self, markdown: &str) -> Result<String, MarkdownError> {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS;

        let parser = Parser::new_ext(markdown, options);

        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        Ok(html_output)
    }
}
