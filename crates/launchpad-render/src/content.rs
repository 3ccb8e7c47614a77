//! Markdown content body.

use serde::Serialize;

use launchpad_content::MarkdownRenderer;

use crate::surface::Surface;

/// Rendered page body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ContentBody {
    /// HTML produced by a markdown renderer
    Html(String),

    /// Raw markdown shown as plain text
    Text(String),
}

impl ContentBody {
    /// Convert markdown, falling back to the raw text when no renderer is
    /// available or it fails.
    pub fn from_markdown(markdown: &str, renderer: Option<&dyn MarkdownRenderer>) -> Self {
        let Some(renderer) = renderer else {
            return Self::Text(markdown.to_string());
        };

        match renderer.parse(markdown) {
            Ok(html) => Self::Html(html),
            Err(e) => {
                tracing::warn!("{}; showing page content as plain text", e);
                Self::Text(markdown.to_string())
            }
        }
    }
}

/// Render the page body into the content region.
pub fn render_markdown<U: Surface + ?Sized>(
    surface: &mut U,
    markdown: &str,
    renderer: Option<&dyn MarkdownRenderer>,
) {
    surface.render_content(&ContentBody::from_markdown(markdown, renderer));
}
