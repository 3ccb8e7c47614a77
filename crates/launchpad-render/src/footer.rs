//! Footer copy and links.

use serde::Serialize;

use launchpad_content::FooterConfig;

use crate::nav::LinkView;
use crate::surface::Surface;

/// Copy shown when the footer configures none.
pub const DEFAULT_FOOTER_COPY: &str = "© LaunchPad Sites";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterView {
    pub copy: String,
    pub links: Vec<LinkView>,
}

impl FooterView {
    pub fn from_config(footer: Option<&FooterConfig>) -> Self {
        let copy = footer
            .and_then(|f| f.copy.clone())
            .unwrap_or_else(|| DEFAULT_FOOTER_COPY.to_string());

        let links = footer
            .and_then(|f| f.links.as_deref())
            .unwrap_or_default()
            .iter()
            .map(LinkView::from_item)
            .collect();

        Self { copy, links }
    }
}

/// Set the footer copy and rebuild its links.
pub fn render_footer<U: Surface + ?Sized>(surface: &mut U, footer: Option<&FooterConfig>) {
    surface.render_footer(&FooterView::from_config(footer));
}
