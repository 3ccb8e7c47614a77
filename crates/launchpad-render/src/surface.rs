//! The rendering surface a page is populated onto.

use serde::Serialize;

use launchpad_content::HOME_PAGE;

use crate::contact::ContactView;
use crate::content::ContentBody;
use crate::features::FeaturesView;
use crate::footer::FooterView;
use crate::hero::HeroView;
use crate::nav::NavLink;

/// Identity of the page being rendered, fixed for the whole render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContext {
    page: String,
    path: String,
}

impl PageContext {
    pub fn new(page: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            path: path.into(),
        }
    }

    /// Context for a page served at its conventional location
    /// (`/` for home, `/<page>/` otherwise).
    pub fn for_page(page: &str) -> Self {
        let path = if page == HOME_PAGE {
            "/".to_string()
        } else {
            format!("/{}/", page)
        };
        Self::new(page, path)
    }

    pub fn page(&self) -> &str {
        &self.page
    }

    /// Request path of the page, used to mark the active navigation link.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_home(&self) -> bool {
        self.page == HOME_PAGE
    }
}

impl Default for PageContext {
    fn default() -> Self {
        Self::for_page(HOME_PAGE)
    }
}

/// A page template that section populators write into.
///
/// Each method receives a fully-decided view of one region. Implementations
/// whose template lacks a region ignore the call.
pub trait Surface {
    /// Set a custom property on the document root.
    fn set_root_property(&mut self, name: &str, value: &str);

    fn set_title(&mut self, title: &str);

    /// Replace the text of every site-name placeholder.
    fn set_site_name(&mut self, name: &str);

    /// Replace the navigation list.
    fn render_nav(&mut self, links: &[NavLink]);

    fn render_hero(&mut self, hero: &HeroView);

    fn render_features(&mut self, features: &FeaturesView);

    fn render_footer(&mut self, footer: &FooterView);

    fn render_content(&mut self, body: &ContentBody);

    fn render_contact(&mut self, contact: &ContactView);

    /// Wire the mobile menu toggle to the navigation panel.
    fn enable_menu_toggle(&mut self);

    /// Replace the main content region with an error message.
    fn show_error(&mut self, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_lives_at_root() {
        let ctx = PageContext::for_page("home");
        assert_eq!(ctx.path(), "/");
        assert!(ctx.is_home());
    }

    #[test]
    fn other_pages_live_in_directories() {
        let ctx = PageContext::for_page("pricing");
        assert_eq!(ctx.path(), "/pricing/");
        assert!(!ctx.is_home());
    }
}
