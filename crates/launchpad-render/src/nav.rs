//! Navigation list and active-link detection.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use url::Url;

use launchpad_content::{non_empty, LinkItem};

use crate::surface::Surface;

/// `rel` applied to links that open in another browsing context.
pub const EXTERNAL_REL: &str = "noopener noreferrer";

/// Origin relative hrefs are resolved against.
const SITE_ORIGIN: &str = "http://localhost/";

/// A rendered link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkView {
    pub label: String,
    pub href: String,
    pub target: Option<String>,
    pub rel: Option<String>,
}

impl LinkView {
    pub fn from_item(item: &LinkItem) -> Self {
        let target = non_empty(item.target.as_deref()).map(str::to_string);
        let rel = target.as_ref().map(|_| EXTERNAL_REL.to_string());

        Self {
            label: item.label.clone(),
            href: item.href.clone(),
            target,
            rel,
        }
    }
}

/// A navigation entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavLink {
    #[serde(flatten)]
    pub link: LinkView,

    /// Whether this link points at the current page
    pub active: bool,
}

/// Rebuild the navigation list for the page at `current_path`.
pub fn build_navigation<U: Surface + ?Sized>(
    surface: &mut U,
    items: Option<&[LinkItem]>,
    current_path: &str,
) {
    let links = nav_links(items.unwrap_or_default(), current_path);
    surface.render_nav(&links);
}

/// Build navigation entries, marking the one matching `current_path`.
pub fn nav_links(items: &[LinkItem], current_path: &str) -> Vec<NavLink> {
    let current = normalize_path(current_path);

    items
        .iter()
        .map(|item| {
            let active = link_path(&item.href).is_some_and(|path| path == current);
            NavLink {
                link: LinkView::from_item(item),
                active,
            }
        })
        .collect()
}

/// Normalize a URL path for comparison.
///
/// Strips a trailing `index.html`, then one trailing slash; an empty result is `/`.
pub fn normalize_path(path: &str) -> String {
    let path = path.strip_suffix("index.html").unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);

    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}

/// Whether `href` is an absolute http(s) URL.
pub fn is_absolute_url(href: &str) -> bool {
    static ABSOLUTE: OnceLock<Regex> = OnceLock::new();
    ABSOLUTE
        .get_or_init(|| Regex::new(r"(?i)^https?://").expect("valid absolute URL pattern"))
        .is_match(href)
}

/// Normalized same-site path of `href`, or `None` for external links.
fn link_path(href: &str) -> Option<String> {
    if is_absolute_url(href) {
        return None;
    }

    let base = Url::parse(SITE_ORIGIN).ok()?;
    let resolved = base.join(href).ok()?;
    Some(normalize_path(resolved.path()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    fn item(label: &str, href: &str, target: Option<&str>) -> LinkItem {
        LinkItem {
            label: label.to_string(),
            href: href.to_string(),
            target: target.map(str::to_string),
        }
    }

    #[test]
    fn normalizes_paths() {
        assert_eq!(normalize_path("/about/index.html"), "/about");
        assert_eq!(normalize_path("/about/"), "/about");
        assert_eq!(normalize_path("/about"), "/about");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/index.html"), "/");
        assert_eq!(normalize_path(""), "/");
    }

    #[test]
    fn detects_absolute_urls() {
        assert!(is_absolute_url("https://example.com"));
        assert!(is_absolute_url("HTTP://example.com/about"));
        assert!(!is_absolute_url("/about"));
        assert!(!is_absolute_url("mailto:hi@example.com"));
    }

    #[test]
    fn marks_matching_link_active() {
        let links = nav_links(
            &[item("Home", "/", None), item("About", "/about/", None)],
            "/about",
        );

        assert!(!links[0].active);
        assert!(links[1].active);
    }

    #[test]
    fn index_documents_match_their_directory() {
        let links = nav_links(&[item("About", "about/index.html", None)], "/about/");

        assert!(links[0].active);
    }

    #[test]
    fn home_link_is_active_at_root() {
        let links = nav_links(&[item("Home", "/", None)], "/index.html");

        assert!(links[0].active);
    }

    #[test]
    fn external_links_are_never_active() {
        let links = nav_links(
            &[item("Docs", "https://localhost/about/", Some("_blank"))],
            "/about",
        );

        assert!(!links[0].active);
        assert_eq!(links[0].link.target.as_deref(), Some("_blank"));
        assert_eq!(links[0].link.rel.as_deref(), Some(EXTERNAL_REL));
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        let links = nav_links(&[item("Pricing", "/pricing/?plan=pro#top", None)], "/pricing");

        assert!(links[0].active);
    }

    #[test]
    fn links_without_target_get_no_rel() {
        let links = nav_links(&[item("About", "/about", Some(""))], "/");

        assert_eq!(links[0].link.target, None);
        assert_eq!(links[0].link.rel, None);
    }

    #[test]
    fn rebuilds_the_list() {
        let mut doc = Document::new();

        build_navigation(
            &mut doc,
            Some(&[item("A", "/a", None), item("B", "/b", None)][..]),
            "/",
        );
        build_navigation(&mut doc, Some(&[item("C", "/c", None)][..]), "/");

        let nav = doc.nav.as_ref().unwrap();
        assert_eq!(nav.links.len(), 1);
        assert_eq!(nav.links[0].link.label, "C");
    }

    #[test]
    fn missing_items_clear_the_list() {
        let mut doc = Document::new();

        build_navigation(&mut doc, Some(&[item("A", "/a", None)][..]), "/");
        build_navigation(&mut doc, None, "/");

        assert!(doc.nav.as_ref().unwrap().links.is_empty());
    }
}
