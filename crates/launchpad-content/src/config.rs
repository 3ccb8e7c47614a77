//! Site configuration model (`content/site.json`).

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

/// Page identifier used when a page declares none.
pub const HOME_PAGE: &str = "home";

/// CSS custom properties keyed by name (without the leading `--`).
///
/// Insertion order is preserved so later duplicates win the same way they
/// would when applied one by one.
pub type Theme = Map<String, Value>;

/// Root configuration document.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub theme: Option<Theme>,
    pub site: Option<SiteInfo>,
    pub navigation: Option<Vec<LinkItem>>,
    pub features: Option<Vec<Feature>>,
    pub footer: Option<FooterConfig>,
    pub contact: Option<ContactConfig>,
    pub pages: BTreeMap<String, PageConfig>,
}

/// Site-wide identity.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteInfo {
    pub name: Option<String>,

    /// Hero used by pages without their own
    pub hero: Option<HeroConfig>,
}

/// Per-page overrides of site-level values.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PageConfig {
    pub hero: Option<HeroConfig>,
    pub features: Option<Vec<Feature>>,
    pub content_slug: Option<String>,
}

/// Top-of-page promotional section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroConfig {
    pub kicker: Option<String>,
    pub headline: Option<String>,
    pub subheading: Option<String>,
    pub image: Option<String>,
    pub image_alt: Option<String>,
    pub primary_cta: Option<CallToAction>,
    pub secondary_cta: Option<CallToAction>,
}

/// A labeled call-to-action link.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct CallToAction {
    pub label: Option<String>,
    pub href: Option<String>,
}

/// A navigation or footer link.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct LinkItem {
    pub label: String,
    pub href: String,
    pub target: Option<String>,
}

/// A feature card.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Feature {
    pub icon: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct FooterConfig {
    pub copy: Option<String>,
    pub links: Option<Vec<LinkItem>>,
}

/// Contact section copy and submission endpoint.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactConfig {
    pub headline: Option<String>,
    pub subheading: Option<String>,
    pub endpoint: Option<String>,
    pub pending_message: Option<String>,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}

impl SiteConfig {
    /// Parse a configuration document.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    /// Overrides declared for a page, if any.
    pub fn page(&self, page: &str) -> Option<&PageConfig> {
        self.pages.get(page)
    }

    /// Hero for a page: the page's own, then the site default.
    pub fn hero_for(&self, page: &str) -> Option<&HeroConfig> {
        self.page(page)
            .and_then(|p| p.hero.as_ref())
            .or_else(|| self.site.as_ref().and_then(|s| s.hero.as_ref()))
    }

    /// Features for a page: the page's own, then the site list, then none.
    pub fn features_for(&self, page: &str) -> &[Feature] {
        self.page(page)
            .and_then(|p| p.features.as_deref())
            .or(self.features.as_deref())
            .unwrap_or_default()
    }

    /// Slug of the markdown document backing a page.
    pub fn content_slug_for<'a>(&'a self, page: &'a str) -> &'a str {
        self.page(page)
            .and_then(|p| p.content_slug.as_deref())
            .unwrap_or(page)
    }

    /// Every page that should be rendered: home first, then each configured page.
    pub fn page_ids(&self) -> Vec<String> {
        let mut ids = vec![HOME_PAGE.to_string()];
        ids.extend(self.pages.keys().filter(|k| *k != HOME_PAGE).cloned());
        ids
    }
}

/// Treat empty strings the same as absent values.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
