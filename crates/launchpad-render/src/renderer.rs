//! Page orchestration: load content, then populate every region.

use std::error::Error;
use std::sync::Arc;

use launchpad_content::{
    ContentLoader, ContentSource, LoadError, MarkdownRenderer, PulldownRenderer, SiteConfig,
};

use crate::brand::update_site_brand;
use crate::contact::configure_contact;
use crate::content::render_markdown;
use crate::features::render_features;
use crate::footer::render_footer;
use crate::hero::populate_hero;
use crate::menu::setup_menu_toggle;
use crate::nav::build_navigation;
use crate::surface::{PageContext, Surface};
use crate::theme::apply_theme;

/// Runs the population pipeline for a page.
#[derive(Clone)]
pub struct Renderer {
    markdown: Option<Arc<dyn MarkdownRenderer>>,
}

impl Renderer {
    /// Create a renderer with an optional markdown capability.
    ///
    /// Without one, page content is shown as plain text.
    pub fn new(markdown: Option<Arc<dyn MarkdownRenderer>>) -> Self {
        Self { markdown }
    }

    /// A renderer without markdown support.
    pub fn plain() -> Self {
        Self::new(None)
    }

    pub fn has_markdown(&self) -> bool {
        self.markdown.is_some()
    }

    /// Render markdown into the content region.
    pub fn render_markdown<U: Surface + ?Sized>(&self, surface: &mut U, markdown: &str) {
        render_markdown(surface, markdown, self.markdown.as_deref());
    }

    /// Load the site configuration and page content, then populate `surface`.
    ///
    /// Any failure replaces the page with an error message; the error is
    /// also returned for the caller's bookkeeping.
    pub async fn initialise<S, U>(
        &self,
        loader: &ContentLoader<S>,
        surface: &mut U,
        page: &PageContext,
    ) -> Result<(), LoadError>
    where
        S: ContentSource,
        U: Surface + ?Sized,
    {
        match loader.load_config().await {
            Ok(config) => self.initialise_with(&config, loader, surface, page).await,
            Err(e) => {
                display_error(surface, &e);
                Err(e)
            }
        }
    }

    /// Populate `surface` from an already loaded configuration.
    ///
    /// Only the page content is fetched. Used when one configuration serves
    /// many pages.
    pub async fn initialise_with<S, U>(
        &self,
        config: &SiteConfig,
        loader: &ContentLoader<S>,
        surface: &mut U,
        page: &PageContext,
    ) -> Result<(), LoadError>
    where
        S: ContentSource,
        U: Surface + ?Sized,
    {
        let result = self.populate(config, loader, surface, page).await;
        if let Err(e) = &result {
            display_error(surface, e);
        }
        result
    }

    async fn populate<S, U>(
        &self,
        config: &SiteConfig,
        loader: &ContentLoader<S>,
        surface: &mut U,
        page: &PageContext,
    ) -> Result<(), LoadError>
    where
        S: ContentSource,
        U: Surface + ?Sized,
    {
        let id = page.page();

        apply_theme(surface, config.theme.as_ref());
        update_site_brand(surface, config.site.as_ref(), page);
        build_navigation(surface, config.navigation.as_deref(), page.path());
        populate_hero(surface, config.hero_for(id));
        render_features(surface, config.features_for(id));
        render_footer(surface, config.footer.as_ref());
        setup_menu_toggle(surface);

        let markdown = loader
            .load_page_content(config.content_slug_for(id))
            .await?;
        self.render_markdown(surface, &markdown);
        configure_contact(surface, config.contact.as_ref());

        Ok(())
    }
}

impl Default for Renderer {
    /// A renderer using pulldown-cmark for markdown.
    fn default() -> Self {
        Self::new(Some(Arc::new(PulldownRenderer::new())))
    }
}

/// Replace the page with an error message and log the error.
pub fn display_error<U: Surface + ?Sized>(surface: &mut U, error: &(dyn Error + 'static)) {
    surface.show_error(&error.to_string());
    tracing::error!("{}", error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentBody;
    use crate::document::{Document, ErrorTarget};
    use crate::features::EMPTY_FEATURES_MESSAGE;
    use crate::footer::DEFAULT_FOOTER_COPY;
    use launchpad_content::testing::MemorySource;
    use launchpad_content::{coming_soon, Fetched, CONFIG_PATH};
    use pretty_assertions::assert_eq;

    const SITE: &str = r##"{
  "theme": { "brand": "#4f46e5" },
  "site": {
    "name": "Acme",
    "hero": { "headline": "Provision a production-ready static site per customer" }
  },
  "navigation": [
    { "label": "Home", "href": "/" },
    { "label": "About", "href": "/about/" },
    { "label": "Pricing", "href": "/pricing/" },
    { "label": "Blog", "href": "https://blog.example.com", "target": "_blank" }
  ],
  "features": [{ "icon": "*", "title": "Fast", "description": "Very" }],
  "contact": { "endpoint": "https://forms.example.com/acme" },
  "pages": { "home": { "contentSlug": "about" } }
}"##;

    fn loader(source: MemorySource) -> ContentLoader<MemorySource> {
        ContentLoader::new(source)
    }

    #[tokio::test]
    async fn populates_every_region() {
        let source = MemorySource::new()
            .with(CONFIG_PATH, Fetched::ok(SITE))
            .with("/content/pages/about.md", Fetched::ok("# About us"));
        let loader = loader(source);
        let mut doc = Document::new();

        Renderer::default()
            .initialise(&loader, &mut doc, &PageContext::default())
            .await
            .unwrap();

        assert_eq!(doc.title, "Acme");
        assert_eq!(doc.root_properties[0].name, "--brand");
        assert_eq!(doc.nav.as_ref().unwrap().links.len(), 4);
        assert!(doc.nav.as_ref().unwrap().links[0].active);
        assert!(doc.nav.as_ref().unwrap().menu.enabled);
        assert_eq!(
            doc.hero.as_ref().unwrap().title.text,
            "Provision a production-ready static site per customer"
        );
        assert_eq!(doc.features.as_ref().unwrap().cards.len(), 1);
        assert_eq!(doc.footer.as_ref().unwrap().copy, DEFAULT_FOOTER_COPY);
        assert_eq!(
            doc.content,
            Some(ContentBody::Html("<h1>About us</h1>\n".to_string()))
        );
        assert_eq!(
            doc.contact.as_ref().unwrap().form.as_ref().unwrap().endpoint,
            "https://forms.example.com/acme"
        );
        assert!(doc.error().is_none());
    }

    #[tokio::test]
    async fn content_slug_override_selects_document() {
        let source = MemorySource::new().with(CONFIG_PATH, Fetched::ok(SITE));
        let loader = loader(source);
        let mut doc = Document::new();

        Renderer::default()
            .initialise(&loader, &mut doc, &PageContext::default())
            .await
            .unwrap();

        assert_eq!(
            loader.source().requests(),
            vec![CONFIG_PATH, "/content/pages/about.md"]
        );
    }

    #[tokio::test]
    async fn preloaded_config_is_not_fetched_again() {
        let source = MemorySource::new()
            .with("/content/pages/pricing.md", Fetched::ok("# Plans"));
        let loader = loader(source);
        let config: SiteConfig = serde_json::from_str(SITE).unwrap();
        let mut doc = Document::new();

        Renderer::default()
            .initialise_with(&config, &loader, &mut doc, &PageContext::for_page("pricing"))
            .await
            .unwrap();

        assert_eq!(loader.source().requests(), vec!["/content/pages/pricing.md"]);
        assert_eq!(doc.title, "Acme · Pricing");
        assert!(doc.error().is_none());
    }

    #[tokio::test]
    async fn missing_markdown_renders_placeholder() {
        let source = MemorySource::new().with(CONFIG_PATH, Fetched::ok("{}"));
        let loader = loader(source);
        let mut doc = Document::new();

        Renderer::plain()
            .initialise(&loader, &mut doc, &PageContext::for_page("pricing"))
            .await
            .unwrap();

        assert_eq!(doc.content, Some(ContentBody::Text(coming_soon("pricing"))));
        assert!(coming_soon("pricing").contains("**pricing**"));
    }

    #[tokio::test]
    async fn config_failure_replaces_page() {
        let source = MemorySource::new().with(CONFIG_PATH, Fetched::status(500));
        let loader = loader(source);
        let mut doc = Document::new();

        let result = Renderer::default()
            .initialise(&loader, &mut doc, &PageContext::default())
            .await;

        let err = result.unwrap_err();
        let shown = doc.error().unwrap();
        assert_eq!(shown.message, err.to_string());
        assert_eq!(shown.target, ErrorTarget::PageSection);
        assert!(shown.message.contains("500"));
        assert!(doc.nav.as_ref().unwrap().links.is_empty());
    }

    #[tokio::test]
    async fn content_failure_replaces_page() {
        let source = MemorySource::new()
            .with(CONFIG_PATH, Fetched::ok("{}"))
            .with("/content/pages/home.md", Fetched::status(403));
        let loader = loader(source);
        let mut doc = Document::new();

        let result = Renderer::default()
            .initialise(&loader, &mut doc, &PageContext::default())
            .await;

        assert!(matches!(result, Err(LoadError::Content { status: 403, .. })));
        assert_eq!(
            doc.error().unwrap().message,
            "Unable to load /content/pages/home.md (403)"
        );
    }

    #[tokio::test]
    async fn bare_config_renders_defaults() {
        let source = MemorySource::new()
            .with(CONFIG_PATH, Fetched::ok("{}"))
            .with("/content/pages/home.md", Fetched::ok("Hello"));
        let loader = loader(source);
        let mut doc = Document::new();

        Renderer::default()
            .initialise(&loader, &mut doc, &PageContext::default())
            .await
            .unwrap();

        let hero = doc.hero.as_ref().unwrap();
        assert!(hero.kicker.hidden);
        assert!(hero.primary_cta.hidden);
        assert!(hero.secondary_cta.hidden);
        assert_eq!(
            doc.features.as_ref().unwrap().empty_message.as_deref(),
            Some(EMPTY_FEATURES_MESSAGE)
        );
        assert!(doc.footer.as_ref().unwrap().links.is_empty());
        assert!(doc.root_properties.is_empty());
        assert_eq!(doc.contact.as_ref().unwrap().headline, "Book a call");
    }
}
