//! Site configuration and content loading for LaunchPad sites.
//!
//! Fetches `content/site.json` and per-page markdown from a web server or a
//! project directory, and provides the markdown capability used to render it.

pub mod config;
pub mod loader;
pub mod markdown;
pub mod source;
pub mod testing;

pub use config::{
    non_empty, CallToAction, ContactConfig, Feature, FooterConfig, HeroConfig, LinkItem,
    PageConfig, SiteConfig, SiteInfo, Theme, HOME_PAGE,
};
pub use loader::{coming_soon, page_content_path, ContentLoader, LoadError, CONFIG_PATH};
pub use markdown::{MarkdownError, MarkdownRenderer, PulldownRenderer};
pub use source::{ContentSource, DirSource, Fetched, HttpSource, SourceError};
