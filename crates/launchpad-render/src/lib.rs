//! Page population and HTML rendering for LaunchPad sites.
//!
//! Section populators turn the site configuration into views and hand them
//! to a [`Surface`]. [`Document`] is the in-memory page template; the
//! [`TemplateEngine`] serializes it and the [`SiteBuilder`] writes a whole
//! site to disk.

pub mod brand;
pub mod builder;
pub mod contact;
pub mod content;
pub mod document;
pub mod features;
pub mod footer;
pub mod hero;
pub mod menu;
pub mod nav;
pub mod renderer;
pub mod surface;
pub mod templates;
pub mod theme;

pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder};
pub use contact::{
    ContactSection, FormTransport, HttpFormTransport, SubmitError, SubmitOutcome, Submission,
};
pub use content::ContentBody;
pub use document::{Document, Slots};
pub use renderer::{display_error, Renderer};
pub use surface::{PageContext, Surface};
pub use templates::TemplateEngine;
