//! Static development server for LaunchPad sites.
//!
//! Serves the app root first, then the project root, and answers unknown
//! paths with the app's `index.html`.

pub mod mime;
pub mod resolve;
pub mod server;

pub use resolve::{resolve_path, Roots};
pub use server::{router, DevServer, DevServerConfig, ServerError};
