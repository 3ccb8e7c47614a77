//! Development server implementation.

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{
        header::{CACHE_CONTROL, CONTENT_TYPE},
        StatusCode, Uri,
    },
    response::{IntoResponse, Response},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::mime::{content_type_for, HTML_CONTENT_TYPE};
use crate::resolve::{is_not_found, resolve_path, Roots};

/// Configuration for the development server.
#[derive(Debug, Clone)]
pub struct DevServerConfig {
    /// Directory holding the app shell
    pub app_root: PathBuf,

    /// Directory holding everything else, including `content/`
    pub project_root: PathBuf,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            app_root: PathBuf::from("src"),
            project_root: PathBuf::from("."),
            port: 8000,
            host: "127.0.0.1".to_string(),
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Failed to resolve server roots: {0}")]
    Roots(#[source] io::Error),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("Server error: {0}")]
    Serve(String),
}

/// Development server.
pub struct DevServer {
    config: DevServerConfig,
}

impl DevServer {
    /// Create a new development server.
    pub fn new(config: DevServerConfig) -> Self {
        Self { config }
    }

    /// Start the development server.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|_| {
                ServerError::InvalidAddress(format!("{}:{}", self.config.host, self.config.port))
            })?;

        let roots = Roots::new(&self.config.app_root, &self.config.project_root)
            .map_err(ServerError::Roots)?;

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        tracing::info!(
            "Static dev server running at http://localhost:{}",
            self.config.port
        );
        tracing::info!("App root: {}", roots.app_root().display());
        tracing::info!("Project root: {}", roots.project_root().display());

        axum::serve(listener, router(roots))
            .await
            .map_err(|e| ServerError::Serve(e.to_string()))?;

        Ok(())
    }
}

/// Router answering every request from the file system.
pub fn router(roots: Roots) -> Router {
    Router::new()
        .fallback(serve_file)
        .with_state(Arc::new(roots))
        .layer(TraceLayer::new_for_http())
}

/// Handler for every request path.
async fn serve_file(State(roots): State<Arc<Roots>>, uri: Uri) -> Response {
    let path = match resolve_path(&roots, uri.path()).await {
        Ok(Some(path)) => path,
        Ok(None) => return fallback(&roots).await,
        Err(e) => return internal_error(&uri, e),
    };

    match tokio::fs::read(&path).await {
        Ok(body) => file_response(content_type_for(&path), body),
        Err(e) if is_not_found(&e) => fallback(&roots).await,
        Err(e) => internal_error(&uri, e),
    }
}

/// Unknown paths get the app shell so client-side routes still load.
async fn fallback(roots: &Roots) -> Response {
    match tokio::fs::read(roots.index()).await {
        Ok(body) => file_response(HTML_CONTENT_TYPE, body),
        Err(e) => {
            tracing::debug!("Fallback {} unavailable: {}", roots.index().display(), e);
            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
    }
}

fn file_response(content_type: &'static str, body: Vec<u8>) -> Response {
    (
        [(CONTENT_TYPE, content_type), (CACHE_CONTROL, "no-cache")],
        body,
    )
        .into_response()
}

fn internal_error(uri: &Uri, error: io::Error) -> Response {
    tracing::error!("Failed to serve {}: {}", uri, error);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
}
