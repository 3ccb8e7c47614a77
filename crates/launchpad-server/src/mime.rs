//! Content types by file extension.

use std::path::Path;

/// Content type for files with an unknown extension.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Content type for `path`, matched on its lowercased extension.
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("html") => HTML_CONTENT_TYPE,
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "application/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",
        _ => DEFAULT_CONTENT_TYPE,
    }
}
