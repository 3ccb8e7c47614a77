//! Mapping request paths onto files.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Directories the server reads from. Both are absolute and normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roots {
    app_root: PathBuf,
    project_root: PathBuf,
}

impl Roots {
    pub fn new(app_root: impl AsRef<Path>, project_root: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self {
            app_root: normalize(&std::path::absolute(app_root)?),
            project_root: normalize(&std::path::absolute(project_root)?),
        })
    }

    pub fn app_root(&self) -> &Path {
        &self.app_root
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// The app's `index.html`, served for `/` and as the fallback.
    pub fn index(&self) -> PathBuf {
        self.app_root.join("index.html")
    }

    fn bases(&self) -> [&Path; 2] {
        [self.app_root.as_path(), self.project_root.as_path()]
    }
}

/// Find the file for a request path.
///
/// Returns `Ok(None)` when no base has a matching file. Candidates that
/// leave the project root are never considered.
pub async fn resolve_path(roots: &Roots, url_path: &str) -> io::Result<Option<PathBuf>> {
    let path = strip_suffixes(url_path);
    if path.is_empty() || path == "/" {
        return Ok(Some(roots.index()));
    }

    for base in roots.bases() {
        let candidate = normalize(&base.join(path.trim_start_matches('/')));
        if !candidate.starts_with(roots.project_root()) {
            tracing::debug!("Refusing {} outside the project root", candidate.display());
            continue;
        }

        let metadata = match tokio::fs::metadata(&candidate).await {
            Ok(metadata) => metadata,
            Err(e) if is_not_found(&e) => continue,
            Err(e) => return Err(e),
        };

        if !metadata.is_dir() {
            return Ok(Some(candidate));
        }

        let index = candidate.join("index.html");
        match tokio::fs::metadata(&index).await {
            Ok(_) => return Ok(Some(index)),
            Err(e) if is_not_found(&e) => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(None)
}

/// Missing files and paths that run through a regular file both count as absent.
pub fn is_not_found(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

/// Drop the query string and fragment.
fn strip_suffixes(url_path: &str) -> &str {
    let end = url_path.find(['?', '#']).unwrap_or(url_path.len());
    &url_path[..end]
}

/// Resolve `.` and `..` without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
