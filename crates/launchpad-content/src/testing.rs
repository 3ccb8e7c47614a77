//! In-memory content source for tests and previews.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::source::{ContentSource, Fetched, SourceError, NOT_FOUND};

/// Serves canned documents and records every requested path.
/// Paths without a document answer 404.
#[derive(Debug, Default)]
pub struct MemorySource {
    documents: HashMap<String, Fetched>,
    requests: Mutex<Vec<String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the response for a path.
    pub fn with(mut self, path: &str, fetched: Fetched) -> Self {
        self.documents.insert(path.to_string(), fetched);
        self
    }

    /// Paths requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ContentSource for MemorySource {
    async fn fetch(&self, path: &str) -> Result<Fetched, SourceError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(path.to_string());
        }

        Ok(self
            .documents
            .get(path)
            .cloned()
            .unwrap_or_else(|| Fetched::status(NOT_FOUND)))
    }
}
