//! Composite loader that dispatches on the source kind

use async_trait::async_trait;

use super::{FileModelLoader, HttpModelLoader};
use crate::error::Result;
use crate::model::{Client, ModelLoader};

/// Routes URLs to the HTTP loader and everything else to the file loader
pub struct CompositeModelLoader {
    http: HttpModelLoader,
    file: FileModelLoader,
}

impl CompositeModelLoader {
    pub fn new() -> Result<Self> {
        Ok(Self {
            http: HttpModelLoader::new()?,
            file: FileModelLoader::new(),
        })
    }
}

#[async_trait]
impl ModelLoader for CompositeModelLoader {
    async fn load(&self, source: &str) -> Result<Client> {
        if source.starts_with("http://") || source.starts_with("https://") {
            tracing::debug!(source, "Loading client model over HTTP");
            self.http.load(source).await
        } else {
            tracing::debug!(source, "Loading client model from file");
            self.file.load(source).await
        }
    }
}
