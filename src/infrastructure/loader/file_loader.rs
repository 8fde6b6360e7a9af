//! File-based client model loader

use async_trait::async_trait;
use tokio::fs;

use super::{ModelFormat, parse_model};
use crate::error::Result;
use crate::model::{Client, ModelLoader};

/// Loads client models from local JSON or YAML files
pub struct FileModelLoader;

impl FileModelLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileModelLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ModelLoader for FileModelLoader {
    async fn load(&self, source: &str) -> Result<Client> {
        let content = fs::read_to_string(source).await?;
        parse_model(&content, ModelFormat::from_source(source), source)
    }
}
