//! Port interfaces for the model domain

use crate::error::Result;
use crate::model::Client;
use async_trait::async_trait;

/// Loads a serialized client model graph
#[async_trait]
pub trait ModelLoader: Send + Sync {
    /// Load a client model from a source (file path or URL)
    async fn load(&self, source: &str) -> Result<Client>;
}
