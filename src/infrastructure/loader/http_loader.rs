//! HTTP-based client model loader

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use std::time::Duration;

use super::{ModelFormat, parse_model};
use crate::error::{Error, Result};
use crate::model::{Client, ModelLoader};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Loads client models from HTTP/HTTPS URLs
pub struct HttpModelLoader {
    client: HttpClient,
}

impl HttpModelLoader {
    pub fn new() -> Result<Self> {
        let client = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| Error::load(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

fn format_for(content_type: &str, source: &str) -> ModelFormat {
    if content_type.contains("json") {
        ModelFormat::Json
    } else if content_type.contains("yaml") {
        ModelFormat::Yaml
    } else {
        ModelFormat::from_source(source)
    }
}

#[async_trait]
impl ModelLoader for HttpModelLoader {
    async fn load(&self, source: &str) -> Result<Client> {
        if !source.starts_with("http://") && !source.starts_with("https://") {
            return Err(Error::load(format!(
                "HttpModelLoader only handles HTTP(S) URLs, got: {source}"
            )));
        }

        let response = self
            .client
            .get(source)
            .send()
            .await
            .map_err(|e| Error::load(format!("Failed to fetch client model from {source}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::load(format!("HTTP {status} when fetching {source}")));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let content = response
            .text()
            .await
            .map_err(|e| Error::load(format!("Failed to read response body: {e}")))?;

        parse_model(&content, format_for(&content_type, source), source)
    }
}
