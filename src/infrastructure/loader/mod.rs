//! Model loading implementations

pub mod composite_loader;
pub mod file_loader;
pub mod http_loader;

pub use composite_loader::CompositeModelLoader;
pub use file_loader::FileModelLoader;
pub use http_loader::HttpModelLoader;

use crate::error::{Error, Result};
use crate::model::Client;

/// Serialized format of a client model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    Json,
    Yaml,
    /// Unknown; JSON is tried first, then YAML
    Detect,
}

impl ModelFormat {
    pub fn from_source(source: &str) -> Self {
        if source.ends_with(".json") {
            ModelFormat::Json
        } else if source.ends_with(".yaml") || source.ends_with(".yml") {
            ModelFormat::Yaml
        } else {
            ModelFormat::Detect
        }
    }
}

/// Parse a client model and warn about an empty operation set
pub fn parse_model(content: &str, format: ModelFormat, source: &str) -> Result<Client> {
    let client: Client = match format {
        ModelFormat::Json => serde_json::from_str(content)?,
        ModelFormat::Yaml => serde_yaml::from_str(content)?,
        ModelFormat::Detect => serde_json::from_str(content)
            .or_else(|_| serde_yaml::from_str(content))
            .map_err(|e| Error::load(format!("Failed to parse client model {source}: {e}")))?,
    };

    if client.operations.is_empty() {
        tracing::warn!(source, client = %client.name, "Client model declares no operations");
    }
    tracing::debug!(
        source,
        client = %client.name,
        operations = client.operations.len(),
        "Parsed client model"
    );
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelLoader;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MODEL_JSON: &str = r#"{
        "name": "WidgetsClient",
        "operations": [
            {"name": "List", "method": "GET", "url": "/widgets", "client_name": "Widgets"}
        ]
    }"#;

    #[test]
    fn test_model_format_from_source() {
        assert_eq!(ModelFormat::from_source("model.json"), ModelFormat::Json);
        assert_eq!(ModelFormat::from_source("model.yml"), ModelFormat::Yaml);
        assert_eq!(ModelFormat::from_source("model.yaml"), ModelFormat::Yaml);
        assert_eq!(ModelFormat::from_source("model"), ModelFormat::Detect);
    }

    #[test]
    fn test_parse_model_detects_yaml() {
        let yaml = "name: WidgetsClient\noperations: []\n";
        let client = parse_model(yaml, ModelFormat::Detect, "inline").unwrap();
        assert_eq!(client.name, "WidgetsClient");
        assert!(client.operations.is_empty());
    }

    #[test]
    fn test_parse_model_rejects_garbage() {
        let result = parse_model("- [unbalanced", ModelFormat::Detect, "inline");
        match result {
            Err(Error::Load(msg)) => assert!(msg.contains("inline")),
            other => panic!("Expected Load error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_composite_loader_file() {
        let loader = CompositeModelLoader::new().unwrap();

        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(MODEL_JSON.as_bytes())
            .expect("Failed to write temp file");
        temp_file.flush().expect("Failed to flush temp file");

        let client = loader
            .load(temp_file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(client.operations.len(), 1);
    }

    #[tokio::test]
    async fn test_composite_loader_http() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/model.json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(MODEL_JSON)
                    .insert_header("content-type", "application/json"),
            )
            .mount(&mock_server)
            .await;

        let loader = CompositeModelLoader::new().unwrap();
        let url = format!("{}/model.json", mock_server.uri());
        let client = loader.load(&url).await.unwrap();

        assert_eq!(client.name, "WidgetsClient");
        assert_eq!(client.operations[0].name, "List");
    }
}
