//! Operation, parameter and response descriptions produced by the upstream parser

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::types::{Extensions, ModelType};

/// Extension naming the client an operation belongs to
pub const CLIENT_NAME_EXTENSION: &str = "x-client-name";

/// Extension carrying the authorization scope an operation requires
pub const REQUIRED_SCOPE_EXTENSION: &str = "x-required-scope";

/// HTTP methods an operation can be declared with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[serde(alias = "get")]
    Get,
    #[serde(alias = "post")]
    Post,
    #[serde(alias = "put")]
    Put,
    #[serde(alias = "delete")]
    Delete,
    #[serde(alias = "patch")]
    Patch,
    #[serde(alias = "head")]
    Head,
    #[serde(alias = "options")]
    Options,
}

impl HttpMethod {
    /// Get all HTTP methods as an array
    pub fn all() -> &'static [HttpMethod] {
        &[
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Delete,
            HttpMethod::Patch,
            HttpMethod::Head,
            HttpMethod::Options,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpMethod::all()
            .iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("unknown HTTP method '{s}'"))
    }
}

/// Where a parameter is placed on the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Body,
    /// Exists only as a flattening input, never sent on the wire
    Virtual,
}

/// How a sequence-valued parameter is rendered on the wire
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionFormat {
    #[default]
    None,
    Csv,
    Ssv,
    Tsv,
    Pipes,
    /// Repeat the key once per element
    Multi,
}

impl CollectionFormat {
    pub fn separator(&self) -> &'static str {
        match self {
            CollectionFormat::None | CollectionFormat::Csv | CollectionFormat::Multi => ",",
            CollectionFormat::Ssv => " ",
            CollectionFormat::Tsv => "\t",
            CollectionFormat::Pipes => "|",
        }
    }
}

/// Operation parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    /// Name used on the wire; falls back to `name` when empty
    #[serde(default)]
    pub serialized_name: String,
    pub location: ParameterLocation,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub constant: bool,
    #[serde(default)]
    pub nullable: bool,
    /// Shared by every operation of the client rather than local to one
    #[serde(default)]
    pub client_level: bool,
    #[serde(rename = "type")]
    pub model_type: ModelType,
    #[serde(default)]
    pub collection_format: CollectionFormat,
    #[serde(default)]
    pub default_value: Option<String>,
}

impl Parameter {
    pub fn new(
        name: impl Into<String>,
        location: ParameterLocation,
        model_type: ModelType,
    ) -> Self {
        Self {
            name: name.into(),
            serialized_name: String::new(),
            location,
            required: false,
            constant: false,
            nullable: false,
            client_level: false,
            model_type,
            collection_format: CollectionFormat::None,
            default_value: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn constant(mut self) -> Self {
        self.constant = true;
        self
    }

    pub fn client_level(mut self) -> Self {
        self.client_level = true;
        self
    }

    pub fn with_serialized_name(mut self, serialized_name: impl Into<String>) -> Self {
        self.serialized_name = serialized_name.into();
        self
    }

    pub fn with_collection_format(mut self, format: CollectionFormat) -> Self {
        self.collection_format = format;
        self
    }

    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn wire_name(&self) -> &str {
        if self.serialized_name.is_empty() {
            &self.name
        } else {
            &self.serialized_name
        }
    }
}

/// A response definition; either part may be absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub body: Option<ModelType>,
    #[serde(default)]
    pub headers: Option<ModelType>,
}

impl Response {
    pub fn with_body(body: ModelType) -> Self {
        Self {
            body: Some(body),
            headers: None,
        }
    }

    pub fn with_headers(headers: ModelType) -> Self {
        Self {
            body: None,
            headers: Some(headers),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_none() && self.headers.is_none()
    }
}

/// Maps one input parameter onto the output of a transformation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterMapping {
    /// Name of the input parameter in the operation's parameter list
    pub input: String,
    #[serde(default)]
    pub input_property: Option<String>,
    /// Field path on the output; empty or absent replaces the whole output
    #[serde(default)]
    pub output_property: Option<String>,
}

impl ParameterMapping {
    pub fn whole(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            input_property: None,
            output_property: None,
        }
    }

    pub fn to_field(input: impl Into<String>, output_property: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            input_property: None,
            output_property: Some(output_property.into()),
        }
    }

    pub fn output_field(&self) -> Option<&str> {
        self.output_property.as_deref().filter(|p| !p.is_empty())
    }

    pub fn input_field(&self) -> Option<&str> {
        self.input_property.as_deref().filter(|p| !p.is_empty())
    }
}

/// Synthesizes one grouped/composite parameter from several inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterTransformation {
    pub output: Parameter,
    #[serde(default)]
    pub mappings: Vec<ParameterMapping>,
}

impl ParameterTransformation {
    pub fn new(output: Parameter) -> Self {
        Self {
            output,
            mappings: Vec::new(),
        }
    }

    pub fn with_mapping(mut self, mapping: ParameterMapping) -> Self {
        self.mappings.push(mapping);
        self
    }
}

/// One HTTP endpoint description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub name: String,
    pub method: HttpMethod,
    pub url: String,
    #[serde(default)]
    pub client_name: Option<String>,
    /// Method group the operation is exposed under, if any
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub nullable_return: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub responses: BTreeMap<u16, Response>,
    #[serde(default)]
    pub default_response: Response,
    #[serde(default)]
    pub extensions: Extensions,
    /// `None` entries are unset transformations left by a malformed upstream model
    #[serde(default)]
    pub transformations: Vec<Option<ParameterTransformation>>,
}

impl Operation {
    pub fn new(name: impl Into<String>, method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            method,
            url: url.into(),
            client_name: None,
            group: None,
            deprecated: false,
            hidden: false,
            nullable_return: false,
            description: None,
            parameters: Vec::new(),
            responses: BTreeMap::new(),
            default_response: Response::default(),
            extensions: Extensions::new(),
            transformations: Vec::new(),
        }
    }

    pub fn for_client(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = Some(client_name.into());
        self
    }

    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    pub fn nullable_return(mut self) -> Self {
        self.nullable_return = true;
        self
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_response(mut self, status: u16, response: Response) -> Self {
        self.responses.insert(status, response);
        self
    }

    pub fn with_default_response(mut self, response: Response) -> Self {
        self.default_response = response;
        self
    }

    pub fn with_transformation(mut self, transformation: ParameterTransformation) -> Self {
        self.transformations.push(Some(transformation));
        self
    }

    pub fn with_extension(mut self, key: impl Into<String>, value: JsonValue) -> Self {
        self.extensions.insert(key.into(), value);
        self
    }

    /// String value of an extension, if present and a string
    pub fn extension_str(&self, key: &str) -> Option<&str> {
        self.extensions.get(key).and_then(JsonValue::as_str)
    }

    /// Client-name tag; the explicit field wins over the `x-client-name` extension
    pub fn client_name(&self) -> Option<&str> {
        self.client_name
            .as_deref()
            .or_else(|| self.extension_str(CLIENT_NAME_EXTENSION))
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_from_str() {
        assert_eq!("get".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("DELETE".parse::<HttpMethod>().unwrap(), HttpMethod::Delete);
        assert_eq!("Head".parse::<HttpMethod>().unwrap(), HttpMethod::Head);
        assert!("TRACE".parse::<HttpMethod>().is_err());
    }

    #[test]
    fn test_http_method_serde_accepts_both_cases() {
        let upper: HttpMethod = serde_json::from_value(json!("POST")).unwrap();
        let lower: HttpMethod = serde_json::from_value(json!("post")).unwrap();
        assert_eq!(upper, HttpMethod::Post);
        assert_eq!(lower, HttpMethod::Post);
        assert_eq!(serde_json::to_value(HttpMethod::Head).unwrap(), json!("HEAD"));
    }

    #[test]
    fn test_wire_name_fallback() {
        let plain = Parameter::new("widgetId", ParameterLocation::Path, ModelType::string());
        assert_eq!(plain.wire_name(), "widgetId");

        let renamed = plain.with_serialized_name("widget-id");
        assert_eq!(renamed.wire_name(), "widget-id");
    }

    #[test]
    fn test_client_name_falls_back_to_extension() {
        let tagged = Operation::new("List", HttpMethod::Get, "/widgets")
            .with_extension(CLIENT_NAME_EXTENSION, json!("Widgets"));
        assert_eq!(tagged.client_name(), Some("Widgets"));

        let explicit = tagged.clone().for_client("Gadgets");
        assert_eq!(explicit.client_name(), Some("Gadgets"));

        let untagged = Operation::new("List", HttpMethod::Get, "/widgets");
        assert_eq!(untagged.client_name(), None);
    }

    #[test]
    fn test_empty_output_property_targets_whole_output() {
        let mapping = ParameterMapping {
            input: "a".to_string(),
            input_property: Some(String::new()),
            output_property: Some(String::new()),
        };
        assert_eq!(mapping.output_field(), None);
        assert_eq!(mapping.input_field(), None);
        assert_eq!(ParameterMapping::to_field("a", "a").output_field(), Some("a"));
    }

    #[test]
    fn test_operation_deserialization() {
        let op: Operation = serde_json::from_value(json!({
            "name": "GetWidget",
            "method": "get",
            "url": "/widgets/{id}",
            "parameters": [
                {"name": "id", "location": "path", "required": true,
                 "type": {"kind": "primitive", "type": "string"}}
            ],
            "responses": {
                "200": {"body": {"kind": "composite", "name": "Widget"}}
            },
            "transformations": [null]
        }))
        .unwrap();

        assert_eq!(op.method, HttpMethod::Get);
        assert!(op.responses.contains_key(&200));
        assert!(op.default_response.is_empty());
        assert_eq!(op.transformations.len(), 1);
        assert!(op.transformations[0].is_none());
        assert_eq!(op.parameter("id").map(|p| p.required), Some(true));
    }
}
