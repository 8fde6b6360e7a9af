//! The client aggregate: the operation set exposed under one client name

use serde::{Deserialize, Serialize};

use super::operation::Operation;
use super::types::{Extensions, Property};

/// Extension marking a client whose base URI is built from parameters
pub const PARAMETERIZED_HOST_EXTENSION: &str = "x-ms-parameterized-host";

/// A generated client surface and the operations it owns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub operations: Vec<Operation>,
    #[serde(default)]
    pub extensions: Extensions,
}

impl Client {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            operations: Vec::new(),
            extensions: Extensions::new(),
        }
    }

    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn operation(&self, name: &str) -> Option<&Operation> {
        self.operations.iter().find(|op| op.name == name)
    }

    pub fn is_custom_base_uri(&self) -> bool {
        self.extensions.contains_key(PARAMETERIZED_HOST_EXTENSION)
    }
}
