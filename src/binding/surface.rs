//! Client-level facts shared by every method of a client surface

use serde::{Deserialize, Serialize};

use crate::binding::method::Visibility;
use crate::config::ResolverConfig;
use crate::model::{Client, ModelType, Operation, PrimitiveKind};
use crate::utils::to_camel_case;

/// Constructor argument derived from a required read-only client property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorParameter {
    pub name: String,
    pub type_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSurface {
    pub name: String,
    pub constructor_visibility: Visibility,
    pub required_constructor_parameters: Vec<ConstructorParameter>,
    pub contains_credentials: bool,
    pub custom_base_uri: bool,
    /// Some reachable composite type has a flattened property
    pub needs_transformation_converter: bool,
}

fn has_flattened_property(model_type: &ModelType) -> bool {
    model_type.any(&mut |ty: &ModelType| {
        ty.as_composite()
            .map(|c| c.properties.iter().any(|p| p.flattened))
            .unwrap_or(false)
    })
}

fn operation_types(operation: &Operation) -> impl Iterator<Item = &ModelType> {
    let parameters = operation.parameters.iter().map(|p| &p.model_type);
    let outputs = operation
        .transformations
        .iter()
        .flatten()
        .map(|t| &t.output.model_type);
    let responses = operation
        .responses
        .values()
        .chain(std::iter::once(&operation.default_response))
        .flat_map(|r| r.body.iter().chain(r.headers.iter()));
    parameters.chain(outputs).chain(responses)
}

pub fn resolve_surface(client: &Client, config: &ResolverConfig) -> ClientSurface {
    let required_constructor_parameters = client
        .properties
        .iter()
        .filter(|p| p.required && p.read_only)
        .map(|p| ConstructorParameter {
            name: to_camel_case(&p.name),
            type_name: p.model_type.name(),
        })
        .collect();

    let contains_credentials = client
        .properties
        .iter()
        .any(|p| p.model_type.is_primitive(PrimitiveKind::Credentials));

    let needs_transformation_converter = client
        .properties
        .iter()
        .map(|p| &p.model_type)
        .chain(client.operations.iter().flat_map(operation_types))
        .any(has_flattened_property);

    let surface = ClientSurface {
        name: client.name.clone(),
        constructor_visibility: if config.internal_constructors {
            Visibility::Internal
        } else {
            Visibility::Public
        },
        required_constructor_parameters,
        contains_credentials,
        custom_base_uri: client.is_custom_base_uri(),
        needs_transformation_converter,
    };
    tracing::debug!(client = %surface.name, "Resolved client surface");
    surface
}
