//! Parameter classification: local signature parameters, logical wire
//! parameters, signature declarations and invocation arguments.

use serde::{Deserialize, Serialize};

use crate::binding::ResolutionError;
use crate::config::ResolverConfig;
use crate::model::{Operation, Parameter, ParameterLocation};

/// Default literal for optional parameters that declare none
pub const NULL_LITERAL: &str = "null";

/// Parameters that appear in the method signature.
///
/// Client-level, constant and unnamed parameters are excluded. Required
/// parameters come first; declared order is kept within each group so that
/// defaulted parameters only follow positional ones.
pub fn local_parameters(operation: &Operation) -> Vec<&Parameter> {
    let (mut required, optional): (Vec<&Parameter>, Vec<&Parameter>) = operation
        .parameters
        .iter()
        .filter(|p| !p.client_level && !p.name.trim().is_empty() && !p.constant)
        .partition(|p| p.required);
    required.extend(optional);
    required
}

/// Parameters consumed when building the request.
///
/// Every declared parameter that is placed on the wire (local or client-level),
/// followed by transformation outputs not already declared.
pub fn logical_parameters(operation: &Operation) -> Vec<&Parameter> {
    let mut logical: Vec<&Parameter> = operation
        .parameters
        .iter()
        .filter(|p| p.location != ParameterLocation::Virtual)
        .collect();

    for transformation in operation.transformations.iter().flatten() {
        let output = &transformation.output;
        if output.location != ParameterLocation::Virtual
            && !logical.iter().any(|p| p.name == output.name)
        {
            logical.push(output);
        }
    }
    logical
}

/// The single local body parameter, if any
pub fn body_parameter(operation: &Operation) -> Result<Option<&Parameter>, ResolutionError> {
    let mut bodies = local_parameters(operation)
        .into_iter()
        .filter(|p| p.location == ParameterLocation::Body);
    let first = bodies.next();
    if bodies.next().is_some() {
        return Err(ResolutionError::InvariantViolation(format!(
            "operation '{}' declares more than one body parameter",
            operation.name
        )));
    }
    Ok(first)
}

/// The body sent on the wire, including one synthesized by flattening
pub fn request_body(operation: &Operation) -> Result<Option<&Parameter>, ResolutionError> {
    let mut bodies = logical_parameters(operation)
        .into_iter()
        .filter(|p| p.location == ParameterLocation::Body);
    let first = bodies.next();
    if bodies.next().is_some() {
        return Err(ResolutionError::InvariantViolation(format!(
            "operation '{}' sends more than one request body",
            operation.name
        )));
    }
    Ok(first)
}

/// Signature projection of a local parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalParameter {
    pub name: String,
    pub serialized_name: String,
    pub location: ParameterLocation,
    pub type_name: String,
    pub required: bool,
}

impl From<&Parameter> for LocalParameter {
    fn from(parameter: &Parameter) -> Self {
        Self {
            name: parameter.name.clone(),
            serialized_name: parameter.wire_name().to_string(),
            location: parameter.location,
            type_name: parameter.model_type.name(),
            required: parameter.required,
        }
    }
}

/// One entry of a method signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParameterDeclaration {
    Parameter {
        name: String,
        type_name: String,
        /// Present only for optional parameters
        default_value: Option<String>,
    },
    CustomHeaders,
    CancellationToken,
}

/// Method signature declarations in call order
pub fn declarations(operation: &Operation, config: &ResolverConfig) -> Vec<ParameterDeclaration> {
    let mut declarations: Vec<ParameterDeclaration> = local_parameters(operation)
        .into_iter()
        .map(|p| ParameterDeclaration::Parameter {
            name: p.name.clone(),
            type_name: p.model_type.name(),
            default_value: if p.required {
                None
            } else {
                Some(
                    p.default_value
                        .clone()
                        .unwrap_or_else(|| NULL_LITERAL.to_string()),
                )
            },
        })
        .collect();

    if config.add_custom_headers {
        declarations.push(ParameterDeclaration::CustomHeaders);
    }
    if config.add_cancellation_token {
        declarations.push(ParameterDeclaration::CancellationToken);
    }
    declarations
}

/// Argument names used when forwarding a call to the underlying method
pub fn invocation_args(operation: &Operation) -> Vec<String> {
    local_parameters(operation)
        .into_iter()
        .map(|p| p.name.clone())
        .collect()
}
