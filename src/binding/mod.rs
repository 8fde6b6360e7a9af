//! Binding domain module - turns operation descriptions into emitter-ready facts
//!
//! Each submodule derives one family of facts from an immutable [`Operation`]:
//! parameter classification, the URL plan, response and exception types, input
//! construction plans and method metadata. [`resolve`] combines them into a
//! single [`ResolvedBinding`]; [`filter_methods`] decides which operations a
//! client exposes in the first place.

pub mod errors;
pub mod filter;
pub mod mappings;
pub mod method;
pub mod parameters;
pub mod responses;
pub mod serialization;
pub mod surface;
pub mod url;

pub use errors::*;
pub use filter::*;
pub use mappings::*;
pub use method::*;
pub use parameters::*;
pub use responses::*;
pub use serialization::*;
pub use surface::*;
pub use url::*;

use serde::Serialize;

use crate::config::ResolverConfig;
use crate::model::{Client, HttpMethod, Operation};

/// Everything an emitter needs to render one client method
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedBinding {
    pub name: String,
    pub method_name: String,
    pub http_method: HttpMethod,
    pub url: String,
    pub visibility: Visibility,
    pub method_reference: MethodReference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_scope: Option<String>,
    pub local_parameters: Vec<LocalParameter>,
    pub declarations: Vec<ParameterDeclaration>,
    pub invocation_args: Vec<String>,
    pub url_plan: Vec<UrlInstruction>,
    pub success_type: SuccessType,
    pub return_type: SuccessType,
    pub async_wrapper: AsyncWrapper,
    pub exception: ExceptionType,
    pub failure: FailurePredicate,
    pub body_argument: Option<BodyArgument>,
    /// Settings the request body is serialized with
    pub serialization: Option<SerializationSettings>,
    /// Settings the success body is deserialized with
    pub deserialization: Option<SerializationSettings>,
    pub input_mappings: Vec<ConstructionPlan>,
}

/// Resolves one operation.
///
/// Pure: the operation is only read, and resolving the same operation with
/// the same configuration always yields an equal binding. The request verb
/// is resolved separately by [`request_verb`] since it rejects methods that
/// the rest of the binding handles fine.
pub fn resolve(
    operation: &Operation,
    config: &ResolverConfig,
) -> Result<ResolvedBinding, ResolutionError> {
    let client = ClientReference::for_operation(operation);
    let body = request_body(operation)?;
    let success_body = success_response(operation).and_then(|r| r.body.as_ref());

    let binding = ResolvedBinding {
        name: operation.name.clone(),
        method_name: method_name(&operation.name),
        http_method: operation.method,
        url: operation.url.clone(),
        visibility: visibility(operation),
        method_reference: method_reference(operation),
        required_scope: required_scope(operation),
        local_parameters: local_parameters(operation)
            .into_iter()
            .map(LocalParameter::from)
            .collect(),
        declarations: declarations(operation, config),
        invocation_args: invocation_args(operation),
        url_plan: url_plan(operation),
        success_type: success_type(operation, config),
        return_type: return_type(operation, config),
        async_wrapper: async_wrapper(operation, config),
        exception: exception_type(operation, config),
        failure: failure_predicate(operation),
        body_argument: body_argument(operation)?,
        serialization: body.map(|p| serialization_settings(&p.model_type, client)),
        deserialization: success_body.map(|ty| deserialization_settings(ty, client)),
        input_mappings: input_mappings(operation)?,
    };

    tracing::debug!(
        operation = %binding.name,
        method = %binding.http_method,
        url_steps = binding.url_plan.len(),
        mappings = binding.input_mappings.len(),
        "Resolved operation binding"
    );
    Ok(binding)
}

/// Resolves every operation the client exposes under its own name
pub fn resolve_client(
    client: &Client,
    config: &ResolverConfig,
) -> Result<Vec<ResolvedBinding>, ResolutionError> {
    filter_methods(&client.operations, &client.name, config)
        .into_iter()
        .map(|op| resolve(op, config))
        .collect()
}

/// Resolves a single operation of the client by name
pub fn resolve_operation(
    client: &Client,
    name: &str,
    config: &ResolverConfig,
) -> Result<ResolvedBinding, ResolutionError> {
    let operation = client
        .operation(name)
        .ok_or_else(|| ResolutionError::UnknownOperation(name.to_string()))?;
    resolve(operation, config)
}
