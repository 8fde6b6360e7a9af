//! Method-level facts: naming, visibility, client references, the request verb
//! and the body argument passed to it.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::binding::responses::{SuccessType, TypeRef, return_type, success_type};
use crate::binding::{ResolutionError, parameters::body_parameter};
use crate::config::ResolverConfig;
use crate::model::{HttpMethod, Operation, REQUIRED_SCOPE_EXTENSION};
use crate::utils::to_pascal_case;

/// Body type named in POST/PUT verbs when the operation sends no body
pub const STRING_PLACEHOLDER: &str = "string";

const ASYNC_SUFFIX: &str = "Async";

static VERSION_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"V[0-9]+$").expect("version suffix pattern is valid"));

/// How generated code reaches the client that owns shared settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientReference {
    /// The method lives on the client itself
    Direct,
    /// The method lives on a method group that holds its parent client
    Parent,
}

impl ClientReference {
    pub fn for_operation(operation: &Operation) -> Self {
        match operation.group.as_deref() {
            Some(group) if !group.is_empty() => ClientReference::Parent,
            _ => ClientReference::Direct,
        }
    }
}

/// Path from a client instance to the generated method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodReference {
    pub client: ClientReference,
    pub group_property: Option<String>,
    pub name: String,
}

pub fn method_reference(operation: &Operation) -> MethodReference {
    MethodReference {
        client: ClientReference::for_operation(operation),
        group_property: operation
            .group
            .as_deref()
            .filter(|g| !g.is_empty())
            .map(to_pascal_case),
        name: operation.name.clone(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Internal,
}

pub fn visibility(operation: &Operation) -> Visibility {
    if operation.hidden {
        Visibility::Internal
    } else {
        Visibility::Public
    }
}

/// Generated method name.
///
/// A trailing `V<digits>` version marker and any trailing `1`s are dropped,
/// then `Async` is appended unless already present.
pub fn method_name(name: &str) -> String {
    let without_version = VERSION_SUFFIX.replace(name, "");
    let corrected = without_version.trim_end_matches('1');
    if corrected
        .to_ascii_lowercase()
        .ends_with(&ASYNC_SUFFIX.to_ascii_lowercase())
    {
        corrected.to_string()
    } else {
        format!("{corrected}{ASYNC_SUFFIX}")
    }
}

pub fn required_scope(operation: &Operation) -> Option<String> {
    operation
        .extension_str(REQUIRED_SCOPE_EXTENSION)
        .map(str::to_string)
}

/// Transport call selected for the operation's HTTP method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verb", rename_all = "UPPERCASE")]
pub enum RequestVerb {
    Get { response: Option<TypeRef> },
    Delete { response: Option<TypeRef> },
    Post { body: String, response: SuccessType },
    Put { body: String, response: SuccessType },
}

/// Resolves the transport verb; only GET, POST, PUT and DELETE are supported
pub fn request_verb(
    operation: &Operation,
    config: &ResolverConfig,
) -> Result<RequestVerb, ResolutionError> {
    let body_type = || -> Result<String, ResolutionError> {
        Ok(body_parameter(operation)?
            .map(|p| p.model_type.name())
            .unwrap_or_else(|| STRING_PLACEHOLDER.to_string()))
    };

    match operation.method {
        HttpMethod::Get => Ok(RequestVerb::Get {
            response: return_type(operation, config).payload().cloned(),
        }),
        HttpMethod::Delete => Ok(RequestVerb::Delete {
            response: return_type(operation, config).payload().cloned(),
        }),
        HttpMethod::Post => Ok(RequestVerb::Post {
            body: body_type()?,
            response: success_type(operation, config),
        }),
        HttpMethod::Put => Ok(RequestVerb::Put {
            body: body_type()?,
            response: success_type(operation, config),
        }),
        other => Err(ResolutionError::UnsupportedHttpMethod(other)),
    }
}

/// Body value handed to POST/PUT calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum BodyArgument {
    Parameter(String),
    Null,
}

/// `None` for verbs that take no body
pub fn body_argument(operation: &Operation) -> Result<Option<BodyArgument>, ResolutionError> {
    if !matches!(operation.method, HttpMethod::Post | HttpMethod::Put) {
        return Ok(None);
    }
    Ok(Some(match body_parameter(operation)? {
        Some(body) => BodyArgument::Parameter(body.name.clone()),
        None => BodyArgument::Null,
    }))
}
