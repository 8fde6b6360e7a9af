//! Response and exception resolution.
//!
//! The success shape is read from the response registered under status 200;
//! the exception type from the default response. Nullability depends on the
//! HTTP method: a HEAD request never carries a body, so nothing it returns is
//! nullable.

use serde::{Deserialize, Serialize};

use crate::config::ResolverConfig;
use crate::model::{HttpMethod, ModelType, Operation, Response};

/// Status code whose response defines the success shape
pub const SUCCESS_STATUS: u16 = 200;

/// A resolved type with its nullability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    pub name: String,
    pub nullable: bool,
}

impl TypeRef {
    pub fn new(model_type: &ModelType, nullable: bool) -> Self {
        Self {
            name: model_type.name(),
            nullable,
        }
    }
}

/// Shape of a successful result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum SuccessType {
    Unit { marker: String },
    Body(TypeRef),
    Headers(TypeRef),
    Compound { body: TypeRef, headers: TypeRef },
}

impl SuccessType {
    /// The single carried type, preferring the body of a compound
    pub fn payload(&self) -> Option<&TypeRef> {
        match self {
            SuccessType::Unit { .. } => None,
            SuccessType::Body(ty) | SuccessType::Headers(ty) => Some(ty),
            SuccessType::Compound { body, .. } => Some(body),
        }
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, SuccessType::Unit { .. })
    }
}

/// Payload of the asynchronous result wrapper; `None` for a bare completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsyncWrapper {
    pub payload: Option<TypeRef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExceptionOrigin {
    /// Taken literally from the name-override extension
    NameOverride,
    /// Composite type name plus the exception suffix
    Derived,
    /// No composite error body; generic transport exception
    Transport,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionType {
    pub identifier: String,
    pub origin: ExceptionOrigin,
}

/// When a received status code is treated as a failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailurePredicate {
    /// Fails unless the status is one of the declared codes
    UnexpectedStatus { expected: Vec<u16> },
    /// No declared responses; fails on any non-success status
    NotSuccessStatus,
}

const EXCEPTION_SUFFIX: &str = "Exception";

/// The 200 response, treating an empty one as absent
pub fn success_response(operation: &Operation) -> Option<&Response> {
    operation
        .responses
        .get(&SUCCESS_STATUS)
        .filter(|response| !response.is_empty())
}

pub fn body_nullable(operation: &Operation) -> bool {
    operation.method != HttpMethod::Head && operation.nullable_return
}

pub fn headers_nullable(operation: &Operation) -> bool {
    operation.method != HttpMethod::Head
}

fn body_ref(operation: &Operation, body: &ModelType) -> TypeRef {
    TypeRef::new(body, body_nullable(operation))
}

fn headers_ref(operation: &Operation, headers: &ModelType) -> TypeRef {
    TypeRef::new(headers, headers_nullable(operation))
}

fn unit(config: &ResolverConfig) -> SuccessType {
    SuccessType::Unit {
        marker: config.unit_marker.clone(),
    }
}

/// Full success shape: body and headers together when both are declared
pub fn success_type(operation: &Operation, config: &ResolverConfig) -> SuccessType {
    let Some(response) = success_response(operation) else {
        return unit(config);
    };
    match (&response.body, &response.headers) {
        (Some(body), Some(headers)) => SuccessType::Compound {
            body: body_ref(operation, body),
            headers: headers_ref(operation, headers),
        },
        (Some(body), None) => SuccessType::Body(body_ref(operation, body)),
        (None, Some(headers)) => SuccessType::Headers(headers_ref(operation, headers)),
        (None, None) => unit(config),
    }
}

/// Method return type: the body if declared, otherwise the headers
pub fn return_type(operation: &Operation, config: &ResolverConfig) -> SuccessType {
    match success_response(operation) {
        Some(Response {
            body: Some(body), ..
        }) => SuccessType::Body(body_ref(operation, body)),
        Some(Response {
            headers: Some(headers),
            ..
        }) => SuccessType::Headers(headers_ref(operation, headers)),
        _ => unit(config),
    }
}

pub fn async_wrapper(operation: &Operation, config: &ResolverConfig) -> AsyncWrapper {
    AsyncWrapper {
        payload: return_type(operation, config).payload().cloned(),
    }
}

pub fn exception_type(operation: &Operation, config: &ResolverConfig) -> ExceptionType {
    match operation
        .default_response
        .body
        .as_ref()
        .and_then(ModelType::as_composite)
    {
        Some(composite) => match composite.name_override() {
            Some(identifier) => ExceptionType {
                identifier,
                origin: ExceptionOrigin::NameOverride,
            },
            None => ExceptionType {
                identifier: format!("{}{EXCEPTION_SUFFIX}", composite.name),
                origin: ExceptionOrigin::Derived,
            },
        },
        None => ExceptionType {
            identifier: config.generic_exception.clone(),
            origin: ExceptionOrigin::Transport,
        },
    }
}

pub fn failure_predicate(operation: &Operation) -> FailurePredicate {
    if operation.responses.is_empty() {
        FailurePredicate::NotSuccessStatus
    } else {
        FailurePredicate::UnexpectedStatus {
            expected: operation.responses.keys().copied().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CompositeType, NAME_OVERRIDE_EXTENSION};
    use serde_json::json;

    fn widget() -> ModelType {
        ModelType::composite("Widget")
    }

    fn widget_headers() -> ModelType {
        ModelType::composite("WidgetHeaders")
    }

    #[test]
    fn test_success_type_shapes() {
        let config = ResolverConfig::default();
        let both = Operation::new("Get", HttpMethod::Get, "/w").with_response(
            200,
            Response {
                body: Some(widget()),
                headers: Some(widget_headers()),
            },
        );
        assert_eq!(
            success_type(&both, &config),
            SuccessType::Compound {
                body: TypeRef {
                    name: "Widget".to_string(),
                    nullable: false
                },
                headers: TypeRef {
                    name: "WidgetHeaders".to_string(),
                    nullable: true
                },
            }
        );
        assert_eq!(
            return_type(&both, &config),
            SuccessType::Body(TypeRef {
                name: "Widget".to_string(),
                nullable: false
            })
        );

        let headers_only = Operation::new("Check", HttpMethod::Get, "/w")
            .with_response(200, Response::with_headers(widget_headers()));
        assert!(matches!(
            success_type(&headers_only, &config),
            SuccessType::Headers(_)
        ));
    }

    #[test]
    fn test_empty_response_is_no_response() {
        let config = ResolverConfig::default();
        let empty = Operation::new("Delete", HttpMethod::Delete, "/w")
            .with_response(200, Response::default());
        let missing = Operation::new("Delete", HttpMethod::Delete, "/w");

        for op in [&empty, &missing] {
            assert_eq!(
                success_type(op, &config),
                SuccessType::Unit {
                    marker: "Ok".to_string()
                }
            );
            assert_eq!(async_wrapper(op, &config), AsyncWrapper { payload: None });
        }
    }

    #[test]
    fn test_success_ignores_other_2xx_codes() {
        let config = ResolverConfig::default();
        let op = Operation::new("Create", HttpMethod::Put, "/w")
            .with_response(201, Response::with_body(widget()));
        assert!(success_type(&op, &config).is_unit());
    }

    #[test]
    fn test_head_is_never_nullable() {
        let config = ResolverConfig::default();
        let op = Operation::new("Exists", HttpMethod::Head, "/w")
            .nullable_return()
            .with_response(
                200,
                Response {
                    body: Some(ModelType::primitive(crate::model::PrimitiveKind::Boolean)),
                    headers: Some(widget_headers()),
                },
            );

        match success_type(&op, &config) {
            SuccessType::Compound { body, headers } => {
                assert!(!body.nullable);
                assert!(!headers.nullable);
            }
            other => panic!("Expected compound success type, got {other:?}"),
        }
    }

    #[test]
    fn test_nullable_return_flag() {
        let config = ResolverConfig::default();
        let op = Operation::new("Find", HttpMethod::Get, "/w")
            .nullable_return()
            .with_response(200, Response::with_body(widget()));

        let wrapper = async_wrapper(&op, &config);
        assert_eq!(
            wrapper.payload,
            Some(TypeRef {
                name: "Widget".to_string(),
                nullable: true
            })
        );
    }

    #[test]
    fn test_async_wrapper_falls_back_to_headers() {
        let config = ResolverConfig::default();
        let op = Operation::new("Check", HttpMethod::Get, "/w")
            .with_response(200, Response::with_headers(widget_headers()));

        assert_eq!(
            async_wrapper(&op, &config).payload.map(|t| t.name),
            Some("WidgetHeaders".to_string())
        );
    }

    #[test]
    fn test_exception_type_resolution() {
        let config = ResolverConfig::default();

        let derived = Operation::new("Get", HttpMethod::Get, "/w")
            .with_default_response(Response::with_body(ModelType::composite("Fault")));
        assert_eq!(
            exception_type(&derived, &config),
            ExceptionType {
                identifier: "FaultException".to_string(),
                origin: ExceptionOrigin::Derived,
            }
        );

        let renamed = Operation::new("Get", HttpMethod::Get, "/w").with_default_response(
            Response::with_body(ModelType::Composite(
                CompositeType::new("Fault")
                    .with_extension(NAME_OVERRIDE_EXTENSION, json!({"name": "CloudError"})),
            )),
        );
        assert_eq!(exception_type(&renamed, &config).identifier, "CloudError");

        let primitive = Operation::new("Get", HttpMethod::Get, "/w")
            .with_default_response(Response::with_body(ModelType::string()));
        let none = Operation::new("Get", HttpMethod::Get, "/w");
        for op in [&primitive, &none] {
            let exception = exception_type(op, &config);
            assert_eq!(exception.identifier, "HttpOperationException");
            assert_eq!(exception.origin, ExceptionOrigin::Transport);
        }
    }

    #[test]
    fn test_failure_predicate() {
        let op = Operation::new("Create", HttpMethod::Put, "/w")
            .with_response(201, Response::with_body(widget()))
            .with_response(200, Response::with_body(widget()));
        assert_eq!(
            failure_predicate(&op),
            FailurePredicate::UnexpectedStatus {
                expected: vec![200, 201]
            }
        );

        let bare = Operation::new("Ping", HttpMethod::Get, "/ping");
        assert_eq!(failure_predicate(&bare), FailurePredicate::NotSuccessStatus);
    }
}
