//! Error types for the binding domain

use crate::model::HttpMethod;
use thiserror::Error;

/// Errors raised while resolving an operation into binding facts.
///
/// Every variant describes a malformed input graph; resolution is pure, so
/// none of them is worth retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("HttpMethod: {0} is not supported")]
    UnsupportedHttpMethod(HttpMethod),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_method_names_the_verb() {
        let error = ResolutionError::UnsupportedHttpMethod(HttpMethod::Patch);
        assert_eq!(error.to_string(), "HttpMethod: PATCH is not supported");
    }
}
