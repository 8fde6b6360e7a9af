//! URL plan builder: ordered path-segment substitutions and query insertions

use serde::{Deserialize, Serialize};

use crate::binding::method::ClientReference;
use crate::binding::parameters::logical_parameters;
use crate::binding::serialization::{ValueReference, formatted_reference};
use crate::model::{CollectionFormat, Operation, Parameter, ParameterLocation};

/// One instruction applied to the URL template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum UrlInstruction {
    /// Replace `{segment}` in the template with the value
    ReplaceSegment {
        segment: String,
        value: ValueReference,
    },
    /// Append `key=value` to the query string
    AddQueryParameter { key: String, value: ValueReference },
}

impl UrlInstruction {
    pub fn value(&self) -> &ValueReference {
        match self {
            UrlInstruction::ReplaceSegment { value, .. }
            | UrlInstruction::AddQueryParameter { value, .. } => value,
        }
    }
}

fn path_instruction(parameter: &Parameter, client: ClientReference) -> UrlInstruction {
    let value = if parameter.model_type.is_sequence() {
        formatted_reference(parameter, client)
    } else {
        ValueReference::raw(parameter)
    };
    UrlInstruction::ReplaceSegment {
        segment: parameter.wire_name().to_string(),
        value,
    }
}

fn query_instruction(parameter: &Parameter, client: ClientReference) -> UrlInstruction {
    let value = if parameter.collection_format == CollectionFormat::Multi {
        ValueReference::raw(parameter)
    } else {
        formatted_reference(parameter, client)
    };
    UrlInstruction::AddQueryParameter {
        key: parameter.wire_name().to_string(),
        value,
    }
}

/// Builds the URL plan for an operation.
///
/// Every path substitution precedes every query insertion, and each group
/// keeps the declared parameter order. Header and body parameters do not
/// take part.
pub fn url_plan(operation: &Operation) -> Vec<UrlInstruction> {
    let client = ClientReference::for_operation(operation);
    let logical = logical_parameters(operation);

    let paths = logical
        .iter()
        .filter(|p| p.location == ParameterLocation::Path)
        .map(|p| path_instruction(p, client));
    let queries = logical
        .iter()
        .filter(|p| p.location == ParameterLocation::Query)
        .map(|p| query_instruction(p, client));

    paths.chain(queries).collect()
}
