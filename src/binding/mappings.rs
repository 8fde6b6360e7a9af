//! Input transformation mapper.
//!
//! Each parameter transformation becomes a construction plan: declare the
//! output, optionally guard on the presence of nullable inputs, construct an
//! optional composite output before its fields are set, then assign every
//! mapped input in order.

use serde::{Deserialize, Serialize};

use crate::binding::ResolutionError;
use crate::model::{Operation, ParameterTransformation};

/// Initial value of a declared output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Initializer {
    /// Default-constructed composite
    Construct,
    /// Absent until assigned
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum MappingStep {
    Declare {
        output: String,
        type_name: String,
        initializer: Initializer,
    },
    /// Opens a block entered when any listed input is present
    OpenGuard { present: Vec<String> },
    Construct { output: String, type_name: String },
    /// `output[.output_property] = input[.input_property]`
    Assign {
        output: String,
        output_property: Option<String>,
        input: String,
        input_property: Option<String>,
    },
    CloseGuard,
}

/// Ordered steps building one transformation output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructionPlan {
    pub output: String,
    pub steps: Vec<MappingStep>,
}

impl ConstructionPlan {
    pub fn is_guarded(&self) -> bool {
        self.steps
            .iter()
            .any(|step| matches!(step, MappingStep::OpenGuard { .. }))
    }
}

fn require(
    transformation: Option<&ParameterTransformation>,
) -> Result<&ParameterTransformation, ResolutionError> {
    transformation.ok_or_else(|| {
        ResolutionError::InvalidArgument("parameter transformation is not set".to_string())
    })
}

/// Nullable inputs whose presence opens the guard, deduplicated in first-seen order
pub fn null_guard(
    transformation: Option<&ParameterTransformation>,
    operation: &Operation,
) -> Result<Vec<String>, ResolutionError> {
    let transformation = require(transformation)?;
    let mut present: Vec<String> = Vec::new();

    for mapping in &transformation.mappings {
        let input = operation.parameter(&mapping.input).ok_or_else(|| {
            ResolutionError::InvariantViolation(format!(
                "mapping input '{}' of output '{}' is not a parameter of operation '{}'",
                mapping.input, transformation.output.name, operation.name
            ))
        })?;
        if input.nullable && !present.contains(&input.name) {
            present.push(input.name.clone());
        }
    }
    Ok(present)
}

pub fn construction_plan(
    transformation: Option<&ParameterTransformation>,
    operation: &Operation,
) -> Result<ConstructionPlan, ResolutionError> {
    let transformation = require(transformation)?;
    let present = null_guard(Some(transformation), operation)?;

    let output = &transformation.output;
    let type_name = output.model_type.name();
    let composite = output.model_type.as_composite().is_some();

    let mut steps = vec![MappingStep::Declare {
        output: output.name.clone(),
        type_name: type_name.clone(),
        initializer: if output.required && composite {
            Initializer::Construct
        } else {
            Initializer::Absent
        },
    }];

    let guarded = !present.is_empty();
    if guarded {
        steps.push(MappingStep::OpenGuard { present });
    }

    // An optional composite is only allocated once a field is about to be set.
    let targets_field = transformation
        .mappings
        .iter()
        .any(|m| m.output_field().is_some());
    if targets_field && !output.required && composite {
        steps.push(MappingStep::Construct {
            output: output.name.clone(),
            type_name,
        });
    }

    steps.extend(transformation.mappings.iter().map(|m| MappingStep::Assign {
        output: output.name.clone(),
        output_property: m.output_field().map(str::to_string),
        input: m.input.clone(),
        input_property: m.input_field().map(str::to_string),
    }));

    if guarded {
        steps.push(MappingStep::CloseGuard);
    }

    Ok(ConstructionPlan {
        output: output.name.clone(),
        steps,
    })
}

/// Construction plans for every transformation of the operation, in order
pub fn input_mappings(operation: &Operation) -> Result<Vec<ConstructionPlan>, ResolutionError> {
    operation
        .transformations
        .iter()
        .map(|t| construction_plan(t.as_ref(), operation))
        .collect()
}
