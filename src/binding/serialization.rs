//! Serialization strategy selection and formatted value references

use serde::{Deserialize, Serialize};

use crate::binding::method::ClientReference;
use crate::model::{ModelType, Parameter, PrimitiveKind};

/// Dedicated converter for a special wire encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Converter {
    Date,
    DateTimeRfc1123,
    Base64Url,
    UnixTime,
}

/// Settings a value is (de)serialized with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "via", rename_all = "snake_case")]
pub enum SerializationSettings {
    Converter(Converter),
    /// The shared settings held by the client
    Client(ClientReference),
}

// Checked in order; the first encoding found anywhere in the type wins.
const SERIALIZATION_ORDER: [(PrimitiveKind, Converter); 4] = [
    (PrimitiveKind::Date, Converter::Date),
    (PrimitiveKind::DateTimeRfc1123, Converter::DateTimeRfc1123),
    (PrimitiveKind::Base64Url, Converter::Base64Url),
    (PrimitiveKind::UnixTime, Converter::UnixTime),
];

// RFC1123 timestamps are read by the shared settings.
const DESERIALIZATION_ORDER: [(PrimitiveKind, Converter); 3] = [
    (PrimitiveKind::Date, Converter::Date),
    (PrimitiveKind::Base64Url, Converter::Base64Url),
    (PrimitiveKind::UnixTime, Converter::UnixTime),
];

fn select(
    model_type: &ModelType,
    order: &[(PrimitiveKind, Converter)],
    client: ClientReference,
) -> SerializationSettings {
    order
        .iter()
        .find(|(kind, _)| model_type.is_or_contains(*kind))
        .map(|(_, converter)| SerializationSettings::Converter(*converter))
        .unwrap_or(SerializationSettings::Client(client))
}

pub fn serialization_settings(
    model_type: &ModelType,
    client: ClientReference,
) -> SerializationSettings {
    select(model_type, &SERIALIZATION_ORDER, client)
}

pub fn deserialization_settings(
    model_type: &ModelType,
    client: ClientReference,
) -> SerializationSettings {
    select(model_type, &DESERIALIZATION_ORDER, client)
}

/// How a parameter value is rendered into the URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "render", rename_all = "snake_case")]
pub enum ValueReference {
    /// The parameter value as-is
    Raw { name: String },
    /// Sequence elements joined with the collection separator
    Joined { name: String, separator: String },
    /// Serialized through the given settings
    Serialized {
        name: String,
        settings: SerializationSettings,
    },
}

impl ValueReference {
    pub fn raw(parameter: &Parameter) -> Self {
        ValueReference::Raw {
            name: parameter.name.clone(),
        }
    }
}

/// Collection-format-aware rendering of a parameter value
pub fn formatted_reference(parameter: &Parameter, client: ClientReference) -> ValueReference {
    let name = parameter.name.clone();
    match &parameter.model_type {
        ModelType::Sequence { .. } => ValueReference::Joined {
            name,
            separator: parameter.collection_format.separator().to_string(),
        },
        ModelType::Primitive {
            primitive: PrimitiveKind::String,
        } => ValueReference::Raw { name },
        other => ValueReference::Serialized {
            name,
            settings: serialization_settings(other, client),
        },
    }
}
