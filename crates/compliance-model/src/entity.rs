//! Per-field compliance annotations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::{Classification, ComplianceFieldIdValue, IdLogicalType};

/// JSON key of the transient read-only marker.
pub const READONLY_KEY: &str = "readonly";

pub const IDENTIFIER_FIELD_KEY: &str = "identifierField";
pub const IDENTIFIER_TYPE_KEY: &str = "identifierType";
pub const LOGICAL_TYPE_KEY: &str = "logicalType";
pub const NON_OWNER_KEY: &str = "nonOwner";
pub const PII_KEY: &str = "pii";
pub const SECURITY_CLASSIFICATION_KEY: &str = "securityClassification";
pub const VALUE_PATTERN_KEY: &str = "valuePattern";

/// Value of the transient `readonly` marker as it arrived on the wire.
///
/// Only the JSON literal `true` is [`ReadonlyFlag::Set`]. Any other value
/// (`false`, `"true"`, `1`, `null`, ...) is kept verbatim in
/// [`ReadonlyFlag::Other`] and does not make the entity read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadonlyFlag {
    Set,
    Other(Value),
}

impl From<bool> for ReadonlyFlag {
    fn from(value: bool) -> Self {
        if value {
            ReadonlyFlag::Set
        } else {
            ReadonlyFlag::Other(Value::Bool(false))
        }
    }
}

impl From<Value> for ReadonlyFlag {
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(true) => ReadonlyFlag::Set,
            other => ReadonlyFlag::Other(other),
        }
    }
}

impl From<ReadonlyFlag> for Value {
    fn from(flag: ReadonlyFlag) -> Self {
        match flag {
            ReadonlyFlag::Set => Value::Bool(true),
            ReadonlyFlag::Other(value) => value,
        }
    }
}

/// Compliance annotation for one field of a dataset.
///
/// Any JSON object decodes: attributes are kept exactly as they arrived, and
/// the typed accessors return `None` for a missing key or a value of the
/// wrong shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComplianceEntity {
    attributes: Map<String, Value>,
}

impl ComplianceEntity {
    pub fn new(identifier_field: impl Into<String>) -> Self {
        Self::default().with_attribute(
            IDENTIFIER_FIELD_KEY,
            Value::String(identifier_field.into()),
        )
    }

    #[must_use]
    pub fn with_identifier_type(self, identifier_type: ComplianceFieldIdValue) -> Self {
        self.with_attribute(IDENTIFIER_TYPE_KEY, identifier_type.as_str().into())
    }

    #[must_use]
    pub fn with_logical_type(self, logical_type: IdLogicalType) -> Self {
        self.with_attribute(LOGICAL_TYPE_KEY, logical_type.as_str().into())
    }

    #[must_use]
    pub fn with_classification(self, classification: Classification) -> Self {
        self.with_attribute(SECURITY_CLASSIFICATION_KEY, classification.as_str().into())
    }

    #[must_use]
    pub fn with_readonly(self, flag: impl Into<ReadonlyFlag>) -> Self {
        self.with_attribute(READONLY_KEY, Value::from(flag.into()))
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn identifier_field(&self) -> Option<&str> {
        self.get(IDENTIFIER_FIELD_KEY).and_then(Value::as_str)
    }

    /// `None` when absent, `null`, or not a known identifier.
    pub fn identifier_type(&self) -> Option<ComplianceFieldIdValue> {
        self.get(IDENTIFIER_TYPE_KEY)?.as_str()?.parse().ok()
    }

    pub fn logical_type(&self) -> Option<IdLogicalType> {
        self.get(LOGICAL_TYPE_KEY)?.as_str()?.parse().ok()
    }

    pub fn security_classification(&self) -> Option<Classification> {
        self.get(SECURITY_CLASSIFICATION_KEY)?.as_str()?.parse().ok()
    }

    pub fn non_owner(&self) -> Option<bool> {
        self.get(NON_OWNER_KEY).and_then(Value::as_bool)
    }

    pub fn pii(&self) -> Option<bool> {
        self.get(PII_KEY).and_then(Value::as_bool)
    }

    pub fn value_pattern(&self) -> Option<&str> {
        self.get(VALUE_PATTERN_KEY).and_then(Value::as_str)
    }

    pub fn readonly(&self) -> Option<ReadonlyFlag> {
        self.get(READONLY_KEY).cloned().map(ReadonlyFlag::from)
    }

    /// True only when the marker is present and exactly `true`.
    pub fn is_marked_readonly(&self) -> bool {
        self.get(READONLY_KEY) == Some(&Value::Bool(true))
    }

    /// Builds a copy of this entity without the `readonly` marker.
    ///
    /// Every other attribute is carried over unchanged; `self` is left
    /// untouched.
    pub fn without_readonly(&self) -> Self {
        Self {
            attributes: self
                .attributes
                .iter()
                .filter(|(key, _)| key.as_str() != READONLY_KEY)
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        }
    }
}
