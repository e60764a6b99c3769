use serde::{Deserialize, Serialize};

use crate::enums::{Classification, ComplianceFieldIdValue, IdLogicalType};

/// An entry in the compliance data type catalog.
///
/// The catalog is owned by an external source and is read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceDataType {
    pub id: ComplianceFieldIdValue,
    pub title: String,
    /// Whether values of this type are personally identifiable.
    #[serde(default)]
    pub pii: bool,
    /// Whether this type is an identifier type (as opposed to a plain attribute).
    #[serde(default)]
    pub id_type: bool,
    #[serde(default)]
    pub default_security_classification: Option<Classification>,
    /// Field formats a field of this type may declare, in catalog order.
    #[serde(default)]
    pub supported_field_formats: Vec<IdLogicalType>,
}

impl ComplianceDataType {
    pub fn new(id: ComplianceFieldIdValue, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            pii: false,
            id_type: false,
            default_security_classification: None,
            supported_field_formats: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_field_formats(mut self, formats: impl IntoIterator<Item = IdLogicalType>) -> Self {
        self.supported_field_formats = formats.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_default_classification(mut self, classification: Classification) -> Self {
        self.default_security_classification = Some(classification);
        self
    }
}
