//! Display options for selection widgets.

use serde::{Deserialize, Serialize};

use crate::enums::{Classification, ComplianceFieldIdValue, IdLogicalType};

/// A value/label pair rendered by a dropdown.
///
/// `value` is opaque to the rendering layer. `is_disabled` is only written to
/// JSON when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldIdentifierOption<T> {
    pub value: T,
    pub label: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_disabled: bool,
}

impl<T> FieldIdentifierOption<T> {
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            is_disabled: false,
        }
    }

    /// Returns a copy of the option that cannot be selected.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.is_disabled = true;
        self
    }
}

pub type FieldIdOption = FieldIdentifierOption<ComplianceFieldIdValue>;

/// Field format option; `None` is the placeholder value.
pub type FieldFormatOption = FieldIdentifierOption<Option<IdLogicalType>>;

/// Security classification option; `None` is the placeholder value.
pub type SecurityClassificationOption = FieldIdentifierOption<Option<Classification>>;
