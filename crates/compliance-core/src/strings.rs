//! User-facing text consumed verbatim by the presentation layer.

use compliance_model::ModelError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Fixed English messages for the compliance editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompliancePolicyStrings {
    pub compliance_data_exception: &'static str,
    pub missing_types: &'static str,
    pub success_updating: &'static str,
    pub failed_updating: &'static str,
    pub success_uploading: &'static str,
    pub invalid_policy_data: &'static str,
    pub help_text: HelpText,
    pub missing_purge_policy: &'static str,
    pub missing_dataset_security_classification: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HelpText {
    pub classification: &'static str,
}

pub const COMPLIANCE_POLICY_STRINGS: CompliancePolicyStrings = CompliancePolicyStrings {
    compliance_data_exception: "Unexpected discrepancy in compliance data",
    missing_types: "Looks like fields are missing some required information.",
    success_updating: "Changes have been successfully saved!",
    failed_updating: "Oops! We are having trouble updating this dataset at the moment.",
    success_uploading: "Metadata successfully updated! Please \"Save\" when ready.",
    invalid_policy_data: "Received policy in an unexpected format! Please check the provided attributes and try again.",
    help_text: HelpText {
        classification: "This security classification is derived from the dataset catalog and should be good enough in most cases. You can optionally override it if required by house security.",
    },
    missing_purge_policy: "Please specify a Compliance Purge Policy",
    missing_dataset_security_classification: "Please specify a security classification for this dataset.",
};

/// Markup explaining why auto-classified tracking fields are hidden.
///
/// Opaque to this crate; the presentation layer decides how to trust it.
pub const HIDDEN_TRACKING_FIELDS: &str = "<p>Some fields in this dataset have been hidden from the table(s) below. \
These are tracking fields for which we've been able to predetermine the compliance classification.</p>\
<p>For example: <code>header.memberId</code>, <code>requestHeader</code>. \
Hopefully, this saves you some scrolling!</p>";

/// Key into [`COMPLIANCE_POLICY_STRINGS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    ComplianceDataException,
    MissingTypes,
    SuccessUpdating,
    FailedUpdating,
    SuccessUploading,
    InvalidPolicyData,
    MissingPurgePolicy,
    MissingDatasetSecurityClassification,
    HelpTextClassification,
}

impl MessageKey {
    pub const ALL: [MessageKey; 9] = [
        MessageKey::ComplianceDataException,
        MessageKey::MissingTypes,
        MessageKey::SuccessUpdating,
        MessageKey::FailedUpdating,
        MessageKey::SuccessUploading,
        MessageKey::InvalidPolicyData,
        MessageKey::MissingPurgePolicy,
        MessageKey::MissingDatasetSecurityClassification,
        MessageKey::HelpTextClassification,
    ];

    /// Returns the key as the presentation layer spells it; nested entries
    /// use a dotted path.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::ComplianceDataException => "complianceDataException",
            MessageKey::MissingTypes => "missingTypes",
            MessageKey::SuccessUpdating => "successUpdating",
            MessageKey::FailedUpdating => "failedUpdating",
            MessageKey::SuccessUploading => "successUploading",
            MessageKey::InvalidPolicyData => "invalidPolicyData",
            MessageKey::MissingPurgePolicy => "missingPurgePolicy",
            MessageKey::MissingDatasetSecurityClassification => {
                "missingDatasetSecurityClassification"
            }
            MessageKey::HelpTextClassification => "helpText.classification",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == trimmed)
            .ok_or_else(|| ModelError::UnknownMessageKey(s.to_string()))
    }
}

/// Looks up the text for a message key.
pub fn message(key: MessageKey) -> &'static str {
    let strings = &COMPLIANCE_POLICY_STRINGS;
    match key {
        MessageKey::ComplianceDataException => strings.compliance_data_exception,
        MessageKey::MissingTypes => strings.missing_types,
        MessageKey::SuccessUpdating => strings.success_updating,
        MessageKey::FailedUpdating => strings.failed_updating,
        MessageKey::SuccessUploading => strings.success_uploading,
        MessageKey::InvalidPolicyData => strings.invalid_policy_data,
        MessageKey::MissingPurgePolicy => strings.missing_purge_policy,
        MessageKey::MissingDatasetSecurityClassification => {
            strings.missing_dataset_security_classification
        }
        MessageKey::HelpTextClassification => strings.help_text.classification,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_parse_back() {
        for key in MessageKey::ALL {
            assert_eq!(key.as_str().parse::<MessageKey>().unwrap(), key);
        }
        assert!("helpText".parse::<MessageKey>().is_err());
    }

    #[test]
    fn every_message_is_non_empty() {
        for key in MessageKey::ALL {
            assert!(!message(key).is_empty(), "{key} has no text");
        }
    }

    #[test]
    fn table_serializes_with_nested_help_text() {
        let value = serde_json::to_value(COMPLIANCE_POLICY_STRINGS).unwrap();
        assert_eq!(
            value["missingPurgePolicy"],
            "Please specify a Compliance Purge Policy"
        );
        assert_eq!(
            value["helpText"]["classification"],
            message(MessageKey::HelpTextClassification)
        );
        assert_eq!(value.as_object().unwrap().len(), 9);
    }
}
