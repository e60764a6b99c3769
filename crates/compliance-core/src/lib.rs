//! Core logic of the dataset compliance editing workflow.
//!
//! - `options`: shapes catalog entries and enumerations into dropdown options
//! - `entities`: filters editable compliance entities and strips the
//!   transient `readonly` marker before submission
//! - `steps`: orders the wizard steps depending on schema presence
//! - `strings`: fixed user-facing messages

pub mod entities;
pub mod options;
pub mod steps;
pub mod strings;

pub use entities::{
    SubmissionOptions, filter_editable, is_editable, prepare_for_submission,
    strip_readonly_attribute,
};
pub use options::{
    CLASSIFICATION_PLACEHOLDER, FIELD_FORMAT_PLACEHOLDER, field_format_options,
    security_classification_options, to_option, to_options,
};
pub use steps::{ComplianceSteps, WizardCursor, get_steps};
pub use strings::{
    COMPLIANCE_POLICY_STRINGS, CompliancePolicyStrings, HIDDEN_TRACKING_FIELDS, HelpText,
    MessageKey, message,
};
