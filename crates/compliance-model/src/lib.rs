//! Plain data types shared by the compliance editing workflow.

pub mod catalog;
pub mod entity;
pub mod enums;
pub mod error;
pub mod option;
pub mod step;

pub use catalog::ComplianceDataType;
pub use entity::{
    ComplianceEntity, IDENTIFIER_FIELD_KEY, IDENTIFIER_TYPE_KEY, LOGICAL_TYPE_KEY, NON_OWNER_KEY,
    PII_KEY, READONLY_KEY, ReadonlyFlag, SECURITY_CLASSIFICATION_KEY, VALUE_PATTERN_KEY,
};
pub use enums::{Classification, ComplianceFieldIdValue, IdLogicalType};
pub use error::{ModelError, Result};
pub use option::{
    FieldFormatOption, FieldIdOption, FieldIdentifierOption, SecurityClassificationOption,
};
pub use step::{WizardStep, WizardStepDescriptor};
