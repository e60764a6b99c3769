//! Dropdown option shaping for the compliance editor.

use compliance_model::{
    Classification, ComplianceDataType, FieldFormatOption, FieldIdOption,
    SecurityClassificationOption,
};

/// Label of the disabled placeholder heading the field format dropdown.
pub const FIELD_FORMAT_PLACEHOLDER: &str = "Select Format";

/// Label of the disabled placeholder heading the classification dropdown.
pub const CLASSIFICATION_PLACEHOLDER: &str = "Unspecified";

/// Maps a catalog entry to a field identifier option.
pub fn to_option(data_type: &ComplianceDataType) -> FieldIdOption {
    FieldIdOption::new(data_type.id, data_type.title.clone())
}

/// Maps every catalog entry, preserving order and length.
pub fn to_options(data_types: &[ComplianceDataType]) -> Vec<FieldIdOption> {
    data_types.iter().map(to_option).collect()
}

/// Field format options for a catalog entry, headed by a disabled placeholder.
pub fn field_format_options(data_type: &ComplianceDataType) -> Vec<FieldFormatOption> {
    let mut options = Vec::with_capacity(data_type.supported_field_formats.len() + 1);
    options.push(FieldFormatOption::new(None, FIELD_FORMAT_PLACEHOLDER).disabled());
    options.extend(
        data_type
            .supported_field_formats
            .iter()
            .map(|format| FieldFormatOption::new(Some(*format), format.label())),
    );
    options
}

/// All security classifications, most sensitive first, headed by a disabled
/// placeholder.
pub fn security_classification_options() -> Vec<SecurityClassificationOption> {
    std::iter::once(SecurityClassificationOption::new(None, CLASSIFICATION_PLACEHOLDER).disabled())
        .chain(Classification::ALL.into_iter().map(|classification| {
            SecurityClassificationOption::new(Some(classification), classification.label())
        }))
        .collect()
}
