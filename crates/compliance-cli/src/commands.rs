//! Command implementations.
//!
//! Each command builds a JSON-ready value; `main` decides where it goes.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use compliance_core::{
    COMPLIANCE_POLICY_STRINGS, ComplianceSteps, HIDDEN_TRACKING_FIELDS, MessageKey,
    SubmissionOptions, field_format_options, get_steps, message, prepare_for_submission,
    security_classification_options, to_options,
};
use compliance_model::{
    ComplianceDataType, ComplianceEntity, ComplianceFieldIdValue, FieldFormatOption,
    FieldIdOption, SecurityClassificationOption,
};
use serde::de::DeserializeOwned;
use tracing::info;

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read {what} {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse {what} {}", path.display()))
}

/// Reads a compliance data type catalog (a JSON array).
pub fn load_catalog(path: &Path) -> Result<Vec<ComplianceDataType>> {
    let catalog: Vec<ComplianceDataType> = read_json(path, "catalog")?;
    info!(path = %path.display(), entries = catalog.len(), "loaded catalog");
    Ok(catalog)
}

/// Reads a list of compliance entities (a JSON array).
pub fn load_entities(path: &Path) -> Result<Vec<ComplianceEntity>> {
    let entities: Vec<ComplianceEntity> = read_json(path, "entities")?;
    info!(path = %path.display(), entities = entities.len(), "loaded compliance entities");
    Ok(entities)
}

pub fn run_steps(has_schema: bool) -> ComplianceSteps {
    let steps = get_steps(has_schema);
    info!(has_schema, steps = steps.len(), "built wizard steps");
    steps
}

pub fn run_options(catalog: &Path) -> Result<Vec<FieldIdOption>> {
    Ok(to_options(&load_catalog(catalog)?))
}

pub fn run_formats(catalog: &Path, id: &str) -> Result<Vec<FieldFormatOption>> {
    let id: ComplianceFieldIdValue = id.parse()?;
    let catalog = load_catalog(catalog)?;
    let data_type = catalog
        .iter()
        .find(|data_type| data_type.id == id)
        .ok_or_else(|| anyhow!("catalog has no entry for {id}"))?;
    Ok(field_format_options(data_type))
}

pub fn run_classifications() -> Vec<SecurityClassificationOption> {
    security_classification_options()
}

pub fn run_sanitize(entities: &Path, keep_readonly: bool) -> Result<Vec<ComplianceEntity>> {
    let entities = load_entities(entities)?;
    let options = SubmissionOptions::new().with_drop_readonly_entities(!keep_readonly);
    let prepared = prepare_for_submission(&entities, &options);
    info!(
        input = entities.len(),
        output = prepared.len(),
        "prepared entities for submission"
    );
    Ok(prepared)
}

/// Output of the `strings` command.
#[derive(Debug, PartialEq, Eq)]
pub enum StringsOutput {
    /// The whole table as JSON.
    Table(serde_json::Value),
    /// Raw text of one entry.
    Text(&'static str),
}

pub fn run_strings(key: Option<&str>, hidden_tracking_fields: bool) -> Result<StringsOutput> {
    if hidden_tracking_fields {
        return Ok(StringsOutput::Text(HIDDEN_TRACKING_FIELDS));
    }
    match key {
        Some(key) => {
            let key: MessageKey = key.parse()?;
            Ok(StringsOutput::Text(message(key)))
        }
        None => Ok(StringsOutput::Table(serde_json::to_value(
            COMPLIANCE_POLICY_STRINGS,
        )?)),
    }
}
