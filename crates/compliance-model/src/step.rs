use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// A stage of the compliance editing wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
    /// Classify each known field of the dataset.
    EditCompliancePolicy,
    /// Set the dataset's retention/purge rule.
    EditPurgePolicy,
    /// Set the dataset-level security classification.
    EditDatasetClassification,
    /// Tag a schema-less dataset as a whole.
    EditDatasetLevelCompliancePolicy,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::EditCompliancePolicy,
        WizardStep::EditPurgePolicy,
        WizardStep::EditDatasetClassification,
        WizardStep::EditDatasetLevelCompliancePolicy,
    ];

    /// Returns the step name the wizard driver keys on.
    pub fn name(&self) -> &'static str {
        match self {
            WizardStep::EditCompliancePolicy => "editCompliancePolicy",
            WizardStep::EditPurgePolicy => "editPurgePolicy",
            WizardStep::EditDatasetClassification => "editDatasetClassification",
            WizardStep::EditDatasetLevelCompliancePolicy => "editDatasetLevelCompliancePolicy",
        }
    }

    /// Returns true for the steps that edit the compliance policy itself.
    pub fn is_compliance_policy(&self) -> bool {
        matches!(
            self,
            WizardStep::EditCompliancePolicy | WizardStep::EditDatasetLevelCompliancePolicy
        )
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WizardStep {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|step| step.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownStep(s.to_string()))
    }
}

/// The payload the wizard driver receives for one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardStepDescriptor {
    pub name: String,
}

impl WizardStepDescriptor {
    /// Parses the descriptor name back into its step.
    pub fn step(&self) -> Result<WizardStep, ModelError> {
        self.name.parse()
    }
}

impl From<WizardStep> for WizardStepDescriptor {
    fn from(step: WizardStep) -> Self {
        Self {
            name: step.name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_names_round_trip() {
        for step in WizardStep::ALL {
            let descriptor = WizardStepDescriptor::from(step);
            assert_eq!(descriptor.step().unwrap(), step);
        }
    }

    #[test]
    fn step_serializes_as_name() {
        let json = serde_json::to_string(&WizardStep::EditDatasetLevelCompliancePolicy).unwrap();
        assert_eq!(json, "\"editDatasetLevelCompliancePolicy\"");
    }

    #[test]
    fn unknown_step_is_rejected() {
        assert_eq!(
            "editSomething".parse::<WizardStep>(),
            Err(ModelError::UnknownStep("editSomething".to_string()))
        );
    }
}
