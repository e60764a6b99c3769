//! Wizard step sequencing.
//!
//! A dataset with a known field schema walks three steps: field-level
//! compliance, purge policy, dataset classification. A schema-less dataset
//! has no fields to classify, so its first step becomes a dataset-level
//! compliance step.
//!
//! The schema-less sequence is built by merging overrides into the default
//! sequence: only the overridden positions change, every other default step
//! is kept.

use compliance_model::{WizardStep, WizardStepDescriptor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::warn;

const DEFAULT_STEPS: [WizardStep; 3] = [
    WizardStep::EditCompliancePolicy,
    WizardStep::EditPurgePolicy,
    WizardStep::EditDatasetClassification,
];

const SCHEMALESS_OVERRIDES: [(usize, WizardStep); 1] =
    [(0, WizardStep::EditDatasetLevelCompliancePolicy)];

/// Dense, zero-based sequence of wizard steps.
///
/// The position of a step is its key. Serializes as a JSON object keyed
/// `"0"` to `"n-1"`, each value being a [`WizardStepDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplianceSteps {
    steps: Vec<WizardStep>,
}

impl ComplianceSteps {
    fn from_steps(steps: impl IntoIterator<Item = WizardStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }

    /// Overwrites the given positions, keeping every other step.
    ///
    /// A position equal to the current length appends; positions past that
    /// would leave a gap and are skipped.
    #[must_use]
    fn merged(mut self, overrides: &[(usize, WizardStep)]) -> Self {
        for &(index, step) in overrides {
            if let Some(slot) = self.steps.get_mut(index) {
                *slot = step;
            } else if index == self.steps.len() {
                self.steps.push(step);
            } else {
                warn!(index, step = %step, "skipping step override that would leave a gap");
            }
        }
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Never true for sequences built by [`get_steps`].
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<WizardStep> {
        self.steps.get(index).copied()
    }

    pub fn descriptor(&self, index: usize) -> Option<WizardStepDescriptor> {
        self.get(index).map(WizardStepDescriptor::from)
    }

    pub fn first(&self) -> Option<WizardStep> {
        self.get(0)
    }

    /// True when the sequence opens with the dataset-level compliance step.
    pub fn is_schemaless(&self) -> bool {
        self.first() == Some(WizardStep::EditDatasetLevelCompliancePolicy)
    }

    /// Iterates `(position, step)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, WizardStep)> + '_ {
        self.steps.iter().copied().enumerate()
    }

    /// Descriptors in position order.
    pub fn descriptors(&self) -> Vec<WizardStepDescriptor> {
        self.steps.iter().copied().map(WizardStepDescriptor::from).collect()
    }
}

impl Default for ComplianceSteps {
    fn default() -> Self {
        get_steps(true)
    }
}

impl Serialize for ComplianceSteps {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.steps.len()))?;
        for (index, step) in self.iter() {
            map.serialize_entry(&index.to_string(), &WizardStepDescriptor::from(step))?;
        }
        map.end()
    }
}

/// Returns the ordered wizard steps for a dataset.
///
/// Callers without schema information should pass `true`, which is also what
/// [`ComplianceSteps::default`] does.
pub fn get_steps(has_schema: bool) -> ComplianceSteps {
    let defaults = ComplianceSteps::from_steps(DEFAULT_STEPS);
    if has_schema {
        defaults
    } else {
        defaults.merged(&SCHEMALESS_OVERRIDES)
    }
}

/// Position of the wizard driver within a step sequence.
///
/// Moving past either end leaves the cursor where it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardCursor {
    steps: ComplianceSteps,
    position: usize,
}

impl WizardCursor {
    pub fn new(steps: ComplianceSteps) -> Self {
        Self { steps, position: 0 }
    }

    pub fn for_dataset(has_schema: bool) -> Self {
        Self::new(get_steps(has_schema))
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn steps(&self) -> &ComplianceSteps {
        &self.steps
    }

    pub fn current(&self) -> Option<WizardStep> {
        self.steps.get(self.position)
    }

    pub fn is_first(&self) -> bool {
        self.position == 0
    }

    pub fn is_last(&self) -> bool {
        self.position + 1 >= self.steps.len()
    }

    /// Moves to the next step. Returns false when already on the last one.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.position += 1;
        true
    }

    /// Moves to the previous step. Returns false when already on the first one.
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.position -= 1;
        true
    }
}
