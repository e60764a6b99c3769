//! Editability filtering and sanitization of compliance entities.
//!
//! Entities arrive from the server with a transient `readonly` marker. The
//! editor only offers entities without the marker, and the marker must be
//! removed before anything is submitted back.

use compliance_model::ComplianceEntity;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Options for preparing entities for submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionOptions {
    /// Drop entities marked read-only before stripping the marker.
    /// Default: true.
    pub drop_readonly_entities: bool,
}

impl Default for SubmissionOptions {
    fn default() -> Self {
        Self {
            drop_readonly_entities: true,
        }
    }
}

impl SubmissionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_drop_readonly_entities(mut self, enable: bool) -> Self {
        self.drop_readonly_entities = enable;
        self
    }
}

/// Returns false only when the `readonly` marker is exactly `true`.
pub fn is_editable(entity: &ComplianceEntity) -> bool {
    !entity.is_marked_readonly()
}

/// Keeps the editable entities in their original order.
pub fn filter_editable(entities: &[ComplianceEntity]) -> Vec<ComplianceEntity> {
    let editable: Vec<ComplianceEntity> = entities
        .iter()
        .filter(|entity| {
            let keep = is_editable(entity);
            if !keep {
                trace!(
                    field = entity.identifier_field().unwrap_or_default(),
                    "dropping read-only entity"
                );
            }
            keep
        })
        .cloned()
        .collect();
    debug!(
        total = entities.len(),
        editable = editable.len(),
        "filtered editable compliance entities"
    );
    editable
}

/// Returns new entities without the `readonly` marker, same length and order.
pub fn strip_readonly_attribute(entities: &[ComplianceEntity]) -> Vec<ComplianceEntity> {
    entities
        .iter()
        .map(ComplianceEntity::without_readonly)
        .collect()
}

/// Shapes an entity list for the save request.
pub fn prepare_for_submission(
    entities: &[ComplianceEntity],
    options: &SubmissionOptions,
) -> Vec<ComplianceEntity> {
    if options.drop_readonly_entities {
        strip_readonly_attribute(&filter_editable(entities))
    } else {
        strip_readonly_attribute(entities)
    }
}
