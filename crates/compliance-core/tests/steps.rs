//! Wizard step sequencing tests.

use compliance_core::{ComplianceSteps, WizardCursor, get_steps};
use compliance_model::WizardStep;
use serde_json::json;

#[test]
fn steps_with_schema_snapshot() {
    insta::assert_json_snapshot!(get_steps(true), @r#"
    {
      "0": {
        "name": "editCompliancePolicy"
      },
      "1": {
        "name": "editPurgePolicy"
      },
      "2": {
        "name": "editDatasetClassification"
      }
    }
    "#);
}

#[test]
fn steps_without_schema_snapshot() {
    insta::assert_json_snapshot!(get_steps(false), @r#"
    {
      "0": {
        "name": "editDatasetLevelCompliancePolicy"
      },
      "1": {
        "name": "editPurgePolicy"
      },
      "2": {
        "name": "editDatasetClassification"
      }
    }
    "#);
}

#[test]
fn default_steps_equal_schema_steps() {
    let defaults = serde_json::to_value(ComplianceSteps::default()).unwrap();
    assert_eq!(
        defaults,
        json!({
            "0": { "name": "editCompliancePolicy" },
            "1": { "name": "editPurgePolicy" },
            "2": { "name": "editDatasetClassification" },
        })
    );
    assert_eq!(ComplianceSteps::default(), get_steps(true));
}

#[test]
fn schemaless_steps_override_only_the_first_position() {
    let with_schema = get_steps(true);
    let without_schema = get_steps(false);

    // Merge, not replace: every default position survives.
    assert_eq!(without_schema.len(), with_schema.len());
    assert_eq!(
        without_schema.first(),
        Some(WizardStep::EditDatasetLevelCompliancePolicy)
    );
    for index in 1..with_schema.len() {
        assert_eq!(without_schema.get(index), with_schema.get(index));
    }
}

#[test]
fn step_keys_are_dense_and_zero_based() {
    for has_schema in [true, false] {
        let steps = get_steps(has_schema);
        assert!(!steps.is_empty());
        let value = serde_json::to_value(&steps).unwrap();
        let object = value.as_object().unwrap();
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        let expected: Vec<String> = (0..steps.len()).map(|index| index.to_string()).collect();
        assert_eq!(keys, expected.iter().map(String::as_str).collect::<Vec<_>>());
        assert!(steps.first().is_some_and(|step| step.is_compliance_policy()));
    }
}

#[test]
fn descriptors_follow_positions() {
    let steps = get_steps(false);
    let names: Vec<String> = steps
        .descriptors()
        .into_iter()
        .map(|descriptor| descriptor.name)
        .collect();
    assert_eq!(
        names,
        vec![
            "editDatasetLevelCompliancePolicy",
            "editPurgePolicy",
            "editDatasetClassification",
        ]
    );
    assert_eq!(steps.descriptor(3), None);
}

#[test]
fn cursor_visits_every_step_once() {
    let mut cursor = WizardCursor::for_dataset(false);
    let mut visited = vec![cursor.current()];
    while cursor.advance() {
        visited.push(cursor.current());
    }
    let expected: Vec<_> = cursor.steps().iter().map(|(_, step)| Some(step)).collect();
    assert_eq!(visited, expected);
    assert!(cursor.is_last());
}
