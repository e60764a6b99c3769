//! Integration tests for the CLI commands.

use std::fs;
use std::path::{Path, PathBuf};

use compliance_cli::commands::{
    StringsOutput, load_catalog, run_formats, run_options, run_sanitize, run_steps, run_strings,
};
use compliance_model::{ComplianceFieldIdValue, IdLogicalType};
use serde_json::json;

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "compliance-wizard-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
}

const CATALOG: &str = r#"[
  { "id": "NONE", "title": "None" },
  {
    "id": "MEMBER_ID",
    "title": "Member ID",
    "pii": true,
    "idType": true,
    "defaultSecurityClassification": "CONFIDENTIAL",
    "supportedFieldFormats": ["NUMERIC", "URN"]
  }
]"#;

#[test]
fn options_follow_catalog_order() {
    let dir = unique_temp_dir("options");
    let path = dir.join("catalog.json");
    write(&path, CATALOG);

    let options = run_options(&path).unwrap();
    let values: Vec<_> = options.iter().map(|option| option.value).collect();
    assert_eq!(
        values,
        vec![ComplianceFieldIdValue::None, ComplianceFieldIdValue::MemberId]
    );
    assert_eq!(options[1].label, "Member ID");
}

#[test]
fn formats_for_known_id() {
    let dir = unique_temp_dir("formats");
    let path = dir.join("catalog.json");
    write(&path, CATALOG);

    let options = run_formats(&path, "member_id").unwrap();
    let values: Vec<_> = options.iter().map(|option| option.value).collect();
    assert_eq!(
        values,
        vec![None, Some(IdLogicalType::Numeric), Some(IdLogicalType::Urn)]
    );
}

#[test]
fn formats_for_missing_id_is_an_error() {
    let dir = unique_temp_dir("formats-missing");
    let path = dir.join("catalog.json");
    write(&path, CATALOG);

    let error = run_formats(&path, "GROUP_ID").unwrap_err();
    assert!(error.to_string().contains("GROUP_ID"));
    assert!(run_formats(&path, "not-an-id").is_err());
}

#[test]
fn malformed_catalog_reports_path() {
    let dir = unique_temp_dir("bad-catalog");
    let path = dir.join("catalog.json");
    write(&path, "{ not json");

    let error = load_catalog(&path).unwrap_err();
    assert!(format!("{error:#}").contains("catalog.json"));
}

#[test]
fn sanitize_drops_readonly_and_strips_marker() {
    let dir = unique_temp_dir("sanitize");
    let path = dir.join("entities.json");
    write(
        &path,
        r#"[
          { "identifierField": "header.memberId", "identifierType": "MEMBER_ID", "readonly": true },
          { "identifierField": "body.memberId", "identifierType": "MEMBER_ID", "readonly": false },
          { "identifierField": "body.note", "readonly": "true", "source": "user" }
        ]"#,
    );

    let prepared = run_sanitize(&path, false).unwrap();
    let fields: Vec<_> = prepared
        .iter()
        .map(|entity| entity.identifier_field().unwrap_or_default())
        .collect();
    assert_eq!(fields, vec!["body.memberId", "body.note"]);
    assert!(prepared.iter().all(|entity| entity.readonly().is_none()));
    assert_eq!(prepared[1].get("source"), Some(&json!("user")));

    let kept = run_sanitize(&path, true).unwrap();
    assert_eq!(kept.len(), 3);
    assert!(kept.iter().all(|entity| entity.readonly().is_none()));
}

#[test]
fn sanitize_passes_through_unrecognized_values() {
    let dir = unique_temp_dir("sanitize-unknown");
    let path = dir.join("entities.json");
    write(
        &path,
        r#"[
          { "identifierField": "a", "identifierType": "FUTURE_ID", "pii": "yes", "readonly": false },
          { "readonly": true, "x": 1 },
          { "x": 2 }
        ]"#,
    );

    let prepared = run_sanitize(&path, false).unwrap();
    assert_eq!(
        serde_json::to_value(&prepared).unwrap(),
        json!([
            { "identifierField": "a", "identifierType": "FUTURE_ID", "pii": "yes" },
            { "x": 2 }
        ])
    );
}

#[test]
fn steps_command_matches_core() {
    insta::assert_json_snapshot!(run_steps(false), @r#"
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
fn strings_command_variants() {
    match run_strings(Some("missingDatasetSecurityClassification"), false).unwrap() {
        StringsOutput::Text(text) => {
            assert_eq!(
                text,
                "Please specify a security classification for this dataset."
            );
        }
        StringsOutput::Table(_) => panic!("expected a single message"),
    }

    match run_strings(None, true).unwrap() {
        StringsOutput::Text(text) => assert!(text.contains("<code>header.memberId</code>")),
        StringsOutput::Table(_) => panic!("expected markup"),
    }

    match run_strings(None, false).unwrap() {
        StringsOutput::Table(value) => {
            assert_eq!(
                value["successUpdating"],
                json!("Changes have been successfully saved!")
            );
        }
        StringsOutput::Text(_) => panic!("expected the table"),
    }

    assert!(run_strings(Some("noSuchKey"), false).is_err());
}
