//! End-to-end tests of the import, export, and detect commands.

use std::fs;
use std::path::PathBuf;

use crm_cli::cli::{DetectArgs, ExportArgs, ImportArgs};
use crm_cli::commands::{load_json_rows, run_detect, run_export, run_import};
use serde_json::{Value, json};
use tempfile::TempDir;

const CONTACTS: &str = "\
First Name;Last Name;E-mail;Status
Ada;Lovelace; ADA@Example.com ;active
Bob;;bob-at-example;lead
Cy;Young;cy@example.com;unknown
";

const PROFILE: &str = r#"{
  "schema": [{ "name": "E-mail", "type": "string", "required": true }],
  "rules": [
    { "field": "E-mail", "type": "email" },
    { "field": "Status", "type": "enum", "values": ["active", "lead"] }
  ],
  "mapping": { "First Name": "firstName", "E-mail": "email", "Phone": "phone" }
}"#;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn import_args(input: PathBuf) -> ImportArgs {
    ImportArgs {
        input,
        profile: None,
        output: None,
        keep_invalid: false,
    }
}

#[test]
fn import_without_profile_keeps_all_rows() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "contacts.csv", CONTACTS);

    let result = run_import(&import_args(input)).unwrap();

    assert_eq!(result.headers, vec!["First Name", "Last Name", "E-mail", "Status"]);
    assert_eq!(result.parsed_rows, 3);
    assert_eq!(result.valid_rows, 3);
    assert!(!result.has_errors());
    assert_eq!(result.records.len(), 3);
    assert_eq!(result.records[0].get("E-mail"), Some("ADA@Example.com"));
}

#[test]
fn import_with_profile_validates_and_maps() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "contacts.csv", CONTACTS);
    let profile = write(&dir, "profile.json", PROFILE);
    let output = dir.path().join("out").join("records.json");

    let result = run_import(&ImportArgs {
        profile: Some(profile),
        output: Some(output.clone()),
        ..import_args(input)
    })
    .unwrap();

    assert!(result.schema_errors.is_empty());
    assert_eq!(result.valid_rows, 1);
    assert_eq!(result.invalid_rows(), 2);
    assert!(result.has_errors());
    assert_eq!(result.issues.len(), 2);
    assert_eq!(result.issues[0].row, 1);
    assert_eq!(result.issues[0].error, "Invalid email format");
    assert_eq!(result.issues[1].row, 2);
    assert_eq!(result.issues[1].error, "Value must be one of: active, lead");
    assert_eq!(result.unmapped, vec!["Last Name", "Status"]);
    assert_eq!(result.missing, vec!["Phone"]);

    let written: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(
        written,
        json!([{ "firstName": "Ada", "email": "ada@example.com", "phone": "" }])
    );
}

#[test]
fn import_keep_invalid_maps_every_row() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "contacts.csv", CONTACTS);
    let profile = write(&dir, "profile.json", PROFILE);

    let result = run_import(&ImportArgs {
        profile: Some(profile),
        keep_invalid: true,
        ..import_args(input)
    })
    .unwrap();

    assert_eq!(result.records.len(), 3);
    assert_eq!(result.records[1].get("email"), Some("bob-at-example"));
}

#[test]
fn import_reports_schema_errors() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "contacts.csv", "E-mail,Status\n,active\n");
    let profile = write(&dir, "profile.json", PROFILE);

    let result = run_import(&ImportArgs {
        profile: Some(profile),
        ..import_args(input)
    })
    .unwrap();

    assert_eq!(result.schema_errors.len(), 1);
    assert_eq!(result.schema_errors[0].row, 1);
    assert_eq!(result.schema_errors[0].message, "Required field \"E-mail\" is empty");
}

#[test]
fn import_missing_file_fails_with_context() {
    let dir = TempDir::new().unwrap();
    let error = run_import(&import_args(dir.path().join("absent.csv"))).unwrap_err();
    assert!(format!("{error:#}").contains("absent.csv"));
}

#[test]
fn import_bad_profile_fails() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "contacts.csv", CONTACTS);
    let profile = write(&dir, "profile.json", "{ \"rules\": [ { \"field\": 1 } ] }");

    let error = run_import(&ImportArgs {
        profile: Some(profile),
        ..import_args(input)
    })
    .unwrap_err();
    assert!(format!("{error:#}").contains("load profile"));
}

#[test]
fn export_writes_csv_file() {
    let dir = TempDir::new().unwrap();
    let input = write(
        &dir,
        "records.json",
        r#"[{"name": "Ada", "address": {"city": "London"}}, {"name": "Bob; Jr."}]"#,
    );
    let output = dir.path().join("contacts.csv");

    let result = run_export(&ExportArgs {
        input,
        columns: vec!["name".to_string(), "address.city".to_string()],
        delimiter: ';',
        no_headers: false,
        bom: false,
        output: Some(output.clone()),
    })
    .unwrap();

    assert_eq!(result.rows, 2);
    assert_eq!(result.columns, 2);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "name;address.city\nAda;London\n\"Bob; Jr.\";"
    );
}

#[test]
fn export_rejects_non_array_json() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "records.json", r#"{"name": "Ada"}"#);

    let error = load_json_rows(&input).unwrap_err();
    assert!(error.to_string().contains("found an object"));
}

#[test]
fn detect_reads_first_line() {
    let dir = TempDir::new().unwrap();
    let semicolon = write(&dir, "a.csv", "\u{feff}\n\na;b;c\n1,2;3\n");
    let tab = write(&dir, "b.csv", "a\tb\n");

    assert_eq!(run_detect(&DetectArgs { input: semicolon }).unwrap(), ';');
    assert_eq!(run_detect(&DetectArgs { input: tab }).unwrap(), '\t');
}
