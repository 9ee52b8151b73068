//! Integration tests for CSV export.

use crm_ingest::parse_csv;
use crm_model::{ExportOptions, Record};
use crm_output::{OutputError, export_records, export_to_csv, write_csv_file};
use serde_json::{Value, json};
use tempfile::TempDir;

fn contacts() -> Vec<Value> {
    vec![
        json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "note": "said \"hi\"",
            "address": {"city": "London"}
        }),
        json!({
            "name": "Bob, Jr.",
            "email": null,
            "note": "line1\nline2"
        }),
    ]
}

#[test]
fn exports_with_escaping_and_nested_paths() {
    let csv = export_to_csv(
        &contacts(),
        &["name", "email", "note", "address.city"],
        &ExportOptions::default(),
    );

    insta::assert_snapshot!(csv, @r#"
    name,email,note,address.city
    Ada Lovelace,ada@example.com,"said ""hi""",London
    "Bob, Jr.",,"line1
    line2",
    "#);
}

#[test]
fn quotes_field_containing_delimiter() {
    let csv = export_to_csv(&[json!({"a": "x,y"})], &["a"], &ExportOptions::default());
    assert_eq!(csv, "a\n\"x,y\"");
}

#[test]
fn custom_delimiter_without_headers() {
    let options = ExportOptions::default()
        .with_delimiter(';')
        .with_headers(false);
    let csv = export_to_csv(
        &[json!({"a": "x,y", "b": "p;q"}), json!({"a": 1, "b": false})],
        &["a", "b"],
        &options,
    );
    assert_eq!(csv, "x,y;\"p;q\"\n1;false");
}

#[test]
fn bom_is_prepended_once() {
    let options = ExportOptions::default().with_bom(true);
    let csv = export_to_csv(&[json!({"a": "1"})], &["a"], &options);

    assert!(csv.starts_with('\u{feff}'));
    assert!(!csv[3..].starts_with('\u{feff}'));
    assert_eq!(csv, "\u{feff}a\n1");
}

#[test]
fn whole_floats_export_without_fraction() {
    let csv = export_to_csv(
        &[json!({"score": 1.0, "ratio": 0.5, "count": 3})],
        &["score", "ratio", "count"],
        &ExportOptions::default().with_headers(false),
    );
    assert_eq!(csv, "1,0.5,3");
}

#[test]
fn non_object_rows_export_empty_cells() {
    let csv = export_to_csv(
        &[json!("scalar"), json!(null)],
        &["a", "b"],
        &ExportOptions::default(),
    );
    assert_eq!(csv, "a,b\n,\n,");
}

#[test]
fn parsed_records_round_trip() {
    let input = "name;note\nAda;\"multi\nline\"\nBob;\"quote \"\"q\"\"\"";
    let parsed = parse_csv(input, None);

    let csv = export_records(&parsed.rows, &parsed.headers, &ExportOptions::default());
    let reparsed = parse_csv(&csv, None);

    assert_eq!(reparsed.headers, parsed.headers);
    assert_eq!(reparsed.rows, parsed.rows);
}

#[test]
fn export_records_uses_record_keys() {
    let records = vec![Record::from_iter([("email", "ada@example.com"), ("name", "Ada")])];
    let csv = export_records(&records, &["name", "email", "phone"], &ExportOptions::default());
    assert_eq!(csv, "name,email,phone\nAda,ada@example.com,");
}

#[test]
fn writes_file_and_creates_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("exports").join("contacts.csv");

    write_csv_file(
        &path,
        &contacts(),
        &["name"],
        &ExportOptions::default().with_bom(true),
    )
    .unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "\u{feff}name\nAda Lovelace\n\"Bob, Jr.\"");
}

#[test]
fn reports_unwritable_path() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, "x").unwrap();

    let result = write_csv_file(
        &blocker.join("nested.csv"),
        &contacts(),
        &["name"],
        &ExportOptions::default(),
    );
    assert!(matches!(result, Err(OutputError::CreateDir { .. })));
}
