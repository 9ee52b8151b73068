use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tracing::{debug, info, info_span, trace, warn};

use crm_ingest::{delimiter_name, detect_delimiter, first_line, read_csv_file};
use crm_map::{missing_columns, transform_contacts, unmapped_columns};
use crm_model::{ExportOptions, ImportProfile, Record};
use crm_output::{ensure_parent_dir, export_to_csv, write_csv_file};
use crm_validate::validate_rows;

use crate::cli::{DetectArgs, ExportArgs, ImportArgs};
use crate::logging::redact_value;
use crate::types::{ExportResult, ImportResult};

/// Parses, validates, and maps a CSV file according to an optional profile.
pub fn run_import(args: &ImportArgs) -> Result<ImportResult> {
    let span = info_span!("import", input = %args.input.display());
    let _guard = span.enter();

    let profile = match &args.profile {
        Some(path) => ImportProfile::load(path)
            .with_context(|| format!("load profile {}", path.display()))?,
        None => ImportProfile::default(),
    };
    for column in &profile.schema {
        debug!(
            column = %column.name,
            column_type = %column.column_type,
            required = column.required,
            "schema column"
        );
    }
    for rule in &profile.rules {
        debug!(field = %rule.field, kind = %rule.kind, "validation rule");
    }

    let parsed = read_csv_file(&args.input, profile.schema())
        .with_context(|| format!("read {}", args.input.display()))?;
    info!(
        rows = parsed.rows.len(),
        columns = parsed.headers.len(),
        schema_errors = parsed.errors.len(),
        "parsed csv"
    );
    if parsed.is_empty() {
        warn!("input has no header line");
    }
    if parsed.has_errors() {
        warn!(count = parsed.errors.len(), "schema validation reported errors");
    }

    let outcome = validate_rows(&parsed.rows, &profile.rules);
    for issue in &outcome.invalid {
        let value = parsed
            .rows
            .get(issue.row)
            .map(|record| record.get_or_empty(&issue.field))
            .unwrap_or_default();
        trace!(
            row = issue.row,
            field = %issue.field,
            value = redact_value(value),
            error = %issue.error,
            "rule failed"
        );
    }

    let selected: &[Record] = if args.keep_invalid {
        &parsed.rows
    } else {
        &outcome.valid
    };

    let (records, unmapped, missing) = match &profile.mapping {
        Some(mapping) => {
            let missing = missing_columns(&parsed.headers, mapping);
            if !missing.is_empty() {
                warn!(columns = ?missing, "mapping sources not found in headers");
            }
            (
                transform_contacts(selected, mapping),
                unmapped_columns(&parsed.headers, mapping),
                missing,
            )
        }
        None => (selected.to_vec(), Vec::new(), Vec::new()),
    };

    if let Some(path) = &args.output {
        write_records_json(path, &records)?;
        info!(path = %path.display(), records = records.len(), "wrote records");
    }

    Ok(ImportResult {
        input: args.input.clone(),
        headers: parsed.headers,
        parsed_rows: parsed.rows.len(),
        schema_errors: parsed.errors,
        valid_rows: outcome.valid.len(),
        issues: outcome.invalid,
        records,
        unmapped,
        missing,
        output: args.output.clone(),
    })
}

fn write_records_json(path: &Path, records: &[Record]) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(records).context("serialize records")?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Exports a JSON array of records to CSV, writing to stdout when no output path is given.
pub fn run_export(args: &ExportArgs) -> Result<ExportResult> {
    let span = info_span!("export", input = %args.input.display());
    let _guard = span.enter();

    let data = load_json_rows(&args.input)?;
    let options = ExportOptions::default()
        .with_delimiter(args.delimiter)
        .with_headers(!args.no_headers)
        .with_bom(args.bom);

    match &args.output {
        Some(path) => write_csv_file(path, &data, &args.columns, &options)
            .with_context(|| format!("write {}", path.display()))?,
        None => println!("{}", export_to_csv(&data, &args.columns, &options)),
    }

    Ok(ExportResult {
        rows: data.len(),
        columns: args.columns.len(),
        output: args.output.clone(),
    })
}

/// Reads a JSON document that must be an array; elements are exported as rows.
pub fn load_json_rows(path: &Path) -> Result<Vec<Value>> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value: Value =
        serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))?;
    match value {
        Value::Array(rows) => {
            debug!(rows = rows.len(), "loaded json rows");
            Ok(rows)
        }
        other => bail!(
            "{} must contain a JSON array, found {}",
            path.display(),
            json_kind(&other)
        ),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Detects the delimiter of a CSV file from its first non-blank line.
pub fn run_detect(args: &DetectArgs) -> Result<char> {
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let line = first_line(text.trim_start_matches('\u{feff}').trim());
    let delimiter = detect_delimiter(line);
    debug!(delimiter = delimiter_name(delimiter), "detected delimiter");
    Ok(delimiter)
}
