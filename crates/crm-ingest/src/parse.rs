//! Record building and parse-time schema validation.

use crm_model::{ColumnSchema, ColumnType, ParseError, ParsedCsv, Record};
use tracing::{debug, warn};

use crate::coerce::{is_boolean, is_date, is_number};
use crate::csv::{delimiter_name, detect_delimiter, first_line, tokenize};

const BOM: char = '\u{feff}';

/// Trims whitespace and stray byte-order marks.
fn trim_value(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == BOM)
}

/// True for a tokenized row that came from an empty line.
pub fn is_blank_line(cells: &[String]) -> bool {
    cells.len() == 1 && trim_value(&cells[0]).is_empty()
}

/// Parses CSV text into header names, keyed records, and schema diagnostics.
///
/// The delimiter is detected from the first line. Every non-blank data row
/// becomes a record whether or not it passes `schema`; schema problems are
/// only reported in [`ParsedCsv::errors`]. Empty or whitespace-only input
/// yields an empty result.
pub fn parse_csv(input: &str, schema: Option<&[ColumnSchema]>) -> ParsedCsv {
    let text = trim_value(input);
    if text.is_empty() {
        return ParsedCsv::default();
    }

    let delimiter = detect_delimiter(first_line(text));
    let mut tokens = tokenize(text, delimiter).into_iter().enumerate();

    let Some((_, header_cells)) = tokens.next() else {
        return ParsedCsv::default();
    };
    let headers: Vec<String> = header_cells
        .iter()
        .map(|cell| trim_value(cell).to_string())
        .collect();

    let mut rows = Vec::new();
    let mut errors = Vec::new();

    for (index, cells) in tokens {
        if is_blank_line(&cells) {
            continue;
        }
        if cells.len() > headers.len() {
            warn!(
                row = index,
                cells = cells.len(),
                headers = headers.len(),
                "row has more cells than headers, extra cells ignored"
            );
        }

        let record = build_record(&headers, &cells);
        if let Some(schema) = schema {
            errors.extend(check_schema(index, &record, schema));
        }
        rows.push(record);
    }

    debug!(
        delimiter = delimiter_name(delimiter),
        columns = headers.len(),
        rows = rows.len(),
        errors = errors.len(),
        "parsed csv"
    );

    ParsedCsv {
        headers,
        rows,
        errors,
    }
}

/// Zips header names with trimmed cells, padding missing cells with `""`.
fn build_record(headers: &[String], cells: &[String]) -> Record {
    let mut record = Record::with_capacity(headers.len());
    for (position, header) in headers.iter().enumerate() {
        let value = cells.get(position).map_or("", |cell| trim_value(cell));
        record.insert(header.as_str(), value);
    }
    record
}

/// Collects every schema problem for one record.
fn check_schema(row: usize, record: &Record, schema: &[ColumnSchema]) -> Vec<ParseError> {
    let mut errors = Vec::new();

    for column in schema {
        let value = record.get_or_empty(&column.name);
        let error = |message: String| ParseError {
            row,
            column: column.name.clone(),
            message,
        };

        if column.required && value.is_empty() {
            errors.push(error(format!("Required field \"{}\" is empty", column.name)));
        }

        // Number and date skip empty values; boolean checks every value.
        match column.column_type {
            ColumnType::Number if !value.is_empty() && !is_number(value) => {
                errors.push(error(format!("\"{value}\" is not a valid number")));
            }
            ColumnType::Boolean if !is_boolean(value) => {
                errors.push(error(format!("\"{value}\" is not a valid boolean")));
            }
            ColumnType::Date if !value.is_empty() && !is_date(value) => {
                errors.push(error(format!("\"{value}\" is not a valid date")));
            }
            _ => {}
        }
    }

    errors
}
