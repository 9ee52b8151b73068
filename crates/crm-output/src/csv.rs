//! CSV rendering with RFC 4180 escaping.

use std::borrow::Cow;

use crm_model::{ExportOptions, Record};
use serde_json::{Number, Value};
use tracing::debug;

/// Byte-order mark prepended when [`ExportOptions::bom`] is set.
pub const BOM: char = '\u{feff}';

/// Walks a dot-separated path through nested objects.
///
/// Array elements are reachable by numeric segment (`phones.0`). Returns
/// `None` when a segment is missing or the current value is not a container.
pub fn resolve_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Largest magnitude still written in positional notation.
const POSITIONAL_LIMIT: f64 = 1e21;

/// Writes whole floats without a fraction (`1.0` becomes `1`).
fn format_number(number: &Number) -> String {
    let Some(float) = number.as_f64().filter(|_| number.is_f64()) else {
        return number.to_string();
    };
    if float == 0.0 {
        "0".to_string()
    } else if float.fract() == 0.0 && float.abs() < POSITIONAL_LIMIT {
        format!("{float:.0}")
    } else {
        number.to_string()
    }
}

/// Renders a value as cell text.
///
/// `null` is empty, arrays join their elements with `,`, and objects are
/// written as compact JSON. Whole floating-point numbers drop their `.0`.
pub fn stringify_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::String(text) => Cow::Borrowed(text),
        Value::Bool(flag) => Cow::Borrowed(if *flag { "true" } else { "false" }),
        Value::Number(number) => Cow::Owned(format_number(number)),
        Value::Array(items) => Cow::Owned(
            items
                .iter()
                .map(stringify_value)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Cow::Owned(value.to_string()),
    }
}

/// Quotes a field if it contains the delimiter, a quote, `\n`, or `\r`.
///
/// Embedded quotes are doubled; other fields are returned unchanged.
pub fn escape_field(field: &str, delimiter: char) -> Cow<'_, str> {
    let needs_quotes = field
        .chars()
        .any(|c| c == delimiter || matches!(c, '"' | '\n' | '\r'));
    if needs_quotes {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn render_line<'a, I>(fields: I, delimiter: char) -> String
where
    I: IntoIterator<Item = Cow<'a, str>>,
{
    let mut line = String::new();
    for (position, field) in fields.into_iter().enumerate() {
        if position > 0 {
            line.push(delimiter);
        }
        line.push_str(&escape_field(&field, delimiter));
    }
    line
}

/// Renders rows as CSV text.
///
/// Each column is a dot path resolved against every row; unresolved values
/// become empty cells. Lines are joined with `\n` without a trailing
/// terminator. A BOM is prepended when requested, even if the text would
/// already start with one.
pub fn export_to_csv<S: AsRef<str>>(
    data: &[Value],
    columns: &[S],
    options: &ExportOptions,
) -> String {
    let mut lines = Vec::with_capacity(data.len() + 1);

    if options.include_headers {
        lines.push(render_line(
            columns.iter().map(|column| Cow::Borrowed(column.as_ref())),
            options.delimiter,
        ));
    }

    for row in data {
        lines.push(render_line(
            columns.iter().map(|column| {
                resolve_path(row, column.as_ref()).map_or(Cow::Borrowed(""), stringify_value)
            }),
            options.delimiter,
        ));
    }

    debug!(
        rows = data.len(),
        columns = columns.len(),
        delimiter = ?options.delimiter,
        "exported csv"
    );

    let body = lines.join("\n");
    if options.bom {
        format!("{BOM}{body}")
    } else {
        body
    }
}

/// Renders parsed records as CSV text.
pub fn export_records<S: AsRef<str>>(
    records: &[Record],
    columns: &[S],
    options: &ExportOptions,
) -> String {
    let data: Vec<Value> = records.iter().map(Value::from).collect();
    export_to_csv(&data, columns, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("plain", ','), "plain");
        assert_eq!(escape_field("x,y", ','), "\"x,y\"");
        assert_eq!(escape_field("x;y", ','), "x;y");
        assert_eq!(escape_field("x;y", ';'), "\"x;y\"");
        assert_eq!(escape_field("say \"hi\"", ','), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("a\nb", ','), "\"a\nb\"");
        assert_eq!(escape_field("a\rb", ','), "\"a\rb\"");
        assert_eq!(escape_field("", ','), "");
    }

    #[test]
    fn test_resolve_path() {
        let row = json!({"address": {"city": "Paris", "zip": null}, "tags": ["a", "b"], "n": 3});
        assert_eq!(resolve_path(&row, "address.city"), Some(&json!("Paris")));
        assert_eq!(resolve_path(&row, "address.zip"), Some(&Value::Null));
        assert_eq!(resolve_path(&row, "tags.1"), Some(&json!("b")));
        assert_eq!(resolve_path(&row, "address.street"), None);
        assert_eq!(resolve_path(&row, "n.value"), None);
        assert_eq!(resolve_path(&row, "missing.city"), None);
    }

    #[test]
    fn test_stringify_value() {
        assert_eq!(stringify_value(&Value::Null), "");
        assert_eq!(stringify_value(&json!(true)), "true");
        assert_eq!(stringify_value(&json!(42)), "42");
        assert_eq!(stringify_value(&json!(1.5)), "1.5");
        assert_eq!(stringify_value(&json!(1.0)), "1");
        assert_eq!(stringify_value(&json!(-0.0)), "0");
        assert_eq!(stringify_value(&json!(-250.0)), "-250");
        assert_eq!(stringify_value(&json!(1e20)), "100000000000000000000");
        assert_eq!(stringify_value(&json!(u64::MAX)), "18446744073709551615");
        assert_eq!(stringify_value(&json!(["a", null, 2])), "a,,2");
        assert_eq!(stringify_value(&json!({"k": "v"})), "{\"k\":\"v\"}");
    }

    #[test]
    fn test_header_only() {
        let data: Vec<Value> = vec![];
        assert_eq!(export_to_csv(&data, &["a", "b"], &ExportOptions::default()), "a,b");
    }

    #[test]
    fn test_no_headers_no_rows() {
        let data: Vec<Value> = vec![];
        let options = ExportOptions::default().with_headers(false);
        assert_eq!(export_to_csv(&data, &["a"], &options), "");
    }

    #[test]
    fn test_headers_are_escaped() {
        let data: Vec<Value> = vec![];
        assert_eq!(
            export_to_csv(&data, &["last, first", "id"], &ExportOptions::default()),
            "\"last, first\",id"
        );
    }
}
