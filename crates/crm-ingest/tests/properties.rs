//! Property tests for the tokenizer and delimiter detection.

use std::collections::BTreeSet;

use crm_ingest::{CANDIDATE_DELIMITERS, detect_delimiter, parse_csv, tokenize};
use proptest::prelude::*;

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn field() -> impl Strategy<Value = String> {
    "[a-z ,;\t\"\r\n]{0,8}"
}

fn table() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(field(), 1..4), 1..5)
}

proptest! {
    #[test]
    fn quoted_fields_tokenize_back(rows in table()) {
        let mut text = String::new();
        for row in &rows {
            let line: Vec<String> = row.iter().map(|f| quote(f)).collect();
            text.push_str(&line.join(","));
            text.push('\n');
        }

        prop_assert_eq!(tokenize(&text, ','), rows);
    }

    #[test]
    fn detection_returns_a_candidate(line in ".*") {
        prop_assert!(CANDIDATE_DELIMITERS.contains(&detect_delimiter(&line)));
    }

    #[test]
    fn parse_never_panics(input in "[a-z0-9,;\t\"\r\n ]{0,64}") {
        let parsed = parse_csv(&input, None);
        let distinct_headers: BTreeSet<&String> = parsed.headers.iter().collect();
        for row in &parsed.rows {
            prop_assert_eq!(row.len(), distinct_headers.len());
        }
    }
}
