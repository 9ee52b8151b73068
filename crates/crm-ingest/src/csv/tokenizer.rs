//! RFC 4180 tokenizer.

use std::mem;

/// Tokenizer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Inside an unquoted field.
    Normal,
    /// Inside a quoted field.
    Quoted,
}

/// Splits `input` into rows of raw fields using `delimiter`.
///
/// - A quote opens a quoted section wherever it appears in a field
/// - Inside quotes, `""` is a literal quote and delimiters/newlines are kept
/// - `\n`, `\r\n`, and bare `\r` all end a row
/// - A final row without a terminator is still emitted
///
/// Fields are returned untrimmed.
pub fn tokenize(input: &str, delimiter: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut state = State::Normal;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::Quoted => {
                if c == '"' {
                    // Check for escaped quote ("")
                    if chars.peek() == Some(&'"') {
                        field.push('"');
                        chars.next();
                    } else {
                        state = State::Normal;
                    }
                } else {
                    field.push(c);
                }
            }
            State::Normal => match c {
                '"' => state = State::Quoted,
                '\r' | '\n' => {
                    if c == '\r' && chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    row.push(mem::take(&mut field));
                    rows.push(mem::take(&mut row));
                }
                _ if c == delimiter => row.push(mem::take(&mut field)),
                _ => field.push(c),
            },
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}
