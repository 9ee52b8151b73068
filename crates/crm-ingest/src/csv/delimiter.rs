//! Delimiter autodetection.

/// Delimiters considered during detection, in tie-breaking order.
pub const CANDIDATE_DELIMITERS: [char; 3] = [',', ';', '\t'];

/// Returns the first line of `input`, without its terminator.
pub fn first_line(input: &str) -> &str {
    input.split(['\r', '\n']).next().unwrap_or_default()
}

/// Picks the candidate delimiter that occurs most often in `line`.
///
/// A candidate only wins with a strictly higher count, so ties go to the
/// earlier candidate and a line with none of them yields `,`.
pub fn detect_delimiter(line: &str) -> char {
    let mut best = CANDIDATE_DELIMITERS[0];
    let mut best_count = 0;

    for candidate in CANDIDATE_DELIMITERS {
        let count = line.matches(candidate).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }

    best
}

/// Human-readable name of a delimiter.
pub fn delimiter_name(delimiter: char) -> &'static str {
    match delimiter {
        ',' => "comma",
        ';' => "semicolon",
        '\t' => "tab",
        '|' => "pipe",
        _ => "other",
    }
}
