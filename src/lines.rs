//! Turning pasted text into candidate list lines.
use crate::error::ClassificationError;
use regex::Regex;

/// Fewest lines the classifier will look at; below this the statistics are noise.
pub const MIN_LINES: usize = 4;

/// Newline, or a wide whitespace gap left behind when a list was pasted inline.
const LINE_DELIMITER_PATTERN: &str = r"\n|\s{4,}";

/// Split raw text into trimmed, non-empty lines in original order.
pub fn split_lines(raw: &str) -> Vec<String> {
    let delimiter = Regex::new(LINE_DELIMITER_PATTERN).expect("regex for line delimiters");
    delimiter
        .split(raw.trim())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split raw text and check there is enough of it to classify.
pub fn read_lines(raw: &str) -> Result<Vec<String>, ClassificationError> {
    if raw.trim().is_empty() {
        return Err(ClassificationError::EmptyInput);
    }
    let lines = split_lines(raw);
    if lines.len() < MIN_LINES {
        return Err(ClassificationError::TooFewLines {
            found: lines.len(),
            required: MIN_LINES,
        });
    }
    Ok(lines)
}
