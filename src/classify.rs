//! Line classification: leading prose vs. list elements vs. unparsable fragments.
//!
//! The last line anchors the whole pass. If it has no separator the input is
//! not treated as a list at all. Every other line after the first is split at
//! its first separator. The first line is judged statistically against the
//! rest (see [`crate::metrics`]) to decide whether it introduces the list.
use crate::diagnostics::{Logger, Warning};
use crate::error::ClassificationError;
use crate::metrics::{DistanceProfile, LineMetrics};
use crate::patterns::ListPatterns;

/// Outcome for a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedLine {
    /// A list item, numbering prefix and separator stripped.
    Element(String),
    /// A line with nothing after its separator, kept verbatim.
    Unparsed(String),
}

impl ClassifiedLine {
    /// The empty element left in the first slot when line 0 became leading text.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Element(content) if content.is_empty())
    }
}

/// Everything the classifier learned about one input.
#[derive(Debug, Clone)]
pub struct Classification {
    pub leading_text: Option<String>,
    /// One entry per input line, in input order.
    pub lines: Vec<ClassifiedLine>,
    /// Measurements for every input line, including the first.
    pub metrics: Vec<LineMetrics>,
    /// Centroid and spread of lines `1..`.
    pub profile: DistanceProfile,
    pub first_line_dist: f64,
    pub warnings: Vec<Warning>,
}

impl Classification {
    pub fn leading_text(&self) -> Option<&str> {
        self.leading_text.as_deref()
    }
}

/// Classify already-split lines.
///
/// Needs at least two lines: the first is tested against statistics of the
/// rest. Warnings go to `logger` as they occur and are also kept on the
/// returned [`Classification`].
pub fn classify(
    lines: &[String],
    patterns: &ListPatterns,
    logger: &dyn Logger,
) -> Result<Classification, ClassificationError> {
    let (first, body) = match lines {
        [first, body @ ..] if !body.is_empty() => (first, body),
        _ => {
            return Err(ClassificationError::TooFewLines {
                found: lines.len(),
                required: 2,
            })
        }
    };

    let mut warnings = Vec::new();
    let mut record = |warning: Warning| {
        logger.warn(&warning.to_string());
        warnings.push(warning);
    };

    // The last line is assumed to always be a list element.
    let anchor = &body[body.len() - 1];
    if !patterns.separator.is_match(anchor) {
        return Err(ClassificationError::PatternMismatch {
            anchor: anchor.clone(),
        });
    }
    if !patterns.prefix.is_match(anchor) {
        record(Warning::AnchorPrefixMissing);
    }

    let metrics: Vec<LineMetrics> = lines
        .iter()
        .map(|line| LineMetrics::measure(line, &patterns.symbols))
        .collect();

    let mut classified = Vec::with_capacity(lines.len());
    // Slot 0 is decided once the body statistics are known.
    classified.push(ClassifiedLine::Element(String::new()));
    for (offset, line) in body.iter().enumerate() {
        let index = offset + 1;
        match patterns.separator.split(line) {
            Some(parts) if !parts.content.is_empty() => {
                if !patterns.prefix.is_match(parts.prefix) {
                    record(Warning::PrefixMismatch { line: index });
                }
                classified.push(ClassifiedLine::Element(parts.content.to_string()));
            }
            _ => {
                record(Warning::UnparsedLine { line: index });
                classified.push(ClassifiedLine::Unparsed(line.clone()));
            }
        }
    }

    let profile =
        DistanceProfile::from_body(&metrics[1..]).ok_or(ClassificationError::TooFewLines {
            found: lines.len(),
            required: 2,
        })?;
    let first_line_dist = metrics[0].distance(&profile);
    tracing::debug!(
        average_len = profile.average_len,
        average_symbol_cnt = profile.average_symbol_cnt,
        dist_std_deviation = profile.dist_std_deviation,
        first_line_dist,
        threshold = profile.threshold(),
        "line statistics computed"
    );

    let mut leading_text = None;
    if profile.is_outlier(first_line_dist) {
        logger.info("first line classified as leading text");
        leading_text = Some(first.clone());
    } else {
        match patterns.separator.split(first) {
            // Unlike body lines, empty content is accepted here and later
            // dropped as the placeholder.
            Some(parts) => classified[0] = ClassifiedLine::Element(parts.content.to_string()),
            None => {
                record(Warning::FirstLineUnparsed);
                leading_text = Some(first.clone());
            }
        }
    }

    Ok(Classification {
        leading_text,
        lines: classified,
        metrics,
        profile,
        first_line_dist,
        warnings,
    })
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
