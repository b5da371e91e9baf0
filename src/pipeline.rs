//! Raw text in, renumbered list out.
use crate::classify::{classify, Classification};
use crate::diagnostics::Logger;
use crate::error::ClassificationError;
use crate::lines::read_lines;
use crate::patterns::ListPatterns;
use crate::render::render;

/// Split and classify `raw` without rendering it.
pub fn classify_text(
    raw: &str,
    logger: &dyn Logger,
) -> Result<Classification, ClassificationError> {
    let lines = read_lines(raw)?;
    tracing::debug!(lines = lines.len(), "input split into lines");
    classify(&lines, &ListPatterns::new(), logger)
}

/// Classify `raw` and render it as a cleanly renumbered list.
///
/// Failures are also reported through `logger.error` before being returned.
pub fn classify_and_render(raw: &str, logger: &dyn Logger) -> Result<String, ClassificationError> {
    let result = classify_text(raw, logger).and_then(|classification| {
        render(classification.leading_text(), &classification.lines)
    });
    if let Err(err) = &result {
        logger.error(&err.to_string());
    }
    result
}
