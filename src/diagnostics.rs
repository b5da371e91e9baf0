//! Logger capability handed to the classifier, plus the non-fatal anomalies it reports.
//!
//! The classifier never reaches for a global logger. Callers pass a [`Logger`]
//! explicitly: the CLI uses [`TracingLogger`], tests use a recording logger so
//! warnings can be asserted on.
use serde::Serialize;
use std::fmt;

/// Sink for classifier diagnostics.
pub trait Logger {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards diagnostics to `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "relist::classify", "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "relist::classify", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "relist::classify", "{message}");
    }
}

/// Anomaly found while classifying; processing continues past it.
///
/// Line numbers are zero-based indices into the split input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// The last line carries no numeric prefix.
    AnchorPrefixMissing,
    /// A line's prefix segment carries no numeric prefix.
    PrefixMismatch { line: usize },
    /// Nothing followed the separator; the line is kept verbatim.
    UnparsedLine { line: usize },
    /// The first line looked like an element but has no separator, so it was
    /// kept as leading text.
    FirstLineUnparsed,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AnchorPrefixMissing => write!(f, "failed to match line id on the last line"),
            Self::PrefixMismatch { line } => write!(f, "prefix match failed for line {line}"),
            Self::UnparsedLine { line } => write!(f, "failed to analyze line {line}"),
            Self::FirstLineUnparsed => write!(
                f,
                "first line classified as element, but failed to parse; keeping it as leading text"
            ),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Logger;
    use std::cell::RefCell;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) enum Level {
        Info,
        Warn,
        Error,
    }

    /// Logger that keeps every message for later assertions.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingLogger {
        entries: RefCell<Vec<(Level, String)>>,
    }

    impl RecordingLogger {
        pub(crate) fn messages(&self, level: Level) -> Vec<String> {
            self.entries
                .borrow()
                .iter()
                .filter(|(entry_level, _)| *entry_level == level)
                .map(|(_, message)| message.clone())
                .collect()
        }
    }

    impl Logger for RecordingLogger {
        fn info(&self, message: &str) {
            self.entries
                .borrow_mut()
                .push((Level::Info, message.to_string()));
        }

        fn warn(&self, message: &str) {
            self.entries
                .borrow_mut()
                .push((Level::Warn, message.to_string()));
        }

        fn error(&self, message: &str) {
            self.entries
                .borrow_mut()
                .push((Level::Error, message.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_render_with_line_numbers() {
        assert_eq!(
            Warning::UnparsedLine { line: 2 }.to_string(),
            "failed to analyze line 2"
        );
        assert_eq!(
            Warning::PrefixMismatch { line: 5 }.to_string(),
            "prefix match failed for line 5"
        );
    }

    #[test]
    fn warnings_serialize_with_kind_tag() {
        let json = serde_json::to_string(&Warning::UnparsedLine { line: 2 }).expect("serialize");
        assert_eq!(json, r#"{"kind":"unparsed_line","line":2}"#);
        let json = serde_json::to_string(&Warning::AnchorPrefixMissing).expect("serialize");
        assert_eq!(json, r#"{"kind":"anchor_prefix_missing"}"#);
    }
}
