//! Terminal failures of the renumbering pipeline.
//!
//! These are ordinary values, not panics: the pipeline stops at the first one
//! and the CLI maps each to its own exit code.
use thiserror::Error;

/// Why a block of text could not be turned into a renumbered list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    /// Nothing left after trimming the input.
    #[error("input is empty")]
    EmptyInput,
    /// Not enough lines to build meaningful line statistics.
    #[error("too few lines to analyze: found {found}, need at least {required}")]
    TooFewLines { found: usize, required: usize },
    /// The last line has no separator, so the input does not look like a list.
    #[error("last line does not look like a list item: {anchor:?}")]
    PatternMismatch { anchor: String },
    /// Classification finished but produced nothing to number.
    #[error("no list elements recognized, the text pattern may be unusual")]
    NoElementsRecognized,
}

impl ClassificationError {
    /// Process exit code reported by the CLI for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::TooFewLines { .. } => 1,
            Self::PatternMismatch { .. } | Self::NoElementsRecognized => 2,
            Self::EmptyInput => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        let err = ClassificationError::TooFewLines {
            found: 3,
            required: 4,
        };
        assert_eq!(
            err.to_string(),
            "too few lines to analyze: found 3, need at least 4"
        );
        let err = ClassificationError::PatternMismatch {
            anchor: "NOTE".to_string(),
        };
        assert!(err.to_string().contains("\"NOTE\""));
    }

    #[test]
    fn exit_codes_distinguish_input_and_analysis_failures() {
        assert_eq!(ClassificationError::EmptyInput.exit_code(), 3);
        assert_eq!(
            ClassificationError::TooFewLines {
                found: 1,
                required: 4
            }
            .exit_code(),
            1
        );
        assert_eq!(ClassificationError::NoElementsRecognized.exit_code(), 2);
    }
}
