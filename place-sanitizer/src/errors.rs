//! errors.rs - Custom error types for the place-sanitizer library.
//!
//! Every variant is a configuration error: it is raised while a list of rule
//! entries is resolved into executable steps, never while a place is processed.
//! Failures of a step during processing surface as `anyhow::Error` instead.

use thiserror::Error;

/// This enum represents all configuration errors of the `place-sanitizer` library.
///
/// `#[non_exhaustive]` leaves room for new variants without breaking callers
/// that match on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SanitizerError {
    #[error("Sanitizer rule #{position} is missing the 'step' attribute.")]
    MissingStep { position: usize },

    #[error("Sanitizer rule #{position}: 'step' attribute must be a simple string.")]
    InvalidStepName { position: usize },

    #[error("Unknown sanitizer step '{0}'.")]
    UnknownStep(String),

    #[error("Sanitizer step '{step}': {message}")]
    InvalidOption { step: String, message: String },
}

impl SanitizerError {
    /// Shorthand used by step factories to reject their options.
    pub fn invalid_option(step: impl Into<String>, message: impl Into<String>) -> Self {
        SanitizerError::InvalidOption {
            step: step.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_rule() {
        let err = SanitizerError::MissingStep { position: 2 };
        assert_eq!(err.to_string(), "Sanitizer rule #2 is missing the 'step' attribute.");

        let err = SanitizerError::invalid_option("split-name-list", "no delimiter characters");
        assert_eq!(err.to_string(), "Sanitizer step 'split-name-list': no delimiter characters");
        assert!(matches!(err, SanitizerError::InvalidOption { .. }));
    }
}
