//! Domain error types for catalog lookup and option resolution.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (resolution is deterministic; callers may re-inspect freely)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions, including the full valid choice set)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Catalog lookup for a name that was never registered.
    ///
    /// This indicates a caller bug or a catalog gap, not invalid user input:
    /// the resolver only performs lookups with names that already passed
    /// membership validation.
    #[error("unknown {set} '{name}': not registered in the option catalog")]
    UnknownChoice { set: &'static str, name: String },

    /// A user-supplied discrete name is not in its valid choice set.
    #[error("invalid {option} '{name}': valid choices are [{}]", .valid.join(", "))]
    InvalidChoice {
        option: &'static str,
        name: String,
        valid: Vec<String>,
    },

    /// An option was supplied that is only meaningful in combination with
    /// another option that was not activated.
    #[error("option '{option}' requires {requires}")]
    ConflictingOption {
        option: &'static str,
        requires: &'static str,
    },

    /// An option carried a value of the wrong kind (e.g. a number where a
    /// name was expected).
    #[error("option '{option}' has the wrong type: expected {expected}, got {actual}")]
    WrongType {
        option: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownChoice { set, name } => vec![
                format!("'{name}' is not a registered {set}"),
                "This is likely a bug in the calling code; please report it".into(),
            ],
            Self::InvalidChoice {
                option,
                name,
                valid,
            } => {
                let mut out = vec![
                    format!("'{name}' is not a valid {option}"),
                    format!("Valid {option} choices:"),
                ];
                out.extend(valid.iter().map(|v| format!("  \u{2022} {v}")));
                out
            }
            Self::ConflictingOption { option, requires } => vec![
                format!("'{option}' only makes sense together with {requires}"),
                format!("Either remove '{option}' or supply {requires}"),
            ],
            Self::WrongType {
                option, expected, ..
            } => vec![format!("Supply '{option}' as a {expected}")],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidChoice { .. } | Self::ConflictingOption { .. } | Self::WrongType { .. } => {
                ErrorCategory::Validation
            }
            Self::UnknownChoice { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_choice_message_enumerates_valid_set() {
        let err = DomainError::InvalidChoice {
            option: "world_name",
            name: "not_a_world".into(),
            valid: vec!["empty".into(), "ksql".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("not_a_world"));
        assert!(msg.contains("empty"));
        assert!(msg.contains("ksql"));
    }

    #[test]
    fn invalid_choice_suggestions_list_every_alternative() {
        let err = DomainError::InvalidChoice {
            option: "model_name",
            name: "bogus".into(),
            valid: vec!["iris".into(), "plane".into(), "rover".into()],
        };
        let suggestions = err.suggestions();
        for model in ["iris", "plane", "rover"] {
            assert!(suggestions.iter().any(|s| s.contains(model)), "{model}");
        }
    }

    #[test]
    fn unknown_choice_is_internal() {
        let err = DomainError::UnknownChoice {
            set: "world",
            name: "x".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn conflicting_option_is_validation() {
        let err = DomainError::ConflictingOption {
            option: "model_pose",
            requires: "a model_name",
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().contains("model_pose"));
    }
}
