// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports are built from them after the fact)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
///
/// Note there is no "unknown placeholder" variant: a token with no value in
/// the substitution map passes through rendering untouched.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Invalid template path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Registry Invariants
    // ========================================================================
    #[error("Two templates write the same file: {path}")]
    DuplicatePath { path: String },

    #[error("Duplicate template name: {name}")]
    DuplicateTemplateName { name: String },

    #[error("Template registry is empty")]
    EmptyRegistry,

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("No template named '{name}'")]
    TemplateNotFound { name: String },
}

impl DomainError {
    /// Shorthand for the most common validation failure.
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { field, .. } => vec![
                format!("Provide a non-empty value for {field}"),
                "Re-run the command and answer every prompt".into(),
            ],
            Self::DuplicatePath { path } | Self::InvalidPath { path, .. } => vec![
                format!("Template path '{path}' is not usable"),
                "This is a problem with the built-in registry, please report it".into(),
            ],
            Self::TemplateNotFound { name } => vec![
                format!("No template called '{name}'"),
                "Try: agentdocs list".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::Validation,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::InvalidPath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::DuplicatePath { .. }
            | Self::DuplicateTemplateName { .. }
            | Self::EmptyRegistry => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
