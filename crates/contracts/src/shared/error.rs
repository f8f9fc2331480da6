use thiserror::Error;

/// Failures the UI controllers can run into.
///
/// None of them is fatal: callers log the error, skip the affected feature or
/// row, and keep the page interactive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// An element or registration the controller expects is absent.
    #[error("missing target: {0}")]
    MissingTarget(String),

    /// A table row lacks a field the transcript viewer needs.
    #[error("malformed record {row}: missing field `{field}`")]
    MalformedRecord { row: String, field: String },

    /// The UI configuration could not be parsed.
    #[error("invalid ui configuration: {0}")]
    Config(String),
}

impl UiError {
    pub fn missing(target: impl Into<String>) -> Self {
        UiError::MissingTarget(target.into())
    }
}
