//! Error types for tree operations and crate setup.

use thiserror::Error;

/// Errors returned by path lookups on a [`crate::Tree`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The path was empty.
    #[error("path must not be empty")]
    InvalidArgument,

    /// No node exists for the exact path.
    #[error("path {path} not found")]
    NotFound { path: String },
}

impl TreeError {
    pub(crate) fn not_found<S: AsRef<str>>(path: &[S]) -> Self {
        let mut display = String::new();
        for segment in path {
            display.push('/');
            display.push_str(segment.as_ref());
        }
        TreeError::NotFound { path: display }
    }
}

/// Errors surfaced by configuration loading and logging initialization.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
