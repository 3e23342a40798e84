use std::path::PathBuf;

use thiserror::Error;

use crate::{EXIT_CONFIG_ERROR, EXIT_FAILURE};

/// Maximum number of characters of a response body kept in a data-shape error.
pub const SNIPPET_LIMIT: usize = 400;

#[derive(Error, Debug)]
pub enum CardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("Request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Refusing to render card: {0}")]
    EmptyInput(String),

    #[error("Unexpected response from {endpoint}: {reason} (body: {snippet})")]
    DataShape {
        endpoint: String,
        reason: String,
        snippet: String,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CardError {
    /// Build a data-shape error, truncating the offending body to a short snippet.
    #[must_use]
    pub fn data_shape(endpoint: &str, reason: impl Into<String>, body: &str) -> Self {
        let mut snippet: String = body.chars().take(SNIPPET_LIMIT).collect();
        if body.chars().count() > SNIPPET_LIMIT {
            snippet.push_str("...");
        }
        Self::DataShape {
            endpoint: endpoint.to_string(),
            reason: reason.into(),
            snippet,
        }
    }

    /// Short category name used in log lines.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::Transport { .. } | Self::HttpStatus { .. } => "Transport",
            Self::EmptyInput(_) => "EmptyInput",
            Self::DataShape { .. } => "DataShape",
            Self::FileWrite { .. } => "FileWrite",
        }
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => EXIT_CONFIG_ERROR,
            _ => EXIT_FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, CardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
