//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while configuring or stepping the oscillator.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Malformed parameter token '{token}': expected key=value")]
    MalformedToken { token: String },

    #[error("Invalid numeric value '{value}' for parameter '{key}'")]
    InvalidNumber { key: String, value: String },

    #[error("Invalid configuration: {what}")]
    InvalidConfiguration { what: &'static str },

    #[error(transparent)]
    Numeric(#[from] pogo_core::CoreError),
}

impl SimError {
    /// True for errors produced while parsing parameter text, as opposed to
    /// a well-formed but physically invalid configuration.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            SimError::MalformedToken { .. } | SimError::InvalidNumber { .. }
        )
    }
}

pub type SimResult<T> = Result<T, SimError>;
