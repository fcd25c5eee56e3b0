//! Error types for the pogo-app service layer.

/// Application error type that wraps errors from the backend crates and
/// provides a unified interface for both CLI and GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Run not found: {0}")]
    RunNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pogo-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<pogo_sim::SimError> for AppError {
    fn from(err: pogo_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}

impl From<pogo_results::ResultsError> for AppError {
    fn from(err: pogo_results::ResultsError) -> Self {
        match err {
            pogo_results::ResultsError::RunNotFound { run_id } => AppError::RunNotFound(run_id),
            other => AppError::Results(other.to_string()),
        }
    }
}
