//! Shared application service layer for pogosim.
//!
//! Provides a unified interface for the CLI and GUI frontends: headless run
//! execution with a content-addressed run cache, and series queries over
//! stored runs.

pub mod error;
pub mod query;
pub mod run_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use query::{extract_series, get_run_summary, RunSummary, Variable};
pub use run_service::{
    delete_run, ensure_run, list_runs, load_run, simulate, RunOptions, RunRequest, RunResponse,
    SOLVER_VERSION,
};
