//! pogo-core: stable foundation for pogosim.
//!
//! Contains:
//! - numeric (Real + finiteness checks)
//! - error (shared error types)

pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
