//! Deterministic tick-driven dynamics for the pogo-effect oscillator.
//!
//! Provides:
//! - ParameterSet with the `key=value` wire format of the operator UI
//! - Explicit forward Euler integration of `m*x'' + c*x' + k*x = F`
//! - Single-bounce reflective boundary at the travel envelope walls
//! - Frame clock + history buffers for plotting
//! - SimulationController tying one tick together

pub mod boundary;
pub mod controller;
pub mod error;
pub mod history;
pub mod integrator;
pub mod params;
pub mod parse;

// Re-exports for public API
pub use boundary::{reflect, Bounce, ReflectOutcome, DISPLAY_HEIGHT_M};
pub use controller::{Frame, SimState, SimulationController};
pub use error::{SimError, SimResult};
pub use history::{HistoryBuffer, SimulationClock};
pub use integrator::{euler_step, RawStep};
pub use params::{ParamKey, ParameterSet};
pub use parse::{parse_assignments, Assignment};
