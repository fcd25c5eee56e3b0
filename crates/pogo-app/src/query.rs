//! Series extraction and run summaries over stored frames.

use std::str::FromStr;

use pogo_results::FrameRecord;

use crate::error::{AppError, AppResult};

/// Plottable/exportable variables of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable {
    Position,
    Velocity,
    Acceleration,
}

impl Variable {
    pub fn label(&self) -> &'static str {
        match self {
            Variable::Position => "Position (m)",
            Variable::Velocity => "Velocity (m/s)",
            Variable::Acceleration => "Acceleration (m/s²)",
        }
    }
}

impl FromStr for Variable {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "position" | "x" => Ok(Variable::Position),
            "velocity" | "v" => Ok(Variable::Velocity),
            "acceleration" | "a" => Ok(Variable::Acceleration),
            other => Err(AppError::InvalidInput(format!(
                "unknown variable '{other}' (expected position, velocity or acceleration)"
            ))),
        }
    }
}

/// `(time, value)` pairs for one variable, in tick order.
pub fn extract_series(frames: &[FrameRecord], variable: Variable) -> Vec<(f64, f64)> {
    frames
        .iter()
        .map(|f| {
            let value = match variable {
                Variable::Position => f.position_m,
                Variable::Velocity => f.velocity_mps,
                Variable::Acceleration => f.accel_mps2,
            };
            (f.time_s, value)
        })
        .collect()
}

/// Concise overview of a stored run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub record_count: usize,
    pub time_range: (f64, f64),
    pub peak_position_m: f64,
    pub bounce_count: usize,
}

pub fn get_run_summary(frames: &[FrameRecord]) -> AppResult<RunSummary> {
    let (first, last) = match (frames.first(), frames.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(AppError::InvalidInput(
                "run contains no frames".to_string(),
            ))
        }
    };

    Ok(RunSummary {
        record_count: frames.len(),
        time_range: (first.time_s, last.time_s),
        peak_position_m: frames.iter().map(|f| f.position_m).fold(f64::MIN, f64::max),
        bounce_count: frames.iter().filter(|f| f.bounced).count(),
    })
}
