//! Result data types.

use pogo_sim::{Bounce, Frame, ParameterSet};
use serde::{Deserialize, Serialize};

pub type RunId = String;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub run_id: RunId,
    pub timestamp: String,
    pub params: ParameterSet,
    pub steps: usize,
    pub solver_version: String,
}

impl RunManifest {
    /// Manifest stamped with the current UTC time.
    pub fn new(run_id: RunId, params: ParameterSet, steps: usize, solver_version: &str) -> Self {
        Self {
            run_id,
            timestamp: chrono::Utc::now().to_rfc3339(),
            params,
            steps,
            solver_version: solver_version.to_string(),
        }
    }
}

/// One stored frame. Flat on purpose: one JSONL line per tick.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrameRecord {
    pub time_s: f64,
    pub position_m: f64,
    pub velocity_mps: f64,
    pub accel_mps2: f64,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bounced: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub out_of_range: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl From<&Frame> for FrameRecord {
    fn from(frame: &Frame) -> Self {
        Self {
            time_s: frame.time_s,
            position_m: frame.position_m,
            velocity_mps: frame.velocity_mps,
            accel_mps2: frame.accel_mps2,
            bounced: frame.bounce != Bounce::None,
            out_of_range: frame.out_of_range,
        }
    }
}
