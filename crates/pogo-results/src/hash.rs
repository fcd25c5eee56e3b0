//! Content-based hashing for run IDs.

use pogo_sim::ParameterSet;
use sha2::{Digest, Sha256};

/// Deterministic run ID over the parameter set and solver version.
///
/// Identical inputs always map to the same run, which is what makes the
/// run cache valid: the dynamics are fully determined by the parameters.
pub fn compute_run_id(params: &ParameterSet, solver_version: &str) -> String {
    let mut hasher = Sha256::new();

    let params_json = serde_json::to_string(params).unwrap_or_default();
    hasher.update(params_json.as_bytes());
    hasher.update(solver_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}
