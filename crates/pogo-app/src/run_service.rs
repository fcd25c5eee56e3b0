//! Run execution and caching service.

use std::path::Path;

use pogo_results::{compute_run_id, FrameRecord, RunManifest, RunStore};
use pogo_sim::{ParameterSet, SimulationController};
use tracing::info;

use crate::error::AppResult;

/// Stamped into manifests and folded into run IDs; bump on any change to the
/// dynamics or the stored format.
pub const SOLVER_VERSION: &str = "0.1.0";

/// Options for running simulations.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub use_cache: bool,
    pub solver_version: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            solver_version: SOLVER_VERSION.to_string(),
        }
    }
}

/// Request to execute a run.
pub struct RunRequest<'a> {
    pub base_dir: &'a Path,
    pub params: ParameterSet,
    pub options: RunOptions,
}

/// Response from a run execution.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub run_id: String,
    pub manifest: RunManifest,
    pub loaded_from_cache: bool,
}

/// Drive the controller for every frame time below `t_max` and collect the
/// frames.
///
/// This is the headless equivalent of the GUI's frame clock: the driver,
/// not the controller, decides when `t_max` is reached.
pub fn simulate(params: ParameterSet) -> AppResult<Vec<FrameRecord>> {
    let mut controller = SimulationController::new(params)?;
    let mut frames = Vec::with_capacity(params.steps_to_t_max());
    while controller.has_ticks_remaining() {
        let frame = controller.step();
        frames.push(FrameRecord::from(&frame));
    }
    Ok(frames)
}

/// Execute a run, or return the cached one with the same run ID.
pub fn ensure_run(request: &RunRequest) -> AppResult<RunResponse> {
    request.params.validate()?;

    let run_id = compute_run_id(&request.params, &request.options.solver_version);
    let store = RunStore::for_dir(request.base_dir)?;

    if request.options.use_cache && store.has_run(&run_id) {
        let manifest = store.load_manifest(&run_id)?;
        info!(run_id = %run_id, "run loaded from cache");
        return Ok(RunResponse {
            run_id,
            manifest,
            loaded_from_cache: true,
        });
    }

    let frames = simulate(request.params)?;
    let manifest = RunManifest::new(
        run_id.clone(),
        request.params,
        frames.len(),
        &request.options.solver_version,
    );
    store.save_run(&manifest, &frames)?;
    info!(run_id = %run_id, steps = frames.len(), "run completed and stored");

    Ok(RunResponse {
        run_id,
        manifest,
        loaded_from_cache: false,
    })
}

pub fn load_run(base_dir: &Path, run_id: &str) -> AppResult<(RunManifest, Vec<FrameRecord>)> {
    let store = RunStore::for_dir(base_dir)?;
    let manifest = store.load_manifest(run_id)?;
    let frames = store.load_frames(run_id)?;
    Ok((manifest, frames))
}

pub fn list_runs(base_dir: &Path) -> AppResult<Vec<RunManifest>> {
    let store = RunStore::for_dir(base_dir)?;
    Ok(store.list_runs()?)
}

pub fn delete_run(base_dir: &Path, run_id: &str) -> AppResult<()> {
    let store = RunStore::for_dir(base_dir)?;
    Ok(store.delete_run(run_id)?)
}
