//! Tick orchestration: integrate, reflect, commit, record.

use pogo_core::Real;
use tracing::debug;

use crate::boundary::{reflect, Bounce};
use crate::error::SimResult;
use crate::history::{HistoryBuffer, SimulationClock};
use crate::integrator::euler_step;
use crate::params::ParameterSet;
use crate::parse::parse_assignments;

/// Mutable oscillator state. Owned exclusively by the controller; renderers
/// and UIs only ever see copies.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimState {
    pub position_m: Real,
    pub velocity_mps: Real,
}

/// Externally observable snapshot of one tick, the unit exchanged with the
/// renderer, the plotter and the exporter.
#[derive(Clone, Copy, Debug)]
pub struct Frame {
    pub time_s: Real,
    pub position_m: Real,
    pub velocity_mps: Real,
    pub accel_mps2: Real,
    pub bounce: Bounce,
    pub out_of_range: bool,
}

/// Orchestrates one external tick and the parameter/state lifecycle.
///
/// Single-owner, single-threaded: the external driver serializes `step`
/// against `set_parameters`, so no locking happens here.
pub struct SimulationController {
    params: ParameterSet,
    state: SimState,
    clock: SimulationClock,
}

impl Default for SimulationController {
    fn default() -> Self {
        let params = ParameterSet::default();
        Self {
            clock: SimulationClock::new(params.dt_s),
            state: SimState::default(),
            params,
        }
    }
}

impl SimulationController {
    /// Build a controller around a validated parameter set.
    pub fn new(params: ParameterSet) -> SimResult<Self> {
        params.validate()?;
        Ok(Self {
            clock: SimulationClock::new(params.dt_s),
            state: SimState::default(),
            params,
        })
    }

    /// Advance exactly one tick and return its frame.
    ///
    /// Integrator proposes, the boundary reflector post-processes, then the
    /// result is committed and recorded. Never replays: two calls advance
    /// two ticks.
    pub fn step(&mut self) -> Frame {
        let raw = euler_step(&self.params, self.state.position_m, self.state.velocity_mps);
        let outcome = reflect(raw.position_m, raw.velocity_mps, self.params.rocket_height_m);

        self.state.position_m = outcome.position_m;
        self.state.velocity_mps = outcome.velocity_mps;

        let time_s = self
            .clock
            .record(outcome.position_m, outcome.velocity_mps, raw.accel_mps2);

        Frame {
            time_s,
            position_m: outcome.position_m,
            velocity_mps: outcome.velocity_mps,
            accel_mps2: raw.accel_mps2,
            bounce: outcome.bounce,
            out_of_range: outcome.out_of_range,
        }
    }

    /// Replace parameters from wire text, then reset state and history.
    ///
    /// All-or-nothing: on a parse or validation failure no field changes and
    /// no reset occurs.
    pub fn set_parameters(&mut self, input: &str) -> SimResult<()> {
        let assignments = parse_assignments(input)?;
        let mut candidate = self.params;
        for a in &assignments {
            candidate.set(a.key, a.value);
        }
        candidate.validate()?;
        self.params = candidate;
        debug!(
            applied = assignments.len(),
            "parameters replaced, resetting state"
        );
        self.reset_state();
        Ok(())
    }

    /// Zero the oscillator state and clear the history. The controller stays
    /// configured to run.
    pub fn reset_state(&mut self) {
        self.state = SimState::default();
        self.clock.reset(self.params.dt_s);
    }

    /// Read-only parameter snapshot for renderers and UIs.
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    /// Full observed trajectory of the current run, for plotting and export.
    pub fn history(&self) -> &HistoryBuffer {
        self.clock.history()
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// Whether a driver honoring `t_max` should issue another tick.
    pub fn has_ticks_remaining(&self) -> bool {
        (self.clock.frames_issued() as usize) < self.params.steps_to_t_max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    #[test]
    fn step_commits_and_records() {
        let mut ctl = SimulationController::default();
        let frame = ctl.step();
        assert_eq!(frame.time_s, 0.0);
        assert_eq!(frame.accel_mps2, 20.0);
        assert_eq!(frame.velocity_mps, 0.2);
        assert_eq!(frame.position_m, 0.002);
        assert_eq!(ctl.state().position_m, 0.002);
        assert_eq!(ctl.history().len(), 1);
    }

    #[test]
    fn two_calls_advance_two_ticks() {
        let mut ctl = SimulationController::default();
        let f1 = ctl.step();
        let f2 = ctl.step();
        assert!(f2.time_s > f1.time_s);
        assert_ne!(f1.position_m, f2.position_m);
        assert_eq!(ctl.history().len(), 2);
    }

    #[test]
    fn set_parameters_resets_atomically() {
        let mut ctl = SimulationController::default();
        for _ in 0..5 {
            ctl.step();
        }
        ctl.set_parameters("m=2000").unwrap();
        assert_eq!(ctl.state(), SimState::default());
        assert!(ctl.history().is_empty());
        assert_eq!(ctl.params().mass_kg, 2000.0);
        // All other fields keep their prior values
        assert_eq!(ctl.params().spring_n_per_m, 5000.0);
        assert_eq!(ctl.params().damping_ns_per_m, 200.0);
        assert_eq!(ctl.params().thrust_n, 20_000.0);
        assert_eq!(ctl.params().dt_s, 0.01);
        assert_eq!(ctl.params().t_max_s, 10.0);
    }

    #[test]
    fn parse_failure_leaves_everything_untouched() {
        let mut ctl = SimulationController::default();
        for _ in 0..3 {
            ctl.step();
        }
        let before_params = *ctl.params();
        let before_state = ctl.state();

        let err = ctl.set_parameters("m=abc").unwrap_err();
        assert!(err.is_parse_error());
        assert_eq!(*ctl.params(), before_params);
        assert_eq!(ctl.state(), before_state);
        assert_eq!(ctl.history().len(), 3);
    }

    #[test]
    fn invalid_configuration_rejected_before_stepping() {
        let mut ctl = SimulationController::default();
        ctl.step();
        let err = ctl.set_parameters("m=0").unwrap_err();
        assert!(matches!(err, SimError::InvalidConfiguration { .. }));
        // Nothing applied, history intact
        assert_eq!(ctl.params().mass_kg, 1000.0);
        assert_eq!(ctl.history().len(), 1);
    }

    #[test]
    fn unrecognized_key_still_resets() {
        let mut ctl = SimulationController::default();
        ctl.step();
        let before = *ctl.params();
        ctl.set_parameters("g=9.8").unwrap();
        assert_eq!(*ctl.params(), before);
        assert!(ctl.history().is_empty());
        assert_eq!(ctl.state(), SimState::default());
    }

    #[test]
    fn ticks_remaining_covers_non_dividing_t_max() {
        // dt does not exactly divide t_max; t = 0, 0.1 and 0.2 are all
        // below 0.25 and each must be issued.
        let mut ctl = SimulationController::default();
        ctl.set_parameters("t_max=0.25, dt=0.1").unwrap();
        let mut issued = 0;
        while ctl.has_ticks_remaining() {
            ctl.step();
            issued += 1;
        }
        assert_eq!(issued, 3);
        assert_eq!(ctl.history().time_s.len(), 3);
        assert!(ctl.history().time_s[2] < 0.25);
    }

    #[test]
    fn ticks_remaining_follows_t_max() {
        let mut ctl = SimulationController::default();
        ctl.set_parameters("t_max=0.03, dt=0.01").unwrap();
        assert!(ctl.has_ticks_remaining());
        ctl.step();
        ctl.step();
        ctl.step();
        assert!(!ctl.has_ticks_remaining());
        // The controller itself never refuses a tick
        let frame = ctl.step();
        assert!(frame.time_s > 0.02);
    }
}
