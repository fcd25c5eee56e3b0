//! Frame clock and trajectory history.

use pogo_core::Real;

/// Four parallel time-series of the observed trajectory.
///
/// Same length, insertion-ordered, append-only within a run; one entry per
/// tick, no interpolation or resampling. Unbounded for the life of one run
/// (`t_max` bounds run length externally). Cleared on reset.
#[derive(Debug, Clone, Default)]
pub struct HistoryBuffer {
    pub time_s: Vec<Real>,
    pub position_m: Vec<Real>,
    pub velocity_mps: Vec<Real>,
    pub accel_mps2: Vec<Real>,
}

impl HistoryBuffer {
    pub fn len(&self) -> usize {
        self.time_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_s.is_empty()
    }

    fn push(&mut self, time_s: Real, position_m: Real, velocity_mps: Real, accel_mps2: Real) {
        self.time_s.push(time_s);
        self.position_m.push(position_m);
        self.velocity_mps.push(velocity_mps);
        self.accel_mps2.push(accel_mps2);
    }

    fn clear(&mut self) {
        self.time_s.clear();
        self.position_m.clear();
        self.velocity_mps.clear();
        self.accel_mps2.clear();
    }
}

/// Maps the discrete frame counter to elapsed time and owns the history.
///
/// Frame `n` carries `t = n * dt`; the counter starts at zero and only the
/// controller advances it.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    dt_s: Real,
    frames_issued: u64,
    history: HistoryBuffer,
}

impl SimulationClock {
    pub fn new(dt_s: Real) -> Self {
        Self {
            dt_s,
            frames_issued: 0,
            history: HistoryBuffer::default(),
        }
    }

    /// Elapsed time the next recorded frame will carry.
    pub fn next_time_s(&self) -> Real {
        self.frames_issued as Real * self.dt_s
    }

    pub fn frames_issued(&self) -> u64 {
        self.frames_issued
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Append one tick and advance the frame counter. Returns the frame time.
    pub(crate) fn record(
        &mut self,
        position_m: Real,
        velocity_mps: Real,
        accel_mps2: Real,
    ) -> Real {
        let time_s = self.next_time_s();
        self.history
            .push(time_s, position_m, velocity_mps, accel_mps2);
        self.frames_issued += 1;
        time_s
    }

    /// Drop all recorded frames and restart the counter, adopting a possibly
    /// changed time step.
    pub(crate) fn reset(&mut self, dt_s: Real) {
        self.dt_s = dt_s;
        self.frames_issued = 0;
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_maps_to_time() {
        let mut clock = SimulationClock::new(0.01);
        assert_eq!(clock.next_time_s(), 0.0);
        assert_eq!(clock.record(1.0, 2.0, 3.0), 0.0);
        assert_eq!(clock.record(1.1, 2.1, 3.1), 0.01);
        assert_eq!(clock.record(1.2, 2.2, 3.2), 0.02);
        assert_eq!(clock.frames_issued(), 3);
    }

    #[test]
    fn history_stays_parallel() {
        let mut clock = SimulationClock::new(0.5);
        clock.record(1.0, -1.0, 0.5);
        clock.record(2.0, -2.0, 0.25);
        let h = clock.history();
        assert_eq!(h.len(), 2);
        assert_eq!(h.time_s, vec![0.0, 0.5]);
        assert_eq!(h.position_m, vec![1.0, 2.0]);
        assert_eq!(h.velocity_mps, vec![-1.0, -2.0]);
        assert_eq!(h.accel_mps2, vec![0.5, 0.25]);
    }

    #[test]
    fn reset_clears_everything() {
        let mut clock = SimulationClock::new(0.01);
        clock.record(1.0, 2.0, 3.0);
        clock.reset(0.02);
        assert!(clock.history().is_empty());
        assert_eq!(clock.frames_issued(), 0);
        // New dt takes effect for the next run
        clock.record(0.0, 0.0, 0.0);
        clock.record(0.0, 0.0, 0.0);
        assert_eq!(clock.history().time_s[1], 0.02);
    }
}
