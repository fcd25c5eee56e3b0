//! Explicit forward Euler step for the damped, forced oscillator.

use pogo_core::Real;

use crate::params::ParameterSet;

/// Proposed state after one raw Euler tick, before boundary handling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawStep {
    pub position_m: Real,
    pub velocity_mps: Real,
    pub accel_mps2: Real,
}

/// One explicit Euler tick of `m*x'' + c*x' + k*x = F`.
///
/// Velocity advances first and the fresh velocity moves the position
/// (semi-implicit ordering of the reference trajectory). Pure: the caller
/// commits the proposal after boundary handling.
///
/// Precondition: `params.validate()` passed, in particular `mass_kg > 0`.
pub fn euler_step(p: &ParameterSet, position_m: Real, velocity_mps: Real) -> RawStep {
    let accel =
        (p.thrust_n - p.spring_n_per_m * position_m - p.damping_ns_per_m * velocity_mps) / p.mass_kg;
    let velocity = velocity_mps + accel * p.dt_s;
    let position = position_m + velocity * p.dt_s;
    RawStep {
        position_m: position,
        velocity_mps: velocity,
        accel_mps2: accel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_known_values() {
        // m=1000, k=5000, c=200, F=20000, dt=0.01 from rest:
        // a = 20000/1000 = 20, v = 0.2, x = 0.002
        let p = ParameterSet::default();
        let step = euler_step(&p, 0.0, 0.0);
        assert_eq!(step.accel_mps2, 20.0);
        assert_eq!(step.velocity_mps, 0.2);
        assert_eq!(step.position_m, 0.002);
    }

    #[test]
    fn spring_and_damper_oppose_motion() {
        let p = ParameterSet::default();
        let step = euler_step(&p, 2.0, 1.0);
        let expected_accel = (20_000.0 - 5000.0 * 2.0 - 200.0 * 1.0) / 1000.0;
        assert_eq!(step.accel_mps2, expected_accel);
    }

    #[test]
    fn zero_thrust_at_rest_stays_at_rest() {
        let p = ParameterSet {
            thrust_n: 0.0,
            ..Default::default()
        };
        let step = euler_step(&p, 0.0, 0.0);
        assert_eq!(step.accel_mps2, 0.0);
        assert_eq!(step.velocity_mps, 0.0);
        assert_eq!(step.position_m, 0.0);
    }
}
