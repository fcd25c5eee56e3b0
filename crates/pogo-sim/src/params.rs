//! Physical parameters of the thrust-driven oscillator.

use pogo_core::ensure_finite;
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// The six physical constants plus two geometry constants.
///
/// Replaced wholesale by [`crate::SimulationController::set_parameters`];
/// every replacement resets the oscillator state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    /// Vehicle mass (kg). Strictly positive: divided by every tick.
    pub mass_kg: f64,
    /// Structural spring constant (N/m).
    pub spring_n_per_m: f64,
    /// Damping coefficient (Ns/m).
    pub damping_ns_per_m: f64,
    /// Constant thrust force (N). Sign is free.
    pub thrust_n: f64,
    /// Fixed integration time step (s).
    pub dt_s: f64,
    /// Nominal run length (s). Enforced by the external driver, not here.
    pub t_max_s: f64,
    /// Body width (m). Display geometry only, never enters the dynamics.
    pub rocket_width_m: f64,
    /// Body height (m). Sets the travel envelope together with the display.
    pub rocket_height_m: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            mass_kg: 1000.0,
            spring_n_per_m: 5000.0,
            damping_ns_per_m: 200.0,
            thrust_n: 20_000.0,
            dt_s: 0.01,
            t_max_s: 10.0,
            rocket_width_m: 1.0,
            rocket_height_m: 4.0,
        }
    }
}

/// Recognized keys of the `key=value` wire format, in wire spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKey {
    Mass,
    SpringConstant,
    Damping,
    Thrust,
    TimeStep,
    MaxTime,
    RocketWidth,
    RocketHeight,
}

impl ParamKey {
    /// Map a wire key to a field. Unknown keys return `None` and are
    /// silently dropped by the parser.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "m" => Some(Self::Mass),
            "k" => Some(Self::SpringConstant),
            "c" => Some(Self::Damping),
            "F" => Some(Self::Thrust),
            "dt" => Some(Self::TimeStep),
            "t_max" => Some(Self::MaxTime),
            "rocket_width" => Some(Self::RocketWidth),
            "rocket_height" => Some(Self::RocketHeight),
            _ => None,
        }
    }

    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Mass => "m",
            Self::SpringConstant => "k",
            Self::Damping => "c",
            Self::Thrust => "F",
            Self::TimeStep => "dt",
            Self::MaxTime => "t_max",
            Self::RocketWidth => "rocket_width",
            Self::RocketHeight => "rocket_height",
        }
    }
}

impl ParameterSet {
    pub fn set(&mut self, key: ParamKey, value: f64) {
        match key {
            ParamKey::Mass => self.mass_kg = value,
            ParamKey::SpringConstant => self.spring_n_per_m = value,
            ParamKey::Damping => self.damping_ns_per_m = value,
            ParamKey::Thrust => self.thrust_n = value,
            ParamKey::TimeStep => self.dt_s = value,
            ParamKey::MaxTime => self.t_max_s = value,
            ParamKey::RocketWidth => self.rocket_width_m = value,
            ParamKey::RocketHeight => self.rocket_height_m = value,
        }
    }

    pub fn get(&self, key: ParamKey) -> f64 {
        match key {
            ParamKey::Mass => self.mass_kg,
            ParamKey::SpringConstant => self.spring_n_per_m,
            ParamKey::Damping => self.damping_ns_per_m,
            ParamKey::Thrust => self.thrust_n,
            ParamKey::TimeStep => self.dt_s,
            ParamKey::MaxTime => self.t_max_s,
            ParamKey::RocketWidth => self.rocket_width_m,
            ParamKey::RocketHeight => self.rocket_height_m,
        }
    }

    /// Reject configurations the integrator cannot run with.
    ///
    /// Must pass before any tick is issued; `mass_kg <= 0` in particular is
    /// never silently divided through.
    pub fn validate(&self) -> SimResult<()> {
        ensure_finite(self.mass_kg, "mass")?;
        ensure_finite(self.spring_n_per_m, "spring constant")?;
        ensure_finite(self.damping_ns_per_m, "damping coefficient")?;
        ensure_finite(self.thrust_n, "thrust")?;
        ensure_finite(self.dt_s, "time step")?;
        ensure_finite(self.t_max_s, "max time")?;
        ensure_finite(self.rocket_width_m, "rocket width")?;
        ensure_finite(self.rocket_height_m, "rocket height")?;

        if self.mass_kg <= 0.0 {
            return Err(SimError::InvalidConfiguration {
                what: "mass must be positive",
            });
        }
        if self.spring_n_per_m < 0.0 {
            return Err(SimError::InvalidConfiguration {
                what: "spring constant must be non-negative",
            });
        }
        if self.damping_ns_per_m < 0.0 {
            return Err(SimError::InvalidConfiguration {
                what: "damping coefficient must be non-negative",
            });
        }
        if self.dt_s <= 0.0 {
            return Err(SimError::InvalidConfiguration {
                what: "time step must be positive",
            });
        }
        if self.t_max_s <= 0.0 {
            return Err(SimError::InvalidConfiguration {
                what: "max time must be positive",
            });
        }
        if self.rocket_width_m <= 0.0 {
            return Err(SimError::InvalidConfiguration {
                what: "rocket width must be positive",
            });
        }
        if self.rocket_height_m <= 0.0 {
            return Err(SimError::InvalidConfiguration {
                what: "rocket height must be positive",
            });
        }
        Ok(())
    }

    /// Number of ticks a driver honoring `t_max` issues: one per frame time
    /// `n * dt < t_max`. Ceiling of the ratio, so a `dt` that does not
    /// exactly divide `t_max` in f64 still yields the last in-bound tick.
    pub fn steps_to_t_max(&self) -> usize {
        (self.t_max_s / self.dt_s).ceil() as usize
    }

    /// Render the physical constants as the wire format, e.g. to seed the
    /// parameter text box.
    pub fn wire_string(&self) -> String {
        format!(
            "m={}, k={}, c={}, F={}, dt={}, t_max={}",
            self.mass_kg,
            self.spring_n_per_m,
            self.damping_ns_per_m,
            self.thrust_n,
            self.dt_s,
            self.t_max_s
        )
    }

    /// All eight recognized keys, geometry included, for run summaries.
    pub fn wire_string_full(&self) -> String {
        format!(
            "{}, rocket_width={}, rocket_height={}",
            self.wire_string(),
            self.rocket_width_m,
            self.rocket_height_m
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(ParameterSet::default().validate().is_ok());
    }

    #[test]
    fn zero_mass_rejected() {
        let p = ParameterSet {
            mass_kg: 0.0,
            ..Default::default()
        };
        let err = p.validate().unwrap_err();
        assert!(matches!(err, SimError::InvalidConfiguration { .. }));
    }

    #[test]
    fn negative_dt_rejected() {
        let p = ParameterSet {
            dt_s: -0.01,
            ..Default::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn nan_field_rejected() {
        let p = ParameterSet {
            thrust_n: f64::NAN,
            ..Default::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn zero_spring_and_damping_allowed() {
        let p = ParameterSet {
            spring_n_per_m: 0.0,
            damping_ns_per_m: 0.0,
            ..Default::default()
        };
        assert!(p.validate().is_ok());
    }

    #[test]
    fn key_roundtrip() {
        for key in [
            ParamKey::Mass,
            ParamKey::SpringConstant,
            ParamKey::Damping,
            ParamKey::Thrust,
            ParamKey::TimeStep,
            ParamKey::MaxTime,
            ParamKey::RocketWidth,
            ParamKey::RocketHeight,
        ] {
            assert_eq!(ParamKey::parse(key.wire_name()), Some(key));
        }
        assert_eq!(ParamKey::parse("g"), None);
    }

    #[test]
    fn steps_to_t_max_default() {
        // 10 s at 0.01 s per tick
        assert_eq!(ParameterSet::default().steps_to_t_max(), 1000);
    }

    #[test]
    fn full_wire_string_roundtrips_every_field() {
        let p = ParameterSet {
            rocket_width_m: 1.5,
            rocket_height_m: 3.0,
            ..Default::default()
        };
        let rendered = p.wire_string_full();
        assert!(rendered.contains("rocket_width=1.5"));
        assert!(rendered.contains("rocket_height=3"));

        // Feeding the rendered line back reproduces the parameter set.
        let mut reparsed = ParameterSet::default();
        for a in crate::parse::parse_assignments(&rendered).unwrap() {
            reparsed.set(a.key, a.value);
        }
        assert_eq!(reparsed, p);
    }

    #[test]
    fn steps_to_t_max_counts_every_tick_below_t_max() {
        // 0.25/0.1 and 0.3/0.1 both land below their true ratio in f64;
        // frames t=0, 0.1, 0.2 all satisfy t < t_max, so three ticks.
        let p = ParameterSet {
            t_max_s: 0.25,
            dt_s: 0.1,
            ..Default::default()
        };
        assert_eq!(p.steps_to_t_max(), 3);

        let p = ParameterSet {
            t_max_s: 0.3,
            dt_s: 0.1,
            ..Default::default()
        };
        assert_eq!(p.steps_to_t_max(), 3);
    }
}
