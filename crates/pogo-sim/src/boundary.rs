//! Reflective boundary handling at the travel envelope walls.

use pogo_core::Real;
use tracing::warn;

/// Height of the display envelope the body travels in (m).
pub const DISPLAY_HEIGHT_M: Real = 10.0;

/// Which wall, if any, a tick bounced off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bounce {
    None,
    Floor,
    Ceiling,
}

/// Result of boundary handling for one tick.
#[derive(Clone, Copy, Debug)]
pub struct ReflectOutcome {
    pub position_m: Real,
    pub velocity_mps: Real,
    pub bounce: Bounce,
    /// Single-bounce reflection left the position outside the envelope.
    /// Diagnostic only; downstream ticks keep reflecting it back over time.
    pub out_of_range: bool,
}

/// Mirror a proposed `(position, velocity)` at the envelope walls.
///
/// Elastic, at most one bounce per tick. An overshoot larger than one
/// envelope width can therefore land outside
/// `[0, DISPLAY_HEIGHT_M - rocket_height_m]`; that case is reported, not
/// corrected. The horizontal axis is unconstrained.
pub fn reflect(position_m: Real, velocity_mps: Real, rocket_height_m: Real) -> ReflectOutcome {
    let ceiling = DISPLAY_HEIGHT_M - rocket_height_m;
    let (position_m, velocity_mps, bounce) = if position_m < 0.0 {
        (-position_m, -velocity_mps, Bounce::Floor)
    } else if position_m + rocket_height_m > DISPLAY_HEIGHT_M {
        (
            DISPLAY_HEIGHT_M - rocket_height_m - (position_m + rocket_height_m - DISPLAY_HEIGHT_M),
            -velocity_mps,
            Bounce::Ceiling,
        )
    } else {
        (position_m, velocity_mps, Bounce::None)
    };

    let out_of_range = position_m < 0.0 || position_m > ceiling;
    if out_of_range {
        warn!(
            position_m,
            velocity_mps, "single-bounce reflection left position outside travel envelope"
        );
    }

    ReflectOutcome {
        position_m,
        velocity_mps,
        bounce,
        out_of_range,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_reflection() {
        let out = reflect(-0.5, -2.0, 4.0);
        assert_eq!(out.position_m, 0.5);
        assert_eq!(out.velocity_mps, 2.0);
        assert_eq!(out.bounce, Bounce::Floor);
        assert!(!out.out_of_range);
    }

    #[test]
    fn ceiling_reflection() {
        // x + h = 10.5 > 10, so x = 10 - 4 - 0.5 = 5.5
        let out = reflect(6.5, 3.0, 4.0);
        assert_eq!(out.position_m, 5.5);
        assert_eq!(out.velocity_mps, -3.0);
        assert_eq!(out.bounce, Bounce::Ceiling);
        assert!(!out.out_of_range);
    }

    #[test]
    fn in_range_untouched() {
        let out = reflect(3.0, 1.5, 4.0);
        assert_eq!(out.position_m, 3.0);
        assert_eq!(out.velocity_mps, 1.5);
        assert_eq!(out.bounce, Bounce::None);
        assert!(!out.out_of_range);
    }

    #[test]
    fn touching_walls_is_in_range() {
        assert_eq!(reflect(0.0, -1.0, 4.0).bounce, Bounce::None);
        assert_eq!(reflect(6.0, 1.0, 4.0).bounce, Bounce::None);
    }

    #[test]
    fn large_floor_overshoot_flagged() {
        // -x = 7 > ceiling of 6: one bounce is not enough
        let out = reflect(-7.0, -5.0, 4.0);
        assert_eq!(out.position_m, 7.0);
        assert_eq!(out.velocity_mps, 5.0);
        assert!(out.out_of_range);
    }

    #[test]
    fn large_ceiling_overshoot_flagged() {
        // x = 13, x+h = 17: reflected to 10-4-7 = -1
        let out = reflect(13.0, 5.0, 4.0);
        assert_eq!(out.position_m, -1.0);
        assert!(out.out_of_range);
    }
}
