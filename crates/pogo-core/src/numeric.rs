use crate::{CoreError, CoreResult};

/// Floating point type used throughout the system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> CoreResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_finite_detects_infinities() {
        assert!(ensure_finite(Real::INFINITY, "test").is_err());
        assert!(ensure_finite(Real::NEG_INFINITY, "test").is_err());
    }

    proptest! {
        #[test]
        fn ensure_finite_accepts_finite(v in -1e12f64..1e12) {
            prop_assert_eq!(ensure_finite(v, "test").unwrap(), v);
        }
    }
}
