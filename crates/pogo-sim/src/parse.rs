//! Parsing of the comma-separated `key=value` parameter wire format.

use crate::error::{SimError, SimResult};
use crate::params::ParamKey;

/// A single recognized assignment from the wire format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assignment {
    pub key: ParamKey,
    pub value: f64,
}

/// Parse `"m=1000, k=5000, ..."` into recognized assignments.
///
/// Unrecognized keys are dropped silently. A token that does not split into
/// `key=value` or whose value is not a real number fails the whole call;
/// nothing is applied here, the caller commits the returned assignments as
/// one unit. Empty tokens (trailing commas) are skipped.
pub fn parse_assignments(input: &str) -> SimResult<Vec<Assignment>> {
    let mut out = Vec::new();
    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let Some((key, value)) = token.split_once('=') else {
            return Err(SimError::MalformedToken {
                token: token.to_string(),
            });
        };
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            return Err(SimError::MalformedToken {
                token: token.to_string(),
            });
        }
        let parsed: f64 = value.parse().map_err(|_| SimError::InvalidNumber {
            key: key.to_string(),
            value: value.to_string(),
        })?;
        if let Some(key) = ParamKey::parse(key) {
            out.push(Assignment { key, value: parsed });
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_default_line_parses() {
        let parsed =
            parse_assignments("m=1000, k=5000, c=200, F=20000, dt=0.01, t_max=10").unwrap();
        assert_eq!(parsed.len(), 6);
        assert_eq!(parsed[0].key, ParamKey::Mass);
        assert_eq!(parsed[0].value, 1000.0);
        assert_eq!(parsed[5].key, ParamKey::MaxTime);
        assert_eq!(parsed[5].value, 10.0);
    }

    #[test]
    fn whitespace_and_trailing_comma_tolerated() {
        let parsed = parse_assignments("  m = 2000 ,, k=1 , ").unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].value, 2000.0);
    }

    #[test]
    fn unrecognized_key_dropped() {
        let parsed = parse_assignments("g=9.8, m=1500").unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].key, ParamKey::Mass);
    }

    #[test]
    fn missing_equals_is_error() {
        let err = parse_assignments("m=1000, k5000").unwrap_err();
        assert!(matches!(err, SimError::MalformedToken { .. }));
    }

    #[test]
    fn non_numeric_value_is_error() {
        let err = parse_assignments("m=abc").unwrap_err();
        match err {
            SimError::InvalidNumber { key, value } => {
                assert_eq!(key, "m");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_value_is_error() {
        assert!(parse_assignments("m=").is_err());
        assert!(parse_assignments("=5").is_err());
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(parse_assignments("").unwrap().is_empty());
        assert!(parse_assignments("  , ,").unwrap().is_empty());
    }

    #[test]
    fn error_aborts_whole_call() {
        // Valid assignments before the bad token must not leak out.
        let err = parse_assignments("m=2000, dt=oops, k=1").unwrap_err();
        assert!(err.is_parse_error());
    }
}
