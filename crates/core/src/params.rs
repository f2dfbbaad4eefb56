//! Helpers for extracting typed parameters from a `serde_json::Value` object.
//!
//! If a key is missing or has the wrong type, the default is returned.
//! These never fail, so configuration coming from a scene file or the host
//! page always yields a usable value.

use serde_json::Value;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`, returning `default` if missing or wrong type.
///
/// Only succeeds if the JSON value is a non-negative integer.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .map(|v| v as usize)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn param_f64_extracts_existing_float() {
        let params = json!({"opacity": 0.45});
        assert!((param_f64(&params, "opacity", 0.3) - 0.45).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_extracts_integer_as_float() {
        let params = json!({"opacity": 1});
        assert!((param_f64(&params, "opacity", 0.3) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_defaults_when_missing_or_wrong_type() {
        assert!((param_f64(&json!({}), "opacity", 0.3) - 0.3).abs() < f64::EPSILON);
        assert!((param_f64(&json!({"opacity": "high"}), "opacity", 0.3) - 0.3).abs() < f64::EPSILON);
        assert!((param_f64(&json!(null), "opacity", 0.3) - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn param_usize_extracts_existing_integer() {
        let params = json!({"point_count": 24});
        assert_eq!(param_usize(&params, "point_count", 12), 24);
    }

    #[test]
    fn param_usize_defaults_for_float_or_negative() {
        assert_eq!(param_usize(&json!({"point_count": 2.5}), "point_count", 12), 12);
        assert_eq!(param_usize(&json!({"point_count": -1}), "point_count", 12), 12);
    }

    #[test]
    fn param_usize_defaults_when_missing() {
        assert_eq!(param_usize(&json!({}), "point_count", 12), 12);
    }
}
