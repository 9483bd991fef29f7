//! Bin spec validation. Each rejection carries its own reason string.

use serde_json::{Map, Value};
use termwrap_core::errors::BinError;
use termwrap_core::models::flags::{as_number, is_truthy};
use termwrap_core::models::{BinSpec, FirstBin, LastBin};

/// Validate an untyped bin spec.
pub fn parse_spec(value: &Value) -> Result<BinSpec, BinError> {
    match value {
        Value::Object(map) => parse_spec_map(map),
        _ => Err(BinError::schema("bin schema must be an object")),
    }
}

/// Validate the fields of a bin spec already known to be an object.
pub fn parse_spec_map(map: &Map<String, Value>) -> Result<BinSpec, BinError> {
    let bin_size = match present(map, "bin_size") {
        None => return Err(BinError::schema("missing custom_bin.bin_size")),
        Some(v) => as_number(v).ok_or_else(|| BinError::schema("non-numeric bin_size"))?,
    };
    if bin_size <= 0.0 {
        return Err(BinError::schema("bin_size must be greater than 0"));
    }

    let first_bin = match present(map, "first_bin") {
        None => return Err(BinError::schema("first_bin{} missing")),
        Some(Value::Object(fb)) if fb.is_empty() => {
            return Err(BinError::schema("first_bin is an empty object"))
        }
        Some(Value::Object(fb)) => parse_first_bin(fb)?,
        Some(_) => return Err(BinError::schema("first_bin{} is not an object")),
    };

    let last_bin = match present(map, "last_bin") {
        None => None,
        Some(Value::Object(lb)) => Some(parse_last_bin(lb)?).filter(|lb| !lb.is_empty()),
        Some(_) => return Err(BinError::schema("last_bin{} is not an object")),
    };

    let mut startinclusive = flag(map, "startinclusive");
    let stopinclusive = flag(map, "stopinclusive");
    if !startinclusive && !stopinclusive {
        startinclusive = true;
    }

    let rounding = match present(map, "rounding") {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => return Err(BinError::schema("rounding must be a string")),
    };

    Ok(BinSpec {
        bin_size,
        first_bin,
        last_bin,
        startinclusive,
        stopinclusive,
        rounding,
    })
}

fn parse_first_bin(fb: &Map<String, Value>) -> Result<FirstBin, BinError> {
    let first = FirstBin {
        start: number(fb, "start", "first_bin")?,
        start_percentile: percentile(fb, "start_percentile", "first_bin")?,
        startunbounded: flag(fb, "startunbounded"),
        stop: number(fb, "stop", "first_bin")?,
        stop_percentile: percentile(fb, "stop_percentile", "first_bin")?,
        stopinclusive: flag(fb, "stopinclusive"),
    };

    if first.startunbounded {
        if first.stop.is_none() && first.stop_percentile.is_none() {
            return Err(BinError::schema(
                "first_bin.stop must be numeric when first_bin.startunbounded is set",
            ));
        }
    } else if first.start.is_none() && first.start_percentile.is_none() {
        return Err(BinError::schema(
            "first_bin must have start, start_percentile, or startunbounded",
        ));
    }

    if let (Some(start), Some(stop)) = (first.start, first.stop) {
        if !first.startunbounded && stop <= start {
            return Err(BinError::schema("first_bin.stop must be greater than first_bin.start"));
        }
    }
    Ok(first)
}

fn parse_last_bin(lb: &Map<String, Value>) -> Result<LastBin, BinError> {
    let last = LastBin {
        start: number(lb, "start", "last_bin")?,
        start_percentile: percentile(lb, "start_percentile", "last_bin")?,
        stop: number(lb, "stop", "last_bin")?,
        stop_percentile: percentile(lb, "stop_percentile", "last_bin")?,
        stopunbounded: flag(lb, "stopunbounded"),
        stopinclusive: present(lb, "stopinclusive").map(is_truthy),
    };
    if let (Some(start), Some(stop)) = (last.start, last.stop) {
        if stop <= start {
            return Err(BinError::schema("last_bin.stop must be greater than last_bin.start"));
        }
    }
    Ok(last)
}

fn present<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|v| !v.is_null())
}

fn flag(map: &Map<String, Value>, key: &str) -> bool {
    map.get(key).is_some_and(is_truthy)
}

fn number(map: &Map<String, Value>, key: &str, owner: &str) -> Result<Option<f64>, BinError> {
    match present(map, key) {
        None => Ok(None),
        Some(v) => as_number(v)
            .map(Some)
            .ok_or_else(|| BinError::schema(format!("{owner}.{key} must be numeric"))),
    }
}

fn percentile(map: &Map<String, Value>, key: &str, owner: &str) -> Result<Option<f64>, BinError> {
    let value = number(map, key, owner)?;
    if let Some(p) = value {
        if !(p > 0.0 && p <= 100.0) {
            return Err(BinError::schema(format!(
                "{owner}.{key} must be between 0 and 100"
            )));
        }
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_string_bin_size_is_accepted() {
        let spec = parse_spec(&json!({"bin_size": "2.5", "first_bin": {"start": 0}})).unwrap();
        assert_eq!(spec.bin_size, 2.5);
        assert!(spec.startinclusive);
        assert!(spec.left_closed());
    }

    #[test]
    fn empty_last_bin_is_dropped() {
        let spec = parse_spec(&json!({
            "bin_size": 1,
            "first_bin": {"start": 0},
            "last_bin": {}
        }))
        .unwrap();
        assert!(spec.last_bin.is_none());
    }

    #[test]
    fn first_bin_stopinclusive_switches_convention() {
        let spec = parse_spec(&json!({
            "bin_size": 1,
            "first_bin": {"startunbounded": true, "stop": 2, "stopinclusive": 1}
        }))
        .unwrap();
        assert!(!spec.left_closed());
    }

    #[test]
    fn percentile_out_of_range_is_rejected() {
        let err = parse_spec(&json!({"bin_size": 1, "first_bin": {"start_percentile": 120}}))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "first_bin.start_percentile must be between 0 and 100"
        );
    }
}
