use serde::{Deserialize, Serialize};

use super::flags::{is_false, truthy};

/// A contiguous, labeled numeric interval.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Bin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<f64>,
    #[serde(default, deserialize_with = "truthy")]
    pub startinclusive: bool,
    #[serde(default, deserialize_with = "truthy")]
    pub stopinclusive: bool,
    #[serde(default, deserialize_with = "truthy", skip_serializing_if = "is_false")]
    pub startunbounded: bool,
    #[serde(default, deserialize_with = "truthy", skip_serializing_if = "is_false")]
    pub stopunbounded: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
}

impl Bin {
    /// A bounded bin with explicit inclusivity.
    pub fn bounded(start: f64, stop: f64, startinclusive: bool, stopinclusive: bool) -> Self {
        Self {
            start: Some(start),
            stop: Some(stop),
            startinclusive,
            stopinclusive,
            ..Default::default()
        }
    }

    /// A bin with no lower bound, ending at `stop`.
    pub fn below(stop: f64, stopinclusive: bool) -> Self {
        Self {
            stop: Some(stop),
            stopinclusive,
            startunbounded: true,
            ..Default::default()
        }
    }

    /// A bin with no upper bound, starting at `start`.
    pub fn above(start: f64, startinclusive: bool) -> Self {
        Self {
            start: Some(start),
            startinclusive,
            stopunbounded: true,
            ..Default::default()
        }
    }

    /// Lower boundary; `-inf` when unbounded.
    pub fn lower(&self) -> f64 {
        if self.startunbounded {
            f64::NEG_INFINITY
        } else {
            self.start.unwrap_or(f64::NEG_INFINITY)
        }
    }

    /// Upper boundary; `+inf` when unbounded.
    pub fn upper(&self) -> f64 {
        if self.stopunbounded {
            f64::INFINITY
        } else {
            self.stop.unwrap_or(f64::INFINITY)
        }
    }

    /// Whether `value` falls inside this bin.
    pub fn contains(&self, value: f64) -> bool {
        let above_start = self.startunbounded
            || match self.start {
                Some(start) if self.startinclusive => value >= start,
                Some(start) => value > start,
                None => true,
            };
        let below_stop = self.stopunbounded
            || match self.stop {
                Some(stop) if self.stopinclusive => value <= stop,
                Some(stop) => value < stop,
                None => true,
            };
        above_start && below_stop
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn contains_respects_inclusivity() {
        let bin = Bin::bounded(5.0, 10.0, true, false);
        assert!(bin.contains(5.0));
        assert!(bin.contains(9.99));
        assert!(!bin.contains(10.0));

        let open = Bin::below(5.0, false);
        assert!(open.contains(-1e9));
        assert!(!open.contains(5.0));
    }

    #[test]
    fn numeric_flags_deserialize() {
        let bin: Bin = serde_json::from_value(json!({
            "startunbounded": 1,
            "stop": 3,
            "stopinclusive": 0
        }))
        .unwrap();
        assert!(bin.startunbounded);
        assert!(!bin.stopinclusive);
        assert_eq!(bin.stop, Some(3.0));
    }
}
