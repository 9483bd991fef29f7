//! Validated regular-bin generation spec.
//!
//! Construction from untrusted JSON lives in `termwrap-binning`, which owns
//! the rejection reasons; these types only describe an accepted spec.

use serde::{Deserialize, Serialize};

use super::flags::{is_false, truthy};

/// Anchor of the first generated bin.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FirstBin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_percentile: Option<f64>,
    #[serde(default, deserialize_with = "truthy", skip_serializing_if = "is_false")]
    pub startunbounded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_percentile: Option<f64>,
    #[serde(default, deserialize_with = "truthy", skip_serializing_if = "is_false")]
    pub stopinclusive: bool,
}

/// Optional explicit boundary of the last generated bin.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LastBin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_percentile: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_percentile: Option<f64>,
    #[serde(default, deserialize_with = "truthy", skip_serializing_if = "is_false")]
    pub stopunbounded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stopinclusive: Option<bool>,
}

impl LastBin {
    pub fn is_empty(&self) -> bool {
        self.start.is_none()
            && self.start_percentile.is_none()
            && self.stop.is_none()
            && self.stop_percentile.is_none()
            && !self.stopunbounded
    }
}

/// The compact description a fixed-width bin partition is generated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinSpec {
    pub bin_size: f64,
    pub first_bin: FirstBin,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_bin: Option<LastBin>,
    #[serde(default, deserialize_with = "truthy", skip_serializing_if = "is_false")]
    pub startinclusive: bool,
    #[serde(default, deserialize_with = "truthy", skip_serializing_if = "is_false")]
    pub stopinclusive: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounding: Option<String>,
}

impl BinSpec {
    /// Bins are closed on the left unless the spec asks for `(a, b]`.
    pub fn left_closed(&self) -> bool {
        !(self.first_bin.stopinclusive || (self.stopinclusive && !self.startinclusive))
    }
}
