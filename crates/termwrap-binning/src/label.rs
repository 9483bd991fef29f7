//! Human-readable bin labels.

use termwrap_core::config::termwrap_config::parse_rounding;
use termwrap_core::models::flags::format_number;
use termwrap_core::models::{Bin, BinSpec};

/// What labeling needs to know about the partition a bin came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelConfig {
    pub bin_size: Option<f64>,
    /// `.Nf` directive; shortest representation when absent.
    pub rounding: Option<String>,
}

impl LabelConfig {
    pub fn with_rounding(mut self, rounding: Option<String>) -> Self {
        self.rounding = rounding;
        self
    }

    fn format(&self, x: f64) -> String {
        match self.rounding.as_deref().and_then(parse_rounding) {
            Some(decimals) => format!("{x:.decimals$}"),
            None => format_number(x),
        }
    }
}

impl From<&BinSpec> for LabelConfig {
    fn from(spec: &BinSpec) -> Self {
        Self {
            bin_size: Some(spec.bin_size),
            rounding: spec.rounding.clone(),
        }
    }
}

/// Label for one bin. A bin that already carries a label keeps it.
pub fn get_bin_label(bin: &Bin, config: &LabelConfig) -> String {
    if !bin.label.is_empty() {
        return bin.label.clone();
    }

    if bin.startunbounded || bin.start.is_none() {
        let oper = if bin.stopinclusive { "≤" } else { "<" };
        return match bin.stop {
            Some(stop) => format!("{oper}{}", config.format(stop)),
            None => "all values".to_string(),
        };
    }
    let start = bin.start.unwrap_or_default();

    let stop = match bin.stop {
        Some(stop) if !bin.stopunbounded => stop,
        _ => {
            let oper = if bin.startinclusive { "≥" } else { ">" };
            return format!("{oper}{}", config.format(start));
        }
    };

    if start == stop {
        return config.format(start);
    }

    let integral =
        is_integer(start) && is_integer(stop) && config.bin_size.map_or(true, is_integer);
    if integral {
        let lo = if bin.startinclusive { start } else { start + 1.0 };
        let hi = if bin.stopinclusive { stop } else { stop - 1.0 };
        if lo == hi {
            return config.format(lo);
        }
        if lo < hi {
            return format!("{} to {}", config.format(lo), config.format(hi));
        }
    }

    let lo = config.format(start);
    let hi = config.format(stop);
    match (bin.startinclusive, bin.stopinclusive) {
        (true, true) => format!("{lo} to {hi}"),
        (true, false) => format!("{lo} to <{hi}"),
        (false, true) => format!(">{lo} to {hi}"),
        (false, false) => format!(">{lo} to <{hi}"),
    }
}

fn is_integer(x: f64) -> bool {
    x.is_finite() && x == x.trunc()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preexisting_label_wins() {
        let mut bin = Bin::bounded(1.0, 5.0, true, false);
        bin.label = "young".into();
        assert_eq!(get_bin_label(&bin, &LabelConfig::default()), "young");
    }

    #[test]
    fn rounding_controls_decimals() {
        let bin = Bin::above(2.5, true);
        let config = LabelConfig::default().with_rounding(Some(".2f".into()));
        assert_eq!(get_bin_label(&bin, &config), "≥2.50");
    }
}
