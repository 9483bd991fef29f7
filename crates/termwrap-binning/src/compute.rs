//! Fixed-width bin generation.

use serde_json::Value;
use termwrap_core::config::BinningConfig;
use termwrap_core::errors::BinError;
use termwrap_core::models::flags::format_number;
use termwrap_core::models::{Bin, BinSpec, Summary};
use termwrap_core::traits::PercentileOracle;

use crate::label::{get_bin_label, LabelConfig};
use crate::percentiles::target_percentiles;
use crate::spec::parse_spec;

/// Validate `spec` and generate its bins with default limits.
pub fn compute_bins(spec: &Value, oracle: &impl PercentileOracle) -> Result<Vec<Bin>, BinError> {
    compute_bins_with(spec, oracle, &BinningConfig::default())
}

/// Validate `spec` and generate its bins.
pub fn compute_bins_with(
    spec: &Value,
    oracle: &impl PercentileOracle,
    config: &BinningConfig,
) -> Result<Vec<Bin>, BinError> {
    let spec = parse_spec(spec)?;
    generate(&spec, oracle, config)
}

/// Generate the labeled partition of an already validated spec.
///
/// The oracle is consulted exactly once, for every percentile the spec
/// needs. Explicit bounds take precedence over percentile-derived ones.
pub fn generate(
    spec: &BinSpec,
    oracle: &impl PercentileOracle,
    config: &BinningConfig,
) -> Result<Vec<Bin>, BinError> {
    let percentiles = target_percentiles(spec);
    let summary = oracle.summarize(&percentiles)?;
    let resolve = |explicit: Option<f64>, percentile: Option<f64>| -> Result<Option<f64>, BinError> {
        match (explicit, percentile) {
            (Some(v), _) => Ok(Some(v)),
            (None, Some(p)) => lookup(&summary, p).map(Some),
            (None, None) => Ok(None),
        }
    };

    let size = spec.bin_size;
    let left_closed = spec.left_closed();
    let max_bins = config.effective_max_bins();

    let fb = &spec.first_bin;
    let first_stop = resolve(fb.stop, fb.stop_percentile)?;
    let first = if fb.startunbounded {
        // parse_spec guarantees a stop for an unbounded first bin
        let stop = first_stop.ok_or_else(|| {
            BinError::schema("first_bin.stop must be numeric when first_bin.startunbounded is set")
        })?;
        Bin::below(stop, !left_closed)
    } else {
        let start = resolve(fb.start, fb.start_percentile)?.ok_or_else(|| {
            BinError::schema("first_bin must have start, start_percentile, or startunbounded")
        })?;
        let stop = first_stop
            .unwrap_or_else(|| round_to(start + size, decimals(size).max(decimals(start))));
        Bin::bounded(start, stop, left_closed || start <= summary.min, !left_closed)
    };
    let precision = decimals(size)
        .max(first.start.map_or(0, decimals))
        .max(first.stop.map_or(0, decimals));

    let (last_start, last_stop, last_unbounded, last_inclusive) = match &spec.last_bin {
        Some(lb) => (
            resolve(lb.start, lb.start_percentile)?,
            if lb.stopunbounded {
                None
            } else {
                resolve(lb.stop, lb.stop_percentile)?
            },
            lb.stopunbounded,
            lb.stopinclusive,
        ),
        None => (None, None, false, None),
    };
    // a bounded last bin starting at or past the max holds no values
    let (last_start, last_stop) = match last_start {
        Some(ls) if !last_unbounded && ls >= summary.max => (None, None),
        other => (other, last_stop),
    };
    let limit = last_start.or(last_stop).unwrap_or(summary.max);

    let mut bins: Vec<Bin> = Vec::new();
    let mut current = first;
    loop {
        if bins.len() >= max_bins {
            return Err(BinError::TooManyBins { max_bins });
        }
        let cur_stop = current.upper();

        if let Some(ls) = last_start {
            if cur_stop >= ls {
                if cur_stop > ls && current.lower() < ls {
                    current.stop = Some(ls);
                }
                let boundary = current.upper();
                bins.push(current);
                let last = if last_unbounded {
                    Bin::above(boundary, left_closed)
                } else {
                    let stop = last_stop.unwrap_or(summary.max).max(boundary);
                    let inclusive = last_inclusive.unwrap_or(!left_closed || stop >= summary.max);
                    Bin::bounded(boundary, stop, left_closed, inclusive)
                };
                bins.push(last);
                break;
            }
        } else if cur_stop >= limit {
            if last_unbounded {
                if current.startunbounded {
                    let boundary = cur_stop;
                    let open_left = current.stopinclusive;
                    bins.push(current);
                    bins.push(Bin::above(boundary, !open_left));
                } else {
                    current.stop = None;
                    current.stopunbounded = true;
                    current.stopinclusive = false;
                    bins.push(current);
                }
            } else if let Some(ls) = last_stop {
                if current.lower() < ls {
                    current.stop = Some(ls);
                }
                current.stopinclusive = last_inclusive.unwrap_or(!left_closed || ls >= summary.max);
                bins.push(current);
            } else {
                if !current.startunbounded && current.lower() < summary.max {
                    current.stop = Some(summary.max);
                    current.stopinclusive = true;
                } else if current.upper() == summary.max {
                    current.stopinclusive = true;
                }
                bins.push(current);
            }
            break;
        }

        bins.push(current);
        let start = round_to(cur_stop, precision);
        current = Bin::bounded(start, round_to(start + size, precision), left_closed, !left_closed);
    }

    let label_config = LabelConfig::from(spec)
        .with_rounding(spec.rounding.clone().or_else(|| config.default_rounding.clone()));
    for bin in &mut bins {
        bin.label = get_bin_label(bin, &label_config);
    }
    tracing::debug!(
        bin_size = spec.bin_size,
        count = bins.len(),
        "generated bins"
    );
    Ok(bins)
}

fn lookup(summary: &Summary, percentile: f64) -> Result<f64, BinError> {
    summary
        .percentile(percentile)
        .ok_or_else(|| BinError::MissingPercentile {
            percentile: format_number(percentile),
        })
}

/// Decimal places in the shortest representation of `x`, capped at 10.
fn decimals(x: f64) -> usize {
    let repr = format_number(x);
    repr.split_once('.').map_or(0, |(_, frac)| frac.len().min(10))
}

fn round_to(x: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (x * factor).round() / factor
}
