//! Checks and labeling for caller-supplied bin lists.

use termwrap_core::errors::BinError;
use termwrap_core::models::Bin;

use crate::label::{get_bin_label, LabelConfig};

/// Bins must be sorted, contiguous, and non-overlapping; only the first
/// may lack a lower bound and only the last an upper bound.
pub fn validate_bin_list(bins: &[Bin]) -> Result<(), BinError> {
    if bins.is_empty() {
        return Err(invalid("bin list is empty"));
    }
    let last = bins.len() - 1;
    for (i, bin) in bins.iter().enumerate() {
        let open_left = bin.startunbounded || bin.start.is_none();
        let open_right = bin.stopunbounded || bin.stop.is_none();
        if open_left && i != 0 {
            return Err(invalid(format!("bin #{i} has no start but is not the first bin")));
        }
        if open_right && i != last {
            return Err(invalid(format!("bin #{i} has no stop but is not the last bin")));
        }
        if !open_left && !open_right {
            let (lo, hi) = (bin.lower(), bin.upper());
            let single_value = lo == hi && bin.startinclusive && bin.stopinclusive;
            if lo > hi || (lo == hi && !single_value) {
                return Err(invalid(format!("bin #{i} has start >= stop")));
            }
        }
    }
    for (i, pair) in bins.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        let boundary = prev.upper();
        if boundary != next.lower() {
            return Err(invalid(format!(
                "bins #{i} and #{} are not contiguous",
                i + 1
            )));
        }
        if prev.stopinclusive && next.startinclusive {
            return Err(invalid(format!("bins #{i} and #{} overlap", i + 1)));
        }
        if !prev.stopinclusive && !next.startinclusive {
            return Err(invalid(format!(
                "bins #{i} and #{} both exclude their shared boundary",
                i + 1
            )));
        }
    }
    Ok(())
}

/// Fill in missing labels.
pub fn label_bins(bins: &mut [Bin], config: &LabelConfig) {
    for bin in bins.iter_mut() {
        if bin.label.is_empty() {
            bin.label = get_bin_label(bin, config);
        }
    }
}

fn invalid(reason: impl Into<String>) -> BinError {
    BinError::InvalidBinList {
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contiguous_list_passes() {
        let bins = vec![
            Bin::below(10.0, false),
            Bin::bounded(10.0, 20.0, true, false),
            Bin::above(20.0, true),
        ];
        assert!(validate_bin_list(&bins).is_ok());
    }

    #[test]
    fn gap_is_rejected() {
        let bins = vec![Bin::below(10.0, false), Bin::above(12.0, true)];
        let err = validate_bin_list(&bins).unwrap_err();
        assert!(err.to_string().contains("not contiguous"));
    }

    #[test]
    fn overlap_at_boundary_is_rejected() {
        let bins = vec![Bin::below(10.0, true), Bin::above(10.0, true)];
        assert!(validate_bin_list(&bins).unwrap_err().to_string().contains("overlap"));
    }

    #[test]
    fn unbounded_bin_in_the_middle_is_rejected() {
        let bins = vec![
            Bin::bounded(0.0, 5.0, true, false),
            Bin::below(10.0, false),
        ];
        assert!(validate_bin_list(&bins).is_err());
    }

    #[test]
    fn labels_are_filled() {
        let mut bins = vec![Bin::below(10.0, false), Bin::above(10.0, true)];
        label_bins(&mut bins, &LabelConfig::default());
        assert_eq!(bins[0].label, "<10");
        assert_eq!(bins[1].label, "≥10");
    }
}
