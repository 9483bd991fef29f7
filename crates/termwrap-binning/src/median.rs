use termwrap_core::models::flags::format_number;
use termwrap_core::models::Bin;

/// Two bins split at `median`: `<m` and `≥m`.
pub fn median_bins(median: f64) -> Vec<Bin> {
    let m = round_auto(median);
    let mut below = Bin::below(m, false);
    below.label = format!("<{}", format_number(m));
    let mut above = Bin::above(m, true);
    above.label = format!("≥{}", format_number(m));
    vec![below, above]
}

/// Integers are kept; anything else is rounded to two decimals.
fn round_auto(x: f64) -> f64 {
    if x == x.trunc() {
        x
    } else {
        (x * 100.0).round() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_split_labels() {
        let bins = median_bins(42.456);
        assert_eq!(bins[0].label, "<42.46");
        assert_eq!(bins[1].label, "≥42.46");
        assert_eq!(bins[0].stop, bins[1].start);
    }
}
