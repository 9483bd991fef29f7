// Single source of truth for all default values.

// --- Binning ---
pub const DEFAULT_MAX_BINS: usize = 1_000;

// --- Resolution ---
pub const DEFAULT_MEDIAN_PERCENTILE: f64 = 50.0;
pub const DEFAULT_SPLINE_KNOT_PERCENTILES: [f64; 4] = [5.0, 35.0, 65.0, 95.0];
