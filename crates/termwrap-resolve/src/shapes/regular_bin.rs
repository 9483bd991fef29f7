use serde_json::Map;
use termwrap_binning::parse_spec_map;
use termwrap_core::errors::{ResolveError, ResolveResult};
use termwrap_core::models::{Mode, Query, RawQuery, RegularBinQuery, Shape, Term};

use super::{is_discrete_mode, ShapeInput, ShapeResolver};

/// Query keys that make up a bin spec.
const SPEC_KEYS: [&str; 6] = [
    "bin_size",
    "first_bin",
    "last_bin",
    "startinclusive",
    "stopinclusive",
    "rounding",
];

/// Fixed-width bins described by a compact spec.
pub struct RegularBinShape;

impl ShapeResolver for RegularBinShape {
    const SHAPE: Shape = Shape::RegularBin;

    fn infers(_term: &Term, q: &RawQuery) -> bool {
        is_discrete_mode(q.mode) && q.has("bin_size")
    }

    fn validate(input: ShapeInput<'_>) -> ResolveResult<Query> {
        if input.common.mode == Mode::Binary {
            return Err(ResolveError::invariant(
                "binary mode requires exactly two custom bins, not regular bins",
            ));
        }
        let mut spec = Map::new();
        for key in SPEC_KEYS {
            if let Some(value) = input.q.fields.remove(key) {
                spec.insert(key.to_string(), value);
            }
        }
        let spec = parse_spec_map(&spec)?;
        Ok(Query::RegularBin(RegularBinQuery {
            common: input.common,
            spec,
            preferred_bins: input.q.take("preferredBins")?,
        }))
    }
}
