use termwrap_binning::{label_bins, validate_bin_list, LabelConfig};
use termwrap_core::constants::BINARY_GROUP_COUNT;
use termwrap_core::errors::{ResolveError, ResolveResult};
use termwrap_core::models::{Bin, CustomBinQuery, Mode, Query, RawQuery, Shape, Term};

use super::{is_discrete_mode, ShapeInput, ShapeResolver};

/// An explicit, caller-supplied bin list.
pub struct CustomBinShape;

impl ShapeResolver for CustomBinShape {
    const SHAPE: Shape = Shape::CustomBin;

    fn infers(_term: &Term, q: &RawQuery) -> bool {
        is_discrete_mode(q.mode) && q.has("lst")
    }

    fn validate(input: ShapeInput<'_>) -> ResolveResult<Query> {
        let mut lst: Vec<Bin> = input
            .q
            .take("lst")?
            .ok_or_else(|| ResolveError::schema("missing q.lst for custom-bin"))?;
        validate_bin_list(&lst)?;
        if input.common.mode == Mode::Binary && lst.len() != BINARY_GROUP_COUNT {
            return Err(ResolveError::invariant(
                "binary mode requires exactly two custom bins",
            ));
        }
        let rounding = input
            .term
            .bins
            .as_ref()
            .and_then(|bins| bins.rounding.clone())
            .or_else(|| input.binning.default_rounding.clone());
        label_bins(&mut lst, &LabelConfig::default().with_rounding(rounding));
        Ok(Query::CustomBin(CustomBinQuery {
            common: input.common,
            lst,
            preferred_bins: input.q.take("preferredBins")?,
        }))
    }
}
