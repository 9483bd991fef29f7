use termwrap_core::errors::{ResolveError, ResolveResult};
use termwrap_core::models::{ContinuousQuery, Mode, Query, RawQuery, Shape, Term};

use super::{ShapeInput, ShapeResolver};
use crate::base::take_flag;

/// Raw values, optionally rescaled or standardized.
pub struct ContinuousShape;

impl ShapeResolver for ContinuousShape {
    const SHAPE: Shape = Shape::Continuous;

    fn infers(_term: &Term, q: &RawQuery) -> bool {
        q.mode == Some(Mode::Continuous)
    }

    fn validate(input: ShapeInput<'_>) -> ResolveResult<Query> {
        let scale: Option<f64> = input.q.take("scale")?;
        if let Some(scale) = scale {
            if scale.is_nan() || scale <= 0.0 {
                return Err(ResolveError::schema("q.scale must be greater than 0"));
            }
        }
        Ok(Query::Continuous(ContinuousQuery {
            common: input.common,
            scale,
            convert2_z_score: take_flag(input.q, "convert2ZScore")?,
        }))
    }
}
