use termwrap_core::errors::{ResolveError, ResolveResult};
use termwrap_core::models::{Knot, Mode, Query, RawQuery, Shape, SplineQuery, Term};

use super::{ShapeInput, ShapeResolver};

/// Cubic-spline regression input placed at `q.knots`.
pub struct SplineShape;

impl ShapeResolver for SplineShape {
    const SHAPE: Shape = Shape::Spline;

    fn infers(_term: &Term, q: &RawQuery) -> bool {
        q.mode == Some(Mode::Spline)
    }

    fn validate(input: ShapeInput<'_>) -> ResolveResult<Query> {
        let knots: Vec<Knot> = input.q.take("knots")?.unwrap_or_default();
        if knots.is_empty() {
            return Err(ResolveError::schema("spline requires at least one knot"));
        }
        if knots.windows(2).any(|w| w[0].value >= w[1].value) {
            return Err(ResolveError::invariant(
                "spline knots must be strictly increasing",
            ));
        }
        Ok(Query::Spline(SplineQuery {
            common: input.common,
            knots,
        }))
    }
}
