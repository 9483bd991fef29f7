//! Normalization of the pre-`q.type` groupset selection.

use termwrap_core::errors::{ResolveError, ResolveResult};
use termwrap_core::models::{RawTermWrapper, Shape};
use tracing::debug;

/// Translate a legacy `q.groupsetting` into `q.type` plus its shape fields,
/// then drop it. A wrapper without one is left untouched.
pub fn normalize_groupsetting(raw: &mut RawTermWrapper) -> ResolveResult<()> {
    let Some(legacy) = raw.q.groupsetting.take() else {
        return Ok(());
    };
    let q = &mut raw.q;
    if !legacy.inuse {
        q.query_type = Some(Shape::Values);
    } else if let Some(idx) = legacy.predefined_groupset_idx {
        q.query_type = Some(Shape::PredefinedGroupSet);
        q.fields
            .insert("predefined_groupset_idx".to_string(), idx.into());
    } else if let Some(customset) = legacy.customset {
        q.query_type = Some(Shape::CustomGroupSet);
        q.fields
            .insert("customset".to_string(), serde_json::to_value(customset)?);
    } else {
        return Err(ResolveError::invariant(
            "q.groupsetting is in use but sets neither predefined_groupset_idx nor customset",
        ));
    }
    debug!(
        term = %raw.term.id,
        shape = ?raw.q.query_type,
        "normalized legacy q.groupsetting"
    );
    Ok(())
}
