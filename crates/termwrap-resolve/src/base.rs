//! Steps every kind resolver shares: default-query merge, the common query
//! envelope, mode checks, and final tagging.

use termwrap_core::config::ResolveConfig;
use termwrap_core::errors::{ResolveError, ResolveResult};
use termwrap_core::models::flags::is_truthy;
use termwrap_core::models::{
    HiddenValues, Mode, Query, QueryCommon, RawQuery, Shape, Term, TermKind, TermWrapper,
};
use tracing::debug;

/// The envelope shared by all resolved wrappers of one kind.
#[derive(Debug, Clone, Copy)]
pub struct TwBase<'a> {
    kind: TermKind,
    config: &'a ResolveConfig,
}

impl<'a> TwBase<'a> {
    pub fn new(kind: TermKind, config: &'a ResolveConfig) -> Self {
        Self { kind, config }
    }

    pub fn kind(&self) -> TermKind {
        self.kind
    }

    /// Fill absent query keys from the configured per-kind defaults.
    pub fn merge_default_q(&self, q: &mut RawQuery) -> ResolveResult<()> {
        if let Some(defaults) = self.config.default_q_for(self.kind) {
            q.merge_defaults(defaults)?;
            debug!(kind = %self.kind, keys = defaults.len(), "merged default query");
        }
        Ok(())
    }

    /// Wrappers of a term collection stand for several terms at once.
    pub fn is_atomic(&self, q: &RawQuery) -> bool {
        match self.kind {
            TermKind::TermCollection => false,
            _ => q.is_atomic.unwrap_or(true),
        }
    }

    /// Take mode, hidden values, and atomicity out of `q`.
    pub fn common(&self, term: &Term, q: &mut RawQuery, shape: Shape) -> QueryCommon {
        let is_atomic = self.is_atomic(q);
        QueryCommon {
            mode: q.mode.take().unwrap_or_else(|| default_mode(shape)),
            hidden_values: q
                .hidden_values
                .take()
                .unwrap_or_else(|| default_hidden_values(term)),
            is_atomic,
        }
    }

    pub fn check_mode(
        &self,
        term: &Term,
        shape: Shape,
        mode: Mode,
        allowed: &[Mode],
    ) -> ResolveResult<()> {
        if allowed.contains(&mode) {
            return Ok(());
        }
        Err(ResolveError::invariant(format!(
            "mode '{mode}' is not supported by q.type '{shape}' for {} terms",
            term.term_type
        )))
    }

    /// Assemble the final wrapper. This is the only place a tag is derived.
    pub fn finish(
        &self,
        id: Option<String>,
        term: Term,
        q: Query,
        dollar_id: Option<String>,
    ) -> ResolveResult<TermWrapper> {
        let id = match id.filter(|id| !id.is_empty()) {
            Some(id) => id,
            None if !term.id.is_empty() => term.id.clone(),
            None => return Err(ResolveError::schema("missing tw.id and term.id")),
        };
        let tw = TermWrapper::assemble(id, term, q, dollar_id)?;
        debug!(id = %tw.id, tag = %tw.tag(), "resolved term wrapper");
        Ok(tw)
    }
}

/// Mode a query gets when it names none.
pub fn default_mode(shape: Shape) -> Mode {
    match shape {
        Shape::Continuous => Mode::Continuous,
        Shape::Spline => Mode::Spline,
        _ => Mode::Discrete,
    }
}

/// Values flagged uncomputable are hidden unless the query says otherwise.
pub fn default_hidden_values(term: &Term) -> HiddenValues {
    term.values
        .iter()
        .flatten()
        .filter(|(_, v)| v.uncomputable)
        .map(|(k, _)| k.clone())
        .collect()
}

/// Remove a loose flag field; truthy numbers and booleans count as set.
pub fn take_flag(q: &mut RawQuery, key: &str) -> ResolveResult<bool> {
    Ok(q
        .take::<serde_json::Value>(key)?
        .is_some_and(|v| is_truthy(&v)))
}
