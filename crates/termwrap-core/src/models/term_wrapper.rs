//! Resolved term wrappers.

use serde::{Deserialize, Serialize};

use super::query::Query;
use super::raw::RawTermWrapper;
use super::tag::TwTag;
use super::term::Term;
use crate::errors::{ResolveError, ResolveResult};

/// A validated (term, query) pair with its discriminant.
///
/// The tag is private and derived from `term.type` and the query variant
/// at construction, so it cannot disagree with either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PersistedTermWrapper")]
pub struct TermWrapper {
    pub id: String,
    #[serde(rename = "type")]
    tag: TwTag,
    pub term: Term,
    pub q: Query,
    #[serde(rename = "$id", default, skip_serializing_if = "Option::is_none")]
    pub dollar_id: Option<String>,
}

impl TermWrapper {
    /// Assemble a wrapper, deriving its tag. Fails when the term's kind
    /// never takes the query's shape.
    pub fn assemble(
        id: String,
        term: Term,
        q: Query,
        dollar_id: Option<String>,
    ) -> ResolveResult<Self> {
        let tag = TwTag::from_parts(term.kind(), q.shape()).ok_or_else(|| {
            ResolveError::routing_miss(format!(
                "{} terms do not take q.type='{}'",
                term.term_type,
                q.shape()
            ))
        })?;
        Ok(Self {
            id,
            tag,
            term,
            q,
            dollar_id,
        })
    }

    pub fn tag(&self) -> TwTag {
        self.tag
    }

    /// Back to raw input form, as a saved state would be re-read.
    pub fn to_raw(&self) -> ResolveResult<RawTermWrapper> {
        let value = serde_json::to_value(self)?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Wire form accepted when reading a persisted wrapper back.
#[derive(Deserialize)]
struct PersistedTermWrapper {
    id: String,
    #[serde(rename = "type", default)]
    tag: Option<TwTag>,
    term: Term,
    q: Query,
    #[serde(rename = "$id", default)]
    dollar_id: Option<String>,
}

impl TryFrom<PersistedTermWrapper> for TermWrapper {
    type Error = ResolveError;

    fn try_from(p: PersistedTermWrapper) -> Result<Self, Self::Error> {
        let tw = TermWrapper::assemble(p.id, p.term, p.q, p.dollar_id)?;
        match p.tag {
            Some(tag) if tag != tw.tag => Err(ResolveError::invariant(format!(
                "persisted tag {tag} disagrees with derived tag {}",
                tw.tag
            ))),
            _ => Ok(tw),
        }
    }
}
