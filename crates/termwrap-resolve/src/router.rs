//! Entry point: legacy normalization, kind dispatch, shape dispatch, tag.

use serde_json::Value;
use termwrap_core::config::TermwrapConfig;
use termwrap_core::errors::ResolveResult;
use termwrap_core::models::{RawTermWrapper, TermWrapper};
use termwrap_core::traits::{NoVocabulary, Vocabulary};
use tracing::instrument;

use crate::addons::{AddonRegistry, Resolved};
use crate::kinds::{self, KindContext};
use crate::legacy;

/// Resolves raw term wrappers. Vocabulary, configuration, and addons are
/// fixed at construction; a router holds no per-resolution state.
#[derive(Debug, Clone)]
pub struct Router<V = NoVocabulary> {
    vocab: V,
    config: TermwrapConfig,
    addons: AddonRegistry,
}

impl Default for Router<NoVocabulary> {
    fn default() -> Self {
        Self::new(NoVocabulary)
    }
}

impl<V: Vocabulary> Router<V> {
    pub fn new(vocab: V) -> Self {
        Self {
            vocab,
            config: TermwrapConfig::default(),
            addons: AddonRegistry::default(),
        }
    }

    pub fn with_config(mut self, config: TermwrapConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_addons(mut self, addons: AddonRegistry) -> Self {
        self.addons = addons;
        self
    }

    pub fn config(&self) -> &TermwrapConfig {
        &self.config
    }

    pub fn vocabulary(&self) -> &V {
        &self.vocab
    }

    /// Input normalization that runs once before dispatch.
    pub fn preprocess(&self, raw: &mut RawTermWrapper) -> ResolveResult<()> {
        legacy::normalize_groupsetting(raw)?;
        if raw.id.as_deref().map_or(true, str::is_empty) && !raw.term.id.is_empty() {
            raw.id = Some(raw.term.id.clone());
        }
        Ok(())
    }

    /// Resolve `raw` into a validated, tagged wrapper with its addons.
    #[instrument(skip_all, fields(term = %raw.term.id, term_type = %raw.term.term_type))]
    pub async fn resolve(&self, mut raw: RawTermWrapper) -> ResolveResult<Resolved> {
        self.preprocess(&mut raw)?;
        let ctx = KindContext {
            vocab: &self.vocab,
            config: &self.config,
        };
        let tw = kinds::resolve(raw, &ctx).await?;
        let addons = self.addons.for_shape(tw.tag().shape());
        Ok(Resolved::new(tw, addons))
    }

    /// Resolve untyped JSON, as read from saved state or a request.
    pub async fn resolve_value(&self, value: Value) -> ResolveResult<Resolved> {
        self.resolve(RawTermWrapper::from_value(value)?).await
    }

    /// Resolve an already resolved wrapper again, as after a round trip.
    pub async fn reresolve(&self, tw: &TermWrapper) -> ResolveResult<Resolved> {
        self.resolve(tw.to_raw()?).await
    }
}
