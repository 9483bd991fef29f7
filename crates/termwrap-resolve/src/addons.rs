//! Named behavior attached to resolved wrappers by shape.
//!
//! Addons live beside the wrapper, never inside it: a [`Resolved`] clones
//! by value and serializes as the bare term wrapper.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};
use serde_json::Value;
use termwrap_core::errors::{ResolveError, ResolveResult};
use termwrap_core::models::{Shape, TermWrapper};

/// An addon receives the resolved wrapper and caller arguments.
pub type Addon = Arc<dyn Fn(&TermWrapper, &Value) -> ResolveResult<Value> + Send + Sync>;

/// Addons keyed by the shape they attach to. Chosen once, when the router
/// is built.
#[derive(Clone, Default)]
pub struct AddonRegistry {
    by_shape: BTreeMap<Shape, BTreeMap<String, Addon>>,
}

impl AddonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `addon` under `name` to every wrapper resolved to `shape`.
    /// A later registration under the same name replaces the earlier one.
    pub fn register<F>(mut self, shape: Shape, name: impl Into<String>, addon: F) -> Self
    where
        F: Fn(&TermWrapper, &Value) -> ResolveResult<Value> + Send + Sync + 'static,
    {
        self.by_shape
            .entry(shape)
            .or_default()
            .insert(name.into(), Arc::new(addon));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.by_shape.values().all(BTreeMap::is_empty)
    }

    /// The addon set for one shape; empty when nothing is registered.
    pub fn for_shape(&self, shape: Shape) -> Addons {
        Addons(self.by_shape.get(&shape).cloned().unwrap_or_default())
    }
}

impl fmt::Debug for AddonRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (shape, addons) in &self.by_shape {
            map.entry(shape, &addons.keys().collect::<Vec<_>>());
        }
        map.finish()
    }
}

/// The addons attached to one resolved wrapper.
#[derive(Clone, Default)]
pub struct Addons(BTreeMap<String, Addon>);

impl Addons {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn call(&self, name: &str, tw: &TermWrapper, args: &Value) -> ResolveResult<Value> {
        let addon = self.0.get(name).ok_or_else(|| {
            ResolveError::routing_miss(format!("no addon '{name}' is attached to {}", tw.tag()))
        })?;
        addon(tw, args)
    }
}

impl fmt::Debug for Addons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.keys()).finish()
    }
}

/// A resolved term wrapper together with the addons its shape carries.
#[derive(Clone, Debug)]
pub struct Resolved {
    pub tw: TermWrapper,
    addons: Addons,
}

impl Resolved {
    pub fn new(tw: TermWrapper, addons: Addons) -> Self {
        Self { tw, addons }
    }

    pub fn addons(&self) -> &Addons {
        &self.addons
    }

    /// Invoke the addon registered under `name`.
    pub fn call(&self, name: &str, args: &Value) -> ResolveResult<Value> {
        self.addons.call(name, &self.tw, args)
    }

    pub fn into_tw(self) -> TermWrapper {
        self.tw
    }
}

impl Serialize for Resolved {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.tw.serialize(serializer)
    }
}

impl std::ops::Deref for Resolved {
    type Target = TermWrapper;

    fn deref(&self) -> &TermWrapper {
        &self.tw
    }
}
