//! @acp:module "Variant Resolver"
//! @acp:summary "Three-tier variant selection: explicit override, session, random"
//! @acp:domain cli
//! @acp:layer logic
//!
//! Picks exactly one registered variant per page load:
//!
//! 1. An override from the address wins and is remembered for the session
//! 2. Otherwise a valid choice already stored in the session is reused
//! 3. Otherwise a variant is drawn at random and stored
//!
//! Every malformed input falls through to the next tier, so resolution is
//! total for any non-empty registry.

pub mod address;
pub mod picker;
pub mod state;

pub use address::{RequestOverride, DEFAULT_QUERY_PARAM};
pub use picker::{FixedPicker, RandomPicker, VariantPicker};
pub use state::{PageState, VariantGate};

use serde::Serialize;
use std::fmt;

use crate::session::SessionStore;
use crate::variant::{VariantId, VariantRegistry};

/// Default session storage key for the remembered variant
pub const DEFAULT_SESSION_KEY: &str = "folio.variant";

/// Which tier produced a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionSource {
    Override,
    Session,
    Random,
}

impl ResolutionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionSource::Override => "override",
            ResolutionSource::Session => "session",
            ResolutionSource::Random => "random",
        }
    }
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub variant: VariantId,
    pub source: ResolutionSource,
}

/// Resolves variants against a registry and one session key
#[derive(Debug, Clone)]
pub struct Resolver {
    registry: VariantRegistry,
    session_key: String,
}

impl Resolver {
    pub fn new(registry: VariantRegistry) -> Self {
        Self {
            registry,
            session_key: DEFAULT_SESSION_KEY.to_string(),
        }
    }

    pub fn with_session_key(mut self, key: impl Into<String>) -> Self {
        self.session_key = key.into();
        self
    }

    pub fn registry(&self) -> &VariantRegistry {
        &self.registry
    }

    pub fn session_key(&self) -> &str {
        &self.session_key
    }

    /// Resolve the variant for one page load
    pub fn resolve<S, P>(&self, request: &RequestOverride, store: &mut S, picker: &mut P) -> Resolution
    where
        S: SessionStore + ?Sized,
        P: VariantPicker + ?Sized,
    {
        if let Some(candidate) = request.candidate() {
            match self.registry.lookup(candidate) {
                Some(variant) => {
                    let id = variant.id.clone();
                    self.remember(store, &id);
                    tracing::debug!("Variant {} requested by address", id);
                    return Resolution {
                        variant: id,
                        source: ResolutionSource::Override,
                    };
                }
                None => {
                    tracing::debug!("Ignoring unregistered variant override {:?}", candidate);
                }
            }
        }

        if let Some(stored) = store.get(&self.session_key) {
            match self.registry.lookup(&stored) {
                Some(variant) => {
                    tracing::debug!("Variant {} restored from session", variant.id);
                    return Resolution {
                        variant: variant.id.clone(),
                        source: ResolutionSource::Session,
                    };
                }
                None => {
                    tracing::debug!("Ignoring unregistered session variant {:?}", stored);
                }
            }
        }

        let index = picker.pick(self.registry.len());
        let id = self.registry.at(index).id.clone();
        self.remember(store, &id);
        tracing::debug!("Variant {} assigned at random", id);
        Resolution {
            variant: id,
            source: ResolutionSource::Random,
        }
    }

    /// Store write failures are logged; the resolved variant is still used
    fn remember<S: SessionStore + ?Sized>(&self, store: &mut S, id: &VariantId) {
        if let Err(e) = store.set(&self.session_key, id.as_str()) {
            tracing::warn!("Failed to remember variant {} for this session: {}", id, e);
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(VariantRegistry::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    #[test]
    fn test_override_beats_session() {
        let resolver = Resolver::default();
        let mut store = MemorySessionStore::with_entry(DEFAULT_SESSION_KEY, "D");
        let resolution = resolver.resolve(&RequestOverride::new("a"), &mut store, &mut FixedPicker(0));

        assert_eq!(resolution.variant.as_str(), "A");
        assert_eq!(resolution.source, ResolutionSource::Override);
        assert_eq!(store.get(DEFAULT_SESSION_KEY).as_deref(), Some("A"));
    }

    #[test]
    fn test_stale_session_value_is_replaced() {
        let resolver = Resolver::default();
        let mut store = MemorySessionStore::with_entry(DEFAULT_SESSION_KEY, "Q");
        let resolution = resolver.resolve(&RequestOverride::none(), &mut store, &mut FixedPicker(1));

        assert_eq!(resolution.variant.as_str(), "B");
        assert_eq!(resolution.source, ResolutionSource::Random);
        assert_eq!(store.get(DEFAULT_SESSION_KEY).as_deref(), Some("B"));
    }

    #[test]
    fn test_custom_session_key() {
        let resolver = Resolver::default().with_session_key("look");
        let mut store = MemorySessionStore::new();
        resolver.resolve(&RequestOverride::new("c"), &mut store, &mut FixedPicker(0));

        assert_eq!(store.get("look").as_deref(), Some("C"));
        assert!(store.get(DEFAULT_SESSION_KEY).is_none());
    }
}
