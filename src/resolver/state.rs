//! @acp:module "Page State"
//! @acp:summary "Unresolved/Resolved state machine guarding one resolution per load"
//! @acp:domain cli
//! @acp:layer logic

use serde::Serialize;

use super::{RequestOverride, Resolution, Resolver, VariantPicker};
use crate::session::SessionStore;
use crate::variant::VariantId;

/// What the presentation layer may show
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum PageState {
    /// Nothing has been chosen yet; render an empty page
    #[default]
    Unresolved,
    Resolved(Resolution),
}

impl PageState {
    pub fn variant(&self) -> Option<&VariantId> {
        match self {
            PageState::Unresolved => None,
            PageState::Resolved(resolution) => Some(&resolution.variant),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, PageState::Resolved(_))
    }
}

/// Owns the page state for one load and resolves at most once.
///
/// The transition `Unresolved -> Resolved` happens on the first call to
/// [`VariantGate::resolve`]; later calls return a copy of the stored
/// resolution and leave the session store alone.
#[derive(Debug, Default)]
pub struct VariantGate {
    state: PageState,
}

impl VariantGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn resolve<S, P>(
        &mut self,
        resolver: &Resolver,
        request: &RequestOverride,
        store: &mut S,
        picker: &mut P,
    ) -> Resolution
    where
        S: SessionStore + ?Sized,
        P: VariantPicker + ?Sized,
    {
        if let PageState::Resolved(resolution) = &self.state {
            return resolution.clone();
        }
        let resolution = resolver.resolve(request, store, picker);
        self.state = PageState::Resolved(resolution.clone());
        resolution
    }

    pub fn into_state(self) -> PageState {
        self.state
    }
}
