//! @acp:module "Variants"
//! @acp:summary "Presentation variant identifiers, metadata and registry"
//! @acp:domain cli
//! @acp:layer model
//!
//! A variant is one complete visual presentation of the portfolio content.
//! Every variant renders the same data; only the layout and styling differ.

pub mod registry;

pub use registry::{RegistryError, VariantRegistry};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical variant identifier (trimmed, ASCII uppercase)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(String);

impl VariantId {
    /// Normalize a raw identifier. Returns `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a raw candidate
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.eq_ignore_ascii_case(candidate.trim())
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VariantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A registered presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variant {
    pub id: VariantId,
    /// Short human-readable name
    pub name: &'static str,
    /// One-line description of the look
    pub summary: &'static str,
    /// Handlebars template name used for the page body
    pub template: &'static str,
}

/// Built-in variant definitions, in registration order
pub fn builtin_variants() -> Vec<Variant> {
    vec![
        builtin("A", "Classic IRC", "Three-panel IRC client: channels, chat log and user info", "variant_a"),
        builtin("B", "Terminal", "Green-on-black command prompt with an ASCII banner", "variant_b"),
        builtin("C", "Windows 95", "Desktop windows with beveled title bars and a taskbar", "variant_c"),
        builtin("D", "Linkinus", "Mac IRC client with a sidebar of coloured status dots", "variant_d"),
    ]
}

fn builtin(id: &str, name: &'static str, summary: &'static str, template: &'static str) -> Variant {
    Variant {
        id: VariantId(id.to_string()),
        name,
        summary,
        template,
    }
}
