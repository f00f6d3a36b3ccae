#![forbid(unsafe_code)]

//! @acp:module "Folio Library"
//! @acp:summary "Portfolio page rendering with session-sticky presentation variants"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # Folio
//!
//! Renders one set of portfolio content in several interchangeable visual
//! presentations ("variants") and decides which one a visitor sees.
//!
//! ## Features
//!
//! - **Variant resolution**: explicit address override, then the session's
//!   remembered choice, then a uniform random draw
//! - **Injected capabilities**: session storage and randomness are traits, so
//!   resolution can be tested deterministically
//! - **No flash of the wrong variant**: pages start `Unresolved` and render an
//!   empty shell until a variant is chosen
//! - **Templates**: four Handlebars presentations over the same content
//!
//! ## Example
//!
//! ```rust,no_run
//! use folio::{Content, MemorySessionStore, RandomPicker, Renderer, RequestOverride, Resolver, VariantGate};
//!
//! fn main() -> folio::Result<()> {
//!     let resolver = Resolver::default();
//!     let mut session = MemorySessionStore::new();
//!     let request = RequestOverride::from_address("https://example.com/?variant=b", "variant");
//!
//!     let mut gate = VariantGate::new();
//!     gate.resolve(&resolver, &request, &mut session, &mut RandomPicker);
//!
//!     let html = Renderer::new()?.render_page(
//!         gate.state(),
//!         resolver.registry(),
//!         &Content::builtin(),
//!         chrono::Local::now().naive_local(),
//!     )?;
//!     println!("{}", html);
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod render;
pub mod resolver;
pub mod session;
pub mod variant;

// Re-exports
pub use config::Config;
pub use content::{Content, ContentFormat};
pub use error::{FolioError, Result};
pub use render::Renderer;
pub use resolver::{
    FixedPicker, PageState, RandomPicker, RequestOverride, Resolution, ResolutionSource, Resolver,
    VariantGate, VariantPicker,
};
pub use session::{FileSessionStore, MemorySessionStore, SessionStore};
pub use variant::{RegistryError, Variant, VariantId, VariantRegistry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
