//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Provides implementations for all CLI commands.
//! Each command is in its own submodule for maintainability.

pub mod content;
pub mod init;
pub mod render;
pub mod resolve;
pub mod session;
pub mod variants;

pub use content::{execute_content, ContentOptions};
pub use init::{execute_init, InitOptions};
pub use render::{execute_render, RenderOptions};
pub use resolve::{execute_resolve, load_page, PageLoad, ResolveOptions};
pub use session::{execute_session, SessionSubcommand};
pub use variants::{execute_variants, VariantsOptions};
