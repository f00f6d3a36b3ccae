//! @acp:module "Init Command"
//! @acp:summary "Write a default folio configuration"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `folio init` for project initialization.

use std::path::PathBuf;

use anyhow::{bail, Result};
use console::style;

use crate::config::Config;

/// Options for the init command
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Config file to write
    pub path: PathBuf,
    /// Force overwrite existing config
    pub force: bool,
    /// Enabled variants (defaults to all built-ins)
    pub variants: Vec<String>,
    /// Content file to reference
    pub content: Option<PathBuf>,
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    if options.path.exists() && !options.force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            options.path.display()
        );
    }

    let mut config = Config::default();
    if !options.variants.is_empty() {
        config.variants = options.variants;
    }
    config.content = options.content;

    // Reject configs that could never resolve a variant
    config.registry()?;

    config.save(&options.path)?;
    println!(
        "{} Created {}",
        style("✓").green(),
        options.path.display()
    );
    println!("  Variants: {}", config.variants.join(", "));
    println!("  Sessions: {}", config.session_dir.display());

    Ok(())
}
