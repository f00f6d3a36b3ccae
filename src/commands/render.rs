//! @acp:module "Render Command"
//! @acp:summary "Resolve a variant and render the page to HTML"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use console::style;

use super::resolve::load_page;
use crate::config::Config;
use crate::render::Renderer;

/// Options for the render command
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Page address (full URL or query string)
    pub address: Option<String>,
    /// Session id
    pub session: Option<String>,
    /// Output path (defaults to config output)
    pub output: Option<PathBuf>,
    /// Write HTML to stdout instead of a file
    pub stdout: bool,
}

/// Execute the render command
pub fn execute_render(options: RenderOptions, config: &Config) -> Result<()> {
    let registry = config.registry()?;
    let content = config.load_content()?;
    let renderer = Renderer::new()?;

    let load = load_page(config, options.address.as_deref(), options.session.as_deref())?;
    let html = renderer.render_page(&load.state, &registry, &content, Local::now().naive_local())?;

    if options.stdout {
        println!("{}", html);
        return Ok(());
    }

    let output = options.output.unwrap_or_else(|| config.output.clone());
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    std::fs::write(&output, html).with_context(|| format!("Failed to write {}", output.display()))?;

    if let Some(resolution) = load.resolution() {
        println!(
            "{} Rendered variant {} ({}) to {}",
            style("✓").green(),
            style(resolution.variant.as_str()).bold(),
            resolution.source,
            output.display()
        );
    }

    Ok(())
}
