//! @acp:module "Resolve Command"
//! @acp:summary "Run variant resolution for one simulated page load"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;
use serde::Serialize;

use crate::config::Config;
use crate::resolver::{PageState, RandomPicker, RequestOverride, Resolution, VariantGate};
use crate::session::{FileSessionStore, MemorySessionStore, SessionStore};

/// Options for the resolve command
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Page address (full URL or query string)
    pub address: Option<String>,
    /// Session id; a throwaway in-memory session is used when absent
    pub session: Option<String>,
    /// Output as JSON
    pub json: bool,
}

/// Outcome of one page load
#[derive(Debug, Clone, Serialize)]
pub struct PageLoad {
    pub state: PageState,
    /// Session the choice was remembered in, if persistent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
}

impl PageLoad {
    pub fn resolution(&self) -> Option<&Resolution> {
        match &self.state {
            PageState::Resolved(resolution) => Some(resolution),
            PageState::Unresolved => None,
        }
    }
}

/// Resolve the variant for a page load against the configured session store
pub fn load_page(config: &Config, address: Option<&str>, session: Option<&str>) -> Result<PageLoad> {
    let resolver = config.resolver()?;
    let request = address
        .map(|a| RequestOverride::from_address(a, &config.query_param))
        .unwrap_or_default();

    let mut store: Box<dyn SessionStore> = match session {
        Some(id) => Box::new(FileSessionStore::open(&config.session_dir, id)?),
        None => Box::new(MemorySessionStore::new()),
    };

    let mut gate = VariantGate::new();
    gate.resolve(&resolver, &request, store.as_mut(), &mut RandomPicker);

    Ok(PageLoad {
        state: gate.into_state(),
        session: session.map(str::to_string),
    })
}

/// Execute the resolve command
pub fn execute_resolve(options: ResolveOptions, config: &Config) -> Result<()> {
    let load = load_page(config, options.address.as_deref(), options.session.as_deref())?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&load)?);
        return Ok(());
    }

    if let Some(resolution) = load.resolution() {
        println!(
            "{} Variant {} ({})",
            style("✓").green(),
            style(resolution.variant.as_str()).bold(),
            resolution.source
        );
    }
    match &load.session {
        Some(id) => println!("  Session: {}", id),
        None => println!("  Session: {}", style("none (not remembered)").dim()),
    }

    Ok(())
}
