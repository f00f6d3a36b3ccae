//! @acp:module "Variants Command"
//! @acp:summary "List registered presentation variants"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::config::Config;

/// Options for the variants command
#[derive(Debug, Clone, Default)]
pub struct VariantsOptions {
    /// Output as JSON
    pub json: bool,
}

/// Execute the variants command
pub fn execute_variants(options: VariantsOptions, config: &Config) -> Result<()> {
    let registry = config.registry()?;

    if options.json {
        let variants: Vec<_> = registry.iter().collect();
        println!("{}", serde_json::to_string_pretty(&variants)?);
        return Ok(());
    }

    println!("{} {} variants registered", style("→").cyan(), registry.len());
    for variant in registry.iter() {
        println!(
            "  {}  {:<12} {}",
            style(variant.id.as_str()).bold(),
            variant.name,
            style(variant.summary).dim()
        );
    }
    println!(
        "\n  Force one with {}",
        style(format!("?{}=<id>", config.query_param)).cyan()
    );

    Ok(())
}
