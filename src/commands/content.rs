//! @acp:module "Content Command"
//! @acp:summary "Print the portfolio content model"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;

use crate::config::Config;
use crate::content::ContentFormat;

/// Options for the content command
#[derive(Debug, Clone, Default)]
pub struct ContentOptions {
    pub format: ContentFormat,
}

/// Execute the content command
pub fn execute_content(options: ContentOptions, config: &Config) -> Result<()> {
    let content = config.load_content()?;
    println!("{}", content.serialize_as(options.format)?);
    Ok(())
}
