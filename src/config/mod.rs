//! @acp:module "Configuration"
//! @acp:summary "Project configuration loading and defaults"
//! @acp:domain cli
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::content::Content;
use crate::resolver::{Resolver, DEFAULT_QUERY_PARAM, DEFAULT_SESSION_KEY};
use crate::variant::VariantRegistry;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = ".folio.config.json";

fn default_query_param() -> String {
    DEFAULT_QUERY_PARAM.to_string()
}

fn default_session_key() -> String {
    DEFAULT_SESSION_KEY.to_string()
}

fn default_session_dir() -> PathBuf {
    PathBuf::from(".folio/sessions")
}

fn default_variants() -> Vec<String> {
    vec!["A".to_string(), "B".to_string(), "C".to_string(), "D".to_string()]
}

fn default_output() -> PathBuf {
    PathBuf::from("dist/index.html")
}

/// @acp:summary "Main folio configuration structure"
/// @acp:lock normal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Query parameter carrying an explicit variant request
    #[serde(default = "default_query_param")]
    pub query_param: String,

    /// Session storage key holding the remembered variant
    #[serde(default = "default_session_key")]
    pub session_key: String,

    /// Directory holding one file per session
    #[serde(default = "default_session_dir")]
    pub session_dir: PathBuf,

    /// Enabled variants; order is registry order
    #[serde(default = "default_variants")]
    pub variants: Vec<String>,

    /// Optional JSON/YAML content file replacing the built-in content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<PathBuf>,

    /// Default HTML output path for `folio render`
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            query_param: default_query_param(),
            session_key: default_session_key(),
            session_dir: default_session_dir(),
            variants: default_variants(),
            content: None,
            output: default_output(),
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a JSON file"
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @acp:summary "Load config if the file exists, otherwise use defaults"
    ///
    /// A file that exists but cannot be parsed is an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Build the variant registry; fails if the variant list is invalid
    pub fn registry(&self) -> crate::Result<VariantRegistry> {
        Ok(VariantRegistry::from_ids(&self.variants)?)
    }

    /// Build a resolver using the configured registry and session key
    pub fn resolver(&self) -> crate::Result<Resolver> {
        Ok(Resolver::new(self.registry()?).with_session_key(self.session_key.clone()))
    }

    /// Content from the configured file, or the built-in content
    pub fn load_content(&self) -> crate::Result<Content> {
        match &self.content {
            Some(path) => Content::load(path),
            None => Ok(Content::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.query_param, "variant");
        assert_eq!(config.session_key, "folio.variant");
    }

    #[test]
    fn test_camel_case_fields() {
        let config: Config =
            serde_json::from_str(r#"{"queryParam":"look","variants":["b","c"]}"#).unwrap();
        assert_eq!(config.query_param, "look");
        let registry = config.registry().unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_empty_variant_list_is_rejected() {
        let config = Config {
            variants: Vec::new(),
            ..Config::default()
        };
        assert!(config.registry().is_err());
        assert!(config.resolver().is_err());
    }

    #[test]
    fn test_load_or_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());

        std::fs::write(&path, r#"{"sessionKey":"look"}"#).unwrap();
        assert_eq!(Config::load_or_default(&path).unwrap().session_key, "look");

        std::fs::write(&path, "{broken").unwrap();
        assert!(Config::load_or_default(&path).is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        let config = Config {
            content: Some(PathBuf::from("content.yaml")),
            ..Config::default()
        };
        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
