//! @acp:module "Content"
//! @acp:summary "Static portfolio content shared by every variant"
//! @acp:domain cli
//! @acp:layer model

mod fixtures;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{FolioError, Result};

/// Everything a variant can display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub writing: Vec<WritingItem>,
    #[serde(default)]
    pub appearances: Vec<Appearance>,
    #[serde(default)]
    pub quick_links: Vec<QuickLink>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub location: String,
    pub status: String,
    pub bio: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    App,
    Tool,
    Business,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ProjectKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WritingKind {
    Newsletter,
    Twitter,
    Appearance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritingItem {
    pub title: String,
    pub description: String,
    pub url: String,
    /// ISO date (`YYYY-MM-DD`)
    pub date: String,
    #[serde(rename = "type")]
    pub kind: WritingKind,
    /// Podcast or newsletter name for appearances
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    pub title: String,
    pub description: String,
    pub url: String,
    pub date: String,
    pub platform: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickLink {
    pub label: String,
    pub url: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub handle: String,
}

/// Serialization format for content files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentFormat {
    #[default]
    Json,
    Yaml,
}

impl std::str::FromStr for ContentFormat {
    type Err = FolioError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ContentFormat::Json),
            "yaml" | "yml" => Ok(ContentFormat::Yaml),
            _ => Err(FolioError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl ContentFormat {
    /// Infer the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        ext.parse()
            .map_err(|_| FolioError::UnsupportedFormat(path.display().to_string()))
    }
}

impl Content {
    /// Content bundled with the crate
    pub fn builtin() -> Self {
        fixtures::content()
    }

    /// Load content from a `.json`, `.yaml` or `.yml` file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = ContentFormat::from_path(path)?;
        let raw = std::fs::read_to_string(path)?;
        let content = Self::parse(&raw, format)?;
        tracing::debug!("Loaded content for {} from {}", content.profile.name, path.display());
        Ok(content)
    }

    pub fn parse(raw: &str, format: ContentFormat) -> Result<Self> {
        let content: Content = match format {
            ContentFormat::Json => serde_json::from_str(raw)?,
            ContentFormat::Yaml => serde_yaml::from_str(raw)?,
        };
        content.validate()?;
        Ok(content)
    }

    pub fn serialize_as(&self, format: ContentFormat) -> Result<String> {
        Ok(match format {
            ContentFormat::Json => serde_json::to_string_pretty(self)?,
            ContentFormat::Yaml => serde_yaml::to_string(self)?,
        })
    }

    /// Writing shown in the writing sections; appearances are listed separately
    pub fn visible_writing(&self) -> Vec<&WritingItem> {
        self.writing
            .iter()
            .filter(|item| item.kind != WritingKind::Appearance)
            .collect()
    }

    fn validate(&self) -> Result<()> {
        if self.profile.name.trim().is_empty() {
            return Err(FolioError::InvalidContent("profile name is empty".to_string()));
        }
        Ok(())
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::builtin()
    }
}
