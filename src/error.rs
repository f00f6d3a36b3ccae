//! @acp:module "Errors"
//! @acp:summary "Library error type and result alias"
//! @acp:domain cli
//! @acp:layer model

use thiserror::Error;

use crate::variant::RegistryError;

/// Errors raised by the folio library
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Template error: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("Variant registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Invalid content: {0}")]
    InvalidContent(String),

    #[error("Unsupported content format: {0}")]
    UnsupportedFormat(String),

    #[error("Unknown session: {0}")]
    UnknownSession(String),

    #[error("Invalid session id: {0:?}")]
    InvalidSession(String),

    #[error("{0}")]
    Other(String),
}

impl From<handlebars::TemplateError> for FolioError {
    fn from(err: handlebars::TemplateError) -> Self {
        FolioError::Template(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
