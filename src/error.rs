//! Error types for the generator

use thiserror::Error;

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GenError>;

/// Generator errors.
///
/// Only [`GenError::is_fatal`] errors abort a run. The per-class variants skip
/// the affected class and the batch continues.
#[derive(Error, Debug)]
pub enum GenError {
    #[error(
        "Unsupported document version: expected \"{expected}\", found {}",
        describe_found(found)
    )]
    Format {
        expected: String,
        found: Option<String>,
    },

    #[error(
        "Unsupported model for class {class}: {count} generalizations, at most one is supported"
    )]
    UnsupportedModel { class: String, count: usize },

    #[error("No enclosing package for class {class}")]
    MissingNamespace { class: String },

    #[error("Cannot resolve {reference} for class {class}")]
    ReferenceResolution { class: String, reference: String },

    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config_crate::ConfigError),
}

fn describe_found(found: &Option<String>) -> String {
    found
        .as_deref()
        .map_or_else(|| "none".to_string(), |f| format!("\"{f}\""))
}

impl GenError {
    /// Whether this error aborts the whole run
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::UnsupportedModel { .. }
                | Self::MissingNamespace { .. }
                | Self::ReferenceResolution { .. }
        )
    }

    pub(crate) fn unresolved(class: impl Into<String>, reference: impl Into<String>) -> Self {
        Self::ReferenceResolution {
            class: class.into(),
            reference: reference.into(),
        }
    }
}
