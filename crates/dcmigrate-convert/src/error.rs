//! Conversion error types

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// A structurally required field is absent (or not a mapping where a
    /// mapping is required). The field path is relative to the source
    /// document root, e.g. `spec.selector`.
    #[error("missing required field: {field}")]
    MissingField { field: String },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ConvertError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
