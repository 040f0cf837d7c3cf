use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("{entity} failed validation: {source}")]
    Validation {
        entity: &'static str,
        #[source]
        source: ValidationErrors,
    },

    #[error("failed to decode {entity} document: {source}")]
    Decode {
        entity: &'static str,
        #[source]
        source: bson::de::Error,
    },
}

impl ConversionError {
    pub fn validation(entity: &'static str, source: ValidationErrors) -> Self {
        Self::Validation { entity, source }
    }

    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation { source, .. } => Some(source),
            Self::Decode { .. } => None,
        }
    }
}

pub type ConversionResult<T> = Result<T, ConversionError>;
