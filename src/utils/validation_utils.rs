use serde_json::json;
use std::{borrow::Cow, collections::HashMap};
use validator::{Validate, ValidationError};

use crate::errors::{ConversionError, ConversionResult};

pub fn add_error(code: &'static str, message: String, field_value: &str) -> ValidationError {
    ValidationError {
        code: code.into(),
        message: Some(Cow::Owned(message)),
        params: {
            let mut params = HashMap::new();
            params.insert("value".into(), json!(field_value));
            params
        },
    }
}

/// Runs the derived rules of an assembled model and wraps any violation.
pub fn validate_model<T: Validate>(model: &T, entity: &'static str) -> ConversionResult<()> {
    model.validate().map_err(|errors| {
        log::debug!("{} rejected: {}", entity, errors);
        ConversionError::validation(entity, errors)
    })
}
