use bson::oid::ObjectId;
use validator::{ValidationError, ValidationErrors};

use crate::{
    errors::{ConversionError, ConversionResult},
    utils::validation_utils::add_error,
    validations::object_id::validate_object_id,
};

pub fn object_id_to_hex(id: &ObjectId) -> String {
    id.to_hex()
}

/// Parses the canonical string form back into an `ObjectId`.
pub fn parse_object_id(id: &str) -> ConversionResult<ObjectId> {
    let reject = |e: ValidationError| {
        let mut errors = ValidationErrors::new();
        errors.add("id", e);
        ConversionError::validation("ObjectId", errors)
    };

    validate_object_id(id).map_err(reject)?;
    ObjectId::parse_str(id).map_err(|e| reject(add_error("id.invalid", e.to_string(), id)))
}
