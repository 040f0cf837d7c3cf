use bson::{Bson, Document};
use validator::ValidationErrors;

use crate::{
    constants::OBJECT_ID_HEX_LEN, types::validations::ValidationResult,
    utils::validation_utils::add_error,
};

fn has_hex_length(id: &str) -> Result<(), String> {
    if id.len() != OBJECT_ID_HEX_LEN {
        Err(format!(
            "Identifier must be exactly {} characters long",
            OBJECT_ID_HEX_LEN
        ))
    } else {
        Ok(())
    }
}

fn has_lowercase_hex_chars(id: &str) -> Result<(), String> {
    if !id
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    {
        Err("Identifier can only contain lowercase hexadecimal digits".to_string())
    } else {
        Ok(())
    }
}

/// Accepts the canonical string form of an ObjectId: 24 lowercase hex digits.
pub fn validate_object_id(id: &str) -> ValidationResult {
    let validations = [has_hex_length, has_lowercase_hex_chars];

    let errors: Vec<String> = validations.iter().filter_map(|f| f(id).err()).collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(add_error("id.invalid", errors.join(", "), id))
    }
}

/// Error set reported when a stored record carries no identity at all.
pub fn missing_identity() -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add(
        "id",
        add_error("id.missing", "Identifier is required".to_string(), ""),
    );
    errors
}

/// Checks the stored `_id` before decoding. Absent or null ids are left to
/// the converters, which report them as missing.
pub fn validate_document_identity(document: &Document) -> Result<(), ValidationErrors> {
    match document.get("_id") {
        None | Some(Bson::Null) | Some(Bson::ObjectId(_)) => Ok(()),
        Some(other) => {
            let mut errors = ValidationErrors::new();
            errors.add(
                "id",
                add_error(
                    "id.invalid",
                    format!(
                        "Identifier must be an ObjectId, found {:?}",
                        other.element_type()
                    ),
                    &other.to_string(),
                ),
            );
            Err(errors)
        }
    }
}
