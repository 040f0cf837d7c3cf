use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::{
    models::organisation_model::OrganisationEntity,
    types::responses::organisation_response::OrganisationModel,
    validations::object_id::validate_object_id,
};

/// Owner of a stored blog: a bare id until the organisation is joined in.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum OrganisationRef {
    Unresolved(ObjectId),
    Resolved(Box<OrganisationEntity>),
}

/// Owner of a returned blog. Serialized as a plain id string or an object.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum OrganisationRefModel {
    Unresolved(String),
    Resolved(Box<OrganisationModel>),
}

impl OrganisationRefModel {
    pub fn id(&self) -> &str {
        match self {
            Self::Unresolved(id) => id,
            Self::Resolved(org) => &org.id,
        }
    }
}

impl Validate for OrganisationRefModel {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            Self::Unresolved(id) => {
                let mut errors = ValidationErrors::new();

                if let Err(e) = validate_object_id(id) {
                    errors.add("id", e);
                }

                if errors.errors().is_empty() {
                    Ok(())
                } else {
                    Err(errors)
                }
            }
            Self::Resolved(org) => org.validate(),
        }
    }
}
