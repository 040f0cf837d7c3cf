use bson::{Bson, Document, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{ConversionError, ConversionResult},
    types::models::blog::{
        owner::OrganisationRef,
        posts::{CompletedPost, UpcomingPost},
        settings::BlogSettings,
    },
    validations::object_id::validate_document_identity,
};

const ENTITY: &str = "Blog";

/// Blog as held by storage.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogEntity {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub org: OrganisationRef,

    #[serde(default)]
    pub settings: BlogSettings,

    #[serde(default)]
    pub upcoming_posts: Vec<UpcomingPost>,

    #[serde(default)]
    pub completed_posts: Vec<CompletedPost>,

    #[serde(default)]
    pub created_at: Option<bson::DateTime>,

    #[serde(default)]
    pub last_post_published: Option<bson::DateTime>,

    #[serde(default)]
    pub last_updated: Option<bson::DateTime>,
}

impl BlogEntity {
    pub fn from_document(document: Document) -> ConversionResult<Self> {
        validate_document_identity(&document)
            .map_err(|errors| ConversionError::validation(ENTITY, errors))?;

        if let Some(Bson::Document(owner)) = document.get("org") {
            validate_document_identity(owner)
                .map_err(|errors| ConversionError::validation("Organisation", errors))?;
        }

        bson::from_document(document).map_err(|source| ConversionError::Decode {
            entity: ENTITY,
            source,
        })
    }
}
