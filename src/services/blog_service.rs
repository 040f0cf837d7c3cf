use crate::{
    errors::{ConversionError, ConversionResult},
    models::blog_model::BlogEntity,
    services::organisation_service::to_organisation_model,
    types::{
        models::blog::owner::{OrganisationRef, OrganisationRefModel},
        responses::blog_response::BlogModel,
    },
    utils::{
        date_utils::materialize_if_truthy, id_utils::object_id_to_hex,
        validation_utils::validate_model,
    },
    validations::object_id::missing_identity,
};

const ENTITY: &str = "Blog";

fn to_owner_model(
    owner: &OrganisationRef,
    include_credentials: bool,
) -> ConversionResult<OrganisationRefModel> {
    match owner {
        OrganisationRef::Unresolved(id) => {
            Ok(OrganisationRefModel::Unresolved(object_id_to_hex(id)))
        }
        OrganisationRef::Resolved(org) => {
            let model = to_organisation_model(org, include_credentials)?;
            Ok(OrganisationRefModel::Resolved(Box::new(model)))
        }
    }
}

/// Converts a stored blog into its client-facing model, converting an
/// embedded owner organisation with the same credential flag.
pub fn to_blog_model(
    entity: &BlogEntity,
    include_credentials: bool,
) -> ConversionResult<BlogModel> {
    let id = entity
        .id
        .as_ref()
        .map(object_id_to_hex)
        .ok_or_else(|| ConversionError::validation(ENTITY, missing_identity()))?;

    log::debug!("Converting blog {}", id);

    let model = BlogModel {
        id,
        org: to_owner_model(&entity.org, include_credentials)?,
        settings: entity.settings.clone(),
        upcoming_posts: entity.upcoming_posts.clone(),
        completed_posts: entity.completed_posts.clone(),
        created_at: materialize_if_truthy(entity.created_at),
        last_post_published: materialize_if_truthy(entity.last_post_published),
        last_updated: materialize_if_truthy(entity.last_updated),
    };

    validate_model(&model, ENTITY)?;
    Ok(model)
}

impl TryFrom<&BlogEntity> for BlogModel {
    type Error = ConversionError;

    fn try_from(entity: &BlogEntity) -> ConversionResult<Self> {
        to_blog_model(entity, false)
    }
}
