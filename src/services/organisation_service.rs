use crate::{
    constants::CREDENTIAL_NOTICE_TARGET,
    errors::{ConversionError, ConversionResult},
    models::organisation_model::OrganisationEntity,
    types::{
        models::organisation::defaults::{default_billing_plan_status, default_connection_status},
        responses::organisation_response::OrganisationModel,
    },
    utils::{
        date_utils::{materialize_if_present, materialize_or_now},
        id_utils::object_id_to_hex,
        validation_utils::validate_model,
    },
    validations::object_id::missing_identity,
};

const ENTITY: &str = "Organisation";

/// Converts a stored organisation into its client-facing model.
///
/// The credential bundle is only copied when `include_credentials` is set;
/// the store domain is exposed through `shopify_site` regardless.
pub fn to_organisation_model(
    entity: &OrganisationEntity,
    include_credentials: bool,
) -> ConversionResult<OrganisationModel> {
    let id = entity
        .id
        .as_ref()
        .map(object_id_to_hex)
        .ok_or_else(|| ConversionError::validation(ENTITY, missing_identity()))?;

    log::debug!("Converting organisation {}", id);

    if include_credentials {
        log::info!(
            target: (*CREDENTIAL_NOTICE_TARGET).as_str(),
            "Including credentials for organisation {}",
            id
        );
    }

    let shopify_connection = if include_credentials {
        entity.shopify_connection.clone()
    } else {
        None
    };

    let model = OrganisationModel {
        id,
        country: entity.country.clone(),
        locale: entity.locale.clone(),
        contact_email: entity.contact_email.clone(),
        reviewed: entity.reviewed,
        review_surface: entity.review_surface.clone(),
        rating: entity.rating,
        plan: entity.plan.clone(),
        website: entity.website.clone(),
        topics: entity.topics.clone(),
        created_at: materialize_or_now(entity.created_at),
        settings_last_synced: materialize_if_present(entity.settings_last_synced),
        shopify_connection,
        shopify_connection_status: entity
            .shopify_connection_status
            .unwrap_or_else(default_connection_status),
        shopify_site: entity
            .shopify_connection
            .as_ref()
            .map(|connection| connection.domain.clone()),
        billing_plan_status: entity
            .billing_plan_status
            .unwrap_or_else(default_billing_plan_status),
        billing_subscription_id: entity.billing_subscription_id.clone(),
        billing_plan_handle: entity.billing_plan_handle.clone(),
        billing_updated_at: materialize_if_present(entity.billing_updated_at),
    };

    validate_model(&model, ENTITY)?;
    Ok(model)
}

impl TryFrom<&OrganisationEntity> for OrganisationModel {
    type Error = ConversionError;

    fn try_from(entity: &OrganisationEntity) -> ConversionResult<Self> {
        to_organisation_model(entity, false)
    }
}
