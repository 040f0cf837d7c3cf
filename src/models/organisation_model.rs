use bson::{Document, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{ConversionError, ConversionResult},
    types::models::organisation::{
        billing::BillingPlanStatus,
        shopify::{ShopifyConnection, ShopifyConnectionStatus},
    },
    validations::object_id::validate_document_identity,
};

const ENTITY: &str = "Organisation";

/// Organisation as held by storage.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrganisationEntity {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(default)]
    pub country: Option<String>,

    #[serde(default)]
    pub locale: Option<String>,

    #[serde(default)]
    pub contact_email: Option<String>,

    #[serde(default)]
    pub reviewed: Option<bool>,

    #[serde(default)]
    pub review_surface: Option<String>,

    #[serde(default)]
    pub rating: Option<f64>,

    #[serde(default)]
    pub plan: Option<String>,

    #[serde(default)]
    pub website: Option<String>,

    #[serde(default)]
    pub topics: Option<Vec<String>>,

    #[serde(default)]
    pub shopify_connection: Option<ShopifyConnection>,

    #[serde(default)]
    pub shopify_connection_status: Option<ShopifyConnectionStatus>,

    #[serde(default)]
    pub billing_plan_status: Option<BillingPlanStatus>,

    #[serde(default)]
    pub billing_subscription_id: Option<String>,

    #[serde(default)]
    pub billing_plan_handle: Option<String>,

    #[serde(default)]
    pub billing_updated_at: Option<bson::DateTime>,

    #[serde(default)]
    pub created_at: Option<bson::DateTime>,

    #[serde(default)]
    pub settings_last_synced: Option<bson::DateTime>,
}

impl OrganisationEntity {
    pub fn from_document(document: Document) -> ConversionResult<Self> {
        validate_document_identity(&document)
            .map_err(|errors| ConversionError::validation(ENTITY, errors))?;

        bson::from_document(document).map_err(|source| ConversionError::Decode {
            entity: ENTITY,
            source,
        })
    }
}
