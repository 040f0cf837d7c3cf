use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::Validate;

use crate::{
    types::models::organisation::{
        billing::BillingPlanStatus,
        shopify::{ShopifyConnection, ShopifyConnectionStatus},
    },
    validations::object_id::validate_object_id,
};

/// Organisation as returned to clients.
///
/// Optional fields serialize as `null` rather than being omitted, and the
/// credential bundle is only populated when the caller asked for it.
/// `shopify_site` carries the store domain either way.
#[derive(Debug, Serialize, Clone, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrganisationModel {
    #[validate(custom(function = "validate_object_id"))]
    pub id: String,

    pub country: Option<String>,

    pub locale: Option<String>,

    pub contact_email: Option<String>,

    pub reviewed: Option<bool>,

    pub review_surface: Option<String>,

    pub rating: Option<f64>,

    pub plan: Option<String>,

    pub website: Option<String>,

    pub topics: Option<Vec<String>>,

    pub created_at: DateTime<Utc>,

    pub settings_last_synced: Option<DateTime<Utc>>,

    pub shopify_connection: Option<ShopifyConnection>,

    pub shopify_connection_status: ShopifyConnectionStatus,

    pub shopify_site: Option<String>,

    pub billing_plan_status: BillingPlanStatus,

    pub billing_subscription_id: Option<String>,

    pub billing_plan_handle: Option<String>,

    pub billing_updated_at: Option<DateTime<Utc>>,
}
