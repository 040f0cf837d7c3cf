use super::{billing::BillingPlanStatus, shopify::ShopifyConnectionStatus};

pub fn default_connection_status() -> ShopifyConnectionStatus {
    ShopifyConnectionStatus::Inactive
}

pub fn default_billing_plan_status() -> BillingPlanStatus {
    BillingPlanStatus::Inactive
}
