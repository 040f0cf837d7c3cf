use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumString};

/// Credentials of the store integration. Only leaves a conversion when the
/// caller asks for credentials.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShopifyConnection {
    pub api_key: String,

    pub domain: String,

    pub scopes: String,
}

impl fmt::Debug for ShopifyConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShopifyConnection")
            .field("api_key", &"<redacted>")
            .field("domain", &self.domain)
            .field("scopes", &self.scopes)
            .finish()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ShopifyConnectionStatus {
    Active,
    Pending,
    Inactive,
    Error,
}
