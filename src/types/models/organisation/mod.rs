pub mod billing;
pub mod defaults;
pub mod shopify;
