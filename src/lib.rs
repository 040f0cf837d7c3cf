//! Storage-to-client conversion of organisation and blog records.
//!
//! Stored entities come from the document store with binary ids and BSON
//! datetimes; models are what the API hands out, with string ids, defaulted
//! enums and the store credentials withheld unless explicitly requested.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod services;
pub mod types;
pub mod utils;
pub mod validations;

pub use errors::{ConversionError, ConversionResult};
pub use models::{blog_model::BlogEntity, organisation_model::OrganisationEntity};
pub use services::{blog_service::to_blog_model, organisation_service::to_organisation_model};
pub use types::models::blog::owner::{OrganisationRef, OrganisationRefModel};
pub use types::responses::{blog_response::BlogModel, organisation_response::OrganisationModel};
