use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::Validate;

use crate::{
    types::models::blog::{
        owner::OrganisationRefModel,
        posts::{CompletedPost, UpcomingPost},
        settings::BlogSettings,
    },
    validations::object_id::validate_object_id,
};

#[derive(Debug, Serialize, Clone, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BlogModel {
    #[validate(custom(function = "validate_object_id"))]
    pub id: String,

    #[validate(nested)]
    pub org: OrganisationRefModel,

    pub settings: BlogSettings,

    pub upcoming_posts: Vec<UpcomingPost>,

    pub completed_posts: Vec<CompletedPost>,

    pub created_at: Option<DateTime<Utc>>,

    pub last_post_published: Option<DateTime<Utc>>,

    pub last_updated: Option<DateTime<Utc>>,
}
