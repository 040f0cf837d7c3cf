use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::posts::ProductRef;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    Article,
    Listicle,
    Guide,
    ProductSpotlight,
}

/// Whether generated posts land as drafts or go live immediately.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PublishMode {
    Draft,
    Active,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageSource {
    Stock,
    Product,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FormatSelection {
    #[serde(default)]
    pub all_enabled: bool,

    #[serde(default)]
    pub enabled: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductSelection {
    #[serde(default)]
    pub all_enabled: bool,

    #[serde(default)]
    pub approved: Vec<ProductRef>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct WeeklySchedule {
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImagePreferences {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub source: Option<ImageSource>,

    #[serde(default)]
    pub query: Option<String>,
}

/// Generation settings of a blog. Stored and returned as-is.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogSettings {
    pub content_type: Option<ContentType>,

    pub topic_prompt: Option<String>,

    pub formats: FormatSelection,

    pub products: ProductSelection,

    pub keywords: Vec<String>,

    pub author: Option<String>,

    pub shopify_blog_id: Option<String>,

    pub language: Option<String>,

    pub publish_mode: Option<PublishMode>,

    pub schedule: WeeklySchedule,

    pub title_prompt: Option<String>,

    pub title_max_length: Option<u32>,

    pub body_prompt: Option<String>,

    pub body_max_words: Option<u32>,

    pub images: ImagePreferences,
}
