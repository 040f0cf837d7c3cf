use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductRef {
    pub shopify_product_id: String,

    pub title: String,

    #[serde(default)]
    pub handle: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,
}

/// Image picked for a post, with the attribution the source requires.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SourcedImage {
    pub url: String,

    #[serde(default)]
    pub alt: Option<String>,

    #[serde(default)]
    pub credit: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingPost {
    pub title: String,

    #[serde(default)]
    pub image: Option<SourcedImage>,

    #[serde(default)]
    pub products: Vec<ProductRef>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompletedPost {
    pub title: String,

    pub shopify_article_id: String,
}
