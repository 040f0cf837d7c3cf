//! End-to-end conversions from stored BSON documents to client JSON.

use blogflow_models::{
    BlogEntity, BlogModel, ConversionError, OrganisationEntity, OrganisationModel,
    OrganisationRefModel, to_blog_model, to_organisation_model, utils::id_utils::parse_object_id,
};
use bson::{doc, oid::ObjectId};
use chrono::{TimeZone, Utc};
use serde_json::{Value, json};

fn organisation_document(id: ObjectId) -> bson::Document {
    doc! {
        "_id": id,
        "country": "NZ",
        "locale": "en-NZ",
        "contactEmail": "owner@acme.test",
        "rating": 4.5,
        "topics": ["trail running", "hiking"],
        "shopifyConnection": {
            "apiKey": "shpat_0123",
            "domain": "acme.myshopify.com",
            "scopes": "read_products,write_content",
        },
        "shopifyConnectionStatus": "ACTIVE",
        "createdAt": bson::DateTime::from_chrono(Utc.with_ymd_and_hms(2022, 1, 5, 10, 0, 0).unwrap()),
    }
}

fn blog_document(id: ObjectId, org: bson::Bson) -> bson::Document {
    doc! {
        "_id": id,
        "org": org,
        "settings": {
            "contentType": "GUIDE",
            "topicPrompt": "Gear for alpine trips",
            "formats": { "allEnabled": false, "enabled": ["how-to", "list"] },
            "products": {
                "allEnabled": false,
                "approved": [{ "shopifyProductId": "gid://shopify/Product/1", "title": "Pack" }],
            },
            "keywords": ["alpine", "pack"],
            "publishMode": "DRAFT",
            "schedule": { "monday": true, "thursday": true },
            "titleMaxLength": 70,
            "images": { "enabled": true, "source": "STOCK" },
        },
        "upcomingPosts": [
            {
                "title": "Packing for the Alps",
                "image": {
                    "url": "https://images.example.com/alps.jpg",
                    "alt": "Snowy ridge",
                    "credit": "A. Climber",
                },
                "products": [{ "shopifyProductId": "gid://shopify/Product/1", "title": "Pack" }],
            },
            { "title": "Hut etiquette", "products": [] },
        ],
        "completedPosts": [
            { "title": "Layering 101", "shopifyArticleId": "gid://shopify/Article/9" },
        ],
        "lastPostPublished": bson::DateTime::from_chrono(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()),
    }
}

#[test]
fn organisation_json_hides_credentials_and_keeps_nulls() {
    let id = ObjectId::new();
    let entity = OrganisationEntity::from_document(organisation_document(id)).unwrap();

    let model = to_organisation_model(&entity, false).unwrap();
    let value = serde_json::to_value(&model).unwrap();

    assert_eq!(value["id"], json!(id.to_hex()));
    assert_eq!(value["shopifyConnection"], Value::Null);
    assert_eq!(value["shopifySite"], json!("acme.myshopify.com"));
    assert_eq!(value["shopifyConnectionStatus"], json!("ACTIVE"));
    assert_eq!(value["billingPlanStatus"], json!("INACTIVE"));
    assert_eq!(value["createdAt"], json!("2022-01-05T10:00:00Z"));

    let object = value.as_object().unwrap();
    for key in ["website", "plan", "reviewed", "settingsLastSynced", "billingUpdatedAt"] {
        assert_eq!(object.get(key), Some(&Value::Null), "{} should be null", key);
    }
}

#[test]
fn organisation_json_exposes_credentials_on_request() {
    let _ = blogflow_models::config::logger::init_logger();
    let entity = OrganisationEntity::from_document(organisation_document(ObjectId::new())).unwrap();

    let model = to_organisation_model(&entity, true).unwrap();
    let value = serde_json::to_value(&model).unwrap();

    assert_eq!(
        value["shopifyConnection"],
        json!({
            "apiKey": "shpat_0123",
            "domain": "acme.myshopify.com",
            "scopes": "read_products,write_content",
        })
    );
    assert_eq!(model.shopify_connection, entity.shopify_connection);
}

#[test]
fn string_identity_is_a_validation_failure() {
    let document = doc! { "_id": "65a1f0c2e4b0a1b2c3d4e5f6-not-an-oid", "country": "NZ" };

    let err = OrganisationEntity::from_document(document).unwrap_err();
    assert!(matches!(err, ConversionError::Validation { .. }));
    assert!(err.validation_errors().unwrap().field_errors().contains_key("id"));
}

#[test]
fn embedded_owner_with_string_identity_is_a_validation_failure() {
    let owner = bson::Bson::Document(doc! { "_id": "acme", "country": "NZ" });

    let err = BlogEntity::from_document(blog_document(ObjectId::new(), owner)).unwrap_err();
    assert!(matches!(
        err,
        ConversionError::Validation { entity: "Organisation", .. }
    ));
}

#[test]
fn mistyped_field_is_a_decode_failure() {
    let document = doc! { "_id": ObjectId::new(), "rating": "five stars" };

    let err = OrganisationEntity::from_document(document).unwrap_err();
    assert!(matches!(err, ConversionError::Decode { .. }));
}

#[test]
fn missing_identity_is_a_validation_failure() {
    let entity = OrganisationEntity::from_document(doc! { "country": "NZ" }).unwrap();

    let err = OrganisationModel::try_from(&entity).unwrap_err();
    assert!(matches!(err, ConversionError::Validation { .. }));
}

#[test]
fn blog_with_bare_owner_id_serializes_owner_as_string() {
    let org_id = ObjectId::new();
    let entity = BlogEntity::from_document(blog_document(ObjectId::new(), org_id.into())).unwrap();

    let model = BlogModel::try_from(&entity).unwrap();
    let value = serde_json::to_value(&model).unwrap();

    assert_eq!(model.org, OrganisationRefModel::Unresolved(org_id.to_hex()));
    assert_eq!(value["org"], json!(org_id.to_hex()));
    assert_eq!(parse_object_id(model.org.id()).unwrap(), org_id);
}

#[test]
fn blog_with_embedded_owner_converts_owner() {
    let org_id = ObjectId::new();
    let owner = bson::Bson::Document(organisation_document(org_id));
    let entity = BlogEntity::from_document(blog_document(ObjectId::new(), owner)).unwrap();

    let hidden = serde_json::to_value(to_blog_model(&entity, false).unwrap()).unwrap();
    assert_eq!(hidden["org"]["id"], json!(org_id.to_hex()));
    assert_eq!(hidden["org"]["shopifyConnection"], Value::Null);
    assert_eq!(hidden["org"]["shopifySite"], json!("acme.myshopify.com"));

    let shown = serde_json::to_value(to_blog_model(&entity, true).unwrap()).unwrap();
    assert_eq!(shown["org"]["shopifyConnection"]["apiKey"], json!("shpat_0123"));
}

#[test]
fn blog_settings_and_posts_pass_through() {
    let entity =
        BlogEntity::from_document(blog_document(ObjectId::new(), ObjectId::new().into())).unwrap();

    let value = serde_json::to_value(to_blog_model(&entity, false).unwrap()).unwrap();

    assert_eq!(value["settings"]["contentType"], json!("GUIDE"));
    assert_eq!(value["settings"]["publishMode"], json!("DRAFT"));
    assert_eq!(value["settings"]["schedule"]["monday"], json!(true));
    assert_eq!(value["settings"]["schedule"]["friday"], json!(false));
    assert_eq!(value["settings"]["formats"]["enabled"], json!(["how-to", "list"]));

    let upcoming = value["upcomingPosts"].as_array().unwrap();
    assert_eq!(upcoming.len(), 2);
    assert_eq!(upcoming[0]["title"], json!("Packing for the Alps"));
    assert_eq!(upcoming[0]["image"]["credit"], json!("A. Climber"));
    assert_eq!(upcoming[1]["title"], json!("Hut etiquette"));
    assert_eq!(upcoming[1]["image"], Value::Null);

    assert_eq!(
        value["completedPosts"][0]["shopifyArticleId"],
        json!("gid://shopify/Article/9")
    );
    assert_eq!(value["lastPostPublished"], json!("2024-02-01T00:00:00Z"));
    assert_eq!(value["createdAt"], Value::Null);
    assert_eq!(value["lastUpdated"], Value::Null);
}

#[test]
fn blog_payload_content_is_passed_through_unjudged() {
    let mut document = blog_document(ObjectId::new(), ObjectId::new().into());
    document.insert(
        "upcomingPosts",
        vec![bson::Bson::Document(doc! {
            "title": "Relative image",
            "image": { "url": "/images/a.jpg" },
        })],
    );
    document
        .get_document_mut("settings")
        .unwrap()
        .insert("titleMaxLength", 0);

    let entity = BlogEntity::from_document(document).unwrap();
    let value = serde_json::to_value(to_blog_model(&entity, false).unwrap()).unwrap();

    assert_eq!(value["upcomingPosts"][0]["image"]["url"], json!("/images/a.jpg"));
    assert_eq!(value["settings"]["titleMaxLength"], json!(0));
}
