pub mod blog_model;
pub mod organisation_model;
