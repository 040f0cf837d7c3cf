pub mod blog_service;
pub mod organisation_service;
