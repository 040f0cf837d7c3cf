pub mod blog_response;
pub mod organisation_response;
