pub mod blog;
pub mod organisation;
