pub mod models;
pub mod responses;
pub mod validations;
