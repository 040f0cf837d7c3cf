pub mod date_utils;
pub mod id_utils;
pub mod validation_utils;
