pub mod owner;
pub mod posts;
pub mod settings;
