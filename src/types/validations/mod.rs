use validator::ValidationError;

pub type ValidationResult = Result<(), ValidationError>;
