mod report;
mod validator;


// Re-export the main Validator
pub use report::{DataWarning, SchemaError, ValidationReport};
pub use validator::Validator;
