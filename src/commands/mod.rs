mod create_sample;
mod export_json;
mod schema;
mod validate;

pub use create_sample::create_sample_command;
pub use export_json::export_json_command;
pub use schema::schema_command;
pub use validate::{ReportFormat, validate_command};
