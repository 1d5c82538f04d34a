pub mod config;
pub mod form_schema;
pub mod paths;
