pub mod error;
pub mod form_to_json;
pub mod parse_form_data;
pub mod submit;
mod user_agent;
