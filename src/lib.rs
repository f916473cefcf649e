//! Serialize a form's fields into a JSON object and submit it with an asynchronous POST
//! instead of the native form submission.

pub mod models;
pub mod core;

pub use crate::core::error::SubmitError;
pub use crate::core::form_to_json::{form_to_json, form_to_json_string, is_valid_element};
pub use crate::core::parse_form_data::{parse_field, parse_form_data};
pub use crate::core::submit::{handle_form_submit, FormSubmitter, JSON_CONTENT_TYPE};
pub use crate::models::form::Form;
pub use crate::models::form_element::{FormControl, FormElement};
pub use crate::models::submit_event::SubmitEvent;
pub use crate::models::submit_options::SubmitOptions;
