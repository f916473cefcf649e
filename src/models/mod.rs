pub mod args;
pub mod form;
pub mod form_element;
pub mod submit_event;
pub mod submit_options;
