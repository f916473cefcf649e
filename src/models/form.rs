use serde::{Deserialize, Serialize};
use crate::models::form_element::FormElement;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    /// Where the form posts to. May be relative to the page hosting the form.
    pub action: String,
    pub elements: Vec<FormElement>,
}

impl Form {
    pub fn new(action: impl Into<String>) -> Self {
        Form {
            action: action.into(),
            elements: Vec::new(),
        }
    }

    pub fn with_elements(action: impl Into<String>, elements: Vec<FormElement>) -> Self {
        Form {
            action: action.into(),
            elements,
        }
    }

    pub fn push(&mut self, element: FormElement) {
        self.elements.push(element);
    }
}
