use serde::{Deserialize, Serialize};

/// Anything that looks like a form control: it may carry a `name` and a `value`.
pub trait FormControl {
    fn name(&self) -> Option<&str>;
    fn value(&self) -> Option<&str>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormElement {
    pub name: Option<String>,
    pub value: Option<String>,
}

impl FormElement {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        FormElement {
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }

    // an element that only has a name, e.g. a submit button
    pub fn named(name: impl Into<String>) -> Self {
        FormElement {
            name: Some(name.into()),
            value: None,
        }
    }
}

impl FormControl for FormElement {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FormControl for (K, V) {
    fn name(&self) -> Option<&str> {
        Some(self.0.as_ref())
    }

    fn value(&self) -> Option<&str> {
        Some(self.1.as_ref())
    }
}
