use crate::models::form::Form;

/// A submit event raised by a form. `current_target` is the form the handler is bound to.
#[derive(Debug, Clone)]
pub struct SubmitEvent {
    pub current_target: Form,
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new(current_target: Form) -> Self {
        SubmitEvent {
            current_target,
            default_prevented: false,
        }
    }

    /// Suppress the native submission (and the page navigation that comes with it).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_not_prevented() {
        let mut event = SubmitEvent::new(Form::new("/submit"));
        assert!(!event.is_default_prevented());
        event.prevent_default();
        assert!(event.is_default_prevented());
    }
}
