use url::form_urlencoded;
use crate::models::form_element::FormElement;

/// Parse `a=1&b=2` into form elements, keeping order, duplicates and empty values.
pub fn parse_form_data(form_data_str: &str) -> Vec<FormElement> {
    form_urlencoded::parse(form_data_str.as_bytes())
        .map(|(name, value)| FormElement::new(name, value))
        .collect()
}

/// Parse one `name=value` field. Without `=` the element has a name and no value.
pub fn parse_field(field: &str) -> FormElement {
    match field.split_once('=') {
        Some((name, value)) => FormElement::new(name.trim(), value),
        None => FormElement::named(field.trim()),
    }
}
