use serde_json::{Map, Value};
use crate::models::form_element::FormControl;

/// An element contributes to the payload only if it has a non-empty name and a non-empty value.
pub fn is_valid_element<C: FormControl + ?Sized>(element: &C) -> bool {
    matches!(
        (element.name(), element.value()),
        (Some(name), Some(value)) if !name.is_empty() && !value.is_empty()
    )
}

/// Reduce a form's elements to a `name -> value` object.
///
/// Invalid elements are skipped and a later element with the same name overwrites an
/// earlier one. Never fails; an empty collection gives an empty object.
pub fn form_to_json<'a, C, I>(elements: I) -> Map<String, Value>
where
    C: FormControl + 'a,
    I: IntoIterator<Item = &'a C>,
{
    elements
        .into_iter()
        .fold(Map::new(), |mut data, element| {
            if let (true, Some(name), Some(value)) = (is_valid_element(element), element.name(), element.value()) {
                data.insert(name.to_owned(), Value::String(value.to_owned()));
            }
            data
        })
}

/// Same as [`form_to_json`], encoded as JSON text indented with two spaces.
pub fn form_to_json_string<'a, C, I>(elements: I) -> String
where
    C: FormControl + 'a,
    I: IntoIterator<Item = &'a C>,
{
    let data = Value::Object(form_to_json(elements));
    // a map of strings always encodes
    serde_json::to_string_pretty(&data).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::form_element::FormElement;
    use rstest::rstest;

    #[rstest]
    #[case(FormElement::new("email", "a@b.c"), true)]
    #[case(FormElement::new("email", ""), false)]
    #[case(FormElement::new("", "a@b.c"), false)]
    #[case(FormElement::named("submit"), false)]
    #[case(FormElement { name: None, value: Some("x".into()) }, false)]
    #[case(FormElement::default(), false)]
    #[case(FormElement::new("zero", "0"), true)]
    fn validity(#[case] element: FormElement, #[case] expected: bool) {
        assert_eq!(is_valid_element(&element), expected);
    }

    #[test]
    fn skips_invalid_and_last_duplicate_wins() {
        let elements = vec![
            FormElement::new("a", "1"),
            FormElement::new("b", ""),
            FormElement::new("a", "2"),
        ];
        let data = form_to_json(&elements);
        assert_eq!(data.len(), 1);
        assert_eq!(data.get("a"), Some(&Value::String("2".into())));
        assert!(!data.contains_key("b"));
    }

    #[test]
    fn invalid_duplicate_does_not_clear_earlier_value() {
        let elements = vec![FormElement::new("a", "1"), FormElement::new("a", "")];
        let data = form_to_json(&elements);
        assert_eq!(data.get("a"), Some(&Value::String("1".into())));
    }

    #[test]
    fn every_valid_element_is_present() {
        let elements = vec![
            FormElement::new("first", "Ada"),
            FormElement::new("last", "Lovelace"),
            FormElement::named("submit"),
            FormElement::new("email", "ada@example.com"),
        ];
        let data = form_to_json(&elements);
        assert_eq!(data.len(), 3);
        for element in elements.iter().filter(|e| is_valid_element(*e)) {
            let name = element.name.as_deref().unwrap();
            assert_eq!(data[name], Value::String(element.value.clone().unwrap()));
        }
    }

    #[test]
    fn empty_collection_is_empty_object() {
        let elements: Vec<FormElement> = Vec::new();
        assert!(form_to_json(&elements).is_empty());
        assert_eq!(form_to_json_string(&elements), "{}");
    }

    #[test]
    fn fully_invalid_collection_is_empty_object() {
        let elements = vec![FormElement::named("submit"), FormElement::new("", "x")];
        assert_eq!(form_to_json_string(&elements), "{}");
    }

    #[test]
    fn tuples_are_form_controls() {
        let pairs = [("name", "value"), ("skip", "")];
        let data = form_to_json(&pairs);
        assert_eq!(data.len(), 1);
        assert_eq!(data["name"], "value");
    }

    #[test]
    fn json_text_uses_two_space_indent() {
        let elements = vec![FormElement::new("a", "1")];
        assert_eq!(form_to_json_string(&elements), "{\n  \"a\": \"1\"\n}");
    }

    #[test]
    fn values_are_escaped() {
        let elements = vec![FormElement::new("quote", "say \"hi\"\n")];
        let text = form_to_json_string(&elements);
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["quote"], "say \"hi\"\n");
    }
}
