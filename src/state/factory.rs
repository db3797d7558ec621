//! Element factory
//!
//! Every element enters a form through [`create_element`] (or
//! [`duplicate_element`] for copies), so ids are always fresh.

use super::element::{ElementKind, ElementStyles, FormElement};

/// Generate a new, never reused element identifier
pub fn generate_element_id() -> String {
    format!("element-{}", uuid::Uuid::new_v4())
}

/// Build a well-formed element of the given kind with its defaults
pub fn create_element(kind: ElementKind) -> FormElement {
    let label = kind.default_label();
    let mut element = FormElement {
        id: generate_element_id(),
        kind,
        label: label.to_string(),
        placeholder: None,
        required: false,
        options: None,
        validation: None,
        styles: Some(ElementStyles::default()),
    };

    match kind {
        ElementKind::Text
        | ElementKind::Email
        | ElementKind::Password
        | ElementKind::Number
        | ElementKind::Date => {
            element.placeholder = Some(format!("Enter {}", label.to_lowercase()));
        }
        ElementKind::Textarea => {
            element.placeholder = Some("Enter your message".to_string());
        }
        ElementKind::Radio | ElementKind::Select => {
            element.options = Some(vec![
                "Option 1".to_string(),
                "Option 2".to_string(),
                "Option 3".to_string(),
            ]);
        }
        ElementKind::Checkbox => element.label = "Check this box".to_string(),
        ElementKind::File => element.label = "Upload File".to_string(),
        ElementKind::Submit => element.label = "Submit Form".to_string(),
    }

    element
}

/// Copy an element under a fresh id, marking the label as a copy
pub fn duplicate_element(source: &FormElement) -> FormElement {
    FormElement {
        id: generate_element_id(),
        label: format!("{} (Copy)", source.label),
        ..source.clone()
    }
}
