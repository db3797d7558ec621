//! Values typed into the live preview
//!
//! Preview input is throwaway: it never flows back into the form and is reset
//! whenever preview mode is entered.

use super::element::{ElementKind, FormElement};
use std::collections::HashMap;

/// Acknowledgment shown when the preview form is submitted
pub const SUBMIT_ACKNOWLEDGMENT: &str = "Form submitted! (This is a demo)";

/// Type-safe preview values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Choice(Option<usize>),
    /// Controls that hold no value (submit, file picker)
    Empty,
}

impl FieldValue {
    fn initial(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Checkbox => FieldValue::Flag(false),
            ElementKind::Radio | ElementKind::Select => FieldValue::Choice(None),
            ElementKind::File | ElementKind::Submit => FieldValue::Empty,
            _ => FieldValue::Text(String::new()),
        }
    }
}

/// One preview control's value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewField {
    pub kind: ElementKind,
    pub value: FieldValue,
}

impl PreviewField {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            value: FieldValue::initial(kind),
        }
    }

    /// Push a character, honoring the control's input rules
    pub fn push_char(&mut self, c: char) {
        let accepted = match self.kind {
            ElementKind::Number => c.is_ascii_digit() || c == '.' || c == '-',
            ElementKind::Date => c.is_ascii_digit() || c == '-',
            _ => true,
        };
        if let FieldValue::Text(s) = &mut self.value {
            if accepted && (c != '\n' || self.kind == ElementKind::Textarea) {
                s.push(c);
            }
        }
    }

    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Space on a choice control: flip a checkbox or advance the choice
    pub fn toggle(&mut self, option_count: usize) {
        match &mut self.value {
            FieldValue::Flag(checked) => *checked = !*checked,
            FieldValue::Choice(choice) => {
                *choice = match *choice {
                    _ if option_count == 0 => None,
                    None => Some(0),
                    Some(i) if i + 1 >= option_count => None,
                    Some(i) => Some(i + 1),
                };
            }
            FieldValue::Text(_) | FieldValue::Empty => {}
        }
    }

    pub fn clear(&mut self) {
        self.value = FieldValue::initial(self.kind);
    }

    pub fn text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self.value, FieldValue::Flag(true))
    }

    pub fn choice(&self) -> Option<usize> {
        match self.value {
            FieldValue::Choice(choice) => choice,
            _ => None,
        }
    }
}

/// Preview session: values per element plus the focused control
#[derive(Debug, Clone, Default)]
pub struct PreviewState {
    fields: HashMap<String, PreviewField>,
    pub active_index: usize,
    pub acknowledgment: Option<String>,
}

impl PreviewState {
    pub fn reset(&mut self) {
        self.fields.clear();
        self.active_index = 0;
        self.acknowledgment = None;
    }

    pub fn field(&self, element_id: &str) -> Option<&PreviewField> {
        self.fields.get(element_id)
    }

    pub fn field_mut(&mut self, element: &FormElement) -> &mut PreviewField {
        self.fields
            .entry(element.id.clone())
            .or_insert_with(|| PreviewField::new(element.kind))
    }

    pub fn next(&mut self, count: usize) {
        if count > 0 {
            self.active_index = (self.active_index + 1) % count;
        }
    }

    pub fn prev(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        if self.active_index == 0 {
            self.active_index = count - 1;
        } else {
            self.active_index -= 1;
        }
    }

    /// Intercept submission: no navigation, only an acknowledgment
    pub fn submit(&mut self) -> &str {
        self.acknowledgment
            .insert(SUBMIT_ACKNOWLEDGMENT.to_string())
            .as_str()
    }
}
