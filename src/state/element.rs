//! Form element model

use serde::{Deserialize, Serialize};

/// The closed set of field kinds an element can be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Textarea,
    Email,
    Password,
    Number,
    Date,
    Checkbox,
    Radio,
    Select,
    File,
    Submit,
}

impl ElementKind {
    /// Every kind, in palette order
    pub const ALL: [ElementKind; 11] = [
        ElementKind::Text,
        ElementKind::Textarea,
        ElementKind::Email,
        ElementKind::Password,
        ElementKind::Number,
        ElementKind::Date,
        ElementKind::Checkbox,
        ElementKind::Radio,
        ElementKind::Select,
        ElementKind::File,
        ElementKind::Submit,
    ];

    /// Canonical label given to a freshly created element of this kind
    pub fn default_label(&self) -> &'static str {
        match self {
            Self::Text => "Text Input",
            Self::Textarea => "Text Area",
            Self::Email => "Email Address",
            Self::Password => "Password",
            Self::Number => "Number Input",
            Self::Date => "Date Picker",
            Self::Checkbox => "Checkbox",
            Self::Radio => "Radio Buttons",
            Self::Select => "Dropdown",
            Self::File => "File Upload",
            Self::Submit => "Submit Button",
        }
    }

    /// Short name shown in the palette
    pub fn palette_label(&self) -> &'static str {
        match self {
            Self::Text => "Text Input",
            Self::Textarea => "Text Area",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::Number => "Number",
            Self::Date => "Date",
            Self::Checkbox => "Checkbox",
            Self::Radio => "Radio Group",
            Self::Select => "Dropdown",
            Self::File => "File Upload",
            Self::Submit => "Submit Button",
        }
    }

    /// One-line description shown under the palette entry
    pub fn description(&self) -> &'static str {
        match self {
            Self::Text => "Single line text input",
            Self::Textarea => "Multi-line text input",
            Self::Email => "Email address input",
            Self::Password => "Password input field",
            Self::Number => "Numeric input field",
            Self::Date => "Date picker input",
            Self::Checkbox => "Single checkbox option",
            Self::Radio => "Multiple choice options",
            Self::Select => "Dropdown selection",
            Self::File => "File upload input",
            Self::Submit => "Form submission button",
        }
    }

    /// Whether elements of this kind carry an option list
    pub fn has_options(&self) -> bool {
        matches!(self, Self::Radio | Self::Select)
    }

    /// Whether the required flag has any effect on generated output
    pub fn honors_required(&self) -> bool {
        !matches!(self, Self::Checkbox | Self::Submit)
    }

    /// Whether the placeholder is editable from the settings panel
    pub fn has_editable_placeholder(&self) -> bool {
        matches!(
            self,
            Self::Text | Self::Textarea | Self::Email | Self::Password | Self::Number
        )
    }
}

/// Validation rule kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleKind {
    Required,
    MinLength,
    MaxLength,
    Email,
    Min,
    Max,
    Pattern,
}

/// Bound attached to a validation rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    Number(f64),
    Text(String),
}

/// A declared validation rule. Carried through export, never evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRule {
    #[serde(rename = "type")]
    pub kind: RuleKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<RuleValue>,
    #[serde(default)]
    pub message: String,
}

/// Per-element style overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
}

/// One field of a form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormElement {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<Vec<ValidationRule>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<ElementStyles>,
}

impl FormElement {
    /// Options as a slice (empty for kinds without options)
    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or(&[])
    }

    /// Required flag as it applies to generated output
    pub fn effective_required(&self) -> bool {
        self.required && self.kind.honors_required()
    }

    /// Merge a partial update onto this element
    pub fn apply_patch(&mut self, patch: ElementPatch) {
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(placeholder) = patch.placeholder {
            self.placeholder = Some(placeholder);
        }
        if let Some(required) = patch.required {
            self.required = required;
        }
        if let Some(options) = patch.options {
            if self.kind.has_options() {
                self.options = Some(options);
            } else {
                tracing::warn!(id = %self.id, kind = ?self.kind, "ignoring options on kind without options");
            }
        }
        if let Some(validation) = patch.validation {
            self.validation = Some(validation);
        }
        if let Some(styles) = patch.styles {
            self.styles = Some(styles);
        }
    }
}

/// Partial element attributes for the update command
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementPatch {
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub required: Option<bool>,
    pub options: Option<Vec<String>>,
    pub validation: Option<Vec<ValidationRule>>,
    pub styles: Option<ElementStyles>,
}

impl ElementPatch {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    pub fn placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: Some(placeholder.into()),
            ..Default::default()
        }
    }

    pub fn required(required: bool) -> Self {
        Self {
            required: Some(required),
            ..Default::default()
        }
    }

    pub fn options(options: Vec<String>) -> Self {
        Self {
            options: Some(options),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample(kind: ElementKind) -> FormElement {
        FormElement {
            id: "element-1".to_string(),
            kind,
            label: "Sample".to_string(),
            placeholder: None,
            required: false,
            options: kind
                .has_options()
                .then(|| vec!["A".to_string(), "B".to_string()]),
            validation: None,
            styles: None,
        }
    }

    mod element_kind {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_all_has_eleven_distinct_kinds() {
            let kinds: std::collections::HashSet<_> = ElementKind::ALL.iter().collect();
            assert_eq!(kinds.len(), 11);
        }

        #[test]
        fn test_only_radio_and_select_have_options() {
            let with_options: Vec<_> = ElementKind::ALL
                .iter()
                .filter(|k| k.has_options())
                .collect();
            assert_eq!(with_options, vec![&ElementKind::Radio, &ElementKind::Select]);
        }

        #[test]
        fn test_checkbox_and_submit_ignore_required() {
            assert!(!ElementKind::Checkbox.honors_required());
            assert!(!ElementKind::Submit.honors_required());
            assert!(ElementKind::Text.honors_required());
            assert!(ElementKind::File.honors_required());
        }

        #[test]
        fn test_serializes_lowercase() {
            assert_eq!(
                serde_json::to_string(&ElementKind::Textarea).unwrap(),
                "\"textarea\""
            );
            assert_eq!(
                serde_json::from_str::<ElementKind>("\"select\"").unwrap(),
                ElementKind::Select
            );
        }
    }

    mod patch {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_patch_merges_only_given_fields() {
            let mut element = sample(ElementKind::Text);
            element.apply_patch(ElementPatch::label("Full Name"));
            assert_eq!(element.label, "Full Name");
            assert!(!element.required);

            element.apply_patch(ElementPatch::required(true));
            assert_eq!(element.label, "Full Name");
            assert!(element.required);
        }

        #[test]
        fn test_patch_options_ignored_for_kind_without_options() {
            let mut element = sample(ElementKind::Email);
            element.apply_patch(ElementPatch::options(vec!["x".to_string()]));
            assert!(element.options.is_none());
        }

        #[test]
        fn test_patch_options_replaces_list() {
            let mut element = sample(ElementKind::Radio);
            element.apply_patch(ElementPatch::options(vec!["Only".to_string()]));
            assert_eq!(element.options(), &["Only".to_string()]);
        }
    }

    mod serialization {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_element_uses_type_key() {
            let element = sample(ElementKind::Select);
            let json = serde_json::to_value(&element).unwrap();
            assert_eq!(json["type"], "select");
            assert_eq!(json["options"][1], "B");
            assert!(json.get("placeholder").is_none());
        }

        #[test]
        fn test_validation_rule_shape() {
            let json = r#"{"type":"minLength","value":3,"message":"Too short"}"#;
            let rule: ValidationRule = serde_json::from_str(json).unwrap();
            assert_eq!(rule.kind, RuleKind::MinLength);
            assert_eq!(rule.value, Some(RuleValue::Number(3.0)));
            assert_eq!(rule.message, "Too short");
        }

        #[test]
        fn test_effective_required() {
            let mut checkbox = sample(ElementKind::Checkbox);
            checkbox.required = true;
            assert!(!checkbox.effective_required());

            let mut text = sample(ElementKind::Text);
            text.required = true;
            assert!(text.effective_required());
        }
    }
}
