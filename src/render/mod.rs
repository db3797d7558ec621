//! Shared per-element view logic
//!
//! Both the terminal canvas and the HTML generator go through [`describe`], so
//! the control chosen for a kind, the option order and the required marker can
//! never differ between what is edited, previewed and exported.

mod markup;

pub use markup::escape_html;

use crate::state::{ElementKind, FormElement};

/// Entry shown first in every dropdown
pub const SELECT_PROMPT: &str = "Select an option";

/// Rows of a multi-line text control
pub const TEXTAREA_ROWS: u8 = 4;

/// How controls behave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Builder canvas: controls accept no input
    Inert,
    /// Preview and export: a normal live form
    Interactive,
}

/// Where the element label goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPlacement {
    /// Above the control
    Block,
    /// Next to the control, bound to it (checkbox)
    Inline,
    /// Not rendered separately; the label is the control's text (button)
    Hidden,
}

/// Control family for one kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ControlFamily {
    Input(&'static str),
    TextArea,
    Checkbox,
    RadioGroup,
    Select,
    Submit,
}

/// Per-kind rendering policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct KindPolicy {
    family: ControlFamily,
    label: LabelPlacement,
    shows_placeholder: bool,
}

const fn policy(kind: ElementKind) -> KindPolicy {
    use ControlFamily::*;
    use LabelPlacement::*;

    let (family, label, shows_placeholder) = match kind {
        ElementKind::Text => (Input("text"), Block, true),
        ElementKind::Email => (Input("email"), Block, true),
        ElementKind::Password => (Input("password"), Block, true),
        ElementKind::Number => (Input("number"), Block, true),
        ElementKind::Date => (Input("date"), Block, false),
        ElementKind::File => (Input("file"), Block, false),
        ElementKind::Textarea => (TextArea, Block, true),
        ElementKind::Checkbox => (Checkbox, Inline, false),
        ElementKind::Radio => (RadioGroup, Block, false),
        ElementKind::Select => (Select, Block, false),
        ElementKind::Submit => (Submit, Hidden, false),
    };
    KindPolicy {
        family,
        label,
        shows_placeholder,
    }
}

/// Presentational control description
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    Input {
        input_type: &'static str,
        placeholder: Option<String>,
    },
    TextArea {
        rows: u8,
        placeholder: Option<String>,
    },
    Checkbox,
    RadioGroup {
        name: String,
        options: Vec<String>,
    },
    Select {
        prompt: &'static str,
        options: Vec<String>,
    },
    SubmitButton,
}

/// Everything needed to draw one element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementView {
    pub id: String,
    pub label: String,
    pub label_placement: LabelPlacement,
    pub required: bool,
    pub interactive: bool,
    pub control: Control,
}

impl ElementView {
    /// Option strings in render order (empty for non-choice controls)
    #[cfg(test)]
    pub fn options(&self) -> &[String] {
        match &self.control {
            Control::RadioGroup { options, .. } | Control::Select { options, .. } => options,
            _ => &[],
        }
    }
}

/// Describe one element for the given mode
pub fn describe(element: &FormElement, mode: RenderMode) -> ElementView {
    let policy = policy(element.kind);
    let placeholder = if policy.shows_placeholder {
        element.placeholder.clone()
    } else {
        None
    };
    let options = element.options().to_vec();

    let control = match policy.family {
        ControlFamily::Input(input_type) => Control::Input {
            input_type,
            placeholder,
        },
        ControlFamily::TextArea => Control::TextArea {
            rows: TEXTAREA_ROWS,
            placeholder,
        },
        ControlFamily::Checkbox => Control::Checkbox,
        ControlFamily::RadioGroup => Control::RadioGroup {
            name: element.id.clone(),
            options,
        },
        ControlFamily::Select => Control::Select {
            prompt: SELECT_PROMPT,
            options,
        },
        ControlFamily::Submit => Control::SubmitButton,
    };

    ElementView {
        id: element.id.clone(),
        label: element.label.clone(),
        label_placement: policy.label,
        required: element.effective_required(),
        interactive: mode == RenderMode::Interactive,
        control,
    }
}
