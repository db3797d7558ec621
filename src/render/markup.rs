//! HTML serialization of element views

use super::{Control, ElementView, LabelPlacement};

/// Escape text for use in HTML content and double-quoted attributes
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn line(out: &mut String, depth: usize, text: &str) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(text);
    out.push('\n');
}

impl ElementView {
    /// Trailing attributes shared by every form control
    fn control_flags(&self) -> String {
        let mut flags = String::new();
        if self.required {
            flags.push_str(" required");
        }
        if !self.interactive {
            flags.push_str(" disabled");
        }
        flags
    }

    fn label_html(&self) -> String {
        let class = if self.required {
            "form-label required"
        } else {
            "form-label"
        };
        // A radio group has no control with the element id; each item has its own label
        let target = match self.control {
            Control::RadioGroup { .. } => String::new(),
            _ => format!(" for=\"{}\"", escape_html(&self.id)),
        };
        format!(
            "<label class=\"{class}\"{target}>{}</label>",
            escape_html(&self.label)
        )
    }

    /// Serialize as an indented `form-group` block
    pub fn to_html(&self, depth: usize) -> String {
        let id = escape_html(&self.id);
        let flags = self.control_flags();
        let mut out = String::new();

        line(&mut out, depth, "<div class=\"form-group\">");
        if self.label_placement == LabelPlacement::Block {
            line(&mut out, depth + 1, &self.label_html());
        }

        match &self.control {
            Control::Input {
                input_type,
                placeholder,
            } => {
                let placeholder = placeholder
                    .as_deref()
                    .map(|p| format!(" placeholder=\"{}\"", escape_html(p)))
                    .unwrap_or_default();
                line(
                    &mut out,
                    depth + 1,
                    &format!(
                        "<input type=\"{input_type}\" id=\"{id}\" name=\"{id}\" class=\"form-input\"{placeholder}{flags} />"
                    ),
                );
            }
            Control::TextArea { rows, placeholder } => {
                let placeholder = placeholder
                    .as_deref()
                    .map(|p| format!(" placeholder=\"{}\"", escape_html(p)))
                    .unwrap_or_default();
                line(
                    &mut out,
                    depth + 1,
                    &format!(
                        "<textarea id=\"{id}\" name=\"{id}\" class=\"form-textarea\" rows=\"{rows}\"{placeholder}{flags}></textarea>"
                    ),
                );
            }
            Control::Checkbox => {
                let disabled = if self.interactive { "" } else { " disabled" };
                line(&mut out, depth + 1, "<div class=\"checkbox-item\">");
                line(
                    &mut out,
                    depth + 2,
                    &format!("<input type=\"checkbox\" id=\"{id}\" name=\"{id}\"{disabled} />"),
                );
                line(
                    &mut out,
                    depth + 2,
                    &format!("<label for=\"{id}\">{}</label>", escape_html(&self.label)),
                );
                line(&mut out, depth + 1, "</div>");
            }
            Control::RadioGroup { name, options } => {
                let name = escape_html(name);
                line(&mut out, depth + 1, "<div class=\"radio-group\">");
                for (index, option) in options.iter().enumerate() {
                    let option = escape_html(option);
                    line(&mut out, depth + 2, "<div class=\"radio-item\">");
                    line(
                        &mut out,
                        depth + 3,
                        &format!(
                            "<input type=\"radio\" id=\"{id}_{index}\" name=\"{name}\" value=\"{option}\"{flags} />"
                        ),
                    );
                    line(
                        &mut out,
                        depth + 3,
                        &format!("<label for=\"{id}_{index}\">{option}</label>"),
                    );
                    line(&mut out, depth + 2, "</div>");
                }
                line(&mut out, depth + 1, "</div>");
            }
            Control::Select { prompt, options } => {
                line(
                    &mut out,
                    depth + 1,
                    &format!("<select id=\"{id}\" name=\"{id}\" class=\"form-select\"{flags}>"),
                );
                line(
                    &mut out,
                    depth + 2,
                    &format!("<option value=\"\">{}</option>", escape_html(prompt)),
                );
                for option in options {
                    let option = escape_html(option);
                    line(
                        &mut out,
                        depth + 2,
                        &format!("<option value=\"{option}\">{option}</option>"),
                    );
                }
                line(&mut out, depth + 1, "</select>");
            }
            Control::SubmitButton => {
                let (button_type, disabled) = if self.interactive {
                    ("submit", "")
                } else {
                    ("button", " disabled")
                };
                line(
                    &mut out,
                    depth + 1,
                    &format!(
                        "<button type=\"{button_type}\" class=\"submit-btn\"{disabled}>{}</button>",
                        escape_html(&self.label)
                    ),
                );
            }
        }

        line(&mut out, depth, "</div>");
        out
    }
}
