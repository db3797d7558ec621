//! Standalone HTML document export

use crate::render::{describe, escape_html, RenderMode};
use crate::state::{FormConfig, Theme, DEFAULT_PRIMARY_COLOR, SUBMIT_ACKNOWLEDGMENT};

/// Fixed colors of the exported page per theme
struct PagePalette {
    page_background: &'static str,
    page_text: &'static str,
    shadow_alpha: &'static str,
    description: &'static str,
    label: &'static str,
    input_border: &'static str,
    input_background: &'static str,
    input_text: &'static str,
}

const LIGHT_PAGE: PagePalette = PagePalette {
    page_background: "#f9fafb",
    page_text: "#111827",
    shadow_alpha: "0.1",
    description: "#6b7280",
    label: "#374151",
    input_border: "#d1d5db",
    input_background: "#ffffff",
    input_text: "#111827",
};

const DARK_PAGE: PagePalette = PagePalette {
    page_background: "#111827",
    page_text: "#f9fafb",
    shadow_alpha: "0.5",
    description: "#d1d5db",
    label: "#e5e7eb",
    input_border: "#4b5563",
    input_background: "#374151",
    input_text: "#f9fafb",
};

fn page_palette(theme: Theme) -> &'static PagePalette {
    match theme {
        Theme::Light => &LIGHT_PAGE,
        Theme::Dark => &DARK_PAGE,
    }
}

/// True for `#rgb`, `#rrggbb` and `#rrggbbaa`
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Return `value` if it is a hex color, otherwise `fallback`
pub fn css_color<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if is_hex_color(value) {
        value
    } else {
        tracing::warn!(color = value, fallback, "invalid color in export");
        fallback
    }
}

/// Translucent variant of the primary color for the focus ring
fn ring_color(primary: &str) -> String {
    if primary.len() == 7 {
        format!("{primary}33")
    } else {
        primary.to_string()
    }
}

fn style_block(form: &FormConfig) -> String {
    let page = page_palette(form.theme);
    let (theme_background, theme_text) = form.theme.palette_colors();
    let primary = css_color(&form.styles.primary_color, DEFAULT_PRIMARY_COLOR);
    let card = css_color(&form.styles.background_color, theme_background);
    let text = css_color(&form.styles.text_color, theme_text);
    let ring = ring_color(primary);

    format!(
        r#"    * {{
      margin: 0;
      padding: 0;
      box-sizing: border-box;
    }}

    body {{
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
      background-color: {page_background};
      color: {page_text};
      padding: 2rem;
    }}

    .form-container {{
      max-width: 600px;
      margin: 0 auto;
      background: {card};
      color: {text};
      padding: 2rem;
      border-radius: 12px;
      box-shadow: 0 10px 25px rgba(0, 0, 0, {shadow_alpha});
    }}

    .form-title {{
      font-size: 1.875rem;
      font-weight: bold;
      margin-bottom: 0.5rem;
      color: {primary};
    }}

    .form-description {{
      color: {description};
      margin-bottom: 2rem;
    }}

    .form-group {{
      margin-bottom: 1.5rem;
    }}

    .form-label {{
      display: block;
      font-weight: 500;
      margin-bottom: 0.5rem;
      color: {label};
    }}

    .required::after {{
      content: ' *';
      color: #ef4444;
    }}

    .form-input, .form-textarea, .form-select {{
      width: 100%;
      padding: 0.75rem;
      border: 2px solid {input_border};
      border-radius: 8px;
      background: {input_background};
      color: {input_text};
      transition: border-color 0.2s;
    }}

    .form-input:focus, .form-textarea:focus, .form-select:focus {{
      outline: none;
      border-color: {primary};
      box-shadow: 0 0 0 3px {ring};
    }}

    .checkbox-item, .radio-item {{
      display: flex;
      align-items: center;
      gap: 0.5rem;
    }}

    .radio-group {{
      display: flex;
      flex-direction: column;
      gap: 0.75rem;
    }}

    .submit-btn {{
      background: {primary};
      color: white;
      padding: 0.75rem 2rem;
      border: none;
      border-radius: 8px;
      font-weight: 500;
      cursor: pointer;
      transition: filter 0.2s;
    }}

    .submit-btn:hover {{
      filter: brightness(0.92);
    }}
"#,
        page_background = page.page_background,
        page_text = page.page_text,
        shadow_alpha = page.shadow_alpha,
        description = page.description,
        label = page.label,
        input_border = page.input_border,
        input_background = page.input_background,
        input_text = page.input_text,
    )
}

/// Render the complete, self-contained document
pub fn generate_html(form: &FormConfig) -> String {
    let title = escape_html(&form.title);
    let mut body = String::new();
    body.push_str(&format!("      <h1 class=\"form-title\">{title}</h1>\n"));
    if let Some(description) = form.description.as_deref().filter(|d| !d.is_empty()) {
        body.push_str(&format!(
            "      <p class=\"form-description\">{}</p>\n",
            escape_html(description)
        ));
    }
    for element in &form.elements {
        body.push_str(&describe(element, RenderMode::Interactive).to_html(3));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <style>
{styles}  </style>
</head>
<body>
  <div class="form-container">
    <form id="generated-form">
{body}    </form>
  </div>

  <script>
    document.getElementById('generated-form').addEventListener('submit', function(e) {{
      e.preventDefault();
      alert('{SUBMIT_ACKNOWLEDGMENT}');
    }});
  </script>
</body>
</html>
"#,
        styles = style_block(form),
    )
}
