//! Terminal colors derived from the form palette

use crate::state::{FormConfig, Theme};
use ratatui::style::Color;

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (alpha ignored)
pub fn hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (slot, c) in rgb.iter_mut().zip(hex.chars()) {
                let v = channel(&c.to_string())?;
                *slot = v * 17;
            }
            Some(Color::Rgb(rgb[0], rgb[1], rgb[2]))
        }
        6 | 8 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

/// Colors used to draw the form itself (canvas and preview)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormColors {
    pub background: Color,
    pub text: Color,
    pub primary: Color,
    pub muted: Color,
}

impl FormColors {
    pub fn for_form(form: &FormConfig) -> Self {
        let (background, text) = form.theme.palette_colors();
        let muted = match form.theme {
            Theme::Light => Color::Rgb(0x6b, 0x72, 0x80),
            Theme::Dark => Color::Rgb(0x9c, 0xa3, 0xaf),
        };
        Self {
            background: hex_color(&form.styles.background_color)
                .or_else(|| hex_color(background))
                .unwrap_or(Color::Reset),
            text: hex_color(&form.styles.text_color)
                .or_else(|| hex_color(text))
                .unwrap_or(Color::Reset),
            primary: hex_color(&form.styles.primary_color).unwrap_or(Color::Blue),
            muted,
        }
    }
}
