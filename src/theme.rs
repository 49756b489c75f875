//! Screen palette
//! Defaults match the account screen's light look; `[colors]` in the config
//! file can override any slot with a hex string.

use ratatui::style::Color;
use std::collections::BTreeMap;

/// Theme colors for the UI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub title: Color,
    pub text: Color,
    pub placeholder: Color, // Placeholders, hints, inactive chrome
    pub border: Color,
    pub focus: Color, // Border of the focused element
    pub button_bg: Color,
    pub button_fg: Color,
    pub link: Color,
    pub facebook: Color,
    pub google: Color,
    pub apple: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(255, 255, 255),
            title: Color::Rgb(29, 42, 50), // #1D2A32
            text: Color::Rgb(0, 0, 0),
            placeholder: Color::Rgb(107, 114, 128), // #6B7280
            border: Color::Rgb(0, 0, 0),
            focus: Color::Rgb(29, 78, 216), // #1D4ED8
            button_bg: Color::Rgb(0, 0, 0),
            button_fg: Color::Rgb(255, 255, 255),
            link: Color::Rgb(29, 78, 216),
            facebook: Color::Rgb(66, 103, 178), // #4267B2
            google: Color::Rgb(234, 67, 53), // #EA4335
            apple: Color::Rgb(0, 0, 0),
        }
    }
}

impl Theme {
    /// Build the theme from config overrides (slot name -> hex color)
    pub fn load(overrides: &BTreeMap<String, String>) -> Self {
        let mut theme = Self::default();

        for (key, value) in overrides {
            let Some(color) = Self::parse_hex_color(value) else {
                tracing::warn!("Ignoring color {}: not a hex color: {}", key, value);
                continue;
            };

            let slot = match key.as_str() {
                "background" => &mut theme.background,
                "title" => &mut theme.title,
                "text" => &mut theme.text,
                "placeholder" => &mut theme.placeholder,
                "border" => &mut theme.border,
                "focus" => &mut theme.focus,
                "button_bg" => &mut theme.button_bg,
                "button_fg" => &mut theme.button_fg,
                "link" => &mut theme.link,
                "facebook" => &mut theme.facebook,
                "google" => &mut theme.google,
                "apple" => &mut theme.apple,
                _ => {
                    tracing::warn!("Unknown color slot in config: {}", key);
                    continue;
                }
            };
            *slot = color;
        }

        theme
    }

    /// Parse a hex color string (#RRGGBB or #RGB)
    pub fn parse_hex_color(s: &str) -> Option<Color> {
        let s = s.trim().trim_start_matches('#');

        if !s.is_ascii() {
            return None;
        }

        if s.len() == 6 {
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        } else if s.len() == 3 {
            let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        } else {
            None
        }
    }
}
