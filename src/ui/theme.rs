use anyhow::{Result, anyhow};
use ratatui::prelude::*;

/// Runtime theme with direct field access for all UI elements
#[derive(Debug, Clone)]
pub struct Theme {
    // === Default Colors ===
    pub default_fg: Color,
    pub default_bg: Color,

    // === Panel Backgrounds ===
    pub list_bg: Color,
    pub preview_bg: Color,
    pub selection_bg: Color,

    // === Search Header ===
    pub search_input: Style,
    pub item_count: Style,

    // === Action List ===
    pub section_title: Style,
    pub action_name: Style,
    pub action_name_selected: Style,
    pub accessory: Style,
    pub accessory_selected: Style,
    pub synthetic_entry: Style,

    // === Preview Panel ===
    pub preview_label: Style,
    pub preview_text: Style,

    // === Status Bar ===
    pub status_key: Style,
    pub status_desc: Style,
    pub status_bar_bg: Color,

    // === Divider ===
    pub divider: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Load a built-in theme by name
    pub fn load(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "dark" => Ok(Self::dark()),
            "light" => Ok(Self::light()),
            other => Err(anyhow!(
                "Unknown theme '{}'. Available themes: dark, light",
                other
            )),
        }
    }

    /// Dark theme (Catppuccin Mocha palette)
    pub fn dark() -> Self {
        let fg = Color::Rgb(205, 214, 244);
        let bg = Color::Rgb(30, 30, 46);
        let overlay = Color::Rgb(127, 132, 156);
        let mauve = Color::Rgb(203, 166, 247);
        let blue = Color::Rgb(137, 180, 250);
        let green = Color::Rgb(166, 227, 161);
        let yellow = Color::Rgb(249, 226, 175);

        Theme {
            default_fg: fg,
            default_bg: bg,

            list_bg: bg,
            preview_bg: bg,
            selection_bg: Color::Rgb(69, 71, 90),

            search_input: Style::default().fg(fg),
            item_count: Style::default().fg(overlay),

            section_title: Style::default()
                .fg(mauve)
                .add_modifier(Modifier::BOLD),
            action_name: Style::default().fg(fg),
            action_name_selected: Style::default().fg(fg).add_modifier(Modifier::BOLD),
            accessory: Style::default().fg(overlay),
            accessory_selected: Style::default().fg(green),
            synthetic_entry: Style::default().fg(yellow).add_modifier(Modifier::ITALIC),

            preview_label: Style::default().fg(blue).add_modifier(Modifier::BOLD),
            preview_text: Style::default().fg(fg),

            status_key: Style::default().fg(blue).add_modifier(Modifier::BOLD),
            status_desc: Style::default().fg(overlay),
            status_bar_bg: Color::Rgb(24, 24, 37),

            divider: Style::default().fg(Color::Rgb(69, 71, 90)),
        }
    }

    /// Light theme (Catppuccin Latte palette)
    pub fn light() -> Self {
        let fg = Color::Rgb(76, 79, 105);
        let bg = Color::Rgb(239, 241, 245);
        let overlay = Color::Rgb(140, 143, 161);
        let mauve = Color::Rgb(136, 57, 239);
        let blue = Color::Rgb(30, 102, 245);
        let green = Color::Rgb(64, 160, 43);
        let yellow = Color::Rgb(223, 142, 29);

        Theme {
            default_fg: fg,
            default_bg: bg,

            list_bg: bg,
            preview_bg: bg,
            selection_bg: Color::Rgb(204, 208, 218),

            search_input: Style::default().fg(fg),
            item_count: Style::default().fg(overlay),

            section_title: Style::default()
                .fg(mauve)
                .add_modifier(Modifier::BOLD),
            action_name: Style::default().fg(fg),
            action_name_selected: Style::default().fg(fg).add_modifier(Modifier::BOLD),
            accessory: Style::default().fg(overlay),
            accessory_selected: Style::default().fg(green),
            synthetic_entry: Style::default().fg(yellow).add_modifier(Modifier::ITALIC),

            preview_label: Style::default().fg(blue).add_modifier(Modifier::BOLD),
            preview_text: Style::default().fg(fg),

            status_key: Style::default().fg(blue).add_modifier(Modifier::BOLD),
            status_desc: Style::default().fg(overlay),
            status_bar_bg: Color::Rgb(220, 224, 232),

            divider: Style::default().fg(Color::Rgb(204, 208, 218)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_builtin_themes() {
        assert!(Theme::load("dark").is_ok());
        assert!(Theme::load("Light").is_ok());
    }

    #[test]
    fn test_load_unknown_theme() {
        let err = Theme::load("solarized").unwrap_err();
        assert!(err.to_string().contains("solarized"));
    }
}
