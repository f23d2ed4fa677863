use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::Theme;
use crate::app::Mode;

const TYPING_HINTS: &[(&[&str], &str)] = &[
    (&["↑", "↓"], "move"),
    (&["Enter"], "select"),
    (&["Esc"], "quit"),
];

const CLIPBOARD_HINTS: &[(&[&str], &str)] = &[
    (&["↑", "↓"], "move"),
    (&["type"], "filter"),
    (&["Enter"], "copy & paste"),
    (&["Esc"], "clear / quit"),
];

/// Render keyboard hints bar showing mode-specific shortcuts
pub fn render_keyboard_hints(frame: &mut Frame, area: Rect, mode: Mode, theme: &Theme) {
    let hint_data = match mode {
        Mode::Typing => TYPING_HINTS,
        Mode::ClipboardTarget => CLIPBOARD_HINTS,
    };

    let mut hints = Vec::new();

    for (keys, description) in hint_data {
        // Add keys with styled separators
        for (i, key) in keys.iter().enumerate() {
            if i > 0 {
                hints.push(Span::styled(
                    "/",
                    theme.status_desc.add_modifier(Modifier::DIM),
                ));
            }
            hints.push(Span::styled(*key, theme.status_key));
        }

        hints.push(Span::raw(" "));
        hints.push(Span::styled(*description, theme.status_desc));
        hints.push(Span::raw("  "));
    }

    let paragraph =
        Paragraph::new(Line::from(hints)).style(theme.status_desc.bg(theme.status_bar_bg));

    frame.render_widget(paragraph, area);
}
