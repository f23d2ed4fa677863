pub mod action_list;
pub mod layout;
pub mod preview;
pub mod status;
pub mod theme;

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub use action_list::render_action_list;
pub use layout::create_main_layout;
pub use preview::render_preview;
pub use status::render_keyboard_hints;
pub use theme::Theme;

/// Render vertical divider line between action list and preview panels
pub fn render_divider(frame: &mut Frame, area: Rect, theme: &Theme) {
    let lines: Vec<Line> = (0..area.height)
        .map(|_| Line::from(Span::styled("│", theme.divider)))
        .collect();

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, area);
}
