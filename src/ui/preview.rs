use ratatui::prelude::*;
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use super::Theme;
use crate::app::ListEntry;

/// Render the preview panel for the selected entry
/// Shows the active target and the full transform result without truncation,
/// so multi-line clipboard content can be inspected before pasting
pub fn render_preview(
    frame: &mut Frame,
    area: Rect,
    entry: Option<&ListEntry>,
    target: &str,
    theme: &Theme,
) {
    let result = match entry {
        Some(ListEntry::Transform(transform)) => Some(transform.apply(target)),
        // Synthetic entries have no transform; show the raw target only
        Some(ListEntry::Typing) | Some(ListEntry::UpdateTyped) | None => None,
    };

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled("Target", theme.preview_label)));
    if target.is_empty() {
        lines.push(Line::from(Span::styled(
            "(empty)",
            theme.preview_text.add_modifier(Modifier::DIM),
        )));
    } else {
        for text_line in target.lines() {
            lines.push(Line::from(Span::styled(
                text_line.to_string(),
                theme.preview_text,
            )));
        }
    }

    if let Some(result) = result {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Result", theme.preview_label)));
        if result.is_empty() {
            lines.push(Line::from(Span::styled(
                "(empty)",
                theme.preview_text.add_modifier(Modifier::DIM),
            )));
        } else {
            for text_line in result.lines() {
                lines.push(Line::from(Span::styled(
                    text_line.to_string(),
                    theme.preview_text,
                )));
            }
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .style(Style::default().bg(theme.preview_bg))
                .padding(Padding::horizontal(1)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
