use ratatui::layout::{Constraint, Direction, Layout, Position};
use ratatui::prelude::*;
use ratatui::widgets::{Cell, Paragraph, Row, Table};
use tui_input::Input;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::app::{ListEntry, Mode};

/// Maximum width of the target text quoted in section titles
const SECTION_TARGET_WIDTH: usize = 24;

/// Collapse a string to a single display line truncated to max_width columns
/// Newlines become the ⏎ symbol; overlong text gets a trailing ellipsis
pub fn preview_line(text: &str, max_width: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| match c {
            '\n' => '⏎',
            '\t' => ' ',
            '\r' => ' ',
            other => other,
        })
        .collect();

    if flat.width() <= max_width {
        return flat;
    }

    // Leave one column for the ellipsis
    let budget = max_width.saturating_sub(1);
    let mut result = String::new();
    let mut used = 0;
    for c in flat.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        result.push(c);
        used += w;
    }
    result.push('…');
    result
}

/// Context for rendering the action list
pub struct ActionListContext<'a> {
    pub entries: &'a [ListEntry],
    pub selected: usize,
    pub mode: Mode,
    pub search_input: &'a Input,
    pub target: &'a str,
    pub theme: &'a super::Theme,
}

/// Render the action list: search header, section titles, and one row per
/// visible entry with a live transform preview as the right-hand accessory
pub fn render_action_list(frame: &mut Frame, area: Rect, ctx: ActionListContext) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Search header
            Constraint::Min(1),    // List
        ])
        .split(area);

    let header_area = chunks[0];
    let list_area = chunks[1];

    // Header: prompt + query on the left, entry count on the right
    let prompt = match ctx.mode {
        Mode::Typing => "> ",
        Mode::ClipboardTarget => "/ ",
    };
    let query = ctx.search_input.value();
    let count_text = format!("{} items", ctx.entries.len());

    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),                          // Prompt + query
            Constraint::Length(1),                       // Gap
            Constraint::Length(count_text.len() as u16), // Count (fixed width)
        ])
        .split(header_area);

    let search_para = Paragraph::new(Line::from(Span::styled(
        format!("{}{}", prompt, query),
        ctx.theme.search_input,
    )))
    .style(Style::default().bg(ctx.theme.list_bg));
    frame.render_widget(search_para, header_chunks[0]);

    let count_para = Paragraph::new(Line::from(Span::styled(count_text, ctx.theme.item_count)))
        .style(Style::default().bg(ctx.theme.list_bg));
    frame.render_widget(count_para, header_chunks[2]);

    // The search box is always live, so the cursor always sits in the header
    let cursor_x = header_area.x + prompt.len() as u16 + ctx.search_input.visual_cursor() as u16;
    frame.set_cursor_position(Position::new(cursor_x, header_area.y));

    // Accessory column gets ~40% of the list width
    let accessory_width = (list_area.width as usize * 2) / 5;
    let target_quote = preview_line(ctx.target, SECTION_TARGET_WIDTH);

    let mut rows: Vec<Row> = Vec::new();
    let mut transform_section_rendered = false;

    for (entry_idx, entry) in ctx.entries.iter().enumerate() {
        let is_selected = entry_idx == ctx.selected;

        let (name_span, accessory) = match entry {
            ListEntry::Typing => (
                Span::styled("Typing…", ctx.theme.synthetic_entry),
                "Enter".to_string(),
            ),
            ListEntry::Transform(transform) => {
                if !transform_section_rendered {
                    rows.push(section_row(
                        format!("Transform \"{}\" with", target_quote),
                        ctx.theme,
                    ));
                    transform_section_rendered = true;
                }
                let name_style = if is_selected {
                    ctx.theme.action_name_selected
                } else {
                    ctx.theme.action_name
                };
                (
                    Span::styled(transform.name(), name_style),
                    preview_line(&transform.apply(ctx.target), accessory_width),
                )
            }
            ListEntry::UpdateTyped => {
                rows.push(section_row(
                    format!("Update \"{}\"", target_quote),
                    ctx.theme,
                ));
                (
                    Span::styled("Update typed text", ctx.theme.synthetic_entry),
                    "Enter".to_string(),
                )
            }
        };

        let accessory_style = if is_selected {
            ctx.theme.accessory_selected
        } else {
            ctx.theme.accessory
        };

        let row = Row::new(vec![
            Cell::from(Line::from(name_span)),
            Cell::from(
                Line::from(Span::styled(accessory, accessory_style)).alignment(Alignment::Right),
            ),
        ]);

        if is_selected {
            rows.push(row.style(Style::default().bg(ctx.theme.selection_bg)));
        } else {
            rows.push(row);
        }
    }

    let widths = [
        Constraint::Min(10),                          // Name (fills remaining)
        Constraint::Length(accessory_width as u16),   // Accessory preview
    ];
    let table = Table::new(rows, widths).style(Style::default().bg(ctx.theme.list_bg));

    frame.render_widget(table, list_area);
}

/// Build a full-width section title row
fn section_row(title: String, theme: &super::Theme) -> Row<'_> {
    Row::new(vec![
        Cell::from(Span::styled(title, theme.section_title)),
        Cell::from(""),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_line_short_text() {
        assert_eq!(preview_line("hello", 10), "hello");
    }

    #[test]
    fn test_preview_line_truncates() {
        let result = preview_line("hello world", 8);
        assert!(result.ends_with('…'));
        assert!(result.width() <= 8);
    }

    #[test]
    fn test_preview_line_flattens_newlines() {
        assert_eq!(preview_line("a\nb", 10), "a⏎b");
        assert_eq!(preview_line("a\tb", 10), "a b");
    }

    #[test]
    fn test_preview_line_wide_chars() {
        // Double-width characters must not overflow the budget
        let result = preview_line("日本語テキスト", 6);
        assert!(result.width() <= 6);
    }
}
