use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Create main application layout with action list, divider, preview, and
/// keyboard hints
/// Returns [action_list_area, divider_area, preview_area, keyboard_hints_area]
pub fn create_main_layout(area: Rect) -> Vec<Rect> {
    // Split vertically: content area + keyboard hints bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Main content area
            Constraint::Length(1), // Spacing before hints
            Constraint::Length(1), // Keyboard hints bar
        ])
        .split(area);

    // Split content horizontally: action list + divider + preview
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Action list (left)
            Constraint::Length(1),      // Divider line
            Constraint::Min(10),        // Preview (right - remaining space)
        ])
        .split(main_chunks[0]);

    vec![
        content_chunks[0],
        content_chunks[1],
        content_chunks[2],
        main_chunks[2],
    ]
}
