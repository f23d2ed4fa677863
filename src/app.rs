use ratatui::Frame;
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use crate::config::Config;
use crate::transforms::Transform;
use crate::ui;
use crate::ui::Theme;
use crate::ui::action_list::ActionListContext;

/// Which input source is the active transform target
///
/// Exactly one of the typed query and the clipboard snapshot is the target
/// at any time, selected by this mode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Search box holds free text, transformed live as it is typed
    #[default]
    Typing,
    /// Clipboard snapshot is the target, search box filters transform names
    ClipboardTarget,
}

/// One row of the action list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEntry {
    /// Synthetic entry that commits the typed text as the target
    Typing,
    /// A transform from the registry
    Transform(Transform),
    /// Synthetic entry that copies the snapshot back into the search box
    UpdateTyped,
}

/// Content to copy and paste after the TUI exits (allows terminal to close first)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteRequest {
    pub text: String,
}

/// Main application state
pub struct App {
    /// Current target resolution mode
    pub mode: Mode,

    /// Clipboard snapshot taken once before the TUI started
    clipboard_text: String,

    /// Application configuration
    pub config: Config,

    /// Theme (loaded from config)
    theme: Theme,

    /// Search input with cursor support
    pub search_input: Input,

    /// Currently selected index in the visible list
    pub selected_index: usize,

    /// Flag to request application exit
    pub should_quit: bool,

    /// Content to copy and paste after the TUI exits
    pub paste_request: Option<PasteRequest>,
}

impl App {
    /// Create a new App with the given clipboard snapshot
    pub fn new(clipboard_text: String, config: Config, theme: Theme) -> Self {
        App {
            mode: Mode::default(),
            clipboard_text,
            config,
            theme,
            search_input: Input::default(),
            selected_index: 0,
            should_quit: false,
            paste_request: None,
        }
    }

    /// The string currently subject to transformation
    pub fn target_text(&self) -> &str {
        match self.mode {
            Mode::Typing => self.search_input.value(),
            Mode::ClipboardTarget => &self.clipboard_text,
        }
    }

    /// Get the currently visible list entries
    ///
    /// In Typing mode all transforms are shown previewing the in-progress
    /// query, with a synthetic entry first to commit it as the target.
    /// In ClipboardTarget mode the query filters transform names by
    /// case-insensitive substring, and a trailing entry returns to typing.
    pub fn visible_entries(&self) -> Vec<ListEntry> {
        match self.mode {
            Mode::Typing => {
                let mut entries = vec![ListEntry::Typing];
                entries.extend(Transform::ALL.into_iter().map(ListEntry::Transform));
                entries
            }
            Mode::ClipboardTarget => {
                let query = self.search_input.value().to_uppercase();
                let mut entries: Vec<ListEntry> = Transform::ALL
                    .into_iter()
                    .filter(|t| t.name().to_uppercase().contains(&query))
                    .map(ListEntry::Transform)
                    .collect();
                entries.push(ListEntry::UpdateTyped);
                entries
            }
        }
    }

    /// Get the entry at the current selected index
    pub fn selected_entry(&self) -> Option<ListEntry> {
        self.visible_entries().get(self.selected_index).copied()
    }

    /// Commit the typed text as the transform target
    /// An empty query keeps the pre-read clipboard value as the target
    pub fn select_case(&mut self) {
        let query = self.search_input.value();
        if !query.is_empty() {
            self.clipboard_text = query.to_string();
        }
        self.search_input.reset();
        self.mode = Mode::ClipboardTarget;
        self.selected_index = 0;
        log::debug!("Entered clipboard target mode ({} chars)", self.clipboard_text.len());
    }

    /// Copy the snapshot back into the search box and resume typing
    pub fn update_typed_text(&mut self) {
        self.search_input = Input::new(self.clipboard_text.clone());
        self.mode = Mode::Typing;
        self.selected_index = 0;
    }

    /// Activate the currently selected entry
    ///
    /// Selecting a transform is terminal for the session: it records the
    /// transformed target as a paste request and requests exit. The actual
    /// clipboard write and paste keystroke happen after the terminal is
    /// restored.
    pub fn activate_selected(&mut self) {
        let Some(entry) = self.selected_entry() else {
            return;
        };

        match entry {
            ListEntry::Typing => self.select_case(),
            ListEntry::UpdateTyped => self.update_typed_text(),
            ListEntry::Transform(transform) => {
                let text = transform.apply(self.target_text());
                log::info!("Selected {} ({} chars)", transform.name(), text.len());
                self.paste_request = Some(PasteRequest { text });
                self.should_quit = true;
            }
        }
    }

    /// Move selection up by n items
    pub fn move_up(&mut self, n: usize) {
        self.selected_index = self.selected_index.saturating_sub(n);
    }

    /// Move selection down by n items
    pub fn move_down(&mut self, n: usize) {
        let visible_count = self.visible_entries().len();
        if visible_count > 0 {
            self.selected_index = (self.selected_index + n).min(visible_count - 1);
        }
    }

    /// Clear the search query
    pub fn clear_query(&mut self) {
        self.search_input.reset();
        self.selected_index = 0;
    }

    /// Request application exit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Handle keyboard event
    /// The search box is always live; unhandled keys are delegated to
    /// tui-input (characters, backspace, arrows, Ctrl+A/E/W, etc.)
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.move_up(1),
            KeyCode::Down => self.move_down(1),
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_up(1);
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_down(1);
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
            }
            KeyCode::Enter => {
                self.activate_selected();
            }
            KeyCode::Esc => {
                // ESC clears the query first, then quits
                if !self.search_input.value().is_empty() {
                    self.clear_query();
                } else {
                    self.quit();
                }
            }
            _ => {
                let event = Event::Key(key);
                if self.search_input.handle_event(&event).is_some() {
                    // Query changed, reset selection to the top
                    self.selected_index = 0;
                }
            }
        }
    }

    /// Render the TUI
    pub fn draw(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Set themed background for entire frame
        frame.render_widget(
            ratatui::widgets::Block::default()
                .style(ratatui::prelude::Style::default().bg(self.theme.default_bg)),
            size,
        );

        // Create layout: [action_list, divider, preview, keyboard_hints]
        let chunks = ui::create_main_layout(size);
        let action_list_area = chunks[0];
        let divider_area = chunks[1];
        let preview_area = chunks[2];
        let keyboard_hints_area = chunks[3];

        let entries = self.visible_entries();

        // Clamp selection in case filtering shrank the list
        if self.selected_index >= entries.len() && !entries.is_empty() {
            self.selected_index = entries.len() - 1;
        }

        let target = match self.mode {
            Mode::Typing => self.search_input.value().to_string(),
            Mode::ClipboardTarget => self.clipboard_text.clone(),
        };

        ui::render_action_list(
            frame,
            action_list_area,
            ActionListContext {
                entries: &entries,
                selected: self.selected_index,
                mode: self.mode,
                search_input: &self.search_input,
                target: &target,
                theme: &self.theme,
            },
        );

        ui::render_divider(frame, divider_area, &self.theme);

        let selected = entries.get(self.selected_index);
        ui::render_preview(frame, preview_area, selected, &target, &self.theme);

        ui::render_keyboard_hints(frame, keyboard_hints_area, self.mode, &self.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app(clipboard: &str) -> App {
        App::new(clipboard.to_string(), Config::default(), Theme::default())
    }

    fn type_query(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_initial_state_is_typing() {
        let app = test_app("from clipboard");
        assert_eq!(app.mode, Mode::Typing);
        assert_eq!(app.target_text(), "");
        assert!(!app.should_quit);
        assert!(app.paste_request.is_none());
    }

    #[test]
    fn test_typing_mode_shows_synthetic_entry_and_all_transforms() {
        let app = test_app("");
        let entries = app.visible_entries();
        assert_eq!(entries.len(), Transform::ALL.len() + 1);
        assert_eq!(entries[0], ListEntry::Typing);
        assert_eq!(entries[1], ListEntry::Transform(Transform::Upper));
    }

    #[test]
    fn test_typed_text_is_the_target_while_typing() {
        let mut app = test_app("snapshot");
        type_query(&mut app, "Hello World");
        assert_eq!(app.target_text(), "Hello World");
    }

    #[test]
    fn test_select_case_commits_typed_text() {
        let mut app = test_app("");
        type_query(&mut app, "Hello World");

        // The synthetic Typing entry is first; Enter commits the query
        app.selected_index = 0;
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        assert_eq!(app.mode, Mode::ClipboardTarget);
        assert_eq!(app.target_text(), "Hello World");
        assert_eq!(app.search_input.value(), "");
    }

    #[test]
    fn test_select_case_with_empty_query_keeps_snapshot() {
        let mut app = test_app("from clipboard");
        app.select_case();

        assert_eq!(app.mode, Mode::ClipboardTarget);
        assert_eq!(app.target_text(), "from clipboard");
    }

    #[test]
    fn test_filter_cam_shows_only_camel_case() {
        let mut app = test_app("Hello World");
        app.select_case();
        type_query(&mut app, "cam");

        let transforms: Vec<ListEntry> = app
            .visible_entries()
            .into_iter()
            .filter(|e| matches!(e, ListEntry::Transform(_)))
            .collect();
        assert_eq!(transforms, [ListEntry::Transform(Transform::Camel)]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let mut app = test_app("x");
        app.select_case();
        type_query(&mut app, "KEBAB");

        let entries = app.visible_entries();
        assert!(entries.contains(&ListEntry::Transform(Transform::Kebab)));
    }

    #[test]
    fn test_clipboard_mode_ends_with_update_entry() {
        let mut app = test_app("x");
        app.select_case();

        let entries = app.visible_entries();
        assert_eq!(entries.last(), Some(&ListEntry::UpdateTyped));
        assert!(!entries.contains(&ListEntry::Typing));
    }

    #[test]
    fn test_update_typed_text_returns_to_typing() {
        let mut app = test_app("");
        type_query(&mut app, "Hello World");
        app.select_case();
        app.update_typed_text();

        assert_eq!(app.mode, Mode::Typing);
        assert_eq!(app.search_input.value(), "Hello World");
        assert_eq!(app.target_text(), "Hello World");
    }

    #[test]
    fn test_selecting_transform_is_terminal() {
        let mut app = test_app("");
        type_query(&mut app, "Hello World");
        app.select_case();

        // First visible entry is UpperCase (no filter active)
        app.selected_index = 0;
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        assert!(app.should_quit);
        assert_eq!(
            app.paste_request,
            Some(PasteRequest {
                text: "HELLO WORLD".to_string()
            })
        );
    }

    #[test]
    fn test_transform_preview_uses_live_query() {
        let mut app = test_app("");
        type_query(&mut app, "Hello World");

        // Selecting CamelCase directly from typing mode transforms the query
        let entries = app.visible_entries();
        let camel_idx = entries
            .iter()
            .position(|e| *e == ListEntry::Transform(Transform::Camel))
            .unwrap();
        app.selected_index = camel_idx;
        app.activate_selected();

        assert_eq!(app.paste_request.unwrap().text, "helloWorld");
    }

    #[test]
    fn test_selection_movement_clamps() {
        let mut app = test_app("");
        let count = app.visible_entries().len();

        app.move_down(100);
        assert_eq!(app.selected_index, count - 1);

        app.move_up(100);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_query_edit_resets_selection() {
        let mut app = test_app("");
        app.move_down(3);
        type_query(&mut app, "a");
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_esc_clears_query_then_quits() {
        let mut app = test_app("x");
        app.select_case();
        type_query(&mut app, "cam");

        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(app.search_input.value(), "");
        assert!(!app.should_quit);

        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(app.should_quit);
        assert!(app.paste_request.is_none());
    }
}
