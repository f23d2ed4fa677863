use anyhow::Result;

/// Trait for clipboard backend abstraction
/// Supports different clipboard systems (Wayland, X11)
/// Covers the host capabilities the TUI consumes: a one-shot read of the
/// clipboard, writing the transformed result back, and simulating a paste
/// keystroke into the foreground application
pub trait ClipboardBackend: Send + Sync {
    /// Read current clipboard text
    /// An empty or non-text clipboard yields an empty string
    fn read_text(&self) -> Result<String>;

    /// Read the primary selection (currently selected text)
    /// Declared for parity with the host capabilities; the interactive
    /// flow does not consume it yet
    fn read_selection(&self) -> Result<String>;

    /// Write text to clipboard
    fn write_text(&self, text: &str) -> Result<()>;

    /// Schedule a paste keystroke into the foreground application
    /// Fires after the given delay so the terminal window can close first
    fn paste_into_foreground(&self, delay_ms: u64) -> Result<()>;

    /// Get the backend name (for logging/debugging)
    fn name(&self) -> &'static str;
}
