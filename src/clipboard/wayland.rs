use anyhow::{Context, Result, anyhow};
use std::process::{Command, Stdio};

use super::backend::ClipboardBackend;

/// Wayland clipboard backend using wl-clipboard tools
/// Requires wl-copy and wl-paste to be installed; wtype is needed for the
/// paste keystroke
pub struct WaylandBackend;

impl WaylandBackend {
    /// Create a new Wayland clipboard backend
    pub fn new() -> Result<Self> {
        // Verify wl-copy is available
        Command::new("wl-copy")
            .arg("--version")
            .output()
            .context("wl-copy not found. Install wl-clipboard package")?;

        log::debug!("WaylandBackend initialized successfully");
        Ok(WaylandBackend)
    }

    /// Run wl-paste and collect its stdout as text
    /// wl-paste exits non-zero when the selection is empty or not text, which
    /// degrades to an empty string rather than an error
    fn read_with(&self, extra_args: &[&str]) -> Result<String> {
        let output = Command::new("wl-paste")
            .arg("--no-newline")
            .args(extra_args)
            .stdin(Stdio::null())
            .output()
            .context("Failed to spawn wl-paste")?;

        if !output.status.success() {
            log::debug!("wl-paste exited with {}, treating as empty", output.status);
            return Ok(String::new());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl ClipboardBackend for WaylandBackend {
    fn read_text(&self) -> Result<String> {
        let text = self.read_with(&[])?;
        log::debug!("Read {} bytes text from clipboard", text.len());
        Ok(text)
    }

    fn read_selection(&self) -> Result<String> {
        let text = self.read_with(&["--primary"])?;
        log::debug!("Read {} bytes text from primary selection", text.len());
        Ok(text)
    }

    fn write_text(&self, text: &str) -> Result<()> {
        let mut child = Command::new("wl-copy")
            .arg("--type")
            .arg("text/plain")
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .context("Failed to spawn wl-copy")?;

        let status = child.wait().context("Failed to wait for wl-copy")?;

        if !status.success() {
            return Err(anyhow!("wl-copy failed with status: {}", status));
        }

        log::debug!("Wrote {} bytes text to clipboard", text.len());
        Ok(())
    }

    fn paste_into_foreground(&self, delay_ms: u64) -> Result<()> {
        // Spawn detached background process to simulate Ctrl-V after delay
        let cmd = format!(
            "sleep {} && exec wtype -M ctrl v -m ctrl",
            delay_ms as f64 / 1000.0
        );

        Command::new("sh")
            .arg("-c")
            .arg(&cmd)
            .spawn()
            .context("Failed to spawn wtype for Ctrl-V. Make sure wtype is installed.")?;

        log::debug!("Scheduled Ctrl-V paste via wtype after {}ms delay", delay_ms);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "Wayland"
    }
}
