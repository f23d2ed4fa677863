use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use std::io::Read;

use recase::app::App;
use recase::clipboard;
use recase::config::{ConfigStorage, TomlConfigStorage, ensure_directories};
use recase::logging;
use recase::transforms::Transform;
use recase::ui::Theme;

#[derive(Parser)]
#[command(name = "recase")]
#[command(about = "Interactive case transformer for the Wayland clipboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available transforms with a sample preview
    List,

    /// Apply a transform to TEXT (or stdin) and print the result
    Apply {
        /// Transform name, e.g. camelcase or kebab-case
        transform: String,

        /// Text to transform (reads stdin when omitted)
        text: Option<String>,

        /// Also write the result to the clipboard
        #[arg(short, long)]
        copy: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List) => {
            env_logger::init();
            cmd_list()
        }
        Some(Commands::Apply {
            transform,
            text,
            copy,
        }) => {
            env_logger::init();
            cmd_apply(&transform, text, copy)
        }
        None => {
            // Default: launch TUI
            run_tui()
        }
    }
}

/// Print the transform registry in display order
fn cmd_list() -> Result<()> {
    const SAMPLE: &str = "Hello World";

    println!("Available transforms (applied to {:?}):", SAMPLE);
    for transform in Transform::ALL {
        println!("  {:<12} {}", transform.name(), transform.apply(SAMPLE));
    }

    Ok(())
}

/// Apply a single transform non-interactively
fn cmd_apply(name: &str, text: Option<String>, copy: bool) -> Result<()> {
    let transform = Transform::from_name(name)?;

    let input = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            buffer
        }
    };

    let result = transform.apply(&input);
    println!("{}", result);

    if copy {
        let backend = clipboard::create_backend()?;
        backend.write_text(&result)?;
        log::info!("Copied {} result to clipboard", transform.name());
    }

    Ok(())
}

/// Launch the interactive TUI
///
/// Reads the clipboard snapshot once up front, runs the event loop, and
/// performs the pending copy + paste after the terminal is restored so the
/// paste keystroke lands in the foreground application.
fn run_tui() -> Result<()> {
    let (data_dir, config_dir) = ensure_directories()?;

    let config_storage = TomlConfigStorage::new(config_dir.join("recase.toml"));
    let config = config_storage.load()?;

    logging::init_logger(data_dir.join("recase.log"), &config.general.log_level)?;
    log::info!("Starting recase TUI");

    let backend = clipboard::create_backend()?;
    log::info!("Using {} clipboard backend", backend.name());

    // One-shot snapshot; a failed read degrades to an empty target
    let clipboard_text = match backend.read_text() {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Clipboard read failed, starting with empty target: {:#}", e);
            String::new()
        }
    };

    let theme = Theme::load(&config.general.theme)?;
    let mut app = App::new(clipboard_text, config, theme);

    let mut terminal = ratatui::init();
    let result = run_event_loop(&mut terminal, &mut app);
    ratatui::restore();
    result?;

    if let Some(request) = app.paste_request.take() {
        backend
            .write_text(&request.text)
            .context("Failed to write result to clipboard")?;

        if app.config.general.paste_on_select {
            backend
                .paste_into_foreground(app.config.general.paste_delay_ms)
                .context("Failed to schedule paste keystroke")?;
        }

        log::info!("Copied {} chars to clipboard", request.text.len());
    }

    Ok(())
}

/// Blocking event loop: re-render on every input event until quit
fn run_event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal
            .draw(|frame| app.draw(frame))
            .context("Failed to draw frame")?;

        if let Event::Key(key) = event::read().context("Failed to read terminal event")? {
            // Ignore release/repeat events on platforms that report them
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}
