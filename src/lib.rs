//! Recase - interactive case transformer for the Wayland clipboard
//!
//! This library exports the core modules for testing and potential reuse.

pub mod app;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod transforms;
pub mod ui;
