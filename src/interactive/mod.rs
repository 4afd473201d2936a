//! Interactive TUI interface
//!
//! Game menu and clue game screens drawn with ratatui.

mod app;
mod rendering;

pub use app::{App, CheckResult, Message, MessageStyle, Screen, run_tui};
