//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_catalog_summary, print_level_screen, print_reply, print_verify_report};
