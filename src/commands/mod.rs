//! Command implementations

pub mod list;
pub mod simple;
pub mod verify;

pub use list::{GameSummary, LevelSummary, summarize_catalog};
pub use simple::{Reply, SimpleCommand, SimpleSession, run_simple};
pub use verify::{LevelCheck, VerifyReport, run_verify, verify_level};
