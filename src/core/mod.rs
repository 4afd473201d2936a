//! Core puzzle types
//!
//! The puzzle engine and the values it works on. Nothing here does I/O; the
//! catalog and the front ends are layered on top.

mod definition;
mod engine;
mod letters;

pub use definition::{Language, PuzzleDefinition, TextDirection, parse_letter_pool};
pub use engine::{LetterTile, PuzzleEngine, Snapshot};
pub use letters::LetterCounts;
