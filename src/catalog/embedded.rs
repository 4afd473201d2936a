//! Embedded levels
//!
//! Level data compiled into the binary at build time.

use crate::core::{Language, PuzzleDefinition};

/// A level as stored in the generated tables
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedLevel {
    pub id: u32,
    pub clue: &'static str,
    pub letters: &'static str,
    pub solution: &'static str,
    pub hints: &'static [&'static str],
    pub difficulty: u8,
    pub language: &'static str,
}

impl EmbeddedLevel {
    #[must_use]
    pub fn to_definition(&self) -> PuzzleDefinition {
        PuzzleDefinition::new(self.id, self.clue, self.letters, self.solution)
            .with_hints(self.hints.iter().copied())
            .with_difficulty(self.difficulty)
            .with_language(Language::new(self.language))
    }
}

// Include generated level list from build script
include!(concat!(env!("OUT_DIR"), "/clue_levels.rs"));
