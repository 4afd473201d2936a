//! Level verification command
//!
//! Replays every level's solution through a fresh engine, typing only letters
//! the engine reports as available, and checks the result.

use crate::catalog::{GameKind, LevelCatalog};
use crate::core::{PuzzleDefinition, PuzzleEngine};

/// Outcome for one level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelCheck {
    pub id: u32,
    pub solution: String,
    pub solved: bool,
    /// Solution letters the pool could not supply
    pub missing: Vec<char>,
}

/// Outcome for a whole game group
#[derive(Debug, Clone, Default)]
pub struct VerifyReport {
    pub checks: Vec<LevelCheck>,
}

impl VerifyReport {
    #[must_use]
    pub fn failures(&self) -> Vec<&LevelCheck> {
        self.checks.iter().filter(|check| !check.solved).collect()
    }

    #[must_use]
    pub fn all_solvable(&self) -> bool {
        self.checks.iter().all(|check| check.solved)
    }
}

/// Play one level's solution through the engine
#[must_use]
pub fn verify_level(level: &PuzzleDefinition) -> LevelCheck {
    let mut engine = PuzzleEngine::new();
    engine.start_level(level);

    let mut missing = Vec::new();
    for letter in level.solution.trim().chars() {
        match engine.match_available_letter(letter) {
            Some(token) => {
                engine.append_letter(token);
            }
            None => missing.push(letter),
        }
    }

    let solved = missing.is_empty() && engine.check_answer();
    if !solved {
        log::warn!("level {} cannot be solved from its letters", level.id);
    }

    LevelCheck {
        id: level.id,
        solution: level.solution.clone(),
        solved,
        missing,
    }
}

/// Verify every level of a game group
#[must_use]
pub fn run_verify(catalog: &LevelCatalog, kind: GameKind) -> VerifyReport {
    let checks = catalog.levels(kind).iter().map(verify_level).collect();
    VerifyReport { checks }
}
