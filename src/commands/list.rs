//! Catalog listing command

use crate::catalog::{GameKind, GameStatus, LevelCatalog};

/// One row of the level listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSummary {
    pub id: u32,
    pub clue: String,
    pub letter_count: usize,
    pub hint_count: usize,
    pub difficulty: u8,
    pub language: String,
    pub right_to_left: bool,
}

/// One game group with its levels
#[derive(Debug, Clone)]
pub struct GameSummary {
    pub kind: GameKind,
    pub status: GameStatus,
    pub levels: Vec<LevelSummary>,
}

/// Summarize every game group in menu order
#[must_use]
pub fn summarize_catalog(catalog: &LevelCatalog) -> Vec<GameSummary> {
    GameKind::ALL
        .into_iter()
        .map(|kind| GameSummary {
            kind,
            status: kind.status(),
            levels: catalog
                .levels(kind)
                .iter()
                .map(|level| LevelSummary {
                    id: level.id,
                    clue: level.clue.clone(),
                    letter_count: level.letter_pool.len(),
                    hint_count: level.hints.len(),
                    difficulty: level.difficulty,
                    language: level.language.tag().to_string(),
                    right_to_left: level.text_direction().is_rtl(),
                })
                .collect(),
        })
        .collect()
}
