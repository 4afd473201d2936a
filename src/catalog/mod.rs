//! Level catalog
//!
//! Read-only collection of puzzle definitions grouped by game. Levels inside a
//! group are kept sorted by id.

mod embedded;
pub mod loader;

pub use embedded::{CLUE_LEVELS, CLUE_LEVELS_COUNT, EmbeddedLevel};
pub use loader::CatalogError;

use crate::core::PuzzleDefinition;
use rustc_hash::FxHashMap;
use std::fmt;
use std::path::Path;

/// Whether a game can be played yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    ComingSoon,
}

impl GameStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Available",
            Self::ComingSoon => "Coming Soon",
        }
    }
}

/// The game groups offered by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    WordFormation,
    CategoryGuess,
    ClueWordFind,
}

impl GameKind {
    pub const ALL: [Self; 3] = [Self::WordFormation, Self::CategoryGuess, Self::ClueWordFind];

    /// Stable identifier used in level data and on the command line
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::WordFormation => "game1",
            Self::CategoryGuess => "game2",
            Self::ClueWordFind => "game3",
        }
    }

    /// Parse a game identifier
    ///
    /// # Examples
    /// ```
    /// use powerletter::catalog::GameKind;
    ///
    /// assert_eq!(GameKind::from_id("game3"), Some(GameKind::ClueWordFind));
    /// assert_eq!(GameKind::from_id("game9"), None);
    /// ```
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id.trim())
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::WordFormation => "Word Formation Challenge",
            Self::CategoryGuess => "Category Word Guess",
            Self::ClueWordFind => "Clue-Driven Word Find",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::WordFormation => {
                "Find all possible words that can be formed from a given set of letters."
            }
            Self::CategoryGuess => {
                "Guess the correct word based on clues from various categories."
            }
            Self::ClueWordFind => {
                "Find the hidden word by unscrambling letters using the provided clue."
            }
        }
    }

    #[must_use]
    pub const fn features(self) -> &'static [&'static str] {
        match self {
            Self::WordFormation => &[
                "Multiple word discovery",
                "Progressive difficulty",
                "Bilingual support",
            ],
            Self::CategoryGuess => &[
                "Topic-based clues",
                "Multiple categories",
                "Educational content",
            ],
            Self::ClueWordFind => &["Scrambled letters", "Helpful clues", "Hint system"],
        }
    }

    #[must_use]
    pub const fn status(self) -> GameStatus {
        match self {
            Self::ClueWordFind => GameStatus::Active,
            Self::WordFormation | Self::CategoryGuess => GameStatus::ComingSoon,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_playable(self) -> bool {
        matches!(self.status(), GameStatus::Active)
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Puzzle definitions per game group
#[derive(Debug, Clone, Default)]
pub struct LevelCatalog {
    groups: FxHashMap<GameKind, Vec<PuzzleDefinition>>,
}

impl LevelCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the built-in levels
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded data contains duplicate ids or empty
    /// solutions.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_definitions(
            GameKind::ClueWordFind,
            loader::levels_from_slice(CLUE_LEVELS),
        )
    }

    /// Catalog holding the levels of a JSON level file in the clue game group
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded or its levels are invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        Self::from_definitions(GameKind::ClueWordFind, loader::load_from_file(path)?)
    }

    /// Catalog with a single group
    ///
    /// # Errors
    ///
    /// See [`Self::insert_group`].
    pub fn from_definitions(
        kind: GameKind,
        levels: Vec<PuzzleDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        catalog.insert_group(kind, levels)?;
        Ok(catalog)
    }

    /// Replace the levels of `kind`, sorting them by id
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two levels share an id and
    /// `CatalogError::EmptySolution` if a level has a blank solution.
    pub fn insert_group(
        &mut self,
        kind: GameKind,
        mut levels: Vec<PuzzleDefinition>,
    ) -> Result<(), CatalogError> {
        if let Some(level) = levels.iter().find(|l| l.solution.trim().is_empty()) {
            return Err(CatalogError::EmptySolution(level.id));
        }

        levels.sort_by_key(|level| level.id);
        if let Some(pair) = levels.windows(2).find(|pair| pair[0].id == pair[1].id) {
            return Err(CatalogError::DuplicateId(pair[0].id));
        }

        log::debug!("catalog group {} holds {} levels", kind.id(), levels.len());
        self.groups.insert(kind, levels);
        Ok(())
    }

    /// Levels of a group in id order; empty for unknown groups
    #[must_use]
    pub fn levels(&self, kind: GameKind) -> &[PuzzleDefinition] {
        self.groups.get(&kind).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn level(&self, kind: GameKind, id: u32) -> Option<&PuzzleDefinition> {
        let levels = self.levels(kind);
        self.position(kind, id).map(|index| &levels[index])
    }

    /// Index of level `id` within its group
    #[must_use]
    pub fn position(&self, kind: GameKind, id: u32) -> Option<usize> {
        self.levels(kind)
            .binary_search_by_key(&id, |level| level.id)
            .ok()
    }

    #[must_use]
    pub fn level_count(&self, kind: GameKind) -> usize {
        self.levels(kind).len()
    }

    #[must_use]
    pub fn has_level(&self, kind: GameKind, id: u32) -> bool {
        self.position(kind, id).is_some()
    }

    #[must_use]
    pub fn first_level(&self, kind: GameKind) -> Option<&PuzzleDefinition> {
        self.levels(kind).first()
    }

    /// The level after `id` in id order
    #[must_use]
    pub fn next_level(&self, kind: GameKind, id: u32) -> Option<&PuzzleDefinition> {
        let index = self.position(kind, id)?;
        self.levels(kind).get(index + 1)
    }

    /// The level before `id` in id order
    #[must_use]
    pub fn previous_level(&self, kind: GameKind, id: u32) -> Option<&PuzzleDefinition> {
        let index = self.position(kind, id)?;
        index
            .checked_sub(1)
            .and_then(|prev| self.levels(kind).get(prev))
    }
}
