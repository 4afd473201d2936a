//! Puzzle definition
//!
//! A `PuzzleDefinition` is the static description of one level: the clue, the
//! scrambled letter pool, the solution and the ordered hints.

use super::letters::LetterCounts;
use serde::Deserialize;
use std::fmt;

/// Reading direction used by front ends when laying out a level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    LeftToRight,
    RightToLeft,
}

impl TextDirection {
    #[inline]
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::RightToLeft)
    }
}

/// Language tag carried by a level
///
/// Only used to pick a `TextDirection`; the engine never looks at it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub struct Language(String);

impl Language {
    const RTL_TAGS: [&'static str; 5] = ["arabic", "hebrew", "persian", "farsi", "urdu"];

    /// Create a language tag, normalized to lowercase
    ///
    /// # Examples
    /// ```
    /// use powerletter::core::{Language, TextDirection};
    ///
    /// let lang = Language::new("Arabic");
    /// assert_eq!(lang.tag(), "arabic");
    /// assert_eq!(lang.text_direction(), TextDirection::RightToLeft);
    /// ```
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into().trim().to_lowercase())
    }

    #[inline]
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn text_direction(&self) -> TextDirection {
        if Self::RTL_TAGS.contains(&self.0.as_str()) {
            TextDirection::RightToLeft
        } else {
            TextDirection::LeftToRight
        }
    }
}

impl From<String> for Language {
    fn from(tag: String) -> Self {
        Self::new(tag)
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::new("english")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One puzzle level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleDefinition {
    pub id: u32,
    pub clue: String,
    pub letter_pool: Vec<char>,
    pub solution: String,
    pub hints: Vec<String>,
    pub difficulty: u8,
    pub language: Language,
}

impl PuzzleDefinition {
    /// Create a definition from the scrambled-letter source form
    ///
    /// Every non-whitespace character of `letters` becomes one pool token, so
    /// `"R A P S I"` and `"RAPSI"` produce the same pool.
    ///
    /// # Examples
    /// ```
    /// use powerletter::core::PuzzleDefinition;
    ///
    /// let def = PuzzleDefinition::new(1, "Capital of France", "R A P S I", "PARIS");
    /// assert_eq!(def.letter_pool, vec!['R', 'A', 'P', 'S', 'I']);
    /// assert!(def.hints.is_empty());
    /// ```
    pub fn new(
        id: u32,
        clue: impl Into<String>,
        letters: &str,
        solution: impl Into<String>,
    ) -> Self {
        Self {
            id,
            clue: clue.into(),
            letter_pool: parse_letter_pool(letters),
            solution: solution.into(),
            hints: Vec::new(),
            difficulty: 1,
            language: Language::default(),
        }
    }

    #[must_use]
    pub fn with_hints<I, S>(mut self, hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hints = hints.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: u8) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    #[inline]
    #[must_use]
    pub fn text_direction(&self) -> TextDirection {
        self.language.text_direction()
    }

    /// Whether the pool holds every letter the solution needs
    ///
    /// Pool tokens are matched case-insensitively here, the same way
    /// `check_answer` compares.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        let pool = LetterCounts::from_letters(
            self.letter_pool.iter().flat_map(|c| c.to_lowercase()),
        );
        let needed = LetterCounts::from_letters(
            self.solution.trim().chars().flat_map(char::to_lowercase),
        );
        pool.contains(&needed)
    }
}

/// Split a scrambled-letter string into pool tokens
#[must_use]
pub fn parse_letter_pool(letters: &str) -> Vec<char> {
    letters.chars().filter(|c| !c.is_whitespace()).collect()
}
