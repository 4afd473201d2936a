//! Level file loading
//!
//! Custom level sets are JSON arrays of level objects using the same field
//! names as the built-in data:
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "clue": "Capital of France",
//!     "scrambled_letters": "R A P S I",
//!     "solution": "PARIS",
//!     "hints": ["European city", "Starts with P"],
//!     "difficulty": 1,
//!     "language": "english"
//!   }
//! ]
//! ```

use super::embedded::EmbeddedLevel;
use crate::core::{Language, PuzzleDefinition};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while building or loading a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read level file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid level data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate level id {0}")]
    DuplicateId(u32),

    #[error("level {0} has an empty solution")]
    EmptySolution(u32),
}

/// A level as written in a JSON level file
#[derive(Debug, Clone, Deserialize)]
pub struct LevelRecord {
    pub id: u32,
    pub clue: String,
    pub scrambled_letters: String,
    pub solution: String,
    #[serde(default)]
    pub hints: Vec<String>,
    #[serde(default = "default_difficulty")]
    pub difficulty: u8,
    #[serde(default)]
    pub language: Language,
}

const fn default_difficulty() -> u8 {
    1
}

impl From<LevelRecord> for PuzzleDefinition {
    fn from(record: LevelRecord) -> Self {
        Self::new(
            record.id,
            record.clue,
            &record.scrambled_letters,
            record.solution,
        )
        .with_hints(record.hints)
        .with_difficulty(record.difficulty)
        .with_language(record.language)
    }
}

/// Parse levels from a JSON string
///
/// # Errors
///
/// Returns `CatalogError::Json` if the text is not a JSON array of levels.
///
/// # Examples
/// ```
/// use powerletter::catalog::loader::levels_from_json;
///
/// let levels = levels_from_json(
///     r#"[{"id": 6, "clue": "Frozen water", "scrambled_letters": "I C E", "solution": "ICE"}]"#,
/// )
/// .unwrap();
/// assert_eq!(levels[0].letter_pool, vec!['I', 'C', 'E']);
/// assert_eq!(levels[0].difficulty, 1);
/// ```
pub fn levels_from_json(json: &str) -> Result<Vec<PuzzleDefinition>, CatalogError> {
    let records: Vec<LevelRecord> = serde_json::from_str(json)?;
    Ok(records.into_iter().map(PuzzleDefinition::from).collect())
}

/// Load levels from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold valid level data.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<PuzzleDefinition>, CatalogError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let levels = levels_from_json(&content)?;
    log::info!("loaded {} levels from {}", levels.len(), path.display());
    Ok(levels)
}

/// Convert embedded level tables to definitions
#[must_use]
pub fn levels_from_slice(slice: &[EmbeddedLevel]) -> Vec<PuzzleDefinition> {
    slice.iter().map(EmbeddedLevel::to_definition).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_record() {
        let json = r#"[{
            "id": 5,
            "clue": "عاصمة مصر",
            "scrambled_letters": "ا ل ق ا ه ر ة",
            "solution": "القاهرة",
            "hints": ["مدينة عربية", "على نهر النيل"],
            "difficulty": 2,
            "language": "arabic"
        }]"#;

        let levels = levels_from_json(json).unwrap();
        assert_eq!(levels.len(), 1);
        let level = &levels[0];
        assert_eq!(level.id, 5);
        assert_eq!(level.letter_pool.len(), 7);
        assert_eq!(level.hints.len(), 2);
        assert_eq!(level.difficulty, 2);
        assert!(level.text_direction().is_rtl());
        assert!(level.is_solvable());
    }

    #[test]
    fn optional_fields_default() {
        let json = r#"[{"id": 3, "clue": "King of the jungle", "scrambled_letters": "L I O N", "solution": "LION"}]"#;
        let levels = levels_from_json(json).unwrap();
        assert!(levels[0].hints.is_empty());
        assert_eq!(levels[0].difficulty, 1);
        assert_eq!(levels[0].language.tag(), "english");
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            levels_from_json("{not json"),
            Err(CatalogError::Json(_))
        ));
        assert!(matches!(
            levels_from_json(r#"[{"id": 1}]"#),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_from_file("does/not/exist.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.json"));
    }

    #[test]
    fn empty_slice() {
        assert!(levels_from_slice(&[]).is_empty());
    }
}
