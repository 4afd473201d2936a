//! PowerLetter
//!
//! A clue-driven word puzzle: unscramble a pool of letters into the word the
//! clue describes, with hints and a reveal when stuck.
//!
//! # Quick Start
//!
//! ```rust
//! use powerletter::catalog::{GameKind, LevelCatalog};
//! use powerletter::core::PuzzleEngine;
//!
//! let catalog = LevelCatalog::embedded().unwrap();
//! let level = catalog.first_level(GameKind::ClueWordFind).unwrap();
//!
//! let mut engine = PuzzleEngine::new();
//! let snapshot = engine.start_level(level);
//! println!("Clue: {}", level.clue);
//! println!("Letters: {:?}", snapshot.display_order);
//!
//! assert_eq!(engine.request_hint(), Some("European city"));
//! ```

// Core puzzle engine
pub mod core;

// Level data
pub mod catalog;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
