//! Formatting utilities for terminal output

use crate::core::LetterTile;

/// Placeholder shown for a tile already used in the answer
pub const USED_TILE: char = '·';

/// Format letter tiles as a row, used tiles replaced by a dot
#[must_use]
pub fn tiles_to_string(tiles: &[LetterTile]) -> String {
    tiles
        .iter()
        .map(|tile| {
            let shown = if tile.used { USED_TILE } else { tile.letter };
            format!("[{shown}]")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format the answer as spaced letters padded with blanks to `slots`
///
/// An answer longer than `slots` is shown in full.
#[must_use]
pub fn answer_slots(answer: &[char], slots: usize) -> String {
    let blanks = slots.saturating_sub(answer.len());
    answer
        .iter()
        .copied()
        .chain(std::iter::repeat_n('_', blanks))
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value.min(max) * width) / max
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Short "2/3" style label for hint usage
#[must_use]
pub fn hint_label(revealed: usize, total: usize) -> String {
    if total == 0 {
        "no hints".to_string()
    } else {
        format!("{revealed}/{total} hints used")
    }
}
