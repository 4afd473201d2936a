//! Letter multiset accounting
//!
//! Availability is tracked per letter value, not per pool position: a pool of
//! `A A B` with one `A` in the answer still has one `A` left.

use rustc_hash::FxHashMap;

/// Multiset of letters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    // Never holds a zero count, so the derived equality is multiset equality
    counts: FxHashMap<char, usize>,
}

impl LetterCounts {
    pub fn from_letters<I: IntoIterator<Item = char>>(letters: I) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for letter in letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// How many copies of `letter` are held
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters, duplicates included
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Take one copy of `letter` out; returns false if none is left
    pub fn take(&mut self, letter: char) -> bool {
        let Some(n) = self.counts.get_mut(&letter) else {
            return false;
        };
        *n -= 1;
        if *n == 0 {
            self.counts.remove(&letter);
        }
        true
    }

    /// Multiset difference, clamped at zero per letter
    #[must_use]
    pub fn saturating_sub(&self, other: &Self) -> Self {
        let counts = self
            .counts
            .iter()
            .filter_map(|(&letter, &n)| {
                let left = n.saturating_sub(other.count(letter));
                (left > 0).then_some((letter, left))
            })
            .collect();
        Self { counts }
    }

    /// Whether every letter of `other` is held at least as many times here
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        other
            .counts
            .iter()
            .all(|(&letter, &n)| self.count(letter) >= n)
    }
}
