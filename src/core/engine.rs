//! Puzzle engine
//!
//! Owns the in-progress attempt at a single level and exposes every operation
//! the front ends need. All operations are total: calls made at the wrong time
//! (no level started, puzzle already solved, hints exhausted) are no-ops or
//! return `false`/`None` instead of failing.

use super::definition::{PuzzleDefinition, TextDirection};
use super::letters::LetterCounts;
use rand::Rng;
use rand::seq::SliceRandom;

/// Immutable view of the engine state
///
/// Returned after every operation; this is the only way front ends observe
/// the attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<'a> {
    pub definition: Option<&'a PuzzleDefinition>,
    pub answer: Vec<char>,
    pub display_order: Vec<char>,
    pub hints_revealed: usize,
    pub solved: bool,
    pub remaining_hints: usize,
    pub can_request_hint: bool,
}

impl Snapshot<'_> {
    /// The answer joined into a string
    #[must_use]
    pub fn answer_text(&self) -> String {
        self.answer.iter().collect()
    }

    /// Whether a level has been started
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.definition.is_some()
    }

    /// Reading direction of the active level; left-to-right with none
    #[must_use]
    pub fn text_direction(&self) -> TextDirection {
        self.definition
            .map_or(TextDirection::LeftToRight, PuzzleDefinition::text_direction)
    }
}

/// One position of the display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterTile {
    pub letter: char,
    /// Consumed by the current answer
    pub used: bool,
}

/// Mutable state of one play-through
#[derive(Debug, Clone)]
struct PuzzleAttempt<'a> {
    definition: &'a PuzzleDefinition,
    display_order: Vec<char>,
    answer: Vec<char>,
    hints_revealed: usize,
    solved: bool,
}

/// Puzzle state engine
///
/// # Examples
/// ```
/// use powerletter::core::{PuzzleDefinition, PuzzleEngine};
///
/// let level = PuzzleDefinition::new(1, "Capital of France", "R A P S I", "PARIS")
///     .with_hints(["European city", "Starts with P"]);
///
/// let mut engine = PuzzleEngine::new();
/// engine.start_level(&level);
/// for letter in "PARIS".chars() {
///     assert!(engine.can_use_letter(letter));
///     engine.append_letter(letter);
/// }
/// assert!(engine.check_answer());
/// assert!(engine.snapshot().solved);
/// ```
#[derive(Debug, Default)]
pub struct PuzzleEngine<'a> {
    attempt: Option<PuzzleAttempt<'a>>,
}

impl<'a> PuzzleEngine<'a> {
    #[must_use]
    pub const fn new() -> Self {
        Self { attempt: None }
    }

    /// Start a fresh attempt at `definition`, shuffling the pool with the thread RNG
    pub fn start_level(&mut self, definition: &'a PuzzleDefinition) -> Snapshot<'a> {
        self.start_level_with_rng(definition, &mut rand::rng())
    }

    /// Start a fresh attempt at `definition` using the given RNG for the shuffle
    ///
    /// The display order is computed here once and stays fixed until the next
    /// level starts.
    pub fn start_level_with_rng<R: Rng + ?Sized>(
        &mut self,
        definition: &'a PuzzleDefinition,
        rng: &mut R,
    ) -> Snapshot<'a> {
        let mut display_order = definition.letter_pool.clone();
        display_order.shuffle(rng);

        log::debug!(
            "starting level {} ({} letters, {} hints)",
            definition.id,
            display_order.len(),
            definition.hints.len()
        );

        self.attempt = Some(PuzzleAttempt {
            definition,
            display_order,
            answer: Vec::new(),
            hints_revealed: 0,
            solved: false,
        });
        self.snapshot()
    }

    /// Append `letter` to the answer
    ///
    /// The letter is appended even when it is not available: callers must gate
    /// with [`Self::can_use_letter`] first. Appending an unavailable letter
    /// over-consumes the pool and makes the attempt unsolvable until the letter
    /// is removed again.
    pub fn append_letter(&mut self, letter: char) -> Snapshot<'a> {
        let available = self.can_use_letter(letter);

        if let Some(attempt) = self.attempt.as_mut().filter(|a| !a.solved) {
            if !available {
                log::debug!("appending unavailable letter {letter:?}");
            }
            attempt.answer.push(letter);
        }
        self.snapshot()
    }

    /// Remove the last letter of the answer, if any
    pub fn remove_last_letter(&mut self) -> Snapshot<'a> {
        if let Some(attempt) = self.attempt.as_mut().filter(|a| !a.solved) {
            attempt.answer.pop();
        }
        self.snapshot()
    }

    /// Empty the answer unless the level is solved
    pub fn clear_answer(&mut self) -> Snapshot<'a> {
        if let Some(attempt) = self.attempt.as_mut().filter(|a| !a.solved) {
            attempt.answer.clear();
        }
        self.snapshot()
    }

    /// Compare the answer to the solution, ignoring case and surrounding whitespace
    ///
    /// Marks the attempt solved on a match.
    pub fn check_answer(&mut self) -> bool {
        let Some(attempt) = self.attempt.as_mut() else {
            return false;
        };

        let answer: String = attempt.answer.iter().collect();
        let correct = normalize(&answer) == normalize(&attempt.definition.solution);
        if correct {
            attempt.solved = true;
        }

        log::debug!(
            "checked answer {answer:?} for level {}: {}",
            attempt.definition.id,
            if correct { "correct" } else { "incorrect" }
        );
        correct
    }

    /// Reveal the next hint
    ///
    /// Returns `None` once every hint has been shown or when no level is active.
    pub fn request_hint(&mut self) -> Option<&'a str> {
        let attempt = self.attempt.as_mut()?;
        let definition = attempt.definition;

        let hint = definition.hints.get(attempt.hints_revealed)?;
        attempt.hints_revealed += 1;
        Some(hint.as_str())
    }

    /// Fill in the solution and mark the attempt solved
    ///
    /// Allowed at any time and idempotent. Returns `None` only when no level is
    /// active.
    pub fn reveal_solution(&mut self) -> Option<&'a str> {
        let attempt = self.attempt.as_mut()?;
        let definition = attempt.definition;

        attempt.answer = definition.solution.chars().collect();
        attempt.solved = true;
        log::debug!("revealed solution for level {}", definition.id);
        Some(definition.solution.as_str())
    }

    /// Display order with each tile marked used or free
    ///
    /// For every letter the answer consumes `k` times, the first `k` tiles of
    /// that letter in display order are marked used.
    #[must_use]
    pub fn letter_tiles(&self) -> Vec<LetterTile> {
        let Some(attempt) = &self.attempt else {
            return Vec::new();
        };

        let mut consumed = LetterCounts::from_letters(attempt.answer.iter().copied());
        attempt
            .display_order
            .iter()
            .map(|&letter| LetterTile {
                letter,
                used: consumed.take(letter),
            })
            .collect()
    }

    /// Letters still free to use, in display order
    ///
    /// Equal to the pool minus the answer as multisets, per letter value.
    #[must_use]
    pub fn available_letters(&self) -> Vec<char> {
        self.letter_tiles()
            .into_iter()
            .filter(|tile| !tile.used)
            .map(|tile| tile.letter)
            .collect()
    }

    /// Whether `letter` is among the available letters
    #[must_use]
    pub fn can_use_letter(&self, letter: char) -> bool {
        self.available_letters().contains(&letter)
    }

    /// Find the available pool token a typed character stands for
    ///
    /// An exact match wins; otherwise the first available token equal to
    /// `typed` ignoring case. Lets keyboard front ends accept `p` for a `P`
    /// tile.
    #[must_use]
    pub fn match_available_letter(&self, typed: char) -> Option<char> {
        let available = self.available_letters();
        if available.contains(&typed) {
            return Some(typed);
        }
        available
            .into_iter()
            .find(|&letter| letter.to_lowercase().eq(typed.to_lowercase()))
    }

    /// Current state of the attempt, or an empty snapshot before any level
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'a> {
        match &self.attempt {
            Some(attempt) => {
                let remaining_hints = attempt
                    .definition
                    .hints
                    .len()
                    .saturating_sub(attempt.hints_revealed);
                Snapshot {
                    definition: Some(attempt.definition),
                    answer: attempt.answer.clone(),
                    display_order: attempt.display_order.clone(),
                    hints_revealed: attempt.hints_revealed,
                    solved: attempt.solved,
                    remaining_hints,
                    can_request_hint: remaining_hints > 0,
                }
            }
            None => Snapshot {
                definition: None,
                answer: Vec::new(),
                display_order: Vec::new(),
                hints_revealed: 0,
                solved: false,
                remaining_hints: 0,
                can_request_hint: false,
            },
        }
    }

    /// Drop the current attempt
    pub fn reset(&mut self) {
        self.attempt = None;
    }
}

fn normalize(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn paris() -> PuzzleDefinition {
        PuzzleDefinition::new(1, "Capital of France", "P A R I S", "PARIS").with_hints(["h1", "h2"])
    }

    fn sorted(mut letters: Vec<char>) -> Vec<char> {
        letters.sort_unstable();
        letters
    }

    fn type_word(engine: &mut PuzzleEngine<'_>, word: &str) {
        for letter in word.chars() {
            engine.append_letter(letter);
        }
    }

    #[test]
    fn fresh_engine_is_empty() {
        let mut engine = PuzzleEngine::new();
        let snap = engine.snapshot();
        assert!(!snap.is_active());
        assert!(snap.answer.is_empty());
        assert!(!snap.can_request_hint);
        assert_eq!(snap.remaining_hints, 0);

        assert!(!engine.append_letter('A').is_active());
        assert!(engine.remove_last_letter().answer.is_empty());
        assert!(engine.clear_answer().answer.is_empty());
        assert!(!engine.check_answer());
        assert_eq!(engine.request_hint(), None);
        assert_eq!(engine.reveal_solution(), None);
        assert!(engine.available_letters().is_empty());
        assert!(!engine.can_use_letter('A'));
    }

    #[test]
    fn start_level_resets_attempt() {
        let def = paris();
        let mut engine = PuzzleEngine::new();
        engine.start_level(&def);
        type_word(&mut engine, "PA");
        engine.request_hint();

        let snap = engine.start_level(&def);
        assert!(snap.answer.is_empty());
        assert_eq!(snap.hints_revealed, 0);
        assert!(!snap.solved);
        assert_eq!(snap.remaining_hints, 2);
        assert!(snap.can_request_hint);
    }

    #[test]
    fn display_order_is_permutation_of_pool() {
        let def = PuzzleDefinition::new(10, "Flying vehicle", "A I R P L A N E", "AIRPLANE");
        let mut engine = PuzzleEngine::new();

        for _ in 0..20 {
            let snap = engine.start_level(&def);
            assert_eq!(sorted(snap.display_order), sorted(def.letter_pool.clone()));
        }
    }

    #[test]
    fn display_order_fixed_within_attempt() {
        let def = paris();
        let mut engine = PuzzleEngine::new();
        let first = engine.start_level_with_rng(&def, &mut StdRng::seed_from_u64(7));

        engine.append_letter('P');
        engine.remove_last_letter();
        engine.request_hint();
        assert_eq!(engine.snapshot().display_order, first.display_order);
        assert_eq!(engine.snapshot().display_order, first.display_order);
    }

    #[test]
    fn empty_pool_accepted() {
        let def = PuzzleDefinition::new(1, "Nothing", "", "X");
        let mut engine = PuzzleEngine::new();
        let snap = engine.start_level(&def);
        assert!(snap.is_active());
        assert!(snap.display_order.is_empty());
        assert!(engine.available_letters().is_empty());
        assert!(!engine.can_use_letter('X'));
    }

    #[test]
    fn solve_by_typing() {
        let def = paris();
        let mut engine = PuzzleEngine::new();
        engine.start_level(&def);
        type_word(&mut engine, "PARIS");

        assert!(engine.check_answer());
        assert!(engine.snapshot().solved);
        assert!(engine.available_letters().is_empty());
    }

    #[test]
    fn wrong_answer_not_solved() {
        let def = paris();
        let mut engine = PuzzleEngine::new();
        engine.start_level(&def);
        type_word(&mut engine, "PAIRS");

        assert!(!engine.check_answer());
        assert!(!engine.snapshot().solved);
    }

    #[test]
    fn empty_answer_never_correct() {
        let def = paris();
        let mut engine = PuzzleEngine::new();
        engine.start_level(&def);
        assert!(!engine.check_answer());
    }

    #[test]
    fn check_ignores_case_and_whitespace() {
        let def = paris();
        let mut engine = PuzzleEngine::new();
        engine.start_level(&def);
        type_word(&mut engine, "paris ");
        assert!(engine.check_answer());

        let padded = PuzzleDefinition::new(2, "", "P A R I S", "  Paris\n");
        engine.start_level(&padded);
        type_word(&mut engine, "PARIS");
        assert!(engine.check_answer());
    }

    #[test]
    fn remove_on_empty_is_noop() {
        let def = paris();
        let mut engine = PuzzleEngine::new();
        let before = engine.start_level(&def);
        let after = engine.remove_last_letter();
        assert_eq!(before, after);
    }

    #[test]
    fn remove_and_clear() {
        let def = paris();
        let mut engine = PuzzleEngine::new();
        engine.start_level(&def);
        type_word(&mut engine, "PAR");

        assert_eq!(engine.remove_last_letter().answer_text(), "PA");
        assert!(engine.can_use_letter('R'));
        assert!(engine.clear_answer().answer.is_empty());
        assert_eq!(sorted(engine.available_letters()), sorted(def.letter_pool.clone()));
    }

    #[test]
    fn mutations_ignored_after_solved() {
        let def = paris();
        let mut engine = PuzzleEngine::new();
        engine.start_level(&def);
        type_word(&mut engine, "PARIS");
        assert!(engine.check_answer());

        let solved = engine.snapshot();
        assert_eq!(engine.append_letter('X'), solved);
        assert_eq!(engine.remove_last_letter(), solved);
        assert_eq!(engine.clear_answer(), solved);
        assert_eq!(engine.reveal_solution(), Some("PARIS"));
        assert_eq!(engine.snapshot().answer_text(), "PARIS");
        assert!(engine.snapshot().solved);
    }

    #[test]
    fn repeated_letters_counted_per_value() {
        let def = PuzzleDefinition::new(1, "", "A A B", "AB");
        let mut engine = PuzzleEngine::new();
        engine.start_level(&def);
        engine.append_letter('A');

        assert_eq!(sorted(engine.available_letters()), vec!['A', 'B']);
        assert!(engine.can_use_letter('A'));

        engine.append_letter('A');
        assert_eq!(engine.available_letters(), vec!['B']);
        assert!(!engine.can_use_letter('A'));
    }

    #[test]
    fn over_consumption_is_trusted() {
        let def = PuzzleDefinition::new(1, "", "A B", "AB");
        let mut engine = PuzzleEngine::new();
        engine.start_level(&def);
        engine.append_letter('A');
        assert!(!engine.can_use_letter('A'));

        let snap = engine.append_letter('A');
        assert_eq!(snap.answer_text(), "AA");
        assert_eq!(engine.available_letters(), vec!['B']);
    }

    #[test]
    fn available_letters_follow_display_order() {
        let def = PuzzleDefinition::new(7, "", "B A N A N A", "BANANA");
        let mut engine = PuzzleEngine::new();
        let snap = engine.start_level(&def);
        engine.append_letter('A');

        let mut expected = snap.display_order.clone();
        let first_a = expected.iter().position(|&c| c == 'A').unwrap();
        expected.remove(first_a);
        assert_eq!(engine.available_letters(), expected);
    }

    #[test]
    fn typed_letters_match_ignoring_case() {
        let def = PuzzleDefinition::new(6, "Frozen water", "I C E", "ICE");
        let mut engine = PuzzleEngine::new();
        engine.start_level(&def);

        assert_eq!(engine.match_available_letter('i'), Some('I'));
        assert_eq!(engine.match_available_letter('C'), Some('C'));
        assert_eq!(engine.match_available_letter('x'), None);

        engine.append_letter('I');
        assert_eq!(engine.match_available_letter('i'), None);
    }

    #[test]
    fn tiles_mark_consumed_positions() {
        let def = PuzzleDefinition::new(1, "", "A A B", "AAB");
        let mut engine = PuzzleEngine::new();
        engine.start_level(&def);
        engine.append_letter('A');

        let tiles = engine.letter_tiles();
        assert_eq!(tiles.len(), 3);
        assert_eq!(tiles.iter().filter(|t| t.used).count(), 1);
        let used = tiles.iter().find(|t| t.used).unwrap();
        assert_eq!(used.letter, 'A');
    }

    #[test]
    fn availability_matches_multiset_model() {
        let def = PuzzleDefinition::new(7, "", "B A N A N A X", "BANANA");
        let alphabet = ['A', 'B', 'N', 'X', 'Z'];
        let mut rng = StdRng::seed_from_u64(42);
        let mut engine = PuzzleEngine::new();
        engine.start_level_with_rng(&def, &mut rng);

        for _ in 0..500 {
            match rng.random_range(0..10) {
                0 => {
                    engine.clear_answer();
                }
                1..=3 => {
                    engine.remove_last_letter();
                }
                _ => {
                    let letter = alphabet[rng.random_range(0..alphabet.len())];
                    engine.append_letter(letter);
                }
            }

            let answer = engine.snapshot().answer;
            let pool = LetterCounts::from_letters(def.letter_pool.iter().copied());
            let expected = pool.saturating_sub(&LetterCounts::from_letters(answer));
            let available = LetterCounts::from_letters(engine.available_letters());
            assert_eq!(available, expected);
        }
    }

    #[test]
    fn hints_in_order_then_exhausted() {
        let def = paris();
        let mut engine = PuzzleEngine::new();
        engine.start_level(&def);

        assert_eq!(engine.request_hint(), Some("h1"));
        assert_eq!(engine.snapshot().remaining_hints, 1);
        assert_eq!(engine.request_hint(), Some("h2"));
        assert_eq!(engine.request_hint(), None);

        let snap = engine.snapshot();
        assert_eq!(snap.remaining_hints, 0);
        assert_eq!(snap.hints_revealed, 2);
        assert!(!snap.can_request_hint);
    }

    #[test]
    fn level_without_hints() {
        let def = PuzzleDefinition::new(3, "King of the jungle", "L I O N", "LION");
        let mut engine = PuzzleEngine::new();
        let snap = engine.start_level(&def);
        assert!(!snap.can_request_hint);
        assert_eq!(engine.request_hint(), None);
    }

    #[test]
    fn hints_still_available_after_solving() {
        let def = paris();
        let mut engine = PuzzleEngine::new();
        engine.start_level(&def);
        engine.reveal_solution();
        assert_eq!(engine.request_hint(), Some("h1"));
    }

    #[test]
    fn reveal_on_fresh_attempt() {
        let def = paris();
        let mut engine = PuzzleEngine::new();
        engine.start_level(&def);
        engine.request_hint();
        engine.append_letter('S');

        assert_eq!(engine.reveal_solution(), Some("PARIS"));
        let snap = engine.snapshot();
        assert_eq!(snap.answer_text(), "PARIS");
        assert!(snap.solved);
        assert!(engine.check_answer());
    }

    #[test]
    fn reset_clears_attempt() {
        let def = paris();
        let mut engine = PuzzleEngine::new();
        engine.start_level(&def);
        engine.append_letter('P');
        engine.reset();

        assert_eq!(engine.snapshot(), PuzzleEngine::new().snapshot());
        assert!(engine.letter_tiles().is_empty());
    }

    #[test]
    fn snapshot_reports_direction() {
        let def = PuzzleDefinition::new(9, "الشمس", "ش م س", "شمس")
            .with_language(crate::core::Language::new("arabic"));
        let mut engine = PuzzleEngine::new();
        assert_eq!(engine.snapshot().text_direction(), TextDirection::LeftToRight);

        let snap = engine.start_level(&def);
        assert!(snap.text_direction().is_rtl());

        type_word(&mut engine, "شمس");
        assert!(engine.check_answer());
    }
}
