//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. Each input line is either a command word
//! or a run of letters to append.

use crate::catalog::{GameKind, LevelCatalog};
use crate::core::{PuzzleDefinition, PuzzleEngine};
use crate::output::display::{print_level_screen, print_reply};
use anyhow::{Result, bail};
use std::io::{self, Write};

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    Letters(String),
    Delete,
    Clear,
    Check,
    Hint,
    Reveal,
    Next,
    Level(u32),
    Help,
    Quit,
}

/// Parse one line of input
///
/// Whole-line command words take precedence over letters, so a word such as
/// `next` has to be typed in two pieces to enter its letters.
#[must_use]
pub fn parse_command(input: &str) -> SimpleCommand {
    let trimmed = input.trim();
    let lower = trimmed.to_lowercase();

    match lower.as_str() {
        "" | "check" => SimpleCommand::Check,
        "del" | "delete" | "-" => SimpleCommand::Delete,
        "clear" => SimpleCommand::Clear,
        "hint" | "?" => SimpleCommand::Hint,
        "reveal" | "!" => SimpleCommand::Reveal,
        "next" | ">" => SimpleCommand::Next,
        "help" => SimpleCommand::Help,
        "quit" | "exit" => SimpleCommand::Quit,
        _ => lower
            .strip_prefix("level ")
            .and_then(|id| id.trim().parse().ok())
            .map_or_else(
                || SimpleCommand::Letters(trimmed.to_string()),
                SimpleCommand::Level,
            ),
    }
}

/// Feedback produced by a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Info(String),
    Success(String),
    Error(String),
    Hint(String),
    Quit,
}

/// Play state for the text mode
pub struct SimpleSession<'a> {
    levels: &'a [PuzzleDefinition],
    index: usize,
    engine: PuzzleEngine<'a>,
    hints: Vec<&'a str>,
}

impl<'a> SimpleSession<'a> {
    /// Start at the first level of `levels`
    ///
    /// # Errors
    ///
    /// Returns an error if `levels` is empty.
    pub fn new(levels: &'a [PuzzleDefinition]) -> Result<Self> {
        let Some(first) = levels.first() else {
            bail!("no levels to play");
        };

        let mut engine = PuzzleEngine::new();
        engine.start_level(first);
        Ok(Self {
            levels,
            index: 0,
            engine,
            hints: Vec::new(),
        })
    }

    #[must_use]
    pub const fn engine(&self) -> &PuzzleEngine<'a> {
        &self.engine
    }

    #[must_use]
    pub fn current_level(&self) -> &'a PuzzleDefinition {
        let levels = self.levels;
        &levels[self.index]
    }

    /// 1-based level number and total
    #[must_use]
    pub const fn progress(&self) -> (usize, usize) {
        (self.index + 1, self.levels.len())
    }

    /// Hints revealed so far in this level
    #[must_use]
    pub fn hints(&self) -> &[&'a str] {
        &self.hints
    }

    fn start(&mut self, index: usize) {
        self.index = index;
        self.hints.clear();
        let levels = self.levels;
        self.engine.start_level(&levels[index]);
    }

    /// Apply one command
    pub fn apply(&mut self, command: SimpleCommand) -> Vec<Reply> {
        let solved = self.engine.snapshot().solved;

        match command {
            SimpleCommand::Letters(_)
            | SimpleCommand::Delete
            | SimpleCommand::Clear
            | SimpleCommand::Check
            | SimpleCommand::Hint
                if solved =>
            {
                vec![Reply::Info(
                    "Level solved! Type 'next' for the next level.".to_string(),
                )]
            }
            SimpleCommand::Letters(letters) => self.type_letters(&letters),
            SimpleCommand::Delete => {
                self.engine.remove_last_letter();
                Vec::new()
            }
            SimpleCommand::Clear => {
                self.engine.clear_answer();
                Vec::new()
            }
            SimpleCommand::Check => self.check(),
            SimpleCommand::Hint => match self.engine.request_hint() {
                Some(hint) => {
                    self.hints.push(hint);
                    vec![Reply::Hint(hint.to_string())]
                }
                None => vec![Reply::Error("No more hints for this level.".to_string())],
            },
            SimpleCommand::Reveal => match self.engine.reveal_solution() {
                Some(solution) => vec![Reply::Success(format!("The answer is {solution}"))],
                None => Vec::new(),
            },
            SimpleCommand::Next => {
                if self.index + 1 < self.levels.len() {
                    self.start(self.index + 1);
                    vec![Reply::Info(format!("Level {}", self.index + 1))]
                } else {
                    vec![Reply::Info("That was the last level!".to_string())]
                }
            }
            SimpleCommand::Level(id) => {
                match self.levels.iter().position(|level| level.id == id) {
                    Some(index) => {
                        self.start(index);
                        vec![Reply::Info(format!("Level {}", index + 1))]
                    }
                    None => vec![Reply::Error(format!("There is no level {id}."))],
                }
            }
            SimpleCommand::Help => vec![Reply::Info(HELP.to_string())],
            SimpleCommand::Quit => vec![Reply::Quit],
        }
    }

    fn type_letters(&mut self, letters: &str) -> Vec<Reply> {
        for typed in letters.chars().filter(|c| !c.is_whitespace()) {
            match self.engine.match_available_letter(typed) {
                Some(letter) => {
                    self.engine.append_letter(letter);
                }
                None => {
                    return vec![Reply::Error(format!("'{typed}' is not available"))];
                }
            }
        }
        Vec::new()
    }

    fn check(&mut self) -> Vec<Reply> {
        if self.engine.snapshot().answer.is_empty() {
            return vec![Reply::Error("Type some letters first.".to_string())];
        }

        if self.engine.check_answer() {
            let mut replies = vec![Reply::Success("Correct! Well done!".to_string())];
            if self.index + 1 < self.levels.len() {
                replies.push(Reply::Info("Type 'next' for the next level.".to_string()));
            } else {
                replies.push(Reply::Success("You finished every level!".to_string()));
            }
            replies
        } else {
            vec![Reply::Error("Not quite, try again.".to_string())]
        }
    }
}

const HELP: &str = "Type letters to add them. Commands: check (or empty line), del, clear, \
                    hint (?), reveal (!), next (>), level <id>, help, quit";

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the game has no levels or reading input fails.
pub fn run_simple(catalog: &LevelCatalog, kind: GameKind) -> Result<()> {
    if !kind.is_playable() {
        bail!("{} is coming soon", kind.title());
    }
    let mut session = SimpleSession::new(catalog.levels(kind))?;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  PowerLetter - Text Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("{}", kind.description());
    println!("{HELP}\n");

    loop {
        let (number, total) = session.progress();
        print_level_screen(
            session.current_level(),
            number,
            total,
            &session.engine().snapshot(),
            &session.engine().letter_tiles(),
            session.hints(),
        );

        let Some(input) = get_user_input("Letters or command")? else {
            break;
        };

        let replies = session.apply(parse_command(&input));
        if replies.contains(&Reply::Quit) {
            break;
        }
        for reply in &replies {
            print_reply(reply);
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels() -> Vec<PuzzleDefinition> {
        vec![
            PuzzleDefinition::new(1, "Capital of France", "R A P S I", "PARIS")
                .with_hints(["European city", "Starts with P"]),
            PuzzleDefinition::new(6, "Frozen water", "I C E", "ICE"),
        ]
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_command(""), SimpleCommand::Check);
        assert_eq!(parse_command("  CHECK "), SimpleCommand::Check);
        assert_eq!(parse_command("?"), SimpleCommand::Hint);
        assert_eq!(parse_command("del"), SimpleCommand::Delete);
        assert_eq!(parse_command("level 6"), SimpleCommand::Level(6));
        assert_eq!(parse_command("quit"), SimpleCommand::Quit);
        assert_eq!(
            parse_command("par"),
            SimpleCommand::Letters("par".to_string())
        );
        assert_eq!(
            parse_command("level x"),
            SimpleCommand::Letters("level x".to_string())
        );
    }

    #[test]
    fn empty_catalog_rejected() {
        assert!(SimpleSession::new(&[]).is_err());
    }

    #[test]
    fn type_and_check() {
        let levels = levels();
        let mut session = SimpleSession::new(&levels).unwrap();

        assert!(session.apply(SimpleCommand::Letters("pa ris".to_string())).is_empty());
        assert_eq!(session.engine().snapshot().answer_text(), "PARIS");

        let replies = session.apply(SimpleCommand::Check);
        assert!(matches!(replies[0], Reply::Success(_)));
        assert!(session.engine().snapshot().solved);
    }

    #[test]
    fn unavailable_letter_stops_typing() {
        let levels = levels();
        let mut session = SimpleSession::new(&levels).unwrap();

        let replies = session.apply(SimpleCommand::Letters("PPX".to_string()));
        assert_eq!(replies, vec![Reply::Error("'P' is not available".to_string())]);
        assert_eq!(session.engine().snapshot().answer_text(), "P");
    }

    #[test]
    fn check_empty_answer() {
        let levels = levels();
        let mut session = SimpleSession::new(&levels).unwrap();
        let replies = session.apply(SimpleCommand::Check);
        assert!(matches!(replies[0], Reply::Error(_)));
        assert!(!session.engine().snapshot().solved);
    }

    #[test]
    fn hints_collected_then_exhausted() {
        let levels = levels();
        let mut session = SimpleSession::new(&levels).unwrap();

        assert_eq!(
            session.apply(SimpleCommand::Hint),
            vec![Reply::Hint("European city".to_string())]
        );
        session.apply(SimpleCommand::Hint);
        assert!(matches!(session.apply(SimpleCommand::Hint)[0], Reply::Error(_)));
        assert_eq!(session.hints(), &["European city", "Starts with P"]);
    }

    #[test]
    fn reveal_then_edits_refused() {
        let levels = levels();
        let mut session = SimpleSession::new(&levels).unwrap();

        session.apply(SimpleCommand::Reveal);
        assert_eq!(session.engine().snapshot().answer_text(), "PARIS");

        let replies = session.apply(SimpleCommand::Delete);
        assert!(matches!(replies[0], Reply::Info(_)));
        assert_eq!(session.engine().snapshot().answer_text(), "PARIS");
    }

    #[test]
    fn check_after_reveal_is_not_a_win() {
        let levels = levels();
        let mut session = SimpleSession::new(&levels).unwrap();

        session.apply(SimpleCommand::Reveal);
        let replies = session.apply(SimpleCommand::Check);
        assert_eq!(
            replies,
            vec![Reply::Info(
                "Level solved! Type 'next' for the next level.".to_string()
            )]
        );
        assert!(!replies.iter().any(|r| matches!(r, Reply::Success(_))));
    }

    #[test]
    fn second_check_after_correct_answer_is_quiet() {
        let levels = levels();
        let mut session = SimpleSession::new(&levels).unwrap();

        session.apply(SimpleCommand::Letters("paris".to_string()));
        assert!(matches!(session.apply(SimpleCommand::Check)[0], Reply::Success(_)));
        assert!(matches!(session.apply(SimpleCommand::Check)[0], Reply::Info(_)));
    }

    #[test]
    fn no_hints_once_solved() {
        let levels = levels();
        let mut session = SimpleSession::new(&levels).unwrap();

        session.apply(SimpleCommand::Reveal);
        let replies = session.apply(SimpleCommand::Hint);
        assert!(matches!(replies[0], Reply::Info(_)));
        assert!(session.hints().is_empty());
        assert_eq!(session.engine().snapshot().hints_revealed, 0);
    }

    #[test]
    fn next_and_level_navigation() {
        let levels = levels();
        let mut session = SimpleSession::new(&levels).unwrap();
        session.apply(SimpleCommand::Hint);

        session.apply(SimpleCommand::Next);
        assert_eq!(session.current_level().id, 6);
        assert_eq!(session.progress(), (2, 2));
        assert!(session.hints().is_empty());

        let replies = session.apply(SimpleCommand::Next);
        assert_eq!(
            replies,
            vec![Reply::Info("That was the last level!".to_string())]
        );

        session.apply(SimpleCommand::Level(1));
        assert_eq!(session.current_level().id, 1);
        assert!(matches!(
            session.apply(SimpleCommand::Level(42))[0],
            Reply::Error(_)
        ));
    }

    #[test]
    fn quit_reply() {
        let levels = levels();
        let mut session = SimpleSession::new(&levels).unwrap();
        assert_eq!(session.apply(SimpleCommand::Quit), vec![Reply::Quit]);
    }
}
