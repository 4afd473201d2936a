//! TUI application state and logic

use crate::catalog::{GameKind, LevelCatalog};
use crate::core::{PuzzleDefinition, PuzzleEngine, Snapshot};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub catalog: &'a LevelCatalog,
    pub engine: PuzzleEngine<'a>,
    pub screen: Screen,
    pub menu_index: usize,
    pub game: GameKind,
    pub level_index: usize,
    /// Hints shown so far; the engine only hands each one out once
    pub revealed_hints: Vec<&'a str>,
    pub result: Option<CheckResult>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    GameSelect,
    ClueGame,
}

/// Outcome of the last check shown in the answer panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckResult {
    Correct,
    Incorrect,
    Revealed,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(catalog: &'a LevelCatalog) -> Self {
        let menu_index = GameKind::ALL
            .iter()
            .position(|kind| kind.is_playable())
            .unwrap_or(0);

        Self {
            catalog,
            engine: PuzzleEngine::new(),
            screen: Screen::GameSelect,
            menu_index,
            game: GameKind::ClueWordFind,
            level_index: 0,
            revealed_hints: Vec::new(),
            result: None,
            messages: vec![Message {
                text: "Welcome to PowerLetter! Pick a game to start.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'a> {
        self.engine.snapshot()
    }

    #[must_use]
    pub fn levels(&self) -> &'a [PuzzleDefinition] {
        self.catalog.levels(self.game)
    }

    #[must_use]
    pub fn current_level(&self) -> Option<&'a PuzzleDefinition> {
        self.snapshot().definition
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Open the game highlighted in the menu
    pub fn select_game(&mut self) {
        let kind = GameKind::ALL[self.menu_index];

        if !kind.is_playable() {
            self.add_message(
                &format!(
                    "{} is coming soon! Please try {}.",
                    kind.title(),
                    GameKind::ClueWordFind.title()
                ),
                MessageStyle::Error,
            );
            return;
        }
        if self.catalog.level_count(kind) == 0 {
            self.add_message(
                &format!("No levels available for {}", kind.title()),
                MessageStyle::Error,
            );
            return;
        }

        self.game = kind;
        self.screen = Screen::ClueGame;
        self.messages.clear();
        self.start_level(0);
    }

    pub fn back_to_menu(&mut self) {
        self.engine.reset();
        self.revealed_hints.clear();
        self.result = None;
        self.screen = Screen::GameSelect;
        self.messages.clear();
    }

    /// Start the level at `index` within the current game
    pub fn start_level(&mut self, index: usize) {
        let Some(level) = self.levels().get(index) else {
            return;
        };

        self.level_index = index;
        self.revealed_hints.clear();
        self.result = None;
        self.engine.start_level(level);
        self.add_message(
            &format!("Level {} of {}", index + 1, self.levels().len()),
            MessageStyle::Info,
        );
    }

    pub fn next_level(&mut self) {
        if self.level_index + 1 < self.levels().len() {
            self.start_level(self.level_index + 1);
        } else {
            self.add_message("That was the last level!", MessageStyle::Info);
        }
    }

    pub fn previous_level(&mut self) {
        if self.level_index > 0 {
            self.start_level(self.level_index - 1);
        }
    }

    /// Add a typed letter if one of the tiles matches it
    pub fn type_letter(&mut self, typed: char) {
        if self.snapshot().solved {
            return;
        }

        if let Some(letter) = self.engine.match_available_letter(typed) {
            self.engine.append_letter(letter);
            self.result = None;
        } else {
            self.add_message(&format!("'{typed}' is not available"), MessageStyle::Error);
        }
    }

    pub fn remove_letter(&mut self) {
        if self.snapshot().solved {
            return;
        }
        self.engine.remove_last_letter();
        self.result = None;
    }

    pub fn clear_answer(&mut self) {
        if self.snapshot().solved {
            return;
        }
        self.engine.clear_answer();
        self.result = None;
    }

    pub fn check_answer(&mut self) {
        if self.snapshot().answer.is_empty() {
            return;
        }

        if self.engine.check_answer() {
            self.result = Some(CheckResult::Correct);
            self.add_message("🎉 Correct! Well done!", MessageStyle::Success);
            if self.level_index + 1 < self.levels().len() {
                self.add_message("Press Enter for the next level.", MessageStyle::Info);
            } else {
                self.add_message("🏆 You finished every level!", MessageStyle::Success);
            }
        } else {
            self.result = Some(CheckResult::Incorrect);
            self.add_message("Not quite, try again!", MessageStyle::Error);
        }
    }

    /// Show the next hint; no hints once the level is solved
    pub fn request_hint(&mut self) {
        if self.snapshot().solved {
            return;
        }
        if let Some(hint) = self.engine.request_hint() {
            self.revealed_hints.push(hint);
        } else {
            self.add_message("No more hints for this level.", MessageStyle::Error);
        }
    }

    pub fn reveal_solution(&mut self) {
        if let Some(solution) = self.engine.reveal_solution() {
            self.result = Some(CheckResult::Revealed);
            self.add_message(&format!("The answer is {solution}"), MessageStyle::Info);
        }
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::GameSelect => self.handle_menu_key(key),
            Screen::ClueGame => self.handle_game_key(key),
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu_index = self.menu_index.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.menu_index = (self.menu_index + 1).min(GameKind::ALL.len() - 1);
            }
            KeyCode::Char(c @ '1'..='3') => {
                self.menu_index = (c as usize) - ('1' as usize);
                self.select_game();
            }
            KeyCode::Enter => self.select_game(),
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.back_to_menu(),
            KeyCode::Char('r') if ctrl => self.reveal_solution(),
            KeyCode::Char('n') if ctrl => self.next_level(),
            KeyCode::Char('u') if ctrl => self.clear_answer(),
            KeyCode::Tab => self.next_level(),
            KeyCode::Char('?') => self.request_hint(),
            KeyCode::Char('[') => self.previous_level(),
            KeyCode::Char(']') => self.next_level(),
            KeyCode::Char(c) if !ctrl && !c.is_whitespace() => self.type_letter(c),
            KeyCode::Backspace => self.remove_letter(),
            KeyCode::Delete => self.clear_answer(),
            KeyCode::Enter => {
                if self.snapshot().solved {
                    self.next_level();
                } else {
                    self.check_answer();
                }
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("TUI stopped: {err}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
