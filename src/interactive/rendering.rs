//! TUI rendering with ratatui
//!
//! Screens for the game menu and the clue game.

use super::app::{App, CheckResult, MessageStyle, Screen};
use crate::catalog::{GameKind, GameStatus};
use crate::core::TextDirection;
use crate::output::formatters::{USED_TILE, answer_slots};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    match app.screen {
        Screen::GameSelect => render_menu(f, app, chunks[1]),
        Screen::ClueGame => render_game(f, app, chunks[1]),
    }

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.screen {
        Screen::GameSelect => "🔤 POWERLETTER".to_string(),
        Screen::ClueGame => format!("🔍 POWERLETTER - {}", app.game.title()),
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_menu(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Games
            Constraint::Percentage(40), // Messages
        ])
        .split(area);

    let items: Vec<ListItem> = GameKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let selected = i == app.menu_index;
            let badge = match kind.status() {
                GameStatus::Active => Span::styled(
                    format!(" {} ", kind.status().label()),
                    Style::default().fg(Color::Black).bg(Color::Green),
                ),
                GameStatus::ComingSoon => Span::styled(
                    format!(" {} ", kind.status().label()),
                    Style::default().fg(Color::Black).bg(Color::Yellow),
                ),
            };
            let title_style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let mut lines = vec![
                Line::from(vec![
                    Span::raw(if selected { "▶ " } else { "  " }),
                    Span::styled(format!("{}. {}", i + 1, kind.title()), title_style),
                    Span::raw("  "),
                    badge,
                ]),
                Line::from(Span::styled(
                    format!("    {}", kind.description()),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(Span::styled(
                    format!("    {}", kind.features().join(" • ")),
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            if kind.is_playable() {
                lines.push(Line::from(Span::styled(
                    format!("    {} levels", app.catalog.level_count(*kind)),
                    Style::default().fg(Color::Cyan),
                )));
            }
            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect();

    let games = List::new(items).block(
        Block::default()
            .title(" Choose a Game ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(games, chunks[0]);

    render_messages(f, app, chunks[1]);
}

fn render_game(f: &mut Frame, app: &App, area: Rect) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Puzzle
            Constraint::Percentage(40), // Hints and messages
        ])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Clue
            Constraint::Length(5), // Answer
            Constraint::Min(5),    // Letters
        ])
        .split(main_chunks[0]);

    render_clue(f, app, left[0]);
    render_answer(f, app, left[1]);
    render_tiles(f, app, left[2]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Hints
            Constraint::Length(3), // Hint gauge
            Constraint::Min(5),    // Messages
        ])
        .split(main_chunks[1]);

    render_hints(f, app, right[0]);
    render_hint_gauge(f, app, right[1]);
    render_messages(f, app, right[2]);
}

fn alignment_for(direction: TextDirection) -> Alignment {
    if direction.is_rtl() {
        Alignment::Right
    } else {
        Alignment::Left
    }
}

fn render_clue(f: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.snapshot();
    let Some(level) = snapshot.definition else {
        return;
    };

    let content = vec![
        Line::from(Span::styled(
            level.clue.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Difficulty {} • {}", level.difficulty, level.language),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(alignment_for(snapshot.text_direction()))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Clue ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_answer(f: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.snapshot();
    let slots = snapshot
        .definition
        .map_or(0, |level| level.solution.trim().chars().count());

    let (color, verdict) = match app.result {
        Some(CheckResult::Correct) => (Color::Green, "✅ Correct!"),
        Some(CheckResult::Revealed) => (Color::Cyan, "👁 Solution revealed"),
        Some(CheckResult::Incorrect) => (Color::Red, "❌ Not quite"),
        None => (Color::White, ""),
    };

    let content = vec![
        Line::from(Span::styled(
            answer_slots(&snapshot.answer, slots),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(verdict, Style::default().fg(color))),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(alignment_for(snapshot.text_direction()))
        .block(
            Block::default()
                .title(" Your Answer ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(paragraph, area);
}

fn render_tiles(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for tile in app.engine.letter_tiles() {
        let span = if tile.used {
            Span::styled(
                format!(" {USED_TILE} "),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            Span::styled(
                format!(" {} ", tile.letter),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        };
        spans.push(span);
        spans.push(Span::raw(" "));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Letters ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(paragraph, area);
}

fn render_hints(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = if app.revealed_hints.is_empty() {
        vec![ListItem::new("Press ? for a hint").style(Style::default().fg(Color::DarkGray))]
    } else {
        app.revealed_hints
            .iter()
            .enumerate()
            .map(|(i, hint)| {
                ListItem::new(format!("💡 {}. {hint}", i + 1))
                    .style(Style::default().fg(Color::Yellow))
            })
            .collect()
    };

    let hints = List::new(items).block(Block::default().title(" Hints ").borders(Borders::ALL));
    f.render_widget(hints, area);
}

fn render_hint_gauge(f: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.snapshot();
    let total = snapshot.hints_revealed + snapshot.remaining_hints;
    let percent = if total == 0 {
        0
    } else {
        (snapshot.hints_revealed * 100 / total) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Hints Used ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Yellow))
        .percent(percent)
        .label(format!(
            "{}/{total} used | {} left",
            snapshot.hints_revealed, snapshot.remaining_hints
        ));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode_text = match app.screen {
        Screen::GameSelect => "Mode: Menu".to_string(),
        Screen::ClueGame => {
            if app.snapshot().solved {
                "Mode: Solved".to_string()
            } else {
                "Mode: Playing".to_string()
            }
        }
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let level_text = match app.screen {
        Screen::GameSelect => format!(
            "Levels: {}",
            app.catalog.level_count(GameKind::ClueWordFind)
        ),
        Screen::ClueGame => format!("Level {}/{}", app.level_index + 1, app.levels().len()),
    };
    let level = Paragraph::new(level_text).alignment(Alignment::Center);
    f.render_widget(level, chunks[1]);

    let help_text = match app.screen {
        Screen::GameSelect => "↑/↓: Choose | Enter: Play | q: Quit",
        Screen::ClueGame => {
            "Enter: Check | ⌫: Undo | Del: Clear | ?: Hint | ^R: Reveal | Tab: Next | Esc: Menu"
        }
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
