//! Display functions for command results

use super::formatters::{answer_slots, create_progress_bar, hint_label, tiles_to_string};
use crate::catalog::GameStatus;
use crate::commands::{GameSummary, Reply, VerifyReport};
use crate::core::{LetterTile, PuzzleDefinition, Snapshot};
use colored::Colorize;

/// Print the current level for the text mode
pub fn print_level_screen(
    level: &PuzzleDefinition,
    number: usize,
    total: usize,
    snapshot: &Snapshot<'_>,
    tiles: &[LetterTile],
    hints: &[&str],
) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Level {number}/{total}  {}  difficulty {}",
        create_progress_bar(number, total, 20).bright_black(),
        level.difficulty
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n🔍 Clue:    {}", level.clue.bright_yellow().bold());
    println!("   Letters: {}", tiles_to_string(tiles));

    let slots = level.solution.trim().chars().count();
    let answer = answer_slots(&snapshot.answer, slots);
    if snapshot.solved {
        println!("   Answer:  {}", answer.green().bold());
    } else {
        println!("   Answer:  {}", answer.bright_white().bold());
    }

    for (i, hint) in hints.iter().enumerate() {
        println!("   💡 Hint {}: {}", i + 1, hint.bright_cyan());
    }
    println!(
        "   {}",
        hint_label(snapshot.hints_revealed, level.hints.len()).bright_black()
    );
    println!();
}

/// Print the feedback for one text-mode command
pub fn print_reply(reply: &Reply) {
    match reply {
        Reply::Info(text) => println!("{text}"),
        Reply::Success(text) => println!("✅ {}", text.green().bold()),
        Reply::Error(text) => println!("❌ {}", text.red()),
        Reply::Hint(text) => println!("💡 {}", text.bright_cyan()),
        Reply::Quit => {}
    }
}

/// Print every game group and its levels
pub fn print_catalog_summary(summary: &[GameSummary]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "POWERLETTER GAMES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for game in summary {
        let badge = match game.status {
            GameStatus::Active => game.status.label().green().bold(),
            GameStatus::ComingSoon => game.status.label().yellow(),
        };
        println!(
            "\n{} ({}) [{badge}]",
            game.kind.title().bright_white().bold(),
            game.kind.id()
        );
        println!("   {}", game.kind.description());

        if game.levels.is_empty() {
            println!("   {}", "no levels".bright_black());
            continue;
        }

        for level in &game.levels {
            let direction = if level.right_to_left { "rtl" } else { "ltr" };
            println!(
                "   {:>3}. {:<40} {} letters, {} hints, difficulty {}, {} ({direction})",
                level.id,
                level.clue,
                level.letter_count,
                level.hint_count,
                level.difficulty,
                level.language
            );
        }
    }
    println!();
}

/// Print the result of verifying a game group
pub fn print_verify_report(report: &VerifyReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LEVEL VERIFICATION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for check in &report.checks {
        if check.solved {
            println!("   {:>3}. {} {}", check.id, "✓".green(), check.solution);
        } else {
            let missing: String = check.missing.iter().collect();
            println!(
                "   {:>3}. {} {} (missing letters: {})",
                check.id,
                "✗".red(),
                check.solution,
                missing.red().bold()
            );
        }
    }

    let failures = report.failures().len();
    println!();
    if failures == 0 {
        println!(
            "{}",
            format!("✅ All {} levels are solvable", report.checks.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ {failures} of {} levels cannot be solved", report.checks.len())
                .red()
                .bold()
        );
    }
}
