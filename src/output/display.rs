//! Display functions for command results

use super::formatters::colored_row;
use crate::commands::{ScoreResult, ShareResult};
use colored::Colorize;

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Answer: {}   Guess: {}",
        result.answer.text().bright_yellow().bold(),
        result.guess.text().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!(
        "\n  {}   {}",
        colored_row(&result.guess, result.feedback),
        result.feedback.to_emoji()
    );
    println!(
        "\n  Correct: {}   Present: {}",
        result.feedback.count_correct().to_string().green(),
        result.feedback.count_present().to_string().yellow()
    );
}

/// Print the links for a shared word
pub fn print_share_result(result: &ShareResult, reveal: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SHARE A PUZZLE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if reveal {
        println!("\n  Word:     {}", result.word.text().bright_yellow().bold());
    }
    println!("\n  Plain link:");
    println!("    {}", result.query_link.bright_white());
    println!("\n  Hidden link (answer not readable in the URL):");
    println!("    {}", result.fragment_link.bright_white());
    println!();
}
