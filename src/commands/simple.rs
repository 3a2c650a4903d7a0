//! Simple line-based game
//!
//! Text-based play without the TUI: each line is one guess.

use crate::game::{GameConfig, KeyInput, KeyOutcome, Session, SessionStatus};
use crate::output::formatters::{board_lines, keyboard_lines};
use crate::puzzle::{AnswerSource, PuzzleError};
use colored::Colorize;
use log::warn;
use std::io::{self, BufRead, Write};

/// Run the line-based game on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple<S: AnswerSource>(source: &S, config: GameConfig) -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(source, config, stdin.lock(), stdout.lock()).map_err(|e| e.to_string())
}

/// Play a game reading guesses from `input` and writing to `out`
///
/// Without a usable puzzle only the "no puzzle" message is written.
///
/// # Errors
///
/// Returns any I/O error from `input` or `out`.
pub fn play_lines<S: AnswerSource, R: BufRead, W: Write>(
    source: &S,
    config: GameConfig,
    mut input: R,
    mut out: W,
) -> io::Result<()> {
    writeln!(out, "\n╔════════════════════════════════════════╗")?;
    writeln!(out, "║            Wordle - Line Mode           ║")?;
    writeln!(out, "╚════════════════════════════════════════╝\n")?;

    let answer = match source.answer() {
        Ok(answer) => answer,
        Err(e) => {
            warn!("{} source has no puzzle: {e}", source.name());
            let text = if e == PuzzleError::Missing {
                e.to_string()
            } else {
                format!("{}\n{e}", PuzzleError::Missing)
            };
            writeln!(out, "{}", text.red())?;
            return Ok(());
        }
    };

    writeln!(out, "Type a five-letter guess and press Enter.")?;
    writeln!(out, "Commands: 'quit' to exit, 'restart' to start this puzzle over\n")?;

    let title = source.title();
    let mut session = Session::new(answer, config);

    loop {
        if session.is_over() {
            write_end(&mut out, &session, &title)?;
            match prompt(&mut input, &mut out, "Play again? (yes/no)")?.as_deref() {
                Some("yes" | "y") => {
                    session = session.restart();
                    writeln!(out, "\n🔄 Same puzzle, fresh board!\n")?;
                    continue;
                }
                _ => {
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
            }
        }

        let label = format!("Guess {}/{}", session.row() + 1, session.max_guesses());
        let Some(line) = prompt(&mut input, &mut out, &label)? else {
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "restart" => {
                session = session.restart();
                writeln!(out, "\n🔄 Board cleared.\n")?;
                continue;
            }
            _ => {}
        }

        match enter_line(&mut session, &line) {
            KeyOutcome::Submitted(_) => {
                for row in board_lines(&session) {
                    writeln!(out, "  {row}")?;
                }
                writeln!(out)?;
                for row in keyboard_lines(session.keyboard()) {
                    writeln!(out, "  {row}")?;
                }
                writeln!(out)?;
            }
            KeyOutcome::Rejected(e) => writeln!(out, "❌ {}\n", e.to_string().red())?,
            _ => {}
        }
    }
}

/// Feed a typed line through the key dispatcher, then press Enter
///
/// Whatever is left of a previously rejected row is cleared first. Letters
/// past the fifth are dropped, as on the on-screen keyboard.
fn enter_line(session: &mut Session, line: &str) -> KeyOutcome {
    while session.handle_key(KeyInput::Delete) == KeyOutcome::Deleted {}
    for key in line.chars().filter_map(KeyInput::from_char) {
        session.handle_key(key);
    }
    session.handle_key(KeyInput::Enter)
}

fn write_end<W: Write>(out: &mut W, session: &Session, title: &str) -> io::Result<()> {
    let banner = match session.status() {
        SessionStatus::Won => session.message().bright_green().bold(),
        _ => session.message().bright_red().bold(),
    };
    writeln!(out, "{}", "═".repeat(42).bright_cyan())?;
    writeln!(out, "  {banner}")?;
    writeln!(out, "{}", "═".repeat(42).bright_cyan())?;
    writeln!(out, "\n{}\n", session.share_text(title))?;
    Ok(())
}

/// Prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
