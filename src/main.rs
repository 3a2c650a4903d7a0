//! Wordle Share - CLI
//!
//! Play a puzzle shared as a link, or the word of the day, in a TUI or on plain stdin.

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use log::{debug, info};
use wordle_share::{
    commands::{ShareConfig, run_simple, score_guess, share_word},
    core::Word,
    game::{GameConfig, PuzzleOptions},
    output::{print_score_result, print_share_result},
    puzzle::{AnswerSource, PuzzleSource, share::DEFAULT_BASE_URL},
    wordlists::{
        ANSWERS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_share",
    about = "Terminal Wordle for shared puzzles: play a friend's link or the daily word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle link, e.g. 'https://host/?word=crane' or 'https://host/#UkTBJ1Q'
    #[arg(short, long, global = true)]
    link: Option<String>,

    /// Play the word of the day instead of a link
    #[arg(short, long, global = true, conflicts_with = "link")]
    daily: bool,

    /// Date for the daily puzzle (implies --daily)
    #[arg(long, global = true, value_name = "YYYY-MM-DD", conflicts_with = "link")]
    date: Option<NaiveDate>,

    /// Only accept guesses from the word list
    #[arg(short, long, global = true)]
    strict: bool,

    /// Custom word list file: the daily answers, also accepted as guesses
    #[arg(short = 'w', long, global = true, value_name = "PATH")]
    wordlist: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (one guess per line, no TUI)
    Simple,

    /// Score one guess against an answer
    Score {
        /// The answer word
        answer: String,

        /// The guessed word
        guess: String,
    },

    /// Print shareable links for a word
    Share {
        /// Word to share
        #[arg(required_unless_present = "random")]
        word: Option<String>,

        /// Base URL of the game page
        #[arg(short, long, default_value = DEFAULT_BASE_URL)]
        base: String,

        /// Pick a random word from the answer list
        #[arg(short, long, conflicts_with = "word")]
        random: bool,

        /// Print the word next to the links
        #[arg(long)]
        reveal: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut cli = Cli::parse();

    // Custom list replaces the embedded answers when given
    let custom = load_custom_list(cli.wordlist.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli, custom),
        Commands::Simple => run_simple_command(&cli, custom),
        Commands::Score { answer, guess } => run_score_command(&answer, &guess),
        Commands::Share {
            word, base, reveal, ..
        } => run_share_command(word, base, reveal, custom.as_deref()),
    }
}

/// Load the `--wordlist` file, if one was given
fn load_custom_list(wordlist: Option<&str>) -> Result<Option<Vec<Word>>> {
    let Some(path) = wordlist else {
        return Ok(None);
    };
    let words =
        load_from_file(path).with_context(|| format!("Failed to read word list '{path}'"))?;
    if words.is_empty() {
        bail!("Word list '{path}' contains no valid words");
    }
    info!("using {} words from {path}", words.len());
    Ok(Some(words))
}

/// Puzzle source and game rules from the global flags
fn build_game(cli: &Cli, words: Option<Vec<Word>>) -> Result<(PuzzleSource, GameConfig)> {
    let options = PuzzleOptions {
        link: cli.link.clone(),
        daily: cli.daily,
        date: cli.date,
        strict: cli.strict,
        words,
    };
    let (source, config) = options
        .resolve(Local::now().date_naive())
        .context("Failed to read puzzle link")?;
    debug!("puzzle source: {}", source.name());
    Ok((source, config))
}

fn run_play_command(cli: &Cli, custom: Option<Vec<Word>>) -> Result<()> {
    use wordle_share::interactive::{App, run_tui};

    let (source, config) = build_game(cli, custom)?;
    let app = App::new(source.answer(), config, source.title());
    run_tui(app)
}

fn run_simple_command(cli: &Cli, custom: Option<Vec<Word>>) -> Result<()> {
    let (source, config) = build_game(cli, custom)?;
    run_simple(&source, config).map_err(|e| anyhow::anyhow!(e))
}

fn run_score_command(answer: &str, guess: &str) -> Result<()> {
    let result = score_guess(answer, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&result);
    Ok(())
}

fn run_share_command(
    word: Option<String>,
    base_url: String,
    reveal: bool,
    custom: Option<&[Word]>,
) -> Result<()> {
    let pool = custom.map_or_else(|| words_from_slice(ANSWERS), <[Word]>::to_vec);
    let config = ShareConfig { word, base_url };
    let result = share_word(&config, &pool).map_err(|e| anyhow::anyhow!(e))?;
    print_share_result(&result, reveal);
    Ok(())
}
