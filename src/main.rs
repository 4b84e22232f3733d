//! Terminal Wordle - CLI
//!
//! Play Wordle in the terminal, refresh the word lists, or print letter
//! statistics for the answer list.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;
use wordle_term::{
    commands::{PlayResult, letter_stats, play_on_terminal, run_fetch},
    game::{Game, GameConfig, TOTAL_GUESSES},
    output::{Palette, RenderStyle, Theme, print_letter_stats},
    wordlists::{fetch::DEFAULT_URL, store::DEFAULT_LISTS_FILE, store::load_from_file},
};

const DEFAULT_GUESSES: NonZeroUsize = NonZeroUsize::new(TOTAL_GUESSES).unwrap();

#[derive(Parser)]
#[command(
    name = "wordle_term",
    about = "Wordle in the terminal, with hard mode and colored feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file written by `fetch`
    #[arg(short, long, global = true, default_value = DEFAULT_LISTS_FILE)]
    lists: PathBuf,

    /// Number of guesses per game (at least 1)
    #[arg(short, long, global = true, default_value_t = DEFAULT_GUESSES)]
    guesses: NonZeroUsize,

    /// Seed for choosing the answer (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Feedback style; `auto` uses colors only when stdout supports them
    #[arg(long, global = true, value_enum, default_value_t = StyleArg::Auto)]
    style: StyleArg,

    /// Board colors
    #[arg(long, global = true, value_enum, default_value_t = ThemeArg::Dark)]
    theme: ThemeArg,

    /// Use high contrast colors
    #[arg(long, global = true)]
    high_contrast: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in normal mode (default)
    Play,

    /// Play in hard mode
    Hard,

    /// Fetch word lists from the website into the word list file
    Fetch {
        /// Page to scrape
        #[arg(long, default_value = DEFAULT_URL)]
        url: String,
    },

    /// Print letter statistics for the answer list
    Stats,
}

#[derive(Clone, Copy, ValueEnum)]
enum StyleArg {
    Auto,
    Color,
    Plain,
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl Cli {
    fn render_style(&self) -> RenderStyle {
        let palette = Palette {
            theme: match self.theme {
                ThemeArg::Light => Theme::Light,
                ThemeArg::Dark => Theme::Dark,
            },
            high_contrast: self.high_contrast,
        };
        match self.style {
            StyleArg::Auto => RenderStyle::for_stdout(palette),
            StyleArg::Color => RenderStyle::Color(palette),
            StyleArg::Plain => RenderStyle::Plain,
        }
    }
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Default to normal play if no command given
    match cli.command.as_ref().unwrap_or(&Commands::Play) {
        Commands::Play => run_play_command(&cli, false),
        Commands::Hard => run_play_command(&cli, true),
        Commands::Fetch { url } => {
            run_fetch(url, &cli.lists)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Stats => {
            let lists = load_from_file(&cli.lists)?;
            print_letter_stats(&letter_stats(lists.valid_answers()));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_play_command(cli: &Cli, hard_mode: bool) -> Result<ExitCode> {
    let lists = load_from_file(&cli.lists)?;
    let config = GameConfig {
        total_guesses: cli.guesses.get(),
        hard_mode,
    };

    let mut rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut game = Game::new(&lists, config, &mut rng);

    match play_on_terminal(&mut game, cli.render_style())? {
        PlayResult::Won(_) => Ok(ExitCode::SUCCESS),
        PlayResult::Lost => Ok(ExitCode::FAILURE),
    }
}
