//! Interactive game loop
//!
//! Reads guesses line by line and prints feedback rows until the game is won
//! or the guesses run out.

use crate::game::{Game, TurnOutcome};
use crate::output::formatters::{RenderStyle, render_feedback, share_grid};
use anyhow::{Result, bail};
use log::info;
use std::io::{BufRead, Write};

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayResult {
    /// Solved, with the number of guesses used
    Won(usize),
    Lost,
}

fn print_share_grid<W: Write>(out: &mut W, game: &Game<'_>, result: PlayResult) -> Result<()> {
    let score = match result {
        PlayResult::Won(guesses) => guesses.to_string(),
        PlayResult::Lost => "X".to_string(),
    };
    writeln!(out, "\nWordle {score}/{}", game.config().total_guesses)?;
    writeln!(out, "{}", share_grid(game.history()))?;
    Ok(())
}

/// Play `game` to the end
///
/// Rejected guesses print the reason and prompt again without using a turn.
///
/// # Errors
///
/// Returns an error if the game is already over, if reading input or
/// writing output fails, or if input ends before the game does.
pub fn run_play<R: BufRead, W: Write>(
    game: &mut Game<'_>,
    style: RenderStyle,
    input: &mut R,
    out: &mut W,
) -> Result<PlayResult> {
    let title = if game.config().hard_mode {
        "WORDLE: Hard Mode"
    } else {
        "WORDLE"
    };
    if game.is_over() {
        bail!("No guesses left to play");
    }
    writeln!(out, "{title}")?;

    loop {
        writeln!(out, "\n{} guess(es) left", game.remaining())?;
        write!(out, "Guess: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("Input closed before the game ended");
        }

        let outcome = match game.submit(&line) {
            Ok(outcome) => outcome,
            Err(rejection) => {
                writeln!(out, "{rejection}")?;
                continue;
            }
        };

        let row = render_feedback(outcome.feedback(), style);
        let result = match outcome {
            TurnOutcome::Won(_) => {
                writeln!(out, "{row}")?;
                writeln!(out, "Correct!")?;
                PlayResult::Won(game.history().len())
            }
            TurnOutcome::Continue(_) => {
                writeln!(out, "Wrong!")?;
                writeln!(out, "{row}")?;
                continue;
            }
            TurnOutcome::Lost(_) => {
                writeln!(out, "Wrong!")?;
                writeln!(out, "{row}")?;
                writeln!(out, "\nOut of guesses! It was \"{}\".", game.answer())?;
                PlayResult::Lost
            }
        };

        info!("Game over: {result:?}");
        print_share_grid(out, game, result)?;
        return Ok(result);
    }
}

/// Play a game on stdin/stdout
///
/// # Errors
///
/// Returns an error if terminal I/O fails.
pub fn play_on_terminal(game: &mut Game<'_>, style: RenderStyle) -> Result<PlayResult> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_play(game, style, &mut stdin.lock(), &mut stdout.lock())
}
