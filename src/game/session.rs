//! A single game: the answer, the remaining guesses and the last feedback

use super::GameConfig;
use crate::core::{Feedback, HardModeViolation, Word, WordError, classify, hard_mode};
use crate::wordlists::WordLists;
use log::debug;
use rand::Rng;
use std::fmt;

/// What happened after an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The guess was the answer
    Won(Feedback),
    /// Wrong guess, guesses remain
    Continue(Feedback),
    /// Wrong guess, no guesses remain
    Lost(Feedback),
}

impl TurnOutcome {
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        match self {
            Self::Won(f) | Self::Continue(f) | Self::Lost(f) => f,
        }
    }
}

/// Why a guess was refused; refused guesses never use up a turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessRejection {
    Malformed(WordError),
    HardMode(HardModeViolation),
    NotInWordList(Word),
    GameOver,
}

impl fmt::Display for GuessRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(e) => write!(f, "Invalid word, try again. ({e})"),
            Self::HardMode(v) => write!(
                f,
                "{v}. In hard mode, guesses must contain all misplaced letters and correct letters\n\
                 (in correct positions) from previous guess."
            ),
            Self::NotInWordList(_) => write!(f, "Invalid word, try again."),
            Self::GameOver => write!(f, "The game is already over."),
        }
    }
}

impl std::error::Error for GuessRejection {}

/// Game state
///
/// Only accepted guesses change state: each one uses a turn and replaces the
/// previous feedback that hard mode checks against.
#[derive(Debug, Clone)]
pub struct Game<'a> {
    words: &'a WordLists,
    config: GameConfig,
    answer: Word,
    remaining: usize,
    history: Vec<Feedback>,
    finished: bool,
}

impl<'a> Game<'a> {
    /// Start a game with an answer picked at random from `words`
    pub fn new<R: Rng + ?Sized>(words: &'a WordLists, config: GameConfig, rng: &mut R) -> Self {
        let answer = words.choose_answer(rng).clone();
        Self::with_answer(words, config, answer)
    }

    /// Start a game with a known answer
    #[must_use]
    pub fn with_answer(words: &'a WordLists, config: GameConfig, answer: Word) -> Self {
        debug!(
            "New game: {} guesses, hard mode {}",
            config.total_guesses, config.hard_mode
        );
        Self {
            words,
            remaining: config.total_guesses,
            config,
            answer,
            history: Vec::new(),
            finished: config.total_guesses == 0,
        }
    }

    /// Evaluate one guess
    ///
    /// Checks run in order: well-formed word, hard mode (if enabled), word
    /// list membership. The first failure is returned and nothing changes.
    ///
    /// # Errors
    /// Returns a [`GuessRejection`] when the guess is refused.
    pub fn submit(&mut self, input: &str) -> Result<TurnOutcome, GuessRejection> {
        if self.finished {
            return Err(GuessRejection::GameOver);
        }

        let guess = Word::new(input.trim()).map_err(GuessRejection::Malformed)?;

        if self.config.hard_mode {
            hard_mode::validate(&guess, self.previous_feedback())
                .map_err(GuessRejection::HardMode)?;
        }

        if !self.words.is_allowed(&guess) {
            return Err(GuessRejection::NotInWordList(guess));
        }

        let feedback = classify(&guess, &self.answer);
        self.remaining -= 1;
        self.history.push(feedback.clone());
        debug!("Guess {}: {}", feedback.guess(), feedback.to_emoji());

        let outcome = if feedback.is_win() {
            self.finished = true;
            TurnOutcome::Won(feedback)
        } else if self.remaining == 0 {
            self.finished = true;
            TurnOutcome::Lost(feedback)
        } else {
            TurnOutcome::Continue(feedback)
        };
        Ok(outcome)
    }

    /// Feedback for the latest accepted guess
    #[must_use]
    pub fn previous_feedback(&self) -> Option<&Feedback> {
        self.history.last()
    }

    #[must_use]
    pub fn history(&self) -> &[Feedback] {
        &self.history
    }

    /// Guesses left before the game is lost
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.finished
    }
}
