//! Game sessions
//!
//! Turn bookkeeping around the classifier and the hard mode rule, without any
//! terminal I/O.

mod session;

pub use session::{Game, GuessRejection, TurnOutcome};

/// Number of guesses a player gets by default
pub const TOTAL_GUESSES: usize = 6;

/// Settings for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub total_guesses: usize,
    pub hard_mode: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_guesses: TOTAL_GUESSES,
            hard_mode: false,
        }
    }
}
