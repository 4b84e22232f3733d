//! Command implementations

pub mod fetch;
pub mod play;
pub mod stats;

pub use fetch::run_fetch;
pub use play::{PlayResult, play_on_terminal, run_play};
pub use stats::{LetterStats, letter_stats};
