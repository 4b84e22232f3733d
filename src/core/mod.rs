//! Core domain types for Wordle
//!
//! Words, per-letter feedback and the hard mode rule. Everything here is pure:
//! no I/O, no randomness.

mod feedback;
pub mod hard_mode;
mod letters;
mod word;

pub use feedback::{Feedback, LetterStatus, classify};
pub use hard_mode::HardModeViolation;
pub use letters::{ALPHABET_SIZE, LetterCounts};
pub use word::{WORD_LENGTH, Word, WordError};
