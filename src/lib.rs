//! Terminal Wordle
//!
//! A Wordle clone for the terminal: colored or plain feedback, an optional
//! hard mode, and word lists scraped from the puzzle's website.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_term::core::{LetterStatus, Word, classify};
//!
//! let guess = Word::new("trace").unwrap();
//! let answer = Word::new("crane").unwrap();
//!
//! let feedback = classify(&guess, &answer);
//! assert_eq!(feedback.statuses()[3], LetterStatus::Misplaced);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Game sessions
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
