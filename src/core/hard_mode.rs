//! Hard mode guess validation
//!
//! In hard mode every guess must reuse what the previous guess revealed:
//! each misplaced letter somewhere in the word, and each right letter at the
//! same position.

use super::feedback::Feedback;
use super::word::Word;
use std::fmt;

/// Reason a candidate guess breaks hard mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardModeViolation {
    /// A letter marked misplaced last turn is missing (or too rare) in the candidate
    MissingMisplaced { letter: u8 },
    /// A position marked right last turn holds a different letter
    WrongPosition { position: usize, letter: u8 },
}

impl HardModeViolation {
    /// Short machine-readable reason code
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::MissingMisplaced { .. } => "missing-misplaced",
            Self::WrongPosition { .. } => "wrong-position",
        }
    }
}

impl fmt::Display for HardModeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::MissingMisplaced { letter } => {
                write!(f, "Guess must contain {}", char::from(letter).to_ascii_uppercase())
            }
            Self::WrongPosition { position, letter } => write!(
                f,
                "Letter {} must be {}",
                position + 1,
                char::from(letter).to_ascii_uppercase()
            ),
        }
    }
}

impl std::error::Error for HardModeViolation {}

/// Check `candidate` against the feedback of the previous guess
///
/// The first guess of a game (`previous == None`) is always accepted. The
/// misplaced-letter check runs before the position check, so a candidate
/// failing both reports [`HardModeViolation::MissingMisplaced`].
///
/// # Errors
/// Returns the first [`HardModeViolation`] found.
///
/// # Examples
/// ```
/// use wordle_term::core::{Word, classify, hard_mode};
///
/// let previous = classify(&Word::new("glare").unwrap(), &Word::new("beach").unwrap());
///
/// assert!(hard_mode::validate(&Word::new("peach").unwrap(), Some(&previous)).is_ok());
/// assert!(hard_mode::validate(&Word::new("toast").unwrap(), Some(&previous)).is_err());
/// ```
pub fn validate(candidate: &Word, previous: Option<&Feedback>) -> Result<(), HardModeViolation> {
    let Some(previous) = previous else {
        return Ok(());
    };

    if let Some(letter) = previous
        .misplaced_counts()
        .first_excess_over(&candidate.letter_counts())
    {
        return Err(HardModeViolation::MissingMisplaced { letter });
    }

    if let Some((position, letter)) = previous
        .right_letters()
        .find(|&(position, letter)| candidate.letter_at(position) != letter)
    {
        return Err(HardModeViolation::WrongPosition { position, letter });
    }

    Ok(())
}
