//! Per-letter feedback for a guess
//!
//! Feedback is computed in two passes so that duplicate letters are never
//! credited more often than they occur in the answer:
//! 1. Exact position matches are marked [`LetterStatus::Right`] and claim one
//!    occurrence of their letter.
//! 2. Remaining positions, left to right, are [`LetterStatus::Misplaced`] while
//!    the answer still holds an unclaimed occurrence of the letter, otherwise
//!    [`LetterStatus::Wrong`].

use super::letters::LetterCounts;
use super::word::{WORD_LENGTH, Word};

/// Status of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// Letter is at this exact position in the answer
    Right,
    /// Letter occurs in the answer, but not (unclaimed) at this position
    Misplaced,
    /// Letter cannot be credited
    Wrong,
}

impl LetterStatus {
    /// Share-grid square for this status
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Right => '🟩',
            Self::Misplaced => '🟨',
            Self::Wrong => '⬛',
        }
    }
}

/// The evaluated result of one guess against the answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    guess: Word,
    statuses: [LetterStatus; WORD_LENGTH],
}

/// Classify every letter of `guess` against `answer`
///
/// Both words have [`WORD_LENGTH`] letters by construction. For any letter,
/// the number of positions marked right or misplaced never exceeds the number
/// of times it occurs in `answer`.
///
/// # Examples
/// ```
/// use wordle_term::core::{LetterStatus, Word, classify};
///
/// let answer = Word::new("allot").unwrap();
/// let guess = Word::new("lolly").unwrap();
/// let feedback = classify(&guess, &answer);
///
/// use LetterStatus::{Misplaced, Right, Wrong};
/// assert_eq!(feedback.statuses(), &[Misplaced, Misplaced, Right, Wrong, Wrong]);
/// ```
#[must_use]
pub fn classify(guess: &Word, answer: &Word) -> Feedback {
    let available = answer.letter_counts();
    let mut claimed = LetterCounts::default();
    let mut statuses = [LetterStatus::Wrong; WORD_LENGTH];

    for ((status, &g), &a) in statuses
        .iter_mut()
        .zip(guess.letters())
        .zip(answer.letters())
    {
        if g == a {
            *status = LetterStatus::Right;
            claimed.add(g);
        }
    }

    for (status, &g) in statuses.iter_mut().zip(guess.letters()) {
        if *status != LetterStatus::Right && available.get(g) > claimed.get(g) {
            *status = LetterStatus::Misplaced;
            claimed.add(g);
        }
    }

    Feedback {
        guess: guess.clone(),
        statuses,
    }
}

impl Feedback {
    /// The guess this feedback describes
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.statuses
    }

    /// Each guessed letter paired with its status, in position order
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterStatus)> + '_ {
        self.guess
            .letters()
            .iter()
            .copied()
            .zip(self.statuses.iter().copied())
    }

    /// Check if every letter is right
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.statuses.iter().all(|&s| s == LetterStatus::Right)
    }

    /// Positions marked right, with the letter found there
    pub fn right_letters(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.iter()
            .enumerate()
            .filter(|(_, (_, status))| *status == LetterStatus::Right)
            .map(|(position, (letter, _))| (position, letter))
    }

    /// Multiset of letters marked misplaced
    #[must_use]
    pub fn misplaced_counts(&self) -> LetterCounts {
        self.iter()
            .filter(|&(_, status)| status == LetterStatus::Misplaced)
            .map(|(letter, _)| letter)
            .collect()
    }

    /// Convert to a share-grid row such as "⬛🟨🟩⬛🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.statuses.iter().map(|s| s.emoji()).collect()
    }
}
