//! Word lists for the game
//!
//! A [`WordLists`] value is built once at startup (from the JSON store, or
//! from a fresh fetch) and passed by reference to everything that needs it.

pub mod fetch;
pub mod store;

use crate::core::{Word, WordError};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;

/// Possible answers plus the extra words accepted as guesses
#[derive(Debug, Clone)]
pub struct WordLists {
    valid_answers: Vec<Word>,
    also_valid_guesses: Vec<Word>,
    allowed: FxHashSet<Word>,
}

/// Error type for unusable word lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    NoAnswers,
    InvalidWord {
        list: &'static str,
        word: String,
        source: WordError,
    },
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAnswers => write!(f, "Word lists contain no valid answers"),
            Self::InvalidWord { list, word, source } => {
                write!(f, "Invalid word {word:?} in {list}: {source}")
            }
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoAnswers => None,
            Self::InvalidWord { source, .. } => Some(source),
        }
    }
}

fn parse_list<S: AsRef<str>>(
    list: &'static str,
    words: &[S],
) -> Result<Vec<Word>, WordListError> {
    words
        .iter()
        .map(|w| {
            Word::new(w.as_ref()).map_err(|source| WordListError::InvalidWord {
                list,
                word: w.as_ref().to_string(),
                source,
            })
        })
        .collect()
}

impl WordLists {
    /// Build word lists from already validated words
    ///
    /// # Errors
    /// Returns [`WordListError::NoAnswers`] if `valid_answers` is empty.
    pub fn new(
        valid_answers: Vec<Word>,
        also_valid_guesses: Vec<Word>,
    ) -> Result<Self, WordListError> {
        if valid_answers.is_empty() {
            return Err(WordListError::NoAnswers);
        }

        let allowed = valid_answers
            .iter()
            .chain(&also_valid_guesses)
            .cloned()
            .collect();

        Ok(Self {
            valid_answers,
            also_valid_guesses,
            allowed,
        })
    }

    /// Build word lists from raw strings, rejecting any malformed entry
    ///
    /// # Errors
    /// Returns [`WordListError`] if any word is invalid or there are no answers.
    ///
    /// # Examples
    /// ```
    /// use wordle_term::core::Word;
    /// use wordle_term::wordlists::WordLists;
    ///
    /// let lists = WordLists::from_strings(&["crane"], &["zzzzz"]).unwrap();
    /// assert!(lists.is_allowed(&Word::new("zzzzz").unwrap()));
    /// assert!(WordLists::from_strings(&["cranes"], &["zzzzz"]).is_err());
    /// ```
    pub fn from_strings<A, G>(valid_answers: &[A], also_valid_guesses: &[G]) -> Result<Self, WordListError>
    where
        A: AsRef<str>,
        G: AsRef<str>,
    {
        Self::new(
            parse_list("valid_answers", valid_answers)?,
            parse_list("also_valid_guesses", also_valid_guesses)?,
        )
    }

    /// Words that may be chosen as the answer
    #[must_use]
    pub fn valid_answers(&self) -> &[Word] {
        &self.valid_answers
    }

    /// Words accepted as guesses but never chosen as the answer
    #[must_use]
    pub fn also_valid_guesses(&self) -> &[Word] {
        &self.also_valid_guesses
    }

    /// Check whether `word` is an acceptable guess
    #[must_use]
    pub fn is_allowed(&self, word: &Word) -> bool {
        self.allowed.contains(word)
    }

    /// Number of distinct acceptable guesses
    #[must_use]
    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }

    /// Pick a random answer
    pub fn choose_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.valid_answers[rng.random_range(0..self.valid_answers.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn membership_covers_both_lists() {
        let lists = WordLists::from_strings(&["crane", "slate"], &["aahed", "crane"]).unwrap();

        assert!(lists.is_allowed(&Word::new("slate").unwrap()));
        assert!(lists.is_allowed(&Word::new("aahed").unwrap()));
        assert!(!lists.is_allowed(&Word::new("zzzzz").unwrap()));
        assert_eq!(lists.allowed_count(), 3);
    }

    #[test]
    fn empty_answers_rejected() {
        let none: [&str; 0] = [];
        assert_eq!(
            WordLists::from_strings(&none, &["crane"]).unwrap_err(),
            WordListError::NoAnswers
        );
    }

    #[test]
    fn malformed_word_rejected() {
        let err = WordLists::from_strings(&["crane"], &["ok", "slate"]).unwrap_err();
        assert_eq!(
            err,
            WordListError::InvalidWord {
                list: "also_valid_guesses",
                word: "ok".to_string(),
                source: WordError::InvalidLength(2),
            }
        );
    }

    #[test]
    fn answers_chosen_from_answer_list_only() {
        let lists = WordLists::from_strings(&["crane", "slate"], &["aahed", "zymic"]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let answer = lists.choose_answer(&mut rng);
            assert!(lists.valid_answers().contains(answer));
        }
    }
}
