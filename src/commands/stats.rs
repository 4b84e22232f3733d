//! Letter frequency statistics over the answer list

use crate::core::{ALPHABET_SIZE, WORD_LENGTH, Word};
use rayon::prelude::*;

/// Letters with their occurrence counts, most common first
pub type Frequencies = Vec<(char, usize)>;

/// Letter frequencies over all answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterStats {
    pub total_words: usize,
    pub overall: Frequencies,
    pub by_position: Vec<Frequencies>,
}

impl LetterStats {
    /// Number of letters counted in [`Self::overall`]
    #[must_use]
    pub const fn total_letters(&self) -> usize {
        self.total_words * WORD_LENGTH
    }
}

#[derive(Clone, Copy)]
struct Tally {
    overall: [usize; ALPHABET_SIZE],
    by_position: [[usize; ALPHABET_SIZE]; WORD_LENGTH],
}

impl Default for Tally {
    fn default() -> Self {
        Self {
            overall: [0; ALPHABET_SIZE],
            by_position: [[0; ALPHABET_SIZE]; WORD_LENGTH],
        }
    }
}

impl Tally {
    fn add(mut self, word: &Word) -> Self {
        for (position, &letter) in word.letters().iter().enumerate() {
            let slot = usize::from(letter - b'a');
            self.overall[slot] += 1;
            self.by_position[position][slot] += 1;
        }
        self
    }

    fn merge(mut self, other: Self) -> Self {
        for (a, b) in self.overall.iter_mut().zip(other.overall) {
            *a += b;
        }
        for (row, other_row) in self.by_position.iter_mut().zip(other.by_position) {
            for (a, b) in row.iter_mut().zip(other_row) {
                *a += b;
            }
        }
        self
    }
}

/// Most common first; ties alphabetical; letters never seen are left out
fn frequencies(counts: &[usize; ALPHABET_SIZE]) -> Frequencies {
    let mut freqs: Frequencies = ('a'..='z')
        .zip(counts.iter().copied())
        .filter(|&(_, count)| count > 0)
        .collect();
    freqs.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    freqs
}

/// Count letters overall and per position across `answers`
#[must_use]
pub fn letter_stats(answers: &[Word]) -> LetterStats {
    let tally = answers
        .par_iter()
        .fold(Tally::default, Tally::add)
        .reduce(Tally::default, Tally::merge);

    LetterStats {
        total_words: answers.len(),
        overall: frequencies(&tally.overall),
        by_position: tally.by_position.iter().map(frequencies).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn overall_counts_sorted() {
        let stats = letter_stats(&words(&["allot", "lolly"]));

        assert_eq!(stats.total_words, 2);
        assert_eq!(stats.total_letters(), 10);
        assert_eq!(
            stats.overall,
            vec![('l', 5), ('o', 2), ('a', 1), ('t', 1), ('y', 1)]
        );
    }

    #[test]
    fn per_position_counts() {
        let stats = letter_stats(&words(&["crane", "crate", "slate"]));

        assert_eq!(stats.by_position.len(), WORD_LENGTH);
        assert_eq!(stats.by_position[0], vec![('c', 2), ('s', 1)]);
        assert_eq!(stats.by_position[2], vec![('a', 3)]);
        assert_eq!(stats.by_position[3], vec![('t', 2), ('n', 1)]);
    }

    #[test]
    fn no_answers() {
        let stats = letter_stats(&[]);
        assert_eq!(stats.total_letters(), 0);
        assert!(stats.overall.is_empty());
        assert!(stats.by_position.iter().all(Vec::is_empty));
    }
}
