//! Per-letter counters over the lowercase ASCII alphabet

/// Number of letters in the alphabet words are drawn from
pub const ALPHABET_SIZE: usize = 26;

/// A multiset of lowercase letters, stored as one counter per letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterCounts([u8; ALPHABET_SIZE]);

impl LetterCounts {
    #[inline]
    fn slot(letter: u8) -> Option<usize> {
        if letter.is_ascii_lowercase() {
            Some(usize::from(letter - b'a'))
        } else {
            None
        }
    }

    /// Number of occurrences of `letter` (0 for anything outside `a..=z`)
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> u8 {
        Self::slot(letter).map_or(0, |i| self.0[i])
    }

    /// Record one more occurrence of `letter`
    ///
    /// Letters outside `a..=z` are ignored.
    #[inline]
    pub fn add(&mut self, letter: u8) {
        if let Some(i) = Self::slot(letter) {
            self.0[i] = self.0[i].saturating_add(1);
        }
    }

    /// Letters with a non-zero count, alphabetically, with their counts
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (b'a'..=b'z')
            .zip(self.0.iter().copied())
            .filter(|&(_, count)| count > 0)
    }

    /// First letter (alphabetically) that `self` holds more often than `other`
    ///
    /// `None` means `other` contains `self` as a sub-multiset.
    #[must_use]
    pub fn first_excess_over(&self, other: &Self) -> Option<u8> {
        self.iter()
            .find(|&(letter, count)| other.get(letter) < count)
            .map(|(letter, _)| letter)
    }

    /// Check that every letter of `other` occurs at least as often in `self`
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        other.first_excess_over(self).is_none()
    }
}

impl FromIterator<u8> for LetterCounts {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut counts = Self::default();
        for letter in iter {
            counts.add(letter);
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_from_bytes() {
        let counts: LetterCounts = b"allot".iter().copied().collect();
        assert_eq!(counts.get(b'l'), 2);
        assert_eq!(counts.get(b'a'), 1);
        assert_eq!(counts.get(b'z'), 0);
        assert_eq!(
            counts.iter().collect::<Vec<_>>(),
            vec![(b'a', 1), (b'l', 2), (b'o', 1), (b't', 1)]
        );
    }

    #[test]
    fn non_letters_are_ignored() {
        let counts: LetterCounts = b"a-Z!".iter().copied().collect();
        assert_eq!(counts.iter().collect::<Vec<_>>(), vec![(b'a', 1)]);
        assert_eq!(counts.get(b'-'), 0);
    }

    #[test]
    fn covers_respects_multiplicity() {
        let word: LetterCounts = b"eerie".iter().copied().collect();
        let two_e: LetterCounts = b"ee".iter().copied().collect();
        let four_e: LetterCounts = b"eeee".iter().copied().collect();

        assert!(word.covers(&two_e));
        assert!(!word.covers(&four_e));
        assert_eq!(four_e.first_excess_over(&word), Some(b'e'));
        assert!(word.covers(&LetterCounts::default()));
    }

    #[test]
    fn empty_counts() {
        assert_eq!(LetterCounts::default().iter().count(), 0);
        assert_eq!(LetterCounts::default().first_excess_over(&LetterCounts::default()), None);
    }
}
