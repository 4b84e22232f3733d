//! Display functions for command results

use crate::commands::stats::LetterStats;
use crate::core::WORD_LENGTH;
use std::fmt;

fn write_frequencies(
    f: &mut fmt::Formatter<'_>,
    freqs: &[(char, usize)],
    total: usize,
) -> fmt::Result {
    let width = total.to_string().len();
    for (letter, count) in freqs {
        writeln!(f, "{count:>width$}/{total} {letter}")?;
    }
    Ok(())
}

/// The letter frequency report: overall counts, then one block per position
impl fmt::Display for LetterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Overall Stats:")?;
        write_frequencies(f, &self.overall, self.total_letters())?;

        for (i, freqs) in self.by_position.iter().enumerate().take(WORD_LENGTH) {
            writeln!(f, "\nLetter {} Stats:", i + 1)?;
            write_frequencies(f, freqs, self.total_words)?;
        }
        Ok(())
    }
}

/// Print the letter frequency report
pub fn print_letter_stats(stats: &LetterStats) {
    print!("{stats}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::stats::letter_stats;
    use crate::core::Word;

    #[test]
    fn report_layout() {
        let answers: Vec<Word> = ["allot", "lolly"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let report = letter_stats(&answers).to_string();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "Overall Stats:");
        assert_eq!(lines[1], " 5/10 l");
        assert_eq!(lines[2], " 2/10 o");
        assert_eq!(lines[3], " 1/10 a");

        assert!(report.contains("\nLetter 1 Stats:\n1/2 a\n1/2 l\n"));
        assert!(report.contains("\nLetter 5 Stats:\n1/2 t\n1/2 y\n"));
        assert_eq!(report.matches("Stats:").count(), WORD_LENGTH + 1);
    }
}
