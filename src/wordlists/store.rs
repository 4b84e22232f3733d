//! JSON persistence for word lists
//!
//! The file is a single object with two string arrays:
//! `{"valid_answers": [...], "also_valid_guesses": [...]}`.

use super::WordLists;
use crate::core::Word;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default location of the word list file, relative to the working directory
pub const DEFAULT_LISTS_FILE: &str = "wordle_lists.json";

/// On-disk shape of the word list file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordListsFile {
    pub valid_answers: Vec<String>,
    pub also_valid_guesses: Vec<String>,
}

impl From<&WordLists> for WordListsFile {
    fn from(lists: &WordLists) -> Self {
        let texts = |words: &[Word]| -> Vec<String> {
            words.iter().map(|w| w.text().to_string()).collect()
        };
        Self {
            valid_answers: texts(lists.valid_answers()),
            also_valid_guesses: texts(lists.also_valid_guesses()),
        }
    }
}

impl TryFrom<WordListsFile> for WordLists {
    type Error = super::WordListError;

    fn try_from(file: WordListsFile) -> Result<Self, Self::Error> {
        Self::from_strings(&file.valid_answers, &file.also_valid_guesses)
    }
}

/// Load word lists from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON of the
/// expected shape, or contains malformed words.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordLists> {
    let path = path.as_ref();
    debug!("Loading word lists from {}", path.display());

    let content = fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read word lists from \"{}\" (run the fetch command first)",
            path.display()
        )
    })?;
    let file: WordListsFile = serde_json::from_str(&content)
        .with_context(|| format!("Malformed word list file \"{}\"", path.display()))?;
    let lists = WordLists::try_from(file)
        .with_context(|| format!("Unusable word lists in \"{}\"", path.display()))?;

    info!(
        "Loaded {} answers and {} extra guesses ({} distinct allowed words)",
        lists.valid_answers().len(),
        lists.also_valid_guesses().len(),
        lists.allowed_count()
    );
    Ok(lists)
}

/// Write word lists to a JSON file, replacing any existing file
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_to_file<P: AsRef<Path>>(lists: &WordLists, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create \"{}\"", path.display()))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &WordListsFile::from(lists))
        .with_context(|| format!("Failed to write word lists to \"{}\"", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write word lists to \"{}\"", path.display()))?;

    info!("Saved word lists to {}", path.display());
    Ok(())
}
