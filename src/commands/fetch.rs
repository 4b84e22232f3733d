//! Refresh the local word list file from the website

use crate::wordlists::{fetch::fetch_word_lists, store::save_to_file};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Fetch word lists from `url` and write them to `path`
///
/// # Errors
///
/// Returns an error if fetching, extraction or saving fails. An existing file
/// is left untouched unless fetching succeeded.
pub fn run_fetch(url: &str, path: &Path) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Fetching word lists from {url}"));

    let lists = match fetch_word_lists(url) {
        Ok(lists) => lists,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e);
        }
    };

    spinner.set_message(format!("Saving to {}", path.display()));
    save_to_file(&lists, path)?;
    spinner.finish_with_message(format!(
        "Saved {} answers and {} extra guesses to \"{}\"",
        lists.valid_answers().len(),
        lists.also_valid_guesses().len(),
        path.display()
    ));
    Ok(())
}
