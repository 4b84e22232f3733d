//! Scraping word lists from the puzzle's website
//!
//! The page references a single bundled script `main.<hash>.js`; that script
//! holds the answer list and the extra-guess list as JS array literals.

use super::{WordLists, store::WordListsFile};
use crate::core::WORD_LENGTH;
use anyhow::{Context, Result, bail};
use log::{debug, info};
use regex::Regex;
use reqwest::blocking::Client;

/// Page the word lists are scraped from
pub const DEFAULT_URL: &str = "https://www.powerlanguage.co.uk/wordle";

/// Find the bundled script name in the page HTML
///
/// # Errors
///
/// Returns an error unless exactly one matching script tag is present.
pub fn find_script_name(html: &str) -> Result<String> {
    let re = Regex::new(r#"<script src="(main\.[0-9a-f]+\.js)">"#)?;
    let names: Vec<&str> = re
        .captures_iter(html)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect();

    match names.as_slice() {
        [name] => Ok((*name).to_string()),
        _ => bail!("Failed to determine URL for JavaScript source!"),
    }
}

/// Pull the two word lists out of the script source
///
/// The shorter list holds the answers, the longer one the extra guesses.
/// Both are sorted.
///
/// # Errors
///
/// Returns an error if there are not exactly two lists, or both have the
/// same length.
pub fn extract_word_lists(js: &str) -> Result<WordListsFile> {
    let word = format!(r#""[a-z]{{{WORD_LENGTH}}}""#);
    let re = Regex::new(&format!(r"=\[({word}(?:,{word})*)\]"))?;

    let mut lists: Vec<Vec<String>> = re
        .captures_iter(js)
        .filter_map(|c| c.get(1))
        .map(|m| {
            let mut words: Vec<String> = m
                .as_str()
                .split(',')
                .map(|w| w.trim_matches('"').to_string())
                .collect();
            words.sort_unstable();
            words
        })
        .collect();

    let (Some(second), Some(first), None) = (lists.pop(), lists.pop(), lists.pop()) else {
        bail!("Failed to locate word lists within JavaScript source!");
    };
    debug!("Found word lists of {} and {} words", first.len(), second.len());

    let (valid_answers, also_valid_guesses) = match first.len().cmp(&second.len()) {
        std::cmp::Ordering::Less => (first, second),
        std::cmp::Ordering::Greater => (second, first),
        std::cmp::Ordering::Equal => {
            bail!("Both word lists are same size, cannot tell them apart!")
        }
    };

    Ok(WordListsFile {
        valid_answers,
        also_valid_guesses,
    })
}

fn get_text(client: &Client, url: &str) -> Result<String> {
    debug!("GET {url}");
    let response = client
        .get(url)
        .send()
        .with_context(|| format!("Failed to get URL \"{url}\"!"))?;

    let status = response.status();
    if !status.is_success() {
        bail!("Failed to get URL \"{url}\", with status {}!", status.as_u16());
    }

    response
        .text()
        .with_context(|| format!("Failed to read body of \"{url}\"!"))
}

/// Download the page and its script, and extract the word lists
///
/// # Errors
///
/// Returns an error on any network failure, an unexpected page layout, or
/// malformed words in the extracted lists.
pub fn fetch_word_lists(base_url: &str) -> Result<WordLists> {
    let base_url = base_url.trim_end_matches('/');
    let client = Client::builder()
        .build()
        .context("Failed to create HTTP client")?;

    let html = get_text(&client, base_url)?;
    let script = find_script_name(&html)?;
    info!("Found script {script}");

    let js = get_text(&client, &format!("{base_url}/{script}"))?;
    let file = extract_word_lists(&js)?;

    Ok(WordLists::try_from(file)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_name_found() {
        let html = r#"<html><head><script src="main.e65ce0a5.js"></script></head></html>"#;
        assert_eq!(find_script_name(html).unwrap(), "main.e65ce0a5.js");
    }

    #[test]
    fn script_name_must_be_unique() {
        assert!(find_script_name("<html></html>").is_err());

        let twice = r#"<script src="main.aa.js"></script><script src="main.bb.js"></script>"#;
        let err = find_script_name(twice).unwrap_err();
        assert_eq!(err.to_string(), "Failed to determine URL for JavaScript source!");
    }

    #[test]
    fn lists_extracted_and_sorted() {
        let js = r#"var La=["cigar","rebut","sissy"],Ta=["aahed","aalii","aargh","zymic"],x=["ab","cd"];"#;
        let file = extract_word_lists(js).unwrap();

        assert_eq!(file.valid_answers, ["cigar", "rebut", "sissy"]);
        assert_eq!(file.also_valid_guesses, ["aahed", "aalii", "aargh", "zymic"]);
    }

    #[test]
    fn larger_list_first_still_goes_to_guesses() {
        let js = r#"a=["zymic","aahed","aargh"];b=["sissy","cigar"];"#;
        let file = extract_word_lists(js).unwrap();

        assert_eq!(file.valid_answers, ["cigar", "sissy"]);
        assert_eq!(file.also_valid_guesses, ["aahed", "aargh", "zymic"]);
    }

    #[test]
    fn wrong_number_of_lists() {
        let one = r#"a=["cigar","rebut"];"#;
        let three = r#"a=["cigar"];b=["rebut","sissy"];c=["aahed","aalii","aargh"];"#;

        for js in [one, three] {
            let err = extract_word_lists(js).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Failed to locate word lists within JavaScript source!"
            );
        }
    }

    #[test]
    fn same_size_lists_are_ambiguous() {
        let js = r#"a=["cigar","rebut"];b=["aahed","aalii"];"#;
        let err = extract_word_lists(js).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Both word lists are same size, cannot tell them apart!"
        );
    }
}
