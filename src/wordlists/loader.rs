//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use crate::error::{Result, WordledError};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Load words from a newline-delimited file
///
/// Each non-blank line is trimmed and uppercased into one word. Lines that
/// are not 5-letter words are skipped with a warning.
///
/// # Errors
///
/// Returns `EmptyWordSource` if the file cannot be read or holds no valid word.
///
/// # Examples
/// ```no_run
/// use wordled::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/wordlist.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let source_name = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|e| WordledError::EmptyWordSource {
        source_name: source_name.clone(),
        reason: e.to_string(),
    })?;

    parse_word_list(&content, &source_name)
}

/// Parse newline-delimited text into words
///
/// # Errors
///
/// Returns `EmptyWordSource` naming `source_name` if no valid word remains.
///
/// # Examples
/// ```
/// use wordled::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("crane\n\n  Slate \nnope\n", "inline").unwrap();
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "SLATE");
///
/// assert!(parse_word_list("\n\n", "inline").is_err());
/// ```
pub fn parse_word_list(content: &str, source_name: &str) -> Result<Vec<Word>> {
    let mut words = Vec::new();

    for (line_number, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match Word::new(trimmed) {
            Ok(word) => words.push(word),
            Err(e) => warn!(
                source = source_name,
                line = line_number + 1,
                text = trimmed,
                "skipping word: {e}"
            ),
        }
    }

    if words.is_empty() {
        return Err(WordledError::EmptyWordSource {
            source_name: source_name.to_string(),
            reason: "no valid 5-letter words".to_string(),
        });
    }

    debug!(source = source_name, count = words.len(), "loaded word list");
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordled::wordlists::loader::words_from_slice;
/// use wordled::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn parse_trims_uppercases_and_skips_blanks() {
        let words = parse_word_list("  beach\r\n\n\tBeast  \n   \nbeady", "test").unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["BEACH", "BEAST", "BEADY"]);
    }

    #[test]
    fn parse_keeps_duplicates_and_order() {
        let words = parse_word_list("slate\ncrane\nslate", "test").unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["SLATE", "CRANE", "SLATE"]);
    }

    #[test]
    fn parse_empty_is_error() {
        for content in ["", "\n\n", "toolong\nabc\n"] {
            assert!(matches!(
                parse_word_list(content, "test"),
                Err(WordledError::EmptyWordSource { .. })
            ));
        }
    }

    #[test]
    fn missing_file_is_empty_source() {
        let result = load_from_file("/nonexistent/wordled/words.txt");
        assert!(matches!(
            result,
            Err(WordledError::EmptyWordSource { ref source_name, .. })
                if source_name.contains("words.txt")
        ));
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!("wordled-test-{}.txt", std::process::id()));
        fs::write(&path, "crane\nslate\n\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
    }
}
