//! Word list loading utilities
//!
//! Provides the candidate list with hints, either from the embedded table or
//! from a `WORD: hint` file.

use super::THEMED;
use crate::core::{Word, WordError};
use rustc_hash::FxHashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors raised while building a word list
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    /// Failed to read a word list file.
    #[error("failed to read word list at {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line lacks the `WORD: hint` separator.
    #[error("line {line}: expected 'WORD: hint'")]
    MissingHint { line: usize },

    /// A line holds something other than a 5-letter word.
    #[error("line {line}: {source}")]
    InvalidWord {
        line: usize,
        #[source]
        source: WordError,
    },

    /// The same word appears twice.
    #[error("line {line}: duplicate word {word}")]
    Duplicate { line: usize, word: String },

    /// No words at all.
    #[error("word list is empty")]
    Empty,
}

/// Candidate secret words and their hint text
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    hints: FxHashMap<Word, String>,
}

impl WordList {
    /// The themed list compiled into the binary
    ///
    /// # Panics
    /// Will not panic - the embedded table is validated by the crate's tests.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_pairs(THEMED.iter().copied()).expect("embedded word list is valid")
    }

    /// Build a list from `(word, hint)` pairs
    ///
    /// # Errors
    ///
    /// Returns an error if a word is invalid, duplicated, or the list is empty.
    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, WordListError> {
        let mut words = Vec::new();
        let mut hints = FxHashMap::default();

        for (index, (text, hint)) in pairs.into_iter().enumerate() {
            let line = index + 1;
            let word =
                Word::new(text.trim()).map_err(|source| WordListError::InvalidWord { line, source })?;
            if hints.contains_key(&word) {
                return Err(WordListError::Duplicate {
                    line,
                    word: word.text().to_string(),
                });
            }
            hints.insert(word.clone(), hint.trim().to_string());
            words.push(word);
        }

        if words.is_empty() {
            return Err(WordListError::Empty);
        }

        Ok(Self { words, hints })
    }

    /// Parse `WORD: hint` lines; blank lines and `#` comments are skipped
    ///
    /// # Errors
    ///
    /// Returns an error on a malformed line, an invalid or duplicate word, or
    /// when no words remain.
    pub fn parse(content: &str) -> Result<Self, WordListError> {
        let mut pairs = Vec::new();
        let mut line_numbers = Vec::new();

        for (index, raw) in content.lines().enumerate() {
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let (word, hint) = trimmed
                .split_once(':')
                .ok_or(WordListError::MissingHint { line: index + 1 })?;
            pairs.push((word, hint));
            line_numbers.push(index + 1);
        }

        // Report errors against file lines rather than entry positions
        Self::from_pairs(pairs).map_err(|err| match err {
            WordListError::InvalidWord { line, source } => WordListError::InvalidWord {
                line: line_numbers[line - 1],
                source,
            },
            WordListError::Duplicate { line, word } => WordListError::Duplicate {
                line: line_numbers[line - 1],
                word,
            },
            other => other,
        })
    }

    /// Load a list from a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails to parse.
    ///
    /// # Examples
    /// ```no_run
    /// use wordle_awareness::wordlists::WordList;
    ///
    /// let list = WordList::load_from_file("data/words.txt").unwrap();
    /// println!("Loaded {} words", list.len());
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| WordListError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Candidate words in list order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Hint text for `word`, if it is on the list
    #[must_use]
    pub fn hint(&self, word: &Word) -> Option<&str> {
        self.hints.get(word).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.hints.contains_key(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
