//! Reverse code index: digit codes to the words that encode to them.
//!
//! `CodeIndex` owns the code → words map built from the corpus, the editor
//! mutations on top of it, and its JSON persistence. Single-digit codes are
//! seeded with their keypad letter sets so a lone digit always has
//! candidates, even over an empty corpus.

pub mod builder;

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::keypad::{self, InvalidCharacter};

/// Error for index load/save I/O.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A rejected editor mutation. The index is unchanged whenever one of
/// these comes back.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("invalid character {0:?} (letters a-z only)")]
    InvalidCharacter(char),

    #[error("word encodes to \"{actual}\", not \"{expected}\"")]
    CodeMismatch { expected: String, actual: String },

    #[error("word already present for its code")]
    DuplicateWord,
}

impl From<InvalidCharacter> for EditError {
    fn from(e: InvalidCharacter) -> Self {
        EditError::InvalidCharacter(e.0)
    }
}

#[derive(Debug)]
pub struct CodeIndex {
    entries: HashMap<String, Vec<String>>,
    dirty: bool,
}

impl CodeIndex {
    /// Empty index holding only the seeded single-digit entries.
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        for &(digit, letters) in keypad::KEYS {
            entries.insert(
                digit.to_string(),
                letters.chars().map(String::from).collect(),
            );
        }
        Self {
            entries,
            dirty: false,
        }
    }

    /// Candidate words for `code`, in insertion order. Empty for unknown
    /// codes; never an error.
    pub fn lookup(&self, code: &str) -> &[String] {
        self.entries.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct codes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total words across all codes.
    pub fn word_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// All codes, in no particular order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Whether there are unsaved mutations.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Add `word` under its computed code. Returns the code.
    pub fn add_word(&mut self, word: &str) -> Result<String, EditError> {
        let code = keypad::word_to_code(word)?;
        self.append(code.clone(), word)?;
        Ok(code)
    }

    /// Add `word` as a translation for `code`.
    ///
    /// The word must literally encode to `code`; a mismatch is rejected
    /// with the computed code in the error.
    pub fn add_translation(&mut self, code: &str, word: &str) -> Result<(), EditError> {
        let actual = keypad::word_to_code(word)?;
        if actual != code {
            return Err(EditError::CodeMismatch {
                expected: code.to_string(),
                actual,
            });
        }
        self.append(actual, word)
    }

    fn append(&mut self, code: String, word: &str) -> Result<(), EditError> {
        let words = self.entries.entry(code).or_default();
        if words.iter().any(|w| w == word) {
            return Err(EditError::DuplicateWord);
        }
        words.push(word.to_string());
        self.dirty = true;
        Ok(())
    }

    /// Merge a per-partition build map in, concatenating word lists on
    /// code collision. Words already present under a code are not
    /// duplicated.
    pub(crate) fn merge(&mut self, local: HashMap<String, Vec<String>>) {
        for (code, words) in local {
            let target = self.entries.entry(code).or_default();
            for word in words {
                if !target.iter().any(|w| *w == word) {
                    target.push(word);
                }
            }
        }
    }

    /// Load a persisted index. The file is a JSON object mapping code →
    /// ordered word list; key order in the file is not significant.
    pub fn load(path: &Path) -> Result<Self, IndexError> {
        let bytes = fs::read(path)?;
        let entries: HashMap<String, Vec<String>> = serde_json::from_slice(&bytes)?;
        debug!(codes = entries.len(), "loaded code index");
        Ok(Self {
            entries,
            dirty: false,
        })
    }

    /// Atomic write: write to .tmp then rename. Clears the dirty flag.
    pub fn save(&mut self, path: &Path) -> Result<(), IndexError> {
        let bytes = serde_json::to_vec(&self.entries)?;
        let tmp = path.with_extension("tmp");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, path)?;
        self.dirty = false;
        info!(
            codes = self.entries.len(),
            words = self.word_count(),
            "saved code index"
        );
        Ok(())
    }
}

impl Default for CodeIndex {
    fn default() -> Self {
        Self::new()
    }
}
