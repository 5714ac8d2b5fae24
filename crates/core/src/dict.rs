//! Dictionary module - pluggable word acceptance
//!
//! The engine does not ship a lexicon. The host injects a [`WordJudge`] at
//! move confirmation: [`AcceptAll`] for honor-system play, [`WordList`] for
//! a real dictionary. Judging happens after geometric validation and before
//! any state changes, so a refused word leaves the move staged.

use std::collections::HashSet;

/// Decides whether an extracted word is acceptable
pub trait WordJudge {
    fn is_word(&self, word: &str) -> bool;
}

/// Accepts every word (players police each other)
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl WordJudge for AcceptAll {
    fn is_word(&self, _word: &str) -> bool {
        true
    }
}

/// A fixed word list, matched case-insensitively
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Build from lines of text: entries are trimmed and lowercased,
    /// blank lines and single letters are skipped.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let words = lines
            .into_iter()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| word.chars().count() >= 2)
            .collect();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordJudge for WordList {
    fn is_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}
