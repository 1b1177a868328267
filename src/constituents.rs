//! Constituent grammar
//!
//!     Splits a whole sentence into labeled phrase chunks (NP, VP, PP, ...). Unlike
//!     the matcher, which reports only the spans a pattern accepts, the grammar
//!     covers every token: a token no rule claims becomes a chunk of its own with an
//!     empty label.
//!
//!     Scanning is left to right. At each position the rules are tried in priority
//!     order with [Pattern::match_at](crate::pattern::Pattern::match_at); the first
//!     rule that matches consumes its full greedy span. The chunks therefore tile
//!     `0..len` exactly once.
//!
//!     See [grammar] for the rule table.

pub mod grammar;

use serde::Serialize;
use std::fmt;

use crate::matching::Match;
use crate::token::Sentence;

pub use grammar::{builtin_rules, Grammar, GrammarError, GrammarRule};

/// A contiguous, labeled span of a sentence.
pub type Chunk<'s> = Match<'s>;

/// A chunk with its phrase label. The label is empty for tokens no rule covered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Constituent<'s> {
    pub chunk: Chunk<'s>,
    pub label: String,
}

impl<'s> Constituent<'s> {
    pub fn new(chunk: Chunk<'s>, label: impl Into<String>) -> Self {
        Self {
            chunk,
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_labeled(&self) -> bool {
        !self.label.is_empty()
    }

    pub fn into_pair(self) -> (Chunk<'s>, String) {
        (self.chunk, self.label)
    }
}

impl<'s> From<Constituent<'s>> for (Chunk<'s>, String) {
    fn from(constituent: Constituent<'s>) -> Self {
        constituent.into_pair()
    }
}

impl fmt::Display for Constituent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.chunk, f)
    }
}

/// Partition `sentence` with the built-in grammar.
pub fn constituents(sentence: &Sentence) -> Vec<Constituent<'_>> {
    Grammar::standard().constituents(sentence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assertions::assert_partition, samples};

    #[test]
    fn test_partition_of_kitty() {
        let s = samples::kitty();
        let chunks = constituents(&s);
        assert_partition(&s, &chunks);
        assert_eq!(chunks.len(), 5);
        assert!(!chunks[3].is_labeled());
    }

    #[test]
    fn test_pair_conversion() {
        let s = samples::kitty();
        let (chunk, label): (Chunk, String) = constituents(&s).remove(2).into();
        assert_eq!(label, "NP");
        assert_eq!(chunk.range(), 2..7);
    }

    #[test]
    fn test_serializes_label_and_chunk() {
        let s = Sentence::from_tagged("cats/NOUN sleep/VERB");
        let json = serde_json::to_value(constituents(&s)).unwrap();
        assert_eq!(json[0]["label"], "NP");
        assert_eq!(json[0]["chunk"]["text"], "cats/NOUN");
        assert_eq!(json[1]["label"], "VP");
        assert_eq!(json[1]["chunk"]["start"], 1);
    }
}
