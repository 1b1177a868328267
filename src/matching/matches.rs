//! Match values and the lazy scanning iterator

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use std::ops::Range;

use tracing::trace;

use crate::pattern::Pattern;
use crate::token::{Sentence, ToTaggedString, Token};

/// A contiguous span of a sentence that satisfied a pattern.
///
/// Borrows the sentence; render it with `to_string()` (`word/TAG` joined by spaces)
/// or walk [Match::tokens] for structured access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'s> {
    sentence: &'s Sentence,
    range: Range<usize>,
}

impl<'s> Match<'s> {
    pub fn new(sentence: &'s Sentence, range: Range<usize>) -> Self {
        Self { sentence, range }
    }

    pub fn start(&self) -> usize {
        self.range.start
    }

    /// Exclusive end index
    pub fn end(&self) -> usize {
        self.range.end
    }

    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub fn tokens(&self) -> &'s [Token] {
        self.sentence.slice(self.range.clone())
    }

    pub fn words(&self) -> Vec<&'s str> {
        self.tokens().iter().map(Token::word).collect()
    }

    pub fn tags(&self) -> Vec<&'s str> {
        self.tokens().iter().map(Token::tag).collect()
    }

    pub fn sentence(&self) -> &'s Sentence {
        self.sentence
    }
}

impl fmt::Display for Match<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens().to_tagged_string())
    }
}

impl Serialize for Match<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Match", 4)?;
        state.serialize_field("start", &self.start())?;
        state.serialize_field("end", &self.end())?;
        state.serialize_field("text", &self.to_string())?;
        state.serialize_field("tokens", self.tokens())?;
        state.end()
    }
}

/// Lazy left-to-right scan producing non-overlapping matches.
pub struct Matches<'p, 's> {
    pattern: &'p Pattern,
    sentence: &'s Sentence,
    next_start: usize,
    done: bool,
}

impl<'p, 's> Matches<'p, 's> {
    pub fn new(pattern: &'p Pattern, sentence: &'s Sentence) -> Self {
        Self {
            pattern,
            sentence,
            next_start: 0,
            done: false,
        }
    }
}

impl<'s> Iterator for Matches<'_, 's> {
    type Item = Match<'s>;

    fn next(&mut self) -> Option<Match<'s>> {
        if self.done {
            return None;
        }
        let anchored = self.pattern.is_start_anchored();

        while self.next_start < self.sentence.len() {
            let start = self.next_start;
            if let Some(range) = self.pattern.match_at(self.sentence, start) {
                trace!(pattern = self.pattern.source(), ?range, "match");
                self.next_start = range.end;
                self.done = anchored;
                return Some(Match::new(self.sentence, range));
            }
            if anchored {
                break;
            }
            self.next_start += 1;
        }

        self.done = true;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::samples;

    fn rendered(pattern: &str, sentence: &Sentence) -> Vec<String> {
        let pattern = Pattern::compile(pattern).unwrap();
        pattern.matches(sentence).map(|m| m.to_string()).collect()
    }

    #[test]
    fn test_every_occurrence() {
        let s = samples::kitty();
        assert_eq!(rendered("PRON", &s), vec!["Here/PRON", "my/PRON"]);
    }

    #[test]
    fn test_anchored_pattern_stops_after_first() {
        let s = Sentence::from_tagged("a/X b/X");
        assert_eq!(rendered("^X", &s), vec!["a/X"]);
    }

    #[test]
    fn test_scan_resumes_after_match() {
        let s = Sentence::from_tagged("a/X b/X c/X d/X e/X");
        assert_eq!(rendered("X X", &s), vec!["a/X b/X", "c/X d/X"]);
    }

    #[test]
    fn test_structured_access() {
        let s = samples::kitty();
        let pattern = Pattern::compile("ADJ+ NOUN").unwrap();
        let m = pattern.matches(&s).next().unwrap();
        assert_eq!(m.range(), 3..6);
        assert_eq!(m.words(), vec!["new", "cool", "cat"]);
        assert_eq!(m.tags(), vec!["ADJ", "ADJ", "NOUN"]);
        assert_eq!(m.tokens()[0].index(), 3);
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn test_serializes_span_and_tokens() {
        let s = Sentence::from_tagged("a/DET cat/NOUN");
        let pattern = Pattern::compile("NOUN").unwrap();
        let m = pattern.matches(&s).next().unwrap();
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["start"], 1);
        assert_eq!(json["end"], 2);
        assert_eq!(json["text"], "cat/NOUN");
        assert_eq!(json["tokens"][0]["word"], "cat");
        assert_eq!(json["tokens"][0]["index"], 1);
    }

    #[test]
    fn test_empty_sentence_yields_nothing() {
        assert!(rendered("?", &Sentence::default()).is_empty());
    }
}
