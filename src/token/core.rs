//! Core token types

use serde::Serialize;
use std::fmt;
use std::ops::{Index, Range};

use super::formatting::{split_tagged, ToTaggedString};

/// A word and its tag, pinned to a position in its sentence.
///
/// Identity is positional: two tokens with the same word and tag at different
/// indices are different tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    word: String,
    tag: String,
    index: usize,
}

impl Token {
    pub fn new(word: impl Into<String>, tag: impl Into<String>, index: usize) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
            index,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// 0-based position in the owning sentence.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_tagged_string())
    }
}

/// An ordered sequence of tokens with contiguous indices `0..len`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    /// Build a sentence from `(word, tag)` pairs, assigning indices in order.
    pub fn new<I, W, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (W, T)>,
        W: Into<String>,
        T: Into<String>,
    {
        let tokens = pairs
            .into_iter()
            .enumerate()
            .map(|(index, (word, tag))| Token::new(word, tag, index))
            .collect();
        Self { tokens }
    }

    /// Read one sentence in `word/TAG word/TAG ...` form.
    ///
    /// Reading never fails: a token without an unescaped `/` gets an empty tag,
    /// which no tag constraint matches.
    pub fn from_tagged(line: &str) -> Self {
        Self::new(line.split(' ').filter(|t| !t.is_empty()).map(split_tagged))
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Borrow the tokens in `range`.
    pub fn slice(&self, range: Range<usize>) -> &[Token] {
        &self.tokens[range]
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(Token::word)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(Token::tag)
    }
}

impl Index<usize> for Sentence {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a Sentence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.to_tagged_string())
    }
}
