//! Compiled pattern atoms
//!
//! An [Atom] is a `|`-group of [Alternative]s plus anchors and a [Quantifier]. A token
//! satisfies the atom when it satisfies any one alternative.

use super::alias::LexicalAlias;
use super::tag_expr::TagExpr;
use crate::token::Token;

/// Repetition policy of an atom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// Exactly one token
    One,
    /// Zero or one token, greedy. Only produced by a standalone `?`.
    ZeroOrOne,
    /// Greedy maximal run of at least one token
    OneOrMore,
}

impl Quantifier {
    pub fn min(self) -> usize {
        match self {
            Quantifier::ZeroOrOne => 0,
            Quantifier::One | Quantifier::OneOrMore => 1,
        }
    }

    pub fn max(self) -> Option<usize> {
        match self {
            Quantifier::One | Quantifier::ZeroOrOne => Some(1),
            Quantifier::OneOrMore => None,
        }
    }
}

/// Case-insensitive word-form constraint. Literals are stored lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordConstraint {
    Any,
    Exact(String),
    /// `ca-`
    Prefix(String),
    /// `-é`
    Suffix(String),
    /// `-at-`
    Contains(String),
}

impl WordConstraint {
    pub fn accepts(&self, word: &str) -> bool {
        match self {
            WordConstraint::Any => true,
            WordConstraint::Exact(s) => word.to_lowercase() == *s,
            WordConstraint::Prefix(s) => word.to_lowercase().starts_with(s.as_str()),
            WordConstraint::Suffix(s) => word.to_lowercase().ends_with(s.as_str()),
            WordConstraint::Contains(s) => word.to_lowercase().contains(s.as_str()),
        }
    }
}

/// Case-sensitive, whole-string tag constraint
#[derive(Debug, Clone, PartialEq)]
pub enum TagConstraint {
    Any,
    Expr(TagExpr),
}

impl TagConstraint {
    pub fn accepts(&self, tag: &str) -> bool {
        match self {
            TagConstraint::Any => true,
            TagConstraint::Expr(expr) => expr.is_match(tag),
        }
    }
}

/// One side of a `|` group
#[derive(Debug, Clone, PartialEq)]
pub enum Alternative {
    /// `?` or `-`: any token
    Any,
    /// Word and tag constraints, both must hold
    Form {
        word: WordConstraint,
        tag: TagConstraint,
    },
    /// Closed word set bound to a tag (`BE`)
    Alias(&'static LexicalAlias),
    /// A letterless literal such as `:\)` or `1\/2`, matching the whole word or the
    /// whole tag. `word` is lowercased, `tag` kept verbatim.
    WordOrTag { word: String, tag: String },
}

impl Alternative {
    pub fn accepts(&self, token: &Token) -> bool {
        match self {
            Alternative::Any => true,
            Alternative::Form { word, tag } => {
                word.accepts(token.word()) && tag.accepts(token.tag())
            }
            Alternative::Alias(alias) => alias.accepts(token),
            Alternative::WordOrTag { word, tag } => {
                token.tag() == tag || token.word().to_lowercase() == *word
            }
        }
    }
}

/// Constraint on one sentence position, or on a run of positions for `+`.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub alternatives: Vec<Alternative>,
    /// First consumed token must be the sentence's first token
    pub anchor_start: bool,
    /// Last consumed token must be the sentence's last token
    pub anchor_end: bool,
    pub quantifier: Quantifier,
    /// Atom text as written in the pattern
    pub source: String,
}

impl Atom {
    pub fn accepts(&self, token: &Token) -> bool {
        self.alternatives.iter().any(|alt| alt.accepts(token))
    }

    /// Number of consecutive tokens from `start` this atom could consume,
    /// ignoring anchors and capped by the quantifier.
    pub fn run_length(&self, tokens: &[Token], start: usize) -> usize {
        let available = tokens.len().saturating_sub(start);
        let cap = self.quantifier.max().map_or(available, |m| m.min(available));
        tokens[start.min(tokens.len())..]
            .iter()
            .take(cap)
            .take_while(|token| self.accepts(token))
            .count()
    }

    /// Whether consuming `len` tokens from `start` respects the anchors.
    pub fn fits_anchors(&self, sentence_len: usize, start: usize, len: usize) -> bool {
        (!self.anchor_start || start == 0) && (!self.anchor_end || start + len == sentence_len)
    }
}
