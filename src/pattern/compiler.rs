//! Pattern compiler
//!
//! Turns a pattern string into an ordered list of [Atom]s. The work per atom:
//!
//! 1. Strip a leading `^` and a trailing `$` (anchors), then a trailing `+` (quantifier).
//! 2. A body that is just `?` is the optional wildcard.
//! 3. Otherwise split the body on `|` and classify each alternative:
//!    - `word/tag`: explicit sides, either may be empty (meaning any)
//!    - `?` or `-`: any token
//!    - `ca-`, `-é`, `-at-`: prefix, suffix, contains word constraint
//!    - a lexical alias name such as `BE`
//!    - anything with a lowercase letter: exact word
//!    - anything with an uppercase letter: tag expression
//!    - anything else (`:\)`, `1\/2`, `!`): literal matching either the word or the tag
//!
//! Inside a `[...]` class every character is a member, so `[^V]RON` is a tag
//! expression rather than an anchor. Word literals take no classes and no inner
//! `-`; escape those characters to match them.
//!
//! Errors are reported with byte offsets into the pattern source.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::alias::LexicalAlias;
use super::atom::{Alternative, Atom, Quantifier, TagConstraint, WordConstraint};
use super::error::PatternSyntaxError;
use super::lexer::{lex_atoms, literal_text, spelling, Sym, METACHARACTERS};
use super::tag_expr::TagExpr;

/// A compiled pattern: immutable, reusable across sentences and threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    source: String,
    atoms: Vec<Atom>,
}

impl Pattern {
    pub fn compile(source: &str) -> Result<Self, PatternSyntaxError> {
        let atoms = lex_atoms(source)?
            .iter()
            .map(|syms| compile_atom(syms))
            .collect::<Result<Vec<_>, _>>()?;

        if atoms.is_empty() {
            return Err(PatternSyntaxError::Empty);
        }

        debug!(pattern = source, atoms = atoms.len(), "compiled pattern");
        Ok(Self {
            source: source.to_string(),
            atoms,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// True when matching may only start at index 0.
    pub fn is_start_anchored(&self) -> bool {
        self.atoms.first().is_some_and(|atom| atom.anchor_start)
    }

    /// True when a match must end at the sentence's last token.
    pub fn is_end_anchored(&self) -> bool {
        self.atoms.last().is_some_and(|atom| atom.anchor_end)
    }

    /// Escape a literal so it can be embedded in a pattern as a word.
    pub fn escape(literal: &str) -> String {
        let mut out = String::with_capacity(literal.len());
        for ch in literal.chars() {
            if ch == '\\' || ch == ' ' || METACHARACTERS.contains(&ch) {
                out.push('\\');
            }
            out.push(ch);
        }
        out
    }
}

impl FromStr for Pattern {
    type Err = PatternSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::compile(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn compile_atom(syms: &[Sym]) -> Result<Atom, PatternSyntaxError> {
    let position = syms.first().map_or(0, |s| s.at);
    let mut body = syms;

    let anchor_start = body.first().is_some_and(|s| s.is('^'));
    if anchor_start {
        body = &body[1..];
    }
    let anchor_end = body.last().is_some_and(|s| s.is('$'));
    if anchor_end {
        body = &body[..body.len() - 1];
    }
    let repeated = body.last().is_some_and(|s| s.is('+'));
    if repeated {
        body = &body[..body.len() - 1];
    }

    if body.is_empty() {
        return Err(PatternSyntaxError::EmptyAtom { position });
    }

    let (alternatives, quantifier) = if body.len() == 1 && body[0].is('?') {
        let quantifier = if repeated {
            Quantifier::OneOrMore
        } else {
            Quantifier::ZeroOrOne
        };
        (vec![Alternative::Any], quantifier)
    } else {
        let alternatives = split_on(body, '|')
            .into_iter()
            .map(|(alt, at)| compile_alternative(alt, at))
            .collect::<Result<Vec<_>, _>>()?;
        let quantifier = if repeated {
            Quantifier::OneOrMore
        } else {
            Quantifier::One
        };
        (alternatives, quantifier)
    };

    Ok(Atom {
        alternatives,
        anchor_start,
        anchor_end,
        quantifier,
        source: spelling(syms),
    })
}

/// Split on an unescaped separator outside `[...]`, pairing each part with the
/// offset where it starts.
fn split_on(syms: &[Sym], separator: char) -> Vec<(&[Sym], usize)> {
    let inside = class_members(syms);
    let mut parts = Vec::new();
    let mut start = 0;
    let mut start_at = syms.first().map_or(0, |s| s.at);
    for (i, sym) in syms.iter().enumerate() {
        if sym.is(separator) && !inside[i] {
            parts.push((&syms[start..i], start_at));
            start = i + 1;
            start_at = sym.at + 1;
        }
    }
    parts.push((&syms[start..], start_at));
    parts
}

/// Marks the symbols sitting between an unescaped `[` and its `]`. Inside a class
/// every character is a member, so `[^V]` or `[+|]` carry no structural meaning.
/// An unclosed class runs to the end; the tag compiler reports it.
fn class_members(syms: &[Sym]) -> Vec<bool> {
    let mut open = false;
    syms.iter()
        .map(|sym| {
            if open {
                if sym.is(']') {
                    open = false;
                    return false;
                }
                true
            } else {
                open = sym.is('[');
                false
            }
        })
        .collect()
}

fn compile_alternative(syms: &[Sym], at: usize) -> Result<Alternative, PatternSyntaxError> {
    if syms.is_empty() {
        return Err(PatternSyntaxError::EmptyAlternative { position: at });
    }
    reject_stray(syms, &['^', '$', '+'])?;

    let sides = split_on(syms, '/');
    match sides.as_slice() {
        [(bare, _)] => compile_bare(bare),
        [(word, _), (tag, _)] => Ok(Alternative::Form {
            word: compile_word(word)?,
            tag: compile_tag(tag)?,
        }),
        _ => {
            let inside = class_members(syms);
            let second = syms
                .iter()
                .zip(inside)
                .filter(|(s, inside)| s.is('/') && !inside)
                .nth(1)
                .map(|(s, _)| s);
            Err(PatternSyntaxError::UnexpectedMetacharacter {
                ch: '/',
                position: second.map_or(at, |s| s.at),
            })
        }
    }
}

fn compile_bare(syms: &[Sym]) -> Result<Alternative, PatternSyntaxError> {
    if is_wildcard(syms) {
        return Ok(Alternative::Any);
    }

    let marked =
        syms.first().is_some_and(|s| s.is('-')) || syms.last().is_some_and(|s| s.is('-'));
    if marked {
        return Ok(Alternative::Form {
            word: compile_word(syms)?,
            tag: TagConstraint::Any,
        });
    }

    let text = literal_text(syms);
    let plain = syms.iter().all(|s| !s.meta && !s.escaped);
    if plain {
        if let Some(alias) = LexicalAlias::lookup(&text) {
            return Ok(Alternative::Alias(alias));
        }
    }

    if text.chars().any(char::is_lowercase) {
        Ok(Alternative::Form {
            word: compile_word(syms)?,
            tag: TagConstraint::Any,
        })
    } else if text.chars().any(char::is_uppercase) {
        Ok(Alternative::Form {
            word: WordConstraint::Any,
            tag: compile_tag(syms)?,
        })
    } else {
        reject_stray(syms, &['?', '[', ']'])?;
        Ok(Alternative::WordOrTag {
            word: text.to_lowercase(),
            tag: text,
        })
    }
}

fn compile_word(syms: &[Sym]) -> Result<WordConstraint, PatternSyntaxError> {
    if syms.is_empty() || is_wildcard(syms) {
        return Ok(WordConstraint::Any);
    }

    let mut body = syms;
    let suffix = body.first().is_some_and(|s| s.is('-'));
    if suffix {
        body = &body[1..];
    }
    let prefix = body.last().is_some_and(|s| s.is('-'));
    if prefix {
        body = &body[..body.len() - 1];
    }
    // Word literals have no classes and no inner markers: `ca[t` and `e-mail`
    // need escapes.
    reject_stray(body, &['?', '[', ']', '-'])?;

    if body.is_empty() {
        return Ok(WordConstraint::Any);
    }
    let literal = literal_text(body).to_lowercase();
    Ok(match (suffix, prefix) {
        (true, true) => WordConstraint::Contains(literal),
        (true, false) => WordConstraint::Suffix(literal),
        (false, true) => WordConstraint::Prefix(literal),
        (false, false) => WordConstraint::Exact(literal),
    })
}

fn compile_tag(syms: &[Sym]) -> Result<TagConstraint, PatternSyntaxError> {
    if syms.is_empty() || (syms.len() == 1 && syms[0].is('?')) {
        return Ok(TagConstraint::Any);
    }
    Ok(TagConstraint::Expr(TagExpr::compile(syms)?))
}

fn is_wildcard(syms: &[Sym]) -> bool {
    syms.len() == 1 && (syms[0].is('?') || syms[0].is('-'))
}

/// Fail on the first unescaped `reserved` character outside a `[...]` class.
fn reject_stray(syms: &[Sym], reserved: &[char]) -> Result<(), PatternSyntaxError> {
    let inside = class_members(syms);
    let stray = syms
        .iter()
        .zip(inside)
        .find(|(s, inside)| !inside && s.meta && reserved.contains(&s.ch));
    match stray {
        Some((sym, _)) => Err(PatternSyntaxError::UnexpectedMetacharacter {
            ch: sym.ch,
            position: sym.at,
        }),
        None => Ok(()),
    }
}
