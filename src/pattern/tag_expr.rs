//! Tag expressions
//!
//! The tag side of an alternative is a small regex subset: literal characters and
//! bracketed classes (`AD[JV]`, `[^P]RON`, `N[A-Z]`). It is always tested against the
//! entire tag, case-sensitively, so `NOUN` never matches `PROPNOUN`.
//!
//! Expressions are translated into an anchored `regex::Regex` once, at compile time.
//! Alternation lives one level up, in the atom's `|` group.

use regex::Regex;
use std::fmt;

use super::error::PatternSyntaxError;
use super::lexer::{spelling, Sym};

#[derive(Clone)]
pub struct TagExpr {
    source: String,
    regex: Regex,
}

impl TagExpr {
    pub fn compile(syms: &[Sym]) -> Result<Self, PatternSyntaxError> {
        let source = spelling(syms);
        let mut body = String::new();
        let mut i = 0;

        while i < syms.len() {
            let sym = syms[i];
            if sym.is('[') {
                let (class, next) = compile_class(syms, i)?;
                body.push_str(&class);
                i = next;
                continue;
            }
            if sym.is(']') {
                return Err(PatternSyntaxError::UnbalancedBracket { position: sym.at });
            }
            if sym.meta && sym.ch != '-' {
                return Err(PatternSyntaxError::UnexpectedMetacharacter {
                    ch: sym.ch,
                    position: sym.at,
                });
            }
            body.push_str(&regex::escape(&sym.ch.to_string()));
            i += 1;
        }

        let regex = Regex::new(&format!("^(?:{})$", body)).map_err(|e| {
            PatternSyntaxError::InvalidTagExpression {
                expression: source.clone(),
                message: e.to_string(),
            }
        })?;
        Ok(Self { source, regex })
    }

    /// Whole-tag, case-sensitive test. Empty tags never match.
    pub fn is_match(&self, tag: &str) -> bool {
        !tag.is_empty() && self.regex.is_match(tag)
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Debug for TagExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TagExpr({})", self.source)
    }
}

impl PartialEq for TagExpr {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

/// Translate the class opening at `syms[open]`. Returns the regex class and the
/// index just past its `]`.
fn compile_class(syms: &[Sym], open: usize) -> Result<(String, usize), PatternSyntaxError> {
    let open_at = syms[open].at;
    let mut class = String::from("[");
    let mut i = open + 1;

    if i < syms.len() && syms[i].is('^') {
        class.push('^');
        i += 1;
    }

    let first_member = i;
    while i < syms.len() && !syms[i].is(']') {
        let sym = syms[i];
        let is_range = sym.is('-')
            && i > first_member
            && i + 1 < syms.len()
            && !syms[i + 1].is(']');
        if is_range {
            class.push('-');
        } else if sym.is('[') {
            return Err(PatternSyntaxError::UnexpectedMetacharacter {
                ch: '[',
                position: sym.at,
            });
        } else {
            class.push_str(&regex::escape(&sym.ch.to_string()));
        }
        i += 1;
    }

    if i == syms.len() {
        return Err(PatternSyntaxError::UnclosedClass { position: open_at });
    }
    if i == first_member {
        return Err(PatternSyntaxError::EmptyClass { position: open_at });
    }
    class.push(']');
    Ok((class, i + 1))
}
