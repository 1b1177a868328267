//! Pattern lexer
//!
//! Character-level tokenization of a pattern string through logos. The lexer only
//! resolves escapes and tells reserved characters apart from literal ones; which
//! reserved characters are meaningful where is decided by the compiler.
//!
//! The output is one [Sym] list per atom, atoms being separated by unescaped spaces.

use logos::Logos;

use super::error::PatternSyntaxError;

/// Reserved characters of the pattern language (besides space and backslash)
pub const METACHARACTERS: &[char] = &['^', '$', '+', '|', '/', '-', '?', '[', ']'];

#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum PatternToken {
    // Backslash escape, the next character is literal
    #[regex(r"\\.", |lex| lex.slice().chars().nth(1))]
    Escaped(char),

    // Atom separator
    #[token(" ")]
    Space,

    #[regex(r"[\^\$\+\|/\-\?\[\]]", |lex| lex.slice().chars().next())]
    Meta(char),

    // Everything else is taken literally
    #[regex(r"[^\\ \^\$\+\|/\-\?\[\]]", |lex| lex.slice().chars().next())]
    Char(char),
}

/// One character of an atom after escape resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sym {
    pub ch: char,
    /// Unescaped reserved character
    pub meta: bool,
    /// Written with a backslash in the source
    pub escaped: bool,
    /// Byte offset in the pattern source
    pub at: usize,
}

impl Sym {
    /// True for the unescaped reserved character `ch`.
    pub fn is(&self, ch: char) -> bool {
        self.meta && self.ch == ch
    }

    /// Source spelling, with the backslash restored for escaped characters.
    pub fn spelling(&self) -> String {
        if self.escaped {
            format!("\\{}", self.ch)
        } else {
            self.ch.to_string()
        }
    }
}

/// Split a pattern into atoms of [Sym]s. Consecutive spaces are collapsed.
pub fn lex_atoms(source: &str) -> Result<Vec<Vec<Sym>>, PatternSyntaxError> {
    let mut atoms = Vec::new();
    let mut current = Vec::new();
    let mut lexer = PatternToken::lexer(source);

    while let Some(result) = lexer.next() {
        let at = lexer.span().start;
        let token = result.map_err(|_| PatternSyntaxError::UnterminatedEscape { position: at })?;
        let sym = match token {
            PatternToken::Space => {
                if !current.is_empty() {
                    atoms.push(std::mem::take(&mut current));
                }
                continue;
            }
            PatternToken::Escaped(ch) => Sym {
                ch,
                meta: false,
                escaped: true,
                at,
            },
            PatternToken::Meta(ch) => Sym {
                ch,
                meta: true,
                escaped: false,
                at,
            },
            PatternToken::Char(ch) => Sym {
                ch,
                meta: false,
                escaped: false,
                at,
            },
        };
        current.push(sym);
    }
    if !current.is_empty() {
        atoms.push(current);
    }
    Ok(atoms)
}

/// Literal text of a run of syms, escapes resolved.
pub fn literal_text(syms: &[Sym]) -> String {
    syms.iter().map(|s| s.ch).collect()
}

/// Source spelling of a run of syms.
pub fn spelling(syms: &[Sym]) -> String {
    syms.iter().map(Sym::spelling).collect()
}
