//! Lexical aliases
//!
//! A bare alternative naming an alias stands for a closed set of word forms that
//! must also carry the alias tag. `BE` matches `'s/VERB` but not `'s/PRT`.
//! Names not in the table are read as ordinary tag expressions.

use crate::token::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexicalAlias {
    pub name: &'static str,
    /// Lowercase word forms
    pub words: &'static [&'static str],
    pub tag: &'static str,
}

pub const LEXICAL_ALIASES: &[LexicalAlias] = &[
    LexicalAlias {
        name: "BE",
        words: &[
            "be", "am", "is", "are", "was", "were", "been", "being", "'s", "'re", "'m",
        ],
        tag: "VERB",
    },
    LexicalAlias {
        name: "HAVE",
        words: &["have", "has", "had", "having", "'ve"],
        tag: "VERB",
    },
    LexicalAlias {
        name: "DO",
        words: &["do", "does", "did", "doing", "done"],
        tag: "VERB",
    },
];

impl LexicalAlias {
    pub fn lookup(name: &str) -> Option<&'static LexicalAlias> {
        LEXICAL_ALIASES.iter().find(|alias| alias.name == name)
    }

    pub fn accepts(&self, token: &Token) -> bool {
        if token.tag() != self.tag {
            return false;
        }
        let word = token.word().to_lowercase();
        self.words.contains(&word.as_str())
    }
}
