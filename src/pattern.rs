//! Pattern language
//!
//! A pattern is a space-separated sequence of atoms. Each atom constrains exactly
//! one sentence position (or a run of them, with `+`). Matching units are tokens,
//! not characters, so the pattern is compiled into an explicit atom list rather
//! than handed to a text regex engine.
//!
//! Atom syntax:
//!
//!     atom     := ['^'] body ['$']
//!     body     := group ['+']
//!     group    := alt ('|' alt)*
//!     alt      := word | word '/' tag | tag | alias | '?' | '-'
//!     word     := ['-'] literal ['-']
//!
//! Examples against `Here/PRON 's/VERB my/PRON new/ADJ cool/ADJ cat/NOUN café/NOUN`:
//!
//!     PRON         every pronoun, one token each
//!     ADJ+ NOUN    "new cool cat" (greedy run, then a noun)
//!     ADJ|NOUN+    one run mixing adjectives and nouns
//!     ca-          words starting with "ca", case-insensitive
//!     -é/NOUN      nouns ending in "é"
//!     BE           forms of "to be" tagged VERB
//!     ^? ?         the first two tokens (`?` is an optional wildcard)
//!     1\/2/NUM     the word "1/2" tagged NUM
//!
//! Compilation is all-or-nothing: malformed input yields a [PatternSyntaxError] and
//! no partial pattern. Compiled patterns are immutable and may be shared across
//! threads; [PatternCache] memoizes them by source string.

pub mod alias;
pub mod atom;
pub mod cache;
pub mod compiler;
pub mod error;
pub mod lexer;
pub mod tag_expr;

pub use alias::{LexicalAlias, LEXICAL_ALIASES};
pub use atom::{Alternative, Atom, Quantifier, TagConstraint, WordConstraint};
pub use cache::PatternCache;
pub use compiler::Pattern;
pub use error::PatternSyntaxError;
pub use tag_expr::TagExpr;
