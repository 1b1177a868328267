//! # tagchunk
//!
//! Pattern search and phrase chunking over part-of-speech tagged sentences.
//!
//! File Layout
//!
//! The crate consumes sentences that an external tagger already produced and never
//! tokenizes or tags text itself. Work flows leaf-first through four layers:
//!
//! src/
//!   ├── token          Token and Sentence values, tagged-text reading and rendering
//!   ├── pattern        The pattern mini-language: lexer, atoms, compiler, cache
//!   ├── matching       Backtracking matcher producing non-overlapping spans
//!   └── constituents   Fixed rule table partitioning a sentence into phrases
//!
//! A quick tour:
//!
//! ```rust,ignore
//! use tagchunk::{chunk, constituents, Sentence};
//!
//! let s = Sentence::from_tagged("Here/PRON 's/VERB my/PRON new/ADJ cool/ADJ cat/NOUN");
//! let found = chunk("ADJ+ NOUN", &s)?;
//! assert_eq!(found[0].to_string(), "new/ADJ cool/ADJ cat/NOUN");
//!
//! for c in constituents(&s) {
//!     println!("{} {}", c.label, c.chunk);
//! }
//! ```
//!
//! For test helpers and the verified sample sentences, see the [testing module](testing).

pub mod config;
pub mod constituents;
pub mod matching;
pub mod pattern;
pub mod testing;
pub mod token;

pub use constituents::{constituents, Constituent, Grammar, GrammarError, GrammarRule};
pub use matching::{chunk, Match, Matches};
pub use pattern::{Pattern, PatternCache, PatternSyntaxError};
pub use token::{read_tagged, Sentence, Token};
