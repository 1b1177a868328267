//! Tagged tokens and sentences
//!
//! A [Token] is a word with its part-of-speech tag and its position in the sentence.
//! A [Sentence] is the ordered, immutable sequence an external tagger produced. Nothing
//! in this crate mutates either once built; matchers and the grammar borrow them.
//!
//! The textual form used between the tagger and this crate is `word/TAG` tokens
//! separated by single spaces, one sentence per line. See [formatting] for how
//! `/` and `\` inside words are escaped.

pub mod core;
pub mod formatting;

pub use self::core::{Sentence, Token};
pub use formatting::{escape_word, read_tagged, split_tagged, ToTaggedString};
