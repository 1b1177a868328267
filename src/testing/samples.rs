//! Verified tagged sentences
//!
//! Each sentence is kept in the exact tagged-text form the external tagger emits,
//! so tests also exercise the reader.

use crate::token::Sentence;

/// `Here's my new cool cat café! :-D`
pub const KITTY: &str = "Here/PRON 's/VERB my/PRON new/ADJ cool/ADJ cat/NOUN café/NOUN !/PUNC :-D/:)";

/// A single token whose word contains a slash
pub const FRACTION: &str = r"1\/2/NUM";

/// A longer sentence with determiners, adverbs, particles and a preposition
pub const GARDEN: &str = "The/DET very/ADV old/ADJ gardener/NOUN was/VERB quickly/ADV \
                          picking/VERB up/PRT leaves/NOUN in/ADP the/DET yard/NOUN ./PUNC";

pub fn kitty() -> Sentence {
    Sentence::from_tagged(KITTY)
}

pub fn fraction() -> Sentence {
    Sentence::from_tagged(FRACTION)
}

pub fn garden() -> Sentence {
    Sentence::from_tagged(GARDEN)
}
