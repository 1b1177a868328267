//! Testing utilities
//!
//!     Tagged sentences are easy to get subtly wrong by hand: a missing escape, a
//!     lowercase tag, a token the tagger would never emit. Tests should prefer the
//!     verified sentences in [samples], which mirror real tagger output, and check
//!     chunking results through [assertions] rather than ad-hoc loops.
//!
//!     ```rust,ignore
//!     use tagchunk::testing::{assertions::assert_partition, samples};
//!
//!     let sentence = samples::kitty();
//!     let chunks = tagchunk::constituents(&sentence);
//!     assert_partition(&sentence, &chunks);
//!     ```

pub mod assertions;
pub mod samples;
