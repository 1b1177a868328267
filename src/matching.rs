//! Sequence matcher
//!
//! Scans a [Sentence] against a compiled [Pattern] and yields ordered,
//! non-overlapping [Match]es:
//!
//! 1. Candidate starts are `0..len`, or just `0` when the first atom is `^`-anchored.
//! 2. At each start the atoms are satisfied in order against consecutive tokens.
//!    `+` atoms take their maximal run first and give tokens back one at a time
//!    only when a later atom cannot match (see [engine]).
//! 3. A success records the span and scanning resumes at its end; a failure moves
//!    the start forward by one.
//!
//! Matching cannot fail once a pattern is compiled. No match is an empty result.

pub mod engine;
pub mod matches;

use crate::pattern::{PatternCache, PatternSyntaxError};
use crate::token::Sentence;

pub use matches::{Match, Matches};

/// Compile `pattern` through the process-wide cache and collect its matches.
pub fn chunk<'s>(
    pattern: &str,
    sentence: &'s Sentence,
) -> Result<Vec<Match<'s>>, PatternSyntaxError> {
    let compiled = PatternCache::global().get_or_compile(pattern)?;
    Ok(compiled.find_all(sentence))
}
