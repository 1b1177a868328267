//! Backtracking engine
//!
//! One attempt at one start position. The state is an explicit stack of
//! `(start, len)` frames, one per satisfied atom:
//!
//!     push:    the next atom takes its longest anchor-respecting run
//!     release: the newest frame that can still shrink gives back one token,
//!              frames above it are discarded and re-derived
//!
//! Every release strictly shrinks some frame, so the search terminates; its depth
//! is bounded by the longest greedy run. A span that consumed no tokens (only
//! optional `?` atoms took part) never counts as a match.

use std::ops::Range;

use crate::pattern::{Atom, Pattern};
use crate::token::{Sentence, Token};

use super::matches::{Match, Matches};

impl Pattern {
    /// Try to match starting exactly at `start`. Returns the consumed span.
    pub fn match_at(&self, sentence: &Sentence, start: usize) -> Option<Range<usize>> {
        let end = match_tokens(self.atoms(), sentence.tokens(), start)?;
        Some(start..end)
    }

    /// Lazily scan the whole sentence.
    pub fn matches<'p, 's>(&'p self, sentence: &'s Sentence) -> Matches<'p, 's> {
        Matches::new(self, sentence)
    }

    pub fn find_all<'s>(&self, sentence: &'s Sentence) -> Vec<Match<'s>> {
        self.matches(sentence).collect()
    }

    pub fn is_match(&self, sentence: &Sentence) -> bool {
        self.matches(sentence).next().is_some()
    }
}

fn match_tokens(atoms: &[Atom], tokens: &[Token], start: usize) -> Option<usize> {
    if start >= tokens.len() {
        return None;
    }

    let n = tokens.len();
    let mut stack: Vec<(usize, usize)> = Vec::with_capacity(atoms.len());
    let mut pos = start;

    loop {
        let depth = stack.len();
        if depth == atoms.len() {
            if pos > start {
                return Some(pos);
            }
        } else {
            let atom = &atoms[depth];
            let run = atom.run_length(tokens, pos);
            if let Some(len) = longest_fit(atom, n, pos, run) {
                stack.push((pos, len));
                pos += len;
                continue;
            }
        }

        // Release one token from the newest frame that has one to spare
        loop {
            let (at, len) = stack.pop()?;
            let atom = &atoms[stack.len()];
            if len == 0 {
                continue;
            }
            if let Some(shorter) = longest_fit(atom, n, at, len - 1) {
                stack.push((at, shorter));
                pos = at + shorter;
                break;
            }
        }
    }
}

/// Longest length in `min..=upper` that keeps the atom's anchors satisfied.
fn longest_fit(atom: &Atom, sentence_len: usize, at: usize, upper: usize) -> Option<usize> {
    (atom.quantifier.min()..=upper)
        .rev()
        .find(|&len| atom.fits_anchors(sentence_len, at, len))
}
