//! Assertions over matcher and grammar output

use crate::constituents::Constituent;
use crate::matching::Match;
use crate::token::Sentence;

/// Assert that matches are non-empty, in bounds, non-overlapping and in order.
pub fn assert_ordered_disjoint(sentence: &Sentence, matches: &[Match<'_>]) {
    let mut floor = 0;
    for (i, m) in matches.iter().enumerate() {
        assert!(!m.is_empty(), "match {i} is empty");
        assert!(m.end() <= sentence.len(), "match {i} ends past the sentence");
        assert!(
            m.start() >= floor,
            "match {i} starts at {} but the previous one ends at {floor}",
            m.start()
        );
        floor = m.end();
    }
}

/// Assert that constituents tile `0..sentence.len()` exactly once, in order.
pub fn assert_partition(sentence: &Sentence, chunks: &[Constituent<'_>]) {
    let mut expected_start = 0;
    for (i, constituent) in chunks.iter().enumerate() {
        let chunk = &constituent.chunk;
        assert!(!chunk.is_empty(), "chunk {i} is empty");
        assert_eq!(
            chunk.start(),
            expected_start,
            "chunk {i} leaves a gap or overlaps"
        );
        expected_start = chunk.end();
    }
    assert_eq!(expected_start, sentence.len(), "chunks stop short of the sentence end");
}
