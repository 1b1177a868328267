//! Property-based tests for the matcher and the constituent grammar
//!
//! Sentences are drawn from a small tag vocabulary so that patterns hit often.

use proptest::prelude::*;
use tagchunk::testing::assertions::{assert_ordered_disjoint, assert_partition};
use tagchunk::{constituents, Pattern, Sentence};

const TAGS: &[&str] = &[
    "DET", "PRON", "ADJ", "NUM", "NOUN", "VERB", "PRT", "ADV", "ADP", "PUNC",
];

const WORDS: &[&str] = &["a", "the", "cat", "is", "be", "old", "up", "1/2", "!", ":-D"];

fn sentence_strategy() -> impl Strategy<Value = Sentence> {
    prop::collection::vec((prop::sample::select(WORDS), prop::sample::select(TAGS)), 0..12)
        .prop_map(|pairs| Sentence::new(pairs))
}

fn pattern_strategy() -> impl Strategy<Value = String> {
    let atom = prop_oneof![
        prop::sample::select(TAGS).prop_map(str::to_string),
        prop::sample::select(TAGS).prop_map(|tag| format!("{}+", tag)),
        Just("?".to_string()),
        Just("-".to_string()),
        Just("ADJ|NOUN+".to_string()),
        Just("NOUN|VERB".to_string()),
        Just("BE".to_string()),
        Just("ca-".to_string()),
        Just(r"1\/2".to_string()),
    ];
    (any::<bool>(), prop::collection::vec(atom, 1..4), any::<bool>()).prop_map(
        |(start, atoms, end)| {
            let mut pattern = atoms.join(" ");
            if start {
                pattern.insert(0, '^');
            }
            if end {
                pattern.push('$');
            }
            pattern
        },
    )
}

proptest! {
    #[test]
    fn matches_are_ordered_and_disjoint(sentence in sentence_strategy(), source in pattern_strategy()) {
        let pattern = Pattern::compile(&source).unwrap();
        let found = pattern.find_all(&sentence);
        assert_ordered_disjoint(&sentence, &found);
    }

    #[test]
    fn matching_is_deterministic(sentence in sentence_strategy(), source in pattern_strategy()) {
        let pattern = Pattern::compile(&source).unwrap();
        let first: Vec<_> = pattern.find_all(&sentence).iter().map(|m| m.range()).collect();
        let second: Vec<_> = pattern.find_all(&sentence).iter().map(|m| m.range()).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn anchors_pin_matches_to_the_edges(sentence in sentence_strategy(), source in pattern_strategy()) {
        let pattern = Pattern::compile(&source).unwrap();
        let found = pattern.find_all(&sentence);

        if pattern.is_start_anchored() {
            prop_assert!(found.len() <= 1);
            prop_assert!(found.iter().all(|m| m.start() == 0));
        }
        if pattern.is_end_anchored() {
            prop_assert!(found.iter().all(|m| m.end() == sentence.len()));
        }
        if pattern.is_start_anchored() && pattern.is_end_anchored() {
            prop_assert!(found.iter().all(|m| m.range() == (0..sentence.len())));
        }
    }

    #[test]
    fn single_plus_atom_takes_the_maximal_run(sentence in sentence_strategy(), tag in prop::sample::select(TAGS)) {
        let pattern = Pattern::compile(&format!("{}+", tag)).unwrap();
        for m in pattern.find_all(&sentence) {
            prop_assert!(m.tags().iter().all(|t| *t == tag));
            if m.end() < sentence.len() {
                prop_assert_ne!(sentence[m.end()].tag(), tag);
            }
            if m.start() > 0 {
                prop_assert_ne!(sentence[m.start() - 1].tag(), tag);
            }
        }
    }

    #[test]
    fn word_forms_ignore_case(sentence in sentence_strategy()) {
        let lower = Pattern::compile("the").unwrap().find_all(&sentence).len();
        let upper = Pattern::compile("The").unwrap().find_all(&sentence).len();
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn constituents_partition_the_sentence(sentence in sentence_strategy()) {
        let chunks = constituents(&sentence);
        assert_partition(&sentence, &chunks);
    }
}
