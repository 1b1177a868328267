//! Phrase grammar
//!
//! The grammar is a table of `(label, pattern, priority)` rows, not code. Rules are
//! tried in ascending priority; ties keep table order. Each pattern is an ordinary
//! tag pattern and goes through the same compiler as user patterns.
//!
//! The built-in table:
//!
//!     NP    DET|PRON ADV|ADJ|NUM+ NOUN+    determiner, modifiers, nouns
//!     NP    DET|PRON NOUN+
//!     NP    ADJ|NUM+ NOUN+
//!     NP    NOUN+
//!     NP    DET|PRON                       a bare pronoun stands alone
//!     VP    ADV VERB|PRT+
//!     VP    VERB|PRT+
//!     PP    ADP
//!     ADJP  ADV ADJ+
//!     ADJP  ADJ+
//!     ADVP  ADV+
//!
//! Longer NP shapes come first so `my new cool cat` and `the very old gardener`
//! are one phrase each while a pronoun followed by a verb (`Here 's`) is a phrase
//! by itself.

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::matching::Match;
use crate::pattern::{Pattern, PatternSyntaxError};
use crate::token::Sentence;

use super::Constituent;

/// Built-in rules as `(label, pattern)`, in priority order.
const BUILTIN_RULES: &[(&str, &str)] = &[
    ("NP", "DET|PRON ADV|ADJ|NUM+ NOUN+"),
    ("NP", "DET|PRON NOUN+"),
    ("NP", "ADJ|NUM+ NOUN+"),
    ("NP", "NOUN+"),
    ("NP", "DET|PRON"),
    ("VP", "ADV VERB|PRT+"),
    ("VP", "VERB|PRT+"),
    ("PP", "ADP"),
    ("ADJP", "ADV ADJ+"),
    ("ADJP", "ADJ+"),
    ("ADVP", "ADV+"),
];

/// Spacing between built-in priorities, leaving room for configured rules.
pub const PRIORITY_STEP: u32 = 10;

static STANDARD: Lazy<Grammar> = Lazy::new(|| {
    Grammar::from_rules(builtin_rules()).expect("built-in grammar rules must compile")
});

/// One row of a rule table before compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarRule {
    pub label: String,
    pub pattern: String,
    #[serde(default)]
    pub priority: u32,
}

impl GrammarRule {
    pub fn new(label: impl Into<String>, pattern: impl Into<String>, priority: u32) -> Self {
        Self {
            label: label.into(),
            pattern: pattern.into(),
            priority,
        }
    }
}

/// The built-in rule table with priorities `10, 20, 30, ...`.
pub fn builtin_rules() -> Vec<GrammarRule> {
    BUILTIN_RULES
        .iter()
        .enumerate()
        .map(|(i, (label, pattern))| {
            GrammarRule::new(*label, *pattern, (i as u32 + 1) * PRIORITY_STEP)
        })
        .collect()
}

/// A rule whose pattern did not compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarError {
    pub label: String,
    pub pattern: String,
    pub source: PatternSyntaxError,
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "grammar rule {} `{}`: {}", self.label, self.pattern, self.source)
    }
}

impl std::error::Error for GrammarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[derive(Debug, Clone)]
struct CompiledRule {
    label: String,
    priority: u32,
    pattern: Pattern,
}

/// A compiled, priority-ordered rule table.
#[derive(Debug, Clone)]
pub struct Grammar {
    rules: Vec<CompiledRule>,
}

impl Grammar {
    /// Compile a rule table. Fails on the first rule whose pattern is invalid.
    pub fn from_rules<I>(rules: I) -> Result<Self, GrammarError>
    where
        I: IntoIterator<Item = GrammarRule>,
    {
        let mut compiled = rules
            .into_iter()
            .map(|rule| match Pattern::compile(&rule.pattern) {
                Ok(pattern) => Ok(CompiledRule {
                    label: rule.label,
                    priority: rule.priority,
                    pattern,
                }),
                Err(source) => Err(GrammarError {
                    label: rule.label,
                    pattern: rule.pattern,
                    source,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        compiled.sort_by_key(|rule| rule.priority);
        debug!(rules = compiled.len(), "built grammar");
        Ok(Self { rules: compiled })
    }

    /// The shared built-in grammar.
    pub fn standard() -> &'static Grammar {
        &STANDARD
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules as they will be tried.
    pub fn rules(&self) -> impl Iterator<Item = GrammarRule> + '_ {
        self.rules
            .iter()
            .map(|rule| GrammarRule::new(&rule.label, rule.pattern.source(), rule.priority))
    }

    /// Partition `sentence` into labeled chunks covering every token once.
    pub fn constituents<'s>(&self, sentence: &'s Sentence) -> Vec<Constituent<'s>> {
        let mut chunks = Vec::new();
        let mut pos = 0;

        while pos < sentence.len() {
            let hit = self
                .rules
                .iter()
                .find_map(|rule| rule.pattern.match_at(sentence, pos).map(|range| (rule, range)));

            let (label, range) = match hit {
                Some((rule, range)) => (rule.label.clone(), range),
                None => (String::new(), pos..pos + 1),
            };
            trace!(label = label.as_str(), ?range, "chunk");

            pos = range.end;
            chunks.push(Constituent::new(Match::new(sentence, range), label));
        }

        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::samples;

    fn labeled(grammar: &Grammar, sentence: &Sentence) -> Vec<(String, String)> {
        grammar
            .constituents(sentence)
            .into_iter()
            .map(|c| (c.label().to_string(), c.to_string()))
            .collect()
    }

    fn pair(label: &str, text: &str) -> (String, String) {
        (label.to_string(), text.to_string())
    }

    #[test]
    fn test_builtin_priorities_are_spaced() {
        let rules = builtin_rules();
        assert_eq!(rules.len(), BUILTIN_RULES.len());
        assert_eq!(rules[0].priority, 10);
        assert_eq!(rules[10].priority, 110);
        assert_eq!(rules[10].label, "ADVP");
    }

    #[test]
    fn test_standard_grammar_compiles() {
        assert_eq!(Grammar::standard().len(), BUILTIN_RULES.len());
    }

    #[test]
    fn test_kitty_sentence() {
        let s = samples::kitty();
        assert_eq!(
            labeled(Grammar::standard(), &s),
            vec![
                pair("NP", "Here/PRON"),
                pair("VP", "'s/VERB"),
                pair("NP", "my/PRON new/ADJ cool/ADJ cat/NOUN café/NOUN"),
                pair("", "!/PUNC"),
                pair("", ":-D/:)"),
            ]
        );
    }

    #[test]
    fn test_garden_sentence() {
        let s = samples::garden();
        assert_eq!(
            labeled(Grammar::standard(), &s),
            vec![
                pair("NP", "The/DET very/ADV old/ADJ gardener/NOUN"),
                pair("VP", "was/VERB"),
                pair("VP", "quickly/ADV picking/VERB up/PRT"),
                pair("NP", "leaves/NOUN"),
                pair("PP", "in/ADP"),
                pair("NP", "the/DET yard/NOUN"),
                pair("", "./PUNC"),
            ]
        );
    }

    #[test]
    fn test_priority_reorders_rules() {
        let grammar = Grammar::from_rules([
            GrammarRule::new("WIDE", "? ?", 20),
            GrammarRule::new("NARROW", "?", 10),
        ])
        .unwrap();
        let s = Sentence::from_tagged("a/X b/X");
        assert_eq!(
            labeled(&grammar, &s),
            vec![pair("NARROW", "a/X"), pair("NARROW", "b/X")]
        );
    }

    #[test]
    fn test_equal_priorities_keep_table_order() {
        let grammar = Grammar::from_rules([
            GrammarRule::new("FIRST", "X", 5),
            GrammarRule::new("SECOND", "X", 5),
        ])
        .unwrap();
        let names: Vec<String> = grammar.rules().map(|rule| rule.label).collect();
        assert_eq!(names, vec!["FIRST", "SECOND"]);
    }

    #[test]
    fn test_empty_grammar_leaves_everything_unlabeled() {
        let grammar = Grammar::from_rules(Vec::new()).unwrap();
        assert!(grammar.is_empty());
        let s = Sentence::from_tagged("a/DET cat/NOUN");
        assert_eq!(
            labeled(&grammar, &s),
            vec![pair("", "a/DET"), pair("", "cat/NOUN")]
        );
    }

    #[test]
    fn test_invalid_rule_is_reported() {
        let err = Grammar::from_rules([GrammarRule::new("NP", "AD[J", 1)]).unwrap_err();
        assert_eq!(err.label, "NP");
        assert_eq!(err.pattern, "AD[J");
        assert_eq!(err.source, PatternSyntaxError::UnclosedClass { position: 2 });
        assert!(err.to_string().starts_with("grammar rule NP `AD[J`:"));
    }

    #[test]
    fn test_empty_sentence() {
        assert!(Grammar::standard().constituents(&Sentence::default()).is_empty());
    }
}
