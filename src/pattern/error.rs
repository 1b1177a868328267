//! Error types for pattern compilation
//!
//! Positions are byte offsets into the pattern source.

use std::fmt;

/// Errors raised while compiling a pattern string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSyntaxError {
    /// The pattern has no atoms at all
    Empty,
    /// A backslash with nothing after it
    UnterminatedEscape { position: usize },
    /// An atom made only of anchors and quantifiers
    EmptyAtom { position: usize },
    /// An empty side of a `|` alternation
    EmptyAlternative { position: usize },
    /// A reserved character outside the place it has meaning
    UnexpectedMetacharacter { ch: char, position: usize },
    /// A `[` without its `]`
    UnclosedClass { position: usize },
    /// A `]` without its `[`
    UnbalancedBracket { position: usize },
    /// `[]`
    EmptyClass { position: usize },
    /// The tag expression was rejected by the regex compiler
    InvalidTagExpression { expression: String, message: String },
}

impl fmt::Display for PatternSyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternSyntaxError::Empty => write!(f, "Pattern has no atoms"),
            PatternSyntaxError::UnterminatedEscape { position } => {
                write!(f, "Unterminated escape at {}", position)
            }
            PatternSyntaxError::EmptyAtom { position } => {
                write!(f, "Atom at {} has nothing to match", position)
            }
            PatternSyntaxError::EmptyAlternative { position } => {
                write!(f, "Empty alternative at {}", position)
            }
            PatternSyntaxError::UnexpectedMetacharacter { ch, position } => {
                write!(
                    f,
                    "Unexpected '{}' at {} (escape it with a backslash to match it literally)",
                    ch, position
                )
            }
            PatternSyntaxError::UnclosedClass { position } => {
                write!(f, "Character class opened at {} is never closed", position)
            }
            PatternSyntaxError::UnbalancedBracket { position } => {
                write!(f, "Unbalanced ']' at {}", position)
            }
            PatternSyntaxError::EmptyClass { position } => {
                write!(f, "Empty character class at {}", position)
            }
            PatternSyntaxError::InvalidTagExpression {
                expression,
                message,
            } => {
                write!(f, "Invalid tag expression '{}': {}", expression, message)
            }
        }
    }
}

impl std::error::Error for PatternSyntaxError {}
