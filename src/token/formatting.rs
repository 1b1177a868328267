//! Tagged-text reading and rendering
//!
//! Tokens travel as `word/TAG`. Since words may themselves contain slashes
//! (`1/2`, `w/`), the word side escapes `/` and `\` with a backslash, and the
//! reader splits on the last unescaped `/`:
//!
//!     //PUNC      -> ("/", "PUNC")
//!     1\/2/NUM    -> ("1/2", "NUM")
//!     word        -> ("word", "")
//!
//! Rendering is the inverse, so rendered text reads back to the same tokens.

use super::core::{Sentence, Token};

/// Trait for converting tokens to their `word/TAG` representation
pub trait ToTaggedString {
    fn to_tagged_string(&self) -> String;
}

impl ToTaggedString for Token {
    fn to_tagged_string(&self) -> String {
        format!("{}/{}", escape_word(self.word()), self.tag())
    }
}

impl ToTaggedString for [Token] {
    fn to_tagged_string(&self) -> String {
        self.iter()
            .map(ToTaggedString::to_tagged_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Escape the characters that would otherwise confuse the reader.
pub fn escape_word(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for ch in word.chars() {
        if ch == '\\' || ch == '/' {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Split one `word/TAG` token on its last unescaped slash and unescape both sides.
pub fn split_tagged(raw: &str) -> (String, String) {
    let mut split_at = None;
    let mut escaped = false;
    for (i, ch) in raw.char_indices() {
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == '/' {
            split_at = Some(i);
        }
    }

    match split_at {
        Some(i) => (unescape(&raw[..i]), unescape(&raw[i + 1..])),
        None => (unescape(raw), String::new()),
    }
}

/// Read tagged text, one sentence per non-blank line.
pub fn read_tagged(text: &str) -> Vec<Sentence> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Sentence::from_tagged)
        .collect()
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            // A trailing lone backslash is kept as-is
            out.push(chars.next().unwrap_or('\\'));
        } else {
            out.push(ch);
        }
    }
    out
}
