//! Word-level tokenizer
//!
//! Splits text on Unicode word boundaries, then breaks each word again at
//! any non-alphanumeric character. Whitespace and punctuation never become
//! tokens, and clitics and hyphenated parts come out on their own
//! ("Segment's" -> "Segment", "s"; "how-to" -> "how", "to").

use unicode_segmentation::UnicodeSegmentation;

/// Tokenize `text` into words, in order of appearance
#[must_use]
pub fn tokenize(text: &str) -> Vec<&str> {
    text.unicode_words()
        .flat_map(|word| word.split(|c: char| !c.is_alphanumeric()))
        .filter(|part| !part.is_empty())
        .collect()
}
