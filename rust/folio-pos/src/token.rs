//! The annotated token record crossing the tagging boundary.

use serde::{Deserialize, Serialize};

use crate::tag::PosTag;

/// One annotated token: the raw text span, its coarse category, and the
/// punctuation/whitespace flags annotation consumers branch on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The raw text of the span.
    pub text: String,
    /// Coarse grammatical category.
    pub tag: PosTag,
    /// Whether the span is punctuation.
    pub is_punct: bool,
    /// Whether the span is whitespace.
    pub is_space: bool,
}

impl Token {
    /// A word token with the given tag.
    pub fn word(text: impl Into<String>, tag: PosTag) -> Self {
        Token {
            text: text.into(),
            tag,
            is_punct: false,
            is_space: false,
        }
    }

    /// A punctuation token.
    pub fn punctuation(text: impl Into<String>) -> Self {
        Token {
            text: text.into(),
            tag: PosTag::Punct,
            is_punct: true,
            is_space: false,
        }
    }
}
