//! The coarse part-of-speech tag set.
//!
//! The seventeen Universal Dependencies categories, plus the legend
//! (display color and one-line description) the presentation layer uses
//! for its tag-coloring views.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A coarse grammatical category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    Noun,
    Verb,
    Adj,
    Adv,
    Pron,
    Det,
    Adp,
    Aux,
    Cconj,
    Intj,
    Num,
    Part,
    Propn,
    Punct,
    Sconj,
    Sym,
    X,
}

impl PosTag {
    /// Every tag, in legend order.
    pub const ALL: [PosTag; 17] = [
        PosTag::Noun,
        PosTag::Verb,
        PosTag::Adj,
        PosTag::Adv,
        PosTag::Pron,
        PosTag::Det,
        PosTag::Adp,
        PosTag::Aux,
        PosTag::Cconj,
        PosTag::Intj,
        PosTag::Num,
        PosTag::Part,
        PosTag::Propn,
        PosTag::Punct,
        PosTag::Sconj,
        PosTag::Sym,
        PosTag::X,
    ];

    /// The conventional uppercase tag name.
    pub fn as_str(self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::Verb => "VERB",
            PosTag::Adj => "ADJ",
            PosTag::Adv => "ADV",
            PosTag::Pron => "PRON",
            PosTag::Det => "DET",
            PosTag::Adp => "ADP",
            PosTag::Aux => "AUX",
            PosTag::Cconj => "CCONJ",
            PosTag::Intj => "INTJ",
            PosTag::Num => "NUM",
            PosTag::Part => "PART",
            PosTag::Propn => "PROPN",
            PosTag::Punct => "PUNCT",
            PosTag::Sconj => "SCONJ",
            PosTag::Sym => "SYM",
            PosTag::X => "X",
        }
    }

    /// Display color used by the presentation layer's colored-text views.
    pub fn color(self) -> &'static str {
        match self {
            PosTag::Noun => "green",
            PosTag::Verb => "red",
            PosTag::Adj => "blue",
            PosTag::Adv => "cyan",
            PosTag::Pron => "magenta",
            PosTag::Det => "yellow",
            PosTag::Adp => "blue",
            PosTag::Aux => "red",
            PosTag::Cconj => "purple",
            PosTag::Intj => "orange",
            PosTag::Num => "yellow",
            PosTag::Part => "green",
            PosTag::Propn => "pink",
            PosTag::Punct => "grey",
            PosTag::Sconj => "blue",
            PosTag::Sym => "grey",
            PosTag::X => "grey",
        }
    }

    /// One-line description for the tag legend.
    pub fn description(self) -> &'static str {
        match self {
            PosTag::Noun => "Noun - person, place, thing, or idea",
            PosTag::Verb => "Verb - action or state of being",
            PosTag::Adj => "Adjective - describes a noun",
            PosTag::Adv => "Adverb - modifies verb, adjective, or other adverb",
            PosTag::Pron => "Pronoun - replaces a noun",
            PosTag::Det => "Determiner - introduces a noun",
            PosTag::Adp => "Adposition - preposition or postposition",
            PosTag::Aux => "Auxiliary - helping verb",
            PosTag::Cconj => "Coordinating Conjunction - connects words, phrases, clauses",
            PosTag::Intj => "Interjection - exclamation",
            PosTag::Num => "Number - numerical value",
            PosTag::Part => "Particle - function word",
            PosTag::Propn => "Proper Noun - specific name",
            PosTag::Punct => "Punctuation - punctuation marks",
            PosTag::Sconj => "Subordinating Conjunction - connects clauses",
            PosTag::Sym => "Symbol - mathematical or scientific symbol",
            PosTag::X => "Other - other word category",
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_as_uppercase_names() {
        assert_eq!(serde_json::to_string(&PosTag::Cconj).unwrap(), "\"CCONJ\"");
        let tag: PosTag = serde_json::from_str("\"PROPN\"").unwrap();
        assert_eq!(tag, PosTag::Propn);
    }

    #[test]
    fn every_tag_has_a_legend_entry() {
        for tag in PosTag::ALL {
            assert!(!tag.color().is_empty());
            assert!(tag.description().starts_with(char::is_alphabetic));
            assert_eq!(tag.to_string(), tag.as_str());
        }
    }
}
