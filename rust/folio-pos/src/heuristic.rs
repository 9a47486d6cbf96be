//! A small rule-based tagger.
//!
//! Stands in for a statistical model behind the [`Tagger`] trait: a
//! closed-class lexicon (with the early-modern forms the play texts are
//! full of), a handful of suffix rules, and a capitalization heuristic.
//! Deterministic and dependency-free — good enough to exercise annotation
//! consumers and tests; not a linguistic model.

use crate::tag::PosTag;
use crate::token::Token;
use crate::Tagger;

/// Rule-based [`Tagger`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTagger;

impl HeuristicTagger {
    pub fn new() -> Self {
        HeuristicTagger
    }
}

impl Tagger for HeuristicTagger {
    fn tag(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        for span in split_spans(text) {
            tokens.push(classify(span));
        }
        tokens
    }
}

/// Split into word and punctuation spans; whitespace separates and is not
/// emitted. Apostrophes inside a word stay in the word (`'tis`, `father's`).
fn split_spans(text: &str) -> Vec<&str> {
    let mut spans = Vec::new();
    let mut start = None;
    for (i, c) in text.char_indices() {
        if c.is_alphanumeric() || c == '\'' {
            if start.is_none() {
                start = Some(i);
            }
        } else {
            if let Some(s) = start.take() {
                spans.push(&text[s..i]);
            }
            if !c.is_whitespace() {
                spans.push(&text[i..i + c.len_utf8()]);
            }
        }
    }
    if let Some(s) = start {
        spans.push(&text[s..]);
    }
    spans
}

fn classify(span: &str) -> Token {
    let mut chars = span.chars();
    let first = chars.next().unwrap_or(' ');

    if !first.is_alphanumeric() && first != '\'' {
        return if matches!(first, '$' | '%' | '+' | '=' | '<' | '>' | '§') {
            Token {
                text: span.to_owned(),
                tag: PosTag::Sym,
                is_punct: false,
                is_space: false,
            }
        } else {
            Token::punctuation(span)
        };
    }

    if span.chars().all(|c| c.is_ascii_digit()) {
        return Token::word(span, PosTag::Num);
    }

    let lower = span.to_lowercase();
    if let Some(tag) = closed_class(&lower) {
        return Token::word(span, tag);
    }

    // Capitalized words outside the closed classes read as names here;
    // without sentence context that over-triggers at line starts, which
    // is acceptable for a stand-in.
    if first.is_uppercase() && span.chars().skip(1).any(|c| c.is_lowercase()) {
        return Token::word(span, PosTag::Propn);
    }

    Token::word(span, suffix_rule(&lower))
}

/// Closed-class lexicon, early-modern forms included.
fn closed_class(word: &str) -> Option<PosTag> {
    let tag = match word {
        "the" | "a" | "an" | "this" | "that" | "these" | "those" | "each" | "every" | "no"
        | "some" | "any" | "my" | "mine" | "thy" | "thine" | "his" | "her" | "its" | "our"
        | "your" | "their" => PosTag::Det,

        "i" | "me" | "thou" | "thee" | "he" | "him" | "she" | "it" | "we" | "us" | "you"
        | "they" | "them" | "who" | "whom" | "what" | "himself" | "herself" | "thyself"
        | "myself" | "itself" => PosTag::Pron,

        "of" | "in" | "on" | "at" | "by" | "to" | "from" | "with" | "without" | "upon"
        | "into" | "unto" | "over" | "under" | "through" | "against" | "within" => PosTag::Adp,

        "is" | "am" | "are" | "was" | "were" | "be" | "been" | "being" | "art" | "wast"
        | "hath" | "hast" | "have" | "has" | "had" | "do" | "does" | "doth" | "dost" | "did"
        | "will" | "wilt" | "shall" | "shalt" | "would" | "wouldst" | "should" | "shouldst"
        | "can" | "canst" | "could" | "may" | "might" | "must" => PosTag::Aux,

        "and" | "but" | "or" | "nor" | "yet" | "both" | "either" | "neither" => PosTag::Cconj,

        "if" | "because" | "while" | "whilst" | "when" | "whenever" | "though" | "although"
        | "since" | "unless" | "until" | "ere" | "lest" | "whether" => PosTag::Sconj,

        "o" | "oh" | "alas" | "fie" | "hark" | "lo" | "ay" | "aye" | "adieu" | "farewell"
        | "hail" => PosTag::Intj,

        "not" | "n't" | "'s" | "ne'er" => PosTag::Part,

        "one" | "two" | "three" | "four" | "five" | "six" | "seven" | "eight" | "nine"
        | "ten" | "twain" | "hundred" | "thousand" => PosTag::Num,

        "here" | "there" | "now" | "then" | "never" | "ever" | "often" | "soon" | "again"
        | "thus" | "hence" | "thence" | "whence" | "hither" | "thither" | "anon"
        | "perchance" | "very" | "too" | "so" => PosTag::Adv,

        _ => return None,
    };
    Some(tag)
}

/// Suffix rules for open-class words; nouns are the fallback.
fn suffix_rule(word: &str) -> PosTag {
    const ADV: &[&str] = &["ly"];
    const ADJ: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ish"];
    const NOUN: &[&str] = &["tion", "sion", "ness", "ment", "ship", "hood", "dom"];
    const VERB: &[&str] = &["ize", "ise", "eth", "ing", "ed"];

    for (suffixes, tag) in [
        (ADV, PosTag::Adv),
        (ADJ, PosTag::Adj),
        (NOUN, PosTag::Noun),
        (VERB, PosTag::Verb),
    ] {
        if suffixes
            .iter()
            .any(|s| word.len() > s.len() + 2 && word.ends_with(s))
        {
            return tag;
        }
    }

    PosTag::Noun
}
