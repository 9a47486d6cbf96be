//! # folio-pos
//!
//! The part-of-speech annotation boundary. Linguistic analysis is an
//! external capability: given a string, return a sequence of tokens each
//! carrying a coarse grammatical category. This crate defines that
//! contract — the [`Tagger`] trait, the [`Token`] record, and the
//! [`PosTag`] enumeration with its presentation legend — plus a small
//! deterministic [`HeuristicTagger`] so the pipeline and its tests run
//! without loading a real model.
//!
//! Components that annotate text take the capability as an explicit
//! parameter (`&dyn Tagger` or a generic bound); there is no process-wide
//! model singleton. Callers that load a statistical model implement
//! [`Tagger`] for it at the boundary and initialize it once at startup.

pub mod heuristic;
pub mod tag;
pub mod token;

pub use heuristic::HeuristicTagger;
pub use tag::PosTag;
pub use token::Token;

/// A part-of-speech tagging capability.
///
/// Implementations must be pure with respect to the input: the same text
/// yields the same tokens. The token sequence covers the non-whitespace
/// content of `text` in order.
pub trait Tagger {
    /// Annotate `text` as a sequence of tagged tokens.
    fn tag(&self, text: &str) -> Vec<Token>;
}
