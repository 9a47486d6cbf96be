//! # folio-text
//!
//! Parsing for public-domain play texts (the Project Gutenberg Shakespeare
//! editions), turning a loosely formatted text file into a queryable
//! act/scene structure with speaker-level access.
//!
//! ## Pipeline
//!
//! ```text
//! raw text → normalize (strip Gutenberg boilerplate)
//!   → structure (act/scene lexer + state machine)
//!     → { character extraction, dialogue sequencing, dramatis personae }
//! ```
//!
//! Every stage is a pure function over immutable input: a [`Play`] is parsed
//! once and read thereafter. Parsing anomalies degrade to empty structures
//! rather than errors — a text with no recognizable act or scene headings
//! parses to an empty table of contents, and callers decide what "could not
//! parse" means for them. Only lookups against the parsed structure (a
//! missing act/scene pair) surface as typed [`StructureError`]s.
//!
//! The format this crate tolerates is human-authored and inconsistent:
//! Roman-numeral headings (`ACT I`, `SCENE II.`), all-caps speaker cues
//! terminated by a period, bracketed stage directions, and typographic
//! leftovers like the `Dramatis Personæ` ligature. Recognition is done with
//! small hand-rolled line scanners, not a regex engine.

pub mod character;
pub mod dramatis;
pub mod error;
pub mod normalize;
pub mod play;
pub mod roman;
pub mod sequence;
pub mod stage;
pub mod structure;

pub use character::{character_lines, extract_characters, speaker_cue};
pub use dramatis::dramatis_personae;
pub use error::StructureError;
pub use normalize::normalize;
pub use play::Play;
pub use sequence::{SceneSequence, scene_sequences};
pub use stage::stage_directions;
pub use structure::{ActEntry, ActsScenes, TableOfContents, parse_structure};
