//! # folio-graph
//!
//! Character interaction graphs from dialogue proximity.
//!
//! ## Pipeline
//!
//! ```text
//! per-scene speaking order (folio-text)
//!   → proximity-decayed pair weights (1/|i-j| within a two-turn window)
//!     → undirected weighted graph (roster-seeded, no self-loops)
//!       → centrality metrics → importance ranking
//! ```
//!
//! Everything is recomputed wholesale from the scene sequences; nothing is
//! mutated incrementally. Graphs and metrics are disposable snapshots —
//! cheap to rebuild, safe to share.
//!
//! The weighting scheme is deliberately simple: two characters interact
//! when they speak within two turns of each other in the same scene, and
//! each qualifying ordered index pair contributes `1/|i-j|` to the
//! unordered pair's accumulated weight (so both scan directions count —
//! see [`weights::interaction_weights`]).

pub mod analysis;
pub mod centrality;
pub mod error;
pub mod graph;
pub mod importance;
pub mod weights;

pub use analysis::{Analysis, analyze, analyze_with};
pub use centrality::{
    PowerIterationConfig, betweenness_centrality, degree_centrality, eigenvector_centrality,
};
pub use error::GraphError;
pub use graph::{Edge, InteractionGraph};
pub use importance::{ImportanceMetrics, ranking, score};
pub use weights::{PairWeights, WeightConfig, interaction_weights};
