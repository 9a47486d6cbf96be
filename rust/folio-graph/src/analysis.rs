//! The end-to-end analysis pipeline.
//!
//! Wires a parsed [`Play`] through weight accumulation, roster-seeded
//! graph construction, and importance scoring. An [`Analysis`] is a
//! disposable snapshot: derived once per request, read-only thereafter,
//! rebuilt rather than mutated when the underlying play changes.

use std::collections::BTreeMap;

use tracing::debug;

use folio_text::Play;

use crate::centrality::PowerIterationConfig;
use crate::error::GraphError;
use crate::graph::InteractionGraph;
use crate::importance::{ImportanceMetrics, ranking, score};
use crate::weights::{WeightConfig, interaction_weights};

/// A completed interaction analysis over one play.
#[derive(Debug, Clone)]
pub struct Analysis {
    graph: InteractionGraph,
    metrics: BTreeMap<String, ImportanceMetrics>,
}

/// Analyze a play with default tuning.
pub fn analyze(play: &Play) -> Result<Analysis, GraphError> {
    analyze_with(play, &WeightConfig::default(), &PowerIterationConfig::default())
}

/// Analyze a play with explicit weight and iteration tuning.
pub fn analyze_with(
    play: &Play,
    weight_config: &WeightConfig,
    iteration_config: &PowerIterationConfig,
) -> Result<Analysis, GraphError> {
    let sequences = play.scene_sequences();
    let weights = interaction_weights(&sequences, weight_config);
    let graph = InteractionGraph::with_roster(&weights, play.roster());
    let metrics = score(&graph, &sequences, iteration_config)?;

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        scenes = sequences.len(),
        "analyzed play"
    );

    Ok(Analysis { graph, metrics })
}

impl Analysis {
    /// The interaction graph snapshot.
    pub fn graph(&self) -> &InteractionGraph {
        &self.graph
    }

    /// Metrics for one character; `None` when the character is not a
    /// graph node.
    pub fn metrics(&self, character: &str) -> Option<&ImportanceMetrics> {
        self.metrics.get(character)
    }

    /// All metrics, keyed by character.
    pub fn all_metrics(&self) -> &BTreeMap<String, ImportanceMetrics> {
        &self.metrics
    }

    /// Characters by combined importance, descending.
    pub fn ranking(&self) -> Vec<(String, f64)> {
        ranking(&self.metrics)
    }
}
