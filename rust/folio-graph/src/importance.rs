//! Character importance: dialogue volume plus centrality metrics.
//!
//! Each character in the graph gets an [`ImportanceMetrics`] record
//! derived read-only from a fixed graph snapshot and the per-scene
//! speaking orders. The combined ranking weight
//! `0.4·degree + 0.3·betweenness + 0.2·eigenvector + 0.1·dialogue-share`
//! exists for presentation ordering only; the individual metrics are the
//! data contract.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use folio_text::SceneSequence;

use crate::centrality::{
    PowerIterationConfig, betweenness_centrality, degree_centrality, eigenvector_centrality,
};
use crate::error::GraphError;
use crate::graph::InteractionGraph;

/// Read-only importance record for one character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportanceMetrics {
    /// Total speaking turns across all scenes.
    pub dialogue_count: usize,
    /// Normalized degree centrality.
    pub degree: f64,
    /// Normalized shortest-path betweenness centrality.
    pub betweenness: f64,
    /// Eigenvector centrality (L2-normalized).
    pub eigenvector: f64,
}

impl ImportanceMetrics {
    /// Combined importance weight for ranking. `max_dialogue` is the
    /// largest dialogue count over all characters; zero yields a zero
    /// dialogue share.
    pub fn combined(&self, max_dialogue: usize) -> f64 {
        let share = if max_dialogue == 0 {
            0.0
        } else {
            self.dialogue_count as f64 / max_dialogue as f64
        };
        0.4 * self.degree + 0.3 * self.betweenness + 0.2 * self.eigenvector + 0.1 * share
    }
}

/// Compute metrics for every character in the graph.
///
/// Characters that speak but never entered the graph (or the reverse —
/// roster-seeded silent characters) are covered exactly when they are
/// graph nodes; looking up a character absent from the result is the
/// caller's `None`, not an error.
pub fn score(
    graph: &InteractionGraph,
    sequences: &[SceneSequence],
    config: &PowerIterationConfig,
) -> Result<BTreeMap<String, ImportanceMetrics>, GraphError> {
    let mut dialogue_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for scene in sequences {
        for speaker in scene {
            *dialogue_counts.entry(speaker.as_str()).or_insert(0) += 1;
        }
    }

    let degree = degree_centrality(graph);
    let betweenness = betweenness_centrality(graph);
    let eigenvector = eigenvector_centrality(graph, config)?;

    let metrics = graph
        .nodes()
        .enumerate()
        .map(|(i, label)| {
            (
                label.to_owned(),
                ImportanceMetrics {
                    dialogue_count: dialogue_counts.get(label).copied().unwrap_or(0),
                    degree: degree[i],
                    betweenness: betweenness[i],
                    eigenvector: eigenvector[i],
                },
            )
        })
        .collect();

    Ok(metrics)
}

/// Characters ordered by combined importance, descending. Ties keep the
/// map's lexicographic order.
pub fn ranking(metrics: &BTreeMap<String, ImportanceMetrics>) -> Vec<(String, f64)> {
    let max_dialogue = metrics
        .values()
        .map(|m| m.dialogue_count)
        .max()
        .unwrap_or(0);

    let mut ranked: Vec<(String, f64)> = metrics
        .iter()
        .map(|(label, m)| (label.clone(), m.combined(max_dialogue)))
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}
