//! The undirected weighted interaction graph.
//!
//! Nodes are character labels; edges carry the accumulated interaction
//! weight for the pair. No self-loops, no parallel edges — weights for a
//! pair accumulate into one edge. Node order is insertion order, which is
//! deterministic because [`PairWeights`](crate::weights::PairWeights)
//! iterates lexicographically.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::weights::PairWeights;

/// One edge of the data contract snapshot, labels sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

/// A weighted undirected graph over speaking characters.
#[derive(Debug, Clone, Default)]
pub struct InteractionGraph {
    /// label → optional roster description. Insertion-ordered.
    nodes: IndexMap<String, Option<String>>,
    /// (node index, node index, weight), source index < target index by
    /// label order of insertion.
    edges: Vec<(usize, usize, f64)>,
    /// Per-node incident (neighbor index, weight) lists.
    adjacency: Vec<Vec<(usize, f64)>>,
}

impl InteractionGraph {
    /// Build a graph from accumulated pair weights alone; every character
    /// referenced by a pair becomes a node.
    pub fn from_weights(weights: &PairWeights) -> Self {
        Self::build(weights, [])
    }

    /// Build a graph seeded with an explicit roster, so listed characters
    /// appear as nodes (with descriptions) even when they never interact.
    pub fn with_roster<I, S>(weights: &PairWeights, roster: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self::build(
            weights,
            roster.into_iter().map(|(n, d)| (n.into(), d.into())),
        )
    }

    fn build(weights: &PairWeights, roster: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut graph = InteractionGraph::default();

        for (name, description) in roster {
            let idx = graph.intern(name);
            graph.nodes[idx] = Some(description);
        }

        for ((a, b), &weight) in weights {
            // A speaker within window distance of their own next turn
            // accumulates a degenerate pair; it never becomes an edge.
            if a == b {
                continue;
            }
            let ia = graph.intern(a.clone());
            let ib = graph.intern(b.clone());
            graph.edges.push((ia, ib, weight));
            graph.adjacency[ia].push((ib, weight));
            graph.adjacency[ib].push((ia, weight));
        }

        graph
    }

    fn intern(&mut self, label: String) -> usize {
        let entry = self.nodes.entry(label);
        let idx = entry.index();
        entry.or_insert(None);
        if self.adjacency.len() <= idx {
            self.adjacency.push(Vec::new());
        }
        idx
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node labels in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.nodes.contains_key(label)
    }

    /// Roster description for a node, when one was seeded.
    pub fn description(&self, label: &str) -> Option<&str> {
        self.nodes.get(label)?.as_deref()
    }

    /// Number of incident edges.
    pub fn degree(&self, label: &str) -> usize {
        self.index_of(label)
            .map(|i| self.adjacency[i].len())
            .unwrap_or(0)
    }

    /// Accumulated weight between two characters, `None` when no edge.
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<f64> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        self.adjacency[ia]
            .iter()
            .find(|(j, _)| *j == ib)
            .map(|&(_, w)| w)
    }

    /// Incident neighbors with weights.
    pub fn neighbors<'a>(&'a self, label: &str) -> impl Iterator<Item = (&'a str, f64)> + use<'a> {
        let incident = self
            .index_of(label)
            .map(|i| self.adjacency[i].as_slice())
            .unwrap_or(&[]);
        incident
            .iter()
            .map(|&(j, w)| (self.label_of(j), w))
    }

    /// Edge snapshot for the presentation data contract.
    pub fn edge_list(&self) -> Vec<Edge> {
        self.edges
            .iter()
            .map(|&(a, b, weight)| Edge {
                source: self.label_of(a).to_owned(),
                target: self.label_of(b).to_owned(),
                weight,
            })
            .collect()
    }

    pub(crate) fn index_of(&self, label: &str) -> Option<usize> {
        self.nodes.get_index_of(label)
    }

    pub(crate) fn label_of(&self, index: usize) -> &str {
        self.nodes
            .get_index(index)
            .map(|(k, _)| k.as_str())
            .unwrap_or_default()
    }

    pub(crate) fn adjacency_of(&self, index: usize) -> &[(usize, f64)] {
        &self.adjacency[index]
    }
}
