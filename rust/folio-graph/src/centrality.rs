//! Centrality metrics over the interaction graph.
//!
//! Degree, betweenness (Brandes), and eigenvector (power iteration)
//! centrality. All functions return scores aligned with the graph's node
//! insertion order; all scores lie in `[0, 1]`. Graphs too small for a
//! metric to be meaningful produce zeros, never errors — the only failure
//! mode is eigenvector non-convergence, which is a typed error.

use tracing::debug;

use crate::error::GraphError;
use crate::graph::InteractionGraph;

/// Tuning for eigenvector power iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerIterationConfig {
    /// Iteration cap before giving up.
    pub max_iterations: usize,
    /// Per-node convergence tolerance; iteration stops when the L1 norm
    /// of the score delta falls below `tolerance * N`.
    pub tolerance: f64,
}

impl Default for PowerIterationConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tolerance: 1e-6,
        }
    }
}

/// Normalized degree centrality: `degree / (N - 1)`.
///
/// All zeros when the graph has fewer than two nodes.
pub fn degree_centrality(graph: &InteractionGraph) -> Vec<f64> {
    let n = graph.node_count();
    if n < 2 {
        return vec![0.0; n];
    }
    let scale = 1.0 / (n - 1) as f64;
    (0..n)
        .map(|i| graph.adjacency_of(i).len() as f64 * scale)
        .collect()
}

/// Normalized shortest-path betweenness centrality via Brandes'
/// algorithm over unweighted paths.
///
/// Accumulation runs from every source, counting each unordered pair in
/// both directions; normalization by `1/((N-1)(N-2))` maps the result
/// into `[0, 1]`. All zeros when the graph has fewer than three nodes.
pub fn betweenness_centrality(graph: &InteractionGraph) -> Vec<f64> {
    let n = graph.node_count();
    let mut bc = vec![0.0_f64; n];
    if n < 3 {
        return bc;
    }

    for s in 0..n {
        // BFS from the source, counting shortest paths.
        let mut stack: Vec<usize> = Vec::new();
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut sigma = vec![0.0_f64; n];
        let mut dist = vec![-1_i64; n];
        let mut delta = vec![0.0_f64; n];

        sigma[s] = 1.0;
        dist[s] = 0;

        let mut queue = std::collections::VecDeque::new();
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            stack.push(v);
            for &(w, _) in graph.adjacency_of(v) {
                if dist[w] < 0 {
                    queue.push_back(w);
                    dist[w] = dist[v] + 1;
                }
                if dist[w] == dist[v] + 1 {
                    sigma[w] += sigma[v];
                    predecessors[w].push(v);
                }
            }
        }

        // Back-propagate pair dependencies.
        while let Some(w) = stack.pop() {
            for &v in &predecessors[w] {
                delta[v] += (sigma[v] / sigma[w]) * (1.0 + delta[w]);
            }
            if w != s {
                bc[w] += delta[w];
            }
        }
    }

    let scale = 1.0 / ((n - 1) as f64 * (n - 2) as f64);
    for b in bc.iter_mut() {
        *b *= scale;
    }
    bc
}

/// Eigenvector centrality via power iteration on `I + A`, L2-normalized.
///
/// Convergence is the L1 norm of the score delta falling below
/// `tolerance * N`. Nodes without incident edges are pinned to zero —
/// they carry no eigenvector signal. Failing to converge within the cap
/// is reported as [`GraphError::EigenvectorDidNotConverge`] rather than
/// returning a half-settled estimate.
pub fn eigenvector_centrality(
    graph: &InteractionGraph,
    config: &PowerIterationConfig,
) -> Result<Vec<f64>, GraphError> {
    let n = graph.node_count();
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut scores = vec![1.0 / n as f64; n];

    for iteration in 0..config.max_iterations {
        let last = scores.clone();

        for u in 0..n {
            for &(v, _) in graph.adjacency_of(u) {
                scores[v] += last[u];
            }
        }

        let norm = scores.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > 0.0 {
            for s in scores.iter_mut() {
                *s /= norm;
            }
        }

        let diff: f64 = scores
            .iter()
            .zip(last.iter())
            .map(|(a, b)| (a - b).abs())
            .sum();
        if diff < config.tolerance * n as f64 {
            debug!(iterations = iteration + 1, "eigenvector converged");
            for (i, s) in scores.iter_mut().enumerate() {
                if graph.adjacency_of(i).is_empty() {
                    *s = 0.0;
                }
            }
            return Ok(scores);
        }
    }

    Err(GraphError::EigenvectorDidNotConverge {
        iterations: config.max_iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weights::PairWeights;
    use pretty_assertions::assert_eq;

    fn graph_of(edges: &[(&str, &str)]) -> InteractionGraph {
        let mut weights = PairWeights::new();
        for &(a, b) in edges {
            weights.insert((a.to_owned(), b.to_owned()), 1.0);
        }
        InteractionGraph::from_weights(&weights)
    }

    fn by_label<'a>(graph: &'a InteractionGraph, scores: &'a [f64], label: &str) -> f64 {
        let idx = graph.nodes().position(|l| l == label).unwrap();
        scores[idx]
    }

    #[test]
    fn degree_of_a_path_graph() {
        let graph = graph_of(&[("A", "B"), ("B", "C")]);
        let deg = degree_centrality(&graph);
        assert_eq!(by_label(&graph, &deg, "B"), 1.0);
        assert_eq!(by_label(&graph, &deg, "A"), 0.5);
    }

    #[test]
    fn tiny_graphs_have_zero_centrality() {
        let graph = graph_of(&[("A", "B")]);
        assert_eq!(betweenness_centrality(&graph), vec![0.0, 0.0]);
        assert_eq!(degree_centrality(&graph_of(&[])), Vec::<f64>::new());
    }

    #[test]
    fn betweenness_of_a_star_center_is_one() {
        let graph = graph_of(&[("HUB", "A"), ("HUB", "B"), ("HUB", "C")]);
        let bc = betweenness_centrality(&graph);
        assert_eq!(by_label(&graph, &bc, "HUB"), 1.0);
        assert_eq!(by_label(&graph, &bc, "A"), 0.0);
    }

    #[test]
    fn betweenness_of_a_path_midpoint() {
        let graph = graph_of(&[("A", "B"), ("B", "C")]);
        // With n = 3 the midpoint lies on the single A↔C pair both ways:
        // 2 * 1/((n-1)(n-2)) = 1.0.
        let bc = betweenness_centrality(&graph);
        assert_eq!(by_label(&graph, &bc, "B"), 1.0);
    }

    #[test]
    fn eigenvector_is_uniform_on_a_symmetric_triangle() {
        let graph = graph_of(&[("A", "B"), ("B", "C"), ("A", "C")]);
        let eig = eigenvector_centrality(&graph, &PowerIterationConfig::default()).unwrap();
        let expected = 1.0 / 3.0_f64.sqrt();
        for value in eig {
            assert!((value - expected).abs() < 1e-4);
        }
    }

    #[test]
    fn eigenvector_favors_the_hub() {
        let graph = graph_of(&[("HUB", "A"), ("HUB", "B"), ("HUB", "C")]);
        let eig = eigenvector_centrality(&graph, &PowerIterationConfig::default()).unwrap();
        let hub = by_label(&graph, &eig, "HUB");
        let leaf = by_label(&graph, &eig, "A");
        assert!(hub > leaf);
        assert!(hub <= 1.0);
    }

    #[test]
    fn isolated_nodes_score_zero() {
        let mut weights = PairWeights::new();
        weights.insert(("A".to_owned(), "B".to_owned()), 1.0);
        let graph = InteractionGraph::with_roster(&weights, [("LONER", "says nothing")]);
        let eig = eigenvector_centrality(&graph, &PowerIterationConfig::default()).unwrap();
        assert_eq!(by_label(&graph, &eig, "LONER"), 0.0);
        let deg = degree_centrality(&graph);
        assert_eq!(by_label(&graph, &deg, "LONER"), 0.0);
    }

    #[test]
    fn exhausted_iteration_cap_is_a_typed_error() {
        let graph = graph_of(&[("A", "B"), ("B", "C"), ("A", "C")]);
        let config = PowerIterationConfig {
            max_iterations: 1,
            tolerance: 1e-12,
        };
        assert_eq!(
            eigenvector_centrality(&graph, &config),
            Err(GraphError::EigenvectorDidNotConverge { iterations: 1 })
        );
    }

    #[test]
    fn empty_graph_converges_trivially() {
        let graph = InteractionGraph::from_weights(&PairWeights::new());
        let eig = eigenvector_centrality(&graph, &PowerIterationConfig::default()).unwrap();
        assert!(eig.is_empty());
    }

    #[test]
    fn all_scores_stay_in_unit_range() {
        let graph = graph_of(&[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A"), ("A", "C")]);
        for score in degree_centrality(&graph)
            .into_iter()
            .chain(betweenness_centrality(&graph))
            .chain(eigenvector_centrality(&graph, &PowerIterationConfig::default()).unwrap())
        {
            assert!((0.0..=1.0).contains(&score), "score {score} out of range");
        }
    }
}
