//! Proximity-decayed interaction weights.
//!
//! For each scene's speaking order `S`, every ordered index pair `(i, j)`
//! with `i ≠ j` and `|i-j| ≤ window` contributes `1/|i-j|` to the
//! lexicographically sorted speaker pair. Both scan directions qualify, so
//! a single adjacent exchange contributes twice (once as `(i, j)`, once as
//! `(j, i)`) — the accumulated weight is roughly double a one-directional
//! scan's, and downstream consumers rely on that scale.
//!
//! A speaker appearing twice within the window accumulates under the
//! degenerate `(c, c)` key; the graph layer drops those when building
//! edges (no self-loops).

use std::collections::BTreeMap;

use tracing::debug;

use folio_text::SceneSequence;

/// Accumulated weight per canonical (lexicographically sorted) pair.
pub type PairWeights = BTreeMap<(String, String), f64>;

/// Tuning for weight accumulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightConfig {
    /// How many turns before and after a turn count as interaction.
    pub window: usize,
}

impl Default for WeightConfig {
    fn default() -> Self {
        WeightConfig { window: 2 }
    }
}

/// Accumulate interaction weights over every scene's speaking order.
///
/// Weights are monotonically non-decreasing in the input: more scenes can
/// only add weight. The result is deterministic — `BTreeMap` orders pairs
/// lexicographically.
///
/// ```
/// use folio_graph::{WeightConfig, interaction_weights};
///
/// let scene = vec!["A".to_string(), "B".into(), "A".into()];
/// let weights = interaction_weights(&[scene], &WeightConfig::default());
/// // Four qualifying ordered index pairs at distance 1.
/// assert_eq!(weights[&("A".to_string(), "B".to_string())], 4.0);
/// ```
pub fn interaction_weights(sequences: &[SceneSequence], config: &WeightConfig) -> PairWeights {
    let mut weights = PairWeights::new();

    for scene in sequences {
        let n = scene.len();
        for i in 0..n {
            let lo = i.saturating_sub(config.window);
            let hi = (i + config.window + 1).min(n);
            for j in lo..hi {
                if i == j {
                    continue;
                }
                let distance = i.abs_diff(j) as f64;
                let (a, b) = canonical(&scene[i], &scene[j]);
                *weights.entry((a, b)).or_insert(0.0) += 1.0 / distance;
            }
        }
    }

    debug!(pairs = weights.len(), "accumulated interaction weights");

    weights
}

fn canonical(x: &str, y: &str) -> (String, String) {
    if x <= y {
        (x.to_owned(), y.to_owned())
    } else {
        (y.to_owned(), x.to_owned())
    }
}
