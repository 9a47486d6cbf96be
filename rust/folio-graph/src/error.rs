//! Error types for graph computations.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Power iteration did not meet the convergence tolerance within the
    /// configured iteration cap. Callers that prefer a best-effort answer
    /// can treat this as "no eigenvector signal" and fall back to zeros.
    #[error("eigenvector centrality did not converge within {iterations} iterations")]
    EigenvectorDidNotConverge { iterations: usize },
}
