//! Computes a *c-reduction* of a binary character matrix expressed as a
//! red-black graph.
//!
//! A red-black graph is a bipartite graph whose two vertex classes are
//! **species** and **characters**, with edges colored **black** (character
//! present in a species) or **red** (character already processed, marking a
//! conflict). A c-reduction is a sequence of signed characters (`c+` gains,
//! `c-` losses) whose sequential realization empties the graph; such a
//! sequence witnesses that the input matrix admits a perfect phylogeny under
//! a specific realization order.
//!
//! The crate is organized around the reduction pipeline:
//!
//! - [`graph`]: the red-black graph engine (storage, predicates, realization,
//!   closure, component decomposition, maximal-character filtering),
//! - [`hasse`]: the Hasse diagram of the species poset of a maximal reducible
//!   graph, with transitive reduction and active-species pruning,
//! - [`reduction`]: the recursive reduction driver with its standard,
//!   exponential and interactive strategies,
//! - [`matrix`]: parsing of the textual matrix input format,
//! - [`verify`]: the external verification boundary, replaying a reduction
//!   against the original matrix.

pub mod graph;
pub mod hasse;
pub mod matrix;
pub mod reduction;
pub mod verify;

#[cfg(test)]
mod test_utils;

mod error {
    use thiserror::Error;

    /// Errors reported by the reduction pipeline.
    #[derive(Error, Debug)]
    pub enum ReductionError {
        /// The input file could not be read.
        #[error("{0}")]
        Io(#[from] std::io::Error),

        /// The input file is not a well-formed matrix.
        #[error("parse error: {0}")]
        Parse(String),

        /// The algorithm exhausted all choices without finding a reduction.
        #[error("no consistent c-reduction exists")]
        NoReduction,

        /// A realization violated its precondition. Used for branch pruning
        /// in exponential mode, fatal elsewhere.
        #[error("inconsistent move: {0}")]
        InconsistentMove(String),

        /// Structural misuse of the graph API (non-bipartite or duplicate
        /// edge).
        #[error("invalid edge: {0}")]
        InvalidEdge(String),
    }

    /// Result type for reduction operations.
    pub type Result<T> = std::result::Result<T, ReductionError>;
}

pub use error::{ReductionError, Result};

use graph::RBGraph;

/// A utility method for printing useful metadata of a red-black graph.
fn log_graph(g: &RBGraph) -> String {
    format!(
        "species={}; characters={}; edges={}",
        g.num_species(),
        g.num_characters(),
        g.num_edges()
    )
}
