//! The external verification boundary.
//!
//! A produced c-reduction is only reported as a success after an independent
//! check: the reduction is replayed against the graph rebuilt from the
//! original matrix, and the result must be the empty graph. The check lives
//! behind the [`Verifier`] trait so tests can substitute their own
//! implementation.

use std::path::Path;

use log::info;

use crate::graph::{RBGraph, SignedCharacter};
use crate::matrix::read_matrix;
use crate::Result;

/// Validates a c-reduction against the matrix it was computed from.
pub trait Verifier {
    /// True if replaying `reduction` on the matrix in `file` empties the
    /// graph.
    fn verify(&self, file: &Path, reduction: &[SignedCharacter]) -> Result<bool>;
}

/// In-process verifier: rebuilds the red-black graph from the matrix file
/// and replays the reduction on it.
#[derive(Debug, Default)]
pub struct ReplayVerifier;

impl Verifier for ReplayVerifier {
    fn verify(&self, file: &Path, reduction: &[SignedCharacter]) -> Result<bool> {
        let g = read_matrix(file)?;
        let ok = replays_to_empty(&g, reduction);
        info!(
            "Verification of {} signed characters against {}: {}",
            reduction.len(),
            file.display(),
            ok
        );
        Ok(ok)
    }
}

/// Replays `reduction` on a copy of `g` and reports whether the graph ends
/// up empty. A realization that violates its precondition fails the check.
pub fn replays_to_empty(g: &RBGraph, reduction: &[SignedCharacter]) -> bool {
    let mut g = g.clone();
    g.closure();
    for sc in reduction {
        if g.realize(sc).is_err() {
            return false;
        }
    }
    g.is_empty()
}
