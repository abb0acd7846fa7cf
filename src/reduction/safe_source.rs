//! Safe sources and safe chains of the reduced Hasse diagram.
//!
//! A source is safe when realizing its signed characters leaves the graph
//! reducible: every resulting component still admits a universal character,
//! a free species, or a reduced Hasse diagram with something left to
//! realize. The check is performed on a throwaway clone of the graph.

use itertools::Itertools;
use log::debug;

use crate::graph::{
    connected_components, maximal_reducible_graph, Color, RBGraph, SignedCharacter,
};
use crate::hasse::HasseDiagram;

/// A safe source (or chain) of the Hasse diagram, ready for realization.
#[derive(Debug, Clone)]
pub struct SourceCandidate {
    /// The signed characters to realize, in label order.
    pub labels: Vec<SignedCharacter>,
    /// The species names of the originating vertex, for display.
    pub species: Vec<String>,
    /// The character names of the originating vertex, for display.
    pub characters: Vec<String>,
}

impl SourceCandidate {
    /// Renders the candidate by display names, the way the diagram prints
    /// its vertices.
    pub fn render(&self) -> String {
        format!(
            "{} ( {} )",
            self.species.iter().join(" "),
            self.characters.iter().join(" ")
        )
    }
}

/// The safe sources of `hasse` with respect to `g`, in diagram insertion
/// order.
pub fn safe_sources(hasse: &HasseDiagram, g: &RBGraph) -> Vec<SourceCandidate> {
    hasse
        .sources()
        .into_iter()
        .filter_map(|source| {
            let vertex = hasse.vertex(source);
            let labels: Vec<SignedCharacter> = vertex
                .characters
                .iter()
                .map(SignedCharacter::gain)
                .collect();
            is_safe(g, &labels).then(|| SourceCandidate {
                labels,
                species: vertex.species.clone(),
                characters: vertex.characters.clone(),
            })
        })
        .collect()
}

/// The safe chains of `hasse` with respect to `g`: each source extended
/// along its unique out-edges until the path branches or ends. Chains that
/// do not extend past their source are skipped; they were already rejected
/// as sources.
pub fn safe_chains(hasse: &HasseDiagram, g: &RBGraph) -> Vec<SourceCandidate> {
    hasse
        .sources()
        .into_iter()
        .filter_map(|source| {
            let vertex = hasse.vertex(source);
            let mut labels: Vec<SignedCharacter> = vertex
                .characters
                .iter()
                .map(SignedCharacter::gain)
                .collect();
            let mut current = source;
            let mut extended = false;
            while hasse.out_degree(current) == 1 {
                let Some(edge) = hasse.out_edges(current).next() else {
                    break;
                };
                labels.extend(edge.labels.iter().cloned());
                current = edge.target;
                extended = true;
            }
            if !extended {
                return None;
            }
            is_safe(g, &labels).then(|| SourceCandidate {
                labels,
                species: vertex.species.clone(),
                characters: vertex.characters.clone(),
            })
        })
        .collect()
}

/// True if realizing `labels` on a clone of `g` leaves every component
/// reducible.
fn is_safe(g: &RBGraph, labels: &[SignedCharacter]) -> bool {
    if labels.is_empty() {
        // Nothing to realize, no progress possible.
        return false;
    }
    let mut probe = g.clone();
    for sc in labels {
        if probe.realize(sc).is_err() {
            debug!("Candidate rejected: {} is inconsistent", sc);
            return false;
        }
    }
    for component in connected_components(&probe) {
        if component.is_empty() {
            continue;
        }
        if component.num_species() == 0 {
            // A dead end: characters that can never be discharged.
            return false;
        }
        if component.characters().any(|c| component.is_universal(c)) {
            continue;
        }
        if component
            .species()
            .any(|s| component.is_free(s) && !component.neighbors(s, Color::Red).is_empty())
        {
            continue;
        }
        let gm = maximal_reducible_graph(&component);
        let mut hasse = HasseDiagram::build(&gm);
        hasse.reduce(&component);
        if hasse.vertices().all(|v| v.characters.is_empty()) {
            return false;
        }
    }
    true
}
