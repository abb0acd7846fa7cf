//! The reduction driver.
//!
//! Given a red-black graph, the driver produces an ordered list of signed
//! characters whose sequential realization empties the graph, or reports
//! that no such c-reduction exists.
//!
//! At every step the driver prefers forced moves: a universal character is
//! gained, the red characters of a free species are lost. When no move is
//! forced, it builds the maximal reducible subgraph, its reduced Hasse
//! diagram, and realizes a safe source (or, failing that, a safe chain).
//! The [`Strategy`] decides how a safe source is chosen: first one, all of
//! them depth-first, or through an external selector.

mod reduction_config;
mod safe_source;

#[cfg(test)]
mod tests;

pub use reduction_config::{ReductionConfig, SourceSelector, Strategy};
pub use safe_source::{safe_chains, safe_sources, SourceCandidate};

use log::{debug, info};

use crate::graph::{
    connected_components, maximal_reducible_graph, Color, RBGraph, SignedCharacter, VertexId,
};
use crate::hasse::HasseDiagram;
use crate::{log_graph, ReductionError, Result};

/// Reduces `g` to the empty graph, returning the witnessing sequence of
/// signed characters, or [`ReductionError::NoReduction`] if none exists.
pub fn reduce(g: &RBGraph, config: &ReductionConfig) -> Result<Vec<SignedCharacter>> {
    let mut g = g.clone();
    g.closure();
    info!("Start reduction ({})", log_graph(&g));
    reduce_graph(g, config)
}

fn reduce_graph(mut g: RBGraph, config: &ReductionConfig) -> Result<Vec<SignedCharacter>> {
    let mut output = Vec::new();
    loop {
        if g.is_empty() {
            return Ok(output);
        }

        let mut components = connected_components(&g);
        if components.len() > 1 {
            info!("Graph splits into {} components", components.len());
            for component in components {
                output.extend(reduce_graph(component, config)?);
            }
            return Ok(output);
        }
        let Some(component) = components.pop() else {
            return Ok(output);
        };
        g = component;
        debug!("Reducing component:\n{}", g);

        // Forced move: a universal character is gained.
        let universal = g.characters().find(|&c| g.is_universal(c));
        if let Some(c) = universal {
            let sc = SignedCharacter::gain(g.name(c));
            info!("Realizing universal character {}", sc);
            g.realize(&sc)?;
            output.push(sc);
            continue;
        }

        // Forced move: the red characters of a free species are lost. A free
        // species without red edges offers nothing to realize, so it cannot
        // drive a move.
        let free_with_red = g
            .species()
            .find(|&s| g.is_free(s) && !g.neighbors(s, Color::Red).is_empty());
        if let Some(s) = free_with_red {
            let mut red: Vec<VertexId> = g.neighbors(s, Color::Red).to_vec();
            red.sort();
            let names: Vec<String> = red.iter().map(|&c| g.name(c).to_string()).collect();
            info!("Realizing red characters of free species {}", g.name(s));
            for name in names {
                if g.find_character(&name).is_none() {
                    // Collapsed by the closure of an earlier lose.
                    continue;
                }
                let sc = SignedCharacter::lose(name);
                g.realize(&sc)?;
                output.push(sc);
            }
            continue;
        }

        // No forced move: consult the reduced Hasse diagram.
        let gm = maximal_reducible_graph(&g);
        let mut hasse = HasseDiagram::build(&gm);
        hasse.reduce(&g);
        debug!("Reduced Hasse diagram:\n{}", hasse);

        let mut candidates = safe_sources(&hasse, &g);
        if candidates.is_empty() {
            debug!("No safe source, looking for safe chains");
            candidates = safe_chains(&hasse, &g);
        }
        if candidates.is_empty() {
            info!("No safe source or chain ({})", log_graph(&g));
            return Err(ReductionError::NoReduction);
        }

        match &config.strategy {
            Strategy::Standard => {
                let candidate = &candidates[0];
                info!("Realizing safe source [ {} ]", candidate.render());
                apply_candidate(&mut g, candidate, &mut output)?;
            }
            Strategy::Exponential => {
                info!("Branching over {} safe sources", candidates.len());
                for candidate in &candidates {
                    let mut branch = g.clone();
                    let mut branch_output = Vec::new();
                    if apply_candidate(&mut branch, candidate, &mut branch_output).is_err() {
                        continue;
                    }
                    match reduce_graph(branch, config) {
                        Ok(rest) => {
                            output.extend(branch_output);
                            output.extend(rest);
                            return Ok(output);
                        }
                        Err(ReductionError::NoReduction)
                        | Err(ReductionError::InconsistentMove(_)) => {
                            debug!("Branch [ {} ] failed, backtracking", candidate.render());
                        }
                        Err(e) => return Err(e),
                    }
                }
                return Err(ReductionError::NoReduction);
            }
            Strategy::Interactive(selector) => {
                let rendered: Vec<String> =
                    candidates.iter().map(SourceCandidate::render).collect();
                let choice = selector(&rendered);
                let candidate = candidates.get(choice).ok_or_else(|| {
                    ReductionError::InconsistentMove(format!(
                        "selected source {} out of {} candidates",
                        choice,
                        candidates.len()
                    ))
                })?;
                info!("Realizing selected safe source [ {} ]", candidate.render());
                apply_candidate(&mut g, candidate, &mut output)?;
            }
        }
    }
}

fn apply_candidate(
    g: &mut RBGraph,
    candidate: &SourceCandidate,
    output: &mut Vec<SignedCharacter>,
) -> Result<()> {
    for sc in &candidate.labels {
        g.realize(sc)?;
        output.push(sc.clone());
    }
    Ok(())
}
