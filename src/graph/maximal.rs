//! The maximal-character filter.

use log::debug;

use super::{Color, RBGraph, VertexId};

/// Builds the maximal reducible subgraph GM of a component.
///
/// GM keeps every species of `g` (isolated ones included) but only the
/// characters that are inactive and maximal, i.e. whose species set is not
/// strictly contained in another character's. Characters with identical
/// species sets collapse to the first one in insertion order.
pub fn maximal_reducible_graph(g: &RBGraph) -> RBGraph {
    let mut kept: Vec<VertexId> = Vec::new();
    for c in g.characters() {
        if g.is_active(c) || !g.is_maximal(c) {
            continue;
        }
        if kept
            .iter()
            .any(|&k| g.includes(k, c) && g.includes(c, k))
        {
            // Same species set as an already retained character.
            continue;
        }
        kept.push(c);
    }
    debug!(
        "Maximal reducible subgraph keeps {} of {} characters",
        kept.len(),
        g.num_characters()
    );

    let mut gm = RBGraph::new();
    let mut remap = vec![None; g.vertices.len()];
    for v in g.vertices() {
        if g.is_species(v) {
            remap[v.0] = Some(gm.add_species(g.name(v)));
        } else if kept.contains(&v) {
            remap[v.0] = Some(gm.add_character(g.name(v)));
        }
    }
    for s in g.species() {
        for &c in g.neighbors(s, Color::Black) {
            if let (Some(new_s), Some(new_c)) = (remap[s.0], remap[c.0]) {
                gm.push_edge(new_s, new_c, Color::Black);
            }
        }
    }
    gm
}
