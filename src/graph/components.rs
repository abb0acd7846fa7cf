//! Connected-component decomposition.
//!
//! The reduction proceeds component by component. Components are connected
//! over both edge colors: a red edge keeps an active character attached to
//! every species it conflicts with, so a conflict can never be separated
//! from the species that still have to discharge it. Black-only
//! connectivity is still needed by the universality predicate and is
//! provided by [`RBGraph::black_component`].

use std::collections::VecDeque;

use log::debug;

use super::{Color, RBGraph, VertexId, VertexKind};

impl RBGraph {
    fn bfs(&self, start: VertexId, follow_red: bool) -> Vec<VertexId> {
        let mut visited = vec![false; self.vertices.len()];
        let mut queue = VecDeque::new();
        visited[start.0] = true;
        queue.push_back(start);
        while let Some(v) = queue.pop_front() {
            let mut visit = |w: VertexId, queue: &mut VecDeque<VertexId>| {
                if !visited[w.0] {
                    visited[w.0] = true;
                    queue.push_back(w);
                }
            };
            for &w in self.neighbors(v, Color::Black) {
                visit(w, &mut queue);
            }
            if follow_red {
                for &w in self.neighbors(v, Color::Red) {
                    visit(w, &mut queue);
                }
            }
        }
        (0..self.vertices.len())
            .filter(|&i| visited[i])
            .map(VertexId)
            .collect()
    }

    /// The vertices of the connected component containing `v`, following
    /// edges of both colors. Returned in insertion order.
    pub fn connected_component(&self, v: VertexId) -> Vec<VertexId> {
        self.bfs(v, true)
    }

    /// The vertices of the black-connected component containing `v`,
    /// ignoring red edges. Returned in insertion order.
    pub fn black_component(&self, v: VertexId) -> Vec<VertexId> {
        self.bfs(v, false)
    }

    /// Extracts the subgraph induced by `members` as a fresh graph, keeping
    /// relative insertion order and all edges with both endpoints retained.
    fn subgraph(&self, members: &[VertexId]) -> RBGraph {
        let mut inside = vec![false; self.vertices.len()];
        for &v in members {
            inside[v.0] = true;
        }
        let mut sub = RBGraph::new();
        let mut remap = vec![None; self.vertices.len()];
        for &v in members {
            let new_id = match self.kind(v) {
                VertexKind::Species => sub.add_species(self.name(v)),
                VertexKind::Character => sub.add_character(self.name(v)),
            };
            remap[v.0] = Some(new_id);
        }
        for &v in members {
            if !self.is_species(v) {
                continue;
            }
            for color in [Color::Black, Color::Red] {
                for &c in self.neighbors(v, color) {
                    if !inside[c.0] {
                        continue;
                    }
                    if let (Some(new_s), Some(new_c)) = (remap[v.0], remap[c.0]) {
                        sub.push_edge(new_s, new_c, color);
                    }
                }
            }
        }
        sub
    }
}

/// Decomposes `g` into its connected components, each materialized as an
/// independent graph, in discovery order.
pub fn connected_components(g: &RBGraph) -> Vec<RBGraph> {
    let mut assigned = vec![false; g.vertices.len()];
    let mut components: Vec<Vec<VertexId>> = Vec::new();
    for v in g.vertices() {
        if assigned[v.0] {
            continue;
        }
        let members = g.connected_component(v);
        for &m in &members {
            assigned[m.0] = true;
        }
        components.push(members);
    }
    debug!("Decomposed into {} components", components.len());
    components
        .iter()
        .map(|members| g.subgraph(members))
        .collect()
}
