//! The Hasse diagram of the species poset of a maximal reducible graph.
//!
//! Species of GM are ordered by inclusion of their character sets; the
//! diagram is the DAG of cover relations of that poset, with species of
//! identical character sets collapsed into a single vertex. Every edge
//! carries the signed characters gained when moving from the smaller to the
//! larger set.
//!
//! The diagram is rebuilt from scratch whenever the underlying red-black
//! graph changes; it is never mutated across recursion levels.

#[cfg(test)]
mod tests;

use std::fmt;

use log::debug;

use crate::graph::{Color, RBGraph, SignedCharacter};

/// A vertex of the Hasse diagram: the species sharing one character set,
/// together with that character set. Both lists are canonically ordered.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HasseVertex {
    pub species: Vec<String>,
    pub characters: Vec<String>,
}

/// An edge of the Hasse diagram, labeled by the signed characters gained
/// along the cover relation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HasseEdge {
    pub source: usize,
    pub target: usize,
    pub labels: Vec<SignedCharacter>,
}

/// The transitively reduced diagram of the species poset of a maximal
/// reducible graph. Vertex indices are insertion order.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HasseDiagram {
    vertices: Vec<HasseVertex>,
    edges: Vec<HasseEdge>,
}

impl HasseDiagram {
    /// Builds the Hasse diagram of the maximal reducible graph `gm`.
    ///
    /// Species are inserted by ascending character-set size, so every strict
    /// predecessor of a species is already present when the species is
    /// inserted; cover candidates beyond the covers themselves are removed
    /// by the final transitive reduction.
    pub fn build(gm: &RBGraph) -> HasseDiagram {
        let mut sets: Vec<(String, Vec<String>)> = gm
            .species()
            .map(|s| {
                let mut characters: Vec<_> = gm.neighbors(s, Color::Black).to_vec();
                characters.sort();
                let names = characters.into_iter().map(|c| gm.name(c).to_string()).collect();
                (gm.name(s).to_string(), names)
            })
            .collect();
        sets.sort_by_key(|(_, characters)| characters.len());

        let mut hasse = HasseDiagram::default();
        for (species, characters) in sets {
            if let Some(existing) = hasse
                .vertices
                .iter_mut()
                .find(|v| v.characters == characters)
            {
                existing.species.push(species);
                continue;
            }
            let target = hasse.vertices.len();
            for (source, vertex) in hasse.vertices.iter().enumerate() {
                if !strictly_included(&vertex.characters, &characters) {
                    continue;
                }
                let labels = characters
                    .iter()
                    .filter(|&c| !vertex.characters.contains(c))
                    .map(SignedCharacter::gain)
                    .collect();
                hasse.edges.push(HasseEdge {
                    source,
                    target,
                    labels,
                });
            }
            hasse.vertices.push(HasseVertex {
                species: vec![species],
                characters,
            });
        }
        hasse.transitive_reduction();
        debug!(
            "Built Hasse diagram with {} vertices and {} edges",
            hasse.num_vertices(),
            hasse.num_edges()
        );
        hasse
    }

    /// Removes every edge `(p, q)` for which a two-step path `p -> u -> q`
    /// exists. The transitive reduction of a DAG is unique, so the removal
    /// order does not matter.
    fn transitive_reduction(&mut self) {
        let mut transitive: Vec<(usize, usize)> = Vec::new();
        for u in 0..self.vertices.len() {
            if self.in_degree(u) == 0 || self.out_degree(u) == 0 {
                continue;
            }
            for p in self.in_neighbors(u) {
                for q in self.out_neighbors(u) {
                    if p != q && self.edge(p, q).is_some() {
                        transitive.push((p, q));
                    }
                }
            }
        }
        self.edges
            .retain(|e| !transitive.contains(&(e.source, e.target)));
    }

    /// Prunes every vertex whose species list contains a species that is
    /// active in `g` (has at least one incident red edge), together with
    /// its incident edges.
    pub fn reduce(&mut self, g: &RBGraph) {
        let keep: Vec<bool> = self
            .vertices
            .iter()
            .map(|v| {
                !v.species.iter().any(|name| {
                    g.find_species(name).is_some_and(|s| g.is_active(s))
                })
            })
            .collect();
        if keep.iter().all(|&k| k) {
            return;
        }
        let mut remap = vec![None; self.vertices.len()];
        let mut vertices = Vec::new();
        for (i, vertex) in self.vertices.drain(..).enumerate() {
            if keep[i] {
                remap[i] = Some(vertices.len());
                vertices.push(vertex);
            }
        }
        let mut edges = Vec::new();
        for edge in self.edges.drain(..) {
            if let (Some(source), Some(target)) = (remap[edge.source], remap[edge.target]) {
                edges.push(HasseEdge {
                    source,
                    target,
                    labels: edge.labels,
                });
            }
        }
        self.vertices = vertices;
        self.edges = edges;
        debug!(
            "Reduced Hasse diagram to {} vertices and {} edges",
            self.num_vertices(),
            self.num_edges()
        );
    }

    /// The vertices with in-degree zero, in insertion order.
    pub fn sources(&self) -> Vec<usize> {
        (0..self.vertices.len())
            .filter(|&v| self.in_degree(v) == 0)
            .collect()
    }

    /// The vertex at index `v`.
    pub fn vertex(&self, v: usize) -> &HasseVertex {
        &self.vertices[v]
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &HasseVertex> {
        self.vertices.iter()
    }

    /// The edge from `p` to `q`, if present.
    pub fn edge(&self, p: usize, q: usize) -> Option<&HasseEdge> {
        self.edges.iter().find(|e| e.source == p && e.target == q)
    }

    /// The outgoing edges of `v`, in insertion order.
    pub fn out_edges(&self, v: usize) -> impl Iterator<Item = &HasseEdge> {
        self.edges.iter().filter(move |e| e.source == v)
    }

    /// The sources of edges into `v`.
    pub fn in_neighbors(&self, v: usize) -> Vec<usize> {
        self.edges
            .iter()
            .filter(|e| e.target == v)
            .map(|e| e.source)
            .collect()
    }

    /// The targets of edges out of `v`.
    pub fn out_neighbors(&self, v: usize) -> Vec<usize> {
        self.edges
            .iter()
            .filter(|e| e.source == v)
            .map(|e| e.target)
            .collect()
    }

    /// The number of edges into `v`.
    pub fn in_degree(&self, v: usize) -> usize {
        self.edges.iter().filter(|e| e.target == v).count()
    }

    /// The number of edges out of `v`.
    pub fn out_degree(&self, v: usize) -> usize {
        self.edges.iter().filter(|e| e.source == v).count()
    }

    /// The number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// True if the diagram has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// True if `a` is a strict subset of `b`.
fn strictly_included(a: &[String], b: &[String]) -> bool {
    a.len() < b.len() && a.iter().all(|x| b.contains(x))
}

impl fmt::Display for HasseDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use itertools::Itertools;

        for (i, vertex) in self.vertices.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "[ {} ( {} ) ]:",
                vertex.species.iter().join(" "),
                vertex.characters.iter().join(" ")
            )?;
            for edge in self.out_edges(i) {
                let target = &self.vertices[edge.target];
                write!(
                    f,
                    " -{}-> [ {} ( {} ) ];",
                    edge.labels.iter().join(","),
                    target.species.iter().join(" "),
                    target.characters.iter().join(" ")
                )?;
            }
        }
        Ok(())
    }
}
