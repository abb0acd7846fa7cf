//! The red-black graph engine.
//!
//! A red-black graph is a bipartite graph over species and characters whose
//! edges carry one of two colors:
//!
//! - **black**: the character is present in the species,
//! - **red**: the character has been realized and now marks a conflict with
//!   the species.
//!
//! The graph is stored as a slot vector of vertex records; each record keeps
//! its adjacency as two neighbor lists keyed by edge color. Vertex insertion
//! order doubles as the canonical vertex order wherever deterministic
//! iteration matters (component discovery, forced-move selection, Hasse
//! labels).
//!
//! Submodules contribute the structural predicates, the realization and
//! closure mutators, the component decomposition and the maximal-character
//! filter.

mod components;
mod maximal;
mod predicates;
mod realize;


pub use components::connected_components;
pub use maximal::maximal_reducible_graph;

use std::fmt;

use crate::{ReductionError, Result};

/// The class of a red-black graph vertex.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VertexKind {
    Species,
    Character,
}

/// The color of a red-black graph edge.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Black,
    Red,
}

/// A stable handle for a vertex of one [`RBGraph`].
///
/// Ids are insertion indices and are never reused, so they stay valid across
/// removals of other vertices. An id is only meaningful for the graph that
/// produced it (clones included).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexId(usize);

/// The state paired with a character name in a [`SignedCharacter`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacterState {
    /// The paired character is gained (`c+`).
    Gain,
    /// The paired character is lost (`c-`).
    Lose,
}

/// A signed character: a character name paired with a gain or lose state.
///
/// The c-reduction produced by the driver is an ordered list of signed
/// characters; at most one `c-` appears for any given character.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignedCharacter {
    pub character: String,
    pub state: CharacterState,
}

impl SignedCharacter {
    /// `c+` for the given character name.
    pub fn gain(character: impl Into<String>) -> SignedCharacter {
        SignedCharacter {
            character: character.into(),
            state: CharacterState::Gain,
        }
    }

    /// `c-` for the given character name.
    pub fn lose(character: impl Into<String>) -> SignedCharacter {
        SignedCharacter {
            character: character.into(),
            state: CharacterState::Lose,
        }
    }
}

impl fmt::Display for SignedCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.state {
            CharacterState::Gain => '+',
            CharacterState::Lose => '-',
        };
        write!(f, "{}{}", self.character, sign)
    }
}

/// A vertex record: identity lives in the slot index, the record carries the
/// display name, the kind, and the two adjacency lists keyed by edge color.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Vertex {
    name: String,
    kind: VertexKind,
    black: Vec<VertexId>,
    red: Vec<VertexId>,
}

/// A red-black graph over species and characters.
///
/// Mutated in place by the reduction driver; each recursive branch works on
/// its own clone (graphs are small, deep copies are cheap).
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RBGraph {
    vertices: Vec<Option<Vertex>>,
}

impl RBGraph {
    /// Creates an empty red-black graph.
    pub fn new() -> RBGraph {
        RBGraph::default()
    }

    fn add_vertex(&mut self, name: String, kind: VertexKind) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Some(Vertex {
            name,
            kind,
            black: Vec::new(),
            red: Vec::new(),
        }));
        id
    }

    /// Adds a species vertex with the given display name.
    pub fn add_species(&mut self, name: impl Into<String>) -> VertexId {
        self.add_vertex(name.into(), VertexKind::Species)
    }

    /// Adds a character vertex with the given display name.
    pub fn add_character(&mut self, name: impl Into<String>) -> VertexId {
        self.add_vertex(name.into(), VertexKind::Character)
    }

    fn record(&self, v: VertexId) -> &Vertex {
        match self.vertices.get(v.0) {
            Some(Some(record)) => record,
            _ => panic!("stale or foreign vertex id {:?}", v),
        }
    }

    fn record_mut(&mut self, v: VertexId) -> &mut Vertex {
        match self.vertices.get_mut(v.0) {
            Some(Some(record)) => record,
            _ => panic!("stale or foreign vertex id {:?}", v),
        }
    }

    /// True if `v` refers to a live vertex of this graph.
    pub fn contains(&self, v: VertexId) -> bool {
        matches!(self.vertices.get(v.0), Some(Some(_)))
    }

    /// The display name of `v`.
    pub fn name(&self, v: VertexId) -> &str {
        &self.record(v).name
    }

    /// The kind of `v`.
    pub fn kind(&self, v: VertexId) -> VertexKind {
        self.record(v).kind
    }

    /// Adds an edge of the given color between a species and a character.
    ///
    /// The edge may be given in either orientation. Fails if the endpoints
    /// are of the same kind or if any edge between them already exists.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, color: Color) -> Result<()> {
        if self.kind(u) == self.kind(v) {
            return Err(ReductionError::InvalidEdge(format!(
                "edge ({}, {}) does not connect a species to a character",
                self.name(u),
                self.name(v)
            )));
        }
        if self.edge_color(u, v).is_some() {
            return Err(ReductionError::InvalidEdge(format!(
                "edge ({}, {}) already exists",
                self.name(u),
                self.name(v)
            )));
        }
        self.push_edge(u, v, color);
        Ok(())
    }

    /// Inserts the edge without validation. Only for edges already known to
    /// be well-formed (component extraction, realization toggles).
    pub(crate) fn push_edge(&mut self, u: VertexId, v: VertexId, color: Color) {
        match color {
            Color::Black => {
                self.record_mut(u).black.push(v);
                self.record_mut(v).black.push(u);
            }
            Color::Red => {
                self.record_mut(u).red.push(v);
                self.record_mut(v).red.push(u);
            }
        }
    }

    /// Removes the edge between `u` and `v`, whatever its color. Removing a
    /// missing edge is a no-op.
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) {
        self.record_mut(u).black.retain(|&w| w != v);
        self.record_mut(u).red.retain(|&w| w != v);
        self.record_mut(v).black.retain(|&w| w != u);
        self.record_mut(v).red.retain(|&w| w != u);
    }

    /// Removes `v` together with all its incident edges.
    pub fn remove_vertex(&mut self, v: VertexId) {
        let neighbors: Vec<VertexId> = self.all_neighbors(v).collect();
        for w in neighbors {
            let record = self.record_mut(w);
            record.black.retain(|&x| x != v);
            record.red.retain(|&x| x != v);
        }
        self.vertices[v.0] = None;
    }

    /// All live vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|_| VertexId(i)))
    }

    /// All live species in insertion order.
    pub fn species(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices()
            .filter(move |&v| self.kind(v) == VertexKind::Species)
    }

    /// All live characters in insertion order.
    pub fn characters(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices()
            .filter(move |&v| self.kind(v) == VertexKind::Character)
    }

    /// The neighbors of `v` reached through edges of the given color, in
    /// edge insertion order.
    pub fn neighbors(&self, v: VertexId, color: Color) -> &[VertexId] {
        let record = self.record(v);
        match color {
            Color::Black => &record.black,
            Color::Red => &record.red,
        }
    }

    /// The neighbors of `v` over both edge colors, black first.
    pub fn all_neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        let record = self.record(v);
        record.black.iter().chain(record.red.iter()).copied()
    }

    /// The number of edges incident to `v`, regardless of color.
    pub fn degree(&self, v: VertexId) -> usize {
        let record = self.record(v);
        record.black.len() + record.red.len()
    }

    /// The color of the edge between `u` and `v`, if one exists.
    pub fn edge_color(&self, u: VertexId, v: VertexId) -> Option<Color> {
        let record = self.record(u);
        if record.black.contains(&v) {
            Some(Color::Black)
        } else if record.red.contains(&v) {
            Some(Color::Red)
        } else {
            None
        }
    }

    /// True if any edge connects `u` and `v`.
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.edge_color(u, v).is_some()
    }

    /// All edges as `(species, character, color)` triples, ordered by the
    /// species' insertion order.
    pub fn edges(&self) -> Vec<(VertexId, VertexId, Color)> {
        let mut edges = Vec::new();
        for s in self.species() {
            for &c in self.neighbors(s, Color::Black) {
                edges.push((s, c, Color::Black));
            }
            for &c in self.neighbors(s, Color::Red) {
                edges.push((s, c, Color::Red));
            }
        }
        edges
    }

    /// The number of live species.
    pub fn num_species(&self) -> usize {
        self.species().count()
    }

    /// The number of live characters.
    pub fn num_characters(&self) -> usize {
        self.characters().count()
    }

    /// The number of live vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices().count()
    }

    /// The number of edges, regardless of color.
    pub fn num_edges(&self) -> usize {
        // Each edge is stored at both endpoints; counting at the species end
        // counts it once.
        self.species().map(|s| self.degree(s)).sum()
    }

    /// True if the graph has no live vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.iter().all(|slot| slot.is_none())
    }

    /// Looks up a live species by display name.
    pub fn find_species(&self, name: &str) -> Option<VertexId> {
        self.species().find(|&s| self.name(s) == name)
    }

    /// Looks up a live character by display name.
    pub fn find_character(&self, name: &str) -> Option<VertexId> {
        self.characters().find(|&c| self.name(c) == name)
    }
}

impl fmt::Display for RBGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, s) in self.species().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}:", self.name(s))?;
            for &c in self.neighbors(s, Color::Black) {
                write!(f, " {}", self.name(c))?;
            }
            for &c in self.neighbors(s, Color::Red) {
                write!(f, " {}*", self.name(c))?;
            }
        }
        Ok(())
    }
}
