//! Structural predicates driving the reduction decisions.
//!
//! Universality is evaluated against the black-connected component of the
//! character (red edges are ignored), while freeness of a species looks at
//! its full component over both colors: the red edges of an active character
//! are exactly what keeps it attached to the species it conflicts with.

use std::collections::BTreeSet;

use super::{Color, RBGraph, VertexId, VertexKind};

impl RBGraph {
    /// True if `v` is a species vertex.
    pub fn is_species(&self, v: VertexId) -> bool {
        self.kind(v) == VertexKind::Species
    }

    /// True if `v` is a character vertex.
    pub fn is_character(&self, v: VertexId) -> bool {
        self.kind(v) == VertexKind::Character
    }

    /// True if `v` has at least one incident red edge.
    ///
    /// For a character this is the activity notion of the reduction; for a
    /// species it marks a vertex already touched by a realized character
    /// (used when pruning the Hasse diagram).
    pub fn is_active(&self, v: VertexId) -> bool {
        !self.neighbors(v, Color::Red).is_empty()
    }

    /// True if `v` has no incident red edge.
    pub fn is_inactive(&self, v: VertexId) -> bool {
        !self.is_active(v)
    }

    /// True if `c` is an active character that still carries black edges,
    /// i.e. its realization has not fully propagated yet.
    pub fn is_pending(&self, c: VertexId) -> bool {
        self.is_character(c) && self.is_active(c) && !self.neighbors(c, Color::Black).is_empty()
    }

    /// True if `c` is an inactive character connected by a black edge to
    /// every species of its black-connected component.
    pub fn is_universal(&self, c: VertexId) -> bool {
        if !self.is_character(c) || self.is_active(c) {
            return false;
        }
        self.black_component(c)
            .into_iter()
            .filter(|&v| self.is_species(v))
            .all(|s| self.edge_color(s, c) == Some(Color::Black))
    }

    /// True if `s` is a species connected by black edges to every inactive
    /// character and by red edges to every active character of its component.
    pub fn is_free(&self, s: VertexId) -> bool {
        if !self.is_species(s) {
            return false;
        }
        self.connected_component(s)
            .into_iter()
            .filter(|&v| self.is_character(v))
            .all(|c| {
                let expected = if self.is_active(c) {
                    Color::Red
                } else {
                    Color::Black
                };
                self.edge_color(s, c) == Some(expected)
            })
    }

    /// The species set of a character: the names of all species connected to
    /// `c` by a black edge.
    pub fn species_set(&self, c: VertexId) -> BTreeSet<&str> {
        self.neighbors(c, Color::Black)
            .iter()
            .map(|&s| self.name(s))
            .collect()
    }

    /// True if the species set of `c2` is a subset of the species set of
    /// `c1`. Species are compared by name, not by identity.
    pub fn includes(&self, c1: VertexId, c2: VertexId) -> bool {
        self.species_set(c2).is_subset(&self.species_set(c1))
    }

    /// True if no other character's species set strictly contains the
    /// species set of `c`.
    pub fn is_maximal(&self, c: VertexId) -> bool {
        let own = self.species_set(c);
        !self.characters().any(|other| {
            if other == c {
                return false;
            }
            let set = self.species_set(other);
            own.is_subset(&set) && own.len() < set.len()
        })
    }
}
