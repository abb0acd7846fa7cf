//! Realization of signed characters and the closure fixpoint.

use log::debug;

use crate::{log_graph, ReductionError, Result};

use super::{CharacterState, Color, RBGraph, SignedCharacter, VertexId};

impl RBGraph {
    /// Realizes one signed character, then runs [`RBGraph::closure`].
    ///
    /// A gain `c+` toggles `c` against every species of its component: black
    /// edges are deleted, missing edges become red. A lose `c-` deletes `c`
    /// entirely and is only permitted once all its remaining edges are red.
    ///
    /// Returns [`ReductionError::InconsistentMove`] when the precondition of
    /// the move does not hold; the driver uses this to prune branches.
    pub fn realize(&mut self, sc: &SignedCharacter) -> Result<()> {
        let c = self.find_character(&sc.character).ok_or_else(|| {
            ReductionError::InconsistentMove(format!(
                "character {} is not in the graph",
                sc.character
            ))
        })?;
        match sc.state {
            CharacterState::Gain => self.realize_gain(c, sc),
            CharacterState::Lose => self.realize_lose(c, sc),
        }
    }

    fn realize_gain(&mut self, c: VertexId, sc: &SignedCharacter) -> Result<()> {
        if self.is_active(c) {
            return Err(ReductionError::InconsistentMove(format!(
                "{} is already active",
                sc
            )));
        }
        let species: Vec<VertexId> = self
            .connected_component(c)
            .into_iter()
            .filter(|&v| self.is_species(v))
            .collect();
        for s in species {
            if self.edge_color(s, c) == Some(Color::Black) {
                self.remove_edge(s, c);
            } else {
                self.push_edge(s, c, Color::Red);
            }
        }
        debug!("Realized {} ({})", sc, log_graph(self));
        self.closure();
        Ok(())
    }

    fn realize_lose(&mut self, c: VertexId, sc: &SignedCharacter) -> Result<()> {
        if !self.is_active(c) {
            return Err(ReductionError::InconsistentMove(format!(
                "{} is not active",
                sc
            )));
        }
        if !self.neighbors(c, Color::Black).is_empty() {
            return Err(ReductionError::InconsistentMove(format!(
                "{} still has black edges",
                sc
            )));
        }
        self.remove_vertex(c);
        debug!("Realized {} ({})", sc, log_graph(self));
        self.closure();
        Ok(())
    }

    /// Runs the closure fixpoint: removes characters with no remaining
    /// edges, collapses active characters whose red edges span every species
    /// of their component, and removes species with no remaining edges,
    /// until nothing changes.
    pub fn closure(&mut self) {
        loop {
            let mut changed = false;
            let characters: Vec<VertexId> = self.characters().collect();
            for c in characters {
                if !self.contains(c) {
                    continue;
                }
                if self.degree(c) == 0 {
                    debug!("Closure drops isolated character {}", self.name(c));
                    self.remove_vertex(c);
                    changed = true;
                    continue;
                }
                if !self.neighbors(c, Color::Black).is_empty() {
                    continue;
                }
                let covered = self
                    .connected_component(c)
                    .into_iter()
                    .filter(|&v| self.is_species(v))
                    .all(|s| self.edge_color(s, c) == Some(Color::Red));
                if covered {
                    debug!("Closure collapses fully realized character {}", self.name(c));
                    self.remove_vertex(c);
                    changed = true;
                }
            }
            let species: Vec<VertexId> = self.species().collect();
            for s in species {
                if self.degree(s) == 0 {
                    debug!("Closure drops isolated species {}", self.name(s));
                    self.remove_vertex(s);
                    changed = true;
                }
            }
            if !changed {
                return;
            }
        }
    }
}
