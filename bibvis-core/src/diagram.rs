use crate::node::BibNode;
use crate::set::BibSet;
use crate::types::{NodeId, SetId};
use glam::Vec2;

/// Arena holding every set and node of one diagram.
///
/// Entities are created once when the diagram is bound to a filtered
/// bibliography and live until the whole diagram is discarded; ids are
/// plain indices and stay valid for the diagram's lifetime. When the
/// underlying entry selection changes, the host rebuilds the diagram
/// rather than editing it in place.
#[derive(Clone, Debug, Default)]
pub struct Diagram {
    pub sets: Vec<BibSet>,
    pub nodes: Vec<BibNode>,
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a set at `pos` that drifts toward `target`.
    pub fn add_set(&mut self, pos: Vec2, title: impl Into<String>, target: Vec2) -> SetId {
        let id = self.sets.len();
        self.sets.push(BibSet::new(pos, title, target));
        id
    }

    /// Adds a node for the entry `key` and registers it with its owning
    /// set in one step.
    ///
    /// # Panics
    ///
    /// Panics if `set` does not name an existing set. A node without a
    /// valid owner must never come into existence, so construction fails
    /// fast instead of deferring the error.
    pub fn add_node(&mut self, pos: Vec2, key: impl Into<String>, set: SetId) -> NodeId {
        assert!(
            set < self.sets.len(),
            "node registered to unknown set {set}"
        );
        let id = self.nodes.len();
        self.nodes.push(BibNode::new(pos, key, set));
        self.sets[set].nodes.push(id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodes_register_with_their_set_in_creation_order() {
        let mut diagram = Diagram::new();
        let venue = diagram.add_set(Vec2::ZERO, "TVCG", Vec2::new(0.0, 100.0));
        let a = diagram.add_node(Vec2::new(1.0, 0.0), "doe2021maps", venue);
        let b = diagram.add_node(Vec2::new(2.0, 0.0), "roe2022flows", venue);

        assert_eq!(diagram.sets[venue].nodes, vec![a, b]);
        assert_eq!(diagram.nodes[a].set, venue);
        assert_eq!(diagram.nodes[b].key, "roe2022flows");
    }

    #[test]
    #[should_panic(expected = "unknown set")]
    fn node_construction_without_a_valid_owner_fails_fast() {
        let mut diagram = Diagram::new();
        diagram.add_node(Vec2::ZERO, "orphan2020", 0);
    }
}
