use crate::highlight::NodeHighlight;
use crate::types::SetId;
use glam::Vec2;

/// A single bibliography entry in the diagram.
///
/// Every node belongs to exactly one [`crate::set::BibSet`], recorded by
/// index when the node is registered through
/// [`crate::diagram::Diagram::add_node`] and never re-parented. Position
/// and velocity are only mutated by [`crate::phases::node_phase`]; the
/// highlight state is owned by the host's interaction layer.
#[derive(Clone, Debug)]
pub struct BibNode {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Citation key of the underlying bibliography entry.
    pub key: String,
    /// Owning set.
    pub set: SetId,
    pub highlight: NodeHighlight,
}

impl BibNode {
    pub(crate) fn new(pos: Vec2, key: impl Into<String>, set: SetId) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            key: key.into(),
            set,
            highlight: NodeHighlight::None,
        }
    }
}
