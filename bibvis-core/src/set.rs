use crate::highlight::SetHighlight;
use crate::node::BibNode;
use crate::types::NodeId;
use glam::Vec2;

/// Lower bound for a set's enclosing radius.
pub const MIN_RADIUS: f32 = 10.0;

/// Distance from the circle boundary to the title label anchor.
const LABEL_CLEARANCE: f32 = 40.0;
/// Fixed nudge of the label up and to the left of the anchor ray.
const LABEL_OFFSET: Vec2 = Vec2::new(-10.0, -10.0);

/// A bibliographic grouping (venue, keyword, ...) rendered as an outlined
/// circle enclosing its nodes.
#[derive(Clone, Debug)]
pub struct BibSet {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Enclosing radius, refitted every step by
    /// [`crate::phases::set_phase`].
    pub radius: f32,
    /// Display label.
    pub title: String,
    /// Anchor point the set drifts toward; updated by the host between
    /// frames.
    pub target: Vec2,
    /// Owned nodes in creation order.
    pub nodes: Vec<NodeId>,
    pub highlight: SetHighlight,
}

impl BibSet {
    pub(crate) fn new(pos: Vec2, title: impl Into<String>, target: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius: MIN_RADIUS,
            title: title.into(),
            target,
            nodes: Vec::new(),
            highlight: SetHighlight::None,
        }
    }

    /// Smallest radius enclosing every owned node with `margin` to spare,
    /// never less than `min_radius`.
    ///
    /// Computed from scratch on every call; node counts per set are small
    /// enough that incremental tracking is not worth its complexity.
    pub fn enclosing_radius(&self, nodes: &[BibNode], min_radius: f32, margin: f32) -> f32 {
        let mut radius = min_radius;
        for &id in &self.nodes {
            radius = radius.max(self.pos.distance(nodes[id].pos) + margin);
        }
        radius
    }

    /// Anchor point for the title label, pushed away from the world
    /// origin past the circle boundary so labels fan outward from the
    /// diagram center.
    pub fn label_anchor(&self) -> Vec2 {
        self.pos
            .move_towards(Vec2::ZERO, -(self.radius + LABEL_CLEARANCE))
            + LABEL_OFFSET
    }

    /// Start of the leader line on the circle boundary, facing `anchor`.
    pub fn leader_start(&self, anchor: Vec2) -> Vec2 {
        self.pos.move_towards(anchor, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_anchor_lies_beyond_the_boundary() {
        let mut set = BibSet::new(Vec2::new(60.0, 80.0), "venue", Vec2::ZERO);
        set.radius = 30.0;
        let anchor = set.label_anchor();

        // The anchor ray extends away from the origin, so the un-offset
        // anchor sits radius + clearance past the center; the fixed offset
        // can bring it back by at most ~14 units.
        let reach = anchor.distance(set.pos);
        assert!(reach > set.radius + LABEL_CLEARANCE - 15.0);
        assert!(anchor.length() > set.pos.length());
    }

    #[test]
    fn leader_starts_on_the_circle() {
        let mut set = BibSet::new(Vec2::new(100.0, 0.0), "venue", Vec2::ZERO);
        set.radius = 25.0;
        let anchor = set.label_anchor();
        let start = set.leader_start(anchor);
        assert!((start.distance(set.pos) - set.radius).abs() < 1e-3);
    }
}
