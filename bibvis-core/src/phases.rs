//! Per-frame simulation phases for the set–node layout.
//!
//! The host loop calls [`step`] once per animation frame with the elapsed
//! tick counter:
//! 1. [`node_phase`] — nodes repel their same-set siblings and drift
//!    toward their set's center.
//! 2. [`set_phase`] — sets repel each other edge-to-edge, seek their
//!    targets, and refit their enclosing radii.
//!
//! Position writes are visible to entities processed later in the same
//! frame. The published layout feel depends on this, so the phases
//! deliberately work in place instead of snapshotting positions at frame
//! start.

use crate::{config::Config, diagram::Diagram};
use glam::Vec2;
use rand::Rng;

/// Uniform random offset of up to `half` per axis, used to break exact
/// positional coincidence. Repulsion has no direction at zero distance.
fn jitter(half: f32, rng: &mut impl Rng) -> Vec2 {
    Vec2::new(
        rng.random_range(-half..=half),
        rng.random_range(-half..=half),
    )
}

/// Steps every node by one frame.
///
/// For each node, in creation order:
///
/// 1. Nothing happens once `t` is past `cfg.freeze_after` — the layout is
///    considered settled.
/// 2. Every sibling in the same set contributes inverse-square repulsion
///    `(own − other) / max(d, 1)²`, after coincident siblings are jittered
///    apart by up to `cfg.node_jitter` per axis.
/// 3. The owning set pulls the node toward its center, scaled
///    `max(d, 1) / cfg.node_pull_divisor` — linear in distance and weak,
///    so nodes orbit loosely instead of collapsing inward.
/// 4. Velocity is damped by `cfg.damping`, clamped componentwise to
///    `±cfg.node_speed_cap`, and integrated into the position.
///
/// ### Parameters
/// - `diagram` - Nodes are mutated; sets are only read.
/// - `cfg` - Simulation tuning constants.
/// - `t` - Elapsed ticks since the simulation started.
/// - `rng` - Source of the coincidence-breaking jitter.
pub fn node_phase(diagram: &mut Diagram, cfg: &Config, t: u64, rng: &mut impl Rng) {
    if cfg.frozen(t) {
        return;
    }

    for i in 0..diagram.nodes.len() {
        let mut pos = diagram.nodes[i].pos;
        let mut vel = diagram.nodes[i].vel;
        let set = &diagram.sets[diagram.nodes[i].set];

        for &j in &set.nodes {
            if j == i {
                continue;
            }
            let other = diagram.nodes[j].pos;
            if pos == other {
                pos += jitter(cfg.node_jitter, rng);
            }
            let d = pos.distance(other).max(1.0);
            vel += (pos - other) * (1.0 / d).powi(2);
        }

        let d = pos.distance(set.pos).max(1.0);
        vel += (set.pos - pos) * (d / cfg.node_pull_divisor);

        vel = (vel * cfg.damping).clamp(
            Vec2::splat(-cfg.node_speed_cap),
            Vec2::splat(cfg.node_speed_cap),
        );

        let node = &mut diagram.nodes[i];
        node.pos = pos + vel;
        node.vel = vel;
    }
}

/// Steps every set by one frame.
///
/// Set displacement carries an extra multiplier of
/// `10 · e^(−t / cfg.step_decay)` on top of the velocity damping, so
/// clusters sort themselves out in the first seconds and barely move
/// afterwards.
///
/// Repulsion between two sets acts on the *effective* distance: the
/// nearer of the other set's center and the point on its boundary facing
/// this set. A large cluster therefore pushes as a disc rather than a
/// point mass, and overlap is actively resolved. Magnitude is
/// `(cfg.set_repulsion / max(d, 1))²`.
///
/// The target pull is anisotropic — the horizontal component is scaled by
/// `cfg.horizontal_pull`, biasing layouts toward vertical spread — and
/// grows with both the distance to the target and the owned-node count
/// (`max(n, 1) ^ cfg.node_count_exponent`), so distant or heavy sets get
/// reeled in harder. The `max(n, 1)` keeps an empty set seeking its
/// target instead of drifting.
///
/// After integration the enclosing radius is refitted from scratch over
/// the owned nodes.
pub fn set_phase(diagram: &mut Diagram, cfg: &Config, t: u64, rng: &mut impl Rng) {
    if cfg.frozen(t) {
        return;
    }
    let step = cfg.set_step_multiplier(t);

    for i in 0..diagram.sets.len() {
        let mut pos = diagram.sets[i].pos;
        let mut vel = diagram.sets[i].vel;

        for j in 0..diagram.sets.len() {
            if j == i {
                continue;
            }
            let other = &diagram.sets[j];
            if pos == other.pos {
                pos += jitter(cfg.set_jitter, rng);
            }
            let edge = other.pos.move_towards(pos, other.radius);
            let d = pos.distance(other.pos).min(pos.distance(edge)).max(1.0);
            vel += (pos - other.pos) * (cfg.set_repulsion / d).powi(2);
        }

        let set = &diagram.sets[i];
        let to_target = set.target - pos;
        let weight = (set.nodes.len().max(1) as f32).powf(cfg.node_count_exponent);
        vel += Vec2::new(to_target.x * cfg.horizontal_pull, to_target.y)
            * (weight * to_target.length() / cfg.target_pull_divisor);

        vel = (vel * cfg.damping).clamp(
            Vec2::splat(-cfg.set_speed_cap),
            Vec2::splat(cfg.set_speed_cap),
        );
        pos += vel * step;

        let set = &mut diagram.sets[i];
        set.pos = pos;
        set.vel = vel;

        // Refit against the just-written position.
        let radius =
            diagram.sets[i].enclosing_radius(&diagram.nodes, cfg.min_radius, cfg.radius_margin);
        diagram.sets[i].radius = radius;
    }
}

/// Advances the whole diagram by one frame: nodes first, then sets.
pub fn step(diagram: &mut Diagram, cfg: &Config, t: u64, rng: &mut impl Rng) {
    node_phase(diagram, cfg, t, rng);
    set_phase(diagram, cfg, t, rng);
}
