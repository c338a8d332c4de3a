use crate::set::MIN_RADIUS;

/// Tuning constants for the layout simulation.
///
/// The defaults reproduce the published layout feel; the viewer exposes
/// them for interactive experimentation.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Tick count after which the layout is considered settled and
    /// stepping becomes a no-op.
    pub freeze_after: u64,
    /// Half-range of the random offset applied when two sibling nodes
    /// occupy exactly the same position.
    pub node_jitter: f32,
    /// Half-range of the random offset applied to coincident sets.
    pub set_jitter: f32,
    /// Per-step velocity damping factor for both entity kinds.
    pub damping: f32,
    /// Componentwise velocity cap for nodes.
    pub node_speed_cap: f32,
    /// Componentwise velocity cap for sets.
    pub set_speed_cap: f32,
    /// Divisor of the linear pull from a node toward its set's center.
    pub node_pull_divisor: f32,
    /// Numerator of the inverse-square repulsion between sets.
    pub set_repulsion: f32,
    /// Divisor of the pull from a set toward its target.
    pub target_pull_divisor: f32,
    /// Horizontal scale of the target pull relative to vertical.
    pub horizontal_pull: f32,
    /// Exponent applied to the owned-node count in the target pull.
    pub node_count_exponent: f32,
    /// Time constant, in ticks, of the exponential set step decay.
    pub step_decay: f32,
    /// Lower bound for a set's enclosing radius.
    pub min_radius: f32,
    /// Margin added around the farthest owned node when refitting a
    /// set's radius.
    pub radius_margin: f32,
    /// Visual radius of a node circle.
    pub node_radius: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            freeze_after: 600,
            node_jitter: 0.5,
            set_jitter: 50.0,
            damping: 0.95,
            node_speed_cap: 10.0,
            set_speed_cap: 5.0,
            node_pull_divisor: 10_000.0,
            set_repulsion: 2.5,
            target_pull_divisor: 200_000.0,
            horizontal_pull: 0.4,
            node_count_exponent: 0.3,
            step_decay: 100.0,
            min_radius: MIN_RADIUS,
            radius_margin: 20.0,
            node_radius: 10.0,
        }
    }
}

impl Config {
    /// Whether the simulation is frozen at tick `t`.
    ///
    /// Past [`Config::freeze_after`] every phase is a no-op; at 60 ticks
    /// per second the default threshold settles the layout after roughly
    /// ten seconds.
    pub fn frozen(&self, t: u64) -> bool {
        t > self.freeze_after
    }

    /// Time-decaying displacement multiplier for set motion at tick `t`.
    ///
    /// Starts at 10 and decays exponentially with time constant
    /// [`Config::step_decay`], so sets sort themselves quickly and are
    /// near-static well before the freeze threshold. This modulates the
    /// integrated displacement and is independent of the velocity
    /// damping.
    pub fn set_step_multiplier(&self, t: u64) -> f32 {
        10.0 * (-(t as f32) / self.step_decay).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freeze_threshold_is_exclusive() {
        let cfg = Config::default();
        assert!(!cfg.frozen(600));
        assert!(cfg.frozen(601));
    }

    #[test]
    fn step_multiplier_decays_from_ten() {
        let cfg = Config::default();
        assert_eq!(cfg.set_step_multiplier(0), 10.0);
        let m100 = cfg.set_step_multiplier(100);
        assert!((m100 - 10.0 / std::f32::consts::E).abs() < 1e-4);
        assert!(cfg.set_step_multiplier(600) < m100);
    }
}
