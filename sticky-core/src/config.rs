use std::f32::consts::PI;

/// Parameters shared by the recursive generators in [`crate::patterns`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PatternConfig {
    /// Length of the vertical stick at each level.
    pub trunk_len: f32,
    /// Stick length used instead of `trunk_len` for the outermost levels.
    pub short_trunk_len: f32,
    /// Depth from which `short_trunk_len` applies.
    pub short_trunk_from: u32,
    pub left_scale: f32,
    pub right_scale: f32,
    /// Radians, counter-clockwise.
    pub left_angle: f32,
    /// Radians, counter-clockwise (negative leans right).
    pub right_angle: f32,
    /// Maximum random perturbation of each branch angle, in radians.
    pub jitter: f32,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            trunk_len: 100.0,
            short_trunk_len: 60.0,
            short_trunk_from: 12,
            left_scale: 0.75,
            right_scale: 0.65,
            left_angle: PI / 6.0 + PI / 12.0,
            right_angle: -PI / 6.0,
            jitter: PI / 18.0,
        }
    }
}

impl PatternConfig {
    /// Trunk length for a generator level at `depth`.
    pub fn trunk_for(&self, depth: u32) -> f32 {
        if depth >= self.short_trunk_from {
            self.short_trunk_len
        } else {
            self.trunk_len
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_trunk_applies_from_threshold() {
        let cfg = PatternConfig::default();
        assert_eq!(cfg.trunk_for(0), 100.0);
        assert_eq!(cfg.trunk_for(11), 100.0);
        assert_eq!(cfg.trunk_for(12), 60.0);
        assert_eq!(cfg.trunk_for(13), 60.0);
    }
}
