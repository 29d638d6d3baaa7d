//! Data-driven game balance
//!
//! Every constant the step formulas read lives here, so hosts and tests can
//! retune a run without recompiling. Defaults are the classic balance the
//! game shipped with. All linear/tick units; the difficulty multiplier
//! threads through the helper methods.

use serde::{Deserialize, Serialize};

/// Balance constants for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Viewport the run plays in (world units match host pixels)
    pub view_width: f32,
    pub view_height: f32,

    /// Player x as a fraction of the viewport width
    pub player_x_frac: f32,
    pub player_radius: f32,

    /// Downward acceleration per tick while thrust is released
    pub gravity: f32,
    /// Upward velocity magnitude assigned each tick while thrust is held
    pub thrust: f32,
    /// Fraction of the multiplier's excess applied to gravity and thrust
    pub physics_ramp: f32,

    /// Raise the multiplier every this many ticks (0 disables the ramp)
    pub ramp_interval_ticks: u32,
    /// Additive multiplier increment per ramp step
    pub ramp_step: f32,
    /// Ceiling for the difficulty multiplier
    pub max_multiplier: f32,

    /// Base ticks between spawns, divided by the multiplier as it grows
    pub spawn_interval_ticks: u32,
    /// Spawn interval floor
    pub min_spawn_interval_ticks: u32,

    /// Obstacle width range
    pub min_width: f32,
    pub max_width: f32,

    /// Gap size before difficulty shrink
    pub base_gap: f32,
    /// Gap units removed per multiplier unit
    pub gap_shrink: f32,
    /// Gap size floor
    pub min_gap: f32,

    /// Gap center band, as fractions of the viewport height
    pub center_min_frac: f32,
    pub center_max_frac: f32,

    /// Oscillation amplitude: `min_amplitude` plus up to this fraction of
    /// the viewport height
    pub amplitude_frac: f32,
    pub min_amplitude: f32,
    /// Oscillation frequency range (radians per tick of lifetime)
    pub base_frequency: f32,
    pub frequency_spread: f32,
    /// Fraction of the multiplier added to the oscillation frequency
    pub wobble_ramp: f32,

    /// Leftward obstacle speed per tick before difficulty
    pub base_speed: f32,
    /// Extra speed per multiplier unit
    pub speed_ramp: f32,

    /// How far past the left edge an obstacle survives before pruning
    pub prune_margin: f32,

    /// Survive this long (seconds) to win the run; `None` plays endless
    pub win_after_secs: Option<f32>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            view_width: 1280.0,
            view_height: 720.0,

            player_x_frac: 0.2,
            player_radius: 28.0,

            gravity: 0.45,
            thrust: 8.0,
            physics_ramp: 0.08,

            ramp_interval_ticks: 300,
            ramp_step: 0.05,
            max_multiplier: 3.0,

            spawn_interval_ticks: 120,
            min_spawn_interval_ticks: 40,

            min_width: 60.0,
            max_width: 120.0,

            base_gap: 160.0,
            gap_shrink: 20.0,
            min_gap: 120.0,

            center_min_frac: 0.2,
            center_max_frac: 0.8,

            amplitude_frac: 0.18,
            min_amplitude: 30.0,
            base_frequency: 0.004,
            frequency_spread: 0.008,
            wobble_ramp: 0.12,

            base_speed: 3.0,
            speed_ramp: 1.5,

            prune_margin: 50.0,

            win_after_secs: Some(120.0),
        }
    }
}

impl Tuning {
    /// Scale applied to gravity and thrust at the given multiplier
    pub fn physics_scale(&self, multiplier: f32) -> f32 {
        1.0 + (multiplier - 1.0) * self.physics_ramp
    }

    /// Leftward obstacle speed at the given multiplier
    pub fn scroll_speed(&self, multiplier: f32) -> f32 {
        self.base_speed + multiplier * self.speed_ramp
    }

    /// Ticks between spawns at the given multiplier, floored
    pub fn spawn_interval(&self, multiplier: f32) -> u32 {
        ((self.spawn_interval_ticks as f32 / multiplier).round() as u32)
            .max(self.min_spawn_interval_ticks)
    }

    /// Gap size at the given multiplier, floored
    pub fn gap_size(&self, multiplier: f32) -> f32 {
        (self.base_gap - multiplier * self.gap_shrink).max(self.min_gap)
    }

    /// Parse balance data a host embeds as JSON; missing fields keep their
    /// defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize for host-side storage or editing
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_interval_shrinks_and_floors() {
        let t = Tuning::default();
        assert_eq!(t.spawn_interval(1.0), 120);
        assert_eq!(t.spawn_interval(2.0), 60);
        // 120 / 3 = 40, right at the floor
        assert_eq!(t.spawn_interval(3.0), 40);
        // Floor holds even past the cap formula
        assert_eq!(t.spawn_interval(6.0), 40);
    }

    #[test]
    fn test_gap_shrinks_and_floors() {
        let t = Tuning::default();
        assert_eq!(t.gap_size(1.0), 140.0);
        // 160 - 3 * 20 = 100, clamped up to the floor
        assert_eq!(t.gap_size(3.0), 120.0);
    }

    #[test]
    fn test_physics_scale() {
        let t = Tuning::default();
        assert_eq!(t.physics_scale(1.0), 1.0);
        assert!((t.physics_scale(3.0) - 1.16).abs() < 1e-6);
    }

    #[test]
    fn test_scroll_speed() {
        let t = Tuning::default();
        assert_eq!(t.scroll_speed(1.0), 4.5);
        assert_eq!(t.scroll_speed(3.0), 7.5);
    }

    #[test]
    fn test_json_round_trip() {
        let mut t = Tuning::default();
        t.base_gap = 200.0;
        t.win_after_secs = None;

        let json = t.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), t);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "gravity": 0.6, "max_multiplier": 2.0 }"#).unwrap();
        assert_eq!(t.gravity, 0.6);
        assert_eq!(t.max_multiplier, 2.0);
        assert_eq!(t.thrust, Tuning::default().thrust);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Tuning::from_json("not json").is_err());
    }
}
