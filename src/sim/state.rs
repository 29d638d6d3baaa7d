//! Game state and core simulation types
//!
//! Everything a run mutates lives here; the host reads it back between
//! ticks for drawing.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Actively simulating
    Running,
    /// Run ended by collision
    Crashed,
    /// Run ended by outlasting the win threshold
    Survived,
}

impl GamePhase {
    /// True once the run has reached a terminal phase
    pub fn is_ended(&self) -> bool {
        !matches!(self, GamePhase::Running)
    }
}

/// How a finished run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Crashed,
    Survived,
}

/// State changes the host's HUD, sound and game-over overlay care about.
///
/// Serializable so hosts can forward them over a worker/FFI boundary as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    ScoreChanged { score: u32 },
    DifficultyChanged { multiplier: f32 },
    /// Terminal signal, emitted exactly once per run
    RunEnded { outcome: Outcome, score: u32 },
}

/// Maximum number of trail points to store
pub const TRAIL_LENGTH: usize = 20;

/// The player's avatar
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Position; x stays fixed for the whole run
    pub pos: Vec2,
    /// Vertical velocity in units/tick (positive = downward)
    pub vel_y: f32,
    /// Collision and draw radius
    pub radius: f32,
    /// Cosmetic tilt (radians) derived from vertical velocity
    pub rotation: f32,
    /// Trail history for rendering (newest first)
    pub trail: Vec<Vec2>,
}

impl Player {
    fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(
                tuning.view_width * tuning.player_x_frac,
                tuning.view_height / 2.0,
            ),
            vel_y: 0.0,
            radius: tuning.player_radius,
            rotation: 0.0,
            trail: Vec::with_capacity(TRAIL_LENGTH),
        }
    }

    /// Record current position to trail (call each tick)
    pub fn record_trail(&mut self) {
        self.trail.insert(0, self.pos);
        if self.trail.len() > TRAIL_LENGTH {
            self.trail.pop();
        }
    }
}

/// A scrolling obstacle: two blocking rectangles with a vertical gap between
/// them, drifting left while the gap center oscillates on a sine wave.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge
    pub x: f32,
    pub width: f32,
    /// Gap center the oscillation swings around
    pub base_center: f32,
    /// Gap center this tick (recomputed as the obstacle ages)
    pub gap_center: f32,
    /// Vertical size of the open gap
    pub gap: f32,
    /// Oscillation shape, fixed at spawn
    pub amplitude: f32,
    pub frequency: f32,
    /// One-shot score marker
    pub passed: bool,
    /// Ticks alive (phase of the oscillation)
    pub life: u32,
}

impl Obstacle {
    /// Trailing (right) edge
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Complete state of one run (deterministic: same seed, same inputs, same run)
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Balance constants the step formulas read
    pub tuning: Tuning,
    /// Current phase; doubles as the host's visual state tag
    pub phase: GamePhase,
    pub player: Player,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Obstacles passed so far
    pub score: u32,
    /// Difficulty multiplier; non-decreasing, capped at `tuning.max_multiplier`
    pub multiplier: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Run clock in seconds (drives the survival win)
    pub elapsed: f32,
    /// Ticks since the last spawn
    pub(crate) spawn_counter: u32,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a fresh run with the given seed and balance
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            phase: GamePhase::Running,
            player: Player::new(&tuning),
            obstacles: Vec::new(),
            score: 0,
            multiplier: 1.0,
            time_ticks: 0,
            elapsed: 0.0,
            spawn_counter: 0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
            tuning,
        }
    }

    /// Re-initialize every field for a new run, reusing the seed and tuning.
    /// Yields the same state as a fresh [`GameState::new`] regardless of how
    /// far the previous run got.
    pub fn reset(&mut self) {
        *self = GameState::new(self.seed, self.tuning.clone());
    }

    /// Allocate a new entity ID
    pub(crate) fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_run_defaults() {
        let state = GameState::new(7, Tuning::default());
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.multiplier, 1.0);
        assert_eq!(state.time_ticks, 0);
        assert!(state.obstacles.is_empty());
        assert!(state.player.trail.is_empty());
        assert_eq!(state.player.vel_y, 0.0);
        assert_eq!(state.player.pos.x, 1280.0 * 0.2);
        assert_eq!(state.player.pos.y, 360.0);
    }

    #[test]
    fn test_record_trail_bounded_newest_first() {
        let mut player = Player::new(&Tuning::default());
        for i in 0..(TRAIL_LENGTH + 10) {
            player.pos.y = i as f32;
            player.record_trail();
        }
        assert_eq!(player.trail.len(), TRAIL_LENGTH);
        // Newest entry first, oldest evicted
        assert_eq!(player.trail[0].y, (TRAIL_LENGTH + 9) as f32);
        assert_eq!(player.trail[TRAIL_LENGTH - 1].y, 10.0);
    }

    #[test]
    fn test_reset_matches_fresh_state() {
        let tuning = Tuning::default();
        let mut state = GameState::new(42, tuning.clone());

        // Scribble over everything a run touches
        state.phase = GamePhase::Crashed;
        state.score = 17;
        state.multiplier = 2.5;
        state.time_ticks = 9000;
        state.elapsed = 150.0;
        state.spawn_counter = 3;
        state.player.pos.y = 99.0;
        state.player.vel_y = -4.0;
        state.player.record_trail();
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            x: 500.0,
            width: 80.0,
            base_center: 300.0,
            gap_center: 310.0,
            gap: 140.0,
            amplitude: 40.0,
            frequency: 0.01,
            passed: true,
            life: 60,
        });

        state.reset();
        assert_eq!(state, GameState::new(42, tuning));
    }

    #[test]
    fn test_entity_ids_monotonic() {
        let mut state = GameState::new(1, Tuning::default());
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert!(b > a);
    }
}
