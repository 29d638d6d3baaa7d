//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One conceptual timestep per `tick` call
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, circle_rect_collision, obstacle_rects};
pub use state::{
    GameEvent, GamePhase, GameState, Obstacle, Outcome, Player, TRAIL_LENGTH,
};
pub use tick::{TickInput, spawn_obstacle, tick};
