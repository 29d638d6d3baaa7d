//! Flap & Wave - the update loop of a hold-to-thrust obstacle dodger
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collision, game state)
//! - `tuning`: Data-driven game balance
//!
//! This crate is the simulation half of the game only. A host owns the
//! window, input devices, renderer and audio: it samples its input state
//! into a [`sim::TickInput`], calls [`sim::tick`] once per display refresh,
//! reads the resulting [`sim::GameState`] back for drawing, and forwards
//! the returned [`sim::GameEvent`]s to its HUD and sound systems. When a
//! run ends the host stops ticking until [`sim::GameState::reset`].

pub mod sim;
pub mod tuning;

pub use sim::{GameEvent, GamePhase, GameState, Outcome, TickInput, tick};
pub use tuning::Tuning;

/// Host-facing constants
pub mod consts {
    /// Conceptual duration of one simulation tick (hosts scheduling at 60 Hz)
    pub const TICK_DT: f32 = 1.0 / 60.0;

    /// Cosmetic tilt: radians of rotation per unit of vertical velocity
    pub const PLAYER_TILT_GAIN: f32 = 0.08;
    /// Cosmetic tilt clamp (radians)
    pub const PLAYER_MAX_TILT: f32 = 1.2;
}
