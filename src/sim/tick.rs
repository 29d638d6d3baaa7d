//! The per-frame simulation step
//!
//! Advances one conceptual frame of a run: clock and difficulty, vertical
//! physics, spawning, scrolling, collision, scoring, pruning. The host
//! scheduler calls [`tick`] once per display refresh while the phase is
//! `Running` and stops once it isn't; [`GameState::reset`] starts the next
//! run.
//!
//! [`GameState::reset`]: super::state::GameState::reset

use rand::Rng;

use crate::consts::{PLAYER_MAX_TILT, PLAYER_TILT_GAIN};
use crate::sim::collision::{circle_rect_collision, obstacle_rects};
use crate::sim::state::{GameEvent, GamePhase, GameState, Obstacle, Outcome};

/// Input sampled for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Thrust control held (pointer pressed / spacebar down)
    pub thrust: bool,
}

/// Advance the run by one frame.
///
/// Physics and counters move in per-tick units; `dt` is the host's frame
/// delta in seconds and only advances the run clock that the survival win
/// reads, so uneven frame pacing keeps wall-clock wins accurate. Returns
/// the state changes the host's HUD/sound/game-over sinks care about.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase.is_ended() {
        return events;
    }

    state.time_ticks += 1;
    state.elapsed += dt;

    // Difficulty ramps on a fixed tick cadence, capped
    let ramp_every = u64::from(state.tuning.ramp_interval_ticks);
    if ramp_every > 0 && state.time_ticks % ramp_every == 0 {
        let next = (state.multiplier + state.tuning.ramp_step).min(state.tuning.max_multiplier);
        if next > state.multiplier {
            state.multiplier = next;
            log::debug!("difficulty {:.2}x at tick {}", next, state.time_ticks);
            events.push(GameEvent::DifficultyChanged { multiplier: next });
        }
    }

    // Survival win preempts everything else this frame, collision included
    if let Some(win_secs) = state.tuning.win_after_secs {
        if state.elapsed >= win_secs {
            state.phase = GamePhase::Survived;
            log::info!(
                "run survived: score {} after {:.1}s",
                state.score,
                state.elapsed
            );
            events.push(GameEvent::RunEnded {
                outcome: Outcome::Survived,
                score: state.score,
            });
            return events;
        }
    }

    // Vertical physics. Thrust assigns velocity outright rather than adding
    // an impulse; releasing starts gravity from the last assigned value.
    let scale = state.tuning.physics_scale(state.multiplier);
    if input.thrust {
        state.player.vel_y = -state.tuning.thrust * scale;
    } else {
        state.player.vel_y += state.tuning.gravity * scale;
    }
    state.player.pos.y += state.player.vel_y;

    // Keep the player inside the viewport; zero velocity against the bound
    let floor = state.tuning.view_height - state.player.radius;
    if state.player.pos.y <= state.player.radius {
        state.player.pos.y = state.player.radius;
        state.player.vel_y = 0.0;
    } else if state.player.pos.y >= floor {
        state.player.pos.y = floor;
        state.player.vel_y = 0.0;
    }

    state.player.rotation =
        (state.player.vel_y * PLAYER_TILT_GAIN).clamp(-PLAYER_MAX_TILT, PLAYER_MAX_TILT);

    state.player.record_trail();

    // Spawn on a difficulty-shortened cadence
    state.spawn_counter += 1;
    if state.spawn_counter >= state.tuning.spawn_interval(state.multiplier) {
        state.spawn_counter = 0;
        spawn_obstacle(state);
    }

    // Scroll obstacles and swing their gaps
    let speed = state.tuning.scroll_speed(state.multiplier);
    let wobble = 1.0 + state.multiplier * state.tuning.wobble_ramp;
    for ob in &mut state.obstacles {
        ob.x -= speed;
        ob.life += 1;
        ob.gap_center =
            ob.base_center + ob.amplitude * (ob.life as f32 * ob.frequency * wobble).sin();
    }

    // Collision ends the run on the spot; remaining obstacles are not
    // processed this frame
    for ob in &state.obstacles {
        let (top, bottom) = obstacle_rects(ob, state.tuning.view_height);
        if circle_rect_collision(state.player.pos, state.player.radius, &top)
            || circle_rect_collision(state.player.pos, state.player.radius, &bottom)
        {
            state.phase = GamePhase::Crashed;
            log::info!(
                "run crashed: score {} after {:.1}s",
                state.score,
                state.elapsed
            );
            events.push(GameEvent::RunEnded {
                outcome: Outcome::Crashed,
                score: state.score,
            });
            return events;
        }
    }

    // Score each obstacle once, when its trailing edge clears the player
    let player_x = state.player.pos.x;
    for ob in &mut state.obstacles {
        if !ob.passed && ob.right() < player_x {
            ob.passed = true;
            state.score += 1;
            events.push(GameEvent::ScoreChanged { score: state.score });
        }
    }

    // Drop obstacles once fully past the left edge, with a margin so the
    // host never sees one vanish on screen
    let cutoff = -state.tuning.prune_margin;
    state.obstacles.retain(|ob| ob.right() >= cutoff);

    events
}

/// Spawn an obstacle just past the right edge with a randomized shape drawn
/// from the run's seeded RNG
pub fn spawn_obstacle(state: &mut GameState) {
    let id = state.next_entity_id();
    let view_width = state.tuning.view_width;
    let view_height = state.tuning.view_height;
    let gap = state.tuning.gap_size(state.multiplier);
    let (min_width, max_width) = (state.tuning.min_width, state.tuning.max_width);
    let center_lo = view_height * state.tuning.center_min_frac;
    let center_hi = view_height * state.tuning.center_max_frac;
    let amp_lo = state.tuning.min_amplitude;
    let amp_hi = amp_lo + view_height * state.tuning.amplitude_frac;
    let freq_lo = state.tuning.base_frequency;
    let freq_hi = freq_lo + state.tuning.frequency_spread;

    let width = state.rng.random_range(min_width..=max_width);
    let base_center = state.rng.random_range(center_lo..=center_hi);
    let amplitude = state.rng.random_range(amp_lo..=amp_hi);
    let frequency = state.rng.random_range(freq_lo..=freq_hi);

    state.obstacles.push(Obstacle {
        id,
        x: view_width + width,
        width,
        base_center,
        gap_center: base_center,
        gap,
        amplitude,
        frequency,
        passed: false,
        life: 0,
    });
}
