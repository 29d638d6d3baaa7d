//! Headless demo host
//!
//! Stands in for a real host's animation-frame scheduler: drives the
//! simulation one tick per conceptual frame with a small autopilot on the
//! thrust control, and prints the events a real host would route to its
//! HUD and game-over overlay. Takes no arguments; seed comes from the
//! clock, `RUST_LOG=debug` shows the difficulty ramp.

use std::time::{SystemTime, UNIX_EPOCH};

use flap_wave::consts::TICK_DT;
use flap_wave::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use flap_wave::tuning::Tuning;

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0xF1A9);

    // A short demo run: survive 45 seconds to win
    let tuning = Tuning {
        win_after_secs: Some(45.0),
        ..Tuning::default()
    };

    log::info!("flap-wave headless demo, seed {seed}");
    let mut state = GameState::new(seed, tuning);
    let mut input = TickInput::default();

    while state.phase == GamePhase::Running {
        input.thrust = autopilot(&state);
        for event in tick(&mut state, &input, TICK_DT) {
            match event {
                GameEvent::ScoreChanged { score } => println!("score: {score}"),
                GameEvent::DifficultyChanged { multiplier } => {
                    println!("speed: {multiplier:.2}x");
                }
                GameEvent::RunEnded { outcome, score } => {
                    println!(
                        "run over after {:.1}s: {outcome:?}, final score {score}",
                        state.elapsed
                    );
                }
            }
        }
    }
}

/// Steer toward the nearest upcoming gap: hold thrust while the player sits
/// below it, letting go early enough that the current rise won't overshoot.
fn autopilot(state: &GameState) -> bool {
    let player = &state.player;
    let target = state
        .obstacles
        .iter()
        .filter(|ob| ob.right() >= player.pos.x)
        .min_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal))
        .map(|ob| ob.gap_center)
        .unwrap_or(state.tuning.view_height / 2.0);

    // How far the current rise carries before gravity turns it around
    let gravity = state.tuning.gravity * state.tuning.physics_scale(state.multiplier);
    let rise = if player.vel_y < 0.0 {
        player.vel_y * player.vel_y / (2.0 * gravity)
    } else {
        0.0
    };

    player.pos.y - rise > target
}
