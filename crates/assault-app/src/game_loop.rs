//! Headless run loop: drives the round controller on a fixed-timestep clock.
//!
//! Each simulated render frame feeds `frame_secs` to the clock, runs the
//! whole steps it returns, and routes the drained events. Audio and effect
//! events have no sink here and are only traced. In realtime mode the loop
//! sleeps to hold wall-clock pace.

use std::time::{Duration, Instant};

use serde::Serialize;

use assault_core::enums::RoundState;
use assault_core::events::GameEvent;
use assault_sim::clock::FixedTimestep;
use assault_sim::{RoundController, SimConfig, TickStatus};

use crate::autopilot::Autopilot;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::high_score::HighScoreStore;

/// What happened during a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub frames: u64,
    pub ticks: u64,
    pub final_score: u32,
    pub high_score: u32,
    pub highest_wave: u32,
    pub games_over: u32,
    /// The exit control ended the run early.
    pub exited: bool,
}

/// Run one session with the autopilot at the controls.
pub fn run(config: &AppConfig, seed: u64, store: &HighScoreStore) -> Result<RunSummary, AppError> {
    config.validate()?;
    let mut controller = RoundController::new(SimConfig {
        seed,
        high_score: store.load(),
    });
    let mut autopilot = Autopilot::new(config.quit_on_game_over);
    let mut clock = FixedTimestep::default();
    let frame_duration = Duration::from_secs_f32(config.frame_secs);
    let mut summary = RunSummary {
        seed,
        ..RunSummary::default()
    };

    tracing::info!(seed, high_score = controller.high_score(), "run started");
    let mut next_frame_time = Instant::now();

    'frames: for _ in 0..config.frame_count() {
        autopilot.plan(&controller.snapshot());

        let steps = clock.advance(config.frame_secs);
        for _ in 0..steps {
            let status = controller.update(clock.step(), &mut autopilot);
            summary.ticks += 1;
            route_events(controller.drain_events(), store, &mut summary)?;
            if status == TickStatus::Exit {
                summary.exited = true;
                break 'frames;
            }
        }
        summary.frames += 1;

        if config.realtime {
            next_frame_time += frame_duration;
            let now = Instant::now();
            if next_frame_time > now {
                std::thread::sleep(next_frame_time - now);
            } else if now - next_frame_time > frame_duration * 2 {
                // Too far behind, drop the backlog
                next_frame_time = now;
            }
        }
    }

    summary.final_score = controller.score();
    summary.high_score = controller.high_score();
    summary.highest_wave = summary.highest_wave.max(controller.wave());
    tracing::info!(
        ticks = summary.ticks,
        score = summary.final_score,
        high_score = summary.high_score,
        "run finished"
    );
    Ok(summary)
}

fn route_events(
    events: Vec<GameEvent>,
    store: &HighScoreStore,
    summary: &mut RunSummary,
) -> Result<(), AppError> {
    for event in events {
        match event {
            GameEvent::PersistHighScore { score } => store.save(score)?,
            GameEvent::WaveStarted { wave } => {
                summary.highest_wave = summary.highest_wave.max(wave);
            }
            GameEvent::StateChanged {
                to: RoundState::GameOver,
                ..
            } => summary.games_over += 1,
            other => tracing::trace!(event = ?other, "unrouted event"),
        }
    }
    Ok(())
}
