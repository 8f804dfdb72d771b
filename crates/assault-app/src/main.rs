use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use assault_app::config::AppConfig;
use assault_app::error::AppError;
use assault_app::game_loop;
use assault_app::high_score::HighScoreStore;

#[derive(Parser, Debug)]
#[command(name = "galactic-assault")]
#[command(about = "Headless GALACTIC ASSAULT run with a scripted pilot")]
struct Cli {
    /// JSON config file; omitted fields take their defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// RNG seed (random when neither flag nor config sets one)
    #[arg(long)]
    seed: Option<u64>,
    /// Simulated seconds to run
    #[arg(long)]
    duration: Option<f32>,
    /// Where the high score is kept
    #[arg(long)]
    high_score_path: Option<PathBuf>,
    /// Pace frames to wall-clock time
    #[arg(long)]
    realtime: bool,
    /// Keep restarting after game over instead of exiting
    #[arg(long)]
    keep_playing: bool,
}

impl Cli {
    fn into_config(self) -> Result<AppConfig, AppError> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(duration) = self.duration {
            config.duration_secs = duration;
        }
        if let Some(path) = self.high_score_path {
            config.high_score_path = path;
        }
        config.realtime |= self.realtime;
        if self.keep_playing {
            config.quit_on_game_over = false;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), AppError> {
    let config = Cli::parse().into_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    let seed = config.resolve_seed();
    let store = HighScoreStore::new(&config.high_score_path);
    let summary = game_loop::run(&config, seed, &store)?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
