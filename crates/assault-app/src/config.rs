//! Driver configuration, read from an optional JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use assault_core::constants::FIXED_DT;

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// RNG seed. `None` picks a random one at startup.
    pub seed: Option<u64>,
    /// Simulated seconds to run.
    pub duration_secs: f32,
    pub high_score_path: PathBuf,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Simulated render-frame interval fed to the fixed-timestep clock.
    pub frame_secs: f32,
    /// Sleep between frames to run at wall-clock speed.
    pub realtime: bool,
    /// Press exit as soon as the first game ends.
    pub quit_on_game_over: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            duration_secs: 60.0,
            high_score_path: PathBuf::from("galactic_assault_highscore.json"),
            log_filter: "info".to_string(),
            frame_secs: FIXED_DT,
            realtime: false,
            quit_on_game_over: true,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !self.frame_secs.is_finite() || self.frame_secs <= 0.0 {
            return Err(AppError::Config(format!(
                "frame_secs must be positive, got {}",
                self.frame_secs
            )));
        }
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return Err(AppError::Config(format!(
                "duration_secs must not be negative, got {}",
                self.duration_secs
            )));
        }
        Ok(())
    }

    /// The configured seed, or a fresh random one.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Number of render frames the run lasts.
    pub fn frame_count(&self) -> u64 {
        (self.duration_secs / self.frame_secs).round() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"seed": 9, "duration_secs": 5.0}"#).unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.duration_secs, 5.0);
        assert_eq!(config.frame_secs, FIXED_DT);
        assert_eq!(config.log_filter, "info");
        assert!(config.quit_on_game_over);
    }

    #[test]
    fn test_validate_rejects_bad_frame_time() {
        let config = AppConfig {
            frame_secs: 0.0,
            ..AppConfig::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        let config = AppConfig {
            duration_secs: f32::NAN,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            frame_secs: f32::INFINITY,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolve_seed_prefers_configured() {
        let config = AppConfig {
            seed: Some(77),
            ..AppConfig::default()
        };
        assert_eq!(config.resolve_seed(), 77);
    }

    #[test]
    fn test_frame_count() {
        let config = AppConfig {
            duration_secs: 10.0,
            frame_secs: 0.5,
            ..AppConfig::default()
        };
        assert_eq!(config.frame_count(), 20);
        assert_eq!(AppConfig::default().frame_count(), 3600);
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join("assault_test_config_load");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();

        let path = dir.join("config.json");
        fs::write(&path, r#"{"duration_secs": 2.5, "realtime": true}"#).unwrap();
        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.duration_secs, 2.5);
        assert!(config.realtime);

        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(AppError::Json(_))));

        assert!(matches!(
            AppConfig::load(&dir.join("missing.json")),
            Err(AppError::Io(_))
        ));

        let _ = fs::remove_dir_all(&dir);
    }
}
