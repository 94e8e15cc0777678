//! Game settings
//!
//! Loaded from an optional JSON file, then overridden from the command line.
//! Missing fields fall back to their defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::{Error, Result};
use crate::sim::Playfield;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Playfield width in cells
    pub width: u16,
    /// Playfield height in cells
    pub height: u16,
    /// Frames per second the host aims for
    pub target_fps: u32,
    /// Fixed RNG seed; random when unset
    pub seed: Option<u64>,
    /// Draw models edge to edge through the wrap instead of clipping them
    pub wrap_models: bool,
    /// How long a key stays held after its last repeat, on terminals that
    /// never report releases
    pub held_grace_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            target_fps: 60,
            seed: None,
            wrap_models: false,
            held_grace_ms: 300,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&json).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the host cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(Error::InvalidSetting {
                name: "width",
                reason: "must be at least 1".into(),
            });
        }
        if self.height == 0 {
            return Err(Error::InvalidSetting {
                name: "height",
                reason: "must be at least 1".into(),
            });
        }
        if !(1..=1000).contains(&self.target_fps) {
            return Err(Error::InvalidSetting {
                name: "target_fps",
                reason: format!("{} is outside 1..=1000", self.target_fps),
            });
        }
        Ok(())
    }

    /// Time budget for one frame
    pub fn frame_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps.max(1) as f64)
    }

    pub fn held_grace(&self) -> Duration {
        Duration::from_millis(self.held_grace_ms)
    }

    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.width as f32, self.height as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!((s.width, s.height), (160, 100));
        assert_eq!(s.target_fps, 60);
        assert!(s.seed.is_none());
        assert!(!s.wrap_models);
        assert!(s.validate().is_ok());
        assert_eq!(s.playfield(), Playfield::new(160.0, 100.0));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s: Settings = serde_json::from_str(r#"{"width": 80, "seed": 7}"#).unwrap();
        assert_eq!(s.width, 80);
        assert_eq!(s.height, 100);
        assert_eq!(s.seed, Some(7));
    }

    #[test]
    fn test_validate_rejects_zero_sizes() {
        let s = Settings {
            width: 0,
            ..Settings::default()
        };
        assert!(matches!(
            s.validate(),
            Err(Error::InvalidSetting { name: "width", .. })
        ));

        let s = Settings {
            height: 0,
            ..Settings::default()
        };
        assert!(matches!(
            s.validate(),
            Err(Error::InvalidSetting { name: "height", .. })
        ));

        let s = Settings {
            target_fps: 0,
            ..Settings::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!(
            "asteroid-console-settings-{}.json",
            std::process::id()
        ));
        let s = Settings {
            width: 120,
            wrap_models: true,
            seed: Some(42),
            ..Settings::default()
        };
        s.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, s);
    }

    #[test]
    fn test_to_json_round_trips() {
        let s = Settings {
            held_grace_ms: 150,
            ..Settings::default()
        };
        let json = s.to_json().unwrap();
        assert!(json.contains("\"held_grace_ms\": 150"));
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_save_failure_is_reported() {
        let path = std::env::temp_dir()
            .join(format!("asteroid-console-missing-{}", std::process::id()))
            .join("settings.json");
        let err = Settings::default().save(&path).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_load_reports_bad_json() {
        let path = std::env::temp_dir().join(format!(
            "asteroid-console-bad-{}.json",
            std::process::id()
        ));
        fs::write(&path, "{ not json").unwrap();
        let err = Settings::load(&path).unwrap_err();
        let _ = fs::remove_file(&path);
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_frame_period() {
        let s = Settings {
            target_fps: 50,
            ..Settings::default()
        };
        assert!((s.frame_period().as_secs_f64() - 0.02).abs() < 1e-9);
    }
}
