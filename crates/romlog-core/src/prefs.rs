//! User preferences
//!
//! Loaded from `~/.romlog/config.toml`. A missing file or missing fields
//! fall back to defaults; a malformed file is reported and ignored rather
//! than treated as fatal.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::trail;
use crate::paths;

/// Persisted user preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Theme name
    pub theme: String,
    pub trail: TrailPrefs,
}

/// Pointer trail preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailPrefs {
    /// Draw the pointer marker and followers at all
    pub enabled: bool,
    /// Follower dots behind the primary marker
    pub followers: usize,
    /// Smoothing factor per tick, kept inside (0, 1)
    pub factor: f64,
}

impl Default for TrailPrefs {
    fn default() -> Self {
        Self {
            enabled: true,
            followers: trail::FOLLOWER_DOTS,
            factor: trail::LERP_FACTOR,
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: "midnight".to_string(),
            trail: TrailPrefs::default(),
        }
    }
}

impl Preferences {
    /// Load from the default location
    pub fn load() -> Self {
        Self::load_from(&paths::prefs_file())
    }

    /// Load from an explicit path; every failure degrades to defaults
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => match toml::from_str::<Preferences>(&raw) {
                Ok(prefs) => prefs.sanitized(),
                Err(e) => {
                    warn!(error = %e, path = %path.display(), "malformed preferences, using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Persist to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&paths::prefs_file())
    }

    /// Persist to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }
        let raw = toml::to_string_pretty(self).context("serializing preferences")?;
        std::fs::write(path, raw).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Clamp out-of-range values instead of failing
    fn sanitized(mut self) -> Self {
        if !(self.trail.factor > 0.0 && self.trail.factor < 1.0) {
            warn!(
                factor = self.trail.factor,
                "trail factor outside (0, 1), using default"
            );
            self.trail.factor = trail::LERP_FACTOR;
        }
        self.trail.followers = self.trail.followers.min(trail::MAX_FOLLOWERS);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let prefs = Preferences::load_from(Path::new("/nonexistent/config.toml"));
        assert_eq!(prefs.theme, "midnight");
        assert_eq!(prefs.trail.followers, trail::FOLLOWER_DOTS);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "theme = \"paper\"\n").unwrap();

        let prefs = Preferences::load_from(&path);
        assert_eq!(prefs.theme, "paper");
        assert!((prefs.trail.factor - trail::LERP_FACTOR).abs() < f64::EPSILON);
    }

    #[test]
    fn test_malformed_file_degrades_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "theme = [broken\n").unwrap();

        let prefs = Preferences::load_from(&path);
        assert_eq!(prefs.theme, "midnight");
    }

    #[test]
    fn test_out_of_range_factor_is_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[trail]\nfactor = 1.5\n").unwrap();

        let prefs = Preferences::load_from(&path);
        assert!((prefs.trail.factor - trail::LERP_FACTOR).abs() < f64::EPSILON);
    }

    #[test]
    fn test_follower_count_is_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[trail]\nfollowers = 50\n").unwrap();

        let prefs = Preferences::load_from(&path);
        assert_eq!(prefs.trail.followers, trail::MAX_FOLLOWERS);
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut prefs = Preferences::default();
        prefs.theme = "terminal".to_string();
        prefs.trail.followers = 5;
        prefs.save_to(&path).unwrap();

        let loaded = Preferences::load_from(&path);
        assert_eq!(loaded.theme, "terminal");
        assert_eq!(loaded.trail.followers, 5);
    }
}
