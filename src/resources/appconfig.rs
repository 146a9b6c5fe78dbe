//! Application configuration resource.
//!
//! Holds the swipe detector settings, the default countdown parameters and
//! the demo window settings, loaded from an INI file. Defaults are safe to
//! run with when the file is missing.
//!
//! # Configuration File Format
//!
//! ```ini
//! [swipe]
//! enabled = true
//! detect_only_after_release = false
//! min_distance = 20
//!
//! [timer]
//! duration = 10
//! interval = 0.1
//!
//! [window]
//! width = 800
//! height = 600
//! target_fps = 60
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::components::countdown::{CountdownTimer, DEFAULT_INTERVAL, MIN_INTERVAL};
use crate::resources::swipedetector::{DEFAULT_MIN_DISTANCE, SwipeSettings};

const DEFAULT_TIMER_DURATION: f32 = 10.0;
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_CONFIG_PATH: &str = "./swipetick.ini";

/// Application configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct AppConfig {
    /// Swipe detection on/off.
    pub swipe_enabled: bool,
    /// Only report swipes on release.
    pub detect_only_after_release: bool,
    /// Minimum swipe distance in pixels.
    pub min_distance: f32,
    /// Countdown duration in seconds.
    pub timer_duration: f32,
    /// Seconds between countdown updates.
    pub timer_interval: f32,
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self {
            swipe_enabled: true,
            detect_only_after_release: false,
            min_distance: DEFAULT_MIN_DISTANCE,
            timer_duration: DEFAULT_TIMER_DURATION,
            timer_interval: DEFAULT_INTERVAL,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a default configuration bound to a custom file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing or invalid values keep their current values.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);
        info!(
            "Loaded config from {:?}: swipe enabled={} release_only={} min_distance={}, timer {}s/{}s",
            self.config_path,
            self.swipe_enabled,
            self.detect_only_after_release,
            self.min_distance,
            self.timer_duration,
            self.timer_interval
        );
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [swipe] section
        if let Some(enabled) = config.getbool("swipe", "enabled").ok().flatten() {
            self.swipe_enabled = enabled;
        }
        if let Some(release) = config
            .getbool("swipe", "detect_only_after_release")
            .ok()
            .flatten()
        {
            self.detect_only_after_release = release;
        }
        if let Some(distance) = config.getfloat("swipe", "min_distance").ok().flatten() {
            self.set_min_distance(distance as f32);
        }

        // [timer] section
        if let Some(duration) = config.getfloat("timer", "duration").ok().flatten() {
            self.set_timer_duration(duration as f32);
        }
        if let Some(interval) = config.getfloat("timer", "interval").ok().flatten() {
            self.set_timer_interval(interval as f32);
        }

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
    }

    /// Set the minimum swipe distance. Non-finite or negative values are
    /// ignored with a warning; returns whether the value was taken.
    pub fn set_min_distance(&mut self, distance: f32) -> bool {
        if distance.is_finite() && distance >= 0.0 {
            self.min_distance = distance;
            true
        } else {
            warn!("Ignoring invalid swipe.min_distance = {}", distance);
            false
        }
    }

    /// Set the countdown duration, rejecting non-finite or negative values.
    pub fn set_timer_duration(&mut self, duration: f32) -> bool {
        if duration.is_finite() && duration >= 0.0 {
            self.timer_duration = duration;
            true
        } else {
            warn!("Ignoring invalid timer.duration = {}", duration);
            false
        }
    }

    /// Set the countdown interval, rejecting anything below [`MIN_INTERVAL`].
    pub fn set_timer_interval(&mut self, interval: f32) -> bool {
        if interval.is_finite() && interval >= MIN_INTERVAL {
            self.timer_interval = interval;
            true
        } else {
            warn!("Ignoring invalid timer.interval = {}", interval);
            false
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [swipe] section
        config.set("swipe", "enabled", Some(self.swipe_enabled.to_string()));
        config.set(
            "swipe",
            "detect_only_after_release",
            Some(self.detect_only_after_release.to_string()),
        );
        config.set("swipe", "min_distance", Some(self.min_distance.to_string()));

        // [timer] section
        config.set("timer", "duration", Some(self.timer_duration.to_string()));
        config.set("timer", "interval", Some(self.timer_interval.to_string()));

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Swipe detector settings described by this configuration.
    pub fn swipe_settings(&self) -> SwipeSettings {
        SwipeSettings {
            enabled: self.swipe_enabled,
            detect_only_after_release: self.detect_only_after_release,
            min_distance: self.min_distance,
        }
    }

    /// An idle countdown timer with the configured duration and interval.
    pub fn countdown_timer(&self) -> CountdownTimer {
        CountdownTimer::new(self.timer_duration, self.timer_interval)
    }

    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::new();
        assert!(config.swipe_enabled);
        assert!(!config.detect_only_after_release);
        assert_eq!(config.min_distance, DEFAULT_MIN_DISTANCE);
        assert_eq!(config.timer_interval, DEFAULT_INTERVAL);
        assert_eq!(config.window_size(), (800, 600));
        assert_eq!(config.swipe_settings(), SwipeSettings::default());
    }

    #[test]
    fn test_load_from_str_overrides_present_keys() {
        let mut config = AppConfig::new();
        config
            .load_from_str(
                "[swipe]\nenabled = false\nmin_distance = 42.5\n\n[timer]\nduration = 3\n",
            )
            .unwrap();
        assert!(!config.swipe_enabled);
        assert_eq!(config.min_distance, 42.5);
        assert_eq!(config.timer_duration, 3.0);
        // untouched
        assert!(!config.detect_only_after_release);
        assert_eq!(config.timer_interval, DEFAULT_INTERVAL);
        assert_eq!(config.target_fps, DEFAULT_TARGET_FPS);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let mut config = AppConfig::new();
        config
            .load_from_str(
                "[swipe]\nmin_distance = -5\nenabled = maybe\n[timer]\ninterval = 0\nduration = abc\n",
            )
            .unwrap();
        assert!(config.swipe_enabled);
        assert_eq!(config.min_distance, DEFAULT_MIN_DISTANCE);
        assert_eq!(config.timer_interval, DEFAULT_INTERVAL);
        assert_eq!(config.timer_duration, DEFAULT_TIMER_DURATION);
    }

    #[test]
    fn test_missing_file_is_error() {
        let mut config = AppConfig::with_path("/nonexistent/dir/swipetick.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.min_distance, DEFAULT_MIN_DISTANCE);
    }

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join("swipetick_config_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("roundtrip.ini");

        let mut saved = AppConfig::with_path(&path);
        saved.detect_only_after_release = true;
        saved.min_distance = 35.0;
        saved.timer_duration = 2.5;
        saved.timer_interval = 0.25;
        saved.save_to_file().unwrap();

        let mut loaded = AppConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert!(loaded.detect_only_after_release);
        assert_eq!(loaded.min_distance, 35.0);
        assert_eq!(loaded.timer_duration, 2.5);
        assert_eq!(loaded.timer_interval, 0.25);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_setters_reject_non_finite_values() {
        let mut config = AppConfig::new();
        assert!(!config.set_timer_duration(f32::NAN));
        assert!(!config.set_timer_duration(-1.0));
        assert!(!config.set_timer_interval(f32::INFINITY));
        assert!(!config.set_timer_interval(0.0));
        assert!(!config.set_min_distance(f32::NAN));
        assert_eq!(config.timer_duration, DEFAULT_TIMER_DURATION);
        assert_eq!(config.timer_interval, DEFAULT_INTERVAL);
        assert_eq!(config.min_distance, DEFAULT_MIN_DISTANCE);

        assert!(config.set_timer_duration(3.0));
        assert!(config.set_timer_interval(0.2));
        assert!(config.set_min_distance(40.0));
        assert_eq!(config.timer_duration, 3.0);
        assert_eq!(config.timer_interval, 0.2);
        assert_eq!(config.min_distance, 40.0);
    }

    #[test]
    fn test_countdown_timer_from_config() {
        let mut config = AppConfig::new();
        config.timer_duration = 4.0;
        config.timer_interval = 0.5;
        let timer = config.countdown_timer();
        assert_eq!(timer.duration(), 4.0);
        assert_eq!(timer.interval(), 0.5);
        assert!(!timer.is_running());
    }
}
