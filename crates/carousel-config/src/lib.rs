//! Tri-carousel configuration system
//!
//! Loads carousel timing, geometry, motion and the item list from
//! `carousel.toml`, with environment variables as overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default file name looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "carousel.toml";

/// Errors raised while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Main configuration structure for the carousel
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Autoplay and animation timing
    pub timing: TimingConfig,
    /// Card geometry used for hit regions
    pub layout: LayoutConfig,
    /// Slot paths, easing and hover emphasis
    pub motion: MotionConfig,
    /// Headless demo runner settings
    pub demo: DemoConfig,
    /// Ordered item list; at least three entries with unique ids
    pub items: Vec<ItemConfig>,
}

/// Timing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Interval between autoplay advances
    pub tick_interval_ms: f32,
    /// Duration of the slot transition run on every index change
    pub transition_ms: f32,
    /// Duration of the hover emphasis on the active card
    pub hover_ms: f32,
    /// Start the autoplay timer on mount
    pub autoplay: bool,
}

/// Card geometry in logical pixels
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub card_width: f32,
    pub card_height: f32,
}

/// A start/end pair of slot offsets, in percent of the card size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotPathConfig {
    pub from: [f32; 2],
    pub to: [f32; 2],
}

/// Motion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Easing name for slot transitions (e.g. "cubic-out", "ease", "linear")
    pub easing: String,
    /// Content scale applied while the active card is hovered
    pub emphasis_scale: f32,
    /// Vertical content offset (percent) applied while the active card is hovered
    pub emphasis_lift_pct: f32,
    pub left: SlotPathConfig,
    pub center: SlotPathConfig,
    pub right: SlotPathConfig,
}

/// Demo runner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Total simulated run time
    pub duration_ms: f32,
    /// Simulated frame step
    pub frame_ms: f32,
    /// Drive a scripted pointer path over the carousel
    pub scripted_pointer: bool,
}

/// One carousel item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemConfig {
    pub id: u32,
    /// URI of the video or image shown on the card
    pub media: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            timing: TimingConfig::default(),
            layout: LayoutConfig::default(),
            motion: MotionConfig::default(),
            demo: DemoConfig::default(),
            items: default_items(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 3000.0,
            transition_ms: 2000.0,
            hover_ms: 500.0,
            autoplay: true,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            card_width: 320.0,
            card_height: 180.0,
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            easing: "cubic-out".to_string(),
            emphasis_scale: 1.4,
            emphasis_lift_pct: -20.0,
            left: SlotPathConfig {
                from: [45.0, 0.0],
                to: [100.0, 20.0],
            },
            center: SlotPathConfig {
                from: [55.0, 0.0],
                to: [-55.0, 0.0],
            },
            right: SlotPathConfig {
                from: [-100.0, 20.0],
                to: [-45.0, 0.0],
            },
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            duration_ms: 15000.0,
            frame_ms: 1000.0 / 60.0,
            scripted_pointer: true,
        }
    }
}

const MEDIA_BASE: &str = "https://cdn.glitch.global/155b1488-cef3-43d5-92c7-da25735e6c95";

fn default_items() -> Vec<ItemConfig> {
    [
        "howToPlayAbduction.webm?v=1725386211408",
        "howToPlayFlexion.webm?v=1725386216617",
        "howToPlayAdduction.webm?v=1725386214468",
    ]
    .iter()
    .enumerate()
    .map(|(id, file)| ItemConfig {
        id: id as u32,
        media: format!("{MEDIA_BASE}/{file}"),
    })
    .collect()
}

fn env_flag(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}

impl CarouselConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `CAROUSEL_CONFIG` (or `carousel.toml` in the current directory).
    ///
    /// A missing file yields the defaults; an unreadable or malformed file is
    /// logged and also falls back to the defaults.
    pub fn load_or_default() -> Self {
        let path = std::env::var("CAROUSEL_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default configuration");
                Self::default()
            }
        }
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) {
        if let Ok(val) = std::env::var("CAROUSEL_TICK_MS") {
            if let Ok(ms) = val.parse::<f32>() {
                self.timing.tick_interval_ms = ms;
            }
        }
        if let Ok(val) = std::env::var("CAROUSEL_TRANSITION_MS") {
            if let Ok(ms) = val.parse::<f32>() {
                self.timing.transition_ms = ms;
            }
        }
        if let Ok(val) = std::env::var("CAROUSEL_HOVER_MS") {
            if let Ok(ms) = val.parse::<f32>() {
                self.timing.hover_ms = ms;
            }
        }
        if let Ok(val) = std::env::var("CAROUSEL_AUTOPLAY") {
            self.timing.autoplay = env_flag(&val);
        }
        if let Ok(easing) = std::env::var("CAROUSEL_EASING") {
            self.motion.easing = easing;
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from the config file (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CarouselConfig::default();
        assert_eq!(config.timing.tick_interval_ms, 3000.0);
        assert_eq!(config.timing.transition_ms, 2000.0);
        assert_eq!(config.timing.hover_ms, 500.0);
        assert!(config.timing.autoplay);
        assert_eq!(config.items.len(), 3);
        assert_eq!(config.motion.easing, "cubic-out");
    }

    #[test]
    fn test_default_items_are_sequential() {
        let config = CarouselConfig::default();
        let ids: Vec<u32> = config.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert!(config.items[1].media.contains("howToPlayFlexion"));
    }

    #[test]
    fn test_toml_serialization() {
        let config = CarouselConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: CarouselConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.items, config.items);
        assert_eq!(parsed.motion.left, config.motion.left);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[timing]
tick_interval_ms = 1000.0

[[items]]
id = 7
media = "a.webm"

[[items]]
id = 8
media = "b.webm"

[[items]]
id = 9
media = "c.webm"

[[items]]
id = 10
media = "d.webm"
"#
        )
        .unwrap();

        let config = CarouselConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.timing.tick_interval_ms, 1000.0);
        assert_eq!(config.timing.transition_ms, 2000.0);
        assert_eq!(config.items.len(), 4);
        assert_eq!(config.items[0].id, 7);
        assert_eq!(config.layout.card_width, 320.0);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CarouselConfig::load_from_file(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[timing\ntick_interval_ms = ").unwrap();
        let err = CarouselConfig::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_merge_with_env() {
        unsafe {
            std::env::set_var("CAROUSEL_TICK_MS", "1500");
            std::env::set_var("CAROUSEL_AUTOPLAY", "false");
            std::env::set_var("CAROUSEL_EASING", "linear");
        }

        let mut config = CarouselConfig::default();
        config.merge_with_env();

        assert_eq!(config.timing.tick_interval_ms, 1500.0);
        assert!(!config.timing.autoplay);
        assert_eq!(config.motion.easing, "linear");

        unsafe {
            std::env::remove_var("CAROUSEL_TICK_MS");
            std::env::remove_var("CAROUSEL_AUTOPLAY");
            std::env::remove_var("CAROUSEL_EASING");
        }
    }
}
