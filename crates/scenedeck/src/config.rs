use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::engine::PresentationOptions;
use crate::engine::chrome::DEFAULT_HINT_DELAY;
use crate::engine::clock::{DEFAULT_MAX_DELTA, DEFAULT_SPEED};
use crate::engine::input::DEFAULT_SWIPE_THRESHOLD;
use crate::engine::transition::{
    DEFAULT_FADE_IN_FRAMES, DEFAULT_FADE_OUT_FRAMES, TransitionTimings,
};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "scenedeck";

/// Upper bound accepted by `config set` for the hint delay.
const MAX_HINT_DELAY_SECS: f32 = 3600.0;

pub const KEYS: &[&str] = &[
    "defaults.theme",
    "defaults.start_slide",
    "transition.fade_out_frames",
    "transition.fade_in_frames",
    "input.swipe_threshold",
    "chrome.hint_delay_secs",
    "clock.speed",
    "clock.max_delta",
    "seed",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<TransitionConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<InputConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chrome: Option<ChromeConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock: Option<ClockConfig>,

    /// Fixed seed for scene content. Random per launch when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// 1-indexed, like `--slide`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_slide: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransitionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_out_frames: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_in_frames: Option<f32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_threshold: Option<f32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChromeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint_delay_secs: Option<f32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClockConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_delta: Option<f32>,
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub presentation: PresentationOptions,
    pub swipe_threshold: f32,
    pub speed: f32,
    pub max_delta: f32,
    pub theme: String,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `scenedeck config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                log::debug!("using default config: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# scenedeck configuration\n{yaml}");
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn start_slide(&self) -> Option<usize> {
        self.defaults.as_ref().and_then(|d| d.start_slide)
    }

    pub fn engine_settings(&self) -> EngineSettings {
        let transition = self.transition.clone().unwrap_or_default();
        let input = self.input.clone().unwrap_or_default();
        let chrome = self.chrome.clone().unwrap_or_default();
        let clock = self.clock.clone().unwrap_or_default();

        // Hand-edited files can hold values `set` would reject.
        let hint_delay = chrome
            .hint_delay_secs
            .and_then(|secs| Duration::try_from_secs_f32(secs).ok())
            .unwrap_or(DEFAULT_HINT_DELAY);

        EngineSettings {
            presentation: PresentationOptions {
                timings: TransitionTimings {
                    fade_out_frames: non_negative_or(
                        transition.fade_out_frames,
                        DEFAULT_FADE_OUT_FRAMES,
                    ),
                    fade_in_frames: non_negative_or(
                        transition.fade_in_frames,
                        DEFAULT_FADE_IN_FRAMES,
                    ),
                },
                hint_delay,
                seed: self.seed,
            },
            swipe_threshold: non_negative_or(input.swipe_threshold, DEFAULT_SWIPE_THRESHOLD),
            speed: positive_or(clock.speed, DEFAULT_SPEED),
            max_delta: positive_or(clock.max_delta, DEFAULT_MAX_DELTA),
            theme: self
                .defaults
                .as_ref()
                .and_then(|d| d.theme.clone())
                .unwrap_or_else(|| "dark".to_string()),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.theme" => {
                match value {
                    "light" | "dark" => {}
                    _ => anyhow::bail!("Invalid theme: {value}. Must be 'light' or 'dark'."),
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .theme = Some(value.to_string());
            }
            "defaults.start_slide" => {
                let slide = match value.parse::<usize>() {
                    Ok(n) if n >= 1 => n,
                    _ => anyhow::bail!(
                        "Invalid start_slide: {value}. Must be a slide number starting at 1."
                    ),
                };
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .start_slide = Some(slide);
            }
            "transition.fade_out_frames" => {
                self.transition
                    .get_or_insert_with(TransitionConfig::default)
                    .fade_out_frames = Some(parse_non_negative(key, value)?);
            }
            "transition.fade_in_frames" => {
                self.transition
                    .get_or_insert_with(TransitionConfig::default)
                    .fade_in_frames = Some(parse_non_negative(key, value)?);
            }
            "input.swipe_threshold" => {
                self.input
                    .get_or_insert_with(InputConfig::default)
                    .swipe_threshold = Some(parse_non_negative(key, value)?);
            }
            "chrome.hint_delay_secs" => {
                let secs = parse_non_negative(key, value)?;
                if secs > MAX_HINT_DELAY_SECS {
                    anyhow::bail!(
                        "Invalid {key}: {value}. Must be at most {MAX_HINT_DELAY_SECS} seconds."
                    );
                }
                self.chrome
                    .get_or_insert_with(ChromeConfig::default)
                    .hint_delay_secs = Some(secs);
            }
            "clock.speed" => {
                self.clock.get_or_insert_with(ClockConfig::default).speed =
                    Some(parse_positive(key, value)?);
            }
            "clock.max_delta" => {
                self.clock
                    .get_or_insert_with(ClockConfig::default)
                    .max_delta = Some(parse_positive(key, value)?);
            }
            "seed" => {
                if value == "none" {
                    self.seed = None;
                } else {
                    let seed = value.parse::<u64>().map_err(|_| {
                        anyhow::anyhow!("Invalid seed: {value}. Must be an integer or 'none'.")
                    })?;
                    self.seed = Some(seed);
                }
            }
            _ => anyhow::bail!("Unknown config key: {key}. Valid keys: {}", KEYS.join(", ")),
        }
        Ok(())
    }
}

fn parse_non_negative(key: &str, value: &str) -> Result<f32> {
    match value.parse::<f32>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => anyhow::bail!("Invalid {key}: {value}. Must be a non-negative number."),
    }
}

fn parse_positive(key: &str, value: &str) -> Result<f32> {
    match value.parse::<f32>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => anyhow::bail!("Invalid {key}: {value}. Must be greater than 0."),
    }
}

fn non_negative_or(value: Option<f32>, default: f32) -> f32 {
    value.filter(|v| v.is_finite() && *v >= 0.0).unwrap_or(default)
}

fn positive_or(value: Option<f32>, default: f32) -> f32 {
    value.filter(|v| v.is_finite() && *v > 0.0).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_resolves_to_defaults() {
        let settings = Config::default().engine_settings();
        assert_eq!(settings.presentation.timings.fade_out_frames, 12.0);
        assert_eq!(settings.presentation.timings.fade_in_frames, 15.0);
        assert_eq!(settings.presentation.hint_delay, Duration::from_secs(5));
        assert_eq!(settings.presentation.seed, None);
        assert_eq!(settings.swipe_threshold, 60.0);
        assert_eq!(settings.speed, 1.0);
        assert_eq!(settings.max_delta, 6.0);
        assert_eq!(settings.theme, "dark");
    }

    #[test]
    fn parses_yaml() {
        let yaml = "\
defaults:
  theme: light
  start_slide: 4
transition:
  fade_out_frames: 8
input:
  swipe_threshold: 90
seed: 7
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        let settings = config.engine_settings();
        assert_eq!(config.start_slide(), Some(4));
        assert_eq!(settings.theme, "light");
        assert_eq!(settings.presentation.timings.fade_out_frames, 8.0);
        assert_eq!(settings.presentation.timings.fade_in_frames, 15.0);
        assert_eq!(settings.swipe_threshold, 90.0);
        assert_eq!(settings.presentation.seed, Some(7));
    }

    #[test]
    fn set_validates_values() {
        let mut config = Config::default();
        assert!(config.set("defaults.theme", "neon").is_err());
        assert!(config.set("defaults.start_slide", "0").is_err());
        assert!(config.set("transition.fade_in_frames", "-3").is_err());
        assert!(config.set("clock.speed", "0").is_err());
        assert!(config.set("seed", "abc").is_err());
        assert!(config.set("nope", "1").is_err());

        config.set("defaults.theme", "light").unwrap();
        config.set("transition.fade_in_frames", "20").unwrap();
        config.set("seed", "99").unwrap();
        let settings = config.engine_settings();
        assert_eq!(settings.theme, "light");
        assert_eq!(settings.presentation.timings.fade_in_frames, 20.0);
        assert_eq!(settings.presentation.seed, Some(99));

        config.set("seed", "none").unwrap();
        assert_eq!(config.seed, None);
    }

    #[test]
    fn oversized_hint_delay_is_rejected() {
        let mut config = Config::default();
        assert!(config.set("chrome.hint_delay_secs", "1e30").is_err());
        config.set("chrome.hint_delay_secs", "12").unwrap();
        assert_eq!(
            config.engine_settings().presentation.hint_delay,
            Duration::from_secs(12)
        );
    }

    #[test]
    fn unrepresentable_hint_delay_in_file_falls_back() {
        for raw in ["1e30", ".inf", ".nan", "-2"] {
            let yaml = format!("chrome:\n  hint_delay_secs: {raw}\n");
            let config: Config = serde_yaml::from_str(&yaml).unwrap();
            assert_eq!(
                config.engine_settings().presentation.hint_delay,
                DEFAULT_HINT_DELAY,
                "{raw}"
            );
        }
    }

    #[test]
    fn clock_values_must_be_positive() {
        let mut config = Config::default();
        assert!(config.set("clock.max_delta", "0").is_err());
        assert!(config.set("clock.max_delta", "-1").is_err());
        assert!(config.set("clock.speed", "inf").is_err());
        config.set("clock.max_delta", "3").unwrap();
        assert_eq!(config.engine_settings().max_delta, 3.0);
    }

    #[test]
    fn stalled_clock_values_in_file_fall_back() {
        let yaml = "clock:\n  speed: 0\n  max_delta: -4\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        let settings = config.engine_settings();
        assert_eq!(settings.speed, DEFAULT_SPEED);
        assert_eq!(settings.max_delta, DEFAULT_MAX_DELTA);
    }

    #[test]
    fn zero_max_delta_in_file_still_lets_the_deck_settle() {
        use crate::engine::{FrameClock, Presentation};
        use std::time::Instant;

        let config: Config = serde_yaml::from_str("clock:\n  max_delta: 0\n").unwrap();
        let settings = config.engine_settings();
        let mut clock = FrameClock::new(settings.speed, settings.max_delta);
        let mut presentation =
            Presentation::new(crate::slides::registry().unwrap(), settings.presentation);
        presentation.set_viewport(1280.0, 720.0);
        presentation.initialize(0);

        let start = Instant::now();
        for i in 0..600 {
            presentation.tick(clock.tick(start + Duration::from_millis(16 * i)));
        }
        assert!(!presentation.is_transitioning());
        let scene = presentation.active_scene().expect("first slide mounted");
        assert_eq!(scene.root().opacity(), 1.0);
    }

    #[test]
    fn save_and_load_round_trip_through_file() {
        let dir = std::env::temp_dir().join(format!("scenedeck-config-{}", std::process::id()));
        let path = dir.join(FILENAME);
        let mut config = Config::default();
        config.set("input.swipe_threshold", "45").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.engine_settings().swipe_threshold, 45.0);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_has_helpful_error() {
        let err = Config::load_from(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(err.to_string().contains("No config found"));
    }
}
