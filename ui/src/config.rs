//! Page configuration, bundled as `assets/landing.json`.

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::i18n::{ConfiguredSource, EmbeddedSource, HttpSource, LanguageCode};

const BUNDLED_CONFIG: &str = include_str!("../assets/landing.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid landing config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
    #[error("{field} must be between 0 and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        max: i64,
    },
}

/// Longest launch countdown accepted from config (ten years).
pub const MAX_COUNTDOWN_OFFSET_SECS: i64 = 10 * 365 * 24 * 60 * 60;

/// Where the page fetches translation resources from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResourceLocation {
    /// Files compiled into the bundle.
    #[default]
    Embedded,
    /// `{base_url}/lang/<code>.json`.
    Remote { base_url: String },
}

impl ResourceLocation {
    pub fn source(&self) -> ConfiguredSource {
        match self {
            Self::Embedded => ConfiguredSource::Embedded(EmbeddedSource),
            Self::Remote { base_url } => {
                ConfiguredSource::Http(HttpSource::new(base_url.clone()))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Used when none of the visitor's preferred languages is supported.
    pub default_language: LanguageCode,
    pub resources: ResourceLocation,
    pub slide_interval_ms: u64,
    /// Delay between fading filtered-out gallery items and collapsing them.
    pub gallery_fade_ms: u64,
    /// Launch deadline, measured from the start of the page session.
    pub countdown_offset_secs: i64,
    pub countdown_tick_ms: u64,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            default_language: LanguageCode::En,
            resources: ResourceLocation::Embedded,
            slide_interval_ms: 5_000,
            gallery_fade_ms: 300,
            countdown_offset_secs: 30 * 24 * 60 * 60,
            countdown_tick_ms: 1_000,
        }
    }
}

impl LandingConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let non_zero = [
            ("slide_interval_ms", self.slide_interval_ms),
            ("countdown_tick_ms", self.countdown_tick_ms),
        ];
        for (field, value) in non_zero {
            if value == 0 {
                return Err(ConfigError::Zero { field });
            }
        }
        if !(0..=MAX_COUNTDOWN_OFFSET_SECS).contains(&self.countdown_offset_secs) {
            return Err(ConfigError::OutOfRange {
                field: "countdown_offset_secs",
                value: self.countdown_offset_secs,
                max: MAX_COUNTDOWN_OFFSET_SECS,
            });
        }
        Ok(())
    }
}

static CONFIG: Lazy<LandingConfig> = Lazy::new(|| {
    LandingConfig::from_json(BUNDLED_CONFIG).unwrap_or_else(|err| {
        warn!(error = %err, "bundled config rejected; using defaults");
        LandingConfig::default()
    })
});

/// The bundled configuration, parsed once.
pub fn config() -> &'static LandingConfig {
    &CONFIG
}
