//! Bloom configuration file handling
//!
//! One `bloom.toml` parameterizes the whole effect: icon art and size,
//! fountain placement, animation timing, gesture thresholds and the palette.
//! Every field has a default, so an empty file yields the hearts preset.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::theme::{IconArt, Palette, DEFAULT_FILLS, DEFAULT_STROKE};

/// Complete configuration for a fountain of floating icons
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BloomConfig {
    #[serde(default)]
    pub icon: IconConfig,
    #[serde(default)]
    pub fountain: FountainConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default = "default_palette")]
    pub palette: Vec<ThemeEntry>,
}

/// Icon size and art
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct IconConfig {
    /// Side length of the square icon, in points
    #[serde(default = "default_icon_size")]
    pub size: f32,
    #[serde(default = "default_fill_image")]
    pub fill_image: String,
    #[serde(default = "default_stroke_image")]
    pub stroke_image: String,
}

fn default_icon_size() -> f32 {
    36.0
}

fn default_fill_image() -> String {
    "heart".to_string()
}

fn default_stroke_image() -> String {
    "heartBorder".to_string()
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            size: default_icon_size(),
            fill_image: default_fill_image(),
            stroke_image: default_stroke_image(),
        }
    }
}

impl IconConfig {
    pub fn art(&self) -> IconArt {
        IconArt::new(self.fill_image.clone(), self.stroke_image.clone())
    }
}

/// Placement of the fountain point relative to the bottom-left corner
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FountainConfig {
    /// Gap between the left edge and the icon's left edge
    #[serde(default = "default_margin_x")]
    pub margin_x: f32,
    /// Gap between the bottom edge and the icon's bottom edge
    #[serde(default = "default_margin_bottom")]
    pub margin_bottom: f32,
}

fn default_margin_x() -> f32 {
    20.0
}

fn default_margin_bottom() -> f32 {
    10.0
}

impl Default for FountainConfig {
    fn default() -> Self {
        Self {
            margin_x: default_margin_x(),
            margin_bottom: default_margin_bottom(),
        }
    }
}

/// Animation durations, in milliseconds
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct TimingConfig {
    /// Scale/fade-in duration
    #[serde(default = "default_bloom_ms")]
    pub bloom_ms: f32,
    /// Base travel duration before the path-height adjustment
    #[serde(default = "default_travel_ms")]
    pub travel_ms: f32,
    /// Added travel time per container height of path bounds
    #[serde(default = "default_adjustment_ms")]
    pub adjustment_ms: f32,
}

fn default_bloom_ms() -> f32 {
    500.0
}

fn default_travel_ms() -> f32 {
    4000.0
}

fn default_adjustment_ms() -> f32 {
    4000.0
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            bloom_ms: default_bloom_ms(),
            travel_ms: default_travel_ms(),
            adjustment_ms: default_adjustment_ms(),
        }
    }
}

/// Gesture thresholds
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct GestureConfig {
    /// Spawn interval while a long press is held
    #[serde(default = "default_burst_interval_ms")]
    pub burst_interval_ms: f32,
    /// Hold time before a press becomes a long press
    #[serde(default = "default_min_press_ms")]
    pub min_press_ms: f32,
    /// Finger travel, in points, that fails a pending tap or long press
    #[serde(default = "default_allowable_movement")]
    pub allowable_movement: f32,
}

fn default_burst_interval_ms() -> f32 {
    100.0
}

fn default_min_press_ms() -> f32 {
    200.0
}

fn default_allowable_movement() -> f32 {
    10.0
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            burst_interval_ms: default_burst_interval_ms(),
            min_press_ms: default_min_press_ms(),
            allowable_movement: default_allowable_movement(),
        }
    }
}

/// One palette entry as written in the config file
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeEntry {
    pub fill: String,
    pub stroke: String,
}

fn default_palette() -> Vec<ThemeEntry> {
    DEFAULT_FILLS
        .iter()
        .map(|fill| ThemeEntry {
            fill: format!("#{:06x}", fill),
            stroke: DEFAULT_STROKE.to_hex_string(),
        })
        .collect()
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self::hearts()
    }
}

impl BloomConfig {
    /// Floating hearts: icons sit 10pt above the bottom edge
    pub fn hearts() -> Self {
        Self {
            icon: IconConfig::default(),
            fountain: FountainConfig::default(),
            timing: TimingConfig::default(),
            gesture: GestureConfig::default(),
            palette: default_palette(),
        }
    }

    /// Reactions and generic floating views: icons sit on the bottom edge
    pub fn reactions() -> Self {
        Self {
            fountain: FountainConfig {
                margin_bottom: 0.0,
                ..FountainConfig::default()
            },
            ..Self::hearts()
        }
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: BloomConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check ranges and parse the palette
    pub fn validate(&self) -> Result<()> {
        if !(self.icon.size > 0.0 && self.icon.size.is_finite()) {
            return Err(ConfigError::InvalidIconSize(self.icon.size));
        }

        let non_negative = [
            ("timing.bloom_ms", self.timing.bloom_ms),
            ("timing.travel_ms", self.timing.travel_ms),
            ("timing.adjustment_ms", self.timing.adjustment_ms),
            ("gesture.min_press_ms", self.gesture.min_press_ms),
            ("gesture.allowable_movement", self.gesture.allowable_movement),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(ConfigError::InvalidValue {
                    field,
                    value,
                    reason: "must be a finite, non-negative number",
                });
            }
        }

        let interval = self.gesture.burst_interval_ms;
        if !(interval > 0.0 && interval.is_finite()) {
            return Err(ConfigError::InvalidValue {
                field: "gesture.burst_interval_ms",
                value: interval,
                reason: "must be a finite, positive number",
            });
        }

        self.build_palette().map(|_| ())
    }

    /// Parse the palette entries
    pub fn build_palette(&self) -> Result<Palette> {
        Palette::from_hex(
            self.palette
                .iter()
                .map(|entry| (entry.fill.as_str(), entry.stroke.as_str())),
        )
    }
}
