//! Icon themes and palettes
//!
//! Every spawned icon gets one fill/stroke pair picked uniformly from the
//! palette. The renderer tints the icon art with it: the stroke color fills
//! the outline image, the fill color fills the foreground image.

use bloom_core::{Color, RandomSource};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Fill colors of the default palette
pub const DEFAULT_FILLS: [u32; 9] = [
    0xe66f5e, 0x6a69a0, 0x81cc88, 0xfd3870, 0x6ecff6, 0xc0aaf7, 0xf7603b, 0x39d3d3, 0xfed301,
];

/// Stroke color shared by every default theme (white, 80% opaque)
pub const DEFAULT_STROKE: Color = Color::white(1.0, 0.8);

/// Fill and stroke colors for one icon instance
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IconTheme {
    pub fill: Color,
    pub stroke: Color,
}

impl IconTheme {
    pub const fn new(fill: Color, stroke: Color) -> Self {
        Self { fill, stroke }
    }
}

/// Names of the two images an icon is drawn from
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconArt {
    /// Foreground image, tinted with the theme fill
    pub fill_image: String,
    /// Outline image drawn underneath, tinted with the theme stroke
    pub stroke_image: String,
}

impl IconArt {
    pub fn new(fill_image: impl Into<String>, stroke_image: impl Into<String>) -> Self {
        Self {
            fill_image: fill_image.into(),
            stroke_image: stroke_image.into(),
        }
    }

    /// The heart pair shipped with the widget
    pub fn heart() -> Self {
        Self::new("heart", "heartBorder")
    }
}

impl Default for IconArt {
    fn default() -> Self {
        Self::heart()
    }
}

/// Non-empty list of themes to pick from
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    themes: Vec<IconTheme>,
}

impl Palette {
    /// Build a palette, rejecting an empty list
    pub fn new(themes: Vec<IconTheme>) -> Result<Self> {
        if themes.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self { themes })
    }

    /// Build a palette from `(fill, stroke)` hex literals
    pub fn from_hex<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<Self> {
        let themes = entries
            .into_iter()
            .enumerate()
            .map(|(index, (fill, stroke))| {
                let parse = |literal: &str| {
                    Color::parse_hex(literal).map_err(|source| ConfigError::Color { index, source })
                };
                Ok(IconTheme::new(parse(fill)?, parse(stroke)?))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(themes)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Always false, palettes are never empty
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    pub fn themes(&self) -> &[IconTheme] {
        &self.themes
    }

    pub fn get(&self, index: usize) -> Option<&IconTheme> {
        self.themes.get(index)
    }

    /// Pick a theme uniformly at random (one draw), returning its index too
    pub fn pick<R: RandomSource + ?Sized>(&self, rng: &mut R) -> (usize, IconTheme) {
        let index = rng.index(self.themes.len());
        (index, self.themes[index])
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            themes: DEFAULT_FILLS
                .iter()
                .map(|&fill| IconTheme::new(Color::from_hex(fill), DEFAULT_STROKE))
                .collect(),
        }
    }
}
