//! Label size estimation.
//!
//! A monospace approximation: every character is one `font_size` wide and a
//! label is one line tall. The layered layout only needs relative sizes to
//! keep vertices apart, so this does not try to match rendered text.

use serde::{Deserialize, Serialize};

pub const DEFAULT_FONT_SIZE: f64 = 14.0;
pub const DEFAULT_BODY_LINE_HEIGHT: f64 = 1.5;

/// Typography inputs for [`estimate_size`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontMetrics {
    pub font_size: f64,
    /// Line height as a multiple of `font_size`.
    pub body_line_height: f64,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            body_line_height: DEFAULT_BODY_LINE_HEIGHT,
        }
    }
}

impl FontMetrics {
    pub fn line_height(&self) -> f64 {
        self.body_line_height * self.font_size
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

pub fn estimate_size(label: &str, font: &FontMetrics) -> Size {
    Size {
        width: label.chars().count() as f64 * font.font_size,
        height: font.line_height(),
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_presentation_geometry.rs"]
mod tests;
