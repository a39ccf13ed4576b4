//! Configuration for the comparison engine.
//!
//! `CompareConfig` centralizes all algorithm thresholds and behavioral knobs
//! to avoid hardcoded constants scattered throughout the codebase.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Baseline-y tolerance (layout units) for clustering text runs into lines.
    pub line_y_tolerance: f32,
    /// Maximum fingerprint length in characters.
    pub max_fingerprint_chars: usize,
    /// Minimum similarity for an alignment pairing to count as a content match.
    pub match_threshold: f64,
    /// RGB channel floor above which a pixel is treated as white.
    pub white_threshold: u8,
    /// Scale passed to the external renderer when rasterizing pages.
    pub render_scale: f32,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            line_y_tolerance: 3.0,
            max_fingerprint_chars: 800,
            match_threshold: 0.5,
            white_threshold: 250,
            render_scale: 1.5,
        }
    }
}

impl CompareConfig {
    pub fn builder() -> CompareConfigBuilder {
        CompareConfigBuilder {
            inner: CompareConfig::default(),
        }
    }
}

pub struct CompareConfigBuilder {
    inner: CompareConfig,
}

impl CompareConfigBuilder {
    pub fn line_y_tolerance(mut self, value: f32) -> Self {
        self.inner.line_y_tolerance = value;
        self
    }

    pub fn max_fingerprint_chars(mut self, value: usize) -> Self {
        self.inner.max_fingerprint_chars = value;
        self
    }

    pub fn match_threshold(mut self, value: f64) -> Self {
        self.inner.match_threshold = value;
        self
    }

    pub fn white_threshold(mut self, value: u8) -> Self {
        self.inner.white_threshold = value;
        self
    }

    pub fn render_scale(mut self, value: f32) -> Self {
        self.inner.render_scale = value;
        self
    }

    pub fn build(self) -> CompareConfig {
        self.inner
    }
}
