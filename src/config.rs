//! Rendering configuration.
//!
//! Defaults reproduce the dashboard the analysis service was built for:
//! an 800x500 minimum canvas, 35-unit node circles and 15-character labels.
//! A TOML file may override any subset of fields.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::errors::{Result, ViewError};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Width of the hosting viewport. The canvas is never narrower than `min_width`.
    pub viewport_width: f64,
    /// Space reserved around the canvas inside the viewport.
    pub viewport_margin: f64,
    pub min_width: f64,
    /// Fixed canvas height.
    pub height: f64,
    /// Radius of every node circle.
    pub node_radius: f64,
    /// Node titles longer than this are cut and suffixed with `...`.
    pub label_max_chars: usize,
    pub title_font_size: u32,
    pub score_font_size: u32,
    pub background: String,
    pub arrow_fill: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            viewport_width: 830.0,
            viewport_margin: 30.0,
            min_width: 800.0,
            height: 500.0,
            node_radius: 35.0,
            label_max_chars: 15,
            title_font_size: 11,
            score_font_size: 9,
            background: "#f5f7fa".to_string(),
            arrow_fill: "#34495e".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same config with a different viewport width.
    pub fn with_viewport_width(mut self, width: f64) -> Self {
        self.viewport_width = width;
        self
    }

    /// Canvas width: `max(min_width, viewport_width - viewport_margin)`.
    pub fn canvas_width(&self) -> f64 {
        self.min_width.max(self.viewport_width - self.viewport_margin)
    }

    pub fn canvas_height(&self) -> f64 {
        self.height
    }

    /// Reject values the layout cannot work with.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("min_width", self.min_width),
            ("height", self.height),
            ("node_radius", self.node_radius),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ViewError::Config(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if !self.viewport_width.is_finite() || !self.viewport_margin.is_finite() {
            return Err(ViewError::Config(
                "viewport_width and viewport_margin must be finite".to_string(),
            ));
        }
        if self.label_max_chars == 0 {
            return Err(ViewError::Config(
                "label_max_chars must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parse a TOML document into a config without validating it.
pub fn from_toml_str(contents: &str) -> Result<RenderConfig> {
    Ok(toml::from_str(contents)?)
}

/// Load a TOML config file and validate it.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RenderConfig> {
    let contents = fs::read_to_string(path.as_ref())?;
    let config = from_toml_str(&contents)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
