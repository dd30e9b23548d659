//! Configuration types for diagram rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are laid out and styled. All types implement [`serde::Deserialize`] for
//! loading from external sources (the CLI loads them from TOML).
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Connector lines and output scale.
//! - [`StyleConfig`] - Visual styling options such as background color.

use serde::Deserialize;

/// Pixels per unit-square unit at the default scale.
fn default_scale() -> f32 {
    100.0
}

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Forces connector lines on or off, overriding the loaded value.
    ///
    /// The CLI's `--show-lines` flag routes through this.
    pub fn set_show_lines(&mut self, show_lines: bool) {
        self.layout.show_lines = show_lines;
    }
}

/// Layout options for panel diagrams.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Draw vertical connector lines between panel, subpanels and doors.
    #[serde(default)]
    show_lines: bool,

    /// Pixels per unit of the layout's canvas hint.
    #[serde(default = "default_scale")]
    scale: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            show_lines: false,
            scale: default_scale(),
        }
    }
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`].
    pub fn new(show_lines: bool, scale: f32) -> Self {
        Self { show_lines, scale }
    }

    /// Returns whether connector lines are drawn.
    pub fn show_lines(&self) -> bool {
        self.show_lines
    }

    /// Returns the output scale in pixels per canvas unit.
    pub fn scale(&self) -> f32 {
        self.scale
    }
}

/// Visual styling configuration for rendered diagrams.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background color for diagrams, as an SVG color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`] with the specified background color.
    pub fn new(background_color: Option<String>) -> Self {
        Self { background_color }
    }

    /// Returns the configured background color, if any.
    pub fn background_color(&self) -> Option<&str> {
        self.background_color.as_deref()
    }
}
