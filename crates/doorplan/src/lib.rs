//! Doorplan - wiring diagrams from access-control door configuration reports.
//!
//! A "Door Configuration Report" CSV (two columns, `Name`/`Value`, repeated
//! per-door sections) parses into a panel → subpanel → door hierarchy; each
//! panel then lays out deterministically and renders to one PNG diagram.

pub mod config;
pub mod export;
pub mod layout;

mod error;

pub use doorplan_core::{draw, geometry, model};
pub use doorplan_parser::ParseError;

pub use error::DoorplanError;

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::{debug, info};

use config::AppConfig;
use layout::LayoutEngine;
use model::{Panel, PanelSet};

/// Builder for parsing reports and rendering panel diagrams.
///
/// # Examples
///
/// ```rust,no_run
/// use doorplan::{DiagramBuilder, config::AppConfig};
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// let panels = builder.parse_report("Door_Config_Report.csv")
///     .expect("Failed to parse report");
///
/// let written = builder.render_to_directory(&panels, "diagrams")
///     .expect("Failed to render diagrams");
///
/// println!("wrote {} diagrams", written.len());
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a report file into the panel hierarchy.
    ///
    /// The input is opened, fully read and released before any layout work
    /// begins.
    ///
    /// # Errors
    ///
    /// Returns `DoorplanError` for file I/O and CSV-level failures.
    /// Structural irregularities inside the report degrade to sentinel
    /// values instead of erroring.
    pub fn parse_report(&self, path: impl AsRef<Path>) -> Result<PanelSet, DoorplanError> {
        let path = path.as_ref();
        info!(input = path.display().to_string(); "Parsing door configuration report");

        let file = File::open(path)?;
        let panels = doorplan_parser::parse_report(BufReader::new(file))?;

        debug!(panels = panels.len(); "Report parsed");
        Ok(panels)
    }

    /// Render one panel into an SVG scene string.
    ///
    /// Returns `None` for a panel with zero subpanels; such panels produce
    /// no artifact.
    pub fn render_panel_svg(&self, panel: &Panel) -> Option<String> {
        let engine = LayoutEngine::new().with_connectors(self.config.layout().show_lines());
        let layout = engine.layout_panel(panel)?;

        Some(export::svg::render_scene(
            &layout,
            self.config.style(),
            self.config.layout().scale(),
        ))
    }

    /// Render every resolvable panel into `<output_dir>/<name>.png`.
    ///
    /// The directory is created if absent; spaces in panel names become
    /// underscores in filenames. Panels without subpanels are skipped.
    /// Panels are independent of each other; no cross-panel ordering is
    /// promised beyond the report's own order.
    ///
    /// # Errors
    ///
    /// Returns `DoorplanError` when the directory cannot be created or a
    /// diagram fails to rasterize or write.
    pub fn render_to_directory(
        &self,
        panels: &PanelSet,
        output_dir: impl AsRef<Path>,
    ) -> Result<Vec<PathBuf>, DoorplanError> {
        let output_dir = output_dir.as_ref();
        fs::create_dir_all(output_dir)?;

        let mut written = Vec::new();
        for panel in panels.panels() {
            let Some(scene) = self.render_panel_svg(panel) else {
                debug!(panel = panel.name(); "Panel has no subpanels, skipping");
                continue;
            };

            let file_name = format!("{}.png", panel.name().replace(' ', "_"));
            let output_path = output_dir.join(file_name);
            export::png::write_png(&scene, &output_path)?;

            info!(
                panel = panel.name(),
                output = output_path.display().to_string();
                "Wrote panel diagram"
            );
            written.push(output_path);
        }

        Ok(written)
    }
}
