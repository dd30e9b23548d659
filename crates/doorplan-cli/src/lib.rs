//! CLI logic for the Doorplan diagram generator.
//!
//! This module contains the core CLI logic for turning a door configuration
//! report into one PNG diagram per panel.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::path::PathBuf;

use log::{info, warn};
use thiserror::Error;

use doorplan::{DiagramBuilder, DoorplanError};

/// Usage errors raised before the pipeline runs.
#[derive(Debug, Error)]
enum CliError {
    #[error("--input and --output are required unless --pick is used")]
    MissingPaths,
}

impl From<CliError> for DoorplanError {
    fn from(err: CliError) -> Self {
        DoorplanError::Io(std::io::Error::other(err.to_string()))
    }
}

/// Run the Doorplan CLI application
///
/// This function parses the input report through the Doorplan pipeline
/// and writes one PNG diagram per panel into the output directory.
///
/// # Errors
///
/// Returns `DoorplanError` for:
/// - Missing input/output paths
/// - File I/O errors
/// - Configuration loading errors
/// - CSV-level parsing errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), DoorplanError> {
    let (input, output) = resolve_paths(args)?;

    info!(
        input_path = input.display().to_string(),
        output_path = output.display().to_string();
        "Processing door configuration report"
    );

    // Load configuration, then apply command-line overrides
    let mut app_config = config::load_config(args.config.as_ref())?;
    if args.show_lines {
        app_config.set_show_lines(true);
    }

    let builder = DiagramBuilder::new(app_config);
    let panels = builder.parse_report(&input)?;

    if panels.is_empty() {
        warn!("No panels found in the report; nothing to render");
        return Ok(());
    }

    let written = builder.render_to_directory(&panels, &output)?;

    info!(diagrams = written.len(); "Diagrams exported successfully");

    Ok(())
}

/// Resolve the input file and output directory from the arguments.
///
/// With the `dialog` feature and `--pick`, missing paths are requested
/// interactively; otherwise both must be given on the command line.
fn resolve_paths(args: &Args) -> Result<(PathBuf, PathBuf), DoorplanError> {
    #[cfg(feature = "dialog")]
    if args.pick {
        let input = match &args.input {
            Some(path) => path.clone(),
            None => rfd::FileDialog::new()
                .add_filter("CSV reports", &["csv"])
                .set_title("Select the door configuration report")
                .pick_file()
                .ok_or(CliError::MissingPaths)?,
        };
        let output = match &args.output {
            Some(path) => path.clone(),
            None => rfd::FileDialog::new()
                .set_title("Select the diagram output directory")
                .pick_folder()
                .ok_or(CliError::MissingPaths)?,
        };
        return Ok((input, output));
    }

    match (&args.input, &args.output) {
        (Some(input), Some(output)) => Ok((input.clone(), output.clone())),
        _ => Err(CliError::MissingPaths.into()),
    }
}
