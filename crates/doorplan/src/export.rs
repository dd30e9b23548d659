//! Exporters turning a [`PanelLayout`](crate::layout::PanelLayout) into artifacts.
//!
//! [`svg`] builds the vector scene; [`png`] rasterizes that scene to the
//! final image file.

pub mod png;
pub mod svg;

use thiserror::Error;

use resvg::usvg;

/// Errors raised while rendering or writing a diagram artifact.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("invalid SVG scene: {0}")]
    InvalidSvg(#[from] usvg::Error),

    #[error("cannot allocate a {width}x{height} pixmap")]
    PixmapAllocation { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    Png(String),
}
