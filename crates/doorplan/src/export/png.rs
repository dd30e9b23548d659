//! PNG rasterization of the SVG scene.
//!
//! The scene renders fully in memory and is written once; the output file
//! handle lives only for the duration of the call.

use std::path::Path;

use resvg::{tiny_skia, usvg};

use crate::export::ExportError;

/// Rasterizes an SVG scene and writes it as a PNG file.
///
/// # Errors
///
/// Returns [`ExportError`] when the scene fails to parse, the pixmap
/// cannot be allocated, or PNG encoding/writing fails.
pub fn write_png(scene: &str, output: &Path) -> Result<(), ExportError> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(scene, &options)?;
    let size = tree.size().to_int_size();

    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or(
        ExportError::PixmapAllocation {
            width: size.width(),
            height: size.height(),
        },
    )?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap
        .save_png(output)
        .map_err(|err| ExportError::Png(err.to_string()))
}

#[cfg(test)]
mod tests {
    use doorplan_core::model::{Door, Panel, SubpanelId};

    use crate::config::StyleConfig;
    use crate::export::svg::render_scene;
    use crate::layout::LayoutEngine;

    use super::*;

    #[test]
    fn test_write_png_produces_a_file() {
        let mut panel = Panel::new("Upper School");
        panel
            .subpanel_mut(SubpanelId::Addressed(0))
            .insert_door(Door::new("Lobby", Some(1), Default::default()));

        let layout = LayoutEngine::new().layout_panel(&panel).unwrap();
        let scene = render_scene(&layout, &StyleConfig::default(), 50.0);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Upper_School.png");
        write_png(&scene, &path).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_invalid_scene_is_an_export_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        let result = write_png("not an svg document", &path);
        assert!(matches!(result, Err(ExportError::InvalidSvg(_))));
    }
}
