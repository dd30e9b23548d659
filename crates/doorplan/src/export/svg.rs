//! SVG scene construction.
//!
//! The layout's unit-square coordinates (y up) are flipped and scaled into
//! pixel space here; box styling is decided by [`BoxRole`]. The scene is a
//! plain SVG string ready for rasterization or direct inspection.

use svg::Document;
use svg::node::element as svg_element;

use doorplan_core::draw::{BoxRole, PlacedBox, Segment};

use crate::config::StyleConfig;
use crate::layout::PanelLayout;

const DEFAULT_BACKGROUND: &str = "white";
const FONT_FAMILY: &str = "sans-serif";
const CORNER_RADIUS: f32 = 8.0;
const CONNECTOR_WIDTH: f32 = 2.0;
// Line height as a multiple of the font size
const LINE_SPACING: f32 = 1.2;

/// Pixel-space mapping of the unit square.
struct PixelSpace {
    width: f32,
    height: f32,
}

impl PixelSpace {
    fn x(&self, unit_x: f32) -> f32 {
        unit_x * self.width
    }

    /// Flips the y axis: layout has y up, SVG has y down.
    fn y(&self, unit_y: f32) -> f32 {
        (1.0 - unit_y) * self.height
    }
}

/// Per-role visual styling, carried over from the reference diagrams.
struct RoleStyle {
    fill: &'static str,
    stroke: &'static str,
    text_color: &'static str,
    font_size: f32,
    bold: bool,
}

fn role_style(role: BoxRole) -> RoleStyle {
    match role {
        BoxRole::Panel => RoleStyle {
            fill: "#f0f0f0",
            stroke: "black",
            text_color: "black",
            font_size: 14.0,
            bold: true,
        },
        BoxRole::Subpanel => RoleStyle {
            fill: "#e6f0ff",
            stroke: "blue",
            text_color: "blue",
            font_size: 10.0,
            bold: false,
        },
        BoxRole::Door => RoleStyle {
            fill: "#eaffea",
            stroke: "green",
            text_color: "black",
            font_size: 8.0,
            bold: false,
        },
    }
}

/// Renders a panel layout into an SVG string.
///
/// `scale` is pixels per canvas unit; the canvas proportions come from the
/// layout itself so wide panels and deep door stacks stay readable.
pub fn render_scene(layout: &PanelLayout, style: &StyleConfig, scale: f32) -> String {
    let canvas = layout.canvas_size().scale(scale);
    let space = PixelSpace {
        width: canvas.width(),
        height: canvas.height(),
    };
    // Font sizes are nominal points; scale them with the canvas
    let font_scale = scale / 50.0;

    let background = svg_element::Rectangle::new()
        .set("width", "100%")
        .set("height", "100%")
        .set(
            "fill",
            style.background_color().unwrap_or(DEFAULT_BACKGROUND),
        );

    let mut document = Document::new()
        .set("width", space.width)
        .set("height", space.height)
        .set(
            "viewBox",
            format!("0 0 {} {}", space.width, space.height),
        )
        .add(background);

    for segment in layout.connectors() {
        document = document.add(connector_node(segment, &space));
    }

    for placed in layout.boxes() {
        document = document.add(box_node(placed, &space));
        document = document.add(label_node(placed, &space, font_scale));
    }

    document.to_string()
}

fn connector_node(segment: &Segment, space: &PixelSpace) -> svg_element::Line {
    svg_element::Line::new()
        .set("x1", space.x(segment.from().x()))
        .set("y1", space.y(segment.from().y()))
        .set("x2", space.x(segment.to().x()))
        .set("y2", space.y(segment.to().y()))
        .set("stroke", "black")
        .set("stroke-width", CONNECTOR_WIDTH)
}

fn box_node(placed: &PlacedBox, space: &PixelSpace) -> svg_element::Rectangle {
    let bounds = placed.bounds();
    let style = role_style(placed.role());

    svg_element::Rectangle::new()
        .set("x", space.x(bounds.min_x()))
        // max_y is the top edge in unit space
        .set("y", space.y(bounds.max_y()))
        .set("width", bounds.width() * space.width)
        .set("height", bounds.height() * space.height)
        .set("rx", CORNER_RADIUS)
        .set("ry", CORNER_RADIUS)
        .set("fill", style.fill)
        .set("stroke", style.stroke)
        .set("stroke-width", 1.5)
}

fn label_node(placed: &PlacedBox, space: &PixelSpace, font_scale: f32) -> svg_element::Text {
    let style = role_style(placed.role());
    let font_size = style.font_size * font_scale;
    let line_height = font_size * LINE_SPACING;

    let center_x = space.x(placed.center().x());
    let center_y = space.y(placed.center().y());
    let line_count = placed.label_lines().count();
    // Baseline of the first line, centering the whole block vertically
    let start_y = center_y - line_height * (line_count as f32 - 1.0) / 2.0 + font_size * 0.35;

    let mut text = svg_element::Text::new("")
        .set("x", center_x)
        .set("y", start_y)
        .set("text-anchor", "middle")
        .set("font-family", FONT_FAMILY)
        .set("font-size", font_size)
        .set("fill", style.text_color);
    if style.bold {
        text = text.set("font-weight", "bold");
    }

    for (index, line) in placed.label_lines().enumerate() {
        // Text node content is escaped by the svg crate on serialization
        let tspan = svg_element::TSpan::new(line)
            .set("x", center_x)
            .set("dy", if index == 0 { 0.0 } else { line_height });
        text = text.add(tspan);
    }

    text
}
