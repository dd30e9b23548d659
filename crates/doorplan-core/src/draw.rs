//! Placed-output primitives produced by the layout engine.
//!
//! A layout resolves into [`PlacedBox`]es (a labeled rectangle at an
//! absolute position) and optional [`Segment`]s (connector lines). These
//! carry no styling; exporters decide colors and fonts from the
//! [`BoxRole`].

use crate::geometry::{Bounds, Point, Size};

/// The hierarchy level a placed box represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxRole {
    Panel,
    Subpanel,
    Door,
}

/// A labeled rectangle at an absolute position.
///
/// `center` is the midpoint of the box; the label is newline-separated
/// lines rendered centered within the box.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBox {
    role: BoxRole,
    center: Point,
    size: Size,
    label: String,
}

impl PlacedBox {
    pub fn new(role: BoxRole, center: Point, size: Size, label: impl Into<String>) -> Self {
        Self {
            role,
            center,
            size,
            label: label.into(),
        }
    }

    pub fn role(&self) -> BoxRole {
        self.role
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the label split into its display lines.
    pub fn label_lines(&self) -> impl Iterator<Item = &str> {
        self.label.lines()
    }

    /// Calculates the bounds of this box around its center.
    pub fn bounds(&self) -> Bounds {
        self.center.to_bounds(self.size)
    }
}

/// A straight connector line between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    from: Point,
    to: Point,
}

impl Segment {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    pub fn from(&self) -> Point {
        self.from
    }

    pub fn to(&self) -> Point {
        self.to
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_placed_box_bounds() {
        let placed = PlacedBox::new(
            BoxRole::Door,
            Point::new(0.5, 0.35),
            Size::new(0.2, 0.1),
            "109.1 Data Room",
        );

        let bounds = placed.bounds();
        assert_approx_eq!(f32, bounds.min_x(), 0.4);
        assert_approx_eq!(f32, bounds.max_x(), 0.6);
        assert_approx_eq!(f32, bounds.min_y(), 0.3);
        assert_approx_eq!(f32, bounds.max_y(), 0.4);
    }

    #[test]
    fn test_label_lines() {
        let placed = PlacedBox::new(
            BoxRole::Subpanel,
            Point::default(),
            Size::default(),
            "Subpanel 0\nInternal SIO",
        );

        let lines: Vec<_> = placed.label_lines().collect();
        assert_eq!(lines, vec!["Subpanel 0", "Internal SIO"]);
    }

    #[test]
    fn test_segment_endpoints() {
        let segment = Segment::new(Point::new(0.5, 0.91), Point::new(0.5, 0.8));
        assert_approx_eq!(f32, segment.from().y(), 0.91);
        assert_approx_eq!(f32, segment.to().y(), 0.8);
    }
}
