//! Basic geometric types used by the layout and export stages.
//!
//! All coordinates are `f32`. Layout output lives in the unit square
//! `[0, 1] × [0, 1]` with y pointing up; exporters scale and flip into
//! pixel space.

/// A point in 2D space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Converts a point and size into a bounds rectangle
    ///
    /// The point is treated as the center of the bounds, and the size
    /// is distributed equally in all directions around that center.
    pub fn to_bounds(self, size: Size) -> Bounds {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;

        Bounds {
            min_x: self.x - half_width,
            min_y: self.y - half_height,
            max_x: self.x + half_width,
            max_y: self.y + half_height,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Multiplies both dimensions by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns true if this bounds overlaps the other bounds.
    ///
    /// Touching edges do not count as overlap.
    pub fn intersects(self, other: Bounds) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_approx_eq!(f32, point.x(), 3.5);
        assert_approx_eq!(f32, point.y(), 4.2);
    }

    #[test]
    fn test_point_scale() {
        let point = Point::new(2.0, 3.0);
        let scaled = point.scale(2.5);
        assert_approx_eq!(f32, scaled.x(), 5.0);
        assert_approx_eq!(f32, scaled.y(), 7.5);
    }

    #[test]
    fn test_point_to_bounds() {
        let center = Point::new(10.0, 20.0);
        let size = Size::new(6.0, 8.0);
        let bounds = center.to_bounds(size);

        assert_approx_eq!(f32, bounds.min_x(), 7.0);
        assert_approx_eq!(f32, bounds.min_y(), 16.0);
        assert_approx_eq!(f32, bounds.max_x(), 13.0);
        assert_approx_eq!(f32, bounds.max_y(), 24.0);
    }

    #[test]
    fn test_size_scale() {
        let size = Size::new(10.0, 20.0);
        let scaled = size.scale(0.5);
        assert_approx_eq!(f32, scaled.width(), 5.0);
        assert_approx_eq!(f32, scaled.height(), 10.0);
    }

    #[test]
    fn test_bounds_dimensions() {
        let bounds = Point::new(4.5, 7.0).to_bounds(Size::new(5.0, 8.0));
        assert_approx_eq!(f32, bounds.width(), 5.0);
        assert_approx_eq!(f32, bounds.height(), 8.0);
    }

    #[test]
    fn test_bounds_intersects() {
        let a = Point::new(0.5, 0.5).to_bounds(Size::new(1.0, 1.0));
        let b = Point::new(1.2, 0.5).to_bounds(Size::new(1.0, 1.0));
        let c = Point::new(3.0, 3.0).to_bounds(Size::new(1.0, 1.0));

        assert!(a.intersects(b));
        assert!(b.intersects(a));
        assert!(!a.intersects(c));
    }

    #[test]
    fn test_bounds_touching_edges_do_not_intersect() {
        let a = Point::new(0.5, 0.5).to_bounds(Size::new(1.0, 1.0));
        let b = Point::new(1.5, 0.5).to_bounds(Size::new(1.0, 1.0));

        assert!(!a.intersects(b));
    }
}
