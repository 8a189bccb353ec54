#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All hit-testing in the engine runs on axis-aligned boxes in one
//! consistent `f64` pixel coordinate space supplied by the host. [`Axis`]
//! parameterizes every edge/span accessor so the resolver is written once
//! for both vertical and horizontal lists.

/// Orientation of a container's main layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Items stack top-to-bottom.
    Vertical,
    /// Items flow left-to-right.
    Horizontal,
}

impl Axis {
    /// The perpendicular axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    /// True for [`Axis::Vertical`].
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical)
    }
}

/// A 2D pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The coordinate along the given axis (`y` for vertical, `x` for
    /// horizontal).
    #[must_use]
    pub const fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.y,
            Axis::Horizontal => self.x,
        }
    }

    /// Chebyshev distance to another point (max of per-axis deltas).
    ///
    /// This is the metric used for movement thresholds: a gesture counts as
    /// moved once either coordinate drifts far enough.
    #[must_use]
    pub fn chebyshev_distance(self, other: Self) -> f64 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned bounding box.
///
/// The sole geometric primitive the resolver consumes. Edges follow the
/// usual screen convention: `left`/`top` inclusive origin, `right`/`bottom`
/// derived from width/height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge.
    #[must_use]
    pub const fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Leading edge along the given axis (top or left).
    #[must_use]
    pub const fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.top,
            Axis::Horizontal => self.left,
        }
    }

    /// Trailing edge along the given axis (bottom or right).
    #[must_use]
    pub const fn end(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.bottom(),
            Axis::Horizontal => self.right(),
        }
    }

    /// Extent along the given axis (height or width).
    #[must_use]
    pub const fn span(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.height,
            Axis::Horizontal => self.width,
        }
    }

    /// Midpoint along the given axis.
    #[must_use]
    pub const fn mid(&self, axis: Axis) -> f64 {
        self.start(axis) + self.span(axis) / 2.0
    }

    /// True if the rectangle has no area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check whether a point lies inside the rectangle.
    ///
    /// Edges are inclusive on the leading side and exclusive on the
    /// trailing side, so adjacent boxes never both claim a point.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x < self.right() && p.y >= self.top && p.y < self.bottom()
    }

    /// A copy grown outward by `margin` on every side.
    ///
    /// Used for proximity tests (e.g. the empty-container insert
    /// threshold). A negative margin shrinks the rectangle; width/height
    /// clamp at zero.
    #[must_use]
    pub fn expand(&self, margin: f64) -> Rect {
        Rect {
            left: self.left - margin,
            top: self.top - margin,
            width: (self.width + margin * 2.0).max(0.0),
            height: (self.height + margin * 2.0).max(0.0),
        }
    }

    /// Distance from a point to the rectangle.
    ///
    /// Zero when the point is inside; otherwise the larger of the two
    /// per-axis overflows, matching the expand/contains proximity test:
    /// `distance_to(p) <= t` iff `expand(t).contains(p)` (up to edge
    /// exclusivity).
    #[must_use]
    pub fn distance_to(&self, p: Point) -> f64 {
        let dx = (self.left - p.x).max(p.x - self.right()).max(0.0);
        let dy = (self.top - p.y).max(p.y - self.bottom()).max(0.0);
        dx.max(dy)
    }

    /// Smallest rectangle containing both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Rect) -> Rect {
        let left = self.left.min(other.left);
        let top = self.top.min(other.top);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect {
            left,
            top,
            width: right - left,
            height: bottom - top,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_cross() {
        assert_eq!(Axis::Vertical.cross(), Axis::Horizontal);
        assert_eq!(Axis::Horizontal.cross(), Axis::Vertical);
        assert!(Axis::Vertical.is_vertical());
        assert!(!Axis::Horizontal.is_vertical());
    }

    #[test]
    fn point_along() {
        let p = Point::new(3.0, 9.0);
        assert_eq!(p.along(Axis::Vertical), 9.0);
        assert_eq!(p.along(Axis::Horizontal), 3.0);
    }

    #[test]
    fn chebyshev() {
        let a = Point::new(0.0, 0.0);
        assert_eq!(a.chebyshev_distance(Point::new(3.0, -4.0)), 4.0);
        assert_eq!(a.chebyshev_distance(Point::new(-5.0, 2.0)), 5.0);
        assert_eq!(a.chebyshev_distance(a), 0.0);
    }

    #[test]
    fn rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.start(Axis::Vertical), 20.0);
        assert_eq!(r.end(Axis::Vertical), 60.0);
        assert_eq!(r.span(Axis::Vertical), 40.0);
        assert_eq!(r.start(Axis::Horizontal), 10.0);
        assert_eq!(r.end(Axis::Horizontal), 40.0);
        assert_eq!(r.span(Axis::Horizontal), 30.0);
        assert_eq!(r.mid(Axis::Vertical), 40.0);
    }

    #[test]
    fn contains_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(9.9, 9.9)));
        assert!(!r.contains(Point::new(10.0, 5.0)));
        assert!(!r.contains(Point::new(5.0, 10.0)));
        assert!(!r.contains(Point::new(-0.1, 5.0)));
    }

    #[test]
    fn expand_and_distance_agree() {
        let r = Rect::new(100.0, 100.0, 50.0, 20.0);
        let near = Point::new(98.0, 110.0); // 2px left of the box
        let far = Point::new(90.0, 110.0); // 10px left of the box
        assert_eq!(r.distance_to(near), 2.0);
        assert_eq!(r.distance_to(far), 10.0);
        assert!(r.expand(5.0).contains(near));
        assert!(!r.expand(5.0).contains(far));
        assert_eq!(r.distance_to(Point::new(120.0, 110.0)), 0.0);
    }

    #[test]
    fn expand_negative_clamps() {
        let r = Rect::new(0.0, 0.0, 4.0, 4.0);
        let shrunk = r.expand(-3.0);
        assert_eq!(shrunk.width, 0.0);
        assert_eq!(shrunk.height, 0.0);
        assert!(shrunk.is_empty());
    }

    #[test]
    fn union_covers_both() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 5.0, 10.0, 10.0);
        let u = a.union(&b);
        assert_eq!(u.left, 0.0);
        assert_eq!(u.top, 0.0);
        assert_eq!(u.right(), 30.0);
        assert_eq!(u.bottom(), 15.0);
    }
}
