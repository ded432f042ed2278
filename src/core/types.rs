use serde::{Deserialize, Serialize};

/// Pixel size of the drawable area handed over by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One input sample in data space.
///
/// Ordering is lexicographic by `x`, then `y`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct DataPoint {
    pub x: i64,
    pub y: i64,
}

impl DataPoint {
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for DataPoint {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

/// A position in screen space, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Drawable sub-rectangle of the viewport reserved for grid and graph.
///
/// Screen Y grows downward, so `top < bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotRect {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        (self.right - self.left).max(0.0)
    }

    #[must_use]
    pub fn height(self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    #[must_use]
    pub fn contains(self, point: ScreenPoint) -> bool {
        (self.left..=self.right).contains(&point.x) && (self.top..=self.bottom).contains(&point.y)
    }

    #[must_use]
    pub fn contains_x(self, x: f64) -> bool {
        (self.left..=self.right).contains(&x)
    }

    #[must_use]
    pub fn contains_y(self, y: f64) -> bool {
        (self.top..=self.bottom).contains(&y)
    }

    /// Cheap bounding-box test for a segment; not an exact clip.
    #[must_use]
    pub fn intersects_segment_bounds(self, a: ScreenPoint, b: ScreenPoint) -> bool {
        let (min_x, max_x) = (a.x.min(b.x), a.x.max(b.x));
        let (min_y, max_y) = (a.y.min(b.y), a.y.max(b.y));
        max_x >= self.left && min_x <= self.right && max_y >= self.top && min_y <= self.bottom
    }

    #[must_use]
    pub fn corners(self) -> [ScreenPoint; 4] {
        [
            ScreenPoint::new(self.left, self.top),
            ScreenPoint::new(self.right, self.top),
            ScreenPoint::new(self.right, self.bottom),
            ScreenPoint::new(self.left, self.bottom),
        ]
    }
}

/// Axis selector used by per-axis policies and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}
