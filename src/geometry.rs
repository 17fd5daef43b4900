//! Geometry utilities for pointer interactions.
//!
//! All coordinates are viewport-relative CSS pixels, the same space pointer
//! events report their client position in.

use crate::error::{DragError, DragResult};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 2D position or offset
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Viewport dimensions
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Edge-based rectangle. `left <= right` and `top <= bottom` are expected
/// but never enforced.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    #[inline]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Build from an origin and a size, the way layout boxes are described
    #[inline]
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    #[inline]
    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }

    /// Shift all four edges by `offset`
    #[inline]
    pub fn translate(&self, offset: Point) -> Rect {
        Rect::new(
            self.left + offset.x,
            self.top + offset.y,
            self.right + offset.x,
            self.bottom + offset.y,
        )
    }
}

/// Clamp a point into a rectangle.
///
/// Lower edge first, then upper edge, so an inverted rectangle collapses onto
/// its `right`/`bottom` edge instead of panicking like `f64::clamp` would.
#[inline]
pub fn clamp_to_rect(point: Point, rect: &Rect) -> Point {
    Point::new(
        point.x.max(rect.left).min(rect.right),
        point.y.max(rect.top).min(rect.bottom),
    )
}

/// Grid cell size for snapped movement, serialized as `[x, y]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct GridSpec {
    pub x: f64,
    pub y: f64,
}

impl GridSpec {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both cells must be positive and finite
    pub fn validate(&self) -> DragResult<()> {
        for (axis, value) in [("x", self.x), ("y", self.y)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(DragError::InvalidGrid { axis, value });
            }
        }
        Ok(())
    }
}

impl From<(f64, f64)> for GridSpec {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<GridSpec> for (f64, f64) {
    fn from(grid: GridSpec) -> Self {
        (grid.x, grid.y)
    }
}

/// Round a movement delta to whole grid cells.
///
/// Half-way values round toward positive infinity, so a delta of exactly half
/// a cell already counts as one step forward.
pub fn snap_delta(grid: GridSpec, delta: Point) -> DragResult<Point> {
    grid.validate()?;
    Ok(Point::new(
        round_half_up(delta.x / grid.x) * grid.x,
        round_half_up(delta.y / grid.y) * grid.y,
    ))
}

#[inline]
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Remembers the last snap so repeated identical deltas from a burst of
/// pointer moves skip the division work.
#[derive(Debug, Clone, Default)]
pub struct SnapCache {
    last: Option<(GridSpec, Point, Point)>,
}

impl SnapCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snap(&mut self, grid: GridSpec, delta: Point) -> DragResult<Point> {
        if let Some((cached_grid, cached_delta, snapped)) = self.last {
            if cached_grid == grid && cached_delta == delta {
                return Ok(snapped);
            }
        }
        let snapped = snap_delta(grid, delta)?;
        self.last = Some((grid, delta, snapped));
        Ok(snapped)
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}
