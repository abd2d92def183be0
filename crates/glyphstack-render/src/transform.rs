//! Affine transforms for placing shapes.
//!
//! [`Transform2D`] uses the same field layout as `tiny_skia::Transform`, so
//! handing a transform to the rasterizer is a plain copy.

use resvg::tiny_skia;

use crate::types::{Point, Rect};

/// A 2D affine transform.
///
/// A point maps as `x' = sx*x + kx*y + tx`, `y' = ky*x + sy*y + ty`.
///
/// # Composition
///
/// `a.then(&b)` applies `b` first, then `a`:
///
/// ```
/// use glyphstack_render::{Point, Transform2D};
///
/// let transform = Transform2D::scale(2.0).then(&Transform2D::translate(10.0, 0.0));
///
/// // (5 + 10) * 2
/// assert_eq!(transform.transform_point(Point::new(5.0, 0.0)), Point::new(30.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    sx: f32,
    ky: f32,
    kx: f32,
    sy: f32,
    tx: f32,
    ty: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    /// The identity transform.
    pub const IDENTITY: Self = Self::scale_xy(1.0, 1.0);

    /// A translation.
    #[inline]
    pub const fn translate(tx: f32, ty: f32) -> Self {
        Self {
            tx,
            ty,
            ..Self::IDENTITY
        }
    }

    /// A uniform scale about the origin.
    #[inline]
    pub const fn scale(s: f32) -> Self {
        Self::scale_xy(s, s)
    }

    /// A per-axis scale about the origin.
    #[inline]
    pub const fn scale_xy(sx: f32, sy: f32) -> Self {
        Self {
            sx,
            ky: 0.0,
            kx: 0.0,
            sy,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Compose: the result applies `other` first, then `self`.
    #[inline]
    pub fn then(&self, other: &Self) -> Self {
        Self {
            sx: self.sx * other.sx + self.kx * other.ky,
            ky: self.ky * other.sx + self.sy * other.ky,
            kx: self.sx * other.kx + self.kx * other.sy,
            sy: self.ky * other.kx + self.sy * other.sy,
            tx: self.sx * other.tx + self.kx * other.ty + self.tx,
            ty: self.ky * other.tx + self.sy * other.ty + self.ty,
        }
    }

    /// Map a point.
    #[inline]
    pub fn transform_point(&self, p: Point) -> Point {
        Point::new(
            self.sx * p.x + self.kx * p.y + self.tx,
            self.ky * p.x + self.sy * p.y + self.ty,
        )
    }

    /// Axis-aligned bounds of a mapped rectangle.
    pub fn transform_rect(&self, rect: &Rect) -> Rect {
        let mut min = Point::new(f32::INFINITY, f32::INFINITY);
        let mut max = Point::new(f32::NEG_INFINITY, f32::NEG_INFINITY);

        for corner in [
            rect.top_left(),
            rect.top_right(),
            rect.bottom_left(),
            rect.bottom_right(),
        ] {
            let p = self.transform_point(corner);
            min = Point::new(min.x.min(p.x), min.y.min(p.y));
            max = Point::new(max.x.max(p.x), max.y.max(p.y));
        }

        Rect::from_corners(min, max)
    }

    /// The translation component.
    #[inline]
    pub fn translation(&self) -> (f32, f32) {
        (self.tx, self.ty)
    }

    /// The diagonal scale components.
    #[inline]
    pub fn scale_factors(&self) -> (f32, f32) {
        (self.sx, self.sy)
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Convert for the rasterizer.
    #[inline]
    pub fn to_tiny_skia(&self) -> tiny_skia::Transform {
        tiny_skia::Transform::from_row(self.sx, self.ky, self.kx, self.sy, self.tx, self.ty)
    }
}

/// Current transform plus saved copies.
///
/// ```
/// use glyphstack_render::{Point, Transform2D, TransformStack};
///
/// let mut stack = TransformStack::new();
/// stack.concat(&Transform2D::translate(100.0, 50.0));
///
/// stack.save();
/// stack.concat(&Transform2D::scale(2.0));
/// assert_eq!(stack.current().transform_point(Point::new(10.0, 0.0)), Point::new(120.0, 50.0));
///
/// stack.restore();
/// assert_eq!(stack.current().transform_point(Point::new(10.0, 0.0)), Point::new(110.0, 50.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransformStack {
    saved: Vec<Transform2D>,
    current: Transform2D,
}

impl TransformStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated transform.
    #[inline]
    pub fn current(&self) -> &Transform2D {
        &self.current
    }

    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Pop the last saved transform. Unbalanced calls are ignored.
    pub fn restore(&mut self) {
        if let Some(transform) = self.saved.pop() {
            self.current = transform;
        }
    }

    /// Number of saved transforms.
    #[inline]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Pre-multiply `transform`: it applies to points before the current one.
    pub fn concat(&mut self, transform: &Transform2D) {
        self.current = self.current.then(transform);
    }
}
