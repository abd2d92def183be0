//! Geometry and color primitives.

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width and height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero or negative.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Rectangle spanning `min` to `max`.
    #[inline]
    pub fn from_corners(min: Point, max: Point) -> Self {
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    #[inline]
    pub fn top_left(&self) -> Point {
        self.origin
    }

    #[inline]
    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.top())
    }

    #[inline]
    pub fn bottom_left(&self) -> Point {
        Point::new(self.left(), self.bottom())
    }

    #[inline]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    /// True when the rectangle has no area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// The overlapping area, or `None` if the rectangles do not overlap.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let min = Point::new(self.left().max(other.left()), self.top().max(other.top()));
        let max = Point::new(
            self.right().min(other.right()),
            self.bottom().min(other.bottom()),
        );

        (min.x < max.x && min.y < max.y).then(|| Rect::from_corners(min, max))
    }

    /// Add `amount` to both width and height, keeping the origin fixed.
    ///
    /// The extra space lands entirely on the right and bottom edges.
    #[inline]
    pub fn grow(&self, amount: f32) -> Rect {
        Rect::new(
            self.left(),
            self.top(),
            self.width() + amount,
            self.height() + amount,
        )
    }

    /// Largest size with this rectangle's aspect ratio that fits in `target`.
    pub fn fit_into(&self, target: &Rect) -> Size {
        let ratio = (target.width() / self.width()).min(target.height() / self.height());
        Size::new(self.width() * ratio, self.height() * ratio)
    }
}

/// A non-premultiplied 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::from_rgba8(0, 0, 0, 0);
    pub const BLACK: Self = Self::from_rgb8(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb8(255, 255, 255);
    pub const RED: Self = Self::from_rgb8(255, 0, 0);
    pub const GREEN: Self = Self::from_rgb8(0, 255, 0);
    pub const BLUE: Self = Self::from_rgb8(0, 0, 255);

    #[inline]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// An opaque color.
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Parse `RRGGBB` or `RRGGBBAA`, with an optional leading `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        let a = if digits.len() == 8 { channel(6)? } else { 255 };
        Some(Self::from_rgba8(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// The RGB channels as six uppercase hex digits. Alpha is dropped.
    pub fn to_rgb_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!((r.left(), r.top(), r.right(), r.bottom()), (10.0, 20.0, 110.0, 70.0));
        assert_eq!(r.bottom_right(), Point::new(110.0, 70.0));
        assert_eq!(Rect::from_corners(r.top_left(), r.bottom_right()), r);
    }

    #[test]
    fn test_rect_intersect() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(
            a.intersect(&Rect::new(50.0, 50.0, 100.0, 100.0)),
            Some(Rect::new(50.0, 50.0, 50.0, 50.0))
        );
        assert!(a.intersect(&Rect::new(100.0, 0.0, 10.0, 10.0)).is_none());
    }

    #[test]
    fn test_rect_grow_keeps_origin() {
        let r = Rect::new(5.0, 6.0, 10.0, 20.0).grow(4.0);
        assert_eq!(r, Rect::new(5.0, 6.0, 14.0, 24.0));
    }

    #[test]
    fn test_fit_into_preserves_aspect() {
        let target = Rect::new(0.0, 0.0, 50.0, 50.0);
        assert_eq!(Rect::new(0.0, 0.0, 200.0, 100.0).fit_into(&target), Size::new(50.0, 25.0));
        assert_eq!(Rect::new(0.0, 0.0, 10.0, 40.0).fit_into(&target), Size::new(12.5, 50.0));
    }

    #[test]
    fn test_empty_sizes() {
        assert!(Size::new(0.0, 10.0).is_empty());
        assert!(Size::new(10.0, -1.0).is_empty());
        assert!(!Size::new(1.0, 1.0).is_empty());
        assert!(Rect::ZERO.is_empty());
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::from_hex("#FF0000"), Some(Color::RED));
        assert_eq!(Color::from_hex("00ff0080"), Some(Color::from_rgba8(0, 255, 0, 128)));
        assert_eq!(Color::from_hex("#FFF"), None);
        assert_eq!(Color::from_hex("#GG0000"), None);

        assert_eq!(Color::from_rgb8(0x1a, 0x2b, 0x3c).to_rgb_hex(), "1A2B3C");
        assert_eq!(Color::from_rgba8(255, 255, 255, 0).to_rgb_hex(), "FFFFFF");
    }
}
