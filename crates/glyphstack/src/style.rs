//! Brushes and inline style strings.
//!
//! A style string is embedded verbatim in synthesized documents and is also
//! part of the cache key, so its format is fixed:
//!
//! ```text
//! fill:#RRGGBB;fill-opacity:1.00;stroke:#RRGGBB;stroke-width:W;stroke-opacity:1.00
//! ```

use glyphstack_render::Color;

/// Hex code written for any brush that is not a solid color.
pub const FALLBACK_HEX: &str = "000";

/// Opacity used for enabled icons.
pub const ENABLED_OPACITY: f64 = 1.0;

/// Opacity used for disabled icons.
pub const DISABLED_OPACITY: f64 = 0.25;

/// A fill or stroke paint as seen by the style builder.
///
/// Hosts decide at the boundary whether their paint is a plain color;
/// gradients, patterns and anything else become [`Brush::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brush {
    /// A single solid color.
    Solid(Color),
    /// Any non-solid paint. Rendered with the fallback color.
    Other,
}

impl Brush {
    /// Solid black.
    pub const BLACK: Self = Brush::Solid(Color::BLACK);
    /// Fully transparent.
    pub const TRANSPARENT: Self = Brush::Solid(Color::TRANSPARENT);

    /// Hex code of this brush as used in style strings.
    pub fn to_svg_hex(&self) -> String {
        match self {
            Brush::Solid(color) => color.to_rgb_hex(),
            Brush::Other => FALLBACK_HEX.to_string(),
        }
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

/// Build the canonical inline style for a shape.
///
/// Both opacities collapse to [`ENABLED_OPACITY`] or [`DISABLED_OPACITY`].
///
/// ```
/// use glyphstack::{Brush, build_style};
///
/// let style = build_style(&Brush::BLACK, &Brush::BLACK, 1.0, true);
/// assert_eq!(
///     style,
///     "fill:#000000;fill-opacity:1.00;stroke:#000000;stroke-width:1;stroke-opacity:1.00",
/// );
/// ```
pub fn build_style(fill: &Brush, stroke: &Brush, stroke_width: f64, is_enabled: bool) -> String {
    let opacity = if is_enabled {
        ENABLED_OPACITY
    } else {
        DISABLED_OPACITY
    };

    format!(
        "fill:#{fill};fill-opacity:{opacity:.2};stroke:#{stroke};stroke-width:{stroke_width};stroke-opacity:{opacity:.2}",
        fill = fill.to_svg_hex(),
        stroke = stroke.to_svg_hex(),
    )
}

/// Resolve the style used for a lookup: an explicit string wins verbatim.
pub fn resolve_style(
    explicit: Option<&str>,
    fill: &Brush,
    stroke: &Brush,
    stroke_width: f64,
    is_enabled: bool,
) -> String {
    match explicit {
        Some(style) => style.to_string(),
        None => build_style(fill, stroke, stroke_width, is_enabled),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_black_style() {
        let style = build_style(&Brush::BLACK, &Brush::BLACK, 1.0, true);
        assert_eq!(
            style,
            "fill:#000000;fill-opacity:1.00;stroke:#000000;stroke-width:1;stroke-opacity:1.00"
        );
    }

    #[test]
    fn test_disabled_opacity() {
        let style = build_style(&Brush::BLACK, &Brush::BLACK, 1.0, false);
        assert_eq!(
            style,
            "fill:#000000;fill-opacity:0.25;stroke:#000000;stroke-width:1;stroke-opacity:0.25"
        );
    }

    #[test]
    fn test_non_solid_falls_back() {
        let style = build_style(&Brush::Other, &Brush::Other, 0.0, true);
        assert_eq!(
            style,
            "fill:#000;fill-opacity:1.00;stroke:#000;stroke-width:0;stroke-opacity:1.00"
        );
    }

    #[test]
    fn test_colors_and_width() {
        let fill = Brush::Solid(Color::from_rgb8(0x12, 0xab, 0xef));
        let stroke = Brush::Solid(Color::from_rgba8(255, 0, 0, 0));
        let style = build_style(&fill, &stroke, 1.5, true);
        assert_eq!(
            style,
            "fill:#12ABEF;fill-opacity:1.00;stroke:#FF0000;stroke-width:1.5;stroke-opacity:1.00"
        );
    }

    #[test]
    fn test_explicit_style_wins() {
        let style = resolve_style(Some("fill:red"), &Brush::BLACK, &Brush::BLACK, 2.0, false);
        assert_eq!(style, "fill:red");

        let built = resolve_style(None, &Brush::BLACK, &Brush::BLACK, 2.0, false);
        assert_eq!(built, build_style(&Brush::BLACK, &Brush::BLACK, 2.0, false));
    }
}
