//! Icon defaults and per-icon configuration.
//!
//! [`IconDefaults`] holds the values used for anything an [`IconSpec`] leaves
//! unset. Defaults can be built in code or loaded from TOML:
//!
//! ```
//! use glyphstack::{IconDefaults, IconVariant, PlacementCode};
//!
//! let defaults = IconDefaults::from_toml_str(r##"
//! variant = "duotone"
//! placement = ["x3", "quarter", "top"]
//! primary = "#1E90FF"
//! outline = "transparent"
//! stroke_width = 1.5
//! "##).unwrap();
//!
//! assert_eq!(defaults.variant, IconVariant::Duotone);
//! assert_eq!(
//!     defaults.placement,
//!     PlacementCode::X3 | PlacementCode::QUARTER | PlacementCode::TOP,
//! );
//! ```

use glyphstack_render::{Color, Size};
use serde::Deserialize;
use tracing::debug;

use crate::error::{IconError, IconResult};
use crate::logging::targets;
use crate::placement::PlacementCode;
use crate::style::Brush;
use crate::variant::IconVariant;

/// Natural size reported by every icon stack.
pub const NATURAL_SIZE: Size = Size::new(512.0, 512.0);

/// Fallback values for unset icon properties.
#[derive(Debug, Clone, PartialEq)]
pub struct IconDefaults {
    /// Style family.
    pub variant: IconVariant,
    /// Badge placement.
    pub placement: PlacementCode,
    /// Primary glyph name.
    pub major: Option<String>,
    /// Secondary glyph name.
    pub minor: Option<String>,
    /// Explicit inline style.
    pub style: Option<String>,
    /// Stroke width.
    pub stroke_width: f64,
    /// Primary fill.
    pub primary: Brush,
    /// Secondary fill.
    pub secondary: Brush,
    /// Stroke paint shared by both shapes.
    pub outline: Brush,
}

impl Default for IconDefaults {
    fn default() -> Self {
        Self {
            variant: IconVariant::Solid,
            placement: PlacementCode::X2 | PlacementCode::HALF,
            major: None,
            minor: None,
            style: None,
            stroke_width: 0.0,
            primary: Brush::BLACK,
            secondary: Brush::BLACK,
            outline: Brush::TRANSPARENT,
        }
    }
}

impl IconDefaults {
    /// Create the built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default variant.
    pub fn with_variant(mut self, variant: IconVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the default placement.
    pub fn with_placement(mut self, placement: PlacementCode) -> Self {
        self.placement = placement;
        self
    }

    /// Set the default primary glyph name.
    pub fn with_major(mut self, major: impl Into<String>) -> Self {
        self.major = Some(major.into());
        self
    }

    /// Set the default secondary glyph name.
    pub fn with_minor(mut self, minor: impl Into<String>) -> Self {
        self.minor = Some(minor.into());
        self
    }

    /// Set the default explicit style.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Set the default stroke width.
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// Set the default primary fill.
    pub fn with_primary(mut self, brush: impl Into<Brush>) -> Self {
        self.primary = brush.into();
        self
    }

    /// Set the default secondary fill.
    pub fn with_secondary(mut self, brush: impl Into<Brush>) -> Self {
        self.secondary = brush.into();
        self
    }

    /// Set the default outline.
    pub fn with_outline(mut self, brush: impl Into<Brush>) -> Self {
        self.outline = brush.into();
        self
    }

    /// Load defaults from a TOML document. Absent keys keep their built-in values.
    ///
    /// Colors are `#RRGGBB`, `#RRGGBBAA` or `"transparent"`. The placement is
    /// either an integer bitmask or a list of flag names.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::Config`] for invalid TOML or unrecognized values.
    pub fn from_toml_str(source: &str) -> IconResult<Self> {
        let file: DefaultsFile =
            toml::from_str(source).map_err(|e| IconError::config(e.message().to_string()))?;
        let defaults = file.into_defaults()?;
        debug!(target: targets::CONFIG, ?defaults, "loaded icon defaults");
        Ok(defaults)
    }

    /// Read and parse a TOML defaults file.
    pub fn load(path: impl AsRef<std::path::Path>) -> IconResult<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source)
    }
}

/// On-disk shape of [`IconDefaults`].
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DefaultsFile {
    variant: Option<IconVariant>,
    placement: Option<PlacementValue>,
    major: Option<String>,
    minor: Option<String>,
    style: Option<String>,
    stroke_width: Option<f64>,
    primary: Option<String>,
    secondary: Option<String>,
    outline: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PlacementValue {
    Bits(u32),
    Flags(Vec<String>),
}

impl PlacementValue {
    fn into_code(self) -> IconResult<PlacementCode> {
        match self {
            PlacementValue::Bits(bits) => Ok(PlacementCode::from_bits(bits)),
            PlacementValue::Flags(names) => names.iter().try_fold(PlacementCode::NONE, |code, name| {
                PlacementCode::from_name(name)
                    .map(|flag| code | flag)
                    .ok_or_else(|| IconError::config(format!("unknown placement flag '{name}'")))
            }),
        }
    }
}

impl DefaultsFile {
    fn into_defaults(self) -> IconResult<IconDefaults> {
        let mut defaults = IconDefaults::default();
        if let Some(variant) = self.variant {
            defaults.variant = variant;
        }
        if let Some(placement) = self.placement {
            defaults.placement = placement.into_code()?;
        }
        if let Some(width) = self.stroke_width {
            if !width.is_finite() || width < 0.0 {
                return Err(IconError::config(format!("invalid stroke width {width}")));
            }
            defaults.stroke_width = width;
        }
        if let Some(primary) = self.primary {
            defaults.primary = parse_brush(&primary)?;
        }
        if let Some(secondary) = self.secondary {
            defaults.secondary = parse_brush(&secondary)?;
        }
        if let Some(outline) = self.outline {
            defaults.outline = parse_brush(&outline)?;
        }
        defaults.major = self.major;
        defaults.minor = self.minor;
        defaults.style = self.style;
        Ok(defaults)
    }
}

/// Parse a brush from a hex color or `"transparent"`.
pub fn parse_brush(value: &str) -> IconResult<Brush> {
    if value.eq_ignore_ascii_case("transparent") {
        return Ok(Brush::TRANSPARENT);
    }
    if !value.starts_with('#') {
        return Err(IconError::config(format!("color '{value}' must start with '#'")));
    }
    Color::from_hex(value)
        .map(Brush::Solid)
        .ok_or_else(|| IconError::config(format!("invalid color '{value}'")))
}

/// Properties of a single icon stack. Unset values come from [`IconDefaults`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconSpec {
    pub variant: Option<IconVariant>,
    pub placement: Option<PlacementCode>,
    pub major: Option<String>,
    pub minor: Option<String>,
    pub style: Option<String>,
    pub stroke_width: Option<f64>,
    pub primary: Option<Brush>,
    pub secondary: Option<Brush>,
    pub outline: Option<Brush>,
}

impl IconSpec {
    /// Create a spec for a primary glyph.
    pub fn new(major: impl Into<String>) -> Self {
        Self {
            major: Some(major.into()),
            ..Self::default()
        }
    }

    pub fn with_variant(mut self, variant: IconVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn with_placement(mut self, placement: PlacementCode) -> Self {
        self.placement = Some(placement);
        self
    }

    /// Set the secondary (badge) glyph.
    pub fn with_minor(mut self, minor: impl Into<String>) -> Self {
        self.minor = Some(minor.into());
        self
    }

    /// Use an explicit inline style instead of one built from the brushes.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn with_primary(mut self, brush: impl Into<Brush>) -> Self {
        self.primary = Some(brush.into());
        self
    }

    pub fn with_secondary(mut self, brush: impl Into<Brush>) -> Self {
        self.secondary = Some(brush.into());
        self
    }

    pub fn with_outline(mut self, brush: impl Into<Brush>) -> Self {
        self.outline = Some(brush.into());
        self
    }

    /// Fill every unset value from `defaults`.
    pub fn resolve(&self, defaults: &IconDefaults) -> ResolvedIcon {
        ResolvedIcon {
            variant: self.variant.unwrap_or(defaults.variant),
            placement: self.placement.unwrap_or(defaults.placement),
            major: self.major.clone().or_else(|| defaults.major.clone()),
            minor: self.minor.clone().or_else(|| defaults.minor.clone()),
            style: self.style.clone().or_else(|| defaults.style.clone()),
            stroke_width: self.stroke_width.unwrap_or(defaults.stroke_width),
            primary: self.primary.unwrap_or(defaults.primary),
            secondary: self.secondary.unwrap_or(defaults.secondary),
            outline: self.outline.unwrap_or(defaults.outline),
        }
    }
}

/// An [`IconSpec`] with every default applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedIcon {
    pub variant: IconVariant,
    pub placement: PlacementCode,
    pub major: Option<String>,
    pub minor: Option<String>,
    pub style: Option<String>,
    pub stroke_width: f64,
    pub primary: Brush,
    pub secondary: Brush,
    pub outline: Brush,
}
