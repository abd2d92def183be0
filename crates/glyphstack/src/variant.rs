//! Icon style families.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::IconError;

/// An icon style family.
///
/// Each variant maps to one top-level directory of the asset archive, named
/// by the lower-case variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconVariant {
    /// Filled glyphs.
    #[default]
    Solid,
    /// Outlined glyphs.
    Regular,
    /// Thin-stroke glyphs.
    Light,
    /// Hairline glyphs.
    Thin,
    /// Two-tone glyphs with a secondary layer.
    Duotone,
    /// Brand logos.
    Brands,
}

impl IconVariant {
    /// All variants in declaration order.
    pub const ALL: [IconVariant; 6] = [
        IconVariant::Solid,
        IconVariant::Regular,
        IconVariant::Light,
        IconVariant::Thin,
        IconVariant::Duotone,
        IconVariant::Brands,
    ];

    /// Directory name of this variant inside the asset archive.
    pub fn dir_name(self) -> &'static str {
        match self {
            IconVariant::Solid => "solid",
            IconVariant::Regular => "regular",
            IconVariant::Light => "light",
            IconVariant::Thin => "thin",
            IconVariant::Duotone => "duotone",
            IconVariant::Brands => "brands",
        }
    }

    /// Whether documents of this variant carry a secondary layer.
    #[inline]
    pub fn is_duotone(self) -> bool {
        self == IconVariant::Duotone
    }
}

impl fmt::Display for IconVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for IconVariant {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        IconVariant::ALL
            .into_iter()
            .find(|variant| variant.dir_name() == lower)
            .ok_or_else(|| IconError::config(format!("unknown icon variant '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_names_are_lowercase() {
        for variant in IconVariant::ALL {
            assert_eq!(variant.dir_name(), variant.dir_name().to_lowercase());
            assert_eq!(variant.to_string(), variant.dir_name());
        }
    }

    #[test]
    fn test_parse_variant() {
        assert_eq!("Duotone".parse::<IconVariant>().unwrap(), IconVariant::Duotone);
        assert_eq!("solid".parse::<IconVariant>().unwrap(), IconVariant::Solid);
        assert!("sharp".parse::<IconVariant>().is_err());
    }
}
