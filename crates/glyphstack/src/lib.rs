//! Duotone icon stacks.
//!
//! glyphstack draws a primary glyph with an optional secondary badge glyph
//! layered on top of (or beneath) it. Glyph path data comes from a packed ZIP
//! archive, is turned into styled SVG documents that are cached per
//! `(variant, name, style)`, and is placed into the target rectangle by a
//! placement code.
//!
//! # Overview
//!
//! - [`AssetStore`]: read-only lookup of `width|height|path` records.
//! - [`build_style`]: the inline style string for a fill, stroke and state.
//! - [`IconLibrary`]: document synthesis backed by a [`DocumentCache`].
//! - [`compute_layout`]: placement code and shape bounds to transforms.
//! - [`IconStack`]: the compositor a host keeps per icon.
//!
//! # Placement
//!
//! ```
//! use glyphstack::{PlacementCode, ShapeRole, compute_layout};
//! use glyphstack_render::Rect;
//!
//! let glyph = Rect::new(0.0, 0.0, 512.0, 512.0);
//! let target = Rect::new(0.0, 0.0, 32.0, 32.0);
//!
//! // Badge beneath the primary, in the top-left corner.
//! let code = PlacementCode::UNDER | PlacementCode::TOP | PlacementCode::LEFT;
//! let layout = compute_layout(code.decode(), glyph, Some(glyph), target, 0.0).unwrap();
//!
//! assert!(layout.swapped);
//! assert_eq!(layout.first.role, ShapeRole::Secondary);
//! ```

pub mod logging;

mod archive;
mod cache;
mod config;
mod error;
mod icon;
mod library;
mod placement;
mod style;
mod variant;

pub use archive::{AssetStore, PathRecord, SECONDARY_MARKER};
pub use cache::{DocumentCache, DocumentCacheStats, IconKey};
pub use config::{IconDefaults, IconSpec, NATURAL_SIZE, ResolvedIcon, parse_brush};
pub use error::{IconError, IconResult};
pub use icon::IconStack;
pub use library::{DUOTONE_DEFS, IconLibrary, SVG_NAMESPACE, synthesize_document};
pub use placement::{
    Corners, DrawSlot, Layout, Placement, PlacementCode, ScaleTiers, ShapeRole, ShrinkTiers,
    TransformPair, compute_layout,
};
pub use style::{
    Brush, DISABLED_OPACITY, ENABLED_OPACITY, FALLBACK_HEX, build_style, resolve_style,
};
pub use variant::IconVariant;
