//! Icon stack compositor.
//!
//! [`IconStack`] is the long-lived object a host keeps per icon. It resolves
//! its documents through a shared [`IconLibrary`], parses them once into
//! [`SvgShape`]s, and on every [`draw`](IconStack::draw) asks the placement
//! engine where each shape goes.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use glyphstack::{AssetStore, IconLibrary, IconSpec, IconStack, IconVariant, PlacementCode};
//! use glyphstack_render::{InterpolationMode, PixmapContext, Rect};
//!
//! let library = Arc::new(IconLibrary::new(AssetStore::open("icons.zip")?));
//! let spec = IconSpec::new("user")
//!     .with_minor("circle-check")
//!     .with_variant(IconVariant::Duotone)
//!     .with_placement(PlacementCode::X2 | PlacementCode::HALF);
//!
//! let mut icon = IconStack::new(library, &spec);
//! icon.create_svg(true)?;
//!
//! let mut ctx = PixmapContext::new(64, 64)?;
//! let target = Rect::new(0.0, 0.0, 64.0, 64.0);
//! icon.draw(&mut ctx, target, target, InterpolationMode::High);
//! # Ok::<(), glyphstack::IconError>(())
//! ```

use std::sync::Arc;

use glyphstack_render::{DrawingContext, InterpolationMode, Rect, Size, SvgShape};
use tracing::{debug, trace, warn};

use crate::config::{IconDefaults, IconSpec, NATURAL_SIZE, ResolvedIcon};
use crate::error::IconResult;
use crate::library::IconLibrary;
use crate::logging::targets;
use crate::placement::{ShapeRole, compute_layout};
use crate::style::Brush;

/// State of the secondary shape.
#[derive(Debug, Clone, Default)]
enum Secondary {
    /// No secondary name, or no such icon in the archive.
    #[default]
    Absent,
    /// Parsed and drawable.
    Ready(SvgShape),
    /// Named and found but unusable; the whole stack is not drawable.
    Broken,
}

/// A primary glyph with an optional corner badge.
#[derive(Debug)]
pub struct IconStack {
    library: Arc<IconLibrary>,
    icon: ResolvedIcon,
    enabled: Option<bool>,
    primary: Option<SvgShape>,
    secondary: Secondary,
}

impl IconStack {
    /// Create an icon stack using the built-in [`IconDefaults`].
    ///
    /// Nothing is resolved until [`create_svg`](Self::create_svg) is called.
    pub fn new(library: Arc<IconLibrary>, spec: &IconSpec) -> Self {
        Self::with_defaults(library, spec, &IconDefaults::default())
    }

    /// Create an icon stack with explicit defaults for unset properties.
    pub fn with_defaults(library: Arc<IconLibrary>, spec: &IconSpec, defaults: &IconDefaults) -> Self {
        Self {
            library,
            icon: spec.resolve(defaults),
            enabled: None,
            primary: None,
            secondary: Secondary::Absent,
        }
    }

    /// The resolved icon properties.
    pub fn icon(&self) -> &ResolvedIcon {
        &self.icon
    }

    /// Natural size of every icon stack.
    pub fn size(&self) -> Size {
        NATURAL_SIZE
    }

    /// The enabled state the current shapes were built for, if any.
    pub fn enabled(&self) -> Option<bool> {
        self.enabled
    }

    /// Whether the stack has something to draw.
    pub fn is_ready(&self) -> bool {
        self.primary.is_some() && !matches!(self.secondary, Secondary::Broken)
    }

    /// The parsed primary shape.
    pub fn primary(&self) -> Option<&SvgShape> {
        self.primary.as_ref()
    }

    /// The parsed secondary shape.
    pub fn secondary(&self) -> Option<&SvgShape> {
        match &self.secondary {
            Secondary::Ready(shape) => Some(shape),
            _ => None,
        }
    }

    /// Resolve and parse the documents for the given enabled state.
    ///
    /// The primary is resolved first; the secondary only if a minor name is
    /// set and the primary exists. A missing icon leaves the stack without
    /// that shape; a missing secondary falls back to drawing the primary alone.
    ///
    /// # Errors
    ///
    /// Returns an error if an archive entry is unreadable or a document fails
    /// to parse. The stack is left not ready in that case.
    pub fn create_svg(&mut self, enabled: bool) -> IconResult<()> {
        self.enabled = Some(enabled);
        self.primary = None;
        self.secondary = Secondary::Absent;

        let Some(major) = self.icon.major.clone() else {
            warn!(target: targets::ICON, "icon has no primary name");
            return Ok(());
        };

        let Some(primary) = self.load_shape(&major, &self.icon.primary, enabled)? else {
            warn!(target: targets::ICON, variant = %self.icon.variant, name = %major, "primary icon not found");
            return Ok(());
        };
        self.primary = Some(primary);

        if let Some(minor) = self.icon.minor.clone() {
            match self.load_shape(&minor, &self.icon.secondary, enabled) {
                Ok(Some(shape)) => self.secondary = Secondary::Ready(shape),
                Ok(None) => {
                    debug!(target: targets::ICON, name = %minor, "secondary icon not found, drawing primary alone");
                }
                Err(e) => {
                    self.secondary = Secondary::Broken;
                    return Err(e);
                }
            }
        }

        Ok(())
    }

    /// Rebuild the shapes if the enabled state changed.
    ///
    /// Documents come from the library cache, so switching back and forth
    /// only re-parses.
    pub fn set_enabled(&mut self, enabled: bool) -> IconResult<()> {
        if self.enabled == Some(enabled) {
            return Ok(());
        }
        trace!(target: targets::ICON, enabled, "enabled state changed");
        self.create_svg(enabled)
    }

    fn load_shape(&self, name: &str, fill: &Brush, enabled: bool) -> IconResult<Option<SvgShape>> {
        let document = self.library.get_or_extract(
            self.icon.variant,
            name,
            fill,
            &self.icon.outline,
            Some(self.icon.stroke_width),
            enabled,
            self.icon.style.as_deref(),
        )?;

        let Some(document) = document else {
            return Ok(None);
        };

        SvgShape::from_str(&document)
            .inspect_err(|e| warn!(target: targets::ICON, name, error = %e, "failed to parse icon document"))
            .map(Some)
            .map_err(Into::into)
    }

    /// Draw the stack into `target`.
    ///
    /// Returns the number of shapes drawn: 0 when not ready or when the
    /// shape bounds are degenerate, 1 for a lone primary, 2 for a stack.
    pub fn draw<C: DrawingContext>(
        &self,
        ctx: &mut C,
        source: Rect,
        target: Rect,
        mode: InterpolationMode,
    ) -> usize {
        if !self.is_ready() {
            return 0;
        }
        let Some(primary) = self.primary.as_ref() else {
            return 0;
        };
        let secondary = self.secondary();

        let Some(layout) = compute_layout(
            self.icon.placement.decode(),
            primary.bounds(),
            secondary.map(SvgShape::bounds),
            target,
            self.icon.stroke_width as f32,
        ) else {
            debug!(target: targets::ICON, bounds = ?primary.bounds(), "degenerate icon bounds, nothing drawn");
            return 0;
        };

        // A lone primary is drawn from its own content bounds.
        let source = if layout.second.is_some() {
            source
        } else {
            primary.bounds()
        };

        ctx.scoped(|ctx| {
            ctx.clip_rect(target);

            let mut drawn = 0;
            for slot in layout.slots() {
                let shape = match slot.role {
                    ShapeRole::Primary => primary,
                    ShapeRole::Secondary => match secondary {
                        Some(shape) => shape,
                        None => continue,
                    },
                };

                ctx.scoped(|ctx| {
                    ctx.concat_transform(&slot.transform.combined());
                    ctx.draw_shape(source, shape, mode);
                });
                drawn += 1;
            }
            drawn
        })
    }
}
