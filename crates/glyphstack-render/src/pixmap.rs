//! Software rasterization backend.
//!
//! [`PixmapContext`] implements [`DrawingContext`] on top of a tiny-skia
//! pixmap, rendering shapes with resvg.
//!
//! # Example
//!
//! ```
//! use glyphstack_render::{DrawingContext, InterpolationMode, PixmapContext, Rect, SvgShape};
//!
//! let shape = SvgShape::from_str(
//!     r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10"><path d="M0 0H10V10H0Z"/></svg>"#,
//! ).unwrap();
//!
//! let mut ctx = PixmapContext::new(10, 10).unwrap();
//! ctx.draw_shape(shape.bounds(), &shape, InterpolationMode::Default);
//! assert_eq!(ctx.pixel(5, 5).map(|p| p.alpha()), Some(255));
//! ```

use resvg::tiny_skia;
use tracing::trace;

use crate::context::{DrawingContext, InterpolationMode, StateStack};
use crate::error::{RenderError, RenderResult};
use crate::svg::SvgShape;
use crate::transform::Transform2D;
use crate::types::{Rect, Size};

impl InterpolationMode {
    /// Map to the tiny-skia filter quality used when compositing layers.
    pub fn filter_quality(self) -> tiny_skia::FilterQuality {
        match self {
            InterpolationMode::Low => tiny_skia::FilterQuality::Nearest,
            InterpolationMode::Default | InterpolationMode::Medium => {
                tiny_skia::FilterQuality::Bilinear
            }
            InterpolationMode::High => tiny_skia::FilterQuality::Bicubic,
        }
    }
}

/// A [`DrawingContext`] that rasterizes into an RGBA pixmap.
pub struct PixmapContext {
    pixmap: tiny_skia::Pixmap,
    state: StateStack,
}

impl PixmapContext {
    /// Create a transparent pixmap context of the given pixel size.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidDimensions`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        let pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or(RenderError::InvalidDimensions { width, height })?;
        Ok(Self {
            pixmap,
            state: StateStack::new(),
        })
    }

    /// Size of the surface in pixels.
    pub fn size(&self) -> Size {
        Size::new(self.pixmap.width() as f32, self.pixmap.height() as f32)
    }

    /// Get a single pixel (premultiplied).
    pub fn pixel(&self, x: u32, y: u32) -> Option<tiny_skia::PremultipliedColorU8> {
        self.pixmap.pixel(x, y)
    }

    /// Borrow the underlying pixmap.
    pub fn pixmap(&self) -> &tiny_skia::Pixmap {
        &self.pixmap
    }

    /// Consume the context and return the pixmap.
    pub fn into_pixmap(self) -> tiny_skia::Pixmap {
        self.pixmap
    }

    /// Build a mask covering the current clip, or `None` when unclipped.
    fn clip_mask(&self, clip: Rect) -> Option<tiny_skia::Mask> {
        let mut mask = tiny_skia::Mask::new(self.pixmap.width(), self.pixmap.height())?;
        if let Some(rect) =
            tiny_skia::Rect::from_xywh(clip.left(), clip.top(), clip.width(), clip.height())
        {
            let path = tiny_skia::PathBuilder::from_rect(rect);
            mask.fill_path(
                &path,
                tiny_skia::FillRule::Winding,
                false,
                tiny_skia::Transform::identity(),
            );
        }
        Some(mask)
    }
}

impl DrawingContext for PixmapContext {
    fn save(&mut self) {
        self.state.save();
    }

    fn restore(&mut self) {
        self.state.restore();
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.state.clip_rect(rect);
    }

    fn concat_transform(&mut self, transform: &Transform2D) {
        self.state.concat_transform(transform);
    }

    fn draw_shape(&mut self, source: Rect, shape: &SvgShape, mode: InterpolationMode) {
        let transform = self.state.transform().to_tiny_skia();

        trace!(
            source_width = source.width(),
            source_height = source.height(),
            "rasterizing shape"
        );

        match self.state.clip_bounds() {
            None => resvg::render(shape.tree(), transform, &mut self.pixmap.as_mut()),
            Some(clip) if clip.is_empty() => {}
            Some(clip) => {
                // Render into a scratch layer, then composite it through the clip mask.
                let Some(mut layer) =
                    tiny_skia::Pixmap::new(self.pixmap.width(), self.pixmap.height())
                else {
                    return;
                };
                resvg::render(shape.tree(), transform, &mut layer.as_mut());

                let mask = self.clip_mask(clip);
                let paint = tiny_skia::PixmapPaint {
                    quality: mode.filter_quality(),
                    ..tiny_skia::PixmapPaint::default()
                };
                self.pixmap.draw_pixmap(
                    0,
                    0,
                    layer.as_ref(),
                    &paint,
                    tiny_skia::Transform::identity(),
                    mask.as_ref(),
                );
            }
        }
    }
}

impl std::fmt::Debug for PixmapContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixmapContext")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("depth", &self.state.depth())
            .finish()
    }
}
