//! Geometry, transforms and drawing surfaces for glyphstack.
//!
//! This crate provides the rendering layer under the icon compositor:
//! basic geometry types, 2D affine transforms, parsed SVG shapes and the
//! [`DrawingContext`] trait with two implementations.
//!
//! # Drawing a Shape
//!
//! ```
//! use glyphstack_render::{
//!     DrawingContext, InterpolationMode, RecordingContext, Rect, SvgShape, Transform2D,
//! };
//!
//! let shape = SvgShape::from_str(
//!     r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path d="M0 0H16V16H0Z"/></svg>"#,
//! ).unwrap();
//!
//! let mut ctx = RecordingContext::new();
//! ctx.scoped(|ctx| {
//!     ctx.clip_rect(Rect::new(0.0, 0.0, 32.0, 32.0));
//!     ctx.concat_transform(&Transform2D::scale(2.0));
//!     ctx.draw_shape(shape.bounds(), &shape, InterpolationMode::Default);
//! });
//!
//! assert_eq!(ctx.commands().len(), 1);
//! ```

mod context;
mod error;
mod pixmap;
mod svg;
mod transform;
mod types;

pub use context::{
    DrawCommand, DrawingContext, InterpolationMode, RecordingContext, StateStack,
};
pub use error::{RenderError, RenderResult};
pub use pixmap::PixmapContext;
pub use svg::SvgShape;
pub use transform::{Transform2D, TransformStack};
pub use types::{Color, Point, Rect, Size};

// Re-export the rasterizer so hosts can reach tiny-skia types.
pub use resvg;
