//! Drawing context trait and a recording implementation.
//!
//! [`DrawingContext`] is the narrow surface a host hands to the icon
//! compositor: clipping, pre-transforms and a "draw this shape" call, all
//! scoped through a save/restore stack.

use crate::svg::SvgShape;
use crate::transform::{Transform2D, TransformStack};
use crate::types::Rect;

/// Resampling quality requested by the host for a draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InterpolationMode {
    /// Let the backend decide.
    #[default]
    Default,
    /// Nearest-neighbour sampling.
    Low,
    /// Bilinear sampling.
    Medium,
    /// Bicubic sampling.
    High,
}

/// The drawing surface consumed by the icon compositor.
///
/// Transform and clip are saved together. [`scoped`](Self::scoped) pairs the
/// save with its restore:
///
/// ```
/// use glyphstack_render::{DrawingContext, RecordingContext, Rect, Transform2D};
///
/// let mut ctx = RecordingContext::new();
/// ctx.scoped(|ctx| {
///     ctx.clip_rect(Rect::new(0.0, 0.0, 32.0, 32.0));
///     ctx.concat_transform(&Transform2D::scale(2.0));
/// });
/// assert!(ctx.transform().is_identity());
/// assert!(ctx.clip_bounds().is_none());
/// ```
pub trait DrawingContext {
    fn save(&mut self);

    fn restore(&mut self);

    /// Intersect the clip region with a rectangle in the current coordinate space.
    fn clip_rect(&mut self, rect: Rect);

    /// Pre-multiply a transform onto the current transform.
    fn concat_transform(&mut self, transform: &Transform2D);

    /// Draw a parsed shape under the current transform and clip.
    ///
    /// `source` is the rectangle of the shape the host asked to draw.
    fn draw_shape(&mut self, source: Rect, shape: &SvgShape, mode: InterpolationMode);

    /// Run `f` with the current state saved, restoring it afterwards.
    fn scoped<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R
    where
        Self: Sized,
    {
        self.save();
        let result = f(self);
        self.restore();
        result
    }
}

/// Transform and device-space clip shared by the context implementations.
///
/// Clips are stored after mapping through the transform in effect when they
/// were set, so later transforms do not move them.
#[derive(Debug, Clone, Default)]
pub struct StateStack {
    transforms: TransformStack,
    clip: Option<Rect>,
    saved_clips: Vec<Option<Rect>>,
}

impl StateStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&mut self) {
        self.saved_clips.push(self.clip);
        self.transforms.save();
    }

    /// Unbalanced calls are ignored.
    pub fn restore(&mut self) {
        let Some(clip) = self.saved_clips.pop() else {
            return;
        };
        self.clip = clip;
        self.transforms.restore();
    }

    #[inline]
    pub fn transform(&self) -> &Transform2D {
        self.transforms.current()
    }

    #[inline]
    pub fn concat_transform(&mut self, transform: &Transform2D) {
        self.transforms.concat(transform);
    }

    /// Narrow the clip to `rect` in the current coordinate space.
    ///
    /// Disjoint clips collapse to [`Rect::ZERO`].
    pub fn clip_rect(&mut self, rect: Rect) {
        let device = self.transform().transform_rect(&rect);
        let narrowed = match self.clip {
            None => device,
            Some(clip) => clip.intersect(&device).unwrap_or(Rect::ZERO),
        };
        self.clip = Some(narrowed);
    }

    /// Current clip in device coordinates, `None` when unclipped.
    #[inline]
    pub fn clip_bounds(&self) -> Option<Rect> {
        self.clip
    }

    /// Number of outstanding saves.
    #[inline]
    pub fn depth(&self) -> usize {
        self.saved_clips.len()
    }
}

/// A single recorded draw call.
#[derive(Debug, Clone)]
pub struct DrawCommand {
    /// Source rectangle passed by the caller.
    pub source: Rect,
    /// Transform in effect when the shape was drawn.
    pub transform: Transform2D,
    /// Clip in effect when the shape was drawn, in device coordinates.
    pub clip: Option<Rect>,
    /// Content bounds of the drawn shape.
    pub shape_bounds: Rect,
    /// Requested interpolation.
    pub mode: InterpolationMode,
}

/// A [`DrawingContext`] that records draw calls instead of rasterizing them.
///
/// Useful as a display list and for inspecting what a compositor produced.
#[derive(Debug, Clone, Default)]
pub struct RecordingContext {
    state: StateStack,
    commands: Vec<DrawCommand>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded draw calls in submission order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded draw calls, leaving the context empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn transform(&self) -> &Transform2D {
        self.state.transform()
    }

    pub fn clip_bounds(&self) -> Option<Rect> {
        self.state.clip_bounds()
    }

    /// Outstanding saves.
    pub fn depth(&self) -> usize {
        self.state.depth()
    }
}

impl DrawingContext for RecordingContext {
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
        self.commands.push(DrawCommand {
            source,
            transform: *self.state.transform(),
            clip: self.state.clip_bounds(),
            shape_bounds: shape.bounds(),
            mode,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_transform_comes_back() {
        let mut state = StateStack::new();
        state.concat_transform(&Transform2D::translate(10.0, 20.0));
        state.save();
        state.concat_transform(&Transform2D::translate(5.0, 5.0));
        assert_eq!(state.transform().translation(), (15.0, 25.0));

        state.restore();
        assert_eq!(state.transform().translation(), (10.0, 20.0));
        state.restore();
        assert_eq!(state.depth(), 0);
    }

    #[test]
    fn test_clips_narrow_and_restore() {
        let mut state = StateStack::new();
        state.clip_rect(Rect::new(0.0, 0.0, 64.0, 64.0));
        state.save();

        state.clip_rect(Rect::new(32.0, 16.0, 64.0, 64.0));
        assert_eq!(state.clip_bounds(), Some(Rect::new(32.0, 16.0, 32.0, 48.0)));
        state.clip_rect(Rect::new(200.0, 0.0, 8.0, 8.0));
        assert_eq!(state.clip_bounds(), Some(Rect::ZERO));

        state.restore();
        assert_eq!(state.clip_bounds(), Some(Rect::new(0.0, 0.0, 64.0, 64.0)));
    }

    #[test]
    fn test_clip_is_transformed() {
        let mut state = StateStack::new();
        state.concat_transform(&Transform2D::translate(10.0, 10.0));
        state.clip_rect(Rect::new(0.0, 0.0, 20.0, 20.0));
        state.concat_transform(&Transform2D::scale(4.0));
        assert_eq!(state.clip_bounds(), Some(Rect::new(10.0, 10.0, 20.0, 20.0)));
    }

    #[test]
    fn test_scoped_restores_state() {
        let mut ctx = RecordingContext::new();
        let depth = ctx.scoped(|ctx| {
            ctx.concat_transform(&Transform2D::scale(3.0));
            ctx.scoped(|ctx| ctx.depth())
        });
        assert_eq!(depth, 2);
        assert_eq!(ctx.depth(), 0);
        assert!(ctx.transform().is_identity());
    }
}
