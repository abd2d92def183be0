//! Errors raised while parsing shapes or allocating pixmaps.

use thiserror::Error;

/// Errors that can occur while parsing or rasterizing vector shapes.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The SVG document could not be parsed.
    #[error("failed to parse SVG document: {0}")]
    SvgParse(#[from] resvg::usvg::Error),

    /// A pixmap was requested with a zero dimension.
    #[error("invalid surface dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Shorthand used throughout this crate.
pub type RenderResult<T> = Result<T, RenderError>;
