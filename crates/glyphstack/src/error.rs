//! Error types for icon resolution.

use glyphstack_render::RenderError;

/// Result type alias for icon operations.
pub type IconResult<T> = std::result::Result<T, IconError>;

/// Errors that can occur while resolving, synthesizing or configuring icons.
///
/// An icon that simply does not exist is not an error; lookups report it as
/// `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// The asset archive could not be opened or an entry could not be read.
    #[error("Asset archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// I/O failure while reading an archive entry or file.
    #[error("Failed to read asset data: {0}")]
    Io(#[from] std::io::Error),

    /// An archive entry does not follow the `width|height|path` record format.
    #[error("Malformed asset entry '{entry}': {reason}")]
    MalformedAsset { entry: String, reason: String },

    /// A synthesized document could not be turned into a drawable shape.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl IconError {
    /// Create a malformed asset error.
    pub fn malformed(entry: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedAsset {
            entry: entry.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
