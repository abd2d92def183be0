//! Logging facilities.
//!
//! glyphstack uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("glyphstack::cache=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Asset archive access.
    pub const ARCHIVE: &str = "glyphstack::archive";
    /// Document synthesis and the document cache.
    pub const CACHE: &str = "glyphstack::cache";
    /// Icon composition and drawing.
    pub const ICON: &str = "glyphstack::icon";
    /// Configuration loading.
    pub const CONFIG: &str = "glyphstack::config";
}
