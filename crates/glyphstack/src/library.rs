//! Styled SVG synthesis on top of the asset store.
//!
//! [`IconLibrary`] owns one [`AssetStore`] and one [`DocumentCache`]. It turns
//! a `(variant, name, style)` request into a complete SVG document, reading
//! the archive at most once per unique key. Share a library between icons
//! with an `Arc`.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::archive::{AssetStore, PathRecord, SECONDARY_MARKER};
use crate::cache::{DocumentCache, IconKey};
use crate::error::IconResult;
use crate::logging::targets;
use crate::style::{Brush, resolve_style};
use crate::variant::IconVariant;

/// SVG namespace written on every synthesized document.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Stylesheet giving duotone secondary layers their default opacity.
pub const DUOTONE_DEFS: &str = "<defs><style>.fa-secondary{opacity:.4}</style></defs>";

/// Asset store plus document cache.
#[derive(Debug)]
pub struct IconLibrary {
    store: AssetStore,
    cache: DocumentCache,
}

impl IconLibrary {
    /// Create a library over an opened asset store with an empty cache.
    pub fn new(store: AssetStore) -> Self {
        Self {
            store,
            cache: DocumentCache::new(),
        }
    }

    /// Create a library that reuses an existing cache.
    pub fn with_cache(store: AssetStore, cache: DocumentCache) -> Self {
        Self { store, cache }
    }

    /// The underlying asset store.
    pub fn store(&self) -> &AssetStore {
        &self.store
    }

    /// The document cache.
    pub fn cache(&self) -> &DocumentCache {
        &self.cache
    }

    /// Get the styled document for an icon, synthesizing it on first use.
    ///
    /// `explicit_style`, when given, is used verbatim as the inline style and
    /// cache key; otherwise the style is built from the brushes, the stroke
    /// width (default 0) and the enabled state.
    ///
    /// Returns `Ok(None)` if the icon does not exist in the variant. Absent
    /// icons are not cached.
    ///
    /// # Errors
    ///
    /// Returns an error if the archive entry exists but is unreadable or malformed.
    #[allow(clippy::too_many_arguments)]
    pub fn get_or_extract(
        &self,
        variant: IconVariant,
        name: &str,
        fill: &Brush,
        stroke: &Brush,
        stroke_width: Option<f64>,
        is_enabled: bool,
        explicit_style: Option<&str>,
    ) -> IconResult<Option<Arc<str>>> {
        let style = resolve_style(
            explicit_style,
            fill,
            stroke,
            stroke_width.unwrap_or(0.0),
            is_enabled,
        );
        self.get_or_extract_key(IconKey::new(variant, name, style))
    }

    /// Get the document for a fully formed key, synthesizing it on first use.
    pub fn get_or_extract_key(&self, key: IconKey) -> IconResult<Option<Arc<str>>> {
        if let Some(document) = self.cache.get(&key) {
            trace!(target: targets::CACHE, variant = %key.variant(), name = key.name(), "document cache hit");
            return Ok(Some(document));
        }

        let Some(record) = self.store.lookup(key.variant(), key.name())? else {
            return Ok(None);
        };

        let document: Arc<str> = Arc::from(synthesize_document(key.variant(), &record, key.style()));
        debug!(
            target: targets::CACHE,
            variant = %key.variant(),
            name = key.name(),
            bytes = document.len(),
            "synthesized icon document"
        );

        self.cache.insert(key, Arc::clone(&document));
        Ok(Some(document))
    }
}

/// Build the complete SVG document for a record and inline style.
///
/// Duotone records get the secondary-layer stylesheet, and their marker is
/// expanded into a second styled `<path>` element.
pub fn synthesize_document(variant: IconVariant, record: &PathRecord, style: &str) -> String {
    let mut svg = String::with_capacity(record.path_data.len() + 2 * style.len() + 160);

    svg.push_str(&format!(
        r#"<svg xmlns="{SVG_NAMESPACE}" viewBox="0 0 {} {}">"#,
        record.width, record.height
    ));
    if variant.is_duotone() {
        svg.push_str(DUOTONE_DEFS);
    }

    let path_open = format!(r#"<path style="{style}" d=""#);
    svg.push_str(&path_open);
    if variant.is_duotone() {
        svg.push_str(
            &record
                .path_data
                .replace(SECONDARY_MARKER, &format!("{SECONDARY_MARKER}{path_open}")),
        );
    } else {
        svg.push_str(&record.path_data);
    }
    svg.push_str(r#""/></svg>"#);

    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path_data: &str) -> PathRecord {
        PathRecord {
            width: "640".to_string(),
            height: "512".to_string(),
            path_data: path_data.to_string(),
        }
    }

    #[test]
    fn test_solid_document() {
        let doc = synthesize_document(IconVariant::Solid, &record("M0 0H10V10Z"), "fill:#000");
        assert_eq!(
            doc,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 640 512"><path style="fill:#000" d="M0 0H10V10Z"/></svg>"#
        );
    }

    #[test]
    fn test_duotone_document() {
        let data = r#"M0 0H10V10Z" class="fa-secondary"/>M1 1H5V5Z"#;
        let doc = synthesize_document(IconVariant::Duotone, &record(data), "S");

        assert_eq!(
            doc,
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 640 512">"#,
                "<defs><style>.fa-secondary{opacity:.4}</style></defs>",
                r#"<path style="S" d="M0 0H10V10Z" class="fa-secondary"/>"#,
                r#"<path style="S" d="M1 1H5V5Z"/></svg>"#,
            )
        );
    }

    #[test]
    fn test_marker_ignored_outside_duotone() {
        let data = r#"M0 0Z" class="fa-secondary"/>"#;
        let doc = synthesize_document(IconVariant::Solid, &record(data), "S");
        assert_eq!(doc.matches("<path").count(), 1);
        assert!(!doc.contains("<defs>"));
    }
}
