//! Parsed SVG shapes.
//!
//! [`SvgShape`] is the drawable handle produced from a synthesized icon
//! document. Parsing happens once; the resulting tree is shared by reference
//! and can be drawn any number of times under different transforms.

use std::sync::Arc;

use resvg::usvg;

use crate::error::RenderResult;
use crate::types::{Rect, Size};

/// A parsed SVG document together with its measured content bounds.
///
/// Clones share one tree.
///
/// ```
/// use glyphstack_render::SvgShape;
///
/// let shape = SvgShape::from_str(
///     r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M2 2H22V12H2Z"/></svg>"#,
/// ).unwrap();
///
/// assert_eq!(shape.natural_size().width, 24.0);
/// assert_eq!(shape.bounds().width(), 20.0);
/// ```
#[derive(Clone)]
pub struct SvgShape {
    tree: Arc<usvg::Tree>,
    /// Size declared by the document's viewBox or dimensions.
    natural_size: Size,
    /// Geometric bounds of the drawn content, in document units.
    bounds: Rect,
}

impl SvgShape {
    /// Parse an SVG document from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the SVG is invalid or malformed.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(document: &str) -> RenderResult<Self> {
        let options = usvg::Options::default();
        let tree = usvg::Tree::from_str(document, &options)?;
        Ok(Self::from_tree(tree))
    }

    /// Parse UTF-8 XML bytes.
    pub fn from_bytes(data: &[u8]) -> RenderResult<Self> {
        let options = usvg::Options::default();
        let tree = usvg::Tree::from_data(data, &options)?;
        Ok(Self::from_tree(tree))
    }

    fn from_tree(tree: usvg::Tree) -> Self {
        let size = tree.size();
        let natural_size = Size::new(size.width(), size.height());

        let root = tree.root();
        let bounds = if root.has_children() {
            let bbox = root.abs_bounding_box();
            Rect::new(bbox.x(), bbox.y(), bbox.width(), bbox.height())
        } else {
            Rect::ZERO
        };

        Self {
            tree: Arc::new(tree),
            natural_size,
            bounds,
        }
    }

    /// Get the natural size declared by the document.
    pub fn natural_size(&self) -> Size {
        self.natural_size
    }

    /// Get the bounds of the drawn content.
    ///
    /// An empty document reports [`Rect::ZERO`].
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Get the parsed tree.
    pub fn tree(&self) -> &usvg::Tree {
        &self.tree
    }
}

impl std::fmt::Debug for SvgShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SvgShape")
            .field("natural_size", &self.natural_size)
            .field("bounds", &self.bounds)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100"><path d="M10 20H60V90H10Z"/></svg>"#;

    #[test]
    fn test_parse_bounds() {
        let shape = SvgShape::from_str(SQUARE_SVG).expect("Should parse valid SVG");
        assert_eq!(shape.natural_size(), Size::new(100.0, 100.0));

        let bounds = shape.bounds();
        assert!((bounds.left() - 10.0).abs() < 0.01);
        assert!((bounds.top() - 20.0).abs() < 0.01);
        assert!((bounds.width() - 50.0).abs() < 0.01);
        assert!((bounds.height() - 70.0).abs() < 0.01);
    }

    #[test]
    fn test_empty_document_has_zero_bounds() {
        let shape = SvgShape::from_str(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10"></svg>"#,
        )
        .expect("Should parse empty SVG");
        assert!(shape.bounds().is_empty());
    }

    #[test]
    fn test_invalid_document() {
        assert!(SvgShape::from_str("<svg").is_err());
        assert!(SvgShape::from_bytes(b"not svg at all").is_err());
    }
}
