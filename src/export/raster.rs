//! Card rasterization - SVG markup → PNG bytes via resvg

use crate::error::{CardError, CardResult};
use resvg::{tiny_skia, usvg};

/// Scale factor applied at rasterization; the 400-unit template becomes an
/// 800px-wide PNG.
pub const EXPORT_SCALE: f32 = 2.0;

/// Wraps the usvg options so system fonts are discovered once per export run
/// and shared by every card.
pub struct Rasterizer {
    options: usvg::Options<'static>,
}

impl Rasterizer {
    pub fn new() -> Self {
        let mut options = usvg::Options::default();
        options.fontdb_mut().load_system_fonts();
        Self { options }
    }

    /// Rasterize card markup at the export scale against a transparent
    /// background and encode it as PNG.
    pub fn rasterize(&self, svg: &str) -> CardResult<Vec<u8>> {
        let tree = usvg::Tree::from_str(svg, &self.options)
            .map_err(|e| CardError::Render(format!("Invalid card markup: {e}")))?;

        let size = tree.size();
        let width = (size.width() * EXPORT_SCALE).round() as u32;
        let height = (size.height() * EXPORT_SCALE).round() as u32;

        // Pixmap::new zero-fills, which is the transparent background
        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| CardError::Render(format!("Invalid raster size {width}x{height}")))?;

        resvg::render(
            &tree,
            tiny_skia::Transform::from_scale(EXPORT_SCALE, EXPORT_SCALE),
            &mut pixmap.as_mut(),
        );

        pixmap
            .encode_png()
            .map_err(|e| CardError::Render(format!("PNG encoding failed: {e}")))
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rasterize_scales_by_two() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="300"><rect width="400" height="300" fill="red"/></svg>"#;
        let png = Rasterizer::new().rasterize(svg).unwrap();

        let pixmap = tiny_skia::Pixmap::decode_png(&png).unwrap();
        assert_eq!(pixmap.width(), 800);
        assert_eq!(pixmap.height(), 600);
    }

    #[test]
    fn test_rasterize_rejects_invalid_markup() {
        let result = Rasterizer::new().rasterize("not svg at all");
        assert!(matches!(result, Err(CardError::Render(_))));
    }
}
