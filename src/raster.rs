//! Rasterizing documents to PNG with resvg
//!
//! Only PNG is produced; tiny-skia has no other encoder. Piece sprites and
//! labels are text, so they only show up when a font with the chess glyphs is
//! loaded. [`PngRasterizer::new`] loads the system fonts for that;
//! [`PngRasterizer::without_fonts`] draws squares, marks and arrows only.

use resvg::{tiny_skia, usvg};

use crate::errors::RasterizationError;
use crate::render::Document;

/// Turns a document into encoded image bytes
pub trait Rasterizer {
    fn rasterize(&self, document: &Document, width: u32, height: u32) -> Result<Vec<u8>, RasterizationError>;
}

/// PNG output through usvg/resvg/tiny-skia
pub struct PngRasterizer {
    options: usvg::Options<'static>,
}

impl Default for PngRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PngRasterizer {
    /// A rasterizer that can draw labels and piece glyphs with system fonts.
    pub fn new() -> Self {
        let mut options = usvg::Options::default();
        options.fontdb_mut().load_system_fonts();
        Self { options }
    }

    /// A rasterizer with no fonts loaded; text is dropped.
    pub fn without_fonts() -> Self {
        Self {
            options: usvg::Options::default(),
        }
    }
}

impl Rasterizer for PngRasterizer {
    fn rasterize(&self, document: &Document, width: u32, height: u32) -> Result<Vec<u8>, RasterizationError> {
        if width == 0 || height == 0 {
            return Err(RasterizationError::InvalidSize { width, height });
        }

        let svg = document
            .to_svg()
            .map_err(|e| RasterizationError::Parse(e.to_string()))?;
        let tree = usvg::Tree::from_str(&svg, &self.options).map_err(|e| RasterizationError::Parse(e.to_string()))?;

        let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or(RasterizationError::Allocation { width, height })?;

        let size = tree.size();
        let transform = tiny_skia::Transform::from_scale(width as f32 / size.width(), height as f32 / size.height());
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        crate::log::debug!(width, height, "rasterized board");

        pixmap
            .encode_png()
            .map_err(|e| RasterizationError::Encode(e.to_string()))
    }
}
