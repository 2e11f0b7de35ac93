//! Chess board diagrams as SVG.
//!
//! `fenboard` turns a board position (FEN piece placement) plus a set of visual
//! annotations (marked squares, a selected square, move arrows) into an SVG
//! document. The layout engine lives in [`render`]; [`position`] and
//! [`annotations`] parse the inputs, [`request`] maps loosely-typed request
//! parameters onto them, and the optional `raster` feature turns documents into
//! PNG images.
//!
//! ```rust
//! let svg = fenboard::board_svg("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR").unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

use pest_derive::Parser;

pub mod annotations;
pub mod config;
pub mod errors;
pub mod log;
pub mod position;
#[cfg(feature = "raster")]
pub mod raster;
pub mod render;
pub mod request;
pub mod types;

pub use annotations::{AnnotationSet, ArrowDescriptor};
pub use config::{Capabilities, LayoutConfig, Palette};
pub use errors::{MalformedAnnotation, PositionParseError, RasterizationError, RenderError};
pub use position::Position;
pub use render::{Document, RenderOutput, Shape};
pub use request::RenderRequest;
pub use types::{Color, Piece, PieceKind, Side, SquareId};

#[cfg(feature = "raster")]
pub use raster::{PngRasterizer, Rasterizer};

#[derive(Parser)]
#[grammar = "board.pest"]
pub struct BoardParser;

/// Render a position and its annotations into a document.
///
/// Malformed annotations were already set aside while building `annotations`;
/// they are passed through in [`RenderOutput::skipped`].
pub fn render(
    position: &Position,
    config: &LayoutConfig,
    annotations: &AnnotationSet,
) -> Result<RenderOutput, RenderError> {
    render::render_board(position, config, annotations)
}

/// Parse board notation, then render it.
pub fn render_fen(
    fen: &str,
    config: &LayoutConfig,
    annotations: &AnnotationSet,
) -> Result<RenderOutput, RenderError> {
    let position = Position::from_fen(fen)?;
    render::render_board(&position, config, annotations)
}

/// Render board notation to SVG with the default request settings.
///
/// Returns the SVG string on success, or an error with diagnostics.
pub fn board_svg(fen: &str) -> Result<String, miette::Report> {
    let request = RenderRequest::from_params(Some(fen), std::iter::empty::<(&str, &str)>())?;
    let output = request.render()?;
    Ok(output.document.to_svg()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pest::Parser;

    #[test]
    fn parse_start_placement() {
        let input = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";
        let result = BoardParser::parse(Rule::placement, input);
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
    }

    #[test]
    fn parse_placement_needs_eight_ranks() {
        let result = BoardParser::parse(Rule::placement, "8/8/8/8/8/8/8");
        assert!(result.is_err());
    }

    #[test]
    fn parse_plain_arrow() {
        let result = BoardParser::parse(Rule::arrow, "e2e4");
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
    }

    #[test]
    fn parse_arrow_with_color_and_knight_flag() {
        for input in ["g1f3k", "g1f3ff000080k", "g1f3#abck", "b1c3aaa23b"] {
            let result = BoardParser::parse(Rule::arrow, input);
            assert!(result.is_ok(), "Failed to parse {input}: {:?}", result.err());
        }
    }

    #[test]
    fn parse_arrow_rejects_garbage() {
        for input in ["e2", "e2e9", "i2e4", "e2e4ff00000", "e2e4kk", "e2e4 "] {
            let result = BoardParser::parse(Rule::arrow, input);
            assert!(result.is_err(), "{input} should not parse");
        }
    }

    #[test]
    fn parse_mark() {
        assert!(BoardParser::parse(Rule::mark, "h8").is_ok());
        assert!(BoardParser::parse(Rule::mark, "h9").is_err());
        assert!(BoardParser::parse(Rule::mark, "e4e5").is_err());
    }

    #[test]
    fn board_svg_renders_start_position() {
        let svg = board_svg("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR").unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<use ").count(), 32);
    }

    #[test]
    fn board_svg_reports_bad_notation() {
        let err = board_svg("rnbqkbnr/pppppppp/8/8").unwrap_err();
        assert!(err.to_string().contains("board notation"));
    }
}
