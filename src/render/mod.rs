//! Board layout and SVG output
//!
//! This module is organized into submodules:
//! - `grid`: Square placement, orientation and colors
//! - `marks`: Dots and crosses on marked squares
//! - `arrow`: Straight and knight-move arrow outlines
//! - `labels`: File and rank labels around the border
//! - `shapes`: Shape types and their SVG elements
//! - `svg`: The document and its serialization
//!
//! Each layout pass reads only the position, the annotations and the
//! [`LayoutConfig`]; [`render_board`] concatenates their output in z-order.

pub mod arrow;
pub mod grid;
pub mod labels;
pub mod marks;
pub mod shapes;
pub mod svg;

pub use shapes::{RenderSvg, Shape};
pub use svg::Document;

use crate::annotations::AnnotationSet;
use crate::config::{LayoutConfig, SPRITE_DESIGN_SIZE};
use crate::errors::{MalformedAnnotation, RenderError};
use crate::log;
use crate::position::Position;

use shapes::{PieceShape, SquareShape};

/// A laid out board plus the annotation tokens that were left out
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    pub document: Document,
    pub skipped: Vec<MalformedAnnotation>,
}

/// Lay out a whole board.
///
/// Shapes are emitted per square (square, piece, mark) in position order, then
/// the 32 labels, then the arrows.
pub fn render_board(
    position: &Position,
    config: &LayoutConfig,
    annotations: &AnnotationSet,
) -> Result<RenderOutput, RenderError> {
    config.validate()?;

    let mut shapes = Vec::with_capacity(64 + 32 + 32 + annotations.marks.len() + annotations.arrows.len());

    for square in position.squares() {
        let origin = grid::square_origin(square.id, config);
        shapes.push(
            SquareShape {
                id: square.id,
                origin,
                size: config.square_size,
                fill: grid::square_fill(square.id, config, annotations.selected),
            }
            .into(),
        );

        if let Some(piece) = square.piece {
            shapes.push(
                PieceShape {
                    piece,
                    origin,
                    scale: config.scale_factor,
                }
                .into(),
            );
        }

        if annotations.is_marked(square.id) {
            shapes.push(marks::layout_mark(square, config));
        }
    }

    shapes.extend(labels::layout_labels(config).into_iter().map(Shape::from));

    // `arrows` is public, so descriptors may not have been checked on the way in
    let mut skipped = annotations.rejected.clone();
    for descriptor in &annotations.arrows {
        match descriptor.check() {
            Ok(descriptor) => shapes.push(arrow::layout_arrow(&descriptor, config).into()),
            Err(e) => {
                log::warn!(token = %e.token, reason = %e.reason, "skipping arrow");
                skipped.push(e);
            }
        }
    }

    let document = Document {
        size: config.canvas_size(),
        background: config.palette.background,
        shapes,
    };

    log::debug!(
        shapes = document.shapes.len(),
        arrows = annotations.arrows.len(),
        skipped = skipped.len(),
        size = document.size,
        "laid out board"
    );

    Ok(RenderOutput { document, skipped })
}

/// Scale that maps the sprite design box onto one square.
pub fn sprite_scale(square_size: f64) -> f64 {
    square_size / SPRITE_DESIGN_SIZE
}

#[cfg(test)]
mod tests {
    use super::shapes::ArrowKind;
    use super::*;
    use crate::annotations::ArrowDescriptor;
    use crate::config::tests::test_config;
    use crate::types::SquareId;
    use glam::dvec2;

    fn sq(name: &str) -> SquareId {
        name.parse().unwrap()
    }

    fn count(doc: &Document, pred: impl Fn(&Shape) -> bool) -> usize {
        doc.shapes.iter().filter(|s| pred(s)).count()
    }

    #[test]
    fn starting_position_shape_counts() {
        let out = render_board(&Position::starting(), &test_config(), &AnnotationSet::new()).unwrap();
        let doc = &out.document;
        assert_eq!(doc.size, 390.0);
        assert_eq!(count(doc, |s| matches!(s, Shape::Square(_))), 64);
        assert_eq!(count(doc, |s| matches!(s, Shape::Piece(_))), 32);
        assert_eq!(count(doc, |s| matches!(s, Shape::Label(_))), 32);
        assert_eq!(doc.shapes.len(), 128);
        assert!(out.skipped.is_empty());
    }

    #[test]
    fn piece_follows_its_square() {
        let out = render_board(&Position::starting(), &test_config(), &AnnotationSet::new()).unwrap();
        let Shape::Square(first) = &out.document.shapes[0] else {
            panic!("first shape should be a square");
        };
        assert_eq!(first.id, sq("a8"));
        let Shape::Piece(rook) = &out.document.shapes[1] else {
            panic!("a8 rook should follow its square");
        };
        assert_eq!(rook.origin, first.origin);
        assert_eq!(rook.piece.sprite_id(), "black-rook");
    }

    #[test]
    fn mark_on_empty_square_is_a_dot() {
        let annotations = AnnotationSet::new().with_mark(sq("e4"));
        let out = render_board(&Position::starting(), &test_config(), &annotations).unwrap();
        let dots: Vec<_> = out
            .document
            .shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Dot(d) => Some(d),
                _ => None,
            })
            .collect();
        assert_eq!(dots.len(), 1);
        assert_eq!(dots[0].center, dvec2(217.5, 217.5));
        assert_eq!(count(&out.document, |s| matches!(s, Shape::Cross(_))), 0);
    }

    #[test]
    fn mark_on_occupied_square_is_a_cross() {
        let annotations = AnnotationSet::new().with_mark(sq("e2"));
        let out = render_board(&Position::starting(), &test_config(), &annotations).unwrap();
        assert_eq!(count(&out.document, |s| matches!(s, Shape::Cross(_))), 1);
        assert_eq!(count(&out.document, |s| matches!(s, Shape::Dot(_))), 0);
    }

    #[test]
    fn mark_comes_after_the_piece() {
        let annotations = AnnotationSet::new().with_mark(sq("e2"));
        let out = render_board(&Position::starting(), &test_config(), &annotations).unwrap();
        let shapes = &out.document.shapes;
        let cross = shapes.iter().position(|s| matches!(s, Shape::Cross(_))).unwrap();
        assert!(matches!(&shapes[cross - 1], Shape::Piece(p) if p.origin == grid::square_origin(sq("e2"), &test_config())));
        assert!(matches!(&shapes[cross - 2], Shape::Square(s) if s.id == sq("e2")));
    }

    #[test]
    fn arrows_draw_last_in_input_order() {
        let annotations = AnnotationSet::new()
            .with_arrow(ArrowDescriptor::new(sq("e2"), sq("e4")))
            .with_arrow(ArrowDescriptor::new(sq("g1"), sq("f3")).knight());
        let out = render_board(&Position::starting(), &test_config(), &annotations).unwrap();
        let shapes = &out.document.shapes;
        let n = shapes.len();
        assert!(matches!(&shapes[n - 2], Shape::Arrow(a) if a.kind == ArrowKind::Straight));
        assert!(matches!(&shapes[n - 1], Shape::Arrow(a) if a.kind == ArrowKind::Knight));
        assert!(matches!(&shapes[n - 3], Shape::Label(_)));
    }

    #[test]
    fn malformed_arrow_is_skipped_not_fatal() {
        let annotations = AnnotationSet::from_tokens("", "e2e4,e2e9", None);
        let out = render_board(&Position::starting(), &test_config(), &annotations).unwrap();
        assert_eq!(count(&out.document, |s| matches!(s, Shape::Arrow(_))), 1);
        assert_eq!(out.skipped.len(), 1);
        assert_eq!(out.skipped[0].token, "e2e9");
    }

    #[test]
    fn same_square_arrow_in_the_public_list_is_skipped() {
        let mut annotations = AnnotationSet::new().with_arrow(ArrowDescriptor::new(sq("d2"), sq("d4")));
        annotations.arrows.push(ArrowDescriptor::new(sq("e2"), sq("e2")));
        let out = render_board(&Position::starting(), &test_config(), &annotations).unwrap();
        assert_eq!(count(&out.document, |s| matches!(s, Shape::Arrow(_))), 1);
        assert_eq!(out.skipped.len(), 1);
        assert_eq!(out.skipped[0].token, "e2e2");
    }

    #[test]
    fn selected_square_is_highlighted() {
        let config = test_config();
        let annotations = AnnotationSet::new().with_selected(sq("d4"));
        let out = render_board(&Position::starting(), &config, &annotations).unwrap();
        let highlighted: Vec<_> = out
            .document
            .shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Square(s) if s.fill == config.palette.marks => Some(s.id),
                _ => None,
            })
            .collect();
        assert_eq!(highlighted, vec![sq("d4")]);
    }

    #[test]
    fn rendering_is_idempotent() {
        let annotations = AnnotationSet::from_tokens("e4,e2", "e2e4,g1f3k", Some("c3"));
        let a = render_board(&Position::starting(), &test_config(), &annotations).unwrap();
        let b = render_board(&Position::starting(), &test_config(), &annotations).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.document.to_svg().unwrap(), b.document.to_svg().unwrap());
    }

    #[test]
    fn invalid_config_aborts() {
        let config = LayoutConfig {
            square_size: -1.0,
            ..test_config()
        };
        let err = render_board(&Position::starting(), &config, &AnnotationSet::new()).unwrap_err();
        assert!(matches!(err, RenderError::InvalidConfig { field: "square_size", .. }));
    }

    #[test]
    fn sprite_scale_is_relative_to_45() {
        assert_eq!(sprite_scale(45.0), 1.0);
        assert_eq!(sprite_scale(90.0), 2.0);
    }
}
