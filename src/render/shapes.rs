//! Shape types for board rendering
//!
//! Each shape holds absolute pixel coordinates and knows how to write itself
//! as SVG. Shapes are emitted once and never changed; their position in the
//! document's shape list is their z-order.

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use crate::config::SPRITE_DESIGN_SIZE;
use crate::errors::RenderError;
use crate::types::{Color, Piece, SquareId};

use super::svg::{SvgWriter, fill_attrs, fmt_num, fmt_points};

/// X-shaped mark drawn over occupied squares, in the 45-unit sprite box.
pub const CROSS_PATH: &str = "M35.865 9.135a1.89 1.89 0 0 1 0 2.673L25.173 22.5l10.692 10.692a1.89 1.89 0 0 1 0 2.673 1.89 1.89 0 0 1-2.673 0L22.5 25.173 11.808 35.865a1.89 1.89 0 0 1-2.673 0 1.89 1.89 0 0 1 0-2.673L19.827 22.5 9.135 11.808a1.89 1.89 0 0 1 0-2.673 1.89 1.89 0 0 1 2.673 0L22.5 19.827 33.192 9.135a1.89 1.89 0 0 1 2.673 0z";

/// Common behavior for all shapes
#[enum_dispatch]
pub trait RenderSvg {
    /// Write this shape as one SVG element (or group)
    fn write_svg(&self, out: &mut SvgWriter) -> Result<(), RenderError>;
}

/// A drawing primitive in a board document
#[enum_dispatch(RenderSvg)]
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Square(SquareShape),
    Piece(PieceShape),
    Dot(DotShape),
    Cross(CrossShape),
    Arrow(ArrowShape),
    Label(LabelShape),
}

// ============================================================================
// Shape Types
// ============================================================================

/// A board square
#[derive(Debug, Clone, PartialEq)]
pub struct SquareShape {
    pub id: SquareId,
    pub origin: DVec2,
    pub size: f64,
    pub fill: Color,
}

impl RenderSvg for SquareShape {
    fn write_svg(&self, out: &mut SvgWriter) -> Result<(), RenderError> {
        let size = fmt_num(self.size);
        let mut attrs = vec![
            ("x", fmt_num(self.origin.x)),
            ("y", fmt_num(self.origin.y)),
            ("width", size.clone()),
            ("height", size),
            ("class", format!("square {}", self.id)),
            ("stroke", "none".to_string()),
        ];
        attrs.extend(fill_attrs(self.fill));
        out.empty("rect", &attrs)
    }
}

/// Reference to a piece sprite, placed at the square's corner
#[derive(Debug, Clone, PartialEq)]
pub struct PieceShape {
    pub piece: Piece,
    pub origin: DVec2,
    pub scale: f64,
}

impl RenderSvg for PieceShape {
    fn write_svg(&self, out: &mut SvgWriter) -> Result<(), RenderError> {
        out.empty(
            "use",
            &[
                ("xlink:href", format!("#{}", self.piece.sprite_id())),
                ("transform", translate_scale(self.origin, self.scale)),
            ],
        )
    }
}

/// Filled circle marking an empty square
#[derive(Debug, Clone, PartialEq)]
pub struct DotShape {
    pub center: DVec2,
    pub radius: f64,
    pub fill: Color,
}

impl RenderSvg for DotShape {
    fn write_svg(&self, out: &mut SvgWriter) -> Result<(), RenderError> {
        let mut attrs = vec![
            ("cx", fmt_num(self.center.x)),
            ("cy", fmt_num(self.center.y)),
            ("r", fmt_num(self.radius)),
        ];
        attrs.extend(fill_attrs(self.fill));
        out.empty("circle", &attrs)
    }
}

/// X marking an occupied square
#[derive(Debug, Clone, PartialEq)]
pub struct CrossShape {
    pub center: DVec2,
    pub scale: f64,
    pub fill: Color,
}

impl CrossShape {
    /// Where the sprite box's top-left corner lands.
    pub fn origin(&self) -> DVec2 {
        self.center - DVec2::splat(SPRITE_DESIGN_SIZE / 2.0 * self.scale)
    }
}

impl RenderSvg for CrossShape {
    fn write_svg(&self, out: &mut SvgWriter) -> Result<(), RenderError> {
        out.start(
            "g",
            &[
                ("class", "cross".to_string()),
                ("transform", translate_scale(self.origin(), self.scale)),
            ],
        )?;
        let mut attrs = vec![("d", CROSS_PATH.to_string())];
        attrs.extend(fill_attrs(self.fill));
        attrs.push(("stroke", "#000".to_string()));
        attrs.push(("stroke-width", "1.688".to_string()));
        out.empty("path", &attrs)?;
        out.end("g")
    }
}

/// Which outline an arrow was drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKind {
    Straight,
    Knight,
}

/// A move arrow as one closed polygon
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowShape {
    pub kind: ArrowKind,
    /// Outline in absolute coordinates; the first point is on the tail
    pub points: Vec<DVec2>,
    /// Center of the source square
    pub tail: DVec2,
    /// Where the shaft meets the head
    pub shaft_end: DVec2,
    /// Tip of the head
    pub tip: DVec2,
    /// Corner of a knight arrow's L
    pub bend: Option<DVec2>,
    pub fill: Color,
}

impl RenderSvg for ArrowShape {
    fn write_svg(&self, out: &mut SvgWriter) -> Result<(), RenderError> {
        let class = match self.kind {
            ArrowKind::Straight => "arrow",
            ArrowKind::Knight => "arrow knight",
        };
        let mut attrs = vec![
            ("class", class.to_string()),
            ("points", fmt_points(&self.points)),
        ];
        attrs.extend(fill_attrs(self.fill));
        out.empty("polygon", &attrs)
    }
}

/// Coordinate label on the board border
#[derive(Debug, Clone, PartialEq)]
pub struct LabelShape {
    pub text: String,
    /// Center of the label
    pub position: DVec2,
    pub font_size: f64,
    pub fill: Color,
}

impl RenderSvg for LabelShape {
    fn write_svg(&self, out: &mut SvgWriter) -> Result<(), RenderError> {
        let mut attrs = vec![
            ("x", fmt_num(self.position.x)),
            ("y", fmt_num(self.position.y)),
            ("font-size", fmt_num(self.font_size)),
            ("text-anchor", "middle".to_string()),
            ("dominant-baseline", "central".to_string()),
        ];
        attrs.extend(fill_attrs(self.fill));
        out.text_element("text", &attrs, &self.text)
    }
}

fn translate_scale(origin: DVec2, scale: f64) -> String {
    let translate = format!("translate({}, {})", fmt_num(origin.x), fmt_num(origin.y));
    if scale == 1.0 {
        translate
    } else {
        format!("{translate} scale({})", fmt_num(scale))
    }
}
