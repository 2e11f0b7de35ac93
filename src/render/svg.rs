//! SVG generation

use glam::DVec2;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::errors::RenderError;
use crate::types::{Color, Piece, PieceKind, Side};

use super::shapes::{RenderSvg, Shape};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Attribute list for one element.
pub type Attrs = Vec<(&'static str, String)>;

/// Thin wrapper over the XML writer that speaks in elements and attribute lists.
pub struct SvgWriter {
    writer: Writer<Vec<u8>>,
}

impl Default for SvgWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgWriter {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(Vec::new()),
        }
    }

    fn element<'a>(name: &'a str, attrs: &'a [(&'static str, String)]) -> BytesStart<'a> {
        let mut start = BytesStart::new(name);
        for (key, value) in attrs {
            start.push_attribute((*key, value.as_str()));
        }
        start
    }

    fn write(&mut self, event: Event<'_>) -> Result<(), RenderError> {
        self.writer
            .write_event(event)
            .map_err(|e| RenderError::Serialize(e.to_string()))
    }

    /// `<name .../>`
    pub fn empty(&mut self, name: &str, attrs: &[(&'static str, String)]) -> Result<(), RenderError> {
        self.write(Event::Empty(Self::element(name, attrs)))
    }

    /// `<name ...>`
    pub fn start(&mut self, name: &str, attrs: &[(&'static str, String)]) -> Result<(), RenderError> {
        self.write(Event::Start(Self::element(name, attrs)))
    }

    /// `</name>`
    pub fn end(&mut self, name: &str) -> Result<(), RenderError> {
        self.write(Event::End(BytesEnd::new(name)))
    }

    /// Escaped character data.
    pub fn text(&mut self, content: &str) -> Result<(), RenderError> {
        self.write(Event::Text(BytesText::new(content)))
    }

    /// `<name ...>content</name>`
    pub fn text_element(
        &mut self,
        name: &str,
        attrs: &[(&'static str, String)],
        content: &str,
    ) -> Result<(), RenderError> {
        self.start(name, attrs)?;
        self.text(content)?;
        self.end(name)
    }

    pub fn finish(self) -> Result<String, RenderError> {
        String::from_utf8(self.writer.into_inner()).map_err(|e| RenderError::Serialize(e.to_string()))
    }
}

/// `fill` plus `fill-opacity` when the color is translucent.
pub fn fill_attrs(color: Color) -> Attrs {
    let mut attrs = vec![("fill", color.hex())];
    if let Some(opacity) = color.opacity() {
        attrs.push(("fill-opacity", fmt_num(opacity)));
    }
    attrs
}

/// `x,y x,y ...` for `points` attributes.
pub fn fmt_points(points: &[DVec2]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A rendered board ready to be serialized or rasterized
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Canvas width and height (the board is square)
    pub size: f64,
    pub background: Color,
    /// Drawing order is z-order
    pub shapes: Vec<Shape>,
}

impl Document {
    /// Serialize as a standalone SVG document.
    pub fn to_svg(&self) -> Result<String, RenderError> {
        let size = fmt_num(self.size);
        let mut out = SvgWriter::new();
        out.start(
            "svg",
            &[
                ("xmlns", SVG_NS.to_string()),
                ("xmlns:xlink", XLINK_NS.to_string()),
                ("width", size.clone()),
                ("height", size.clone()),
                ("viewBox", format!("0 0 {size} {size}")),
            ],
        )?;

        write_sprite_defs(&mut out)?;

        let mut background = vec![
            ("width", "100%".to_string()),
            ("height", "100%".to_string()),
        ];
        background.extend(fill_attrs(self.background));
        out.empty("rect", &background)?;

        for shape in &self.shapes {
            shape.write_svg(&mut out)?;
        }

        out.end("svg")?;
        out.finish()
    }
}

/// Filled chess glyph used to draw each kind.
fn glyph(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::King => "\u{265A}",
        PieceKind::Queen => "\u{265B}",
        PieceKind::Rook => "\u{265C}",
        PieceKind::Bishop => "\u{265D}",
        PieceKind::Knight => "\u{265E}",
        PieceKind::Pawn => "\u{265F}",
    }
}

/// Fonts known to carry the chess glyphs, in order of preference.
const GLYPH_FONTS: &str = "DejaVu Sans, Noto Sans Symbols 2, Segoe UI Symbol, FreeSerif, serif";

/// One `<g id="white-king">` per side and kind, drawn in the 45-unit sprite box.
///
/// Pieces are text, so whoever draws the document needs a font with the
/// U+265A..U+265F glyphs; without one the pieces are missing from the image.
fn write_sprite_defs(out: &mut SvgWriter) -> Result<(), RenderError> {
    out.start("defs", &[])?;
    for side in [Side::White, Side::Black] {
        let (fill, stroke) = match side {
            Side::White => ("#ffffff", "#000000"),
            Side::Black => ("#000000", "#000000"),
        };
        for kind in PieceKind::ALL {
            let piece = Piece::new(side, kind);
            out.start("g", &[("id", piece.sprite_id())])?;
            out.text_element(
                "text",
                &[
                    ("x", "22.5".to_string()),
                    ("y", "24".to_string()),
                    ("font-size", "38".to_string()),
                    ("font-family", GLYPH_FONTS.to_string()),
                    ("text-anchor", "middle".to_string()),
                    ("dominant-baseline", "central".to_string()),
                    ("fill", fill.to_string()),
                    ("stroke", stroke.to_string()),
                    ("stroke-width", "1".to_string()),
                ],
                glyph(kind),
            )?;
            out.end("g")?;
        }
    }
    out.end("defs")
}

/// Format a number with 6 significant figures, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
