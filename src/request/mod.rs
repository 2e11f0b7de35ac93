//! Loosely-typed request parameters → a render call
//!
//! A request is a board notation plus `key=value` pairs such as a query string
//! would carry. Every recognized key is a [`Param`]; unknown keys are ignored.
//! Anything not given falls back to [`defaults`].

pub mod defaults;

use crate::annotations::AnnotationSet;
use crate::config::LayoutConfig;
use crate::errors::RenderError;
use crate::log;
use crate::position::{Position, START_PLACEMENT};
use crate::render::{self, RenderOutput};
use crate::types::Color;

/// Recognized request parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    Rotate,
    Marks,
    Arrows,
    Selected,
    BgColor,
    TextColor,
    MarksColor,
    CrossColor,
    WCellColor,
    BCellColor,
    ArrowColor,
    MarksSize,
    BoardSize,
    SquareSize,
    BoardPadding,
    KnightArrows,
    ScaleLabels,
}

impl Param {
    pub const ALL: [Param; 17] = [
        Param::Rotate,
        Param::Marks,
        Param::Arrows,
        Param::Selected,
        Param::BgColor,
        Param::TextColor,
        Param::MarksColor,
        Param::CrossColor,
        Param::WCellColor,
        Param::BCellColor,
        Param::ArrowColor,
        Param::MarksSize,
        Param::BoardSize,
        Param::SquareSize,
        Param::BoardPadding,
        Param::KnightArrows,
        Param::ScaleLabels,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Param::Rotate => "rotate",
            Param::Marks => "marks",
            Param::Arrows => "arrows",
            Param::Selected => "selected",
            Param::BgColor => "bg_color",
            Param::TextColor => "text_color",
            Param::MarksColor => "marks_color",
            Param::CrossColor => "cross_color",
            Param::WCellColor => "w_cell_color",
            Param::BCellColor => "b_cell_color",
            Param::ArrowColor => "arrow_color",
            Param::MarksSize => "marks_size",
            Param::BoardSize => "board_size",
            Param::SquareSize => "square_size",
            Param::BoardPadding => "board_padding",
            Param::KnightArrows => "knight_arrows",
            Param::ScaleLabels => "scale_labels",
        }
    }

    pub fn from_name(name: &str) -> Option<Param> {
        Param::ALL.into_iter().find(|p| p.name() == name)
    }
}

/// A fully resolved render request
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    /// Board notation; only the placement field is used
    pub fen: String,
    /// Width and height of the raster image
    pub board_size: u32,
    pub layout: LayoutConfig,
    pub annotations: AnnotationSet,
}

impl RenderRequest {
    /// Resolve request parameters over the defaults.
    ///
    /// A missing board notation means the starting position. When a key
    /// appears more than once the last value wins.
    pub fn from_params<I, K, V>(fen: Option<&str>, params: I) -> Result<Self, RenderError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut layout = LayoutConfig {
            square_size: defaults::SQUARE_SIZE,
            board_padding: defaults::BOARD_PADDING,
            marks_size: defaults::MARKS_SIZE,
            scale_factor: 1.0,
            white_bottom: true,
            palette: defaults::PALETTE,
            capabilities: defaults::CAPABILITIES,
        };
        let mut board_size = defaults::BOARD_SIZE;
        let mut marks = String::new();
        let mut arrows = String::new();
        let mut selected: Option<String> = None;

        for (key, value) in params {
            let (key, value) = (key.as_ref(), value.as_ref());
            let Some(param) = Param::from_name(key) else {
                log::debug!(key, "ignoring unknown request parameter");
                continue;
            };
            match param {
                Param::Rotate => layout.white_bottom = !parse_flag(param, value)?,
                Param::Marks => marks = value.to_string(),
                Param::Arrows => arrows = value.to_string(),
                Param::Selected => selected = Some(value.to_string()),
                Param::BgColor => layout.palette.background = parse_color(param, value)?,
                Param::TextColor => layout.palette.text = parse_color(param, value)?,
                Param::MarksColor => layout.palette.marks = parse_color(param, value)?,
                Param::CrossColor => layout.palette.cross = parse_color(param, value)?,
                Param::WCellColor => layout.palette.light_square = parse_color(param, value)?,
                Param::BCellColor => layout.palette.dark_square = parse_color(param, value)?,
                Param::ArrowColor => layout.palette.arrow = parse_color(param, value)?,
                Param::MarksSize => layout.marks_size = parse_number(param, value)?,
                Param::SquareSize => layout.square_size = parse_number(param, value)?,
                Param::BoardPadding => layout.board_padding = parse_number(param, value)?,
                Param::BoardSize => {
                    board_size = value
                        .trim()
                        .parse::<u32>()
                        .ok()
                        .filter(|&size| size > 0)
                        .ok_or_else(|| invalid(param, value))?;
                }
                Param::KnightArrows => layout.capabilities.supports_knight_arrows = parse_flag(param, value)?,
                Param::ScaleLabels => layout.capabilities.scale_labels = parse_flag(param, value)?,
            }
        }

        layout.scale_factor = render::sprite_scale(layout.square_size);
        layout.validate()?;

        let annotations = AnnotationSet::from_tokens(&marks, &arrows, selected.as_deref());

        Ok(RenderRequest {
            fen: fen.unwrap_or(START_PLACEMENT).to_string(),
            board_size,
            layout,
            annotations,
        })
    }

    /// Parse the board and lay it out.
    pub fn render(&self) -> Result<RenderOutput, RenderError> {
        let position = Position::from_fen(&self.fen)?;
        render::render_board(&position, &self.layout, &self.annotations)
    }

    /// Render, then rasterize at `board_size` × `board_size`.
    #[cfg(feature = "raster")]
    pub fn render_image(&self, rasterizer: &impl crate::raster::Rasterizer) -> Result<Vec<u8>, RenderError> {
        let output = self.render()?;
        Ok(rasterizer.rasterize(&output.document, self.board_size, self.board_size)?)
    }
}

fn invalid(param: Param, value: &str) -> RenderError {
    RenderError::InvalidParameter {
        name: param.name(),
        value: value.to_string(),
    }
}

fn parse_color(param: Param, value: &str) -> Result<Color, RenderError> {
    value.trim().parse().map_err(|_| invalid(param, value))
}

fn parse_number(param: Param, value: &str) -> Result<f64, RenderError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid(param, value))
}

/// Numbers are true when non-zero; the usual words are accepted too.
fn parse_flag(param: Param, value: &str) -> Result<bool, RenderError> {
    let value_trimmed = value.trim();
    match value_trimmed.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" => return Ok(true),
        "false" | "no" | "off" | "" => return Ok(false),
        _ => {}
    }
    value_trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| !v.is_nan())
        .map(|v| v != 0.0)
        .ok_or_else(|| invalid(param, value))
}
