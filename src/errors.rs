//! Error types with diagnostics using miette
//!
//! Board notation errors carry source spans so a bad FEN points at the
//! offending rank. Annotation errors are per-token and never abort a render.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Position Errors
// ============================================================================

/// Board notation could not be turned into a position
#[derive(Error, Diagnostic, Debug)]
pub enum PositionParseError {
    #[error("empty board notation")]
    #[diagnostic(
        code(fenboard::position::empty),
        help("expected eight ranks such as `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`")
    )]
    Empty,

    #[error("invalid board notation")]
    #[diagnostic(code(fenboard::position::syntax))]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
    },

    #[error("rank {rank} describes {files} files, expected 8")]
    #[diagnostic(code(fenboard::position::rank_width))]
    RankWidth {
        rank: u8,
        files: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("this rank")]
        span: SourceSpan,
    },
}

// ============================================================================
// Annotation Errors
// ============================================================================

/// Which annotation list a rejected token came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationKind {
    Mark,
    Arrow,
    Selected,
}

impl std::fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnnotationKind::Mark => write!(f, "mark"),
            AnnotationKind::Arrow => write!(f, "arrow"),
            AnnotationKind::Selected => write!(f, "selected square"),
        }
    }
}

/// A single mark or arrow token that was left out of the render
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
#[error("malformed {kind} `{token}`: {reason}")]
#[diagnostic(
    code(fenboard::annotation::malformed),
    severity(Warning),
    help("squares are a file a-h followed by a rank 1-8; arrows are <from><to>[color][k]")
)]
pub struct MalformedAnnotation {
    pub kind: AnnotationKind,
    pub token: String,
    pub reason: String,
}

impl MalformedAnnotation {
    pub fn new(kind: AnnotationKind, token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            kind,
            token: token.into(),
            reason: reason.into(),
        }
    }
}

// ============================================================================
// Rasterization Errors
// ============================================================================

/// The rasterizer could not turn a document into an image
#[derive(Error, Diagnostic, Debug)]
pub enum RasterizationError {
    #[error("invalid raster size {width}x{height}")]
    #[diagnostic(code(fenboard::raster::invalid_size))]
    InvalidSize { width: u32, height: u32 },

    #[error("rasterizer rejected the document: {0}")]
    #[diagnostic(code(fenboard::raster::parse))]
    Parse(String),

    #[error("could not allocate a {width}x{height} pixmap")]
    #[diagnostic(code(fenboard::raster::allocation))]
    Allocation { width: u32, height: u32 },

    #[error("image encoding failed: {0}")]
    #[diagnostic(code(fenboard::raster::encode))]
    Encode(String),
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that abort a render
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Position(#[from] PositionParseError),

    #[error("invalid layout value for {field}: {reason}")]
    #[diagnostic(code(fenboard::render::invalid_config))]
    InvalidConfig {
        field: &'static str,
        reason: NumericError,
    },

    #[error("invalid value `{value}` for parameter `{name}`")]
    #[diagnostic(code(fenboard::request::invalid_parameter))]
    InvalidParameter { name: &'static str, value: String },

    #[error("SVG serialization error: {0}")]
    #[diagnostic(code(fenboard::render::serialize))]
    Serialize(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Raster(#[from] RasterizationError),
}
