//! Strongly-typed board coordinates, pieces and colors.
//!
//! - Squares can only hold a file 0..8 and a rank 1..=8
//! - Colors are parsed once, then serialized in one canonical form

use std::fmt;
use std::str::FromStr;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Check that a size is finite and strictly positive.
pub fn check_positive(val: f64) -> Result<f64, NumericError> {
    let val = check_non_negative(val)?;
    if val == 0.0 {
        Err(NumericError::Zero)
    } else {
        Ok(val)
    }
}

/// Check that a size is finite and not negative.
pub fn check_non_negative(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

// ============================================================================
// Coordinates
// ============================================================================

/// File letters in index order.
pub const FILE_LETTERS: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Board file, 0-based (a = 0)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct File(u8);

impl File {
    pub const ALL: [File; 8] = [File(0), File(1), File(2), File(3), File(4), File(5), File(6), File(7)];

    pub fn new(index: u8) -> Option<File> {
        (index < 8).then_some(File(index))
    }

    pub fn from_char(c: char) -> Option<File> {
        FILE_LETTERS.iter().position(|&l| l == c).map(|i| File(i as u8))
    }

    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    pub fn letter(self) -> char {
        FILE_LETTERS[self.0 as usize]
    }
}

/// Board rank, 1-based
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(u8);

impl Rank {
    pub const ALL: [Rank; 8] = [Rank(1), Rank(2), Rank(3), Rank(4), Rank(5), Rank(6), Rank(7), Rank(8)];

    pub fn new(number: u8) -> Option<Rank> {
        (1..=8).contains(&number).then_some(Rank(number))
    }

    pub fn from_char(c: char) -> Option<Rank> {
        c.to_digit(10).and_then(|d| Rank::new(d as u8))
    }

    #[inline]
    pub fn number(self) -> u8 {
        self.0
    }
}

/// A square on the board, e.g. `e4`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SquareId {
    pub file: File,
    pub rank: Rank,
}

impl SquareId {
    pub fn new(file: File, rank: Rank) -> Self {
        Self { file, rank }
    }

    /// Signed (file, rank) displacement from `self` to `other`.
    pub fn delta(self, other: SquareId) -> (i8, i8) {
        (
            other.file.0 as i8 - self.file.0 as i8,
            other.rank.0 as i8 - self.rank.0 as i8,
        )
    }

    /// Whether `other` is a knight's jump away.
    pub fn is_knight_jump(self, other: SquareId) -> bool {
        let (df, dr) = self.delta(other);
        matches!((df.abs(), dr.abs()), (1, 2) | (2, 1))
    }
}

/// Error for text that is not a square name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSquare(pub String);

impl fmt::Display for InvalidSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a square", self.0)
    }
}

impl std::error::Error for InvalidSquare {}

impl FromStr for SquareId {
    type Err = InvalidSquare;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(r), None) => match (File::from_char(f), Rank::from_char(r)) {
                (Some(file), Some(rank)) => Ok(SquareId { file, rank }),
                _ => Err(InvalidSquare(s.to_string())),
            },
            _ => Err(InvalidSquare(s.to_string())),
        }
    }
}

impl fmt::Display for SquareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file.letter(), self.rank.0)
    }
}

// ============================================================================
// Pieces
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn name(self) -> &'static str {
        match self {
            Side::White => "white",
            Side::Black => "black",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::King => "king",
            PieceKind::Queen => "queen",
            PieceKind::Rook => "rook",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
            PieceKind::Pawn => "pawn",
        }
    }
}

/// A piece label. Only used to pick a sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(side: Side, kind: PieceKind) -> Self {
        Self { side, kind }
    }

    /// Piece from its FEN letter: uppercase is white.
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let side = if c.is_ascii_uppercase() { Side::White } else { Side::Black };
        let kind = match c.to_ascii_lowercase() {
            'k' => PieceKind::King,
            'q' => PieceKind::Queen,
            'r' => PieceKind::Rook,
            'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight,
            'p' => PieceKind::Pawn,
            _ => return None,
        };
        Some(Piece { side, kind })
    }

    /// Sprite id in the document's `<defs>`, e.g. `white-king`.
    pub fn sprite_id(self) -> String {
        format!("{}-{}", self.side.name(), self.kind.name())
    }
}

// ============================================================================
// Colors
// ============================================================================

/// Hex color with alpha
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// `#rrggbb`, alpha dropped.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Opacity in 0..=1 when the color is not fully opaque.
    pub fn opacity(self) -> Option<f64> {
        (self.a < 255).then(|| self.a as f64 / 255.0)
    }
}

/// Error for text that is not a hex color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidColor(pub String);

impl fmt::Display for InvalidColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a hex color", self.0)
    }
}

impl std::error::Error for InvalidColor {}

impl FromStr for Color {
    type Err = InvalidColor;

    /// Accepts `rgb`, `rgba`, `rrggbb` and `rrggbbaa`, with or without `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let err = || InvalidColor(s.to_string());
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        let color = match hex.len() {
            3 => Color::rgb(nibble(0).map_err(|_| err())?, nibble(1).map_err(|_| err())?, nibble(2).map_err(|_| err())?),
            4 => Color::rgba(
                nibble(0).map_err(|_| err())?,
                nibble(1).map_err(|_| err())?,
                nibble(2).map_err(|_| err())?,
                nibble(3).map_err(|_| err())?,
            ),
            6 => Color::rgb(byte(0).map_err(|_| err())?, byte(2).map_err(|_| err())?, byte(4).map_err(|_| err())?),
            8 => Color::rgba(
                byte(0).map_err(|_| err())?,
                byte(2).map_err(|_| err())?,
                byte(4).map_err(|_| err())?,
                byte(6).map_err(|_| err())?,
            ),
            _ => return Err(err()),
        };
        Ok(color)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "{}", self.hex())
        } else {
            write!(f, "{}{:02x}", self.hex(), self.a)
        }
    }
}
