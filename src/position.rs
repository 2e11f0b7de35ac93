//! Board notation → [`Position`]
//!
//! Only the piece-placement field of FEN is read; the side to move, castling
//! rights and clocks do not affect a diagram and are ignored.

use miette::{NamedSource, SourceSpan};
use pest::Parser;
use pest::iterators::Pair;

use crate::errors::PositionParseError;
use crate::types::{File, Piece, Rank, SquareId};
use crate::{BoardParser, Rule};

/// Standard starting placement.
pub const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// One board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub id: SquareId,
    pub piece: Option<Piece>,
}

/// All 64 squares in reading order: a8, b8, … h8, a7, … h1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    squares: Vec<Square>,
}

impl Position {
    /// Parse FEN (or just its placement field).
    pub fn from_fen(fen: &str) -> Result<Position, PositionParseError> {
        let placement = fen.split_whitespace().next().ok_or(PositionParseError::Empty)?;

        let pairs = BoardParser::parse(Rule::placement, placement).map_err(|e| {
            let span: SourceSpan = match e.location {
                pest::error::InputLocation::Pos(p) => (p, 0).into(),
                pest::error::InputLocation::Span((start, end)) => (start, end - start).into(),
            };
            PositionParseError::Syntax {
                message: e.variant.message().into_owned(),
                src: NamedSource::new("<fen>", placement.to_string()),
                span,
            }
        })?;

        let mut squares = Vec::with_capacity(64);
        let rows = pairs
            .flat_map(|p| p.into_inner())
            .filter(|p| p.as_rule() == Rule::rank_row);
        for (row, rank_number) in rows.zip((1..=8u8).rev()) {
            parse_rank_row(row, rank_number, placement, &mut squares)?;
        }

        Ok(Position { squares })
    }

    /// The standard starting position.
    pub fn starting() -> Position {
        let squares = Rank::ALL
            .iter()
            .rev()
            .flat_map(|&rank| File::ALL.iter().map(move |&file| (file, rank)))
            .map(|(file, rank)| {
                let letter = START_PLACEMENT
                    .split('/')
                    .nth(8 - rank.number() as usize)
                    .and_then(|row| row.chars().nth(file.index() as usize));
                Square {
                    id: SquareId::new(file, rank),
                    piece: letter.and_then(Piece::from_fen_char),
                }
            })
            .collect();
        Position { squares }
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    pub fn piece_at(&self, id: SquareId) -> Option<Piece> {
        self.squares
            .iter()
            .find(|sq| sq.id == id)
            .and_then(|sq| sq.piece)
    }
}

impl std::str::FromStr for Position {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

fn parse_rank_row(
    row: Pair<Rule>,
    rank_number: u8,
    placement: &str,
    squares: &mut Vec<Square>,
) -> Result<(), PositionParseError> {
    let span = row.as_span();
    let width_error = |files: usize| PositionParseError::RankWidth {
        rank: rank_number,
        files,
        src: NamedSource::new("<fen>", placement.to_string()),
        span: (span.start(), span.end() - span.start()).into(),
    };

    // Grammar guarantees digits 1-8 and piece letters only.
    let mut cells: Vec<Option<Piece>> = Vec::with_capacity(8);
    for token in row.into_inner() {
        match token.as_rule() {
            Rule::empty_run => {
                let run = token.as_str().parse::<usize>().unwrap_or(0);
                cells.extend(std::iter::repeat_n(None, run));
            }
            Rule::piece => {
                cells.push(token.as_str().chars().next().and_then(Piece::from_fen_char));
            }
            _ => {}
        }
    }
    if cells.len() != 8 {
        return Err(width_error(cells.len()));
    }

    let rank = Rank::new(rank_number).ok_or_else(|| width_error(cells.len()))?;
    for (file, piece) in File::ALL.iter().zip(cells) {
        squares.push(Square {
            id: SquareId::new(*file, rank),
            piece,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, Side};

    fn sq(name: &str) -> SquareId {
        name.parse().unwrap()
    }

    #[test]
    fn start_position_has_64_unique_squares() {
        let position = Position::from_fen(START_PLACEMENT).unwrap();
        assert_eq!(position.squares().len(), 64);
        let mut ids: Vec<_> = position.squares().iter().map(|s| s.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 64);
    }

    #[test]
    fn squares_come_in_reading_order() {
        let position = Position::starting();
        let squares = position.squares();
        assert_eq!(squares[0].id, sq("a8"));
        assert_eq!(squares[7].id, sq("h8"));
        assert_eq!(squares[8].id, sq("a7"));
        assert_eq!(squares[63].id, sq("h1"));
    }

    #[test]
    fn starting_matches_parsed_start_placement() {
        assert_eq!(Position::starting(), Position::from_fen(START_PLACEMENT).unwrap());
    }

    #[test]
    fn pieces_land_on_their_squares() {
        let position = Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1").unwrap();
        assert_eq!(position.piece_at(sq("e4")), Some(Piece::new(Side::White, PieceKind::Pawn)));
        assert_eq!(position.piece_at(sq("e2")), None);
        assert_eq!(position.piece_at(sq("d8")), Some(Piece::new(Side::Black, PieceKind::Queen)));
        assert_eq!(position.piece_at(sq("e1")), Some(Piece::new(Side::White, PieceKind::King)));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(Position::from_fen("   "), Err(PositionParseError::Empty)));
    }

    #[test]
    fn wrong_rank_count_is_a_syntax_error() {
        let err = Position::from_fen("8/8/8/8/8/8/8").unwrap_err();
        assert!(matches!(err, PositionParseError::Syntax { .. }));
    }

    #[test]
    fn bad_letter_is_a_syntax_error() {
        let err = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX").unwrap_err();
        assert!(matches!(err, PositionParseError::Syntax { .. }));
    }

    #[test]
    fn short_rank_points_at_the_rank() {
        let err = Position::from_fen("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR").unwrap_err();
        match err {
            PositionParseError::RankWidth { rank, files, span, .. } => {
                assert_eq!(rank, 7);
                assert_eq!(files, 7);
                assert_eq!(span.offset(), 9);
                assert_eq!(span.len(), 7);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn long_rank_is_rejected() {
        let err = Position::from_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR");
        assert!(err.is_err());
        let err = Position::from_fen("rnbqkbnr/pppppppp/8p/8/8/8/PPPPPPPP/RNBQKBNR").unwrap_err();
        assert!(matches!(err, PositionParseError::RankWidth { rank: 6, files: 9, .. }));
    }
}
