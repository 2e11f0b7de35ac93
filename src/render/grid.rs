//! Grid layout: squares to pixel rectangles

use glam::{DVec2, dvec2};

use crate::config::LayoutConfig;
use crate::types::{Color, SquareId};

/// File and rank indices after applying board orientation.
///
/// Both are 0-based and count from the top-left of the drawn board.
#[inline]
pub fn oriented_indices(id: SquareId, config: &LayoutConfig) -> (u8, u8) {
    let file = id.file.index();
    let rank = id.rank.number();
    if config.white_bottom {
        (file, 8 - rank)
    } else {
        (7 - file, rank - 1)
    }
}

/// Top-left corner of a square.
pub fn square_origin(id: SquareId, config: &LayoutConfig) -> DVec2 {
    let (col, row) = oriented_indices(id, config);
    dvec2(
        col as f64 * config.square_size + config.board_padding,
        row as f64 * config.square_size + config.board_padding,
    )
}

/// Center of a square.
pub fn square_center(id: SquareId, config: &LayoutConfig) -> DVec2 {
    square_origin(id, config) + DVec2::splat(config.square_size / 2.0)
}

/// Fill for a square; the selected square takes the marks color.
pub fn square_fill(id: SquareId, config: &LayoutConfig, selected: Option<SquareId>) -> Color {
    if selected == Some(id) {
        return config.palette.marks;
    }
    // a1 is dark
    if (id.file.index() + id.rank.number()) % 2 == 1 {
        config.palette.dark_square
    } else {
        config.palette.light_square
    }
}
