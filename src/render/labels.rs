//! Coordinate labels in the padding band around the board

use glam::dvec2;

use crate::config::LayoutConfig;
use crate::types::FILE_LETTERS;

use super::shapes::LabelShape;
use super::sprite_scale;

/// File label font size at a 45px square.
pub const FILE_LABEL_FONT: f64 = 10.4;
/// Rank label font size at a 45px square.
pub const RANK_LABEL_FONT: f64 = 11.2;

/// 32 labels: for each column/row, top file, bottom file, left rank, right rank.
///
/// With `scale_labels` the fonts grow with the square size, so labels keep
/// their proportion to the board.
pub fn layout_labels(config: &LayoutConfig) -> Vec<LabelShape> {
    let sq = config.square_size;
    let pad = config.board_padding;
    let scale = if config.capabilities.scale_labels {
        sprite_scale(sq)
    } else {
        1.0
    };
    let file_font = FILE_LABEL_FONT * scale;
    let rank_font = RANK_LABEL_FONT * scale;

    let near = pad / 2.0;
    let far = 8.0 * sq + 1.5 * pad;
    let fill = config.palette.text;

    let mut labels = Vec::with_capacity(32);
    for i in 0..8 {
        // Index into the board as drawn: left to right, top to bottom
        let k = if config.white_bottom { i } else { 7 - i };
        let file = FILE_LETTERS[k].to_ascii_uppercase().to_string();
        let rank = (8 - k).to_string();
        let along = pad + sq * (i as f64 + 0.5);

        let label = |text: &str, x: f64, y: f64, font_size: f64| LabelShape {
            text: text.to_string(),
            position: dvec2(x, y),
            font_size,
            fill,
        };
        labels.push(label(&file, along, near, file_font));
        labels.push(label(&file, along, far, file_font));
        labels.push(label(&rank, near, along, rank_font));
        labels.push(label(&rank, far, along, rank_font));
    }
    labels
}
