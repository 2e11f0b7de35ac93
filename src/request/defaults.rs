//! Default request settings (a 45px square with 15px of padding)

use crate::config::{Capabilities, Palette};
use crate::types::Color;

pub const BOARD_SIZE: u32 = 512;
pub const SQUARE_SIZE: f64 = 45.0;
pub const BOARD_PADDING: f64 = 15.0;
pub const MARKS_SIZE: f64 = 5.0;

pub const BG_COLOR: Color = Color::rgb(0x21, 0x21, 0x21);
pub const TEXT_COLOR: Color = Color::rgb(0xe5, 0xe5, 0xe5);
pub const MARKS_COLOR: Color = Color::rgb(0xaa, 0xa2, 0x3b);
pub const CROSS_COLOR: Color = Color::rgb(0xff, 0x25, 0x00);
pub const W_CELL_COLOR: Color = Color::rgb(0xf0, 0xd9, 0xb5);
pub const B_CELL_COLOR: Color = Color::rgb(0xb5, 0x88, 0x63);
pub const ARROW_COLOR: Color = Color::rgba(0x15, 0x78, 0x1b, 0xb3);

pub const PALETTE: Palette = Palette {
    background: BG_COLOR,
    text: TEXT_COLOR,
    marks: MARKS_COLOR,
    cross: CROSS_COLOR,
    light_square: W_CELL_COLOR,
    dark_square: B_CELL_COLOR,
    arrow: ARROW_COLOR,
};

pub const CAPABILITIES: Capabilities = Capabilities {
    supports_knight_arrows: true,
    scale_labels: true,
};
