//! Layout configuration shared by every layout pass
//!
//! There are no defaults here; [`crate::request`] owns them.

use crate::errors::RenderError;
use crate::types::{Color, check_non_negative, check_positive};

/// Side length, in layout units, of the box piece sprites and the cross are drawn in.
pub const SPRITE_DESIGN_SIZE: f64 = 45.0;

/// Fill colors for one render
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub marks: Color,
    pub cross: Color,
    pub light_square: Color,
    pub dark_square: Color,
    /// Used for arrows that carry no color of their own
    pub arrow: Color,
}

/// Optional layout behaviors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Draw knight moves as L-shaped arrows
    pub supports_knight_arrows: bool,
    /// Grow label fonts with `scale_factor`
    pub scale_labels: bool,
}

/// Immutable geometry and color parameters for one render call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub square_size: f64,
    pub board_padding: f64,
    /// Dot radius before scaling
    pub marks_size: f64,
    /// Multiplier for sprite-sized artwork (pieces, crosses, dots)
    pub scale_factor: f64,
    /// a1 in the bottom-left corner when true, h8 there when false
    pub white_bottom: bool,
    pub palette: Palette,
    pub capabilities: Capabilities,
}

impl LayoutConfig {
    /// Reject sizes a board cannot be laid out with.
    pub fn validate(&self) -> Result<(), RenderError> {
        let fields: [(&'static str, f64, fn(f64) -> Result<f64, crate::types::NumericError>); 4] = [
            ("square_size", self.square_size, check_positive),
            ("board_padding", self.board_padding, check_non_negative),
            ("marks_size", self.marks_size, check_non_negative),
            ("scale_factor", self.scale_factor, check_positive),
        ];
        for (field, value, check) in fields {
            check(value).map_err(|reason| RenderError::InvalidConfig { field, reason })?;
        }
        Ok(())
    }

    /// Width and height of the square canvas.
    pub fn canvas_size(&self) -> f64 {
        self.square_size * 8.0 + self.board_padding * 2.0
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::types::NumericError;

    /// A 45px board with the usual colors, for tests across the crate.
    pub(crate) fn test_config() -> LayoutConfig {
        LayoutConfig {
            square_size: 45.0,
            board_padding: 15.0,
            marks_size: 5.0,
            scale_factor: 1.0,
            white_bottom: true,
            palette: Palette {
                background: Color::rgb(0x21, 0x21, 0x21),
                text: Color::rgb(0xe5, 0xe5, 0xe5),
                marks: Color::rgb(0xaa, 0xa2, 0x3b),
                cross: Color::rgb(0xff, 0x25, 0x00),
                light_square: Color::rgb(0xf0, 0xd9, 0xb5),
                dark_square: Color::rgb(0xb5, 0x88, 0x63),
                arrow: Color::rgba(0x15, 0x78, 0x1b, 0xb3),
            },
            capabilities: Capabilities {
                supports_knight_arrows: true,
                scale_labels: true,
            },
        }
    }

    #[test]
    fn canvas_includes_padding_on_both_sides() {
        assert_eq!(test_config().canvas_size(), 390.0);
    }

    #[test]
    fn validate_accepts_zero_padding() {
        let config = LayoutConfig {
            board_padding: 0.0,
            ..test_config()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_names_the_bad_field() {
        let config = LayoutConfig {
            square_size: 0.0,
            ..test_config()
        };
        match config.validate() {
            Err(RenderError::InvalidConfig { field, reason }) => {
                assert_eq!(field, "square_size");
                assert_eq!(reason, NumericError::Zero);
            }
            other => panic!("unexpected: {other:?}"),
        }

        let config = LayoutConfig {
            scale_factor: f64::NAN,
            ..test_config()
        };
        assert!(matches!(
            config.validate(),
            Err(RenderError::InvalidConfig { field: "scale_factor", reason: NumericError::NaN })
        ));
    }
}
