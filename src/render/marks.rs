//! Marked squares: a dot on an empty square, a cross on an occupied one

use crate::config::LayoutConfig;
use crate::position::Square;

use super::grid::square_center;
use super::shapes::{CrossShape, DotShape, Shape};

/// The mark drawn on `square`.
pub fn layout_mark(square: &Square, config: &LayoutConfig) -> Shape {
    let center = square_center(square.id, config);
    if square.piece.is_some() {
        CrossShape {
            center,
            scale: config.scale_factor,
            fill: config.palette.cross,
        }
        .into()
    } else {
        DotShape {
            center,
            radius: config.marks_size * config.scale_factor,
            fill: config.palette.marks,
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::test_config;
    use crate::position::Position;
    use glam::dvec2;

    fn square(position: &Position, name: &str) -> Square {
        let id = name.parse().unwrap();
        *position.squares().iter().find(|s| s.id == id).unwrap()
    }

    #[test]
    fn empty_square_gets_a_dot() {
        let config = test_config();
        let shape = layout_mark(&square(&Position::starting(), "e4"), &config);
        let Shape::Dot(dot) = shape else {
            panic!("expected a dot, got {shape:?}");
        };
        assert_eq!(dot.center, dvec2(217.5, 217.5));
        assert_eq!(dot.radius, 5.0);
        assert_eq!(dot.fill, config.palette.marks);
    }

    #[test]
    fn occupied_square_gets_a_cross() {
        let config = test_config();
        let shape = layout_mark(&square(&Position::starting(), "e2"), &config);
        let Shape::Cross(cross) = shape else {
            panic!("expected a cross, got {shape:?}");
        };
        assert_eq!(cross.center, dvec2(217.5, 307.5));
        assert_eq!(cross.fill, config.palette.cross);
    }

    #[test]
    fn dot_radius_scales() {
        let config = LayoutConfig {
            scale_factor: 2.0,
            ..test_config()
        };
        let shape = layout_mark(&square(&Position::starting(), "d5"), &config);
        assert!(matches!(shape, Shape::Dot(DotShape { radius, .. }) if radius == 10.0));
    }
}
