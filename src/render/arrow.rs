//! Arrow geometry: straight and knight-move arrows as single polygons
//!
//! Every arrow outline is built in a local frame whose origin is the center of
//! the source square, then mapped into place by one affine transform:
//!
//! - straight arrows point along local +x and are rotated by the angle of the
//!   move
//! - knight arrows run their long leg along local +x and their short leg along
//!   local +y; the transform's axes are the two leg directions, so each of the
//!   eight knight moves is a rotation or a reflection of the same L

use glam::{DAffine2, DVec2, dvec2};

use crate::annotations::ArrowDescriptor;
use crate::config::LayoutConfig;

use super::grid::square_center;
use super::shapes::{ArrowKind, ArrowShape};

/// Arrow proportions for one square size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowMetrics {
    /// Half the shaft width
    pub line_width_offset: f64,
    /// Half the head width
    pub marker_offset: f64,
    /// Head length
    pub marker_size: f64,
    /// Gap between the tip and the destination center
    pub tip_inset: f64,
}

impl ArrowMetrics {
    pub fn for_square(square_size: f64) -> Self {
        Self {
            line_width_offset: 0.1 * square_size,
            marker_offset: 0.35 * square_size,
            marker_size: 0.5 * square_size,
            tip_inset: 0.1 * square_size,
        }
    }
}

/// Straight outline of the given length, pointing along +x.
///
/// Returns the 7 outline points, the shaft end and the tip.
pub fn straight_outline(length: f64, m: &ArrowMetrics) -> ([DVec2; 7], DVec2, DVec2) {
    let w = m.line_width_offset;
    let h = m.marker_offset;
    let tip = length - m.tip_inset;
    let base = tip - m.marker_size;
    (
        [
            dvec2(0.0, -w),
            dvec2(base, -w),
            dvec2(base, -h),
            dvec2(tip, 0.0),
            dvec2(base, h),
            dvec2(base, w),
            dvec2(0.0, w),
        ],
        dvec2(base, 0.0),
        dvec2(tip, 0.0),
    )
}

/// L outline: `long` along +x, then `short` along +y ending in the head.
///
/// Returns the 9 outline points, the shaft end and the tip.
pub fn knight_outline(long: f64, short: f64, m: &ArrowMetrics) -> ([DVec2; 9], DVec2, DVec2) {
    let w = m.line_width_offset;
    let h = m.marker_offset;
    let tip = short - m.tip_inset;
    let base = tip - m.marker_size;
    (
        [
            dvec2(0.0, -w),
            dvec2(long + w, -w),
            dvec2(long + w, base),
            dvec2(long + h, base),
            dvec2(long, tip),
            dvec2(long - h, base),
            dvec2(long - w, base),
            dvec2(long - w, w),
            dvec2(0.0, w),
        ],
        dvec2(long, base),
        dvec2(long, tip),
    )
}

/// Unit directions and lengths of a knight move's legs, long leg first.
///
/// `delta` is the pixel displacement between the two square centers.
pub fn knight_legs(delta: DVec2) -> ((DVec2, f64), (DVec2, f64)) {
    let horizontal = (dvec2(delta.x.signum(), 0.0), delta.x.abs());
    let vertical = (dvec2(0.0, delta.y.signum()), delta.y.abs());
    if delta.x.abs() > delta.y.abs() {
        (horizontal, vertical)
    } else {
        (vertical, horizontal)
    }
}

/// Lay out one arrow.
pub fn layout_arrow(arrow: &ArrowDescriptor, config: &LayoutConfig) -> ArrowShape {
    let metrics = ArrowMetrics::for_square(config.square_size);
    let tail = square_center(arrow.from, config);
    let delta = square_center(arrow.to, config) - tail;
    let fill = arrow.color.unwrap_or(config.palette.arrow);

    let knight = arrow.knight && config.capabilities.supports_knight_arrows && arrow.from.is_knight_jump(arrow.to);

    if knight {
        let ((long_dir, long), (short_dir, short)) = knight_legs(delta);
        let (outline, shaft_end, tip) = knight_outline(long, short, &metrics);
        let place = DAffine2::from_cols(long_dir, short_dir, tail);
        ArrowShape {
            kind: ArrowKind::Knight,
            points: outline.iter().map(|&p| place.transform_point2(p)).collect(),
            tail,
            shaft_end: place.transform_point2(shaft_end),
            tip: place.transform_point2(tip),
            bend: Some(place.transform_point2(dvec2(long, 0.0))),
            fill,
        }
    } else {
        let length = delta.x.hypot(delta.y);
        let angle = delta.y.atan2(delta.x);
        let (outline, shaft_end, tip) = straight_outline(length, &metrics);
        let place = DAffine2::from_angle_translation(angle, tail);
        ArrowShape {
            kind: ArrowKind::Straight,
            points: outline.iter().map(|&p| place.transform_point2(p)).collect(),
            tail,
            shaft_end: place.transform_point2(shaft_end),
            tip: place.transform_point2(tip),
            bend: None,
            fill,
        }
    }
}
