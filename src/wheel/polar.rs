use std::f64::consts::{PI, TAU};

use tracing::trace;

use super::Point;
use crate::trig::{atan_approx, cos_approx};

/// Hue fraction at which the rectangle's corner is reached.
///
/// Below it (and mirrored around each half turn) the left/right edges limit
/// the radius; between two corners the top/bottom edges do.
#[inline]
fn corner_hue(width: f64, height: f64) -> f64 {
    atan_approx(height / width) / TAU
}

#[inline]
fn height_limited(hue: f64, lim: f64) -> bool {
    (hue >= lim && hue <= 0.5 - lim) || (hue >= 0.5 + lim && hue <= 1.0 - lim)
}

#[inline]
fn usable_extent(width: f64, height: f64) -> bool {
    width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
}

/// Map a hue/saturation pair to a pixel position inside a `width × height`
/// rectangle, origin top-left.
///
/// Saturation 1 lands on the rectangle's edge, not on an inscribed circle.
/// Hue is wrapped into `[0, 1)` and saturation clamped to `[0, 1]`. A
/// rectangle with no area yields its center, and the result never leaves
/// the rectangle.
pub fn calc_pos(hue: f64, saturation: f64, height: f64, width: f64) -> Point {
    let center = Point::new(width.max(0.0) / 2.0, height.max(0.0) / 2.0);
    if !usable_extent(width, height) {
        trace!(width, height, "degenerate wheel rectangle");
        return if center.is_finite() { center } else { Point::ORIGIN };
    }
    if !hue.is_finite() || !saturation.is_finite() {
        return center;
    }

    let hue = hue.rem_euclid(1.0);
    let saturation = saturation.clamp(0.0, 1.0);
    let angle = hue * TAU;

    let cos = cos_approx(angle);
    // Derived from cos so the two stay on the same unit circle.
    let mut sin = (1.0 - cos * cos).max(0.0).sqrt();
    if angle > PI {
        sin = -sin;
    }

    let lim = corner_hue(width, height);
    let radius = if height_limited(hue, lim) {
        (center.y * saturation / sin).abs()
    } else {
        (center.x * saturation / cos).abs()
    };

    if !radius.is_finite() {
        trace!(hue, saturation, "non-finite knob radius, using center");
        return center;
    }

    // Approximation error can push a saturated knob a pixel past the edge.
    Point::new(
        (center.x + radius * cos).clamp(0.0, width),
        (center.y + radius * sin).clamp(0.0, height),
    )
}

/// Hue fraction in `[0, 1)` of `(x, y)` as seen from `(x0, y0)`.
///
/// Points straight above or below the center map to exactly 0.75 or 0.25.
/// The center itself, and any non-finite input, maps to 0.
pub fn calc_angle(x: f64, y: f64, x0: f64, y0: f64) -> f64 {
    if !(x.is_finite() && y.is_finite() && x0.is_finite() && y0.is_finite()) {
        return 0.0;
    }

    if x == x0 {
        return if y == y0 {
            0.0
        } else if y0 > y {
            0.75
        } else {
            0.25
        };
    }

    let hue = if x > x0 {
        let turn = atan_approx((y - y0) / (x - x0)) / TAU;
        if y0 >= y {
            1.0 + turn
        } else {
            turn
        }
    } else {
        0.5 - atan_approx((y0 - y) / (x - x0)) / TAU
    };

    if hue >= 1.0 {
        hue - 1.0
    } else {
        hue
    }
}

/// Radius fraction of `(x, y)` for a point already known to sit at hue
/// `angle`, normalized by the rectangle's half-extent along the limiting
/// axis. Clamped to `[0, 1]`.
pub fn calc_r(x: f64, y: f64, width: f64, height: f64, angle: f64) -> f64 {
    if !usable_extent(width, height) {
        trace!(width, height, "degenerate wheel rectangle");
        return 0.0;
    }

    let lim = corner_hue(width, height);
    let r = if height_limited(angle, lim) {
        let y0 = height / 2.0;
        ((y - y0) / (height - y0)).abs()
    } else {
        let x0 = width / 2.0;
        ((x - x0) / (width - x0)).abs()
    };

    if r.is_nan() {
        0.0
    } else {
        r.clamp(0.0, 1.0)
    }
}
