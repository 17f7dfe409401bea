mod polar;

pub use polar::{calc_angle, calc_pos, calc_r};

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::color::{Hsb, RgbColor};

/// A position in pixel space, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Distance the knob is kept from the wheel's edges while dragging.
pub const DEFAULT_KNOB_INSET: f64 = 10.0;

/// The rectangle a color wheel is drawn into, plus the knob inset used when
/// turning a pointer position back into a color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorWheel {
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_knob_inset")]
    pub knob_inset: f64,
}

fn default_knob_inset() -> f64 {
    DEFAULT_KNOB_INSET
}

impl ColorWheel {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            knob_inset: DEFAULT_KNOB_INSET,
        }
    }

    pub fn with_knob_inset(mut self, inset: f64) -> Self {
        self.knob_inset = inset.max(0.0);
        self
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Where the knob sits for a given color. Brightness does not move it.
    pub fn knob_position(&self, hsb: Hsb) -> Point {
        calc_pos(hsb.hue, hsb.saturation, self.height, self.width)
    }

    pub fn position_of_color(&self, color: RgbColor) -> Point {
        self.knob_position(Hsb::from_rgb(color))
    }

    /// Color under a pointer position, keeping the current brightness.
    ///
    /// The pointer is first pulled inside the inset border, so dragging
    /// outside the wheel keeps the selection on its rim.
    pub fn select(&self, point: Point, brightness: f64) -> Hsb {
        let clamped = self.clamp_to_inset(point);
        let center = self.center();
        let hue = calc_angle(clamped.x, clamped.y, center.x, center.y);
        let saturation = calc_r(clamped.x, clamped.y, self.width, self.height, hue);
        Hsb::new(hue, saturation, brightness)
    }

    fn clamp_to_inset(&self, point: Point) -> Point {
        let center = self.center();
        Point::new(
            clamp_axis(point.x, self.knob_inset, self.width - self.knob_inset, center.x),
            clamp_axis(point.y, self.knob_inset, self.height - self.knob_inset, center.y),
        )
    }
}

impl Default for ColorWheel {
    fn default() -> Self {
        Self::new(300.0, 300.0)
    }
}

/// Clamp into `[lo, hi]`, or collapse to `fallback` when the band is empty.
fn clamp_axis(value: f64, lo: f64, hi: f64, fallback: f64) -> f64 {
    match lo.partial_cmp(&hi) {
        Some(Ordering::Less | Ordering::Equal) if value.is_finite() => value.clamp(lo, hi),
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_inverts_knob_position() {
        let wheel = ColorWheel::new(320.0, 200.0);
        let hsb = Hsb::new(0.3, 0.6, 0.8);
        let knob = wheel.knob_position(hsb);
        let picked = wheel.select(knob, hsb.brightness);

        assert!((picked.hue - hsb.hue).abs() < 0.005);
        assert!((picked.saturation - hsb.saturation).abs() < 0.01);
        assert_eq!(picked.brightness, 0.8);
    }

    #[test]
    fn select_clamps_to_inset() {
        let wheel = ColorWheel::new(200.0, 200.0);
        let picked = wheel.select(Point::new(500.0, 100.0), 1.0);
        // Pulled back to x = 190, which is 90 of a 100 px half-width.
        assert!(picked.hue.abs() < 1e-9);
        assert!((picked.saturation - 0.9).abs() < 1e-9);
    }

    #[test]
    fn select_in_tiny_wheel_collapses_to_center() {
        let wheel = ColorWheel::new(12.0, 12.0);
        let picked = wheel.select(Point::new(0.0, 0.0), 0.5);
        assert_eq!(picked.hue, 0.0);
        assert_eq!(picked.saturation, 0.0);
    }

    #[test]
    fn color_position_matches_knob_position() {
        let wheel = ColorWheel::default();
        let red = RgbColor::new(255, 0, 0);
        let p = wheel.position_of_color(red);
        assert!((p.x - 300.0).abs() < 1e-6);
        assert!((p.y - 150.0).abs() < 1e-6);
    }

    #[test]
    fn inset_is_never_negative() {
        let wheel = ColorWheel::new(100.0, 100.0).with_knob_inset(-3.0);
        assert_eq!(wheel.knob_inset, 0.0);
    }
}
