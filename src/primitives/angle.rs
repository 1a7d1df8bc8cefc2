//! Angle - wrap-safe rotation arithmetic with CSS transform output
//!
//! Screen convention: 0° points up (towards negative y) and angles grow
//! clockwise, which is also the direction CSS `rotate()` turns.

use std::f64::consts::PI;

use super::Point;

/// Angle in degrees, normalized to [0, 360)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Self = Self(0.0);

    pub fn new(degrees: f64) -> Self {
        Self(normalize(degrees))
    }

    pub fn from_radians(radians: f64) -> Self {
        Self::new(radians * 180.0 / PI)
    }

    pub const fn degrees(&self) -> f64 {
        self.0
    }

    pub fn radians(&self) -> f64 {
        self.0 * PI / 180.0
    }

    pub fn rotate(&self, by: f64) -> Self {
        Self::new(self.0 + by)
    }

    /// Signed shortest-arc distance from `other` to `self`
    pub fn delta_from(&self, other: Self) -> f64 {
        shortest_signed_delta(self.0, other.0)
    }

    pub fn to_css(&self) -> String {
        rotate_css(self.0)
    }
}

/// Reduces any finite angle to [0, 360) with floored (not truncating) modulo.
pub fn normalize(degrees: f64) -> f64 {
    let d = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if d >= 360.0 { 0.0 } else { d }
}

/// Signed difference `a - b` along the shorter arc, in (-180, 180].
///
/// Rounded to two decimals so that float noise from the trigonometric
/// round trip never leaks into accumulated angles.
pub fn shortest_signed_delta(a: f64, b: f64) -> f64 {
    let diff = (a - b).to_radians();
    let delta = diff.sin().atan2(diff.cos()).to_degrees();
    let rounded = (delta * 100.0).round() / 100.0;
    if rounded <= -180.0 { rounded + 360.0 } else { rounded }
}

/// Snaps to the next multiple of `step` at or above `degrees`.
///
/// The result is not normalized: a virtual angle of 725 with a step of 10
/// stays 730 so stepped transitions never animate backwards across 0°.
/// A non-positive step leaves the angle untouched.
pub fn quantize(degrees: f64, step: f64) -> f64 {
    if step > 0.0 {
        (degrees / step).ceil() * step
    } else {
        degrees
    }
}

/// Angle of `pointer` around `anchor`.
pub fn pointer_angle(anchor: Point, pointer: Point) -> Angle {
    let dx = pointer.x - anchor.x;
    let dy = pointer.y - anchor.y;
    Angle::new(dx.atan2(dy) * (-180.0 / PI) + 180.0)
}

/// CSS rotate function for an unnormalized angle
pub fn rotate_css(degrees: f64) -> String {
    format!("rotate({degrees}deg)")
}
