//! Point - page-space coordinates for anchors and pointer samples

/// Position in CSS pixels, relative to the top-left of the page
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Center of a box given its top-left corner and size
    pub fn center_of(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            x: left + width / 2.0,
            y: top + height / 2.0,
        }
    }

    /// Point at `radius` from `self` in the direction of `degrees`
    /// (0° up, clockwise)
    pub fn orbit(&self, degrees: f64, radius: f64) -> Self {
        let rad = degrees.to_radians();
        Self {
            x: self.x + radius * rad.sin(),
            y: self.y - radius * rad.cos(),
        }
    }
}
