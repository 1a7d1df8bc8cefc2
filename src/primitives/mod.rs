//! Geometry primitives shared by the engine and the web layer
//!
//! Pure values with no DOM access, so everything here is testable natively.

pub mod angle;
pub mod point;

pub use angle::{Angle, normalize, pointer_angle, quantize, rotate_css, shortest_signed_delta};
pub use point::Point;
