//! Rotation engine - angle model, gesture tracking and the frame tick
//!
//! Everything here is plain Rust. The web layer feeds it pointer samples and
//! frame timestamps; tests drive it with a recording target instead.

pub mod controller;
pub mod gesture;
pub mod model;

pub use controller::{Callbacks, Hook, RotationController, RotationTarget, Schedule};
pub use gesture::{Baseline, GesturePhase, GestureState, PointerSample};
pub use model::{AngleModel, SpeedChange};
