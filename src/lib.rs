//! Propeller - spin HTML elements with the mouse or a finger
//!
//! The element's rotation follows the pointer's angle around the element's
//! center and can keep spinning after release under a simple inertia model.
//!
//! - [`primitives`]: wrap-safe angle math and page geometry
//! - [`engine`]: the angle model and the gesture/tick controller, DOM-free
//! - [`config`]: options, readable from the plugin's JSON option objects
//! - [`web`]: the Dioxus `Propeller` component and its DOM collaborators

pub mod config;
pub mod engine;
pub mod error;
pub mod primitives;
pub mod web;

pub use config::{PropellerConfig, TouchElement, Transition};
pub use engine::{Callbacks, PointerSample, RotationController, RotationTarget, Schedule};
pub use error::ConfigError;
pub use web::{Propeller, RenderCapabilities};
