//! Web layer - Dioxus component, DOM target and browser capability probing

pub mod capabilities;
pub mod component;
pub mod input;
pub mod target;

pub use capabilities::{RenderCapabilities, StylePrefix};
pub use component::Propeller;
pub use target::DomTarget;
