//! DOM target - locates a propeller element and paints it through signals

use dioxus::prelude::*;

use crate::config::Transition;
use crate::engine::RotationTarget;
use crate::primitives::Point;
use super::RenderCapabilities;

/// Center of the element with `id` in page coordinates
fn element_center(id: &str) -> Option<Point> {
    let window = web_sys::window()?;
    let element = window.document()?.get_element_by_id(id)?;
    let rect = element.get_bounding_client_rect();
    let scroll_x = window.scroll_x().unwrap_or(0.0);
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    Some(Point::center_of(
        rect.left() + scroll_x,
        rect.top() + scroll_y,
        rect.width(),
        rect.height(),
    ))
}

/// Rotates the element with `element_id`. The component reads `transform`
/// and `transition` into the element's inline style.
pub struct DomTarget {
    element_id: String,
    caps: RenderCapabilities,
    transform: Signal<String>,
    transition: Signal<String>,
}

impl DomTarget {
    pub fn new(
        element_id: impl Into<String>,
        caps: RenderCapabilities,
        transform: Signal<String>,
        transition: Signal<String>,
    ) -> Self {
        Self {
            element_id: element_id.into(),
            caps,
            transform,
            transition,
        }
    }
}

impl RotationTarget for DomTarget {
    fn center(&self) -> Option<Point> {
        element_center(&self.element_id)
    }

    fn apply_rotation(&mut self, degrees: f64) {
        self.transform.set(self.caps.rotation_style(degrees));
    }

    fn prepare(&mut self, degrees: f64, transition: Option<&Transition>) {
        let transform = if degrees == 0.0 {
            self.caps.idle_style()
        } else {
            self.caps.rotation_style(degrees)
        };
        self.transform.set(transform);
        self.transition.set(self.caps.transition_style(transition));
    }
}
