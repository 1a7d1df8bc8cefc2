//! Mouse and touch adapters - the only code that reads Dioxus event payloads

use dioxus::prelude::*;

use crate::engine::PointerSample;

impl PointerSample {
    pub fn from_mouse(data: &MouseData) -> Self {
        let p = data.page_coordinates();
        Self::new(p.x, p.y)
    }

    /// First active touch; multi-touch gestures are not combined.
    pub fn from_touch(data: &TouchData) -> Option<Self> {
        data.touches().first().map(|touch| {
            let p = touch.page_coordinates();
            Self::new(p.x, p.y)
        })
    }
}
