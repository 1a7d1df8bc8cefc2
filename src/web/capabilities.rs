//! Render capabilities - which transform property this browser understands
//!
//! Detected once by the application root and handed to every propeller,
//! so no component probes the DOM on its own.

use crate::config::Transition;
use crate::primitives::rotate_css;

/// Vendor prefix needed for `transform` / `transition`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StylePrefix {
    #[default]
    None,
    Webkit,
    Moz,
    Ms,
}

impl StylePrefix {
    /// Probe order, with the DOM style property each prefix exposes
    const CANDIDATES: &[(Self, &'static str)] = &[
        (Self::None, "transform"),
        (Self::Webkit, "webkitTransform"),
        (Self::Moz, "MozTransform"),
        (Self::Ms, "msTransform"),
    ];

    pub fn css(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Webkit => "-webkit-",
            Self::Moz => "-moz-",
            Self::Ms => "-ms-",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderCapabilities {
    pub prefix: StylePrefix,
}

impl RenderCapabilities {
    pub const fn new(prefix: StylePrefix) -> Self {
        Self { prefix }
    }

    /// Checks the body's style object for the first transform property it
    /// knows. Falls back to unprefixed properties when there is no document.
    pub fn detect() -> Self {
        let Some(style) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .map(|body| body.style())
        else {
            tracing::warn!("no document body, assuming unprefixed transforms");
            return Self::default();
        };

        let prefix = StylePrefix::CANDIDATES
            .iter()
            .find(|(_, property)| {
                js_sys::Reflect::has(&style, &js_sys::JsString::from(*property))
                    .unwrap_or(false)
            })
            .map(|(prefix, _)| *prefix)
            .unwrap_or_default();
        tracing::debug!(?prefix, "detected transform support");
        Self { prefix }
    }

    /// Declaration that paints the element at `degrees`
    pub fn rotation_style(&self, degrees: f64) -> String {
        format!("{}transform: {} translateZ(0);", self.prefix.css(), rotate_css(degrees))
    }

    /// Declaration applied before the first rotation to get a compositor layer
    pub fn idle_style(&self) -> String {
        format!("{}transform: translateZ(0);", self.prefix.css())
    }

    pub fn transition_style(&self, transition: Option<&Transition>) -> String {
        match transition {
            Some(t) => format!(
                "{}transition: all {}ms {};",
                self.prefix.css(),
                t.duration_ms,
                t.easing
            ),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unprefixed_rotation_style() {
        let caps = RenderCapabilities::default();
        assert_eq!(caps.rotation_style(45.0), "transform: rotate(45deg) translateZ(0);");
        assert_eq!(caps.idle_style(), "transform: translateZ(0);");
    }

    #[test]
    fn prefixed_styles() {
        let caps = RenderCapabilities::new(StylePrefix::Webkit);
        assert_eq!(
            caps.rotation_style(-12.5),
            "-webkit-transform: rotate(-12.5deg) translateZ(0);"
        );
        let t = Transition { duration_ms: 300.0, easing: "ease-in-out".into() };
        assert_eq!(caps.transition_style(Some(&t)), "-webkit-transition: all 300ms ease-in-out;");
    }

    #[test]
    fn no_transition_no_style() {
        assert_eq!(RenderCapabilities::default().transition_style(None), "");
    }
}
