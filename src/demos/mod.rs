mod gallery;
mod landing;
mod sandbox;
mod wheel;

pub use gallery::Gallery;
pub use landing::Landing;
pub use sandbox::Sandbox;
pub use wheel::Wheel;

use dioxus::prelude::*;
use crate::Route;

pub const PAGE_STYLE: &str = "min-height: 100vh; background: #0f0f1a; display: flex; flex-direction: column; align-items: center; padding: 40px 20px; font-family: system-ui, -apple-system, sans-serif;";

/// Disc with a marker notch at 12 o'clock so rotation is visible
pub fn disc_style(size: u32, color: &str) -> String {
    format!(
        "width: {size}px; height: {size}px; border-radius: 50%; background: conic-gradient(from -6deg, #f8fafc 0deg 12deg, {color} 12deg 360deg); box-shadow: 0 8px 24px rgba(0,0,0,0.4); cursor: grab;"
    )
}

/// Page title with a way back home
#[component]
pub fn Header(title: String, subtitle: String) -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 16px; align-items: center; margin-bottom: 24px;",
            Link {
                to: Route::Landing {},
                style: "color: #6b7280; text-decoration: none; font-size: 14px;",
                "\u{2190} Home"
            }
            h2 {
                style: "color: #e5e7eb; margin: 0; font-size: 20px;",
                "{title}"
            }
            span {
                style: "color: #6b7280; font-size: 14px;",
                "{subtitle}"
            }
        }
    }
}
