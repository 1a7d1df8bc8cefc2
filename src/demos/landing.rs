use dioxus::prelude::*;
use propeller::{Propeller, PropellerConfig};

use crate::Route;
use super::{PAGE_STYLE, disc_style};

struct DemoInfo {
    name: &'static str,
    desc: &'static str,
    route: Route,
}

const DEMOS: &[DemoInfo] = &[
    DemoInfo { name: "Gallery", desc: "Plain, inertial, stepped and container-driven propellers", route: Route::Gallery {} },
    DemoInfo { name: "Prize wheel", desc: "Random spin that reports where it lands", route: Route::Wheel {} },
    DemoInfo { name: "Sandbox", desc: "Paste JSON options and try them live", route: Route::Sandbox {} },
];

#[component]
pub fn Landing() -> Element {
    let hero = PropellerConfig::default().with_inertia(0.97).with_speed(6.0);
    let hero_disc = disc_style(180, "#6366f1");

    rsx! {
        div {
            style: "{PAGE_STYLE} justify-content: center;",

            div {
                style: "text-align: center; max-width: 720px;",
                h1 {
                    style: "font-size: 48px; font-weight: 700; color: #e5e7eb; margin: 0 0 16px 0; letter-spacing: -1px;",
                    "Propeller"
                }
                p {
                    style: "font-size: 20px; color: #9ca3af; margin: 0 0 40px 0; line-height: 1.6;",
                    "Grab an element and spin it. Rotation follows the pointer around the element's center and keeps going with inertia after you let go."
                }
            }

            Propeller {
                id: "hero",
                config: hero,
                div { style: "{hero_disc}" }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 20px; max-width: 800px; margin-top: 64px;",
                for demo in DEMOS {
                    Link {
                        to: demo.route.clone(),
                        style: "display: block; background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 10px; padding: 24px; text-decoration: none;",
                        h3 {
                            style: "color: #e5e7eb; font-size: 16px; margin: 0 0 8px 0;",
                            "{demo.name}"
                        }
                        p {
                            style: "color: #6b7280; font-size: 14px; margin: 0; line-height: 1.5;",
                            "{demo.desc}"
                        }
                    }
                }
            }
        }
    }
}
