//! Gallery - one propeller per option family, each with a live readout

use dioxus::prelude::*;
use propeller::{Propeller, PropellerConfig, TouchElement};

use super::{Header, PAGE_STYLE, disc_style};

struct Exhibit {
    id: &'static str,
    title: &'static str,
    note: &'static str,
    color: &'static str,
    config: fn() -> PropellerConfig,
}

const EXHIBITS: &[Exhibit] = &[
    Exhibit {
        id: "plain",
        title: "Direct",
        note: "No inertia, follows the pointer",
        color: "#3b82f6",
        config: PropellerConfig::default,
    },
    Exhibit {
        id: "inertia",
        title: "Inertia 0.95",
        note: "Flick it and let go",
        color: "#22c55e",
        config: || PropellerConfig::default().with_inertia(0.95),
    },
    Exhibit {
        id: "stepped",
        title: "Step 30\u{b0}",
        note: "Snaps with a 200ms ease-out transition",
        color: "#f59e0b",
        config: || {
            PropellerConfig::default()
                .with_inertia(0.9)
                .with_step(30.0)
                .with_transition(200.0, "ease-out")
        },
    },
    Exhibit {
        id: "container",
        title: "Container",
        note: "Grab the dark ring, it never turns",
        color: "#ec4899",
        config: || {
            PropellerConfig::default()
                .with_inertia(0.92)
                .with_touch_element(TouchElement::Container)
        },
    },
];

#[component]
fn ExhibitCard(index: usize) -> Element {
    let exhibit = &EXHIBITS[index];
    let mut angle = use_signal(|| 0.0f64);
    let mut status = use_signal(|| "idle");

    let config = (exhibit.config)();
    let angle_text = format!("{:.1}\u{b0}", angle());
    let disc = disc_style(140, exhibit.color);
    let ring = "padding: 30px; background: #111827; border-radius: 50%;";

    rsx! {
        div {
            style: "background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 10px; padding: 24px; display: flex; flex-direction: column; align-items: center; gap: 16px;",
            h3 { style: "color: #e5e7eb; font-size: 16px; margin: 0;", "{exhibit.title}" }
            p { style: "color: #6b7280; font-size: 13px; margin: 0;", "{exhibit.note}" }
            Propeller {
                id: "{exhibit.id}",
                config,
                container_style: "{ring}",
                on_rotate: move |a| angle.set(a),
                on_drag_start: move |_| status.set("dragging"),
                on_drag_stop: move |_| status.set("released"),
                on_stop: move |_| status.set("at rest"),
                div { style: "{disc}" }
            }
            div {
                style: "font-family: monospace; font-size: 13px; color: #9ca3af;",
                "angle: {angle_text} \u{b7} {status}"
            }
        }
    }
}

#[component]
pub fn Gallery() -> Element {
    rsx! {
        div {
            style: "{PAGE_STYLE}",
            Header {
                title: "Gallery",
                subtitle: "Drag any disc",
            }
            div {
                style: "display: grid; grid-template-columns: repeat(2, 280px); gap: 20px;",
                for index in 0..EXHIBITS.len() {
                    ExhibitCard { key: "{index}", index }
                }
            }
        }
    }
}
