//! Prize wheel - random initial spin, reports the prize under the pointer

use dioxus::prelude::*;
use propeller::primitives::normalize;
use propeller::{Propeller, PropellerConfig};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::{Header, PAGE_STYLE};

const PRIZES: &[(&str, &str)] = &[
    ("Sticker", "#ef4444"),
    ("Mug", "#f59e0b"),
    ("T-shirt", "#eab308"),
    ("Try again", "#22c55e"),
    ("Hoodie", "#14b8a6"),
    ("Poster", "#3b82f6"),
    ("Try again", "#8b5cf6"),
    ("Jackpot", "#ec4899"),
];

pub fn fresh_rng() -> SmallRng {
    let mut buf = [0u8; 32];
    if getrandom::fill(&mut buf).is_err() {
        // No entropy source; the clock is good enough for a toy wheel
        return SmallRng::seed_from_u64(js_sys::Date::now().to_bits());
    }
    SmallRng::from_seed(buf)
}

/// Prize under the 12 o'clock marker when the wheel sits at `angle`
pub fn prize_at(angle: f64) -> usize {
    let slice = 360.0 / PRIZES.len() as f64;
    ((normalize(-angle) / slice) as usize).min(PRIZES.len() - 1)
}

fn wheel_background() -> String {
    let slice = 360.0 / PRIZES.len() as f64;
    let stops: Vec<String> = PRIZES
        .iter()
        .enumerate()
        .map(|(i, (_, color))| format!("{color} {}deg {}deg", i as f64 * slice, (i + 1) as f64 * slice))
        .collect();
    format!("conic-gradient({})", stops.join(", "))
}

#[component]
pub fn Wheel() -> Element {
    let mut spin = use_signal(|| 0u32);
    let mut angle = use_signal(|| 0.0f64);
    let mut speed = use_signal(|| 0.0f64);
    let mut result = use_signal(|| Option::<usize>::None);

    let config = PropellerConfig::default()
        .with_angle(*angle.peek())
        .with_speed(speed())
        .with_inertia(0.985)
        .with_minimal_speed(0.02);
    let background = wheel_background();
    let labels = PRIZES.iter().enumerate().map(|(i, (name, _))| {
        let slice = 360.0 / PRIZES.len() as f64;
        let mid = i as f64 * slice + slice / 2.0;
        (format!("position: absolute; left: 50%; top: 50%; transform: rotate({mid}deg) translateY(-120px) translateX(-50%); transform-origin: 0 0; color: white; font-size: 13px; font-weight: 600; text-shadow: 0 1px 2px rgba(0,0,0,0.6); white-space: nowrap;"), *name)
    });
    let result_text = match result() {
        Some(i) => format!("You won: {}", PRIZES[i].0),
        None => "Spin the wheel or give it a flick".to_string(),
    };

    rsx! {
        div {
            style: "{PAGE_STYLE}",
            Header {
                title: "Prize wheel",
                subtitle: "Inertia 0.985, random kick",
            }

            // Marker
            div {
                style: "width: 0; height: 0; border-left: 14px solid transparent; border-right: 14px solid transparent; border-top: 24px solid #f8fafc; margin-bottom: -12px; z-index: 10; position: relative;",
            }

            Propeller {
                key: "{spin}",
                id: "wheel",
                config,
                on_rotate: move |a| angle.set(a),
                on_drag_start: move |_| result.set(None),
                on_stop: move |_| result.set(Some(prize_at(*angle.peek()))),
                div {
                    style: "position: relative; width: 320px; height: 320px; border-radius: 50%; background: {background}; box-shadow: 0 12px 36px rgba(0,0,0,0.5); cursor: grab;",
                    for (label_style, name) in labels {
                        div { style: "{label_style}", "{name}" }
                    }
                }
            }

            button {
                style: "margin-top: 32px; padding: 12px 32px; background: linear-gradient(135deg, #22c55e, #16a34a); color: white; border: none; border-radius: 8px; font-size: 16px; font-weight: 600; cursor: pointer;",
                onclick: move |_| {
                    let mut rng = fresh_rng();
                    let kick = rng.random_range(15.0..35.0);
                    let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
                    speed.set(kick * direction);
                    result.set(None);
                    spin.set(spin() + 1);
                },
                "Spin"
            }

            p {
                style: "color: #e5e7eb; font-size: 18px; margin-top: 24px;",
                "{result_text}"
            }
        }
    }
}
