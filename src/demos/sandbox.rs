//! Sandbox - mount a propeller from a JSON option object

use dioxus::prelude::*;
use propeller::{Propeller, PropellerConfig};

use super::{Header, PAGE_STYLE, disc_style};

const STARTER: &str = r#"{
  "angle": 45,
  "inertia": 0.95,
  "minimalSpeed": 0.01,
  "step": 0,
  "stepTransitionTime": 0,
  "stepTransitionEasing": "linear",
  "rotateParentInstantly": false,
  "touchElement": "target"
}"#;

#[component]
pub fn Sandbox() -> Element {
    let mut source = use_signal(|| STARTER.to_string());
    let mut config = use_signal(|| PropellerConfig::from_json(STARTER).unwrap_or_default());
    let mut revision = use_signal(|| 0u32);
    let mut error = use_signal(|| Option::<String>::None);
    let mut log = use_signal(Vec::<String>::new);
    let effective = config.read().to_json().unwrap_or_else(|err| err.to_string());

    let apply = move |_| match PropellerConfig::from_json(&source.read()) {
        Ok(parsed) => {
            config.set(parsed);
            error.set(None);
            log.write().clear();
            revision.set(revision() + 1);
        }
        Err(err) => error.set(Some(err.to_string())),
    };

    let mut push_log = move |line: String| {
        let mut entries = log.write();
        entries.push(line);
        let overflow = entries.len().saturating_sub(8);
        entries.drain(..overflow);
    };

    let disc = disc_style(200, "#0ea5e9");

    rsx! {
        div {
            style: "{PAGE_STYLE}",
            Header {
                title: "Sandbox",
                subtitle: "Options use the plugin's camelCase keys",
            }

            div {
                style: "display: flex; gap: 32px; align-items: flex-start;",

                div {
                    style: "display: flex; flex-direction: column; gap: 12px;",
                    textarea {
                        style: "width: 360px; height: 260px; background: #111827; color: #e5e7eb; border: 1px solid #2a2a4a; border-radius: 8px; padding: 12px; font-family: monospace; font-size: 13px;",
                        value: "{source}",
                        oninput: move |e: Event<FormData>| source.set(e.value()),
                    }
                    button {
                        style: "padding: 8px 20px; background: #3b82f6; color: white; border: none; border-radius: 6px; cursor: pointer; font-size: 14px;",
                        onclick: apply,
                        "Apply"
                    }
                    div {
                        style: "color: #6b7280; font-size: 12px;",
                        "Effective options"
                    }
                    pre {
                        style: "width: 360px; margin: 0; background: #111827; color: #9ca3af; border-radius: 8px; padding: 12px; font-size: 12px;",
                        "{effective}"
                    }
                    if let Some(message) = error() {
                        div {
                            style: "color: #f87171; font-family: monospace; font-size: 12px; max-width: 360px;",
                            "{message}"
                        }
                    }
                }

                div {
                    style: "display: flex; flex-direction: column; align-items: center; gap: 16px;",
                    Propeller {
                        key: "{revision}",
                        id: "sandbox",
                        config: config(),
                        on_rotate: move |a: f64| push_log(format!("rotate {a:.2}")),
                        on_drag_start: move |_| push_log("drag start".to_string()),
                        on_drag_stop: move |_| push_log("drag stop".to_string()),
                        on_stop: move |_| push_log("stopped".to_string()),
                        div { style: "{disc}" }
                    }
                    div {
                        style: "width: 260px; min-height: 160px; background: #111827; border-radius: 8px; padding: 12px; font-family: monospace; font-size: 12px; color: #9ca3af;",
                        for line in log() {
                            div { "{line}" }
                        }
                    }
                }
            }
        }
    }
}
