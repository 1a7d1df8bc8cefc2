//! Propeller component - binds a rotation controller to a DOM element

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::config::{PropellerConfig, TouchElement};
use crate::engine::{Callbacks, PointerSample, RotationController, Schedule};
use super::{DomTarget, RenderCapabilities};

/// Frame interval, the plugin's `setTimeout(cb, 1000 / 60)` cadence
const FRAME_MS: u32 = 16;

type SharedController = Rc<RefCell<RotationController<DomTarget>>>;

fn start_handler<T: 'static>(controller: &SharedController) -> impl FnMut(Event<T>) + 'static {
    let controller = controller.clone();
    move |e: Event<T>| {
        e.prevent_default();
        controller.borrow_mut().start_gesture();
    }
}

fn end_handler<T: 'static>(controller: &SharedController) -> impl FnMut(Event<T>) + 'static {
    let controller = controller.clone();
    move |_: Event<T>| controller.borrow_mut().end_gesture()
}

/// Records the sample and keeps the move from scrolling, selecting or
/// (unless configured otherwise) reaching ancestors.
fn accept_move<T>(controller: &SharedController, e: &Event<T>, sample: Option<PointerSample>) {
    let Some(sample) = sample else {
        return;
    };
    let mut ctl = controller.borrow_mut();
    if ctl.move_pointer(sample) {
        e.prevent_default();
        if !ctl.propagates_moves() {
            e.stop_propagation();
        }
    }
}

/// Element that can be spun with the mouse or a finger.
///
/// `container_style` only applies with [`TouchElement::Container`].
/// Options are read once on mount; give the component a new `key` to apply
/// a different config.
#[component]
pub fn Propeller(
    id: String,
    #[props(default)] config: PropellerConfig,
    #[props(default)] style: String,
    #[props(default)] container_style: String,
    on_rotate: Option<EventHandler<f64>>,
    on_stop: Option<EventHandler<()>>,
    on_drag_start: Option<EventHandler<()>>,
    on_drag_stop: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    let caps = try_use_context::<RenderCapabilities>().unwrap_or_default();
    let transform = use_signal(String::new);
    let transition = use_signal(String::new);

    let controller = use_hook(|| {
        let callbacks = Callbacks::new()
            .on_rotate(move |angle| {
                if let Some(handler) = on_rotate {
                    handler.call(angle);
                }
                Ok(())
            })
            .on_stop(move |_| {
                if let Some(handler) = on_stop {
                    handler.call(());
                }
                Ok(())
            })
            .on_drag_start(move |_| {
                if let Some(handler) = on_drag_start {
                    handler.call(());
                }
                Ok(())
            })
            .on_drag_stop(move |_| {
                if let Some(handler) = on_drag_stop {
                    handler.call(());
                }
                Ok(())
            });

        let target = DomTarget::new(id.clone(), caps, transform, transition);
        match RotationController::new(target, config.clone()) {
            Ok(controller) => {
                let mut controller = controller.with_callbacks(callbacks);
                controller.bind();
                Ok(Rc::new(RefCell::new(controller)))
            }
            Err(err) => {
                tracing::error!(id = %id, error = %err, "rejected propeller options");
                Err(err.to_string())
            }
        }
    });

    // Frame loop; ends once the controller is unbound
    use_hook(|| {
        if let Ok(controller) = controller.clone() {
            spawn(async move {
                loop {
                    TimeoutFuture::new(FRAME_MS).await;
                    if controller.borrow_mut().tick(js_sys::Date::now()) == Schedule::Stop {
                        break;
                    }
                }
            });
        }
    });

    use_drop({
        let controller = controller.clone();
        move || {
            if let Ok(controller) = controller {
                controller.borrow_mut().unbind();
            }
        }
    });

    let controller = match controller {
        Ok(controller) => controller,
        Err(message) => {
            return rsx! {
                div {
                    id: "{id}",
                    style: "{style}",
                    {children}
                    div {
                        class: "propeller-error",
                        style: "color: #f87171; font-family: monospace; font-size: 12px; margin-top: 6px;",
                        "{message}"
                    }
                }
            };
        }
    };

    let mouse_move = {
        let controller = controller.clone();
        move |e: Event<MouseData>| {
            let sample = PointerSample::from_mouse(&e.data());
            accept_move(&controller, &e, Some(sample));
        }
    };
    let touch_move = {
        let controller = controller.clone();
        move |e: Event<TouchData>| {
            let sample = PointerSample::from_touch(&e.data());
            accept_move(&controller, &e, sample);
        }
    };

    let target_style = format!("touch-action: none; user-select: none; {style} {transform} {transition}");

    match config.touch_element {
        TouchElement::Target => rsx! {
            div {
                id: "{id}",
                style: "{target_style}",
                draggable: "false",
                ondragstart: move |e: Event<DragData>| e.prevent_default(),
                onmousedown: start_handler::<MouseData>(&controller),
                onmousemove: mouse_move,
                onmouseup: end_handler::<MouseData>(&controller),
                onmouseleave: end_handler::<MouseData>(&controller),
                ontouchstart: start_handler::<TouchData>(&controller),
                ontouchmove: touch_move,
                ontouchend: end_handler::<TouchData>(&controller),
                ontouchcancel: end_handler::<TouchData>(&controller),
                {children}
            }
        },
        TouchElement::Container => rsx! {
            div {
                class: "propeller-container",
                style: "display: inline-block; touch-action: none; user-select: none; {container_style}",
                onmousedown: start_handler::<MouseData>(&controller),
                onmousemove: mouse_move,
                onmouseup: end_handler::<MouseData>(&controller),
                onmouseleave: end_handler::<MouseData>(&controller),
                ontouchstart: start_handler::<TouchData>(&controller),
                ontouchmove: touch_move,
                ontouchend: end_handler::<TouchData>(&controller),
                ontouchcancel: end_handler::<TouchData>(&controller),
                div {
                    id: "{id}",
                    style: "{target_style}",
                    draggable: "false",
                    ondragstart: move |e: Event<DragData>| e.prevent_default(),
                    {children}
                }
            }
        },
    }
}
