mod demos;

use dioxus::prelude::*;
use demos::{Gallery, Landing, Sandbox, Wheel};
use propeller::RenderCapabilities;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/gallery")]
    Gallery {},
    #[route("/wheel")]
    Wheel {},
    #[route("/sandbox")]
    Sandbox {},
}

#[allow(non_snake_case)]
fn App() -> Element {
    // Probe transform support once for every propeller on the page
    let caps = use_hook(RenderCapabilities::detect);
    use_context_provider(|| caps);

    rsx! {
        div {
            id: "main",
            Router::<Route> {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    dioxus::launch(App);
}
