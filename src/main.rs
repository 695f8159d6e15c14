use dioxus::prelude::*;

mod api;
mod components;
mod diagnostics;
mod player;

use components::AppView;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }

        document::Meta { name: "theme-color", content: "#8257e5" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }
        document::Meta { name: "apple-mobile-web-app-title", content: "rustcast" }

        document::Stylesheet { href: APP_CSS }

        Router::<AppView> {}
    }
}
