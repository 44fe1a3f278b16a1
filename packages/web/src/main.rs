use dioxus::prelude::*;

use ui::RegistryProvider;
use views::{Home, NotFound};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Title { "LumiRights — Lesbian Rights Network" }
        document::Stylesheet { href: ui::MAIN_CSS }

        RegistryProvider {
            Router::<Route> {}
        }
    }
}
