use dioxus::prelude::*;
use dioxus::document;

use crate::app::layouts::Navbar;
use crate::app::pages::{Home, NotFound, Search};
use crate::shared::hooks::use_provide_notes_api;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    // Write a summary from observations
    #[route("/")]
    Home {},

    // Find, edit and delete saved summaries
    #[route("/search")]
    Search {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_provide_notes_api();

    use_effect(|| {
        tracing::info!("Session notes app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    // Bundled and minified by build.rs
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Title { "Therapist Notes" }
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            Navbar {}
            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}
