use dioxus::prelude::*;

use crate::app::pages::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "Page not found" }
            p { class: "c-page__text", "Nothing lives at /{path}." }
            Link { to: Route::Home {}, class: "c-button c-button--primary", "Back to Home" }
        }
    }
}
