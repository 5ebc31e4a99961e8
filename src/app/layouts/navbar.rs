use dioxus::prelude::*;

use crate::app::pages::routes::Route;

/// Top bar shared by both pages
#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "c-navbar",
            div { class: "c-navbar__links",
                Link {
                    to: Route::Home {},
                    class: "c-navbar__link",
                    active_class: "c-navbar__link--active",
                    "Home"
                }
                Link {
                    to: Route::Search {},
                    class: "c-navbar__link",
                    active_class: "c-navbar__link--active",
                    "Search"
                }
            }
        }
    }
}
