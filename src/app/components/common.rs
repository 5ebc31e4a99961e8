use dioxus::prelude::*;

// Inline banner for failed remote calls (BEM: c-error)
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "c-error", role: "alert",
            span { class: "c-error__icon", "⚠️" }
            p { class: "c-error__text", "{message}" }
        }
    }
}

// Reusable Loading Component (BEM: c-loading)
#[component]
pub fn LoadingText(message: String) -> Element {
    rsx! {
        div { class: "c-loading",
            div { class: "c-loading__spinner" }
            p { class: "c-loading__text", "{message}" }
        }
    }
}

// Shown when a search comes back empty
#[component]
pub fn EmptyState(title: String, description: String) -> Element {
    rsx! {
        div { class: "c-empty-state",
            h3 { class: "c-empty-state__title", "{title}" }
            p { class: "c-empty-state__text", "{description}" }
        }
    }
}
