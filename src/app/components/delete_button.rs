use dioxus::prelude::*;

/// Delete button that asks for confirmation before calling `on_confirm`
/// Uses CSS classes: c-delete-btn, c-delete-btn__confirm, etc.
#[component]
pub fn DeleteButton(
    /// Called when deletion is confirmed
    on_confirm: EventHandler<()>,
    /// Optional: Show loading state
    #[props(default = false)]
    is_loading: bool,
    #[props(default = "Delete this summary?")]
    confirm_text: &'static str,
) -> Element {
    let mut show_confirm = use_signal(|| false);

    if is_loading {
        return rsx! {
            button { class: "c-button c-button--danger", r#type: "button", disabled: true, "Deleting..." }
        };
    }

    rsx! {
        div { class: "c-delete-btn",
            if *show_confirm.read() {
                div { class: "c-delete-btn__confirm", role: "alertdialog",
                    span { class: "c-delete-btn__confirm-text", "{confirm_text}" }
                    button {
                        class: "c-button c-button--danger c-button--sm",
                        r#type: "button",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            show_confirm.set(false);
                            on_confirm.call(());
                        },
                        "Yes"
                    }
                    button {
                        class: "c-button c-button--secondary c-button--sm",
                        r#type: "button",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            show_confirm.set(false);
                        },
                        "No"
                    }
                }
            } else {
                button {
                    class: "c-button c-button--danger",
                    r#type: "button",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        show_confirm.set(true);
                    },
                    "Delete"
                }
            }
        }
    }
}
