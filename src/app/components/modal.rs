use dioxus::prelude::*;

/// Overlay dialog. Renders nothing while closed; the content is supplied by
/// the parent on every render. The ×, a click on the backdrop and Escape all
/// call `on_close`.
#[component]
pub fn Modal(
    is_open: bool,
    on_close: EventHandler<()>,
    #[props(default)]
    title: String,
    children: Element,
) -> Element {
    if !is_open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "c-modal__backdrop",
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if is_close_key(&evt.key()) {
                    evt.prevent_default();
                    on_close.call(());
                }
            },
            div {
                class: "c-modal",
                role: "dialog",
                "aria-modal": "true",
                tabindex: "-1",
                // Keyboard focus moves into the dialog so Escape works right away
                onmounted: move |evt: MountedEvent| async move {
                    if let Err(e) = evt.set_focus(true).await {
                        tracing::debug!(error = ?e, "Could not focus modal");
                    }
                },
                onclick: move |evt| evt.stop_propagation(),
                button {
                    class: "c-modal__close",
                    r#type: "button",
                    "aria-label": "Close",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
                if !title.is_empty() {
                    h2 { class: "c-modal__title", "{title}" }
                }
                div { class: "c-modal__body",
                    {children}
                }
            }
        }
    }
}

fn is_close_key(key: &Key) -> bool {
    *key == Key::Escape
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_escape_closes() {
        assert!(is_close_key(&Key::Escape));
        assert!(!is_close_key(&Key::Enter));
        assert!(!is_close_key(&Key::Character("x".to_string())));
    }
}
