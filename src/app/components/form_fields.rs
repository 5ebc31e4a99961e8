//! Controlled inputs bound to a `Field`: each renders the label, the input
//! showing `value`, and the field's validation message, and reports every
//! change through `oninput`.

use dioxus::prelude::*;

use crate::domain::models::SessionType;
use crate::shared::form::Field;

fn input_class(base: &str, error: Option<&'static str>) -> String {
    match error {
        Some(_) => format!("{base} {base}--invalid"),
        None => base.to_string(),
    }
}

#[component]
fn FieldRow(field: Field, #[props(!optional)] error: Option<&'static str>, children: Element) -> Element {
    rsx! {
        div { class: "c-field",
            label { class: "c-field__label", r#for: field.name(), "{field.label()}" }
            {children}
            if let Some(message) = error {
                p { class: "c-field__error", role: "alert", "{message}" }
            }
        }
    }
}

#[component]
pub fn TextField(
    field: Field,
    value: String,
    #[props(!optional)]
    error: Option<&'static str>,
    #[props(default = "text")]
    input_type: &'static str,
    #[props(default = "")]
    placeholder: &'static str,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        FieldRow { field, error,
            input {
                id: field.name(),
                name: field.name(),
                class: input_class("c-field__input", error),
                r#type: input_type,
                placeholder,
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    }
}

#[component]
pub fn NumberField(
    field: Field,
    value: String,
    #[props(!optional)]
    error: Option<&'static str>,
    #[props(default = "")]
    placeholder: &'static str,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        FieldRow { field, error,
            input {
                id: field.name(),
                name: field.name(),
                class: input_class("c-field__input", error),
                r#type: "number",
                min: "1",
                step: "1",
                placeholder,
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    }
}

#[component]
pub fn TextAreaField(
    field: Field,
    value: String,
    #[props(!optional)]
    error: Option<&'static str>,
    #[props(default = "")]
    placeholder: &'static str,
    #[props(default = 4)]
    rows: u32,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        FieldRow { field, error,
            textarea {
                id: field.name(),
                name: field.name(),
                class: input_class("c-field__input", error),
                rows: "{rows}",
                placeholder,
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    }
}

/// Select over the three session types, with a disabled placeholder while empty
#[component]
pub fn SessionTypeField(
    value: String,
    #[props(!optional)]
    error: Option<&'static str>,
    oninput: EventHandler<String>,
) -> Element {
    let field = Field::SessionType;

    rsx! {
        FieldRow { field, error,
            select {
                id: field.name(),
                name: field.name(),
                class: input_class("c-field__input", error),
                value: "{value}",
                onchange: move |evt| oninput.call(evt.value()),
                option { value: "", disabled: true, selected: value.is_empty(), "Select type" }
                for kind in SessionType::ALL {
                    option {
                        key: "{kind.as_str()}",
                        value: kind.as_str(),
                        selected: value == kind.as_str(),
                        "{kind.display_name()}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_class() {
        assert_eq!(input_class("c-field__input", None), "c-field__input");
        assert_eq!(
            input_class("c-field__input", Some("Type is required")),
            "c-field__input c-field__input--invalid"
        );
    }
}
