use dioxus::prelude::*;

use crate::app::components::{
    Button, ButtonVariant, ErrorBanner, Modal, NumberField, SessionTypeField, TextAreaField,
    TextField,
};
use crate::shared::form::Field;
use crate::shared::hooks::{use_create_flow, use_notes_api};
use crate::shared::state::create_flow;

/// Observations form, generated-summary review and save
#[component]
pub fn Home() -> Element {
    let api = use_notes_api();
    let mut flow = use_create_flow();
    let state = flow();

    let generating = state.generate.is_pending();
    let saving = state.save.is_pending();
    let draft = state.draft().unwrap_or_default().to_string();

    let generate_api = api.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = generate_api.clone();
        spawn(async move {
            create_flow::generate_summary(flow, &*api).await;
        });
    };

    let on_save = move |_: MouseEvent| {
        let api = api.clone();
        spawn(async move {
            create_flow::save_summary(flow, &*api).await;
        });
    };

    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "Therapist Note Creation Interface" }

            if let Some(message) = state.generate.error() {
                ErrorBanner { message: message.to_string() }
            }

            form { class: "c-form", onsubmit: on_submit,
                TextAreaField {
                    field: Field::Observations,
                    value: state.form.value(Field::Observations).to_string(),
                    error: state.form.error(Field::Observations),
                    placeholder: "Enter observations in bullet points or short form",
                    oninput: move |value| flow.write().set_field(Field::Observations, value),
                }
                NumberField {
                    field: Field::Duration,
                    value: state.form.value(Field::Duration).to_string(),
                    error: state.form.error(Field::Duration),
                    placeholder: "Enter duration in minutes",
                    oninput: move |value| flow.write().set_field(Field::Duration, value),
                }
                SessionTypeField {
                    value: state.form.value(Field::SessionType).to_string(),
                    error: state.form.error(Field::SessionType),
                    oninput: move |value| flow.write().set_field(Field::SessionType, value),
                }
                TextField {
                    field: Field::TherapistName,
                    value: state.form.value(Field::TherapistName).to_string(),
                    error: state.form.error(Field::TherapistName),
                    placeholder: "Enter therapist name",
                    oninput: move |value| flow.write().set_field(Field::TherapistName, value),
                }
                TextField {
                    field: Field::PatientName,
                    value: state.form.value(Field::PatientName).to_string(),
                    error: state.form.error(Field::PatientName),
                    placeholder: "Enter patient name",
                    oninput: move |value| flow.write().set_field(Field::PatientName, value),
                }
                TextField {
                    field: Field::DateTime,
                    value: state.form.value(Field::DateTime).to_string(),
                    error: state.form.error(Field::DateTime),
                    input_type: "datetime-local",
                    oninput: move |value| flow.write().set_field(Field::DateTime, value),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    button_type: "submit",
                    disabled: generating,
                    if generating { "Generating..." } else { "Generate Summary" }
                }
            }

            Modal {
                is_open: state.review.is_open(),
                title: "Session Summary".to_string(),
                on_close: move |_| flow.write().close_review(),

                textarea {
                    class: "c-modal__editor",
                    "aria-label": "Generated session summary",
                    value: "{draft}",
                    oninput: move |evt| flow.write().edit_draft(evt.value()),
                }

                if let Some(message) = state.save.error() {
                    ErrorBanner { message: message.to_string() }
                }

                div { class: "c-modal__actions",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| flow.write().close_review(),
                        "Discard"
                    }
                    Button {
                        variant: ButtonVariant::Success,
                        disabled: saving,
                        onclick: on_save,
                        if saving { "Saving..." } else { "Save Summary" }
                    }
                }
            }
        }
    }
}
