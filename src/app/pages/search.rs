use dioxus::prelude::*;

use crate::app::components::{
    Button, ButtonVariant, EmptyState, ErrorBanner, LoadingText, Modal, NumberField,
    SessionTypeField, SummaryCard, TextAreaField, TextField,
};
use crate::domain::models::SessionSummary;
use crate::shared::form::Field;
use crate::shared::hooks::{NotesApiHandle, use_notes_api, use_search_flow};
use crate::shared::state::{EditSession, SearchFlow, search_flow};

/// Search by therapist, then view/edit or delete individual summaries
#[component]
pub fn Search() -> Element {
    let api = use_notes_api();
    let mut flow = use_search_flow();
    let state = flow();

    let searching = state.search.is_pending();
    let saving = state.save.is_pending();

    let enter_api = api.clone();
    let click_api = api.clone();

    let delete_api = api.clone();
    let on_delete = move |session_id: String| {
        let api = delete_api.clone();
        spawn(async move {
            search_flow::delete_summary(flow, &*api, session_id).await;
        });
    };

    let save_api = api.clone();
    let on_save = move |evt: FormEvent| {
        evt.prevent_default();
        let api = save_api.clone();
        spawn(async move {
            search_flow::save_edits(flow, &*api).await;
        });
    };

    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "Search Summaries" }

            div { class: "c-search",
                div {
                    class: "c-search__field",
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            start_search(flow, enter_api.clone());
                        }
                    },
                    TextField {
                        field: Field::TherapistName,
                        value: state.query.clone(),
                        error: state.query_error,
                        placeholder: "Enter therapist name",
                        oninput: move |value| flow.write().set_query(value),
                    }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: searching,
                    onclick: move |_| start_search(flow, click_api.clone()),
                    if searching { "Searching..." } else { "Search" }
                }
            }

            if let Some(message) = state.search.error() {
                ErrorBanner { message: message.to_string() }
            }
            if let Some(message) = state.delete.error() {
                ErrorBanner { message: format!("Delete failed. {}", message) }
            }

            SearchResults { state: state.clone(), on_view: move |record| flow.write().view(&record), on_delete }

            Modal {
                is_open: state.editor.is_open(),
                title: "Edit Session Summary".to_string(),
                on_close: move |_| flow.write().close_editor(),

                if let Some(session) = state.editor.content() {
                    form { class: "c-form c-form--modal", onsubmit: on_save,
                        EditFields { session: session.clone(), flow }

                        if let Some(message) = state.save.error() {
                            ErrorBanner { message: message.to_string() }
                        }

                        Button {
                            variant: ButtonVariant::Success,
                            button_type: "submit",
                            disabled: saving,
                            if saving { "Saving..." } else { "Save Changes" }
                        }
                    }
                }
            }
        }
    }
}

fn start_search(flow: Signal<SearchFlow>, api: NotesApiHandle) {
    spawn(async move {
        search_flow::search(flow, &*api).await;
    });
}

#[component]
fn SearchResults(
    state: SearchFlow,
    on_view: EventHandler<SessionSummary>,
    on_delete: EventHandler<String>,
) -> Element {
    let Some(therapist) = state.searched_for.clone() else {
        return rsx! {};
    };

    if state.search.is_pending() && state.results.is_empty() {
        return rsx! {
            LoadingText { message: format!("Searching summaries for {}...", therapist) }
        };
    }

    if state.results.is_empty() {
        if state.search.error().is_some() {
            return rsx! {};
        }
        return rsx! {
            EmptyState {
                title: "No summaries found".to_string(),
                description: format!("Nothing has been saved for {} yet.", therapist),
            }
        };
    }

    rsx! {
        div { class: "c-results",
            h2 { class: "c-results__title", "Search Results" }
            ul { class: "c-results__list",
                for (index, record) in state.results.iter().enumerate() {
                    SummaryCard {
                        key: "{record.id.clone().unwrap_or_else(|| index.to_string())}",
                        record: record.clone(),
                        is_deleting: record.id.as_deref().is_some_and(|id| state.is_deleting(id)),
                        on_view: move |record| on_view.call(record),
                        on_delete: move |session_id| on_delete.call(session_id),
                    }
                }
            }
        }
    }
}

/// Inputs of the edit modal, bound to the open `EditSession`
#[component]
fn EditFields(session: EditSession, flow: Signal<SearchFlow>) -> Element {
    let mut flow = flow;
    let form = &session.form;

    rsx! {
        TextField {
            field: Field::PatientName,
            value: form.value(Field::PatientName).to_string(),
            error: form.error(Field::PatientName),
            placeholder: "Enter patient name",
            oninput: move |value| flow.write().set_edit_field(Field::PatientName, value),
        }
        SessionTypeField {
            value: form.value(Field::SessionType).to_string(),
            error: form.error(Field::SessionType),
            oninput: move |value| flow.write().set_edit_field(Field::SessionType, value),
        }
        TextField {
            field: Field::DateTime,
            value: form.value(Field::DateTime).to_string(),
            error: form.error(Field::DateTime),
            input_type: "datetime-local",
            oninput: move |value| flow.write().set_edit_field(Field::DateTime, value),
        }
        NumberField {
            field: Field::Duration,
            value: form.value(Field::Duration).to_string(),
            error: form.error(Field::Duration),
            placeholder: "Enter duration in minutes",
            oninput: move |value| flow.write().set_edit_field(Field::Duration, value),
        }
        TextAreaField {
            field: Field::Summary,
            value: form.value(Field::Summary).to_string(),
            error: form.error(Field::Summary),
            placeholder: "Enter summary",
            rows: 12,
            oninput: move |value| flow.write().set_edit_field(Field::Summary, value),
        }
    }
}
