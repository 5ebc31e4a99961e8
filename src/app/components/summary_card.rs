use dioxus::prelude::*;

use crate::app::components::{Button, ButtonVariant, DeleteButton};
use crate::domain::models::SessionSummary;
use crate::shared::utils::truncate_summary;

/// One search result with its View and Delete actions
#[component]
pub fn SummaryCard(
    record: SessionSummary,
    #[props(default = false)]
    is_deleting: bool,
    on_view: EventHandler<SessionSummary>,
    on_delete: EventHandler<String>,
) -> Element {
    let preview = truncate_summary(&record.summary);
    let record_for_view = record.clone();
    let id_for_delete = record.id.clone();

    rsx! {
        li { class: "c-summary-card",
            dl { class: "c-summary-card__details",
                SummaryRow { label: "Patient", value: record.patient.clone() }
                SummaryRow { label: "Type", value: record.type_label() }
                SummaryRow { label: "Date", value: record.date_label() }
                SummaryRow { label: "Duration", value: record.duration_label() }
                SummaryRow { label: "Summary", value: preview }
            }
            div { class: "c-summary-card__actions",
                Button {
                    variant: ButtonVariant::Success,
                    onclick: move |_| on_view.call(record_for_view.clone()),
                    "View"
                }
                if let Some(session_id) = id_for_delete {
                    DeleteButton {
                        is_loading: is_deleting,
                        on_confirm: move |_| on_delete.call(session_id.clone()),
                    }
                }
            }
        }
    }
}

#[component]
fn SummaryRow(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "c-summary-card__row",
            dt { class: "c-summary-card__label", "{label}:" }
            dd { class: "c-summary-card__value", "{value}" }
        }
    }
}
