//! State of the Search page: therapist search box, result list, edit modal
//! and delete. Every successful edit and every delete is followed by a
//! fresh search; the list is never patched locally.

use crate::domain::models::{SaveSummaryRequest, SavedSummary, SessionSummariesResponse, SessionSummary};
use crate::shared::errors::ApiResult;
use crate::shared::form::{EDIT_FIELDS, Field, FormState};
use crate::shared::logging::{self, LogOperation};
use crate::shared::services::NotesApi;

use super::create_flow::{FIX_FIELDS, field_names};
use super::{ActionStatus, ModalState, Store};

pub const THERAPIST_REQUIRED: &str = "Therapist name is required";

/// A record opened in the edit modal
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    pub record: SessionSummary,
    pub form: FormState,
}

impl EditSession {
    /// Load every editable field exactly as received
    pub fn new(record: &SessionSummary) -> Self {
        let mut form = FormState::new(&EDIT_FIELDS);
        form.set(Field::PatientName, record.patient.clone());
        form.set(Field::SessionType, record.session_type.clone().unwrap_or_default());
        form.set(Field::DateTime, record.date.clone().unwrap_or_default());
        form.set(
            Field::Duration,
            record.duration.map(|minutes| minutes.to_string()).unwrap_or_default(),
        );
        form.set(Field::Summary, record.summary.clone());

        Self { record: record.clone(), form }
    }

    /// Update request for the record; `None` until the form validates
    pub fn to_request(&self) -> Option<SaveSummaryRequest> {
        Some(SaveSummaryRequest {
            id: self.record.id.clone(),
            user: self.record.user.clone(),
            summary: self.form.value(Field::Summary).to_string(),
            duration: self.form.duration()?,
            session_type: self.form.session_type()?,
            patient: self.form.text(Field::PatientName),
            date: self.form.value(Field::DateTime).to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchFlow {
    /// Content of the therapist name box
    pub query: String,
    pub query_error: Option<&'static str>,
    /// Name of the last search issued; refreshes reuse it
    pub searched_for: Option<String>,
    pub results: Vec<SessionSummary>,
    pub search: ActionStatus,
    pub editor: ModalState<EditSession>,
    pub save: ActionStatus,
    /// Id of the record being deleted
    pub deleting: Option<String>,
    pub delete: ActionStatus,
}

impl SearchFlow {
    pub fn set_query(&mut self, query: String) {
        if !query.trim().is_empty() {
            self.query_error = None;
        }
        self.query = query;
    }

    pub fn begin_search(&mut self) -> Option<String> {
        if self.search.is_pending() {
            logging::log_action_busy(LogOperation::SearchSummaries);
            return None;
        }
        let therapist = self.query.trim().to_string();
        if therapist.is_empty() {
            self.query_error = Some(THERAPIST_REQUIRED);
            logging::log_validation_blocked(LogOperation::SearchSummaries, &[Field::TherapistName.name()]);
            return None;
        }

        self.query_error = None;
        self.searched_for = Some(therapist.clone());
        self.search = ActionStatus::Pending;
        Some(therapist)
    }

    /// Repeat the last search, whatever the box currently holds
    pub fn begin_refresh(&mut self) -> Option<String> {
        let therapist = self.searched_for.clone()?;
        self.search = ActionStatus::Pending;
        Some(therapist)
    }

    /// Replace the list wholesale on success; keep it on failure
    pub fn finish_search(&mut self, therapist: &str, result: ApiResult<SessionSummariesResponse>) {
        self.search = ActionStatus::settle(&result);
        if let Ok(response) = result {
            logging::log_search_result(therapist, response.sessions.len());
            self.results = response.sessions;
        }
    }

    /// Open the edit modal on `record`; no remote call
    pub fn view(&mut self, record: &SessionSummary) {
        self.save = ActionStatus::Idle;
        self.editor.open(EditSession::new(record));
    }

    pub fn set_edit_field(&mut self, field: Field, value: String) {
        if let Some(session) = self.editor.content_mut() {
            session.form.set(field, value);
        }
    }

    pub fn begin_save_edits(&mut self) -> Option<SaveSummaryRequest> {
        if self.save.is_pending() {
            logging::log_action_busy(LogOperation::SaveSummary);
            return None;
        }
        let session = self.editor.content_mut()?;
        if let Err(errors) = session.form.validate() {
            logging::log_validation_blocked(LogOperation::SaveSummary, &field_names(&errors));
            return None;
        }
        let Some(request) = session.to_request() else {
            self.save = ActionStatus::Failed(FIX_FIELDS.to_string());
            return None;
        };

        self.save = ActionStatus::Pending;
        Some(request)
    }

    /// Returns whether the list must be refreshed
    pub fn finish_save_edits(&mut self, result: ApiResult<SavedSummary>) -> bool {
        self.save = ActionStatus::settle(&result);
        match result {
            Ok(saved) => {
                logging::log_summary_saved(saved.id.as_deref(), true);
                self.editor.close();
                true
            }
            Err(_) => false,
        }
    }

    pub fn close_editor(&mut self) {
        self.editor.close();
        self.save = ActionStatus::Idle;
    }

    pub fn begin_delete(&mut self, session_id: &str) -> Option<String> {
        if self.delete.is_pending() {
            logging::log_action_busy(LogOperation::DeleteSummary);
            return None;
        }
        self.deleting = Some(session_id.to_string());
        self.delete = ActionStatus::Pending;
        Some(session_id.to_string())
    }

    pub fn finish_delete(&mut self, result: ApiResult<()>) {
        self.delete = ActionStatus::settle(&result);
        if result.is_ok() {
            tracing::info!(
                operation = LogOperation::DeleteSummary.as_str(),
                session_id = self.deleting.as_deref().unwrap_or("unknown"),
                "Summary deleted"
            );
        }
        self.deleting = None;
    }

    pub fn is_deleting(&self, session_id: &str) -> bool {
        self.deleting.as_deref() == Some(session_id)
    }
}

/// Run a search for the therapist typed in the box
pub async fn search<S: Store<SearchFlow>>(mut state: S, api: &dyn NotesApi) {
    let Some(therapist) = state.update(SearchFlow::begin_search) else {
        return;
    };
    let result = api.search_summaries(&therapist).await;
    state.update(|flow| flow.finish_search(&therapist, result));
}

async fn refresh<S: Store<SearchFlow>>(state: &mut S, api: &dyn NotesApi) {
    let Some(therapist) = state.update(SearchFlow::begin_refresh) else {
        return;
    };
    let result = api.search_summaries(&therapist).await;
    state.update(|flow| flow.finish_search(&therapist, result));
}

/// Save the open edit form, then refresh the list if the save went through
pub async fn save_edits<S: Store<SearchFlow>>(mut state: S, api: &dyn NotesApi) {
    let Some(request) = state.update(SearchFlow::begin_save_edits) else {
        return;
    };
    let result = api.save_summary(&request).await;
    if state.update(|flow| flow.finish_save_edits(result)) {
        refresh(&mut state, api).await;
    }
}

/// Delete a record, then refresh the list whatever the outcome
pub async fn delete_summary<S: Store<SearchFlow>>(mut state: S, api: &dyn NotesApi, session_id: String) {
    let Some(session_id) = state.update(|flow| flow.begin_delete(&session_id)) else {
        return;
    };
    let result = api.delete_summary(&session_id).await;
    state.update(|flow| flow.finish_delete(result));
    refresh(&mut state, api).await;
}
