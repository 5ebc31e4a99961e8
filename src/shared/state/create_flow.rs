//! State of the Home page: observations form, review modal with the
//! generated draft, and the two remote actions behind them.

use crate::domain::models::{
    GenerateSummaryRequest, GenerateSummaryResponse, SaveSummaryRequest, SavedSummary,
};
use crate::shared::errors::ApiResult;
use crate::shared::form::{CREATE_FIELDS, Field, FieldErrors, FormState};
use crate::shared::logging::{self, LogOperation};
use crate::shared::services::NotesApi;

use super::{ActionStatus, ModalState, Store};

pub const FIX_FIELDS: &str = "Fix the highlighted fields before saving.";

#[derive(Debug, Clone, PartialEq)]
pub struct CreateFlow {
    pub form: FormState,
    /// Review modal; holds the editable draft while open
    pub review: ModalState<String>,
    pub generate: ActionStatus,
    pub save: ActionStatus,
}

impl Default for CreateFlow {
    fn default() -> Self {
        Self {
            form: FormState::new(&CREATE_FIELDS),
            review: ModalState::Closed,
            generate: ActionStatus::Idle,
            save: ActionStatus::Idle,
        }
    }
}

impl CreateFlow {
    pub fn set_field(&mut self, field: Field, value: String) {
        self.form.set(field, value);
    }

    pub fn draft(&self) -> Option<&str> {
        self.review.content().map(String::as_str)
    }

    pub fn edit_draft(&mut self, text: String) {
        if let Some(draft) = self.review.content_mut() {
            *draft = text;
        }
    }

    /// Validate the form and produce the generate request, or `None` when the
    /// call must not be made (invalid form, or a generation already running).
    pub fn begin_generate(&mut self) -> Option<GenerateSummaryRequest> {
        if self.generate.is_pending() {
            logging::log_action_busy(LogOperation::GenerateSummary);
            return None;
        }
        if let Err(errors) = self.form.validate() {
            logging::log_validation_blocked(LogOperation::GenerateSummary, &field_names(&errors));
            return None;
        }

        self.generate = ActionStatus::Pending;
        Some(GenerateSummaryRequest {
            notes: self.form.value(Field::Observations).to_string(),
        })
    }

    pub fn finish_generate(&mut self, result: ApiResult<GenerateSummaryResponse>) {
        self.generate = ActionStatus::settle(&result);
        if let Ok(response) = result {
            self.save = ActionStatus::Idle;
            self.review.open(response.session_summary);
        }
    }

    /// Assemble the record from the draft and the form values
    pub fn begin_save(&mut self) -> Option<SaveSummaryRequest> {
        if self.save.is_pending() {
            logging::log_action_busy(LogOperation::SaveSummary);
            return None;
        }
        let draft = self.review.content()?.clone();

        if let Err(errors) = self.form.validate() {
            logging::log_validation_blocked(LogOperation::SaveSummary, &field_names(&errors));
            self.save = ActionStatus::Failed(FIX_FIELDS.to_string());
            return None;
        }
        let (Some(duration), Some(session_type)) = (self.form.duration(), self.form.session_type())
        else {
            self.save = ActionStatus::Failed(FIX_FIELDS.to_string());
            return None;
        };

        // Names are stored trimmed so searches match them exactly
        let request = SaveSummaryRequest {
            id: None,
            user: self.form.text(Field::TherapistName),
            summary: draft,
            duration,
            session_type,
            patient: self.form.text(Field::PatientName),
            date: self.form.value(Field::DateTime).to_string(),
        };
        self.save = ActionStatus::Pending;
        Some(request)
    }

    /// A successful save closes the review and starts a fresh form; a failed
    /// one leaves the modal open with its draft so the user can retry.
    pub fn finish_save(&mut self, result: ApiResult<SavedSummary>) {
        self.save = ActionStatus::settle(&result);
        if let Ok(saved) = result {
            logging::log_summary_saved(saved.id.as_deref(), false);
            self.review.close();
            self.form.reset();
            self.generate = ActionStatus::Idle;
        }
    }

    /// Dismiss the review without saving. The form keeps its values.
    pub fn close_review(&mut self) {
        self.review.close();
        self.save = ActionStatus::Idle;
    }
}

pub(crate) fn field_names(errors: &FieldErrors) -> Vec<&'static str> {
    errors.keys().map(Field::name).collect()
}

/// Run the generate action against `api`
pub async fn generate_summary<S: Store<CreateFlow>>(mut state: S, api: &dyn NotesApi) {
    let Some(request) = state.update(CreateFlow::begin_generate) else {
        return;
    };
    let result = api.generate_summary(&request).await;
    state.update(|flow| flow.finish_generate(result));
}

/// Run the save action against `api`
pub async fn save_summary<S: Store<CreateFlow>>(mut state: S, api: &dyn NotesApi) {
    let Some(request) = state.update(CreateFlow::begin_save) else {
        return;
    };
    let result = api.save_summary(&request).await;
    state.update(|flow| flow.finish_save(result));
}
