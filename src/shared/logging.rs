//! Structured logging for the session notes client
//!
//! Every remote call and every blocked submission goes through these helpers
//! so log lines carry the same `operation` field on every target.

use crate::shared::errors::ApiError;

/// Operations that produce log output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOperation {
    GenerateSummary,
    SaveSummary,
    SearchSummaries,
    DeleteSummary,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::GenerateSummary => "generate_summary",
            LogOperation::SaveSummary => "save_summary",
            LogOperation::SearchSummaries => "search_summaries",
            LogOperation::DeleteSummary => "delete_summary",
        }
    }
}

/// Log a request leaving the client
pub fn log_request_start(operation: LogOperation, method: &str, url: &str) {
    tracing::debug!(
        operation = operation.as_str(),
        method = method,
        url = url,
        "Sending request"
    );
}

/// Log a request that completed with a 2xx status
pub fn log_request_success(operation: LogOperation, status: u16) {
    tracing::debug!(
        operation = operation.as_str(),
        status = status,
        "Request completed"
    );
}

/// Log a failed remote call
pub fn log_request_error(operation: LogOperation, error: &ApiError) {
    tracing::error!(
        operation = operation.as_str(),
        error = %error,
        "Request failed"
    );
}

/// Log a submission stopped by client-side validation
pub fn log_validation_blocked(operation: LogOperation, invalid_fields: &[&str]) {
    tracing::info!(
        operation = operation.as_str(),
        invalid_fields = ?invalid_fields,
        "Submission blocked by validation"
    );
}

/// Log a submission ignored because the same action is still pending
pub fn log_action_busy(operation: LogOperation) {
    tracing::debug!(
        operation = operation.as_str(),
        "Action already pending, ignoring trigger"
    );
}

/// Log a saved summary
pub fn log_summary_saved(id: Option<&str>, updated: bool) {
    tracing::info!(
        operation = LogOperation::SaveSummary.as_str(),
        session_id = id.unwrap_or("unknown"),
        updated = updated,
        "Summary saved"
    );
}

/// Log a completed search
pub fn log_search_result(therapist: &str, count: usize) {
    tracing::info!(
        operation = LogOperation::SearchSummaries.as_str(),
        therapist = therapist,
        result_count = count,
        "Search completed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::GenerateSummary.as_str(), "generate_summary");
        assert_eq!(LogOperation::SaveSummary.as_str(), "save_summary");
        assert_eq!(LogOperation::SearchSummaries.as_str(), "search_summaries");
        assert_eq!(LogOperation::DeleteSummary.as_str(), "delete_summary");
    }
}
