use serde::{Deserialize, Serialize};
use chrono::NaiveDateTime;

use super::SessionType;

/// A saved session summary as returned by the summary service.
///
/// `id`, `duration`, `type` and `date` are nullable on the service side, so
/// they stay optional here and are sent back untouched on edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    #[serde(default)]
    pub id: Option<String>,
    /// Therapist name
    pub user: String,
    pub patient: String,
    #[serde(rename = "type", default)]
    pub session_type: Option<String>,
    /// Value of a `datetime-local` input, e.g. `2024-09-12T14:30`
    #[serde(default)]
    pub date: Option<String>,
    /// Minutes
    #[serde(default)]
    pub duration: Option<u32>,
    pub summary: String,
}

const DATE_INPUT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

impl SessionSummary {
    /// Parsed session type, if the stored value is one we know
    pub fn kind(&self) -> Option<SessionType> {
        self.session_type.as_deref().and_then(|raw| raw.parse().ok())
    }

    pub fn type_label(&self) -> String {
        match (self.kind(), self.session_type.as_deref()) {
            (Some(kind), _) => kind.display_name().to_string(),
            (None, Some(raw)) if !raw.is_empty() => raw.to_string(),
            _ => "—".to_string(),
        }
    }

    pub fn date_label(&self) -> String {
        self.date
            .as_deref()
            .map(format_session_date)
            .unwrap_or_else(|| "—".to_string())
    }

    pub fn duration_label(&self) -> String {
        match self.duration {
            Some(minutes) => format!("{} minutes", minutes),
            None => "—".to_string(),
        }
    }
}

/// Render a `datetime-local` value as `YYYY-MM-DD HH:MM`, or return it as is
pub fn format_session_date(raw: &str) -> String {
    DATE_INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|date| date.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_json() -> &'static str {
        r#"{
            "id": "5f1c",
            "user": "Dr. Rivera",
            "summary": "Subjective: client reports better sleep.",
            "duration": 50,
            "type": "therapy_session",
            "patient": "J. Doe",
            "date": "2024-09-12T14:30"
        }"#
    }

    #[test]
    fn test_deserialize_full_record() {
        let record: SessionSummary = serde_json::from_str(record_json()).unwrap();
        assert_eq!(record.id.as_deref(), Some("5f1c"));
        assert_eq!(record.kind(), Some(SessionType::TherapySession));
        assert_eq!(record.duration, Some(50));
        assert_eq!(record.type_label(), "Therapy Session");
        assert_eq!(record.date_label(), "2024-09-12 14:30");
        assert_eq!(record.duration_label(), "50 minutes");
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let record: SessionSummary = serde_json::from_str(
            r#"{"user": "Dr. Rivera", "summary": "", "patient": "J. Doe", "type": null}"#,
        )
        .unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.session_type, None);
        assert_eq!(record.type_label(), "—");
        assert_eq!(record.date_label(), "—");
        assert_eq!(record.duration_label(), "—");
    }

    #[test]
    fn test_unknown_type_is_shown_raw() {
        let mut record: SessionSummary = serde_json::from_str(record_json()).unwrap();
        record.session_type = Some("group_session".to_string());
        assert_eq!(record.kind(), None);
        assert_eq!(record.type_label(), "group_session");
    }

    #[test]
    fn test_format_session_date() {
        assert_eq!(format_session_date("2024-01-05T09:00:30"), "2024-01-05 09:00");
        assert_eq!(format_session_date("next tuesday"), "next tuesday");
    }
}
