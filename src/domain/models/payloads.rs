//! Request and response bodies of the summary service

use serde::{Deserialize, Serialize};

use super::{SessionSummary, SessionType};

/// Body of `POST /generate_session_summary`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateSummaryRequest {
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateSummaryResponse {
    pub session_summary: String,
}

/// Body of `POST /session_summary`. With an `id` the service updates, without one it inserts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveSummaryRequest {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
    pub user: String,
    pub summary: String,
    pub duration: u32,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    pub patient: String,
    pub date: String,
}

/// Response of `POST /session_summary`; only the assigned id is of interest
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SavedSummary {
    #[serde(default)]
    pub id: Option<String>,
}

/// Response of `GET /user_session_summaries`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionSummariesResponse {
    #[serde(default)]
    pub sessions: Vec<SessionSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(id: Option<&str>) -> SaveSummaryRequest {
        SaveSummaryRequest {
            id: id.map(str::to_string),
            user: "Dr. Rivera".to_string(),
            summary: "S: ...".to_string(),
            duration: 45,
            session_type: SessionType::InitialConsultation,
            patient: "J. Doe".to_string(),
            date: "2024-09-12T14:30".to_string(),
        }
    }

    #[test]
    fn test_insert_payload_has_no_id() {
        let body = serde_json::to_value(request(None)).unwrap();
        assert_eq!(
            body,
            json!({
                "user": "Dr. Rivera",
                "summary": "S: ...",
                "duration": 45,
                "type": "initial_consultation",
                "patient": "J. Doe",
                "date": "2024-09-12T14:30"
            })
        );
    }

    #[test]
    fn test_update_payload_carries_id() {
        let body = serde_json::to_value(request(Some("42"))).unwrap();
        assert_eq!(body["id"], "42");
        assert_eq!(body["type"], "initial_consultation");
    }

    #[test]
    fn test_responses_ignore_extra_fields() {
        let saved: SavedSummary = serde_json::from_str(r#"{"id": "abc", "ok": true}"#).unwrap();
        assert_eq!(saved.id.as_deref(), Some("abc"));

        let list: SessionSummariesResponse = serde_json::from_str(r#"{"sessions": []}"#).unwrap();
        assert!(list.sessions.is_empty());

        let generated: GenerateSummaryResponse =
            serde_json::from_str(r#"{"session_summary": "X"}"#).unwrap();
        assert_eq!(generated.session_summary, "X");
    }
}
