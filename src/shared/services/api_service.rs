//! HTTP access to the summary service.
//!
//! `NotesApi` is the port the page flows talk to. `ApiService` implements it
//! over `gloo-net` in the browser and `reqwest` on native targets; both share
//! URL building, status handling and JSON decoding.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::domain::models::{
    GenerateSummaryRequest, GenerateSummaryResponse, SaveSummaryRequest, SavedSummary,
    SessionSummariesResponse,
};
use crate::shared::errors::{ApiError, ApiResult};
use crate::shared::logging::{self, LogOperation};

pub const GENERATE_SUMMARY_PATH: &str = "/generate_session_summary";
pub const SESSION_SUMMARY_PATH: &str = "/session_summary";
pub const USER_SUMMARIES_PATH: &str = "/user_session_summaries";

/// Calls offered by the summary service
#[async_trait(?Send)]
pub trait NotesApi {
    /// Turn free-form observations into a summary text
    async fn generate_summary(
        &self,
        request: &GenerateSummaryRequest,
    ) -> ApiResult<GenerateSummaryResponse>;

    /// Insert a summary, or update it when the request carries an id
    async fn save_summary(&self, request: &SaveSummaryRequest) -> ApiResult<SavedSummary>;

    /// All summaries written by the given therapist
    async fn search_summaries(&self, therapist: &str) -> ApiResult<SessionSummariesResponse>;

    async fn delete_summary(&self, session_id: &str) -> ApiResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Raw outcome of an HTTP exchange: status code and body text
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

// API Service for centralized HTTP requests
pub struct ApiService {
    config: ApiConfig,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl ApiService {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        }
    }

    pub fn search_url(&self, therapist: &str) -> String {
        format!(
            "{}?user={}",
            self.config.endpoint(USER_SUMMARIES_PATH),
            urlencoding::encode(therapist)
        )
    }

    pub fn delete_url(&self, session_id: &str) -> String {
        format!(
            "{}?session_id={}",
            self.config.endpoint(SESSION_SUMMARY_PATH),
            urlencoding::encode(session_id)
        )
    }

    // Generic GET request
    async fn get<T: DeserializeOwned>(&self, operation: LogOperation, url: &str) -> ApiResult<T> {
        let response = self.exchange(operation, HttpMethod::Get, url, None).await?;
        decode_json(&response)
    }

    // Generic POST request
    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        operation: LogOperation,
        url: &str,
        body: &B,
    ) -> ApiResult<T> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = self.exchange(operation, HttpMethod::Post, url, Some(body)).await?;
        decode_json(&response)
    }

    // Generic DELETE request, the body is not consumed
    async fn delete(&self, operation: LogOperation, url: &str) -> ApiResult<()> {
        self.exchange(operation, HttpMethod::Delete, url, None).await?;
        Ok(())
    }

    async fn exchange(
        &self,
        operation: LogOperation,
        method: HttpMethod,
        url: &str,
        body: Option<String>,
    ) -> ApiResult<RawResponse> {
        logging::log_request_start(operation, method.as_str(), url);

        let result = self
            .send(method, url, body, self.config.request_timeout)
            .await
            .and_then(check_status);

        match &result {
            Ok(response) => logging::log_request_success(operation, response.status),
            Err(e) => logging::log_request_error(operation, e),
        }
        result
    }

    #[cfg(target_arch = "wasm32")]
    async fn send(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<String>,
        timeout: Duration,
    ) -> ApiResult<RawResponse> {
        use futures::future::{Either, select};
        use gloo_net::http::Request;

        let request = async move {
            let builder = match method {
                HttpMethod::Get => Request::get(url),
                HttpMethod::Post => Request::post(url),
                HttpMethod::Delete => Request::delete(url),
            };
            let request = match body {
                Some(body) => builder
                    .header("Content-Type", "application/json")
                    .body(body)
                    .map_err(|e| ApiError::Encode(e.to_string()))?,
                None => builder.build().map_err(|e| ApiError::Encode(e.to_string()))?,
            };

            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(RawResponse { status, body })
        };

        let deadline = gloo_timers::future::sleep(timeout);
        match select(Box::pin(request), Box::pin(deadline)).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(ApiError::Timeout(timeout)),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn send(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<String>,
        timeout: Duration,
    ) -> ApiResult<RawResponse> {
        let method = match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, url).timeout(timeout);
        if let Some(body) = body {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout(timeout)
            } else {
                ApiError::Network(e.to_string())
            }
        })?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}

#[async_trait(?Send)]
impl NotesApi for ApiService {
    async fn generate_summary(
        &self,
        request: &GenerateSummaryRequest,
    ) -> ApiResult<GenerateSummaryResponse> {
        let url = self.config.endpoint(GENERATE_SUMMARY_PATH);
        self.post(LogOperation::GenerateSummary, &url, request).await
    }

    async fn save_summary(&self, request: &SaveSummaryRequest) -> ApiResult<SavedSummary> {
        let url = self.config.endpoint(SESSION_SUMMARY_PATH);
        self.post(LogOperation::SaveSummary, &url, request).await
    }

    async fn search_summaries(&self, therapist: &str) -> ApiResult<SessionSummariesResponse> {
        let url = self.search_url(therapist);
        self.get(LogOperation::SearchSummaries, &url).await
    }

    async fn delete_summary(&self, session_id: &str) -> ApiResult<()> {
        let url = self.delete_url(session_id);
        self.delete(LogOperation::DeleteSummary, &url).await
    }
}

/// Turn non-2xx responses into `ApiError::Status`
pub fn check_status(response: RawResponse) -> ApiResult<RawResponse> {
    if (200..300).contains(&response.status) {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: response.status,
            message: error_detail(&response.body),
        })
    }
}

fn decode_json<T: DeserializeOwned>(response: &RawResponse) -> ApiResult<T> {
    serde_json::from_str(&response.body).map_err(ApiError::from)
}

/// The service reports errors as `{"detail": "..."}`; fall back to the raw body
fn error_detail(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct Detail {
        detail: String,
    }

    match serde_json::from_str::<Detail>(body) {
        Ok(parsed) => parsed.detail,
        Err(_) => body.chars().take(200).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ApiService {
        ApiService::new(ApiConfig::new("http://localhost:8000"))
    }

    #[test]
    fn test_search_url_encodes_name() {
        assert_eq!(
            service().search_url("Dr. Ana María"),
            "http://localhost:8000/user_session_summaries?user=Dr.%20Ana%20Mar%C3%ADa"
        );
    }

    #[test]
    fn test_delete_url() {
        assert_eq!(
            service().delete_url("42"),
            "http://localhost:8000/session_summary?session_id=42"
        );
        assert_eq!(
            service().delete_url("a&b"),
            "http://localhost:8000/session_summary?session_id=a%26b"
        );
    }

    #[test]
    fn test_check_status() {
        let ok = RawResponse { status: 200, body: "{}".to_string() };
        assert_eq!(check_status(ok.clone()), Ok(ok));

        let missing = RawResponse {
            status: 400,
            body: r#"{"detail": "Missing user in request"}"#.to_string(),
        };
        assert_eq!(
            check_status(missing),
            Err(ApiError::Status { status: 400, message: "Missing user in request".to_string() })
        );

        let crash = RawResponse { status: 500, body: "Internal Server Error".to_string() };
        assert_eq!(
            check_status(crash),
            Err(ApiError::Status { status: 500, message: "Internal Server Error".to_string() })
        );
    }

    #[test]
    fn test_decode_json() {
        let response = RawResponse {
            status: 200,
            body: r#"{"session_summary": "Plan: weekly sessions."}"#.to_string(),
        };
        let parsed: GenerateSummaryResponse = decode_json(&response).unwrap();
        assert_eq!(parsed.session_summary, "Plan: weekly sessions.");

        let garbage = RawResponse { status: 200, body: "<html>".to_string() };
        assert!(matches!(
            decode_json::<GenerateSummaryResponse>(&garbage),
            Err(ApiError::Decode(_))
        ));
    }
}
