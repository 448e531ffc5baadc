//! Status-code checks shared by generation backends.
//!
//! 429 and 503 become [`GenerationError::ResourceExhausted`], as does any
//! error body carrying the `RESOURCE_EXHAUSTED` status. Other non-success
//! codes become [`GenerationError::Api`].

use reqwest::StatusCode;

use crate::error::GenerationError;

const EXHAUSTED_MARKER: &str = "RESOURCE_EXHAUSTED";

/// Check an HTTP response for error conditions.
///
/// Returns the response unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, GenerationError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let message = resp.text().await.unwrap_or_default();
    if status == StatusCode::TOO_MANY_REQUESTS
        || status == StatusCode::SERVICE_UNAVAILABLE
        || message.contains(EXHAUSTED_MARKER)
    {
        return Err(GenerationError::ResourceExhausted(summarize(status, &message)));
    }
    Err(GenerationError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Status plus the first line of the body, for log-friendly messages.
fn summarize(status: StatusCode, body: &str) -> String {
    match body.lines().map(str::trim).find(|l| !l.is_empty()) {
        Some(line) => format!("{status}: {line}"),
        None => status.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[rstest]
    #[case(429, "")]
    #[case(503, "overloaded")]
    #[tokio::test]
    async fn throttling_statuses_are_exhausted(#[case] status: u16, #[case] body: &'static str) {
        let err = check_response(mock_response(status, body)).await.unwrap_err();
        assert!(matches!(err, GenerationError::ResourceExhausted(_)));
        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn exhausted_marker_in_body_is_exhausted() {
        let body = r#"{"error":{"code":400,"status":"RESOURCE_EXHAUSTED"}}"#;
        let err = check_response(mock_response(400, body)).await.unwrap_err();
        assert!(matches!(err, GenerationError::ResourceExhausted(_)));
    }

    #[tokio::test]
    async fn other_failures_are_api_errors() {
        let err = check_response(mock_response(403, "API key not valid"))
            .await
            .unwrap_err();
        match err {
            GenerationError::Api { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "API key not valid");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn success_passes_through() {
        assert!(check_response(mock_response(200, "{}")).await.is_ok());
    }

    #[test]
    fn summarize_uses_first_non_blank_line() {
        assert_eq!(
            summarize(StatusCode::TOO_MANY_REQUESTS, "\n  quota hit \nmore"),
            "429 Too Many Requests: quota hit"
        );
        assert_eq!(
            summarize(StatusCode::SERVICE_UNAVAILABLE, ""),
            "503 Service Unavailable"
        );
    }
}
