// src/api/parser.rs
//! Turns raw API responses into typed values or errors.

use super::client::ApiResponse;
use crate::error::{AppError, NotionErrorCode};
use reqwest::Method;

/// Decodes a successful response, or maps a non-2xx one to `AppError::NotionApi`.
pub fn parse_api_response<T>(
    method: &Method,
    path: &str,
    result: ApiResponse<String>,
) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success(path, &result)
    } else {
        Err(api_error(method, path, result))
    }
}

fn parse_success<T>(path: &str, result: &ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(&result.data).map_err(|source| {
        log::error!("Failed to parse response from {}: {}", result.url, source);
        AppError::MalformedResponse {
            path: path.to_string(),
            source,
            body: result.data.trim().to_string(),
        }
    })
}

fn api_error(method: &Method, path: &str, result: ApiResponse<String>) -> AppError {
    let body = result.data.trim().to_string();
    let code = NotionErrorCode::from_error_body(&body);
    log::debug!(
        "{} {} failed with {} (code: {})",
        method,
        path,
        result.status,
        code.as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "none".to_string())
    );

    AppError::NotionApi {
        method: method.clone(),
        path: path.to_string(),
        status: result.status,
        code,
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::QueryResponse;
    use reqwest::StatusCode;

    fn response(status: StatusCode, body: &str) -> ApiResponse<String> {
        ApiResponse {
            data: body.to_string(),
            status,
            url: "https://api.notion.com/v1/data_sources/ds/query".to_string(),
        }
    }

    #[test]
    fn success_is_decoded() {
        let parsed: QueryResponse = parse_api_response(
            &Method::POST,
            "/data_sources/ds/query",
            response(
                StatusCode::OK,
                r#"{"object":"list","results":[],"has_more":true,"next_cursor":"c2"}"#,
            ),
        )
        .unwrap();
        assert!(parsed.has_more);
        assert_eq!(parsed.next_cursor.as_deref(), Some("c2"));
    }

    #[test]
    fn non_success_keeps_status_and_raw_body() {
        let body = "  {\"object\":\"error\",\"status\":401,\"code\":\"unauthorized\",\"message\":\"API token is invalid.\"}\n";
        let err = parse_api_response::<QueryResponse>(
            &Method::POST,
            "/data_sources/ds/query",
            response(StatusCode::UNAUTHORIZED, body),
        )
        .unwrap_err();

        match err {
            AppError::NotionApi {
                method,
                path,
                status,
                code,
                body: raw,
            } => {
                assert_eq!(method, Method::POST);
                assert_eq!(path, "/data_sources/ds/query");
                assert_eq!(status, StatusCode::UNAUTHORIZED);
                assert_eq!(code, Some(NotionErrorCode::Unauthorized));
                assert_eq!(raw, body.trim());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn undecodable_success_is_malformed() {
        let err = parse_api_response::<QueryResponse>(
            &Method::POST,
            "/data_sources/ds/query",
            response(StatusCode::OK, "not json"),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse { ref body, .. } if body == "not json"));
    }
}
