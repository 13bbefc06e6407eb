// src/error.rs
//! Application error types.
//!
//! Every failure is fatal for the run: errors are propagated with `?` up to
//! `main`, which prints a single diagnostic line and exits non-zero.

use std::fmt;
use thiserror::Error;

/// Notion API error codes as a typed vocabulary.
///
/// Decoded from the `code` field of an error body so callers can match on
/// what Notion reported instead of on strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotionErrorCode {
    RateLimited,
    ObjectNotFound,
    Unauthorized,
    RestrictedResource,
    InvalidJson,
    InvalidRequestUrl,
    ValidationFailed,
    Conflict,
    InternalError,
    ServiceUnavailable,
    /// An error code this client doesn't recognize yet
    Unknown(String),
}

impl NotionErrorCode {
    /// Parse a Notion API error code string into the typed vocabulary.
    pub fn from_api_response(code: &str) -> Self {
        match code {
            "rate_limited" => Self::RateLimited,
            "object_not_found" => Self::ObjectNotFound,
            "unauthorized" => Self::Unauthorized,
            "restricted_resource" => Self::RestrictedResource,
            "invalid_json" => Self::InvalidJson,
            "invalid_request_url" => Self::InvalidRequestUrl,
            "validation_error" => Self::ValidationFailed,
            "conflict_error" => Self::Conflict,
            "internal_server_error" => Self::InternalError,
            "service_unavailable" => Self::ServiceUnavailable,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Extracts the code from a raw error body, if the body is a Notion error object.
    pub fn from_error_body(body: &str) -> Option<Self> {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            code: String,
        }

        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|parsed| Self::from_api_response(&parsed.code))
    }
}

impl fmt::Display for NotionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimited => write!(f, "rate_limited"),
            Self::ObjectNotFound => write!(f, "object_not_found"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::RestrictedResource => write!(f, "restricted_resource"),
            Self::InvalidJson => write!(f, "invalid_json"),
            Self::InvalidRequestUrl => write!(f, "invalid_request_url"),
            Self::ValidationFailed => write!(f, "validation_error"),
            Self::Conflict => write!(f, "conflict_error"),
            Self::InternalError => write!(f, "internal_server_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::Unknown(code) => write!(f, "{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),

    #[error("Failed to build request: {0}")]
    RequestConstruction(String),

    #[error("Network failure: {0}")]
    Network(#[from] reqwest::Error),

    #[error("notion API {method} {path} failed: status={status} body={body}")]
    NotionApi {
        method: reqwest::Method,
        path: String,
        status: reqwest::StatusCode,
        code: Option<NotionErrorCode>,
        body: String,
    },

    #[error("Malformed response from {path}: {source} (body={body})")]
    MalformedResponse {
        path: String,
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("property {property:?} not found on page {page_id}; check the exact column name in Notion")]
    MissingProperty { property: String, page_id: String },

    #[error("Output IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// The Notion error code, when the failure came from an API error body.
    pub fn notion_code(&self) -> Option<&NotionErrorCode> {
        match self {
            AppError::NotionApi { code, .. } => code.as_ref(),
            _ => None,
        }
    }
}
