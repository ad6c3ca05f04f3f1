// src/error.rs
//! Application error types with structured error handling.
//!
//! Each variant names what went wrong and where. Fetch-time errors are
//! fatal to an export; render-time anomalies never surface here, they are
//! contained to the offending block.

use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Notion API error codes as a typed vocabulary.
///
/// Parsed from the `code` field of a Notion error body so a failed request
/// can be described without stringly-typed matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotionErrorCode {
    /// API rate limit exceeded
    RateLimited,
    /// The requested object does not exist or is inaccessible
    ObjectNotFound,
    /// API key is invalid or expired
    Unauthorized,
    /// API key lacks permission for this resource
    RestrictedResource,
    /// Request parameters failed Notion's validation
    ValidationFailed,
    /// Notion internal server error
    InternalError,
    /// Notion is temporarily unavailable
    ServiceUnavailable,
    /// The error body was not a Notion error object
    HttpStatus(u16),
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
            "validation_error" => Self::ValidationFailed,
            "internal_server_error" => Self::InternalError,
            "service_unavailable" => Self::ServiceUnavailable,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Classifies an error response body, falling back to the HTTP status.
    pub fn classify(status: u16, body: &str) -> Self {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|json| json.get("code")?.as_str().map(Self::from_api_response))
            .unwrap_or(Self::HttpStatus(status))
    }
}

impl fmt::Display for NotionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimited => write!(f, "rate_limited"),
            Self::ObjectNotFound => write!(f, "object_not_found"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::RestrictedResource => write!(f, "restricted_resource"),
            Self::ValidationFailed => write!(f, "validation_error"),
            Self::InternalError => write!(f, "internal_server_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
            Self::Unknown(code) => write!(f, "{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Invalid Notion ID format: {0}")]
    InvalidId(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    /// A remote listing or query returned a non-success status.
    #[error("Notion request to {url} failed with status {status} ({code}): {body}")]
    RemoteFetch {
        status: u16,
        code: NotionErrorCode,
        url: String,
        body: String,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not load fixture {path}: {cause}")]
    Fixture { path: PathBuf, cause: String },

    #[error("Invalid selection: {0}")]
    Selection(String),

    #[error("No data source available: {0}")]
    NoDataSource(String),

    #[error("Internal error: {message}")]
    InternalError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AppError {
    /// Builds a `RemoteFetch` error, keeping only a preview of the body.
    pub fn remote_fetch(status: u16, url: impl Into<String>, body: &str) -> Self {
        AppError::RemoteFetch {
            status,
            code: NotionErrorCode::classify(status, body),
            url: url.into(),
            body: truncate_body(body, ERROR_BODY_PREVIEW_LENGTH),
        }
    }

    /// The HTTP status of a failed remote call, if this is one.
    pub fn remote_status(&self) -> Option<u16> {
        match self {
            AppError::RemoteFetch { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A block whose payload lacks a field its declared type requires.
///
/// Never fatal: the parser logs it and keeps the block as an unsupported
/// placeholder so one bad block cannot abort an export.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed {block_type} block {block_id}: {reason}")]
pub struct MalformedNodeError {
    pub block_id: String,
    pub block_type: String,
    pub reason: String,
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

impl From<std::fmt::Error> for AppError {
    fn from(err: std::fmt::Error) -> Self {
        AppError::InternalError {
            message: "Formatting error".to_string(),
            source: Some(Box::new(err)),
        }
    }
}

/// Truncates to at most `max_chars` characters, never splitting a code point.
fn truncate_body(body: &str, max_chars: usize) -> String {
    match body.char_indices().nth(max_chars) {
        Some((byte_index, _)) => body[..byte_index].to_string(),
        None => body.to_string(),
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
