//! Error types for the `daily-client` crate.
//!
//! A root `Error` struct holds an error kind enum and an optional source
//! for error chaining. Error kinds are nested so callers can match on the
//! broad category or drill into the specific failure.

use std::error::Error as StdError;
use std::fmt;

use reqwest::StatusCode;

/// Top-level error type for the crate.
/// Holds error kind and optional source for error chaining.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
}

/// Major categories of errors.
#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    Http(HttpErrorKind),
    Api(ApiErrorKind),
    Decode(DecodeErrorKind),
}

/// Errors raised before or while a request is on the wire.
#[derive(Debug, PartialEq)]
pub enum HttpErrorKind {
    BuilderFailed,
    RequestFailed,
    Network,
}

/// Non-2xx statuses returned by the API, classified by status.
#[derive(Debug, PartialEq)]
pub enum ApiErrorKind {
    BadRequest,
    Unauthorized,
    NotFound,
    RateLimited,
    Server,
    Other,
}

/// Failures turning a response body into the typed result.
#[derive(Debug, PartialEq)]
pub enum DecodeErrorKind {
    InvalidJson,
    UnexpectedShape,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error_kind {
            ErrorKind::Http(kind) => write!(f, "HTTP error: {:?}", kind),
            ErrorKind::Api(kind) => write!(f, "API error: {:?}", kind),
            ErrorKind::Decode(kind) => write!(f, "Decode error: {:?}", kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let error_kind = if err.is_builder() {
            ErrorKind::Http(HttpErrorKind::BuilderFailed)
        } else if err.is_decode() {
            ErrorKind::Decode(DecodeErrorKind::InvalidJson)
        } else if err.is_request() {
            ErrorKind::Http(HttpErrorKind::RequestFailed)
        } else {
            ErrorKind::Http(HttpErrorKind::Network)
        };

        Error {
            source: Some(Box::new(err)),
            error_kind,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error {
            source: Some(Box::new(err)),
            error_kind: ErrorKind::Decode(DecodeErrorKind::UnexpectedShape),
        }
    }
}

/// Helper function to create errors from non-2xx API responses.
/// The raw response body is preserved in the error source.
pub fn api_error(status: StatusCode, body: String) -> Error {
    Error {
        source: Some(format!("{status}: {body}").into()),
        error_kind: ErrorKind::Api(api_error_kind(status)),
    }
}

fn api_error_kind(status: StatusCode) -> ApiErrorKind {
    match status {
        StatusCode::BAD_REQUEST => ApiErrorKind::BadRequest,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiErrorKind::Unauthorized,
        StatusCode::NOT_FOUND => ApiErrorKind::NotFound,
        StatusCode::TOO_MANY_REQUESTS => ApiErrorKind::RateLimited,
        status if status.is_server_error() => ApiErrorKind::Server,
        _ => ApiErrorKind::Other,
    }
}
