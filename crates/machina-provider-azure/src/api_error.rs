//! Typed Azure API failure response

use http::{HeaderMap, StatusCode};
use thiserror::Error;

/// Failure response captured from an Azure API call.
///
/// Carries what classification needs: the HTTP status and the raw response
/// headers, plus an optional short description of the failed request for
/// display. Whatever client issued the call builds one of these from the
/// response it got back.
#[derive(Error, Debug, Clone)]
#[error("{} failed with status {}", .request.as_deref().unwrap_or("Azure API request"), .status)]
pub struct ApiErrorResponse {
    status: StatusCode,
    headers: HeaderMap,
    request: Option<String>,
}

impl ApiErrorResponse {
    pub fn new(status: StatusCode, headers: HeaderMap) -> Self {
        Self {
            status,
            headers,
            request: None,
        }
    }

    /// Attach a short request description (for example "PUT virtualMachines/vm-0")
    pub fn with_request(mut self, request: impl Into<String>) -> Self {
        self.request = Some(request.into());
        self
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Look up a header value by case-insensitive name.
    ///
    /// Headers present with an empty value are treated as absent, as are
    /// values that are not valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
    }
}
