//! Classification of Azure API failures
//!
//! Azure attaches correlation headers to every response. On failure the
//! interesting ones are pulled out for logs, and the vendor error code is
//! folded into the coarse status taxonomy the lifecycle controller bases
//! its retry decisions on. Everything here is total: a failure that carries
//! no response payload simply classifies to the safe default.

use std::collections::HashMap;

use machina_driver::{Code, Status};

use crate::error::AzureError;

/// Correlation ID Azure assigns to the whole request chain
pub const HEADER_CORRELATION_REQUEST_ID: &str = "x-ms-correlation-request-id";
/// Request ID assigned by the serving resource provider
pub const HEADER_REQUEST_ID: &str = "x-ms-request-id";
/// Vendor error code set by the server, mirrored from the response body
pub const HEADER_ERROR_CODE: &str = "x-ms-error-code";
/// Client-chosen request ID echoed back by Azure
pub const HEADER_CLIENT_REQUEST_ID: &str = "x-ms-client-request-id";

/// Headers worth surfacing when an API call fails
const DIAGNOSTIC_HEADERS: [&str; 4] = [
    HEADER_CORRELATION_REQUEST_ID,
    HEADER_REQUEST_ID,
    HEADER_ERROR_CODE,
    HEADER_CLIENT_REQUEST_ID,
];

/// Vendor code Azure reports when the target zone has no capacity left
pub const ZONAL_ALLOCATION_FAILED: &str = "ZonalAllocationFailed";

/// Whether the error is Azure reporting that the resource does not exist
pub fn is_not_found(err: &AzureError) -> bool {
    match err {
        AzureError::Api(response) => response.status_code() == http::StatusCode::NOT_FOUND,
        _ => false,
    }
}

/// Diagnostic headers carried by the failure response.
///
/// Only the enumerated correlation headers are surfaced, and only when
/// present with a non-empty value. Errors without a response payload yield
/// an empty map.
pub fn diagnostic_headers(err: &AzureError) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    if let AzureError::Api(response) = err {
        for name in DIAGNOSTIC_HEADERS {
            if let Some(value) = response.header(name) {
                headers.insert(name.to_string(), value.to_string());
            }
        }
    }
    headers
}

/// Vendor error code from the failure response, when one was sent
pub fn error_code(err: &AzureError) -> Option<&str> {
    match err {
        AzureError::Api(response) => response.header(HEADER_ERROR_CODE),
        _ => None,
    }
}

/// Fold an Azure failure into the controller's status taxonomy.
///
/// Zone capacity exhaustion maps to [`Code::ResourceExhausted`] so the
/// controller can back off or move to another zone; every other failure,
/// including errors without a response payload, is [`Code::Internal`].
pub fn classify(err: &AzureError) -> Code {
    match error_code(err) {
        Some(ZONAL_ALLOCATION_FAILED) => Code::ResourceExhausted,
        _ => Code::Internal,
    }
}

/// Log an API failure at error level, with its diagnostic headers attached
/// when the response carried any
pub fn log_api_error(err: &AzureError, context: &str) {
    let headers = diagnostic_headers(err);
    if headers.is_empty() {
        tracing::error!("{}: {}", context, err);
    } else {
        tracing::error!("{}: {} (response headers: {:?})", context, err, headers);
    }
}

/// Classify a failure and wrap it into the [`Status`] handed back to the
/// lifecycle controller
pub fn status_for(err: &AzureError, context: &str) -> Status {
    Status::new(classify(err), format!("{}: {}", context, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_error::ApiErrorResponse;
    use http::{HeaderMap, HeaderValue, StatusCode};
    use serde_json::json;

    fn api_error(status: StatusCode, header_pairs: &[(&'static str, &'static str)]) -> AzureError {
        let mut headers = HeaderMap::new();
        for &(name, value) in header_pairs {
            headers.insert(name, HeaderValue::from_static(value));
        }
        AzureError::Api(ApiErrorResponse::new(status, headers))
    }

    fn decode_error() -> AzureError {
        AzureError::DecodeProviderSpec(serde_json::from_value::<i32>(json!("nope")).unwrap_err())
    }

    #[test]
    fn test_is_not_found() {
        assert!(is_not_found(&api_error(StatusCode::NOT_FOUND, &[])));
        assert!(!is_not_found(&api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            &[]
        )));
        assert!(!is_not_found(&decode_error()));
    }

    #[test]
    fn test_diagnostic_headers_surfaces_only_listed_keys() {
        let err = api_error(
            StatusCode::CONFLICT,
            &[
                (HEADER_REQUEST_ID, "req-1"),
                ("x-ms-ratelimit-remaining", "11999"),
                (HEADER_ERROR_CODE, ""),
            ],
        );
        let headers = diagnostic_headers(&err);
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get(HEADER_REQUEST_ID), Some(&"req-1".to_string()));
    }

    #[test]
    fn test_diagnostic_headers_of_payload_free_error() {
        assert!(diagnostic_headers(&decode_error()).is_empty());
    }

    #[test]
    fn test_classify_zonal_allocation_failure() {
        let err = api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            &[(HEADER_ERROR_CODE, ZONAL_ALLOCATION_FAILED)],
        );
        assert_eq!(classify(&err), Code::ResourceExhausted);
    }

    #[test]
    fn test_classify_unrecognized_code() {
        let err = api_error(
            StatusCode::CONFLICT,
            &[(HEADER_ERROR_CODE, "OperationNotAllowed")],
        );
        assert_eq!(classify(&err), Code::Internal);
    }

    #[test]
    fn test_classify_without_error_code() {
        assert_eq!(
            classify(&api_error(StatusCode::INTERNAL_SERVER_ERROR, &[])),
            Code::Internal
        );
        assert_eq!(classify(&decode_error()), Code::Internal);
    }

    #[test]
    fn test_error_code_lookup() {
        let err = api_error(StatusCode::CONFLICT, &[(HEADER_ERROR_CODE, "SkuNotAvailable")]);
        assert_eq!(error_code(&err), Some("SkuNotAvailable"));
        assert_eq!(error_code(&decode_error()), None);
    }

    #[test]
    fn test_status_for_keeps_context() {
        let err = api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            &[(HEADER_ERROR_CODE, ZONAL_ALLOCATION_FAILED)],
        );
        let status = status_for(&err, "creating VM vm-0");
        assert_eq!(status.code, Code::ResourceExhausted);
        assert!(status.message.starts_with("creating VM vm-0: "));
    }
}
