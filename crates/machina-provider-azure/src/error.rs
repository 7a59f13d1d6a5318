//! Azure provider error types

use thiserror::Error;

use crate::api_error::ApiErrorResponse;

#[derive(Error, Debug)]
pub enum AzureError {
    #[error("Azure API error: {0}")]
    Api(#[from] ApiErrorResponse),

    #[error("Machine class is for provider {0}, not Azure")]
    UnsupportedProvider(String),

    #[error("Decoding provider spec failed: {0}")]
    DecodeProviderSpec(#[from] serde_json::Error),

    #[error("Name {name} does not end with suffix {suffix}")]
    MissingNameSuffix { name: String, suffix: &'static str },

    #[error("Malformed provider ID: {0}")]
    MalformedProviderId(String),

    #[error("Secret is missing required field {0}")]
    MissingSecret(&'static str),
}

pub type Result<T> = std::result::Result<T, AzureError>;
