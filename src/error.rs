use thiserror::Error;

/// Errors that can occur while talking to the suggestion service
#[derive(Error, Debug)]
pub enum ClientError {
    /// Readiness check or model provisioning failed
    #[error("Service initialization failed: {0}")]
    Initialization(String),

    /// The service answered with a non-success HTTP status
    #[error("Service returned {status}: {message}")]
    Request {
        status: reqwest::StatusCode,
        message: String,
    },

    /// Network-level failure reaching the service
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body did not match the expected schema
    #[error("Unexpected response from service: {0}")]
    Parse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
