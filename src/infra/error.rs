use thiserror::Error;

/// Infrastructure errors that can occur during application startup.
///
/// Display messages never include secret values; `#[source]` chains may.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Configuration error: environment variable {var} not set")]
    ConfigMissing { var: &'static str },

    #[error("Configuration error: environment variable {var} is invalid ({reason})")]
    ConfigInvalid { var: &'static str, reason: String },

    #[error("Service account private key could not be parsed. Check GOOGLE_PRIVATE_KEY.")]
    PrivateKey(#[source] jsonwebtoken::errors::Error),

    #[error("HTTP client construction failed")]
    HttpClient(#[source] reqwest::Error),

    #[error("Log file could not be created")]
    LogFile(#[source] std::io::Error),

    #[error("TCP bind failed")]
    TcpBind(#[source] std::io::Error),

    #[error("Server error")]
    Server(#[source] std::io::Error),
}
