use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Email is already on the waitlist")]
    Conflict,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// The row store was unreachable or answered with an error.
    #[error("Upstream error: {0}")]
    Upstream(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidInput,
    AlreadyRegistered,
    MethodNotAllowed,
    UpstreamFailure,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::AlreadyRegistered => "ALREADY_REGISTERED",
            ErrorCode::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ErrorCode::UpstreamFailure => "UPSTREAM_FAILURE",
        }
    }
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Conflict => ErrorCode::AlreadyRegistered,
            AppError::MethodNotAllowed => ErrorCode::MethodNotAllowed,
            AppError::Upstream(_) => ErrorCode::UpstreamFailure,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
