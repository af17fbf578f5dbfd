//! Error types for authentication operations

/// Errors that can occur while building credentials or signing requests
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// API secret is not valid base64
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;
