//! Error types for REST API operations

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// HTTP request failed (DNS, connection, TLS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid API credentials
    #[error("Invalid credentials: {0}")]
    Auth(#[from] cf_auth::AuthError),

    /// Missing API credentials for private endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// Server answered with a non-2xx status; the raw body is preserved
    #[error("API returned status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body as returned by the server
        body: String,
    },

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_preserves_body() {
        let err = RestError::Status {
            status: 401,
            body: r#"{"result":"error","error":"authenticationError"}"#.to_string(),
        };
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("authenticationError"));
    }
}
