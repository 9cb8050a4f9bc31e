use http::StatusCode;
use thiserror::Error;

/// Errors that can be produced while admitting a request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CorsError {
    /// The request carried an `Origin` that neither matched the policy nor its own host.
    #[error("Cross-origin access denied.")]
    AccessDenied { origin: String },
}

impl CorsError {
    pub fn status(&self) -> u16 {
        self.status_code().as_u16()
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            CorsError::AccessDenied { .. } => StatusCode::FORBIDDEN,
        }
    }
}
