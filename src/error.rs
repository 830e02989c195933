use thiserror::Error;

/// Errors raised by the login pipeline
///
/// Each variant maps to one stage of the pipeline so the binary can report a
/// distinct exit code per failure category. Nothing is retried; the first
/// error terminates the run.
#[derive(Error, Debug)]
pub enum LoginError {
    #[error("cannot load configuration: {reason}")]
    Config { reason: String },

    #[error("auth request failed: {reason}")]
    Auth { reason: String },

    #[error("failed to fetch JWKS from {url}: {reason}")]
    Jwks { url: String, reason: String },

    #[error("ID token verification failed: {reason}")]
    Verification { reason: String },

    #[error("ID token is expired (exp {exp}, now {now})")]
    TokenExpired { exp: i64, now: i64 },

    #[error("token revocation failed: {reason}")]
    Revocation { reason: String },

    #[error("failed to write claims to stdout: {reason}")]
    Output { reason: String },
}

impl LoginError {
    /// Exit code for the binary; 1 is reserved for CLI usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoginError::Config { .. } => 2,
            LoginError::Auth { .. } => 3,
            LoginError::Jwks { .. } => 4,
            LoginError::Verification { .. } => 5,
            LoginError::TokenExpired { .. } => 6,
            LoginError::Revocation { .. } => 7,
            LoginError::Output { .. } => 8,
        }
    }
}
