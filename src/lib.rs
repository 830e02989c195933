//! Cognito user-pool login pipeline.
//!
//! The crate wires together a short, linear sequence of steps:
//!
//! 1. Load credentials for the user pool from the environment ([`config`])
//! 2. Compute the SECRET_HASH required by the USER_PASSWORD_AUTH flow
//!    ([`secret_hash`])
//! 3. Call Cognito `InitiateAuth` to obtain ID/access/refresh tokens
//!    ([`cognito`])
//! 4. Fetch the pool JWKS and verify the ID token's signature and claims
//!    ([`verify`])
//! 5. Revoke the refresh token ([`cognito`])
//!
//! Every step returns a typed [`error::LoginError`] so the binary can decide
//! how to terminate; no step exits the process itself.

pub mod cognito;
pub mod config;
pub mod error;
pub mod secret_hash;
pub mod verify;

pub use config::Config;
pub use error::LoginError;
pub use secret_hash::secret_hash;
