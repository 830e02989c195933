//! User pool configuration
//!
//! Credentials for the Cognito app client are read from the process
//! environment, with an optional `.env` file loaded first. The configuration
//! is built once at startup and threaded read-only through the pipeline;
//! the JWKS URL and the regional endpoint are derived from it on demand.

use std::env;

use crate::error::LoginError;

/// Credentials and addressing for one Cognito user pool app client
///
/// Immutable for the lifetime of the process; never persisted.
#[derive(Debug, Clone)]
pub struct Config {
    /// App client ID
    pub client_id: String,
    /// App client secret, used for the SECRET_HASH and for RevokeToken
    pub client_secret: String,
    /// User pool ID, e.g. `ap-northeast-1_AbCdEfGh`
    pub pool_id: String,
    /// AWS region hosting the pool
    pub region: String,
    /// Base URL override for the Cognito API and JWKS endpoint (tests)
    pub endpoint_override: Option<String>,
}

impl Config {
    /// Load the configuration from `.env` (if present) and the environment.
    ///
    /// All of `CLIENT_ID`, `CLIENT_SECRET` and `POOL_ID` must be set and
    /// non-empty. The region defaults to the prefix of the pool ID unless
    /// `region_override` or `AWS_REGION` is given.
    pub fn from_env(region_override: Option<String>) -> Result<Self, LoginError> {
        dotenvy::dotenv().ok();

        let client_id = require_env("CLIENT_ID")?;
        let client_secret = require_env("CLIENT_SECRET")?;
        let pool_id = require_env("POOL_ID")?;

        let region = match region_override.or_else(|| non_empty_env("AWS_REGION")) {
            Some(region) => region,
            None => region_from_pool_id(&pool_id)?,
        };

        Ok(Config {
            client_id,
            client_secret,
            pool_id,
            region,
            endpoint_override: non_empty_env("COGNITO_ENDPOINT"),
        })
    }

    /// Base URL of the regional Cognito identity provider API
    pub fn idp_endpoint(&self) -> String {
        self.endpoint_override
            .clone()
            .unwrap_or_else(|| format!("https://cognito-idp.{}.amazonaws.com", self.region))
    }

    /// URL of the pool's published signing key set
    pub fn jwks_url(&self) -> String {
        format!(
            "{}/{}/.well-known/jwks.json",
            self.idp_endpoint(),
            self.pool_id
        )
    }

    /// Expected `iss` claim of ID tokens issued by the pool.
    ///
    /// Always the canonical AWS URL, independent of any endpoint override.
    pub fn issuer(&self) -> String {
        format!(
            "https://cognito-idp.{}.amazonaws.com/{}",
            self.region, self.pool_id
        )
    }
}

fn require_env(key: &str) -> Result<String, LoginError> {
    non_empty_env(key).ok_or_else(|| LoginError::Config {
        reason: format!("required environment variable {} is not set", key),
    })
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}

/// Derive the region from a pool ID of the form `<region>_<suffix>`.
fn region_from_pool_id(pool_id: &str) -> Result<String, LoginError> {
    match pool_id.split_once('_') {
        Some((region, _)) if !region.is_empty() => Ok(region.to_string()),
        _ => Err(LoginError::Config {
            reason: format!(
                "cannot derive region from POOL_ID '{}'; set AWS_REGION",
                pool_id
            ),
        }),
    }
}
