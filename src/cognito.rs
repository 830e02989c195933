//! Cognito identity provider API client
//!
//! Speaks the AWS JSON 1.1 protocol directly: both `InitiateAuth` (with the
//! USER_PASSWORD_AUTH flow) and `RevokeToken` are unauthenticated operations,
//! so plain HTTPS POSTs with an `X-Amz-Target` header are sufficient and no
//! request signing is involved.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::LoginError;

const AMZ_JSON: &str = "application/x-amz-json-1.1";
const TARGET_INITIATE_AUTH: &str = "AWSCognitoIdentityProviderService.InitiateAuth";
const TARGET_REVOKE_TOKEN: &str = "AWSCognitoIdentityProviderService.RevokeToken";

/// One password-grant authentication request; built once, consumed once.
#[derive(Debug)]
pub struct AuthRequest {
    pub username: String,
    pub password: String,
    pub secret_hash: String,
}

/// Tokens returned by a successful `InitiateAuth` call
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthenticationResult {
    pub id_token: String,
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: u32,
    #[serde(default)]
    pub token_type: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InitiateAuthResponse {
    authentication_result: Option<AuthenticationResult>,
    challenge_name: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct InitiateAuthPayload<'a> {
    auth_flow: &'a str,
    client_id: &'a str,
    auth_parameters: AuthParameters<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct AuthParameters<'a> {
    username: &'a str,
    password: &'a str,
    secret_hash: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct RevokeTokenPayload<'a> {
    token: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
}

/// Error body returned by the Cognito API on non-2xx responses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(rename = "__type")]
    kind: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
}

impl ApiErrorBody {
    fn describe(body: &str, status: reqwest::StatusCode) -> String {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => format!(
                "{}: {} (HTTP {})",
                parsed.kind.unwrap_or_else(|| "UnknownError".into()),
                parsed.message.unwrap_or_else(|| "no message".into()),
                status
            ),
            Err(_) => format!("HTTP {}", status),
        }
    }
}

/// Client for one regional Cognito identity provider endpoint
pub struct CognitoClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CognitoClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.idp_endpoint(),
        }
    }

    /// The underlying HTTP client, shared with the JWKS fetch.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Authenticate with the USER_PASSWORD_AUTH flow.
    ///
    /// Returns the full token set on success. A response carrying a
    /// challenge instead of tokens (e.g. NEW_PASSWORD_REQUIRED) is reported
    /// as an authentication failure; this tool does not answer challenges.
    pub async fn initiate_auth(
        &self,
        client_id: &str,
        request: &AuthRequest,
    ) -> Result<AuthenticationResult, LoginError> {
        let payload = InitiateAuthPayload {
            auth_flow: "USER_PASSWORD_AUTH",
            client_id,
            auth_parameters: AuthParameters {
                username: &request.username,
                password: &request.password,
                secret_hash: &request.secret_hash,
            },
        };

        debug!("calling InitiateAuth at {}", self.endpoint);
        let body = self.post(TARGET_INITIATE_AUTH, &payload).await?;

        let response: InitiateAuthResponse =
            serde_json::from_str(&body).map_err(|e| LoginError::Auth {
                reason: format!("malformed InitiateAuth response: {}", e),
            })?;

        if let Some(challenge) = response.challenge_name {
            return Err(LoginError::Auth {
                reason: format!("authentication challenge '{}' is not supported", challenge),
            });
        }
        response.authentication_result.ok_or_else(|| LoginError::Auth {
            reason: "InitiateAuth response contained no authentication result".into(),
        })
    }

    /// Revoke a refresh token, invalidating all tokens derived from it.
    pub async fn revoke_token(
        &self,
        refresh_token: &str,
        config: &Config,
    ) -> Result<(), LoginError> {
        let payload = RevokeTokenPayload {
            token: refresh_token,
            client_id: &config.client_id,
            client_secret: &config.client_secret,
        };

        debug!("calling RevokeToken at {}", self.endpoint);
        self.post(TARGET_REVOKE_TOKEN, &payload)
            .await
            .map_err(|e| match e {
                LoginError::Auth { reason } => LoginError::Revocation { reason },
                other => other,
            })?;
        Ok(())
    }

    /// POST one AWS JSON 1.1 operation and return the raw response body.
    async fn post<T: Serialize>(&self, target: &str, payload: &T) -> Result<String, LoginError> {
        let body = serde_json::to_vec(payload).map_err(|e| LoginError::Auth {
            reason: format!("failed to encode request: {}", e),
        })?;

        let response = self
            .http
            .post(&self.endpoint)
            .header("Content-Type", AMZ_JSON)
            .header("X-Amz-Target", target)
            .body(body)
            .send()
            .await
            .map_err(|e| LoginError::Auth {
                reason: format!("request to {} failed: {}", self.endpoint, e),
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| LoginError::Auth {
            reason: format!("failed to read response body: {}", e),
        })?;

        if !status.is_success() {
            return Err(LoginError::Auth {
                reason: ApiErrorBody::describe(&text, status),
            });
        }
        Ok(text)
    }
}
