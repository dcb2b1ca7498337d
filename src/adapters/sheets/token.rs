//! OAuth2 access tokens for a Google service account (JWT-bearer grant).

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tokio::sync::Mutex;
use url::Url;

use crate::app_error::{AppError, AppResult};

pub const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_TTL: Duration = Duration::hours(1);
/// Tokens this close to expiry are treated as already expired.
const REFRESH_MARGIN: Duration = Duration::seconds(60);

#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self) -> AppResult<SecretString>;
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AssertionClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

struct CachedToken {
    token: SecretString,
    expires_at: OffsetDateTime,
}

pub struct ServiceAccountTokenProvider {
    client: Client,
    client_email: String,
    key: EncodingKey,
    token_uri: Url,
    cached: Mutex<Option<CachedToken>>,
}

impl ServiceAccountTokenProvider {
    pub fn new(
        client: Client,
        client_email: String,
        private_key_pem: &SecretString,
        token_uri: Url,
    ) -> Result<Self, jsonwebtoken::errors::Error> {
        let key = EncodingKey::from_rsa_pem(private_key_pem.expose_secret().as_bytes())?;
        Ok(Self {
            client,
            client_email,
            key,
            token_uri,
            cached: Mutex::new(None),
        })
    }

    fn sign_assertion(&self, now: OffsetDateTime) -> AppResult<String> {
        let iat = now.unix_timestamp();
        let claims = AssertionClaims {
            iss: self.client_email.clone(),
            scope: SHEETS_SCOPE.to_string(),
            aud: self.token_uri.to_string(),
            iat,
            exp: iat + ASSERTION_TTL.whole_seconds(),
        };
        encode(&Header::new(Algorithm::RS256), &claims, &self.key)
            .map_err(|e| AppError::Upstream(format!("failed to sign token assertion: {e}")))
    }

    async fn fetch(&self, now: OffsetDateTime) -> AppResult<CachedToken> {
        let assertion = self.sign_assertion(now)?;

        let response = self
            .client
            .post(self.token_uri.clone())
            .form(&[
                ("grant_type", JWT_BEARER_GRANT),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("token request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "token endpoint returned {status}: {body}"
            )));
        }

        let parsed: TokenResponse = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("token response unreadable: {e}")))?;

        tracing::debug!(expires_in = parsed.expires_in, "Fetched service account token");

        let expires_at = Some(parsed.expires_in)
            .filter(|secs| *secs > 0)
            .and_then(|secs| now.checked_add(Duration::seconds(secs)))
            .ok_or_else(|| {
                AppError::Upstream(format!(
                    "token endpoint returned unusable expires_in: {}",
                    parsed.expires_in
                ))
            })?;

        Ok(CachedToken {
            token: SecretString::new(parsed.access_token.into()),
            expires_at,
        })
    }
}

#[async_trait]
impl AccessTokenProvider for ServiceAccountTokenProvider {
    async fn access_token(&self) -> AppResult<SecretString> {
        // Held across the fetch so concurrent callers share one refresh.
        let mut cached = self.cached.lock().await;
        let now = OffsetDateTime::now_utc();

        if let Some(token) = cached.as_ref()
            && token.expires_at - REFRESH_MARGIN > now
        {
            return Ok(SecretString::new(token.token.expose_secret().into()));
        }

        let fresh = self.fetch(now).await?;
        let token = SecretString::new(fresh.token.expose_secret().into());
        *cached = Some(fresh);
        Ok(token)
    }
}
