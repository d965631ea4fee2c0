//! IAM token exchange with expiry-aware caching

use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Mutex;

use crate::config::api;
use crate::error::{CloudError, Result};
use crate::ibm::client::api_error_message;

/// Bearer token returned by the IAM token endpoint
#[derive(Deserialize, Clone)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime in seconds
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Expiry as a unix timestamp
    #[serde(default)]
    pub expiration: Option<i64>,
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expiration", &self.expiration)
            .finish()
    }
}

impl AccessToken {
    /// Unix timestamp after which the token must not be used
    fn expires_at(&self, issued_at: i64) -> i64 {
        self.expiration
            .or_else(|| self.expires_in.map(|secs| issued_at + secs))
            .unwrap_or(issued_at)
    }
}

#[derive(Clone)]
struct CachedToken {
    token: String,
    /// Refresh deadline (expiry minus buffer)
    refresh_at: i64,
}

/// Exchanges an API key for bearer tokens and keeps the current one
pub struct IamAuthenticator {
    client: Client,
    api_key: String,
    iam_url: String,
    cache: Mutex<Option<CachedToken>>,
}

impl IamAuthenticator {
    /// Create an authenticator; no request is made until a token is needed
    pub fn new(client: Client, api_key: &str, iam_url: &str) -> Result<Self> {
        validate_api_key(api_key)?;
        Ok(Self {
            client,
            api_key: api_key.to_string(),
            iam_url: iam_url.trim_end_matches('/').to_string(),
            cache: Mutex::new(None),
        })
    }

    /// Current bearer token, exchanging the API key when none is cached or
    /// the cached one is about to expire
    pub async fn access_token(&self) -> Result<String> {
        let now = chrono::Utc::now().timestamp();
        if let Some(cached) = self.cached() {
            if now < cached.refresh_at {
                return Ok(cached.token);
            }
            debug!("Cached IAM token expired, requesting a new one");
        }

        let token = self.request_token().await?;
        let refresh_at = token.expires_at(now) - api::TOKEN_EXPIRY_BUFFER_SECS;
        debug!(
            "New IAM token cached, refresh in {}s",
            (refresh_at - now).max(0)
        );

        if let Ok(mut cache) = self.cache.lock() {
            *cache = Some(CachedToken {
                token: token.access_token.clone(),
                refresh_at,
            });
        }
        Ok(token.access_token)
    }

    /// Drop the cached token so the next call exchanges again
    pub fn invalidate(&self) {
        if let Ok(mut cache) = self.cache.lock() {
            *cache = None;
        }
    }

    /// The API key this authenticator exchanges
    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    fn cached(&self) -> Option<CachedToken> {
        self.cache.lock().ok().and_then(|c| c.clone())
    }

    async fn request_token(&self) -> Result<AccessToken> {
        let url = format!("{}{}", self.iam_url, api::TOKEN_PATH);
        debug!("Requesting IAM token from: {}", url);

        let body = format!(
            "grant_type={}&apikey={}",
            urlencoding::encode(api::APIKEY_GRANT_TYPE),
            urlencoding::encode(&self.api_key)
        );

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Accept", "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        match status {
            200 => Ok(response.json::<AccessToken>().await?),
            400 | 401 | 403 => {
                let text = response.text().await.unwrap_or_default();
                Err(CloudError::Authentication(
                    api_error_message(&text)
                        .unwrap_or_else(|| "API key was rejected by IAM".to_string()),
                ))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(CloudError::Api {
                    status,
                    message: api_error_message(&text)
                        .unwrap_or_else(|| "Failed to obtain IAM token".to_string()),
                })
            }
        }
    }
}

/// Reject keys that cannot be valid before any network call
fn validate_api_key(api_key: &str) -> Result<()> {
    if api_key.is_empty() {
        return Err(CloudError::Authentication("API key is empty".to_string()));
    }
    if api_key
        .chars()
        .any(|c| c.is_whitespace() || c.is_control())
    {
        return Err(CloudError::Authentication(
            "API key is malformed (contains whitespace or control characters)".to_string(),
        ));
    }
    Ok(())
}
