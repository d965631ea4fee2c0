//! Authenticated HTTP client bound to one IBM Cloud service

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{CloudError, Result};
use crate::ibm::auth::IamAuthenticator;
use crate::ibm::credentials::Credential;
use crate::ibm::service::{Endpoints, Service};

/// Client handle: bearer-token session bound to one service endpoint
pub struct CloudClient {
    client: Client,
    auth: IamAuthenticator,
    service: Service,
    base_url: String,
}

impl CloudClient {
    /// Exchange `credential` for a client bound to `service`
    ///
    /// Resolves the service URL first (configuration errors never reach the
    /// network), then performs the IAM token exchange.
    pub async fn authenticate(
        credential: &Credential,
        service: Service,
        endpoints: &Endpoints,
    ) -> Result<Self> {
        let client = Self::new(credential, service, endpoints)?;
        client.auth.access_token().await?;
        debug!("Authenticated against {} at {}", service, client.base_url);
        Ok(client)
    }

    /// Build a client without contacting IAM yet
    pub fn new(credential: &Credential, service: Service, endpoints: &Endpoints) -> Result<Self> {
        let base_url = endpoints.service_url(service, credential.region())?;

        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("ibmctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        let auth = IamAuthenticator::new(client.clone(), credential.api_key(), &endpoints.iam_url)?;

        Ok(Self {
            client,
            auth,
            service,
            base_url,
        })
    }

    /// Service this handle is bound to
    pub fn service(&self) -> Service {
        self.service
    }

    /// API key of the session (for endpoints that take it as a header)
    pub(crate) fn api_key(&self) -> &str {
        self.auth.api_key()
    }

    /// Build a full URL from a path and query pairs, appending the service's
    /// mandatory query parameters
    pub(crate) fn url(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut pairs: Vec<String> = self
            .service
            .default_query()
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect();
        pairs.extend(
            query
                .iter()
                .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v))),
        );

        if pairs.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, pairs.join("&"))
        }
    }

    /// Add bearer token and JSON headers to a request builder
    async fn with_headers(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::RequestBuilder> {
        let token = self.auth.access_token().await?;
        Ok(builder
            .bearer_auth(token)
            .header("Accept", "application/json"))
    }

    /// Create an authenticated GET request builder
    pub(crate) async fn get(&self, url: &str) -> Result<reqwest::RequestBuilder> {
        self.with_headers(self.client.get(url)).await
    }

    /// Create an authenticated POST request builder
    pub(crate) async fn post(&self, url: &str) -> Result<reqwest::RequestBuilder> {
        self.with_headers(self.client.post(url)).await
    }

    /// Create an authenticated DELETE request builder
    pub(crate) async fn delete(&self, url: &str) -> Result<reqwest::RequestBuilder> {
        self.with_headers(self.client.delete(url)).await
    }

    /// GET a URL and decode the JSON body
    pub(crate) async fn get_json<T>(&self, url: &str, error_context: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!("Fetching {} from: {}", error_context, url);
        let response = self.get(url).await?.send().await?;
        self.parse_api_response(response, error_context).await
    }

    /// Parse an API response, mapping non-success status codes to errors
    ///
    /// 401/403 become `Authorization` (expired or insufficient token) and
    /// 404 becomes `NotFound`.
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status().as_u16();
        if response.status().is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        Err(status_error(status, &body, error_context))
    }

    /// Check a response that carries no body of interest
    pub(crate) async fn expect_success(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<()> {
        let status = response.status().as_u16();
        if response.status().is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(status_error(status, &body, error_context))
    }
}

/// Map a non-success status to the error taxonomy
pub(crate) fn status_error(status: u16, body: &str, error_context: &str) -> CloudError {
    let detail = api_error_message(body);
    let message = match detail {
        Some(ref d) => format!("Failed to fetch {}: {}", error_context, d),
        None => format!("Failed to fetch {}", error_context),
    };
    match status {
        401 | 403 => CloudError::Authorization { status, message },
        404 => CloudError::NotFound(match detail {
            Some(d) => format!("Not found: {} ({})", error_context, d),
            None => format!("Not found: {}", error_context),
        }),
        _ => CloudError::Api { status, message },
    }
}

/// Extract a human-readable message from an IBM error body
///
/// Platform services answer `{"errors": [{"message": ...}]}`, IAM answers
/// `{"errorMessage": ...}`.
pub(crate) fn api_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value["errors"][0]["message"]
        .as_str()
        .or_else(|| value["errorMessage"].as_str())
        .or_else(|| value["message"].as_str())
        .map(str::to_string)
}

#[cfg(test)]
impl CloudClient {
    /// Client bound to a mock server for both IAM and the service
    pub fn test_client(base_url: &str, service: Service) -> Self {
        let credential = Credential::new("test-api-key", Some("us-south"), Some("acc-test"));
        Self::new(&credential, service, &Endpoints::single(base_url))
            .expect("test client configuration is valid")
    }
}

/// Mount the IAM token endpoint on a mock server (test helper)
#[cfg(test)]
pub async fn mount_token_endpoint(server: &wiremock::MockServer) {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, ResponseTemplate};

    let expiration = chrono::Utc::now().timestamp() + 3600;
    Mock::given(method("POST"))
        .and(path("/identity/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "test-token",
            "token_type": "Bearer",
            "expires_in": 3600,
            "expiration": expiration
        })))
        .mount(server)
        .await;
}
