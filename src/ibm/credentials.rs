//! API key and region resolution from the environment

use log::debug;
use std::fmt;

use crate::config::credentials;
use crate::error::{CloudError, Result};
use crate::ibm::service::Service;

/// API key plus the region / account it targets
///
/// Loaded once at startup and passed by reference; never mutated.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    api_key: String,
    region: Option<String>,
    account_id: Option<String>,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("api_key", &"<redacted>")
            .field("region", &self.region)
            .field("account_id", &self.account_id)
            .finish()
    }
}

impl Credential {
    /// Build a credential from explicit values
    pub fn new(api_key: &str, region: Option<&str>, account_id: Option<&str>) -> Self {
        Self {
            api_key: api_key.to_string(),
            region: region.map(str::to_string),
            account_id: account_id.map(str::to_string),
        }
    }

    /// Resolve a credential for `service` through `lookup`:
    /// 1. API key from IBMCLOUD_API_KEY (required)
    /// 2. Region from CLI argument, then the service's region variables
    /// 3. Account ID from IBMCLOUD_ACCOUNT_ID (optional)
    ///
    /// Regional services fail here when no region is found, so the error is
    /// reported before any network call.
    pub fn resolve<F>(lookup: F, service: Service, cli_region: Option<&str>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = non_blank(credentials::API_KEY_ENV_VAR).ok_or_else(|| {
            CloudError::Config(format!(
                "{} environment variable not found",
                credentials::API_KEY_ENV_VAR
            ))
        })?;
        debug!(
            "Using API key from {} environment variable",
            credentials::API_KEY_ENV_VAR
        );

        let region = match cli_region.map(str::trim).filter(|r| !r.is_empty()) {
            Some(region) => {
                debug!("Using region from CLI argument: {}", region);
                Some(region.to_string())
            }
            None => service.region_env_vars().iter().find_map(|name| {
                let value = non_blank(name)?;
                debug!("Using region from {} environment variable: {}", name, value);
                Some(value)
            }),
        };

        if service.is_regional() && region.is_none() {
            return Err(CloudError::Config(format!(
                "{} requires a region. Use --region or set {}",
                service,
                service.region_env_vars().join(" / ")
            )));
        }

        let account_id = non_blank(credentials::ACCOUNT_ID_ENV_VAR);

        Ok(Self {
            api_key,
            region,
            account_id,
        })
    }

    /// The API key (never log this)
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Target region, if any
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Target account, if configured
    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }
}
