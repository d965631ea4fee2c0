//! Service endpoints the client can be bound to

use std::fmt;

use crate::config::{api, credentials};
use crate::error::{CloudError, Result};

/// IBM Cloud service a client handle talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// Code Engine v2 (regional)
    CodeEngine,
    /// IAM Identity (global)
    IamIdentity,
    /// VPC v1 (regional)
    Vpc,
}

impl Service {
    /// Whether the endpoint depends on a region
    pub fn is_regional(&self) -> bool {
        !matches!(self, Service::IamIdentity)
    }

    /// Environment variables consulted for the region (in order)
    pub fn region_env_vars(&self) -> &'static [&'static str] {
        match self {
            Service::CodeEngine => credentials::CODE_ENGINE_REGION_ENV_VARS,
            Service::Vpc => credentials::VPC_REGION_ENV_VARS,
            Service::IamIdentity => &[],
        }
    }

    /// Query parameters every request to this service must carry
    pub fn default_query(&self) -> Vec<(&'static str, &'static str)> {
        match self {
            Service::Vpc => vec![
                ("version", api::VPC_API_VERSION),
                ("generation", api::VPC_GENERATION),
            ],
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Service::CodeEngine => write!(f, "Code Engine"),
            Service::IamIdentity => write!(f, "IAM Identity"),
            Service::Vpc => write!(f, "VPC"),
        }
    }
}

/// Base URLs used to reach IAM and the bound service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// IAM base URL (token exchange, IAM Identity API)
    pub iam_url: String,
    /// Replaces the computed service URL when set
    pub service_url_override: Option<String>,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            iam_url: api::IAM_URL.to_string(),
            service_url_override: None,
        }
    }
}

impl Endpoints {
    /// Read endpoint overrides through `lookup`, falling back to public endpoints
    pub fn resolve<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        Self {
            iam_url: non_blank(credentials::IAM_URL_ENV_VAR)
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| api::IAM_URL.to_string()),
            service_url_override: non_blank(credentials::SERVICE_URL_ENV_VAR)
                .map(|u| u.trim_end_matches('/').to_string()),
        }
    }

    /// Endpoints pointing every service at one base URL (mock servers)
    pub fn single(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        Self {
            iam_url: base.clone(),
            service_url_override: Some(base),
        }
    }

    /// Base URL for `service`, substituting the region where needed
    pub fn service_url(&self, service: Service, region: Option<&str>) -> Result<String> {
        if let Some(ref url) = self.service_url_override {
            return Ok(url.clone());
        }

        let template = match service {
            Service::IamIdentity => return Ok(self.iam_url.clone()),
            Service::CodeEngine => api::CODE_ENGINE_URL,
            Service::Vpc => api::VPC_URL,
        };

        let region = region.ok_or_else(|| {
            CloudError::Config(format!(
                "{} requires a region. Use --region or set {}",
                service,
                service.region_env_vars().join(" / ")
            ))
        })?;

        if !is_valid_region(region) {
            return Err(CloudError::Config(format!("Invalid region '{}'", region)));
        }

        Ok(template.replace("{region}", region))
    }
}

/// Region names are lowercase words joined by hyphens (`us-south`, `eu-de`)
fn is_valid_region(region: &str) -> bool {
    !region.is_empty()
        && !region.starts_with('-')
        && !region.ends_with('-')
        && region
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
