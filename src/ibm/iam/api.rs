//! IAM Identity API operations

use log::debug;

use crate::error::{CloudError, Result};
use crate::ibm::record::{Collection, Record};
use crate::ibm::resources::ResourceKind;
use crate::ibm::CloudClient;

use super::models::{ApiKeyDetails, NewServiceId};

impl CloudClient {
    /// Account that owns the session's API key
    pub async fn get_account_id(&self) -> Result<String> {
        let url = self.url("/v1/apikeys/details", &[]);
        debug!("Resolving account ID from: {}", url);

        let response = self
            .get(&url)
            .await?
            .header("IAM-ApiKey", self.api_key())
            .send()
            .await?;
        let details: ApiKeyDetails = self.parse_api_response(response, "API key details").await?;
        Ok(details.account_id)
    }

    /// Configured account ID, or the one resolved from the API key
    pub async fn resolve_account_id(&self, configured: Option<&str>) -> Result<String> {
        match configured {
            Some(account_id) => {
                debug!("Using configured account ID: {}", account_id);
                Ok(account_id.to_string())
            }
            None => self.get_account_id().await,
        }
    }

    /// Get all service IDs of an account, most recently modified first
    pub async fn get_service_ids(
        &self,
        account_id: &str,
        page_size: Option<u32>,
    ) -> Result<Collection> {
        let kind = ResourceKind::ServiceIds {
            account_id: account_id.to_string(),
        };
        self.list_all(&kind, page_size).await
    }

    /// Get one service ID including its activity and history
    pub async fn get_service_id(&self, id: &str) -> Result<Record> {
        let url = self.url(
            &format!("/v1/serviceids/{}", urlencoding::encode(id)),
            &[
                ("include_activity", "true".to_string()),
                ("include_history", "true".to_string()),
            ],
        );
        self.get_json(&url, &format!("service ID '{}'", id)).await
    }

    /// Re-fetch each service ID with its activity, one request at a time
    pub async fn get_service_ids_with_activity(&self, service_ids: &[Record]) -> Result<Collection> {
        let mut detailed = Vec::with_capacity(service_ids.len());
        for (i, service_id) in service_ids.iter().enumerate() {
            debug!(
                "Fetching activity {}/{} for {}",
                i + 1,
                service_ids.len(),
                service_id.id()
            );
            detailed.push(self.get_service_id(service_id.id()).await?);
        }
        Ok(detailed)
    }

    /// Create a service ID, optionally with an API key attached
    pub async fn create_service_id(&self, account_id: &str, new: &NewServiceId) -> Result<Record> {
        let url = self.url("/v1/serviceids", &[]);
        debug!("Creating service ID '{}' at: {}", new.name, url);

        let response = self
            .post(&url)
            .await?
            .json(&new.to_body(account_id))
            .send()
            .await?;
        self.parse_api_response(response, &format!("create service ID '{}'", new.name))
            .await
    }

    /// Delete a service ID
    pub async fn delete_service_id(&self, id: &str) -> Result<()> {
        if id.trim().is_empty() {
            return Err(CloudError::Config("Service ID must not be empty".to_string()));
        }
        let url = self.url(&format!("/v1/serviceids/{}", urlencoding::encode(id)), &[]);
        debug!("Deleting service ID at: {}", url);

        let response = self.delete(&url).await?.send().await?;
        self.expect_success(response, &format!("delete service ID '{}'", id))
            .await
    }
}
