//! VPC API operations

use log::debug;

use crate::error::Result;
use crate::ibm::record::Collection;
use crate::ibm::resources::ResourceKind;
use crate::ibm::CloudClient;

use super::models::VpcSummary;

impl CloudClient {
    /// Get all VPCs in the client's region
    pub async fn get_vpcs(&self, page_size: Option<u32>) -> Result<Collection> {
        self.list_all(&ResourceKind::Vpcs, page_size).await
    }

    /// Get all subnets in the client's region
    pub async fn get_subnets(&self, page_size: Option<u32>) -> Result<Collection> {
        self.list_all(&ResourceKind::Subnets, page_size).await
    }

    /// Get all virtual server instances in the client's region
    pub async fn get_instances(&self, page_size: Option<u32>) -> Result<Collection> {
        self.list_all(&ResourceKind::Instances, page_size).await
    }

    /// Summarize every VPC in the region
    ///
    /// Each collection is walked exactly once; per-VPC counts are computed
    /// locally.
    pub async fn get_vpc_summaries(&self, page_size: Option<u32>) -> Result<Vec<VpcSummary>> {
        let vpcs = self.get_vpcs(page_size).await?;
        let subnets = self.get_subnets(page_size).await?;
        let instances = self.get_instances(page_size).await?;
        debug!(
            "Summarizing {} VPCs over {} subnets and {} instances",
            vpcs.len(),
            subnets.len(),
            instances.len()
        );

        Ok(vpcs
            .iter()
            .map(|vpc| VpcSummary::from_collections(vpc, &subnets, &instances))
            .collect())
    }
}
