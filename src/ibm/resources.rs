//! Listable resource kinds and how each one pages

use std::fmt;

use crate::ibm::service::Service;

/// A listable collection on one of the supported services
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceKind {
    /// Code Engine projects
    Projects,
    /// Jobs in a Code Engine project
    Jobs { project_id: String },
    /// Secrets in a Code Engine project
    Secrets { project_id: String },
    /// Applications in a Code Engine project
    Apps { project_id: String },
    /// Build configurations in a Code Engine project
    Builds { project_id: String },
    /// IAM service IDs of an account
    ServiceIds { account_id: String },
    /// VPCs in a region
    Vpcs,
    /// Subnets in a region
    Subnets,
    /// Virtual server instances in a region
    Instances,
}

impl ResourceKind {
    /// Service that serves this collection
    pub fn service(&self) -> Service {
        match self {
            ResourceKind::Projects
            | ResourceKind::Jobs { .. }
            | ResourceKind::Secrets { .. }
            | ResourceKind::Apps { .. }
            | ResourceKind::Builds { .. } => Service::CodeEngine,
            ResourceKind::ServiceIds { .. } => Service::IamIdentity,
            ResourceKind::Vpcs | ResourceKind::Subnets | ResourceKind::Instances => Service::Vpc,
        }
    }

    /// Request path relative to the service base URL
    pub fn path(&self) -> String {
        match self {
            ResourceKind::Projects => "/projects".to_string(),
            ResourceKind::Jobs { project_id } => format!("/projects/{}/jobs", project_id),
            ResourceKind::Secrets { project_id } => format!("/projects/{}/secrets", project_id),
            ResourceKind::Apps { project_id } => format!("/projects/{}/apps", project_id),
            ResourceKind::Builds { project_id } => format!("/projects/{}/builds", project_id),
            ResourceKind::ServiceIds { .. } => "/v1/serviceids".to_string(),
            ResourceKind::Vpcs => "/vpcs".to_string(),
            ResourceKind::Subnets => "/subnets".to_string(),
            ResourceKind::Instances => "/instances".to_string(),
        }
    }

    /// Key of the record array in each page body
    pub fn collection_key(&self) -> &'static str {
        match self {
            ResourceKind::Projects => "projects",
            ResourceKind::Jobs { .. } => "jobs",
            ResourceKind::Secrets { .. } => "secrets",
            ResourceKind::Apps { .. } => "apps",
            ResourceKind::Builds { .. } => "builds",
            ResourceKind::ServiceIds { .. } => "serviceids",
            ResourceKind::Vpcs => "vpcs",
            ResourceKind::Subnets => "subnets",
            ResourceKind::Instances => "instances",
        }
    }

    /// Query parameter carrying the page size
    pub fn page_size_param(&self) -> &'static str {
        match self.service() {
            Service::IamIdentity => "pagesize",
            _ => "limit",
        }
    }

    /// Query parameter carrying the continuation marker
    pub fn marker_param(&self) -> &'static str {
        match self.service() {
            Service::IamIdentity => "pagetoken",
            _ => "start",
        }
    }

    /// Fixed query parameters for every page request
    pub fn fixed_query(&self) -> Vec<(&'static str, String)> {
        match self {
            ResourceKind::ServiceIds { account_id } => vec![
                ("account_id", account_id.clone()),
                ("sort", "modified_at".to_string()),
            ],
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Projects => write!(f, "projects"),
            ResourceKind::Jobs { project_id } => write!(f, "jobs in project '{}'", project_id),
            ResourceKind::Secrets { project_id } => {
                write!(f, "secrets in project '{}'", project_id)
            }
            ResourceKind::Apps { project_id } => write!(f, "apps in project '{}'", project_id),
            ResourceKind::Builds { project_id } => {
                write!(f, "builds in project '{}'", project_id)
            }
            ResourceKind::ServiceIds { account_id } => {
                write!(f, "service IDs for account '{}'", account_id)
            }
            ResourceKind::Vpcs => write!(f, "VPCs"),
            ResourceKind::Subnets => write!(f, "subnets"),
            ResourceKind::Instances => write!(f, "instances"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_scoped_paths() {
        let kind = ResourceKind::Jobs {
            project_id: "p-1".to_string(),
        };
        assert_eq!(kind.path(), "/projects/p-1/jobs");
        assert_eq!(kind.collection_key(), "jobs");
        assert_eq!(kind.service(), Service::CodeEngine);
    }

    #[test]
    fn test_iam_paging_params() {
        let kind = ResourceKind::ServiceIds {
            account_id: "acc".to_string(),
        };
        assert_eq!(kind.page_size_param(), "pagesize");
        assert_eq!(kind.marker_param(), "pagetoken");
        assert_eq!(
            kind.fixed_query(),
            vec![
                ("account_id", "acc".to_string()),
                ("sort", "modified_at".to_string())
            ]
        );
    }

    #[test]
    fn test_start_paging_params() {
        for kind in [ResourceKind::Projects, ResourceKind::Vpcs, ResourceKind::Subnets] {
            assert_eq!(kind.page_size_param(), "limit");
            assert_eq!(kind.marker_param(), "start");
            assert!(kind.fixed_query().is_empty());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(ResourceKind::Vpcs.to_string(), "VPCs");
        let kind = ResourceKind::Secrets {
            project_id: "p-9".to_string(),
        };
        assert_eq!(kind.to_string(), "secrets in project 'p-9'");
    }
}
