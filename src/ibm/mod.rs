//! IBM Cloud API client module
//!
//! Authentication, paginated listing, record querying and the per-service
//! adapters for Code Engine, IAM Identity and VPC.

mod auth;
mod client;
pub mod code_engine;
mod credentials;
pub mod helpers;
pub mod iam;
pub mod pagination;
pub mod query;
mod record;
mod resources;
mod service;
pub mod vpc;

pub use auth::{AccessToken, IamAuthenticator};
pub use client::CloudClient;
pub use code_engine::{run_project_command, run_project_resource_command, ProjectResource};
pub use credentials::Credential;
pub use iam::{
    run_create_service_id_command, run_delete_service_id_command, run_service_id_command,
    NewServiceId,
};
pub use pagination::{clamp_page_size, next_marker, walk_pages, Page, PageSource};
pub use query::{
    aggregate, filter_by, ByField, Classifier, FieldPredicate, InstanceStatus, Predicate,
    SubnetExposure,
};
pub use record::{Collection, Record};
pub use resources::ResourceKind;
pub use service::{Endpoints, Service};
pub use vpc::{run_vpc_command, VpcSummary};
