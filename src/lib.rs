//! ibmctl - list and manage IBM Cloud resources
//!
//! A CLI and library over three IBM Cloud services that share one IAM
//! authentication flow and one pagination walk:
//!
//! - Code Engine: projects, jobs, secrets, apps, builds
//! - IAM Identity: service IDs (list, show, create, delete, activity filter)
//! - VPC: per-VPC subnet exposure and instance status summaries
//!
//! # Example
//!
//! ```bash
//! export IBMCLOUD_API_KEY=...
//!
//! # List Code Engine projects in a region
//! ibmctl get project --region us-south
//!
//! # Secrets of one project, names starting with "db-"
//! ibmctl get secret --project demo --prefix db- -o json
//!
//! # Service IDs that never authenticated
//! ibmctl get service-id --authn 0
//!
//! # VPC summary
//! ibmctl get vpc --region eu-de
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod ibm;
pub mod output;
pub mod ui;

pub use app::run;
pub use cli::{Cli, Command, CreateResource, DeleteResource, GetResource, OutputFormat};
pub use error::{CloudError, Result};
pub use ibm::{
    aggregate, filter_by, walk_pages, Classifier, CloudClient, Collection, Credential,
    Endpoints, FieldPredicate, Page, PageSource, Predicate, Record, ResourceKind, Service,
};
