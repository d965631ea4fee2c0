//! CLI argument parsing

mod common;
mod create;
mod delete;
mod get;

use clap::{Parser, Subcommand};

use crate::config::{api, defaults};
use crate::ibm::Service;

pub use common::OutputFormat;
pub use create::{CreateResource, CreateServiceIdArgs};
pub use delete::{DeleteResource, DeleteServiceIdArgs};
pub use get::{GetResource, ProjectArgs, ProjectScopedArgs, ServiceIdArgs, VpcArgs};

/// List and manage IBM Cloud Code Engine, IAM and VPC resources
#[derive(Parser, Debug)]
#[command(name = "ibmctl")]
#[command(version)]
#[command(about = "List and manage IBM Cloud Code Engine, IAM and VPC resources")]
#[command(
    long_about = "List and manage IBM Cloud Code Engine, IAM and VPC resources.\n\n\
    Authentication uses the API key in IBMCLOUD_API_KEY. Regional services read \
    the region from --region, then CODE_ENGINE_REGION (Code Engine only), then \
    IBMCLOUD_REGION."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinners, no interactive prompts
    #[arg(long, global = true, default_value_t = false)]
    pub batch: bool,

    /// Omit table/CSV headers and the total line
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,

    /// Records requested per page (1-100)
    #[arg(
        long,
        global = true,
        value_parser = clap::value_parser!(u32).range(1..=api::MAX_PAGE_SIZE as i64)
    )]
    pub page_size: Option<u32>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get (list or show) resources
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },

    /// Create resources
    Create {
        #[command(subcommand)]
        resource: CreateResource,
    },

    /// Delete resources
    Delete {
        #[command(subcommand)]
        resource: DeleteResource,
    },
}

impl Command {
    /// Service the command talks to
    pub fn service(&self) -> Service {
        match self {
            Command::Get { resource } => match resource {
                GetResource::Project(_)
                | GetResource::Job(_)
                | GetResource::Secret(_)
                | GetResource::App(_)
                | GetResource::Build(_) => Service::CodeEngine,
                GetResource::ServiceId(_) => Service::IamIdentity,
                GetResource::Vpc(_) => Service::Vpc,
            },
            Command::Create {
                resource: CreateResource::ServiceId(_),
            }
            | Command::Delete {
                resource: DeleteResource::ServiceId(_),
            } => Service::IamIdentity,
        }
    }

    /// Region given on the command line, if the command takes one
    pub fn region(&self) -> Option<&str> {
        let Command::Get { resource } = self else {
            return None;
        };
        match resource {
            GetResource::Project(args) => args.region.as_deref(),
            GetResource::Job(args)
            | GetResource::Secret(args)
            | GetResource::App(args)
            | GetResource::Build(args) => args.region.as_deref(),
            GetResource::Vpc(args) => args.region.as_deref(),
            GetResource::ServiceId(_) => None,
        }
    }
}
