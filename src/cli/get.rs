//! Get command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Resource types for the 'get' command
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// List Code Engine projects, or show one by name
    #[command(visible_alias = "projects", visible_alias = "prj")]
    Project(ProjectArgs),

    /// List jobs in a Code Engine project
    #[command(visible_alias = "jobs")]
    Job(ProjectScopedArgs),

    /// List secrets in a Code Engine project
    #[command(visible_alias = "secrets")]
    Secret(ProjectScopedArgs),

    /// List applications in a Code Engine project
    #[command(visible_alias = "apps")]
    App(ProjectScopedArgs),

    /// List build configurations in a Code Engine project
    #[command(visible_alias = "builds")]
    Build(ProjectScopedArgs),

    /// List IAM service IDs, or show one by ID
    #[command(visible_alias = "service-ids", visible_alias = "sid")]
    ServiceId(ServiceIdArgs),

    /// Summarize VPCs with their subnets and instances
    #[command(visible_alias = "vpcs")]
    Vpc(VpcArgs),
}

/// Arguments for 'get project' subcommand
#[derive(Parser, Debug)]
pub struct ProjectArgs {
    /// Project name (exact match); lists all projects when omitted
    pub name: Option<String>,

    /// Code Engine region (falls back to CODE_ENGINE_REGION, then IBMCLOUD_REGION)
    #[arg(short, long)]
    pub region: Option<String>,

    /// Only show projects whose name starts with this prefix
    #[arg(short, long, conflicts_with = "name")]
    pub prefix: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for subcommands that list resources inside a project
#[derive(Parser, Debug)]
pub struct ProjectScopedArgs {
    /// Project name (exact match)
    #[arg(short = 'P', long)]
    pub project: String,

    /// Code Engine region (falls back to CODE_ENGINE_REGION, then IBMCLOUD_REGION)
    #[arg(short, long)]
    pub region: Option<String>,

    /// Only show resources whose name starts with this prefix
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get service-id' subcommand
#[derive(Parser, Debug)]
pub struct ServiceIdArgs {
    /// Service ID (ServiceId-...); lists all service IDs of the account when omitted
    pub id: Option<String>,

    /// Only show service IDs whose name starts with this prefix
    #[arg(short, long, conflicts_with = "id")]
    pub prefix: Option<String>,

    /// Only show service IDs with exactly this many authentications
    ///
    /// Fetches activity for every listed service ID, one request each.
    #[arg(long, conflicts_with = "id")]
    pub authn: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get vpc' subcommand
#[derive(Parser, Debug)]
pub struct VpcArgs {
    /// VPC region (falls back to IBMCLOUD_REGION)
    #[arg(short, long)]
    pub region: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
