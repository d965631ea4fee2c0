//! Create command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Resource types for the 'create' command
#[derive(Subcommand, Debug)]
pub enum CreateResource {
    /// Create an IAM service ID, optionally with an API key
    #[command(visible_alias = "sid")]
    ServiceId(CreateServiceIdArgs),
}

/// Arguments for 'create service-id' subcommand
#[derive(Parser, Debug)]
pub struct CreateServiceIdArgs {
    /// Name of the new service ID
    #[arg(short, long)]
    pub name: String,

    /// Description of the new service ID
    #[arg(short, long)]
    pub description: String,

    /// Also create an API key with this name for the service ID
    #[arg(long)]
    pub api_key_name: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
