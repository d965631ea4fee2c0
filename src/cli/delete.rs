//! Delete command resource definitions and arguments

use clap::{Parser, Subcommand};

/// Resource types for the 'delete' command
#[derive(Subcommand, Debug)]
pub enum DeleteResource {
    /// Delete one IAM service ID
    #[command(visible_alias = "sid")]
    ServiceId(DeleteServiceIdArgs),
}

/// Arguments for 'delete service-id' subcommand
#[derive(Parser, Debug)]
pub struct DeleteServiceIdArgs {
    /// Service ID to delete (ServiceId-...)
    pub id: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}
