//! Command dispatch
//!
//! Configuration is resolved through a lookup function so the whole command
//! path can run against a fake environment and a mock server.

use log::debug;

use crate::cli::{Cli, Command, CreateResource, DeleteResource, GetResource};
use crate::error::Result;
use crate::ibm::{
    run_create_service_id_command, run_delete_service_id_command, run_project_command,
    run_project_resource_command, run_service_id_command, run_vpc_command, CloudClient,
    Credential, Endpoints, ProjectResource,
};
use crate::ui::{create_spinner, finish_spinner};

/// Run one parsed command
///
/// Credentials and endpoints are read through `lookup` before any request is
/// made; a missing API key or region fails without touching the network.
pub async fn run<F>(cli: &Cli, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let service = cli.command.service();
    let credential = Credential::resolve(&lookup, service, cli.command.region())?;
    let endpoints = Endpoints::resolve(&lookup);
    debug!(
        "Resolved {:?} for {} (IAM: {})",
        credential, service, endpoints.iam_url
    );

    let spinner = create_spinner(&format!("Authenticating with {}...", service), cli.batch);
    let client = CloudClient::authenticate(&credential, service, &endpoints).await;
    match &client {
        Ok(_) => finish_spinner(spinner, "Authenticated"),
        Err(_) => finish_spinner(spinner, "Authentication failed"),
    }
    let client = client?;

    match &cli.command {
        Command::Get { resource } => match resource {
            GetResource::Project(args) => run_project_command(&client, cli, args).await,
            GetResource::Job(args) => {
                run_project_resource_command(&client, cli, ProjectResource::Jobs, args).await
            }
            GetResource::Secret(args) => {
                run_project_resource_command(&client, cli, ProjectResource::Secrets, args).await
            }
            GetResource::App(args) => {
                run_project_resource_command(&client, cli, ProjectResource::Apps, args).await
            }
            GetResource::Build(args) => {
                run_project_resource_command(&client, cli, ProjectResource::Builds, args).await
            }
            GetResource::ServiceId(args) => {
                run_service_id_command(&client, &credential, cli, args).await
            }
            GetResource::Vpc(args) => run_vpc_command(&client, cli, args).await,
        },
        Command::Create {
            resource: CreateResource::ServiceId(args),
        } => run_create_service_id_command(&client, &credential, cli, args).await,
        Command::Delete {
            resource: DeleteResource::ServiceId(args),
        } => run_delete_service_id_command(&client, cli, args).await,
    }
}
