//! Code Engine command handlers

use log::debug;

use crate::cli::{Cli, ProjectArgs, ProjectScopedArgs};
use crate::error::Result;
use crate::ibm::helpers::apply_name_prefix;
use crate::ibm::CloudClient;
use crate::output::{
    output_records, Column, APP_COLUMNS, BUILD_COLUMNS, JOB_COLUMNS, PROJECT_COLUMNS,
    SECRET_COLUMNS,
};
use crate::ui::{create_spinner, finish_spinner, finish_spinner_with_status};

use super::models::ProjectResource;

/// Run the project list command, or show one project when a name is given
pub async fn run_project_command(client: &CloudClient, cli: &Cli, args: &ProjectArgs) -> Result<()> {
    if let Some(name) = &args.name {
        let spinner = create_spinner(&format!("Fetching project '{}'...", name), cli.batch);
        let project = client.get_project_by_name(name, cli.page_size).await;
        match &project {
            Ok(_) => finish_spinner(spinner, "Found"),
            Err(_) => finish_spinner(spinner, "Not found"),
        }
        return output_records(
            &[project?],
            PROJECT_COLUMNS,
            "projects",
            args.output,
            cli.no_header,
        );
    }

    let spinner = create_spinner("Fetching projects...", cli.batch);
    let projects = client.get_projects(cli.page_size).await;
    finish_spinner_with_status(spinner, &projects);

    let projects = apply_name_prefix(projects?, args.prefix.as_deref());
    output_records(
        &projects,
        PROJECT_COLUMNS,
        "projects",
        args.output,
        cli.no_header,
    )
}

/// Run a list command for jobs, secrets, apps or builds of one project
pub async fn run_project_resource_command(
    client: &CloudClient,
    cli: &Cli,
    resource: ProjectResource,
    args: &ProjectScopedArgs,
) -> Result<()> {
    let spinner = create_spinner(
        &format!("Resolving project '{}'...", args.project),
        cli.batch,
    );
    let project_id = client.resolve_project_id(&args.project, cli.page_size).await;
    match &project_id {
        Ok(id) => finish_spinner(spinner, id),
        Err(_) => finish_spinner(spinner, "Not found"),
    }
    let project_id = project_id?;

    let spinner = create_spinner(
        &format!("Fetching {} from '{}'...", resource, args.project),
        cli.batch,
    );
    let records = client
        .get_project_resources(resource, &project_id, cli.page_size)
        .await;
    finish_spinner_with_status(spinner, &records);

    let records = apply_name_prefix(records?, args.prefix.as_deref());
    debug!(
        "Showing {} {} from project {}",
        records.len(),
        resource,
        project_id
    );
    output_records(
        &records,
        columns_for(resource),
        &resource.to_string(),
        args.output,
        cli.no_header,
    )
}

fn columns_for(resource: ProjectResource) -> &'static [Column] {
    match resource {
        ProjectResource::Jobs => JOB_COLUMNS,
        ProjectResource::Secrets => SECRET_COLUMNS,
        ProjectResource::Apps => APP_COLUMNS,
        ProjectResource::Builds => BUILD_COLUMNS,
    }
}
