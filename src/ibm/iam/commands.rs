//! IAM Identity command handlers

use log::{debug, info};

use crate::cli::{Cli, CreateServiceIdArgs, DeleteServiceIdArgs, OutputFormat, ServiceIdArgs};
use crate::error::Result;
use crate::ibm::helpers::apply_name_prefix;
use crate::ibm::query::filter_by;
use crate::ibm::{CloudClient, Credential};
use crate::output::{
    output_records, SERVICE_ID_ACTIVITY_COLUMNS, SERVICE_ID_COLUMNS, SERVICE_ID_DETAIL_COLUMNS,
};
use crate::ui::{
    confirm_action, create_spinner, finish_spinner, finish_spinner_with_status,
    needs_confirmation,
};

use super::models::{authn_count_equals, NewServiceId};

/// Run the service ID list command, or show one service ID
pub async fn run_service_id_command(
    client: &CloudClient,
    credential: &Credential,
    cli: &Cli,
    args: &ServiceIdArgs,
) -> Result<()> {
    if let Some(id) = &args.id {
        let spinner = create_spinner(&format!("Fetching service ID '{}'...", id), cli.batch);
        let record = client.get_service_id(id).await;
        match &record {
            Ok(_) => finish_spinner(spinner, "Found"),
            Err(_) => finish_spinner(spinner, "Not found"),
        }
        return output_records(
            &[record?],
            SERVICE_ID_DETAIL_COLUMNS,
            "service IDs",
            args.output,
            cli.no_header,
        );
    }

    let account_id = client.resolve_account_id(credential.account_id()).await?;

    let spinner = create_spinner(
        &format!("Fetching service IDs for account '{}'...", account_id),
        cli.batch,
    );
    let service_ids = client.get_service_ids(&account_id, cli.page_size).await;
    finish_spinner_with_status(spinner, &service_ids);
    let service_ids = apply_name_prefix(service_ids?, args.prefix.as_deref());

    let Some(expected) = args.authn else {
        return output_records(
            &service_ids,
            SERVICE_ID_COLUMNS,
            "service IDs",
            args.output,
            cli.no_header,
        );
    };

    let spinner = create_spinner(
        &format!("Fetching activity for {} service IDs...", service_ids.len()),
        cli.batch,
    );
    let detailed = client.get_service_ids_with_activity(&service_ids).await;
    finish_spinner_with_status(spinner, &detailed);
    let detailed = detailed?;

    let matching = filter_by(
        &detailed,
        "activity.authn_count",
        &authn_count_equals(expected),
    );
    debug!(
        "{} of {} service IDs have exactly {} authentications",
        matching.len(),
        detailed.len(),
        expected
    );
    output_records(
        &matching,
        SERVICE_ID_ACTIVITY_COLUMNS,
        "service IDs",
        args.output,
        cli.no_header,
    )
}

/// Run the create service ID command
pub async fn run_create_service_id_command(
    client: &CloudClient,
    credential: &Credential,
    cli: &Cli,
    args: &CreateServiceIdArgs,
) -> Result<()> {
    let account_id = client.resolve_account_id(credential.account_id()).await?;
    let new = NewServiceId {
        name: args.name.clone(),
        description: args.description.clone(),
        api_key_name: args.api_key_name.clone(),
    };

    let spinner = create_spinner(&format!("Creating service ID '{}'...", new.name), cli.batch);
    let created = client.create_service_id(&account_id, &new).await;
    match &created {
        Ok(_) => finish_spinner(spinner, "Created"),
        Err(_) => finish_spinner(spinner, "Failed"),
    }
    let created = created?;
    info!("Created service ID {} in account {}", created.id(), account_id);

    if matches!(args.output, OutputFormat::Json | OutputFormat::Yaml) {
        return output_records(
            &[created],
            SERVICE_ID_COLUMNS,
            "service IDs",
            args.output,
            cli.no_header,
        );
    }

    println!("✓ Created service ID '{}' ({})", created.name(), created.id());
    if let Some(api_key) = created.str_field("apikey.apikey") {
        println!(
            "API key '{}': {}",
            created.display_field("apikey.name"),
            api_key
        );
        println!("Save this API key now; it cannot be retrieved again.");
    }
    Ok(())
}

/// Run the delete service ID command
pub async fn run_delete_service_id_command(
    client: &CloudClient,
    cli: &Cli,
    args: &DeleteServiceIdArgs,
) -> Result<()> {
    let spinner = create_spinner(&format!("Looking up '{}'...", args.id), cli.batch);
    let existing = client.get_service_id(&args.id).await;
    match &existing {
        Ok(_) => finish_spinner(spinner, "Found"),
        Err(_) => finish_spinner(spinner, "Not found"),
    }
    let existing = existing?;

    if needs_confirmation(args.yes, cli.batch) {
        let prompt = format!(
            "Delete service ID '{}' ({})?",
            existing.name(),
            existing.id()
        );
        if !confirm_action(&prompt)? {
            println!("Cancelled");
            return Ok(());
        }
    }

    let spinner = create_spinner(&format!("Deleting service ID {}...", args.id), cli.batch);
    let deleted = client.delete_service_id(&args.id).await;
    match &deleted {
        Ok(_) => finish_spinner(spinner, "Deleted"),
        Err(_) => finish_spinner(spinner, "Failed"),
    }
    deleted?;

    println!("✓ Deleted service ID '{}' ({})", existing.name(), args.id);
    Ok(())
}
