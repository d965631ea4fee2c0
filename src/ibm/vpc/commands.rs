//! VPC command handlers

use crate::cli::{Cli, VpcArgs};
use crate::error::Result;
use crate::ibm::{CloudClient, Record};
use crate::output::{output_records, VPC_COLUMNS};
use crate::ui::{create_spinner, finish_spinner_with_status};

/// Run the VPC summary command
pub async fn run_vpc_command(client: &CloudClient, cli: &Cli, args: &VpcArgs) -> Result<()> {
    let spinner = create_spinner("Fetching VPCs, subnets and instances...", cli.batch);
    let summaries = client.get_vpc_summaries(cli.page_size).await;
    finish_spinner_with_status(spinner, &summaries);

    let records: Vec<Record> = summaries?.iter().map(|s| s.to_record()).collect();
    output_records(&records, VPC_COLUMNS, "VPCs", args.output, cli.no_header)
}
