//! Column sets for each listed resource

use super::Column;

pub const PROJECT_COLUMNS: &[Column] = &[
    Column::new("Name", "name"),
    Column::new("ID", "id"),
    Column::new("Region", "region"),
    Column::new("Status", "status"),
    Column::new("Created At", "created_at"),
];

pub const JOB_COLUMNS: &[Column] = &[
    Column::new("Name", "name"),
    Column::new("ID", "id"),
    Column::new("Image", "image_reference"),
    Column::new("Run Mode", "run_mode"),
    Column::new("Created At", "created_at"),
];

pub const SECRET_COLUMNS: &[Column] = &[
    Column::new("Name", "name"),
    Column::new("ID", "id"),
    Column::new("Format", "format"),
    Column::new("Created At", "created_at"),
];

pub const APP_COLUMNS: &[Column] = &[
    Column::new("Name", "name"),
    Column::new("ID", "id"),
    Column::new("Status", "status"),
    Column::new("URL", "endpoint"),
    Column::new("Created At", "created_at"),
];

pub const BUILD_COLUMNS: &[Column] = &[
    Column::new("Name", "name"),
    Column::new("ID", "id"),
    Column::new("Status", "status"),
    Column::new("Strategy", "strategy_type"),
    Column::new("Output Image", "output_image"),
];

pub const SERVICE_ID_COLUMNS: &[Column] = &[
    Column::new("Name", "name"),
    Column::new("ID", "id"),
    Column::new("Description", "description"),
    Column::new("Created At", "created_at"),
];

/// Service IDs listed together with their authentication activity
pub const SERVICE_ID_ACTIVITY_COLUMNS: &[Column] = &[
    Column::new("Name", "name"),
    Column::new("ID", "id"),
    Column::new("Authn", "activity.authn_count").or("0"),
    Column::new("Last Authn", "activity.last_authn").or("never"),
];

pub const SERVICE_ID_DETAIL_COLUMNS: &[Column] = &[
    Column::new("Name", "name"),
    Column::new("ID", "id"),
    Column::new("IAM ID", "iam_id"),
    Column::new("Locked", "locked"),
    Column::new("Authn", "activity.authn_count").or("0"),
    Column::new("Last Authn", "activity.last_authn").or("never"),
    Column::new("Created At", "created_at"),
];

pub const VPC_COLUMNS: &[Column] = &[
    Column::new("Name", "name"),
    Column::new("ID", "id"),
    Column::new("Public Subnets", "public_subnets"),
    Column::new("Private Subnets", "private_subnets"),
    Column::new("Instances", "total_instances"),
    Column::new("Running", "running_instances"),
    Column::new("Stopped", "stopped_instances"),
];
