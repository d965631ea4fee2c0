//! IAM Identity module

mod api;
mod commands;
mod models;

pub use commands::{
    run_create_service_id_command, run_delete_service_id_command, run_service_id_command,
};
pub use models::{authn_count_equals, ApiKeyDetails, NewServiceId};
