//! VPC module

mod api;
mod commands;
mod models;

pub use commands::run_vpc_command;
pub use models::VpcSummary;
