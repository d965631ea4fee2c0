//! Code Engine module

mod api;
mod commands;
mod models;

pub use commands::{run_project_command, run_project_resource_command};
pub use models::ProjectResource;
