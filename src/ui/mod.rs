//! Terminal UI helpers: progress spinners and confirmation prompts

mod confirm;
mod spinner;

pub use confirm::{confirm_action, needs_confirmation};
pub use spinner::{create_spinner, finish_spinner, finish_spinner_with_status};
