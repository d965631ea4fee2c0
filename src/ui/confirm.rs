//! Confirmation prompts for destructive operations

use dialoguer::Confirm;

use crate::error::Result;

/// Whether a destructive command must ask before acting
///
/// `--yes` and `--batch` both skip the prompt.
pub fn needs_confirmation(yes: bool, batch: bool) -> bool {
    !yes && !batch
}

/// Ask a yes/no question on the terminal, defaulting to "no"
pub fn confirm_action(prompt: &str) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}
