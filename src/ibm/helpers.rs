//! Helpers shared by the service command handlers

use log::debug;

use crate::ibm::query::{filter_by, Predicate};
use crate::ibm::record::Collection;

/// Keep records whose `name` starts with `prefix`; no prefix keeps everything
pub fn apply_name_prefix(collection: Collection, prefix: Option<&str>) -> Collection {
    let Some(prefix) = prefix else {
        return collection;
    };
    let total = collection.len();
    let filtered = filter_by(&collection, "name", &Predicate::StartsWith(prefix.to_string()));
    debug!(
        "Prefix '{}' kept {} of {} records",
        prefix,
        filtered.len(),
        total
    );
    filtered
}
