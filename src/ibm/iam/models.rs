//! IAM Identity models

use serde::Deserialize;
use serde_json::{json, Value};

/// Response of `GET /v1/apikeys/details` (only the fields used)
#[derive(Deserialize, Debug, Clone)]
pub struct ApiKeyDetails {
    pub account_id: String,
    #[serde(default)]
    pub iam_id: Option<String>,
}

/// Parameters for creating a service ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewServiceId {
    pub name: String,
    pub description: String,
    /// Name of an API key to create together with the service ID
    pub api_key_name: Option<String>,
}

impl NewServiceId {
    /// Request body for `POST /v1/serviceids`
    pub fn to_body(&self, account_id: &str) -> Value {
        let mut body = json!({
            "account_id": account_id,
            "name": self.name,
            "description": self.description,
        });
        if let Some(key_name) = &self.api_key_name {
            body["apikey"] = json!({
                "name": key_name,
                "description": format!("API key for {}", self.name),
            });
        }
        body
    }
}

/// Predicate on `activity.authn_count`, counting a missing activity as zero
///
/// Service IDs that never authenticated come back without an `activity`
/// block, so the plain numeric predicate would skip exactly those.
pub fn authn_count_equals(expected: u64) -> impl Fn(Option<&Value>) -> bool {
    move |value: Option<&Value>| value.and_then(Value::as_u64).unwrap_or(0) == expected
}
