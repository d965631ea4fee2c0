//! Filtering and classification over collected records

use serde_json::Value;
use std::collections::BTreeMap;

use crate::ibm::record::{Collection, Record};

/// Test applied to the value found at a field path (`None` when absent)
pub trait FieldPredicate {
    fn test(&self, value: Option<&Value>) -> bool;
}

impl<F> FieldPredicate for F
where
    F: Fn(Option<&Value>) -> bool,
{
    fn test(&self, value: Option<&Value>) -> bool {
        self(value)
    }
}

/// Common predicates; none of them match an absent field
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// String value starts with the prefix
    StartsWith(String),
    /// String value equals exactly
    Equals(String),
    /// Numeric value equals
    NumberEquals(f64),
    /// Numeric value is greater than or equal
    AtLeast(f64),
    /// Field exists and is not null
    Present,
}

impl FieldPredicate for Predicate {
    fn test(&self, value: Option<&Value>) -> bool {
        let Some(value) = value else {
            return false;
        };
        match self {
            Predicate::StartsWith(prefix) => value.as_str().is_some_and(|s| s.starts_with(prefix)),
            Predicate::Equals(expected) => value.as_str() == Some(expected.as_str()),
            Predicate::NumberEquals(n) => value.as_f64() == Some(*n),
            Predicate::AtLeast(n) => value.as_f64().is_some_and(|v| v >= *n),
            Predicate::Present => !value.is_null(),
        }
    }
}

/// Records whose value at `field_path` satisfies `predicate`, in original order
pub fn filter_by<P>(collection: &[Record], field_path: &str, predicate: &P) -> Collection
where
    P: FieldPredicate + ?Sized,
{
    collection
        .iter()
        .filter(|record| predicate.test(record.field(field_path)))
        .cloned()
        .collect()
}

/// Maps a record to a category label
pub trait Classifier {
    fn classify(&self, record: &Record) -> String;

    /// Closed set of categories, all reported even with zero members
    fn categories(&self) -> Option<&[&'static str]> {
        None
    }
}

/// Count records per category
///
/// Counts always sum to `collection.len()`. Open classifiers only report
/// categories that occur.
pub fn aggregate<C>(collection: &[Record], classifier: &C) -> BTreeMap<String, usize>
where
    C: Classifier + ?Sized,
{
    let mut counts: BTreeMap<String, usize> = classifier
        .categories()
        .unwrap_or_default()
        .iter()
        .map(|c| (c.to_string(), 0))
        .collect();

    for record in collection {
        *counts.entry(classifier.classify(record)).or_insert(0) += 1;
    }
    counts
}

/// Subnets are `public` when attached to a public gateway
pub struct SubnetExposure;

impl SubnetExposure {
    pub const PUBLIC: &'static str = "public";
    pub const PRIVATE: &'static str = "private";
    const ALL: &'static [&'static str] = &[Self::PUBLIC, Self::PRIVATE];
}

impl Classifier for SubnetExposure {
    fn classify(&self, record: &Record) -> String {
        if Predicate::Present.test(record.field("public_gateway")) {
            Self::PUBLIC.to_string()
        } else {
            Self::PRIVATE.to_string()
        }
    }

    fn categories(&self) -> Option<&[&'static str]> {
        Some(Self::ALL)
    }
}

/// Instances are `running` or, in any other state, `stopped`
pub struct InstanceStatus;

impl InstanceStatus {
    pub const RUNNING: &'static str = "running";
    pub const STOPPED: &'static str = "stopped";
    const ALL: &'static [&'static str] = &[Self::RUNNING, Self::STOPPED];
}

impl Classifier for InstanceStatus {
    fn classify(&self, record: &Record) -> String {
        if record.str_field("status") == Some(Self::RUNNING) {
            Self::RUNNING.to_string()
        } else {
            Self::STOPPED.to_string()
        }
    }

    fn categories(&self) -> Option<&[&'static str]> {
        Some(Self::ALL)
    }
}

/// Open classifier on the display value of a field
pub struct ByField<'a>(pub &'a str);

impl ByField<'_> {
    pub const MISSING: &'static str = "<none>";
}

impl Classifier for ByField<'_> {
    fn classify(&self, record: &Record) -> String {
        match record.field(self.0) {
            None | Some(Value::Null) => Self::MISSING.to_string(),
            Some(_) => record.display_field(self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rec(value: Value) -> Record {
        Record::from_value(value).unwrap()
    }

    fn named(names: &[&str]) -> Collection {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| rec(json!({"id": i.to_string(), "name": n})))
            .collect()
    }

    #[test]
    fn test_filter_prefix_keeps_order() {
        let collection = named(&[
            "prod-api", "dev-api", "prod-db", "test", "staging", "prod-web", "qa", "x", "y", "z",
        ]);
        let filtered = filter_by(&collection, "name", &Predicate::StartsWith("prod-".into()));
        let names: Vec<&str> = filtered.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["prod-api", "prod-db", "prod-web"]);
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        let collection = named(&["a", "b"]);
        assert!(filter_by(&collection, "name", &Predicate::Equals("c".into())).is_empty());
    }

    #[test]
    fn test_filter_absent_field_never_matches() {
        let collection = vec![rec(json!({"id": "1"})), rec(json!({"id": "2", "name": "n"}))];
        let filtered = filter_by(&collection, "name", &Predicate::StartsWith(String::new()));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id(), "2");
    }

    #[test]
    fn test_filter_nested_equality() {
        let collection = vec![
            rec(json!({"id": "s1", "vpc": {"id": "v1"}})),
            rec(json!({"id": "s2", "vpc": {"id": "v2"}})),
            rec(json!({"id": "s3", "vpc": {"id": "v1"}})),
        ];
        let filtered = filter_by(&collection, "vpc.id", &Predicate::Equals("v1".into()));
        let ids: Vec<&str> = filtered.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["s1", "s3"]);
    }

    #[test]
    fn test_numeric_predicates() {
        let collection = vec![
            rec(json!({"id": "a", "activity": {"authn_count": 0}})),
            rec(json!({"id": "b", "activity": {"authn_count": 7}})),
            rec(json!({"id": "c"})),
        ];
        let zero = filter_by(&collection, "activity.authn_count", &Predicate::NumberEquals(0.0));
        assert_eq!(zero.len(), 1);
        let busy = filter_by(&collection, "activity.authn_count", &Predicate::AtLeast(5.0));
        assert_eq!(busy[0].id(), "b");
    }

    #[test]
    fn test_closure_predicate_can_default_missing() {
        let collection = vec![rec(json!({"id": "a"})), rec(json!({"id": "b", "n": 3}))];
        let missing_as_zero =
            |v: Option<&Value>| v.and_then(Value::as_u64).unwrap_or(0) == 0;
        let filtered = filter_by(&collection, "n", &missing_as_zero);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id(), "a");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let collection = named(&["prod-1", "dev", "prod-2"]);
        let p = Predicate::StartsWith("prod".into());
        let once = filter_by(&collection, "name", &p);
        let twice = filter_by(&once, "name", &p);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_aggregate_closed_set_reports_zero() {
        let instances = vec![
            rec(json!({"status": "running"})),
            rec(json!({"status": "running"})),
        ];
        let counts = aggregate(&instances, &InstanceStatus);
        assert_eq!(counts.get("running"), Some(&2));
        assert_eq!(counts.get("stopped"), Some(&0));
    }

    #[test]
    fn test_aggregate_non_running_states_count_as_stopped() {
        let instances = vec![
            rec(json!({"status": "running"})),
            rec(json!({"status": "stopped"})),
            rec(json!({"status": "pending"})),
            rec(json!({})),
        ];
        let counts = aggregate(&instances, &InstanceStatus);
        assert_eq!(counts["running"], 1);
        assert_eq!(counts["stopped"], 3);
    }

    #[test]
    fn test_subnet_exposure() {
        let subnets = vec![
            rec(json!({"public_gateway": {"id": "gw-1"}})),
            rec(json!({"public_gateway": null})),
            rec(json!({})),
        ];
        let counts = aggregate(&subnets, &SubnetExposure);
        assert_eq!(counts["public"], 1);
        assert_eq!(counts["private"], 2);
    }

    #[test]
    fn test_aggregate_open_set_omits_zero() {
        let records = vec![
            rec(json!({"format": "registry"})),
            rec(json!({"format": "generic"})),
            rec(json!({"format": "registry"})),
            rec(json!({})),
        ];
        let counts = aggregate(&records, &ByField("format"));
        assert_eq!(counts.len(), 3);
        assert_eq!(counts["registry"], 2);
        assert_eq!(counts["<none>"], 1);
        assert_eq!(counts.values().sum::<usize>(), records.len());
    }

    #[test]
    fn test_aggregate_empty_collection() {
        assert!(aggregate(&[], &ByField("x")).is_empty());
        let counts = aggregate(&[], &SubnetExposure);
        assert_eq!(counts.values().sum::<usize>(), 0);
        assert_eq!(counts.len(), 2);
    }
}
