//! VPC rollup models

use serde::Serialize;

use crate::ibm::query::{aggregate, filter_by, InstanceStatus, Predicate, SubnetExposure};
use crate::ibm::record::Record;

/// One VPC with its subnet and instance counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VpcSummary {
    pub name: String,
    pub id: String,
    pub public_subnets: usize,
    pub private_subnets: usize,
    pub total_instances: usize,
    pub running_instances: usize,
    pub stopped_instances: usize,
}

impl VpcSummary {
    /// Summarize `vpc` from the full subnet and instance listings of its region
    pub fn from_collections(vpc: &Record, subnets: &[Record], instances: &[Record]) -> Self {
        let in_vpc = Predicate::Equals(vpc.id().to_string());

        let vpc_subnets = filter_by(subnets, "vpc.id", &in_vpc);
        let exposure = aggregate(&vpc_subnets, &SubnetExposure);

        let vpc_instances = filter_by(instances, "vpc.id", &in_vpc);
        let status = aggregate(&vpc_instances, &InstanceStatus);

        let count = |counts: &std::collections::BTreeMap<String, usize>, key: &str| {
            counts.get(key).copied().unwrap_or(0)
        };

        Self {
            name: vpc.name().to_string(),
            id: vpc.id().to_string(),
            public_subnets: count(&exposure, SubnetExposure::PUBLIC),
            private_subnets: count(&exposure, SubnetExposure::PRIVATE),
            total_instances: vpc_instances.len(),
            running_instances: count(&status, InstanceStatus::RUNNING),
            stopped_instances: count(&status, InstanceStatus::STOPPED),
        }
    }

    /// Summary as a record, for the shared output formatters
    pub fn to_record(&self) -> Record {
        serde_json::to_value(self)
            .ok()
            .and_then(Record::from_value)
            .unwrap_or_default()
    }
}
