//! Code Engine resource models

use std::fmt;

use crate::ibm::resources::ResourceKind;

/// Resources that live inside a Code Engine project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectResource {
    Jobs,
    Secrets,
    Apps,
    Builds,
}

impl ProjectResource {
    /// Listable collection of this resource in `project_id`
    pub fn kind(&self, project_id: &str) -> ResourceKind {
        let project_id = project_id.to_string();
        match self {
            ProjectResource::Jobs => ResourceKind::Jobs { project_id },
            ProjectResource::Secrets => ResourceKind::Secrets { project_id },
            ProjectResource::Apps => ResourceKind::Apps { project_id },
            ProjectResource::Builds => ResourceKind::Builds { project_id },
        }
    }
}

impl fmt::Display for ProjectResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectResource::Jobs => write!(f, "jobs"),
            ProjectResource::Secrets => write!(f, "secrets"),
            ProjectResource::Apps => write!(f, "apps"),
            ProjectResource::Builds => write!(f, "builds"),
        }
    }
}
