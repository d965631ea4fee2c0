//! Code Engine API operations

use log::debug;

use crate::error::{CloudError, Result};
use crate::ibm::query::{filter_by, Predicate};
use crate::ibm::record::{Collection, Record};
use crate::ibm::resources::ResourceKind;
use crate::ibm::CloudClient;

use super::models::ProjectResource;

impl CloudClient {
    /// Get all Code Engine projects in the client's region
    pub async fn get_projects(&self, page_size: Option<u32>) -> Result<Collection> {
        self.list_all(&ResourceKind::Projects, page_size).await
    }

    /// Get a project by exact name
    ///
    /// Names are not unique across a region; the first match in listing
    /// order wins.
    pub async fn get_project_by_name(&self, name: &str, page_size: Option<u32>) -> Result<Record> {
        let projects = self.get_projects(page_size).await?;
        let matches = filter_by(&projects, "name", &Predicate::Equals(name.to_string()));
        if matches.len() > 1 {
            debug!(
                "{} projects named '{}', using the first one",
                matches.len(),
                name
            );
        }
        matches
            .into_iter()
            .next()
            .ok_or_else(|| CloudError::NotFound(format!("No project found with the name '{}'", name)))
    }

    /// Resolve a project name to its ID
    pub async fn resolve_project_id(&self, name: &str, page_size: Option<u32>) -> Result<String> {
        let project = self.get_project_by_name(name, page_size).await?;
        let id = project.id();
        if id.is_empty() {
            return Err(CloudError::Json(format!(
                "Project '{}' has no 'id' field",
                name
            )));
        }
        debug!("Resolved project '{}' to {}", name, id);
        Ok(id.to_string())
    }

    /// Get every resource of one kind inside a project
    pub async fn get_project_resources(
        &self,
        resource: ProjectResource,
        project_id: &str,
        page_size: Option<u32>,
    ) -> Result<Collection> {
        self.list_all(&resource.kind(project_id), page_size).await
    }
}
