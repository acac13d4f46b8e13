use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::project::{ProjectError, ProjectService};

#[derive(Debug, Deserialize)]
pub struct ListProjectsCommand {
  pub client_filter: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct ProjectDto {
  pub id: Uuid,
  pub client_id: Uuid,
  pub project_name: String,
  pub start_date: NaiveDate,
  pub end_date: NaiveDate,
  pub status: String,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ListProjectsResponse {
  pub projects: Vec<ProjectDto>,
}

pub struct ListProjectsUseCase {
  project_service: Arc<ProjectService>,
}

impl ListProjectsUseCase {
  pub fn new(project_service: Arc<ProjectService>) -> Self {
    Self { project_service }
  }

  pub async fn execute(
    &self,
    command: ListProjectsCommand,
  ) -> Result<ListProjectsResponse, ProjectError> {
    let projects = self
      .project_service
      .list_projects(command.client_filter)
      .await?;

    let project_dtos = projects
      .into_iter()
      .map(|p| ProjectDto {
        id: p.id,
        client_id: p.client_id,
        project_name: p.project_name.into_inner(),
        start_date: p.start_date,
        end_date: p.end_date,
        status: p.status.as_str().to_string(),
        created_at: p.created_at,
      })
      .collect();

    Ok(ListProjectsResponse {
      projects: project_dtos,
    })
  }
}
