use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::project::{ProjectError, ProjectName, ProjectService};

#[derive(Debug, Deserialize)]
pub struct CreateProjectCommand {
  pub client_id: Uuid,
  pub project_name: String,
  pub start_date: NaiveDate,
  pub end_date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct CreateProjectResponse {
  pub project_id: Uuid,
  pub project_name: String,
  pub status: String,
  pub created_at: DateTime<Utc>,
}

pub struct CreateProjectUseCase {
  project_service: Arc<ProjectService>,
}

impl CreateProjectUseCase {
  pub fn new(project_service: Arc<ProjectService>) -> Self {
    Self { project_service }
  }

  pub async fn execute(
    &self,
    command: CreateProjectCommand,
  ) -> Result<CreateProjectResponse, ProjectError> {
    let project_name = ProjectName::new(command.project_name)?;

    let project = self
      .project_service
      .create_project(
        command.client_id,
        project_name,
        command.start_date,
        command.end_date,
      )
      .await?;

    Ok(CreateProjectResponse {
      project_id: project.id,
      project_name: project.project_name.into_inner(),
      status: project.status.as_str().to_string(),
      created_at: project.created_at,
    })
  }
}
