use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::project::{ProjectError, ProjectService, ProjectStatus};

#[derive(Debug, Deserialize)]
pub struct SetProjectStatusCommand {
  pub project_id: Uuid,
  pub status: String,
}

#[derive(Debug, Serialize)]
pub struct SetProjectStatusResponse {
  pub project_id: Uuid,
  pub status: String,
  pub updated_at: DateTime<Utc>,
}

pub struct SetProjectStatusUseCase {
  project_service: Arc<ProjectService>,
}

impl SetProjectStatusUseCase {
  pub fn new(project_service: Arc<ProjectService>) -> Self {
    Self { project_service }
  }

  pub async fn execute(
    &self,
    command: SetProjectStatusCommand,
  ) -> Result<SetProjectStatusResponse, ProjectError> {
    let status = ProjectStatus::from_str(&command.status)?;

    let project = self
      .project_service
      .set_project_status(command.project_id, status)
      .await?;

    Ok(SetProjectStatusResponse {
      project_id: project.id,
      status: project.status.as_str().to_string(),
      updated_at: project.updated_at,
    })
  }
}
