use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::project::{ProjectError, ProjectService};

#[derive(Debug, Deserialize)]
pub struct CompleteAssignmentCommand {
  pub assignment_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct CompleteAssignmentResponse {
  pub assignment_id: Uuid,
  pub status: String,
  pub updated_at: DateTime<Utc>,
}

pub struct CompleteAssignmentUseCase {
  project_service: Arc<ProjectService>,
}

impl CompleteAssignmentUseCase {
  pub fn new(project_service: Arc<ProjectService>) -> Self {
    Self { project_service }
  }

  pub async fn execute(
    &self,
    command: CompleteAssignmentCommand,
  ) -> Result<CompleteAssignmentResponse, ProjectError> {
    let assignment = self
      .project_service
      .complete_assignment(command.assignment_id)
      .await?;

    Ok(CompleteAssignmentResponse {
      assignment_id: assignment.id,
      status: assignment.status.as_str().to_string(),
      updated_at: assignment.updated_at,
    })
  }
}
