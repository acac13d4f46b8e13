use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::project::{ProjectError, ProjectService};

#[derive(Debug, Deserialize)]
pub struct ListAssignmentsCommand {
  pub project_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct AssignmentDto {
  pub id: Uuid,
  pub employee_id: Uuid,
  pub project_id: Uuid,
  pub start_date: NaiveDate,
  pub end_date: NaiveDate,
  pub hourly_rate: Decimal,
  pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ListAssignmentsResponse {
  pub assignments: Vec<AssignmentDto>,
}

pub struct ListAssignmentsUseCase {
  project_service: Arc<ProjectService>,
}

impl ListAssignmentsUseCase {
  pub fn new(project_service: Arc<ProjectService>) -> Self {
    Self { project_service }
  }

  pub async fn execute(
    &self,
    command: ListAssignmentsCommand,
  ) -> Result<ListAssignmentsResponse, ProjectError> {
    let assignments = self
      .project_service
      .list_assignments(command.project_id)
      .await?;

    let assignment_dtos = assignments
      .into_iter()
      .map(|a| AssignmentDto {
        id: a.id,
        employee_id: a.employee_id,
        project_id: a.project_id,
        start_date: a.start_date,
        end_date: a.end_date,
        hourly_rate: a.hourly_rate.value(),
        status: a.status.as_str().to_string(),
      })
      .collect();

    Ok(ListAssignmentsResponse {
      assignments: assignment_dtos,
    })
  }
}
