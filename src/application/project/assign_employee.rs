use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::project::{BillingRate, ProjectError, ProjectService};

#[derive(Debug, Deserialize)]
pub struct AssignEmployeeCommand {
  pub project_id: Uuid,
  pub employee_id: Uuid,
  pub start_date: NaiveDate,
  pub end_date: NaiveDate,
  pub hourly_rate: Decimal,
}

#[derive(Debug, Serialize)]
pub struct AssignEmployeeResponse {
  pub assignment_id: Uuid,
  pub project_id: Uuid,
  pub employee_id: Uuid,
  pub hourly_rate: Decimal,
  pub status: String,
  pub created_at: DateTime<Utc>,
}

pub struct AssignEmployeeUseCase {
  project_service: Arc<ProjectService>,
}

impl AssignEmployeeUseCase {
  pub fn new(project_service: Arc<ProjectService>) -> Self {
    Self { project_service }
  }

  pub async fn execute(
    &self,
    command: AssignEmployeeCommand,
  ) -> Result<AssignEmployeeResponse, ProjectError> {
    let hourly_rate = BillingRate::new(command.hourly_rate)?;

    let assignment = self
      .project_service
      .assign_employee(
        command.project_id,
        command.employee_id,
        command.start_date,
        command.end_date,
        hourly_rate,
      )
      .await?;

    Ok(AssignEmployeeResponse {
      assignment_id: assignment.id,
      project_id: assignment.project_id,
      employee_id: assignment.employee_id,
      hourly_rate: assignment.hourly_rate.value(),
      status: assignment.status.as_str().to_string(),
      created_at: assignment.created_at,
    })
  }
}
