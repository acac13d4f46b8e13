use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::project::{Hours, ProjectError, ProjectService};

#[derive(Debug, Deserialize)]
pub struct RecordTimeEntryCommand {
  pub employee_id: Uuid,
  pub project_id: Uuid,
  pub entry_date: NaiveDate,
  pub hours: Decimal,
}

#[derive(Debug, Serialize)]
pub struct RecordTimeEntryResponse {
  pub time_entry_id: Uuid,
  pub employee_id: Uuid,
  pub project_id: Uuid,
  pub entry_date: NaiveDate,
  pub hours: Decimal,
  pub created_at: DateTime<Utc>,
}

pub struct RecordTimeEntryUseCase {
  project_service: Arc<ProjectService>,
}

impl RecordTimeEntryUseCase {
  pub fn new(project_service: Arc<ProjectService>) -> Self {
    Self { project_service }
  }

  pub async fn execute(
    &self,
    command: RecordTimeEntryCommand,
  ) -> Result<RecordTimeEntryResponse, ProjectError> {
    let hours = Hours::new(command.hours)?;

    let entry = self
      .project_service
      .record_time_entry(
        command.employee_id,
        command.project_id,
        command.entry_date,
        hours,
      )
      .await?;

    Ok(RecordTimeEntryResponse {
      time_entry_id: entry.id,
      employee_id: entry.employee_id,
      project_id: entry.project_id,
      entry_date: entry.entry_date,
      hours: entry.hours.value(),
      created_at: entry.created_at,
    })
  }
}
