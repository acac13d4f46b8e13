use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::project::{ProjectError, ProjectService};

#[derive(Debug, Deserialize)]
pub struct ListTimeEntriesCommand {
  pub project_id: Uuid,
  pub start_date: NaiveDate,
  pub end_date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct TimeEntryDto {
  pub id: Uuid,
  pub employee_id: Uuid,
  pub project_id: Uuid,
  pub entry_date: NaiveDate,
  pub hours: Decimal,
}

#[derive(Debug, Serialize)]
pub struct ListTimeEntriesResponse {
  pub time_entries: Vec<TimeEntryDto>,
}

pub struct ListTimeEntriesUseCase {
  project_service: Arc<ProjectService>,
}

impl ListTimeEntriesUseCase {
  pub fn new(project_service: Arc<ProjectService>) -> Self {
    Self { project_service }
  }

  pub async fn execute(
    &self,
    command: ListTimeEntriesCommand,
  ) -> Result<ListTimeEntriesResponse, ProjectError> {
    let entries = self
      .project_service
      .list_time_entries(command.project_id, command.start_date, command.end_date)
      .await?;

    let entry_dtos = entries
      .into_iter()
      .map(|e| TimeEntryDto {
        id: e.id,
        employee_id: e.employee_id,
        project_id: e.project_id,
        entry_date: e.entry_date,
        hours: e.hours.value(),
      })
      .collect();

    Ok(ListTimeEntriesResponse {
      time_entries: entry_dtos,
    })
  }
}
