use actix_web::{HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::{
  adapters::http::{
    dtos::{ListTimeEntriesQuery, RecordTimeEntryRequest},
    errors::ApiError,
  },
  application::project::{
    ListTimeEntriesCommand, ListTimeEntriesUseCase, RecordTimeEntryCommand,
    RecordTimeEntryUseCase,
  },
};

/// Record worked hours
/// POST /api/v1/time-entries
pub async fn record_time_entry_handler(
  request: web::Json<RecordTimeEntryRequest>,
  use_case: web::Data<Arc<RecordTimeEntryUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let command = RecordTimeEntryCommand {
    employee_id: request.employee_id,
    project_id: request.project_id,
    entry_date: request.entry_date,
    hours: request.hours,
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Created().json(response))
}

/// List time entries for a project within a date range
/// GET /api/v1/time-entries?project_id=...&start_date=...&end_date=...
pub async fn list_time_entries_handler(
  query: web::Query<ListTimeEntriesQuery>,
  use_case: web::Data<Arc<ListTimeEntriesUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let command = ListTimeEntriesCommand {
    project_id: query.project_id,
    start_date: query.start_date,
    end_date: query.end_date,
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(response))
}
