use actix_web::{HttpResponse, web};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::{
  adapters::http::{
    dtos::{AssignEmployeeRequest, CreateProjectRequest, ListProjectsQuery, SetProjectStatusRequest},
    errors::ApiError,
  },
  application::project::{
    AssignEmployeeCommand, AssignEmployeeUseCase, CompleteAssignmentCommand,
    CompleteAssignmentUseCase, CreateProjectCommand, CreateProjectUseCase, ListAssignmentsCommand,
    ListAssignmentsUseCase, ListProjectsCommand, ListProjectsUseCase, SetProjectStatusCommand,
    SetProjectStatusUseCase,
  },
};

/// Create new project
/// POST /api/v1/projects
pub async fn create_project_handler(
  request: web::Json<CreateProjectRequest>,
  use_case: web::Data<Arc<CreateProjectUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let command = CreateProjectCommand {
    client_id: request.client_id,
    project_name: request.project_name.clone(),
    start_date: request.start_date,
    end_date: request.end_date,
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Created().json(response))
}

/// List projects, optionally filtered by client
/// GET /api/v1/projects?client_id=...
pub async fn list_projects_handler(
  query: web::Query<ListProjectsQuery>,
  use_case: web::Data<Arc<ListProjectsUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let command = ListProjectsCommand {
    client_filter: query.client_id,
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(response))
}

/// Change project status
/// POST /api/v1/projects/:project_id/status
pub async fn set_project_status_handler(
  project_id: web::Path<Uuid>,
  request: web::Json<SetProjectStatusRequest>,
  use_case: web::Data<Arc<SetProjectStatusUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let command = SetProjectStatusCommand {
    project_id: *project_id,
    status: request.status.clone(),
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(response))
}

/// Assign an employee to a project
/// POST /api/v1/projects/:project_id/assignments
pub async fn assign_employee_handler(
  project_id: web::Path<Uuid>,
  request: web::Json<AssignEmployeeRequest>,
  use_case: web::Data<Arc<AssignEmployeeUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let command = AssignEmployeeCommand {
    project_id: *project_id,
    employee_id: request.employee_id,
    start_date: request.start_date,
    end_date: request.end_date,
    hourly_rate: request.hourly_rate,
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Created().json(response))
}

/// List assignments on a project
/// GET /api/v1/projects/:project_id/assignments
pub async fn list_assignments_handler(
  project_id: web::Path<Uuid>,
  use_case: web::Data<Arc<ListAssignmentsUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let command = ListAssignmentsCommand {
    project_id: *project_id,
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(response))
}

/// Mark an assignment as completed
/// POST /api/v1/assignments/:assignment_id/complete
pub async fn complete_assignment_handler(
  assignment_id: web::Path<Uuid>,
  use_case: web::Data<Arc<CompleteAssignmentUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let command = CompleteAssignmentCommand {
    assignment_id: *assignment_id,
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(response))
}
