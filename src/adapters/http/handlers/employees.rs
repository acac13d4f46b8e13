use actix_web::{HttpResponse, web};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::{
  adapters::http::{
    dtos::{CreateEmployeeRequest, UpdateEmployeeRequest},
    errors::ApiError,
  },
  application::directory::{
    CreateEmployeeCommand, CreateEmployeeUseCase, ListEmployeesUseCase, UpdateEmployeeCommand,
    UpdateEmployeeUseCase,
  },
};

/// Create new employee
/// POST /api/v1/employees
pub async fn create_employee_handler(
  request: web::Json<CreateEmployeeRequest>,
  use_case: web::Data<Arc<CreateEmployeeUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let command = CreateEmployeeCommand {
    first_name: request.first_name.clone(),
    last_name: request.last_name.clone(),
    email: request.email.clone(),
    hire_date: request.hire_date,
    designation: request.designation.clone(),
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Created().json(response))
}

/// List all employees
/// GET /api/v1/employees
pub async fn list_employees_handler(
  use_case: web::Data<Arc<ListEmployeesUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let response = use_case.execute().await?;

  Ok(HttpResponse::Ok().json(response))
}

/// Update an existing employee
/// PUT /api/v1/employees/:employee_id
pub async fn update_employee_handler(
  employee_id: web::Path<Uuid>,
  request: web::Json<UpdateEmployeeRequest>,
  use_case: web::Data<Arc<UpdateEmployeeUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let command = UpdateEmployeeCommand {
    employee_id: *employee_id,
    first_name: request.first_name.clone(),
    last_name: request.last_name.clone(),
    email: request.email.clone(),
    designation: request.designation.clone(),
    status: request.status.clone(),
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(response))
}
