use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::directory::{DirectoryError, DirectoryService};

#[derive(Debug, Serialize)]
pub struct EmployeeDto {
  pub id: Uuid,
  pub first_name: String,
  pub last_name: String,
  pub email: String,
  pub hire_date: NaiveDate,
  pub designation: String,
  pub status: String,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ListEmployeesResponse {
  pub employees: Vec<EmployeeDto>,
}

pub struct ListEmployeesUseCase {
  directory_service: Arc<DirectoryService>,
}

impl ListEmployeesUseCase {
  pub fn new(directory_service: Arc<DirectoryService>) -> Self {
    Self { directory_service }
  }

  pub async fn execute(&self) -> Result<ListEmployeesResponse, DirectoryError> {
    let employees = self.directory_service.list_employees().await?;

    let employee_dtos = employees
      .into_iter()
      .map(|e| EmployeeDto {
        id: e.id,
        first_name: e.first_name.value().to_string(),
        last_name: e.last_name.value().to_string(),
        email: e.email.into_inner(),
        hire_date: e.hire_date,
        designation: e.designation.into_inner(),
        status: e.status.as_str().to_string(),
        created_at: e.created_at,
      })
      .collect();

    Ok(ListEmployeesResponse {
      employees: employee_dtos,
    })
  }
}
