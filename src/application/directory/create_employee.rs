use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::directory::{
  Designation, DirectoryError, DirectoryService, EmailAddress, EmployeeData, PersonName,
};

#[derive(Debug, Deserialize)]
pub struct CreateEmployeeCommand {
  pub first_name: String,
  pub last_name: String,
  pub email: String,
  pub hire_date: NaiveDate,
  pub designation: String,
}

#[derive(Debug, Serialize)]
pub struct CreateEmployeeResponse {
  pub employee_id: Uuid,
  pub full_name: String,
  pub designation: String,
  pub status: String,
  pub created_at: DateTime<Utc>,
}

pub struct CreateEmployeeUseCase {
  directory_service: Arc<DirectoryService>,
}

impl CreateEmployeeUseCase {
  pub fn new(directory_service: Arc<DirectoryService>) -> Self {
    Self { directory_service }
  }

  pub async fn execute(
    &self,
    command: CreateEmployeeCommand,
  ) -> Result<CreateEmployeeResponse, DirectoryError> {
    let data = EmployeeData {
      first_name: PersonName::new(command.first_name)?,
      last_name: PersonName::new(command.last_name)?,
      email: EmailAddress::new(command.email)?,
      hire_date: command.hire_date,
      designation: Designation::new(command.designation)?,
    };

    let employee = self.directory_service.create_employee(data).await?;

    Ok(CreateEmployeeResponse {
      employee_id: employee.id,
      full_name: employee.full_name(),
      designation: employee.designation.into_inner(),
      status: employee.status.as_str().to_string(),
      created_at: employee.created_at,
    })
  }
}
