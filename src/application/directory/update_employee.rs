use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::directory::{
  Designation, DirectoryError, DirectoryService, EmailAddress, EmployeeStatus, PersonName,
};

#[derive(Debug, Deserialize)]
pub struct UpdateEmployeeCommand {
  pub employee_id: Uuid,
  pub first_name: String,
  pub last_name: String,
  pub email: String,
  pub designation: String,
  pub status: String,
}

#[derive(Debug, Serialize)]
pub struct UpdateEmployeeResponse {
  pub employee_id: Uuid,
  pub full_name: String,
  pub designation: String,
  pub status: String,
  pub updated_at: DateTime<Utc>,
}

pub struct UpdateEmployeeUseCase {
  directory_service: Arc<DirectoryService>,
}

impl UpdateEmployeeUseCase {
  pub fn new(directory_service: Arc<DirectoryService>) -> Self {
    Self { directory_service }
  }

  pub async fn execute(
    &self,
    command: UpdateEmployeeCommand,
  ) -> Result<UpdateEmployeeResponse, DirectoryError> {
    let status = EmployeeStatus::from_str(&command.status)?;

    let employee = self
      .directory_service
      .update_employee(
        command.employee_id,
        PersonName::new(command.first_name)?,
        PersonName::new(command.last_name)?,
        EmailAddress::new(command.email)?,
        Designation::new(command.designation)?,
        status,
      )
      .await?;

    Ok(UpdateEmployeeResponse {
      employee_id: employee.id,
      full_name: employee.full_name(),
      designation: employee.designation.into_inner(),
      status: employee.status.as_str().to_string(),
      updated_at: employee.updated_at,
    })
  }
}
