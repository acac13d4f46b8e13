use super::value_objects::ValueObjectError;
use crate::domain::directory::DirectoryError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ProjectError {
  #[error("Validation error: {0}")]
  Validation(#[from] ValueObjectError),

  #[error("Project not found: {0}")]
  ProjectNotFound(Uuid),

  #[error("Assignment not found: {0}")]
  AssignmentNotFound(Uuid),

  #[error("Client not found: {0}")]
  ClientNotFound(Uuid),

  #[error("Employee not found: {0}")]
  EmployeeNotFound(Uuid),

  #[error("Employee is not active")]
  EmployeeInactive,

  #[error("Employee already has an active assignment on this project")]
  AlreadyAssigned,

  #[error(
    "Designation '{designation}' is already billed at {existing_rate} on this project; \
     a second active assignment must use the same rate"
  )]
  DesignationRateConflict {
    designation: String,
    existing_rate: String,
  },

  // Kept as the source error so a database failure in the directory keeps
  // reading as a database failure at the edge.
  #[error("Directory error: {0}")]
  Directory(#[from] DirectoryError),

  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),
}
