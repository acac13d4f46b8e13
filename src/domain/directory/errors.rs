use super::value_objects::ValueObjectError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum DirectoryError {
  #[error("Validation error: {0}")]
  Validation(#[from] ValueObjectError),

  #[error("Client not found: {0}")]
  ClientNotFound(Uuid),

  #[error("Employee not found: {0}")]
  EmployeeNotFound(Uuid),

  #[error("Client name already exists")]
  ClientNameAlreadyExists,

  #[error("Employee email already exists")]
  EmployeeEmailAlreadyExists,

  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),
}
