use super::value_objects::{InvoiceStatus, ValueObjectError};
use crate::domain::directory::DirectoryError;
use crate::domain::project::ProjectError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvoiceEntityError {
  #[error("Invalid status transition from {from} to {to}")]
  InvalidStatusTransition {
    from: InvoiceStatus,
    to: InvoiceStatus,
  },
}

#[derive(Debug, Error)]
pub enum EmailError {
  #[error("Email provider rejected the request: {0}")]
  Rejected(String),

  #[error(
    "Email provider is in test mode and can only deliver to the account owner's address: {0}"
  )]
  SandboxRestricted(String),

  #[error("Email transport error: {0}")]
  Transport(String),
}

#[derive(Debug, Error)]
pub enum InvoiceError {
  #[error("Validation error: {0}")]
  Validation(#[from] ValueObjectError),

  #[error("Client not found: {0}")]
  ClientNotFound(Uuid),

  #[error("Invoice not found: {0}")]
  InvoiceNotFound(Uuid),

  #[error("No billable time entries in the requested period")]
  NoBillableTime,

  #[error(
    "No active assignment resolves designation '{designation}' on project {project_id}; \
     cannot attribute the billed hours"
  )]
  UnresolvedAssignment {
    project_id: Uuid,
    designation: String,
  },

  #[error(
    "Conflicting rates for designation '{designation}' on project {project_id}; \
     active assignments disagree"
  )]
  AmbiguousRate {
    project_id: Uuid,
    designation: String,
  },

  #[error("Invoice number '{0}' already exists")]
  InvoiceNumberAlreadyExists(String),

  #[error("Could not allocate a unique invoice number after {0} attempts")]
  NumberAllocationExhausted(u32),

  #[error(transparent)]
  Entity(#[from] InvoiceEntityError),

  #[error("Email delivery failed: {0}")]
  EmailDelivery(#[from] EmailError),

  // Cross-domain failures keep their source variant so the edge can tell a
  // database outage from bad input.
  #[error("Directory error: {0}")]
  Directory(#[from] DirectoryError),

  #[error("Project error: {0}")]
  Project(#[from] ProjectError),

  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),
}
