use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use serde::Serialize;
use std::fmt;

use crate::domain::directory::DirectoryError;
use crate::domain::invoice::{EmailError, InvoiceEntityError, InvoiceError};
use crate::domain::project::ProjectError;

use super::dtos::ErrorResponse;

/// API error type that maps domain errors to HTTP responses
#[derive(Debug, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum ApiError {
  /// Validation error (400 Bad Request)
  Validation(String),

  /// Resource not found (404 Not Found)
  NotFound(String),

  /// Duplicate resource or conflicting state (409 Conflict)
  Conflict(String),

  /// Request is well-formed but the operation cannot proceed (422 Unprocessable Entity)
  Unprocessable {
    code: &'static str,
    message: String,
  },

  /// Upstream delivery failure (502 Bad Gateway)
  BadGateway(String),

  /// Internal server error (500 Internal Server Error)
  Internal(String),
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
      ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
      ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
      ApiError::Unprocessable { message, .. } => write!(f, "Unprocessable: {}", message),
      ApiError::BadGateway(msg) => write!(f, "Upstream error: {}", msg),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Conflict(_) => StatusCode::CONFLICT,
      ApiError::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
      ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    let (error_type, message) = match self {
      ApiError::Validation(msg) => ("validation_error", msg.clone()),
      ApiError::NotFound(msg) => ("not_found", msg.clone()),
      ApiError::Conflict(msg) => ("conflict", msg.clone()),
      ApiError::Unprocessable { code, message } => (*code, message.clone()),
      ApiError::BadGateway(msg) => ("delivery_failed", msg.clone()),
      ApiError::Internal(msg) => {
        // Don't expose internal error details in production
        tracing::error!("Internal error: {}", msg);
        (
          "internal_error",
          "An internal server error occurred".to_string(),
        )
      }
    };

    let error_response = ErrorResponse {
      error: error_type.to_string(),
      message,
      details: None,
    };

    HttpResponse::build(status)
      .content_type(ContentType::json())
      .json(error_response)
  }
}

/// Convert validation errors from validator crate
impl From<validator::ValidationErrors> for ApiError {
  fn from(errors: validator::ValidationErrors) -> Self {
    let messages: Vec<String> = errors
      .field_errors()
      .iter()
      .flat_map(|(field, errors)| {
        errors
          .iter()
          .map(|error| {
            error
              .message
              .as_ref()
              .map(|m| m.to_string())
              .unwrap_or_else(|| format!("Invalid field: {}", field))
          })
          .collect::<Vec<_>>()
      })
      .collect();

    ApiError::Validation(messages.join(", "))
  }
}

impl From<DirectoryError> for ApiError {
  fn from(error: DirectoryError) -> Self {
    match error {
      DirectoryError::Validation(e) => ApiError::Validation(e.to_string()),
      DirectoryError::ClientNotFound(_) | DirectoryError::EmployeeNotFound(_) => {
        ApiError::NotFound(error.to_string())
      }
      DirectoryError::ClientNameAlreadyExists | DirectoryError::EmployeeEmailAlreadyExists => {
        ApiError::Conflict(error.to_string())
      }
      DirectoryError::Database(e) => ApiError::Internal(e.to_string()),
    }
  }
}

impl From<ProjectError> for ApiError {
  fn from(error: ProjectError) -> Self {
    match error {
      ProjectError::Validation(e) => ApiError::Validation(e.to_string()),
      ProjectError::ProjectNotFound(_)
      | ProjectError::AssignmentNotFound(_)
      | ProjectError::ClientNotFound(_)
      | ProjectError::EmployeeNotFound(_) => ApiError::NotFound(error.to_string()),
      ProjectError::EmployeeInactive => ApiError::Unprocessable {
        code: "employee_inactive",
        message: error.to_string(),
      },
      ProjectError::AlreadyAssigned | ProjectError::DesignationRateConflict { .. } => {
        ApiError::Conflict(error.to_string())
      }
      // Delegate to the directory mapping so a database failure stays a 500
      ProjectError::Directory(e) => e.into(),
      ProjectError::Database(e) => ApiError::Internal(e.to_string()),
    }
  }
}

impl From<InvoiceError> for ApiError {
  fn from(error: InvoiceError) -> Self {
    match error {
      InvoiceError::Validation(e) => ApiError::Validation(e.to_string()),
      InvoiceError::ClientNotFound(_) | InvoiceError::InvoiceNotFound(_) => {
        ApiError::NotFound(error.to_string())
      }
      InvoiceError::NoBillableTime => ApiError::Unprocessable {
        code: "no_billable_time",
        message: error.to_string(),
      },
      InvoiceError::UnresolvedAssignment { .. } => ApiError::Unprocessable {
        code: "unresolved_assignment",
        message: error.to_string(),
      },
      InvoiceError::AmbiguousRate { .. } => ApiError::Unprocessable {
        code: "ambiguous_rate",
        message: error.to_string(),
      },
      InvoiceError::InvoiceNumberAlreadyExists(_) => ApiError::Conflict(error.to_string()),
      InvoiceError::NumberAllocationExhausted(_) => ApiError::Internal(error.to_string()),
      InvoiceError::Entity(InvoiceEntityError::InvalidStatusTransition { .. }) => {
        ApiError::Unprocessable {
          code: "invalid_status_transition",
          message: error.to_string(),
        }
      }
      InvoiceError::EmailDelivery(EmailError::SandboxRestricted(msg)) => ApiError::Unprocessable {
        code: "email_sandbox_restricted",
        message: msg,
      },
      InvoiceError::EmailDelivery(e) => ApiError::BadGateway(e.to_string()),
      // Delegate so the source domain decides the status
      InvoiceError::Directory(e) => e.into(),
      InvoiceError::Project(e) => e.into(),
      InvoiceError::Database(e) => ApiError::Internal(e.to_string()),
    }
  }
}
