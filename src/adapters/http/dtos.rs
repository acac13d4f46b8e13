use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request to create a new client
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateClientRequest {
  /// Client company name
  #[validate(length(
    min = 1,
    max = 255,
    message = "Client name must be between 1 and 255 characters"
  ))]
  pub name: String,

  /// Billing contact email
  #[validate(email(message = "Invalid email format"))]
  pub contact_email: String,

  /// Contract start date
  pub contract_start_date: NaiveDate,

  /// Contract end date
  pub contract_end_date: NaiveDate,
}

/// Request to update an existing client
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateClientRequest {
  #[validate(length(
    min = 1,
    max = 255,
    message = "Client name must be between 1 and 255 characters"
  ))]
  pub name: String,

  #[validate(email(message = "Invalid email format"))]
  pub contact_email: String,

  pub contract_start_date: NaiveDate,

  pub contract_end_date: NaiveDate,

  /// One of "active" or "inactive"
  #[validate(length(min = 1, message = "Status is required"))]
  pub status: String,
}

/// Request to create a new employee
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
  #[validate(length(
    min = 1,
    max = 100,
    message = "First name must be between 1 and 100 characters"
  ))]
  pub first_name: String,

  #[validate(length(
    min = 1,
    max = 100,
    message = "Last name must be between 1 and 100 characters"
  ))]
  pub last_name: String,

  #[validate(email(message = "Invalid email format"))]
  pub email: String,

  pub hire_date: NaiveDate,

  /// Billing designation, e.g. "Senior Developer"
  #[validate(length(
    min = 1,
    max = 100,
    message = "Designation must be between 1 and 100 characters"
  ))]
  pub designation: String,
}

/// Request to update an existing employee
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateEmployeeRequest {
  #[validate(length(
    min = 1,
    max = 100,
    message = "First name must be between 1 and 100 characters"
  ))]
  pub first_name: String,

  #[validate(length(
    min = 1,
    max = 100,
    message = "Last name must be between 1 and 100 characters"
  ))]
  pub last_name: String,

  #[validate(email(message = "Invalid email format"))]
  pub email: String,

  #[validate(length(
    min = 1,
    max = 100,
    message = "Designation must be between 1 and 100 characters"
  ))]
  pub designation: String,

  /// One of "active" or "inactive"
  #[validate(length(min = 1, message = "Status is required"))]
  pub status: String,
}

/// Request to create a new project
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProjectRequest {
  pub client_id: Uuid,

  #[validate(length(
    min = 1,
    max = 255,
    message = "Project name must be between 1 and 255 characters"
  ))]
  pub project_name: String,

  pub start_date: NaiveDate,

  pub end_date: NaiveDate,
}

/// Request to change a project's status
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetProjectStatusRequest {
  /// One of "active", "completed" or "on_hold"
  #[validate(length(min = 1, message = "Status is required"))]
  pub status: String,
}

/// Query filter for listing projects
#[derive(Debug, Clone, Deserialize)]
pub struct ListProjectsQuery {
  pub client_id: Option<Uuid>,
}

/// Request to assign an employee to a project
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AssignEmployeeRequest {
  pub employee_id: Uuid,

  pub start_date: NaiveDate,

  pub end_date: NaiveDate,

  /// Hourly billing rate for this assignment
  pub hourly_rate: Decimal,
}

/// Request to record worked hours
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordTimeEntryRequest {
  pub employee_id: Uuid,

  pub project_id: Uuid,

  pub entry_date: NaiveDate,

  /// Hours worked on the entry date
  pub hours: Decimal,
}

/// Query filter for listing time entries
#[derive(Debug, Clone, Deserialize)]
pub struct ListTimeEntriesQuery {
  pub project_id: Uuid,
  pub start_date: NaiveDate,
  pub end_date: NaiveDate,
}

/// Request to generate an invoice from billable time
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateInvoiceRequest {
  pub client_id: Uuid,

  pub period_start: NaiveDate,

  pub period_end: NaiveDate,

  pub due_date: NaiveDate,

  /// ISO 4217 currency code, e.g. "USD"
  #[validate(length(equal = 3, message = "Currency must be a 3-letter code"))]
  pub currency: String,
}

/// Query for previewing billable totals without persisting anything
#[derive(Debug, Clone, Deserialize)]
pub struct PreviewBillingQuery {
  pub client_id: Uuid,
  pub period_start: NaiveDate,
  pub period_end: NaiveDate,
}

/// Query filter for listing invoices
#[derive(Debug, Clone, Deserialize)]
pub struct ListInvoicesQuery {
  pub client_id: Option<Uuid>,
  pub status: Option<String>,
}

/// Request to email an invoice to the client
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendInvoiceRequest {
  /// Overrides the client's contact address when present
  #[validate(email(message = "Invalid email format"))]
  pub recipient_email: Option<String>,
}

/// Request to record a payment against an invoice
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordPaymentRequest {
  pub payment_date: NaiveDate,
}

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
  /// Error type/code
  pub error: String,

  /// Human-readable error message
  pub message: String,

  /// Optional detailed error information
  #[serde(skip_serializing_if = "Option::is_none")]
  pub details: Option<serde_json::Value>,
}
