use actix_web::web;
use std::sync::Arc;

use crate::application::directory::{
  CreateClientUseCase, CreateEmployeeUseCase, ListClientsUseCase, ListEmployeesUseCase,
  UpdateClientUseCase, UpdateEmployeeUseCase,
};
use crate::application::invoice::{
  GenerateInvoiceUseCase, GetInvoiceDetailsUseCase, ListInvoicesUseCase, PreviewBillingUseCase,
  RecordPaymentUseCase, SendInvoiceUseCase,
};
use crate::application::project::{
  AssignEmployeeUseCase, CompleteAssignmentUseCase, CreateProjectUseCase, ListAssignmentsUseCase,
  ListProjectsUseCase, ListTimeEntriesUseCase, RecordTimeEntryUseCase, SetProjectStatusUseCase,
};

use super::handlers::clients::{create_client_handler, list_clients_handler, update_client_handler};
use super::handlers::employees::{
  create_employee_handler, list_employees_handler, update_employee_handler,
};
use super::handlers::invoices::{
  generate_invoice_handler, get_invoice_handler, list_invoices_handler, preview_billing_handler,
  record_payment_handler, send_invoice_handler,
};
use super::handlers::projects::{
  assign_employee_handler, complete_assignment_handler, create_project_handler,
  list_assignments_handler, list_projects_handler, set_project_status_handler,
};
use super::handlers::time_entries::{list_time_entries_handler, record_time_entry_handler};

/// Configure client routes
///
/// Mounts all client-related endpoints under the provided scope.
/// All routes are prefixed with the scope path (e.g., /api/v1/clients).
///
/// # Routes
///
/// - POST / - Create a new client
/// - GET / - List all clients
/// - PUT /:client_id - Update an existing client
pub fn configure_client_routes(
  cfg: &mut web::ServiceConfig,
  create_use_case: Arc<CreateClientUseCase>,
  list_use_case: Arc<ListClientsUseCase>,
  update_use_case: Arc<UpdateClientUseCase>,
) {
  cfg
    .app_data(web::Data::new(create_use_case))
    .app_data(web::Data::new(list_use_case))
    .app_data(web::Data::new(update_use_case))
    .route("", web::post().to(create_client_handler))
    .route("", web::get().to(list_clients_handler))
    .route("/{client_id}", web::put().to(update_client_handler));
}

/// Configure employee routes
///
/// # Routes
///
/// - POST / - Create a new employee
/// - GET / - List all employees
/// - PUT /:employee_id - Update an existing employee
pub fn configure_employee_routes(
  cfg: &mut web::ServiceConfig,
  create_use_case: Arc<CreateEmployeeUseCase>,
  list_use_case: Arc<ListEmployeesUseCase>,
  update_use_case: Arc<UpdateEmployeeUseCase>,
) {
  cfg
    .app_data(web::Data::new(create_use_case))
    .app_data(web::Data::new(list_use_case))
    .app_data(web::Data::new(update_use_case))
    .route("", web::post().to(create_employee_handler))
    .route("", web::get().to(list_employees_handler))
    .route("/{employee_id}", web::put().to(update_employee_handler));
}

/// Configure project routes
///
/// # Routes
///
/// - POST / - Create a new project
/// - GET / - List projects (optionally filtered by client)
/// - POST /:project_id/status - Change project status
/// - POST /:project_id/assignments - Assign an employee
/// - GET /:project_id/assignments - List assignments on a project
pub fn configure_project_routes(
  cfg: &mut web::ServiceConfig,
  create_use_case: Arc<CreateProjectUseCase>,
  list_use_case: Arc<ListProjectsUseCase>,
  set_status_use_case: Arc<SetProjectStatusUseCase>,
  assign_use_case: Arc<AssignEmployeeUseCase>,
  list_assignments_use_case: Arc<ListAssignmentsUseCase>,
) {
  cfg
    .app_data(web::Data::new(create_use_case))
    .app_data(web::Data::new(list_use_case))
    .app_data(web::Data::new(set_status_use_case))
    .app_data(web::Data::new(assign_use_case))
    .app_data(web::Data::new(list_assignments_use_case))
    .route("", web::post().to(create_project_handler))
    .route("", web::get().to(list_projects_handler))
    .route(
      "/{project_id}/status",
      web::post().to(set_project_status_handler),
    )
    .route(
      "/{project_id}/assignments",
      web::post().to(assign_employee_handler),
    )
    .route(
      "/{project_id}/assignments",
      web::get().to(list_assignments_handler),
    );
}

/// Configure assignment routes
///
/// # Routes
///
/// - POST /:assignment_id/complete - Mark an assignment as completed
pub fn configure_assignment_routes(
  cfg: &mut web::ServiceConfig,
  complete_use_case: Arc<CompleteAssignmentUseCase>,
) {
  cfg.app_data(web::Data::new(complete_use_case)).route(
    "/{assignment_id}/complete",
    web::post().to(complete_assignment_handler),
  );
}

/// Configure time entry routes
///
/// # Routes
///
/// - POST / - Record worked hours
/// - GET / - List time entries for a project within a date range
pub fn configure_time_entry_routes(
  cfg: &mut web::ServiceConfig,
  record_use_case: Arc<RecordTimeEntryUseCase>,
  list_use_case: Arc<ListTimeEntriesUseCase>,
) {
  cfg
    .app_data(web::Data::new(record_use_case))
    .app_data(web::Data::new(list_use_case))
    .route("", web::post().to(record_time_entry_handler))
    .route("", web::get().to(list_time_entries_handler));
}

/// Configure invoice routes
///
/// # Routes
///
/// - POST / - Generate an invoice from billable time
/// - GET / - List invoices (optionally filtered by client and status)
/// - GET /preview - Preview billable totals without persisting anything
/// - GET /:invoice_id - Get a single invoice with line items
/// - POST /:invoice_id/send - Email the invoice to the client
/// - POST /:invoice_id/payment - Record a payment
pub fn configure_invoice_routes(
  cfg: &mut web::ServiceConfig,
  generate_use_case: Arc<GenerateInvoiceUseCase>,
  preview_use_case: Arc<PreviewBillingUseCase>,
  list_use_case: Arc<ListInvoicesUseCase>,
  details_use_case: Arc<GetInvoiceDetailsUseCase>,
  send_use_case: Arc<SendInvoiceUseCase>,
  payment_use_case: Arc<RecordPaymentUseCase>,
) {
  cfg
    .app_data(web::Data::new(generate_use_case))
    .app_data(web::Data::new(preview_use_case))
    .app_data(web::Data::new(list_use_case))
    .app_data(web::Data::new(details_use_case))
    .app_data(web::Data::new(send_use_case))
    .app_data(web::Data::new(payment_use_case))
    .route("", web::post().to(generate_invoice_handler))
    .route("", web::get().to(list_invoices_handler))
    // Literal segment must be registered before the dynamic one
    .route("/preview", web::get().to(preview_billing_handler))
    .route("/{invoice_id}", web::get().to(get_invoice_handler))
    .route("/{invoice_id}/send", web::post().to(send_invoice_handler))
    .route(
      "/{invoice_id}/payment",
      web::post().to(record_payment_handler),
    );
}
