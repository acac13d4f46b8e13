pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;

// Re-export commonly used types
pub use dtos::ErrorResponse;
pub use errors::ApiError;
pub use middleware::{RequestId, RequestIdExt, RequestIdMiddleware};
pub use routes::{
  configure_assignment_routes, configure_client_routes, configure_employee_routes,
  configure_invoice_routes, configure_project_routes, configure_time_entry_routes,
};
