pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{Assignment, Project, TimeEntry};
pub use errors::ProjectError;
pub use ports::{
  AssignmentRepository, AssignmentWithDesignation, BillableEntry, ProjectRepository,
  TimeEntryRepository,
};
pub use services::ProjectService;
pub use value_objects::{AssignmentStatus, BillingRate, Hours, ProjectName, ProjectStatus};
