pub mod assign_employee;
pub mod complete_assignment;
pub mod create_project;
pub mod list_assignments;
pub mod list_projects;
pub mod list_time_entries;
pub mod record_time_entry;
pub mod set_project_status;

pub use assign_employee::{AssignEmployeeCommand, AssignEmployeeResponse, AssignEmployeeUseCase};
pub use complete_assignment::{
  CompleteAssignmentCommand, CompleteAssignmentResponse, CompleteAssignmentUseCase,
};
pub use create_project::{CreateProjectCommand, CreateProjectResponse, CreateProjectUseCase};
pub use list_assignments::{
  AssignmentDto, ListAssignmentsCommand, ListAssignmentsResponse, ListAssignmentsUseCase,
};
pub use list_projects::{
  ListProjectsCommand, ListProjectsResponse, ListProjectsUseCase, ProjectDto,
};
pub use list_time_entries::{
  ListTimeEntriesCommand, ListTimeEntriesResponse, ListTimeEntriesUseCase, TimeEntryDto,
};
pub use record_time_entry::{
  RecordTimeEntryCommand, RecordTimeEntryResponse, RecordTimeEntryUseCase,
};
pub use set_project_status::{
  SetProjectStatusCommand, SetProjectStatusResponse, SetProjectStatusUseCase,
};
