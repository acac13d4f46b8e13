use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::directory::Designation;

use super::entities::{Assignment, Project, TimeEntry};
use super::errors::ProjectError;
use super::value_objects::Hours;

/// An active assignment joined to its employee's designation.
/// This is the denormalized read model the invoicing pipeline consumes.
#[derive(Debug, Clone)]
pub struct AssignmentWithDesignation {
  pub assignment: Assignment,
  pub designation: Designation,
}

/// A time entry joined to its employee's designation, restricted to one
/// billing period. Employee identity is intentionally absent: invoicing
/// groups by designation.
#[derive(Debug, Clone)]
pub struct BillableEntry {
  pub project_id: Uuid,
  pub designation: Designation,
  pub entry_date: NaiveDate,
  pub hours: Hours,
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
  async fn create(&self, project: Project) -> Result<Project, ProjectError>;
  async fn update(&self, project: Project) -> Result<Project, ProjectError>;
  async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, ProjectError>;
  async fn find_by_client_id(&self, client_id: Uuid) -> Result<Vec<Project>, ProjectError>;
  async fn find_all(&self) -> Result<Vec<Project>, ProjectError>;
}

#[async_trait]
pub trait AssignmentRepository: Send + Sync {
  async fn create(&self, assignment: Assignment) -> Result<Assignment, ProjectError>;
  async fn update(&self, assignment: Assignment) -> Result<Assignment, ProjectError>;
  async fn find_by_id(&self, id: Uuid) -> Result<Option<Assignment>, ProjectError>;
  async fn find_by_project_id(&self, project_id: Uuid) -> Result<Vec<Assignment>, ProjectError>;
  /// Active assignments for a set of projects, joined to employee designations.
  async fn find_active_with_designations(
    &self,
    project_ids: &[Uuid],
  ) -> Result<Vec<AssignmentWithDesignation>, ProjectError>;
}

#[async_trait]
pub trait TimeEntryRepository: Send + Sync {
  async fn create(&self, entry: TimeEntry) -> Result<TimeEntry, ProjectError>;
  async fn find_by_project_and_period(
    &self,
    project_id: Uuid,
    start: NaiveDate,
    end: NaiveDate,
  ) -> Result<Vec<TimeEntry>, ProjectError>;
  /// Entries within the inclusive period for a set of projects, joined to
  /// employee designations.
  async fn find_billable_in_period(
    &self,
    project_ids: &[Uuid],
    start: NaiveDate,
    end: NaiveDate,
  ) -> Result<Vec<BillableEntry>, ProjectError>;
}
