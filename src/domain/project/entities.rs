use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{AssignmentStatus, BillingRate, Hours, ProjectName, ProjectStatus};

// Project - belongs to exactly one client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
  pub id: Uuid,
  pub client_id: Uuid,
  pub project_name: ProjectName,
  pub start_date: NaiveDate,
  pub end_date: NaiveDate,
  pub status: ProjectStatus,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Project {
  pub fn new(
    client_id: Uuid,
    project_name: ProjectName,
    start_date: NaiveDate,
    end_date: NaiveDate,
  ) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      client_id,
      project_name,
      start_date,
      end_date,
      status: ProjectStatus::Active,
      created_at: now,
      updated_at: now,
    }
  }

  pub fn set_status(&mut self, status: ProjectStatus) {
    self.status = status;
    self.updated_at = Utc::now();
  }
}

// Assignment - links an employee to a project and carries the billing rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
  pub id: Uuid,
  pub employee_id: Uuid,
  pub project_id: Uuid,
  pub start_date: NaiveDate,
  pub end_date: NaiveDate,
  pub hourly_rate: BillingRate,
  pub status: AssignmentStatus,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Assignment {
  pub fn new(
    employee_id: Uuid,
    project_id: Uuid,
    start_date: NaiveDate,
    end_date: NaiveDate,
    hourly_rate: BillingRate,
  ) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      employee_id,
      project_id,
      start_date,
      end_date,
      hourly_rate,
      status: AssignmentStatus::Active,
      created_at: now,
      updated_at: now,
    }
  }

  pub fn complete(&mut self) {
    self.status = AssignmentStatus::Completed;
    self.updated_at = Utc::now();
  }

  pub fn is_active(&self) -> bool {
    self.status == AssignmentStatus::Active
  }
}

// Time Entry - immutable once created; invoicing snapshots it at generation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
  pub id: Uuid,
  pub employee_id: Uuid,
  pub project_id: Uuid,
  pub entry_date: NaiveDate,
  pub hours: Hours,
  pub created_at: DateTime<Utc>,
}

impl TimeEntry {
  pub fn new(employee_id: Uuid, project_id: Uuid, entry_date: NaiveDate, hours: Hours) -> Self {
    Self {
      id: Uuid::new_v4(),
      employee_id,
      project_id,
      entry_date,
      hours,
      created_at: Utc::now(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  #[test]
  fn test_project_starts_active() {
    let project = Project::new(
      Uuid::new_v4(),
      ProjectName::new("Platform Rebuild".to_string()).unwrap(),
      NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
      NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
    );
    assert_eq!(project.status, ProjectStatus::Active);
  }

  #[test]
  fn test_assignment_complete() {
    let mut assignment = Assignment::new(
      Uuid::new_v4(),
      Uuid::new_v4(),
      NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
      NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
      BillingRate::new(dec!(200)).unwrap(),
    );
    assert!(assignment.is_active());
    assignment.complete();
    assert!(!assignment.is_active());
    assert_eq!(assignment.status, AssignmentStatus::Completed);
  }

  #[test]
  fn test_time_entry_creation() {
    let entry = TimeEntry::new(
      Uuid::new_v4(),
      Uuid::new_v4(),
      NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
      Hours::new(dec!(7.5)).unwrap(),
    );
    assert_eq!(entry.hours.value(), dec!(7.5));
  }
}
