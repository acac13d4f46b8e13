use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::directory::Designation;
use crate::domain::project::{
  Assignment, AssignmentStatus, BillingRate, ProjectError,
  ports::{AssignmentRepository, AssignmentWithDesignation},
};

#[derive(Debug, FromRow)]
struct AssignmentRow {
  id: Uuid,
  employee_id: Uuid,
  project_id: Uuid,
  start_date: NaiveDate,
  end_date: NaiveDate,
  hourly_rate: Decimal,
  status: String,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl TryFrom<AssignmentRow> for Assignment {
  type Error = ProjectError;

  fn try_from(row: AssignmentRow) -> Result<Self, Self::Error> {
    Ok(Assignment {
      id: row.id,
      employee_id: row.employee_id,
      project_id: row.project_id,
      start_date: row.start_date,
      end_date: row.end_date,
      hourly_rate: BillingRate::new(row.hourly_rate)?,
      status: AssignmentStatus::from_str(&row.status)?,
      created_at: row.created_at,
      updated_at: row.updated_at,
    })
  }
}

/// Assignment row joined to the employee's designation.
#[derive(Debug, FromRow)]
struct AssignmentDesignationRow {
  id: Uuid,
  employee_id: Uuid,
  project_id: Uuid,
  start_date: NaiveDate,
  end_date: NaiveDate,
  hourly_rate: Decimal,
  status: String,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
  designation: String,
}

impl TryFrom<AssignmentDesignationRow> for AssignmentWithDesignation {
  type Error = ProjectError;

  fn try_from(row: AssignmentDesignationRow) -> Result<Self, Self::Error> {
    let designation =
      Designation::new(row.designation).map_err(|e| ProjectError::Directory(e.into()))?;

    Ok(AssignmentWithDesignation {
      assignment: Assignment {
        id: row.id,
        employee_id: row.employee_id,
        project_id: row.project_id,
        start_date: row.start_date,
        end_date: row.end_date,
        hourly_rate: BillingRate::new(row.hourly_rate)?,
        status: AssignmentStatus::from_str(&row.status)?,
        created_at: row.created_at,
        updated_at: row.updated_at,
      },
      designation,
    })
  }
}

pub struct PostgresAssignmentRepository {
  pool: PgPool,
}

impl PostgresAssignmentRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl AssignmentRepository for PostgresAssignmentRepository {
  async fn create(&self, assignment: Assignment) -> Result<Assignment, ProjectError> {
    let row = sqlx::query_as::<_, AssignmentRow>(
      r#"
            INSERT INTO assignments (id, employee_id, project_id, start_date,
                                     end_date, hourly_rate, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, employee_id, project_id, start_date,
                      end_date, hourly_rate, status, created_at, updated_at
            "#,
    )
    .bind(assignment.id)
    .bind(assignment.employee_id)
    .bind(assignment.project_id)
    .bind(assignment.start_date)
    .bind(assignment.end_date)
    .bind(assignment.hourly_rate.value())
    .bind(assignment.status.as_str())
    .bind(assignment.created_at)
    .bind(assignment.updated_at)
    .fetch_one(&self.pool)
    .await?;

    row.try_into()
  }

  async fn update(&self, assignment: Assignment) -> Result<Assignment, ProjectError> {
    let row = sqlx::query_as::<_, AssignmentRow>(
      r#"
            UPDATE assignments
            SET start_date = $2, end_date = $3, hourly_rate = $4,
                status = $5, updated_at = $6
            WHERE id = $1
            RETURNING id, employee_id, project_id, start_date,
                      end_date, hourly_rate, status, created_at, updated_at
            "#,
    )
    .bind(assignment.id)
    .bind(assignment.start_date)
    .bind(assignment.end_date)
    .bind(assignment.hourly_rate.value())
    .bind(assignment.status.as_str())
    .bind(assignment.updated_at)
    .fetch_one(&self.pool)
    .await?;

    row.try_into()
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Assignment>, ProjectError> {
    let row = sqlx::query_as::<_, AssignmentRow>(
      r#"
            SELECT id, employee_id, project_id, start_date,
                   end_date, hourly_rate, status, created_at, updated_at
            FROM assignments
            WHERE id = $1
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    row.map(|r| r.try_into()).transpose()
  }

  async fn find_by_project_id(&self, project_id: Uuid) -> Result<Vec<Assignment>, ProjectError> {
    let rows = sqlx::query_as::<_, AssignmentRow>(
      r#"
            SELECT id, employee_id, project_id, start_date,
                   end_date, hourly_rate, status, created_at, updated_at
            FROM assignments
            WHERE project_id = $1
            ORDER BY created_at ASC
            "#,
    )
    .bind(project_id)
    .fetch_all(&self.pool)
    .await?;

    rows.into_iter().map(|r| r.try_into()).collect()
  }

  async fn find_active_with_designations(
    &self,
    project_ids: &[Uuid],
  ) -> Result<Vec<AssignmentWithDesignation>, ProjectError> {
    let rows = sqlx::query_as::<_, AssignmentDesignationRow>(
      r#"
            SELECT a.id, a.employee_id, a.project_id, a.start_date,
                   a.end_date, a.hourly_rate, a.status, a.created_at, a.updated_at,
                   e.designation
            FROM assignments a
            JOIN employees e ON e.id = a.employee_id
            WHERE a.project_id = ANY($1) AND a.status = 'active'
            ORDER BY a.created_at ASC
            "#,
    )
    .bind(project_ids)
    .fetch_all(&self.pool)
    .await?;

    rows.into_iter().map(|r| r.try_into()).collect()
  }
}
