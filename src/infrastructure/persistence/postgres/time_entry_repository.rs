use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::domain::directory::Designation;
use crate::domain::project::{
  Hours, ProjectError, TimeEntry,
  ports::{BillableEntry, TimeEntryRepository},
};

#[derive(Debug, FromRow)]
struct TimeEntryRow {
  id: Uuid,
  employee_id: Uuid,
  project_id: Uuid,
  entry_date: NaiveDate,
  hours: Decimal,
  created_at: DateTime<Utc>,
}

impl TryFrom<TimeEntryRow> for TimeEntry {
  type Error = ProjectError;

  fn try_from(row: TimeEntryRow) -> Result<Self, Self::Error> {
    Ok(TimeEntry {
      id: row.id,
      employee_id: row.employee_id,
      project_id: row.project_id,
      entry_date: row.entry_date,
      hours: Hours::new(row.hours)?,
      created_at: row.created_at,
    })
  }
}

/// Time entry row joined to the employee's designation.
#[derive(Debug, FromRow)]
struct BillableEntryRow {
  project_id: Uuid,
  designation: String,
  entry_date: NaiveDate,
  hours: Decimal,
}

impl TryFrom<BillableEntryRow> for BillableEntry {
  type Error = ProjectError;

  fn try_from(row: BillableEntryRow) -> Result<Self, Self::Error> {
    let designation =
      Designation::new(row.designation).map_err(|e| ProjectError::Directory(e.into()))?;

    Ok(BillableEntry {
      project_id: row.project_id,
      designation,
      entry_date: row.entry_date,
      hours: Hours::new(row.hours)?,
    })
  }
}

pub struct PostgresTimeEntryRepository {
  pool: PgPool,
}

impl PostgresTimeEntryRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl TimeEntryRepository for PostgresTimeEntryRepository {
  async fn create(&self, entry: TimeEntry) -> Result<TimeEntry, ProjectError> {
    let row = sqlx::query_as::<_, TimeEntryRow>(
      r#"
            INSERT INTO time_entries (id, employee_id, project_id, entry_date, hours, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, employee_id, project_id, entry_date, hours, created_at
            "#,
    )
    .bind(entry.id)
    .bind(entry.employee_id)
    .bind(entry.project_id)
    .bind(entry.entry_date)
    .bind(entry.hours.value())
    .bind(entry.created_at)
    .fetch_one(&self.pool)
    .await?;

    row.try_into()
  }

  async fn find_by_project_and_period(
    &self,
    project_id: Uuid,
    start: NaiveDate,
    end: NaiveDate,
  ) -> Result<Vec<TimeEntry>, ProjectError> {
    let rows = sqlx::query_as::<_, TimeEntryRow>(
      r#"
            SELECT id, employee_id, project_id, entry_date, hours, created_at
            FROM time_entries
            WHERE project_id = $1 AND entry_date >= $2 AND entry_date <= $3
            ORDER BY entry_date ASC
            "#,
    )
    .bind(project_id)
    .bind(start)
    .bind(end)
    .fetch_all(&self.pool)
    .await?;

    rows.into_iter().map(|r| r.try_into()).collect()
  }

  async fn find_billable_in_period(
    &self,
    project_ids: &[Uuid],
    start: NaiveDate,
    end: NaiveDate,
  ) -> Result<Vec<BillableEntry>, ProjectError> {
    let rows = sqlx::query_as::<_, BillableEntryRow>(
      r#"
            SELECT t.project_id, e.designation, t.entry_date, t.hours
            FROM time_entries t
            JOIN employees e ON e.id = t.employee_id
            WHERE t.project_id = ANY($1) AND t.entry_date >= $2 AND t.entry_date <= $3
            ORDER BY t.entry_date ASC
            "#,
    )
    .bind(project_ids)
    .bind(start)
    .bind(end)
    .fetch_all(&self.pool)
    .await?;

    rows.into_iter().map(|r| r.try_into()).collect()
  }
}
