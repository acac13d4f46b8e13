use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::directory::{
  Designation, DirectoryError, EmailAddress, Employee, EmployeeStatus, PersonName,
  ports::EmployeeRepository,
};

use super::violates_unique_constraint;

const EMAIL_CONSTRAINT: &str = "employees_email_unique";

#[derive(Debug, FromRow)]
struct EmployeeRow {
  id: Uuid,
  first_name: String,
  last_name: String,
  email: String,
  hire_date: NaiveDate,
  designation: String,
  status: String,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl TryFrom<EmployeeRow> for Employee {
  type Error = DirectoryError;

  fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
    Ok(Employee {
      id: row.id,
      first_name: PersonName::new(row.first_name)?,
      last_name: PersonName::new(row.last_name)?,
      email: EmailAddress::new(row.email)?,
      hire_date: row.hire_date,
      designation: Designation::new(row.designation)?,
      status: EmployeeStatus::from_str(&row.status)?,
      created_at: row.created_at,
      updated_at: row.updated_at,
    })
  }
}

pub struct PostgresEmployeeRepository {
  pool: PgPool,
}

impl PostgresEmployeeRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
  async fn create(&self, employee: Employee) -> Result<Employee, DirectoryError> {
    let result = sqlx::query_as::<_, EmployeeRow>(
      r#"
            INSERT INTO employees (id, first_name, last_name, email, hire_date,
                                   designation, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, first_name, last_name, email, hire_date,
                      designation, status, created_at, updated_at
            "#,
    )
    .bind(employee.id)
    .bind(employee.first_name.value())
    .bind(employee.last_name.value())
    .bind(employee.email.value())
    .bind(employee.hire_date)
    .bind(employee.designation.value())
    .bind(employee.status.as_str())
    .bind(employee.created_at)
    .bind(employee.updated_at)
    .fetch_one(&self.pool)
    .await;

    // A concurrent create can slip past the service's existence check; the
    // constraint reports the same conflict
    match result {
      Ok(row) => row.try_into(),
      Err(e) if violates_unique_constraint(&e, EMAIL_CONSTRAINT) => {
        Err(DirectoryError::EmployeeEmailAlreadyExists)
      }
      Err(e) => Err(e.into()),
    }
  }

  async fn update(&self, employee: Employee) -> Result<Employee, DirectoryError> {
    let result = sqlx::query_as::<_, EmployeeRow>(
      r#"
            UPDATE employees
            SET first_name = $2, last_name = $3, email = $4,
                designation = $5, status = $6, updated_at = $7
            WHERE id = $1
            RETURNING id, first_name, last_name, email, hire_date,
                      designation, status, created_at, updated_at
            "#,
    )
    .bind(employee.id)
    .bind(employee.first_name.value())
    .bind(employee.last_name.value())
    .bind(employee.email.value())
    .bind(employee.designation.value())
    .bind(employee.status.as_str())
    .bind(employee.updated_at)
    .fetch_one(&self.pool)
    .await;

    match result {
      Ok(row) => row.try_into(),
      Err(e) if violates_unique_constraint(&e, EMAIL_CONSTRAINT) => {
        Err(DirectoryError::EmployeeEmailAlreadyExists)
      }
      Err(e) => Err(e.into()),
    }
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, DirectoryError> {
    let row = sqlx::query_as::<_, EmployeeRow>(
      r#"
            SELECT id, first_name, last_name, email, hire_date,
                   designation, status, created_at, updated_at
            FROM employees
            WHERE id = $1
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    row.map(|r| r.try_into()).transpose()
  }

  async fn find_all(&self) -> Result<Vec<Employee>, DirectoryError> {
    let rows = sqlx::query_as::<_, EmployeeRow>(
      r#"
            SELECT id, first_name, last_name, email, hire_date,
                   designation, status, created_at, updated_at
            FROM employees
            ORDER BY last_name ASC, first_name ASC
            "#,
    )
    .fetch_all(&self.pool)
    .await?;

    rows.into_iter().map(|r| r.try_into()).collect()
  }

  async fn exists_by_email(
    &self,
    email: &str,
    exclude_id: Option<Uuid>,
  ) -> Result<bool, DirectoryError> {
    let result = if let Some(exclude_id) = exclude_id {
      sqlx::query_scalar::<_, bool>(
        r#"
                SELECT EXISTS(
                    SELECT 1 FROM employees
                    WHERE email = $1 AND id != $2
                )
                "#,
      )
      .bind(email)
      .bind(exclude_id)
      .fetch_one(&self.pool)
      .await?
    } else {
      sqlx::query_scalar::<_, bool>(
        r#"
                SELECT EXISTS(
                    SELECT 1 FROM employees
                    WHERE email = $1
                )
                "#,
      )
      .bind(email)
      .fetch_one(&self.pool)
      .await?
    };

    Ok(result)
  }
}
