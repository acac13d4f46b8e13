use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::project::{
  Project, ProjectError, ProjectName, ProjectStatus, ports::ProjectRepository,
};

#[derive(Debug, FromRow)]
struct ProjectRow {
  id: Uuid,
  client_id: Uuid,
  project_name: String,
  start_date: NaiveDate,
  end_date: NaiveDate,
  status: String,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl TryFrom<ProjectRow> for Project {
  type Error = ProjectError;

  fn try_from(row: ProjectRow) -> Result<Self, Self::Error> {
    Ok(Project {
      id: row.id,
      client_id: row.client_id,
      project_name: ProjectName::new(row.project_name)?,
      start_date: row.start_date,
      end_date: row.end_date,
      status: ProjectStatus::from_str(&row.status)?,
      created_at: row.created_at,
      updated_at: row.updated_at,
    })
  }
}

pub struct PostgresProjectRepository {
  pool: PgPool,
}

impl PostgresProjectRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
  async fn create(&self, project: Project) -> Result<Project, ProjectError> {
    let row = sqlx::query_as::<_, ProjectRow>(
      r#"
            INSERT INTO projects (id, client_id, project_name, start_date,
                                  end_date, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, client_id, project_name, start_date,
                      end_date, status, created_at, updated_at
            "#,
    )
    .bind(project.id)
    .bind(project.client_id)
    .bind(project.project_name.value())
    .bind(project.start_date)
    .bind(project.end_date)
    .bind(project.status.as_str())
    .bind(project.created_at)
    .bind(project.updated_at)
    .fetch_one(&self.pool)
    .await?;

    row.try_into()
  }

  async fn update(&self, project: Project) -> Result<Project, ProjectError> {
    let row = sqlx::query_as::<_, ProjectRow>(
      r#"
            UPDATE projects
            SET project_name = $2, start_date = $3, end_date = $4,
                status = $5, updated_at = $6
            WHERE id = $1
            RETURNING id, client_id, project_name, start_date,
                      end_date, status, created_at, updated_at
            "#,
    )
    .bind(project.id)
    .bind(project.project_name.value())
    .bind(project.start_date)
    .bind(project.end_date)
    .bind(project.status.as_str())
    .bind(project.updated_at)
    .fetch_one(&self.pool)
    .await?;

    row.try_into()
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, ProjectError> {
    let row = sqlx::query_as::<_, ProjectRow>(
      r#"
            SELECT id, client_id, project_name, start_date,
                   end_date, status, created_at, updated_at
            FROM projects
            WHERE id = $1
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    row.map(|r| r.try_into()).transpose()
  }

  async fn find_by_client_id(&self, client_id: Uuid) -> Result<Vec<Project>, ProjectError> {
    let rows = sqlx::query_as::<_, ProjectRow>(
      r#"
            SELECT id, client_id, project_name, start_date,
                   end_date, status, created_at, updated_at
            FROM projects
            WHERE client_id = $1
            ORDER BY project_name ASC
            "#,
    )
    .bind(client_id)
    .fetch_all(&self.pool)
    .await?;

    rows.into_iter().map(|r| r.try_into()).collect()
  }

  async fn find_all(&self) -> Result<Vec<Project>, ProjectError> {
    let rows = sqlx::query_as::<_, ProjectRow>(
      r#"
            SELECT id, client_id, project_name, start_date,
                   end_date, status, created_at, updated_at
            FROM projects
            ORDER BY project_name ASC
            "#,
    )
    .fetch_all(&self.pool)
    .await?;

    rows.into_iter().map(|r| r.try_into()).collect()
  }
}
