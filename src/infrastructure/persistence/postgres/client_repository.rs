use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::directory::{
  Client, ClientName, ClientStatus, DirectoryError, EmailAddress, ports::ClientRepository,
};

use super::violates_unique_constraint;

const NAME_CONSTRAINT: &str = "clients_name_unique";

#[derive(Debug, FromRow)]
struct ClientRow {
  id: Uuid,
  name: String,
  contact_email: String,
  contract_start_date: NaiveDate,
  contract_end_date: NaiveDate,
  status: String,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl TryFrom<ClientRow> for Client {
  type Error = DirectoryError;

  fn try_from(row: ClientRow) -> Result<Self, Self::Error> {
    Ok(Client {
      id: row.id,
      name: ClientName::new(row.name)?,
      contact_email: EmailAddress::new(row.contact_email)?,
      contract_start_date: row.contract_start_date,
      contract_end_date: row.contract_end_date,
      status: ClientStatus::from_str(&row.status)?,
      created_at: row.created_at,
      updated_at: row.updated_at,
    })
  }
}

pub struct PostgresClientRepository {
  pool: PgPool,
}

impl PostgresClientRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl ClientRepository for PostgresClientRepository {
  async fn create(&self, client: Client) -> Result<Client, DirectoryError> {
    let result = sqlx::query_as::<_, ClientRow>(
      r#"
            INSERT INTO clients (id, name, contact_email, contract_start_date,
                                 contract_end_date, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, contact_email, contract_start_date,
                      contract_end_date, status, created_at, updated_at
            "#,
    )
    .bind(client.id)
    .bind(client.name.value())
    .bind(client.contact_email.value())
    .bind(client.contract_start_date)
    .bind(client.contract_end_date)
    .bind(client.status.as_str())
    .bind(client.created_at)
    .bind(client.updated_at)
    .fetch_one(&self.pool)
    .await;

    // A concurrent create can slip past the service's existence check; the
    // constraint reports the same conflict
    match result {
      Ok(row) => row.try_into(),
      Err(e) if violates_unique_constraint(&e, NAME_CONSTRAINT) => {
        Err(DirectoryError::ClientNameAlreadyExists)
      }
      Err(e) => Err(e.into()),
    }
  }

  async fn update(&self, client: Client) -> Result<Client, DirectoryError> {
    let result = sqlx::query_as::<_, ClientRow>(
      r#"
            UPDATE clients
            SET name = $2, contact_email = $3, contract_start_date = $4,
                contract_end_date = $5, status = $6, updated_at = $7
            WHERE id = $1
            RETURNING id, name, contact_email, contract_start_date,
                      contract_end_date, status, created_at, updated_at
            "#,
    )
    .bind(client.id)
    .bind(client.name.value())
    .bind(client.contact_email.value())
    .bind(client.contract_start_date)
    .bind(client.contract_end_date)
    .bind(client.status.as_str())
    .bind(client.updated_at)
    .fetch_one(&self.pool)
    .await;

    match result {
      Ok(row) => row.try_into(),
      Err(e) if violates_unique_constraint(&e, NAME_CONSTRAINT) => {
        Err(DirectoryError::ClientNameAlreadyExists)
      }
      Err(e) => Err(e.into()),
    }
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Client>, DirectoryError> {
    let row = sqlx::query_as::<_, ClientRow>(
      r#"
            SELECT id, name, contact_email, contract_start_date,
                   contract_end_date, status, created_at, updated_at
            FROM clients
            WHERE id = $1
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    row.map(|r| r.try_into()).transpose()
  }

  async fn find_all(&self) -> Result<Vec<Client>, DirectoryError> {
    let rows = sqlx::query_as::<_, ClientRow>(
      r#"
            SELECT id, name, contact_email, contract_start_date,
                   contract_end_date, status, created_at, updated_at
            FROM clients
            ORDER BY name ASC
            "#,
    )
    .fetch_all(&self.pool)
    .await?;

    rows.into_iter().map(|r| r.try_into()).collect()
  }

  async fn exists_by_name(
    &self,
    name: &str,
    exclude_id: Option<Uuid>,
  ) -> Result<bool, DirectoryError> {
    let result = if let Some(exclude_id) = exclude_id {
      sqlx::query_scalar::<_, bool>(
        r#"
                SELECT EXISTS(
                    SELECT 1 FROM clients
                    WHERE name = $1 AND id != $2
                )
                "#,
      )
      .bind(name)
      .bind(exclude_id)
      .fetch_one(&self.pool)
      .await?
    } else {
      sqlx::query_scalar::<_, bool>(
        r#"
                SELECT EXISTS(
                    SELECT 1 FROM clients
                    WHERE name = $1
                )
                "#,
      )
      .bind(name)
      .fetch_one(&self.pool)
      .await?
    };

    Ok(result)
  }
}
