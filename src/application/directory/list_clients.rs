use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::directory::{DirectoryError, DirectoryService};

#[derive(Debug, Serialize)]
pub struct ClientDto {
  pub id: Uuid,
  pub name: String,
  pub contact_email: String,
  pub contract_start_date: NaiveDate,
  pub contract_end_date: NaiveDate,
  pub status: String,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ListClientsResponse {
  pub clients: Vec<ClientDto>,
}

pub struct ListClientsUseCase {
  directory_service: Arc<DirectoryService>,
}

impl ListClientsUseCase {
  pub fn new(directory_service: Arc<DirectoryService>) -> Self {
    Self { directory_service }
  }

  pub async fn execute(&self) -> Result<ListClientsResponse, DirectoryError> {
    let clients = self.directory_service.list_clients().await?;

    let client_dtos = clients
      .into_iter()
      .map(|c| ClientDto {
        id: c.id,
        name: c.name.into_inner(),
        contact_email: c.contact_email.into_inner(),
        contract_start_date: c.contract_start_date,
        contract_end_date: c.contract_end_date,
        status: c.status.as_str().to_string(),
        created_at: c.created_at,
      })
      .collect();

    Ok(ListClientsResponse {
      clients: client_dtos,
    })
  }
}
