use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::directory::{
  ClientData, ClientName, DirectoryError, DirectoryService, EmailAddress,
};

#[derive(Debug, Deserialize)]
pub struct CreateClientCommand {
  pub name: String,
  pub contact_email: String,
  pub contract_start_date: NaiveDate,
  pub contract_end_date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct CreateClientResponse {
  pub client_id: Uuid,
  pub name: String,
  pub status: String,
  pub created_at: DateTime<Utc>,
}

pub struct CreateClientUseCase {
  directory_service: Arc<DirectoryService>,
}

impl CreateClientUseCase {
  pub fn new(directory_service: Arc<DirectoryService>) -> Self {
    Self { directory_service }
  }

  pub async fn execute(
    &self,
    command: CreateClientCommand,
  ) -> Result<CreateClientResponse, DirectoryError> {
    let data = ClientData {
      name: ClientName::new(command.name)?,
      contact_email: EmailAddress::new(command.contact_email)?,
      contract_start_date: command.contract_start_date,
      contract_end_date: command.contract_end_date,
    };

    let client = self.directory_service.create_client(data).await?;

    Ok(CreateClientResponse {
      client_id: client.id,
      name: client.name.into_inner(),
      status: client.status.as_str().to_string(),
      created_at: client.created_at,
    })
  }
}
