use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::directory::{
  ClientData, ClientName, ClientStatus, DirectoryError, DirectoryService, EmailAddress,
};

#[derive(Debug, Deserialize)]
pub struct UpdateClientCommand {
  pub client_id: Uuid,
  pub name: String,
  pub contact_email: String,
  pub contract_start_date: NaiveDate,
  pub contract_end_date: NaiveDate,
  pub status: String,
}

#[derive(Debug, Serialize)]
pub struct UpdateClientResponse {
  pub client_id: Uuid,
  pub name: String,
  pub status: String,
  pub updated_at: DateTime<Utc>,
}

pub struct UpdateClientUseCase {
  directory_service: Arc<DirectoryService>,
}

impl UpdateClientUseCase {
  pub fn new(directory_service: Arc<DirectoryService>) -> Self {
    Self { directory_service }
  }

  pub async fn execute(
    &self,
    command: UpdateClientCommand,
  ) -> Result<UpdateClientResponse, DirectoryError> {
    let status = ClientStatus::from_str(&command.status)?;
    let data = ClientData {
      name: ClientName::new(command.name)?,
      contact_email: EmailAddress::new(command.contact_email)?,
      contract_start_date: command.contract_start_date,
      contract_end_date: command.contract_end_date,
    };

    let client = self
      .directory_service
      .update_client(command.client_id, data, status)
      .await?;

    Ok(UpdateClientResponse {
      client_id: client.id,
      name: client.name.into_inner(),
      status: client.status.as_str().to_string(),
      updated_at: client.updated_at,
    })
  }
}
