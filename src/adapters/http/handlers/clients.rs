use actix_web::{HttpResponse, web};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::{
  adapters::http::{
    dtos::{CreateClientRequest, UpdateClientRequest},
    errors::ApiError,
  },
  application::directory::{
    CreateClientCommand, CreateClientUseCase, ListClientsUseCase, UpdateClientCommand,
    UpdateClientUseCase,
  },
};

/// Create new client
/// POST /api/v1/clients
pub async fn create_client_handler(
  request: web::Json<CreateClientRequest>,
  use_case: web::Data<Arc<CreateClientUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let command = CreateClientCommand {
    name: request.name.clone(),
    contact_email: request.contact_email.clone(),
    contract_start_date: request.contract_start_date,
    contract_end_date: request.contract_end_date,
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Created().json(response))
}

/// List all clients
/// GET /api/v1/clients
pub async fn list_clients_handler(
  use_case: web::Data<Arc<ListClientsUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let response = use_case.execute().await?;

  Ok(HttpResponse::Ok().json(response))
}

/// Update an existing client
/// PUT /api/v1/clients/:client_id
pub async fn update_client_handler(
  client_id: web::Path<Uuid>,
  request: web::Json<UpdateClientRequest>,
  use_case: web::Data<Arc<UpdateClientUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let command = UpdateClientCommand {
    client_id: *client_id,
    name: request.name.clone(),
    contact_email: request.contact_email.clone(),
    contract_start_date: request.contract_start_date,
    contract_end_date: request.contract_end_date,
    status: request.status.clone(),
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(response))
}
