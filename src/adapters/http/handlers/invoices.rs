use actix_web::{HttpResponse, web};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::{
  adapters::http::{
    dtos::{
      GenerateInvoiceRequest, ListInvoicesQuery, PreviewBillingQuery, RecordPaymentRequest,
      SendInvoiceRequest,
    },
    errors::ApiError,
  },
  application::invoice::{
    GenerateInvoiceCommand, GenerateInvoiceUseCase, GetInvoiceDetailsCommand,
    GetInvoiceDetailsUseCase, ListInvoicesCommand, ListInvoicesUseCase, PreviewBillingCommand,
    PreviewBillingUseCase, RecordPaymentCommand, RecordPaymentUseCase, SendInvoiceCommand,
    SendInvoiceUseCase,
  },
};

/// Generate an invoice from billable time
/// POST /api/v1/invoices
pub async fn generate_invoice_handler(
  request: web::Json<GenerateInvoiceRequest>,
  use_case: web::Data<Arc<GenerateInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let command = GenerateInvoiceCommand {
    client_id: request.client_id,
    period_start: request.period_start,
    period_end: request.period_end,
    due_date: request.due_date,
    currency: request.currency.clone(),
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Created().json(response))
}

/// Preview billable totals for a client and period
/// GET /api/v1/invoices/preview?client_id=...&period_start=...&period_end=...
pub async fn preview_billing_handler(
  query: web::Query<PreviewBillingQuery>,
  use_case: web::Data<Arc<PreviewBillingUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let command = PreviewBillingCommand {
    client_id: query.client_id,
    period_start: query.period_start,
    period_end: query.period_end,
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(response))
}

/// List invoices, optionally filtered by client and status
/// GET /api/v1/invoices?client_id=...&status=...
pub async fn list_invoices_handler(
  query: web::Query<ListInvoicesQuery>,
  use_case: web::Data<Arc<ListInvoicesUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let command = ListInvoicesCommand {
    client_filter: query.client_id,
    status_filter: query.status.clone(),
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(response))
}

/// Get a single invoice with its line items
/// GET /api/v1/invoices/:invoice_id
pub async fn get_invoice_handler(
  invoice_id: web::Path<Uuid>,
  use_case: web::Data<Arc<GetInvoiceDetailsUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let command = GetInvoiceDetailsCommand {
    invoice_id: *invoice_id,
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(response))
}

/// Email an invoice to the client
/// POST /api/v1/invoices/:invoice_id/send
pub async fn send_invoice_handler(
  invoice_id: web::Path<Uuid>,
  request: web::Json<SendInvoiceRequest>,
  use_case: web::Data<Arc<SendInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let command = SendInvoiceCommand {
    invoice_id: *invoice_id,
    recipient_email: request.recipient_email.clone(),
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(response))
}

/// Record a payment against an invoice
/// POST /api/v1/invoices/:invoice_id/payment
pub async fn record_payment_handler(
  invoice_id: web::Path<Uuid>,
  request: web::Json<RecordPaymentRequest>,
  use_case: web::Data<Arc<RecordPaymentUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let command = RecordPaymentCommand {
    invoice_id: *invoice_id,
    payment_date: request.payment_date,
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(response))
}
