use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::{InvoiceError, InvoiceService};

#[derive(Debug, Deserialize)]
pub struct GetInvoiceDetailsCommand {
  pub invoice_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct InvoiceLineItemDto {
  pub id: Uuid,
  pub project_id: Uuid,
  pub employee_id: Uuid,
  pub assignment_id: Uuid,
  pub description: String,
  pub quantity: Decimal,
  pub rate: Decimal,
  pub total_amount: Decimal,
}

#[derive(Debug, Serialize)]
pub struct InvoiceDetailsResponse {
  pub id: Uuid,
  pub client_id: Uuid,
  pub invoice_number: String,
  pub invoice_date: NaiveDate,
  pub due_date: NaiveDate,
  pub period_start: NaiveDate,
  pub period_end: NaiveDate,
  pub total_amount: Decimal,
  pub currency: String,
  pub status: String,
  pub payment_date: Option<NaiveDate>,
  pub line_items: Vec<InvoiceLineItemDto>,
  pub created_at: DateTime<Utc>,
}

pub struct GetInvoiceDetailsUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl GetInvoiceDetailsUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(
    &self,
    command: GetInvoiceDetailsCommand,
  ) -> Result<InvoiceDetailsResponse, InvoiceError> {
    let (invoice, line_items) = self.invoice_service.get_invoice(command.invoice_id).await?;

    let line_item_dtos = line_items
      .into_iter()
      .map(|item| InvoiceLineItemDto {
        id: item.id,
        project_id: item.project_id,
        employee_id: item.employee_id,
        assignment_id: item.assignment_id,
        description: item.description.value().to_string(),
        quantity: item.quantity,
        rate: item.rate.amount,
        total_amount: item.total().amount,
      })
      .collect();

    Ok(InvoiceDetailsResponse {
      id: invoice.id,
      client_id: invoice.client_id,
      invoice_number: invoice.invoice_number.into_inner(),
      invoice_date: invoice.invoice_date,
      due_date: invoice.due_date,
      period_start: invoice.period_start,
      period_end: invoice.period_end,
      total_amount: invoice.total_amount.amount,
      currency: invoice.total_amount.currency.as_str().to_string(),
      status: invoice.status.as_str().to_string(),
      payment_date: invoice.payment_date,
      line_items: line_item_dtos,
      created_at: invoice.created_at,
    })
  }
}
