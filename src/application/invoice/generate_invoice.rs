use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::{Currency, InvoiceError, InvoiceService};

#[derive(Debug, Deserialize)]
pub struct GenerateInvoiceCommand {
  pub client_id: Uuid,
  pub period_start: NaiveDate,
  pub period_end: NaiveDate,
  pub due_date: NaiveDate,
  pub currency: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateInvoiceResponse {
  pub invoice_id: Uuid,
  pub invoice_number: String,
  pub total_amount: Decimal,
  pub currency: String,
  pub status: String,
  pub line_item_count: usize,
  pub created_at: DateTime<Utc>,
}

pub struct GenerateInvoiceUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl GenerateInvoiceUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(
    &self,
    command: GenerateInvoiceCommand,
  ) -> Result<GenerateInvoiceResponse, InvoiceError> {
    let currency = Currency::from_str(&command.currency)?;

    let (invoice, line_items) = self
      .invoice_service
      .generate_invoice(
        command.client_id,
        command.period_start,
        command.period_end,
        command.due_date,
        currency,
      )
      .await?;

    Ok(GenerateInvoiceResponse {
      invoice_id: invoice.id,
      invoice_number: invoice.invoice_number.into_inner(),
      total_amount: invoice.total_amount.amount,
      currency: invoice.total_amount.currency.as_str().to_string(),
      status: invoice.status.as_str().to_string(),
      line_item_count: line_items.len(),
      created_at: invoice.created_at,
    })
  }
}
