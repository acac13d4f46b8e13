use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::{InvoiceError, InvoiceService, InvoiceStatus};

#[derive(Debug, Deserialize)]
pub struct ListInvoicesCommand {
  pub client_filter: Option<Uuid>,
  pub status_filter: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InvoiceListItemDto {
  pub id: Uuid,
  pub client_id: Uuid,
  pub invoice_number: String,
  pub invoice_date: NaiveDate,
  pub due_date: NaiveDate,
  pub total_amount: Decimal,
  pub currency: String,
  pub status: String,
  pub payment_date: Option<NaiveDate>,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ListInvoicesResponse {
  pub invoices: Vec<InvoiceListItemDto>,
}

pub struct ListInvoicesUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl ListInvoicesUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(
    &self,
    command: ListInvoicesCommand,
  ) -> Result<ListInvoicesResponse, InvoiceError> {
    let status_filter = match command.status_filter {
      Some(status_str) => Some(InvoiceStatus::from_str(&status_str)?),
      None => None,
    };

    let invoices = self
      .invoice_service
      .list_invoices(command.client_filter, status_filter)
      .await?;

    let invoice_dtos = invoices
      .into_iter()
      .map(|i| InvoiceListItemDto {
        id: i.id,
        client_id: i.client_id,
        invoice_number: i.invoice_number.to_string(),
        invoice_date: i.invoice_date,
        due_date: i.due_date,
        total_amount: i.total_amount.amount,
        currency: i.total_amount.currency.as_str().to_string(),
        status: i.status.as_str().to_string(),
        payment_date: i.payment_date,
        created_at: i.created_at,
      })
      .collect();

    Ok(ListInvoicesResponse {
      invoices: invoice_dtos,
    })
  }
}
