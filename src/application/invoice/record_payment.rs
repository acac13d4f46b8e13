use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::{InvoiceError, InvoiceService};

#[derive(Debug, Deserialize)]
pub struct RecordPaymentCommand {
  pub invoice_id: Uuid,
  pub payment_date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct RecordPaymentResponse {
  pub invoice_id: Uuid,
  pub status: String,
  pub payment_date: Option<NaiveDate>,
  pub updated_at: DateTime<Utc>,
}

pub struct RecordPaymentUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl RecordPaymentUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(
    &self,
    command: RecordPaymentCommand,
  ) -> Result<RecordPaymentResponse, InvoiceError> {
    let invoice = self
      .invoice_service
      .record_payment(command.invoice_id, command.payment_date)
      .await?;

    Ok(RecordPaymentResponse {
      invoice_id: invoice.id,
      status: invoice.status.as_str().to_string(),
      payment_date: invoice.payment_date,
      updated_at: invoice.updated_at,
    })
  }
}
