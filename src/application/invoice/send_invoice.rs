use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::directory::EmailAddress;
use crate::domain::invoice::{InvoiceError, InvoiceService};

#[derive(Debug, Deserialize)]
pub struct SendInvoiceCommand {
  pub invoice_id: Uuid,
  /// Defaults to the client's contact address when absent.
  pub recipient_email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SendInvoiceResponse {
  pub invoice_id: Uuid,
  pub status: String,
  pub updated_at: DateTime<Utc>,
}

pub struct SendInvoiceUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl SendInvoiceUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(
    &self,
    command: SendInvoiceCommand,
  ) -> Result<SendInvoiceResponse, InvoiceError> {
    let recipient = match command.recipient_email {
      Some(email) => Some(EmailAddress::new(email).map_err(|e| InvoiceError::Directory(e.into()))?),
      None => None,
    };

    let invoice = self
      .invoice_service
      .send_invoice(command.invoice_id, recipient)
      .await?;

    Ok(SendInvoiceResponse {
      invoice_id: invoice.id,
      status: invoice.status.as_str().to_string(),
      updated_at: invoice.updated_at,
    })
  }
}
