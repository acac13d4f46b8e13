use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::directory::{Client, EmailAddress};

use super::entities::{Invoice, InvoiceLineItem};
use super::errors::{EmailError, InvoiceError};

#[async_trait]
pub trait InvoiceRepository: Send + Sync {
  async fn update(&self, invoice: Invoice) -> Result<Invoice, InvoiceError>;
  async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, InvoiceError>;
  async fn find_by_client_id(&self, client_id: Uuid) -> Result<Vec<Invoice>, InvoiceError>;
  async fn find_all(&self) -> Result<Vec<Invoice>, InvoiceError>;
}

#[async_trait]
pub trait InvoiceLineItemRepository: Send + Sync {
  async fn find_by_invoice_id(
    &self,
    invoice_id: Uuid,
  ) -> Result<Vec<InvoiceLineItem>, InvoiceError>;
}

/// Persists an invoice together with its line items in one transaction.
/// Either everything lands or nothing does; no orphaned draft invoices.
#[async_trait]
pub trait InvoiceWriter: Send + Sync {
  async fn write(
    &self,
    invoice: Invoice,
    line_items: Vec<InvoiceLineItem>,
  ) -> Result<Invoice, InvoiceError>;
}

/// Outbound email delivery for rendered invoices.
#[async_trait]
pub trait InvoiceEmailSender: Send + Sync {
  async fn send_invoice(
    &self,
    recipient: &EmailAddress,
    client: &Client,
    invoice: &Invoice,
    line_items: &[InvoiceLineItem],
  ) -> Result<(), EmailError>;
}
