use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::invoice::{
  Currency, InvoiceError, InvoiceLineItem, Money, ServiceDescription,
  ports::InvoiceLineItemRepository,
};

#[derive(Debug, FromRow)]
pub(super) struct InvoiceLineItemRow {
  pub id: Uuid,
  pub invoice_id: Uuid,
  pub project_id: Uuid,
  pub employee_id: Uuid,
  pub assignment_id: Uuid,
  pub description: String,
  pub quantity: Decimal,
  pub rate: Decimal,
  pub currency: String,
}

impl TryFrom<InvoiceLineItemRow> for InvoiceLineItem {
  type Error = InvoiceError;

  fn try_from(row: InvoiceLineItemRow) -> Result<Self, Self::Error> {
    let currency = Currency::from_str(&row.currency)?;

    Ok(InvoiceLineItem {
      id: row.id,
      invoice_id: row.invoice_id,
      project_id: row.project_id,
      employee_id: row.employee_id,
      assignment_id: row.assignment_id,
      description: ServiceDescription::new(row.description)?,
      quantity: row.quantity,
      rate: Money::new(row.rate, currency)?,
    })
  }
}

pub struct PostgresInvoiceLineItemRepository {
  pool: PgPool,
}

impl PostgresInvoiceLineItemRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl InvoiceLineItemRepository for PostgresInvoiceLineItemRepository {
  async fn find_by_invoice_id(
    &self,
    invoice_id: Uuid,
  ) -> Result<Vec<InvoiceLineItem>, InvoiceError> {
    let rows = sqlx::query_as::<_, InvoiceLineItemRow>(
      r#"
            SELECT id, invoice_id, project_id, employee_id, assignment_id,
                   description, quantity, rate, currency
            FROM invoice_line_items
            WHERE invoice_id = $1
            ORDER BY description ASC
            "#,
    )
    .bind(invoice_id)
    .fetch_all(&self.pool)
    .await?;

    rows.into_iter().map(|r| r.try_into()).collect()
  }
}
