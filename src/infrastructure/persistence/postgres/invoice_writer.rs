use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::invoice::{Invoice, InvoiceError, InvoiceLineItem, ports::InvoiceWriter};

use super::UNIQUE_VIOLATION;
use super::invoice_repository::InvoiceRow;

/// Writes an invoice and its line items in a single transaction.
///
/// A unique index on invoices.invoice_number is the arbiter for number
/// collisions; the domain service retries with a fresh number when this
/// writer reports one.
pub struct PostgresInvoiceWriter {
  pool: PgPool,
}

impl PostgresInvoiceWriter {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl InvoiceWriter for PostgresInvoiceWriter {
  async fn write(
    &self,
    invoice: Invoice,
    line_items: Vec<InvoiceLineItem>,
  ) -> Result<Invoice, InvoiceError> {
    let mut tx = self.pool.begin().await?;

    let insert_result = sqlx::query_as::<_, InvoiceRow>(
      r#"
            INSERT INTO invoices (id, client_id, invoice_number, invoice_date, due_date,
                                  period_start, period_end, total_amount, currency,
                                  status, payment_date, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING id, client_id, invoice_number, invoice_date, due_date,
                      period_start, period_end, total_amount, currency,
                      status, payment_date, created_at, updated_at
            "#,
    )
    .bind(invoice.id)
    .bind(invoice.client_id)
    .bind(invoice.invoice_number.value())
    .bind(invoice.invoice_date)
    .bind(invoice.due_date)
    .bind(invoice.period_start)
    .bind(invoice.period_end)
    .bind(invoice.total_amount.amount)
    .bind(invoice.total_amount.currency.as_str())
    .bind(invoice.status.as_str())
    .bind(invoice.payment_date)
    .bind(invoice.created_at)
    .bind(invoice.updated_at)
    .fetch_one(&mut *tx)
    .await;

    let row = match insert_result {
      Ok(row) => row,
      Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) => {
        tx.rollback().await?;
        return Err(InvoiceError::InvoiceNumberAlreadyExists(
          invoice.invoice_number.into_inner(),
        ));
      }
      Err(e) => return Err(e.into()),
    };

    for item in &line_items {
      sqlx::query(
        r#"
                INSERT INTO invoice_line_items (id, invoice_id, project_id, employee_id,
                                                assignment_id, description, quantity,
                                                rate, currency)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                "#,
      )
      .bind(item.id)
      .bind(item.invoice_id)
      .bind(item.project_id)
      .bind(item.employee_id)
      .bind(item.assignment_id)
      .bind(item.description.value())
      .bind(item.quantity)
      .bind(item.rate.amount)
      .bind(item.rate.currency.as_str())
      .execute(&mut *tx)
      .await?;
    }

    tx.commit().await?;

    row.try_into()
  }
}
