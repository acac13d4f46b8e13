use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::invoice::{
  Currency, Invoice, InvoiceError, InvoiceNumber, InvoiceStatus, Money, ports::InvoiceRepository,
};

#[derive(Debug, FromRow)]
pub(super) struct InvoiceRow {
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
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl TryFrom<InvoiceRow> for Invoice {
  type Error = InvoiceError;

  fn try_from(row: InvoiceRow) -> Result<Self, Self::Error> {
    let currency = Currency::from_str(&row.currency)?;

    Ok(Invoice {
      id: row.id,
      client_id: row.client_id,
      invoice_number: InvoiceNumber::new(row.invoice_number)?,
      invoice_date: row.invoice_date,
      due_date: row.due_date,
      period_start: row.period_start,
      period_end: row.period_end,
      total_amount: Money::new(row.total_amount, currency)?,
      status: InvoiceStatus::from_str(&row.status)?,
      payment_date: row.payment_date,
      created_at: row.created_at,
      updated_at: row.updated_at,
    })
  }
}

pub struct PostgresInvoiceRepository {
  pool: PgPool,
}

impl PostgresInvoiceRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl InvoiceRepository for PostgresInvoiceRepository {
  async fn update(&self, invoice: Invoice) -> Result<Invoice, InvoiceError> {
    let row = sqlx::query_as::<_, InvoiceRow>(
      r#"
            UPDATE invoices
            SET status = $2, payment_date = $3, updated_at = $4
            WHERE id = $1
            RETURNING id, client_id, invoice_number, invoice_date, due_date,
                      period_start, period_end, total_amount, currency,
                      status, payment_date, created_at, updated_at
            "#,
    )
    .bind(invoice.id)
    .bind(invoice.status.as_str())
    .bind(invoice.payment_date)
    .bind(invoice.updated_at)
    .fetch_one(&self.pool)
    .await?;

    row.try_into()
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, InvoiceError> {
    let row = sqlx::query_as::<_, InvoiceRow>(
      r#"
            SELECT id, client_id, invoice_number, invoice_date, due_date,
                   period_start, period_end, total_amount, currency,
                   status, payment_date, created_at, updated_at
            FROM invoices
            WHERE id = $1
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    row.map(|r| r.try_into()).transpose()
  }

  async fn find_by_client_id(&self, client_id: Uuid) -> Result<Vec<Invoice>, InvoiceError> {
    let rows = sqlx::query_as::<_, InvoiceRow>(
      r#"
            SELECT id, client_id, invoice_number, invoice_date, due_date,
                   period_start, period_end, total_amount, currency,
                   status, payment_date, created_at, updated_at
            FROM invoices
            WHERE client_id = $1
            ORDER BY invoice_date DESC, created_at DESC
            "#,
    )
    .bind(client_id)
    .fetch_all(&self.pool)
    .await?;

    rows.into_iter().map(|r| r.try_into()).collect()
  }

  async fn find_all(&self) -> Result<Vec<Invoice>, InvoiceError> {
    let rows = sqlx::query_as::<_, InvoiceRow>(
      r#"
            SELECT id, client_id, invoice_number, invoice_date, due_date,
                   period_start, period_end, total_amount, currency,
                   status, payment_date, created_at, updated_at
            FROM invoices
            ORDER BY invoice_date DESC, created_at DESC
            "#,
    )
    .fetch_all(&self.pool)
    .await?;

    rows.into_iter().map(|r| r.try_into()).collect()
  }
}
