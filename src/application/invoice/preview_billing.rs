use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::{BillingSummary, InvoiceError, InvoiceService};

#[derive(Debug, Deserialize)]
pub struct PreviewBillingCommand {
  pub client_id: Uuid,
  pub period_start: NaiveDate,
  pub period_end: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct TimesheetLineDto {
  pub designation: String,
  pub quantity: Decimal,
  pub rate: Decimal,
  pub amount: Decimal,
}

#[derive(Debug, Serialize)]
pub struct ProjectTimesheetDto {
  pub project_id: Uuid,
  pub project_name: String,
  pub lines: Vec<TimesheetLineDto>,
  pub subtotal: Decimal,
}

#[derive(Debug, Serialize)]
pub struct PreviewBillingResponse {
  pub timesheets: Vec<ProjectTimesheetDto>,
  pub grand_total: Decimal,
}

impl From<BillingSummary> for PreviewBillingResponse {
  fn from(summary: BillingSummary) -> Self {
    Self {
      timesheets: summary
        .timesheets
        .into_iter()
        .map(|sheet| ProjectTimesheetDto {
          project_id: sheet.project_id,
          project_name: sheet.project_name,
          lines: sheet
            .lines
            .into_iter()
            .map(|line| TimesheetLineDto {
              designation: line.designation.into_inner(),
              quantity: line.quantity,
              rate: line.rate,
              amount: line.amount,
            })
            .collect(),
          subtotal: sheet.subtotal,
        })
        .collect(),
      grand_total: summary.grand_total,
    }
  }
}

pub struct PreviewBillingUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl PreviewBillingUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(
    &self,
    command: PreviewBillingCommand,
  ) -> Result<PreviewBillingResponse, InvoiceError> {
    let summary = self
      .invoice_service
      .preview_billing(command.client_id, command.period_start, command.period_end)
      .await?;

    Ok(summary.into())
  }
}
