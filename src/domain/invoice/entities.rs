use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::InvoiceEntityError;
use super::value_objects::{InvoiceNumber, InvoiceStatus, Money, ServiceDescription};

// Invoice - one bill for one client covering one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
  pub id: Uuid,
  pub client_id: Uuid,
  pub invoice_number: InvoiceNumber,
  pub invoice_date: NaiveDate,
  pub due_date: NaiveDate,
  pub period_start: NaiveDate,
  pub period_end: NaiveDate,
  pub total_amount: Money,
  pub status: InvoiceStatus,
  pub payment_date: Option<NaiveDate>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Invoice {
  #[allow(clippy::too_many_arguments)]
  pub fn new(
    client_id: Uuid,
    invoice_number: InvoiceNumber,
    invoice_date: NaiveDate,
    due_date: NaiveDate,
    period_start: NaiveDate,
    period_end: NaiveDate,
    total_amount: Money,
  ) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      client_id,
      invoice_number,
      invoice_date,
      due_date,
      period_start,
      period_end,
      total_amount,
      status: InvoiceStatus::Draft,
      payment_date: None,
      created_at: now,
      updated_at: now,
    }
  }

  /// The status as it should be reported right now. A sent invoice past its
  /// due date with no payment recorded reads as overdue even if the stored
  /// status has not been rewritten yet.
  pub fn effective_status(&self, today: NaiveDate) -> InvoiceStatus {
    if self.status == InvoiceStatus::Sent && self.due_date < today && self.payment_date.is_none() {
      InvoiceStatus::Overdue
    } else {
      self.status
    }
  }

  pub fn is_overdue(&self, today: NaiveDate) -> bool {
    self.effective_status(today) == InvoiceStatus::Overdue
  }

  /// Marks the invoice as sent. Only called after the email provider has
  /// accepted the message; a failed delivery leaves the invoice a draft.
  pub fn mark_sent(&mut self) -> Result<(), InvoiceEntityError> {
    self.change_status(InvoiceStatus::Sent)
  }

  /// Records a payment. The payment date and the paid status are set
  /// together; one never appears without the other.
  pub fn record_payment(&mut self, payment_date: NaiveDate) -> Result<(), InvoiceEntityError> {
    if !self.status.can_transition_to(InvoiceStatus::Paid) {
      return Err(InvoiceEntityError::InvalidStatusTransition {
        from: self.status,
        to: InvoiceStatus::Paid,
      });
    }

    self.status = InvoiceStatus::Paid;
    self.payment_date = Some(payment_date);
    self.updated_at = Utc::now();
    Ok(())
  }

  pub fn change_status(&mut self, new_status: InvoiceStatus) -> Result<(), InvoiceEntityError> {
    if !self.status.can_transition_to(new_status) {
      return Err(InvoiceEntityError::InvalidStatusTransition {
        from: self.status,
        to: new_status,
      });
    }

    self.status = new_status;
    self.updated_at = Utc::now();
    Ok(())
  }
}

// Invoice Line Item - one (project, designation) group's accumulated hours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
  pub id: Uuid,
  pub invoice_id: Uuid,
  pub project_id: Uuid,
  pub employee_id: Uuid,
  pub assignment_id: Uuid,
  pub description: ServiceDescription,
  pub quantity: Decimal,
  pub rate: Money,
}

impl InvoiceLineItem {
  #[allow(clippy::too_many_arguments)]
  pub fn new(
    invoice_id: Uuid,
    project_id: Uuid,
    employee_id: Uuid,
    assignment_id: Uuid,
    description: ServiceDescription,
    quantity: Decimal,
    rate: Money,
  ) -> Self {
    Self {
      id: Uuid::new_v4(),
      invoice_id,
      project_id,
      employee_id,
      assignment_id,
      description,
      quantity,
      rate,
    }
  }

  pub fn total(&self) -> Money {
    self.rate.multiply(self.quantity)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::invoice::value_objects::Currency;
  use rust_decimal_macros::dec;

  fn draft_invoice() -> Invoice {
    Invoice::new(
      Uuid::new_v4(),
      InvoiceNumber::new("20260615-a1b2c3d4-042".to_string()).unwrap(),
      NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
      NaiveDate::from_ymd_opt(2026, 7, 15).unwrap(),
      NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
      NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
      Money::new(dec!(4800), Currency::USD).unwrap(),
    )
  }

  #[test]
  fn test_invoice_starts_draft_without_payment() {
    let invoice = draft_invoice();
    assert_eq!(invoice.status, InvoiceStatus::Draft);
    assert!(invoice.payment_date.is_none());
  }

  #[test]
  fn test_draft_never_reads_overdue() {
    let invoice = draft_invoice();
    let long_past_due = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
    assert_eq!(
      invoice.effective_status(long_past_due),
      InvoiceStatus::Draft
    );
  }

  #[test]
  fn test_sent_past_due_reads_overdue() {
    let mut invoice = draft_invoice();
    invoice.mark_sent().unwrap();

    let before_due = NaiveDate::from_ymd_opt(2026, 7, 15).unwrap();
    assert_eq!(invoice.effective_status(before_due), InvoiceStatus::Sent);

    let past_due = NaiveDate::from_ymd_opt(2026, 7, 16).unwrap();
    assert_eq!(invoice.effective_status(past_due), InvoiceStatus::Overdue);
    assert!(invoice.is_overdue(past_due));
    // The stored status is untouched
    assert_eq!(invoice.status, InvoiceStatus::Sent);
  }

  #[test]
  fn test_record_payment_sets_date_and_status_together() {
    let mut invoice = draft_invoice();
    invoice.mark_sent().unwrap();

    let payment_date = NaiveDate::from_ymd_opt(2026, 7, 10).unwrap();
    invoice.record_payment(payment_date).unwrap();

    assert_eq!(invoice.status, InvoiceStatus::Paid);
    assert_eq!(invoice.payment_date, Some(payment_date));
    // Paid invoices never read overdue, regardless of date
    let far_future = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
    assert_eq!(invoice.effective_status(far_future), InvoiceStatus::Paid);
  }

  #[test]
  fn test_payment_accepted_past_due_date() {
    let mut invoice = draft_invoice();
    invoice.mark_sent().unwrap();

    // Paying after the due date goes through the overdue state
    let late_payment = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
    invoice.record_payment(late_payment).unwrap();
    assert_eq!(invoice.status, InvoiceStatus::Paid);
  }

  #[test]
  fn test_draft_cannot_be_paid() {
    let mut invoice = draft_invoice();
    let payment_date = NaiveDate::from_ymd_opt(2026, 7, 10).unwrap();
    assert!(invoice.record_payment(payment_date).is_err());
    assert!(invoice.payment_date.is_none());
  }

  #[test]
  fn test_mark_sent_only_from_draft() {
    let mut invoice = draft_invoice();
    invoice.mark_sent().unwrap();
    assert!(invoice.mark_sent().is_err());
  }

  #[test]
  fn test_line_item_total() {
    let line_item = InvoiceLineItem::new(
      Uuid::new_v4(),
      Uuid::new_v4(),
      Uuid::new_v4(),
      Uuid::new_v4(),
      ServiceDescription::for_group("Senior Developer", "Platform Rebuild"),
      dec!(32),
      Money::new(dec!(150), Currency::USD).unwrap(),
    );
    assert_eq!(line_item.total().amount, dec!(4800));
  }
}
