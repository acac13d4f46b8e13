use chrono::NaiveDate;
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueObjectError {
  #[error("Invalid invoice number: {0}")]
  InvalidInvoiceNumber(String),
  #[error("Invalid currency code: {0}")]
  InvalidCurrency(String),
  #[error("Invalid amount: {0}")]
  InvalidAmount(String),
  #[error("Invalid service description: {0}")]
  InvalidDescription(String),
  #[error("Invalid status: {0}")]
  InvalidStatus(String),
  #[error("Invalid billing period: {0}")]
  InvalidPeriod(String),
}

// Invoice Number
//
// Generated as <YYYYMMDD>-<first 8 hex of client id>-<3-digit random>. The
// random suffix only disambiguates within a day; uniqueness is enforced by
// the storage layer's unique constraint, with the generator retrying on
// conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceNumber(String);

impl InvoiceNumber {
  pub fn new(value: String) -> Result<Self, ValueObjectError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
      return Err(ValueObjectError::InvalidInvoiceNumber(
        "Invoice number cannot be empty".to_string(),
      ));
    }
    if trimmed.len() > 100 {
      return Err(ValueObjectError::InvalidInvoiceNumber(
        "Invoice number cannot exceed 100 characters".to_string(),
      ));
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn generate(invoice_date: NaiveDate, client_id: Uuid) -> Self {
    let client_prefix: String = client_id.simple().to_string().chars().take(8).collect();
    let disambiguator: u32 = rand::thread_rng().gen_range(0..1000);
    Self(format!(
      "{}-{}-{:03}",
      invoice_date.format("%Y%m%d"),
      client_prefix,
      disambiguator
    ))
  }

  pub fn value(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for InvoiceNumber {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// Invoice Status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
  Draft,
  Sent,
  Paid,
  Overdue,
}

impl InvoiceStatus {
  pub fn can_transition_to(&self, new_status: InvoiceStatus) -> bool {
    match (self, new_status) {
      // Draft can only be sent
      (InvoiceStatus::Draft, InvoiceStatus::Sent) => true,
      // Sent can be paid, or reclassified overdue past the due date
      (InvoiceStatus::Sent, InvoiceStatus::Paid) => true,
      (InvoiceStatus::Sent, InvoiceStatus::Overdue) => true,
      // Overdue can still be paid
      (InvoiceStatus::Overdue, InvoiceStatus::Paid) => true,
      // Paid is terminal
      _ => false,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      InvoiceStatus::Draft => "draft",
      InvoiceStatus::Sent => "sent",
      InvoiceStatus::Paid => "paid",
      InvoiceStatus::Overdue => "overdue",
    }
  }
}

impl FromStr for InvoiceStatus {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "draft" => Ok(InvoiceStatus::Draft),
      "sent" => Ok(InvoiceStatus::Sent),
      "paid" => Ok(InvoiceStatus::Paid),
      "overdue" => Ok(InvoiceStatus::Overdue),
      _ => Err(ValueObjectError::InvalidStatus(format!(
        "Unknown invoice status: {}",
        s
      ))),
    }
  }
}

impl fmt::Display for InvoiceStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

// Currency - ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
  USD,
  EUR,
  GBP,
}

impl Currency {
  pub fn as_str(&self) -> &'static str {
    match self {
      Currency::USD => "USD",
      Currency::EUR => "EUR",
      Currency::GBP => "GBP",
    }
  }

  pub fn symbol(&self) -> &'static str {
    match self {
      Currency::USD => "$",
      Currency::EUR => "€",
      Currency::GBP => "£",
    }
  }
}

impl FromStr for Currency {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_uppercase().as_str() {
      "USD" => Ok(Currency::USD),
      "EUR" => Ok(Currency::EUR),
      "GBP" => Ok(Currency::GBP),
      _ => Err(ValueObjectError::InvalidCurrency(format!(
        "Unsupported currency: {}",
        s
      ))),
    }
  }
}

// Money - Amount with currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
  pub amount: Decimal,
  pub currency: Currency,
}

impl Money {
  pub fn new(amount: Decimal, currency: Currency) -> Result<Self, ValueObjectError> {
    if amount.is_sign_negative() {
      return Err(ValueObjectError::InvalidAmount(
        "Amount cannot be negative".to_string(),
      ));
    }
    Ok(Self { amount, currency })
  }

  pub fn zero(currency: Currency) -> Self {
    Self {
      amount: Decimal::ZERO,
      currency,
    }
  }

  pub fn add(&self, other: &Money) -> Result<Money, ValueObjectError> {
    if self.currency != other.currency {
      return Err(ValueObjectError::InvalidAmount(
        "Cannot add amounts with different currencies".to_string(),
      ));
    }
    Ok(Money {
      amount: self.amount + other.amount,
      currency: self.currency,
    })
  }

  pub fn multiply(&self, factor: Decimal) -> Money {
    Money {
      amount: self.amount * factor,
      currency: self.currency,
    }
  }
}

impl fmt::Display for Money {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}{:.2}", self.currency.symbol(), self.amount)
  }
}

// Service Description - one billable group's text, e.g.
// "Senior Developer services - Platform Rebuild"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescription(String);

impl ServiceDescription {
  pub fn new(value: String) -> Result<Self, ValueObjectError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
      return Err(ValueObjectError::InvalidDescription(
        "Service description cannot be empty".to_string(),
      ));
    }
    if trimmed.len() > 500 {
      return Err(ValueObjectError::InvalidDescription(
        "Service description cannot exceed 500 characters".to_string(),
      ));
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn for_group(designation: &str, project_name: &str) -> Self {
    Self(format!("{} services - {}", designation, project_name))
  }

  pub fn value(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  #[test]
  fn test_invoice_number_validation() {
    assert!(InvoiceNumber::new("20260615-a1b2c3d4-042".to_string()).is_ok());
    assert!(InvoiceNumber::new("  ".to_string()).is_err());
  }

  #[test]
  fn test_invoice_number_generate_format() {
    let date = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
    let client_id = Uuid::new_v4();
    let number = InvoiceNumber::generate(date, client_id);

    let parts: Vec<&str> = number.value().split('-').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "20260615");
    assert_eq!(parts[1], &client_id.simple().to_string()[..8]);
    assert_eq!(parts[2].len(), 3);
    assert!(parts[2].parse::<u32>().unwrap() < 1000);
  }

  #[test]
  fn test_invoice_status_transitions() {
    assert!(InvoiceStatus::Draft.can_transition_to(InvoiceStatus::Sent));
    assert!(!InvoiceStatus::Draft.can_transition_to(InvoiceStatus::Paid));
    assert!(!InvoiceStatus::Draft.can_transition_to(InvoiceStatus::Overdue));

    assert!(InvoiceStatus::Sent.can_transition_to(InvoiceStatus::Paid));
    assert!(InvoiceStatus::Sent.can_transition_to(InvoiceStatus::Overdue));
    assert!(!InvoiceStatus::Sent.can_transition_to(InvoiceStatus::Draft));

    assert!(InvoiceStatus::Overdue.can_transition_to(InvoiceStatus::Paid));
    assert!(!InvoiceStatus::Overdue.can_transition_to(InvoiceStatus::Sent));

    assert!(!InvoiceStatus::Paid.can_transition_to(InvoiceStatus::Sent));
    assert!(!InvoiceStatus::Paid.can_transition_to(InvoiceStatus::Overdue));
  }

  #[test]
  fn test_currency() {
    assert_eq!(Currency::from_str("usd").unwrap(), Currency::USD);
    assert_eq!(Currency::EUR.symbol(), "€");
    assert!(Currency::from_str("JPY").is_err());
  }

  #[test]
  fn test_money() {
    let m1 = Money::new(dec!(100), Currency::USD).unwrap();
    let m2 = Money::new(dec!(50), Currency::USD).unwrap();
    let m3 = Money::new(dec!(50), Currency::EUR).unwrap();

    assert_eq!(m1.add(&m2).unwrap().amount, dec!(150));
    assert!(m1.add(&m3).is_err());
    assert_eq!(m1.multiply(dec!(1.5)).amount, dec!(150));
    assert!(Money::new(dec!(-10), Currency::USD).is_err());
  }

  #[test]
  fn test_service_description_for_group() {
    let description = ServiceDescription::for_group("Senior Developer", "Platform Rebuild");
    assert_eq!(
      description.value(),
      "Senior Developer services - Platform Rebuild"
    );
  }
}
