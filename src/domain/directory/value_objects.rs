use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueObjectError {
  #[error("Invalid client name: {0}")]
  InvalidClientName(String),
  #[error("Invalid person name: {0}")]
  InvalidPersonName(String),
  #[error("Invalid email address: {0}")]
  InvalidEmail(String),
  #[error("Invalid designation: {0}")]
  InvalidDesignation(String),
  #[error("Invalid status: {0}")]
  InvalidStatus(String),
}

// Client Name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientName(String);

impl ClientName {
  pub fn new(value: String) -> Result<Self, ValueObjectError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
      return Err(ValueObjectError::InvalidClientName(
        "Client name cannot be empty".to_string(),
      ));
    }
    if trimmed.len() > 255 {
      return Err(ValueObjectError::InvalidClientName(
        "Client name cannot exceed 255 characters".to_string(),
      ));
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn value(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for ClientName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// Person Name - first or last name of an employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName(String);

impl PersonName {
  pub fn new(value: String) -> Result<Self, ValueObjectError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
      return Err(ValueObjectError::InvalidPersonName(
        "Name cannot be empty".to_string(),
      ));
    }
    if trimmed.len() > 255 {
      return Err(ValueObjectError::InvalidPersonName(
        "Name cannot exceed 255 characters".to_string(),
      ));
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn value(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for PersonName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// Email Address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
  pub fn new(value: String) -> Result<Self, ValueObjectError> {
    let trimmed = value.trim().to_lowercase();
    if trimmed.is_empty() {
      return Err(ValueObjectError::InvalidEmail(
        "Email cannot be empty".to_string(),
      ));
    }
    // Minimal structural check; full validation happens at the form layer
    let parts: Vec<&str> = trimmed.split('@').collect();
    if parts.len() != 2 || parts[0].is_empty() || !parts[1].contains('.') {
      return Err(ValueObjectError::InvalidEmail(format!(
        "Malformed email address: {}",
        trimmed
      )));
    }
    if trimmed.len() > 255 {
      return Err(ValueObjectError::InvalidEmail(
        "Email cannot exceed 255 characters".to_string(),
      ));
    }
    Ok(Self(trimmed))
  }

  pub fn value(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for EmailAddress {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// Designation - role title, used as the billing-rate grouping key on invoices
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Designation(String);

impl Designation {
  pub fn new(value: String) -> Result<Self, ValueObjectError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
      return Err(ValueObjectError::InvalidDesignation(
        "Designation cannot be empty".to_string(),
      ));
    }
    if trimmed.len() > 100 {
      return Err(ValueObjectError::InvalidDesignation(
        "Designation cannot exceed 100 characters".to_string(),
      ));
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn value(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for Designation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// Client Status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
  Active,
  Inactive,
}

impl ClientStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      ClientStatus::Active => "active",
      ClientStatus::Inactive => "inactive",
    }
  }
}

impl FromStr for ClientStatus {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "active" => Ok(ClientStatus::Active),
      "inactive" => Ok(ClientStatus::Inactive),
      _ => Err(ValueObjectError::InvalidStatus(format!(
        "Unknown client status: {}",
        s
      ))),
    }
  }
}

// Employee Status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
  Active,
  Inactive,
}

impl EmployeeStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      EmployeeStatus::Active => "active",
      EmployeeStatus::Inactive => "inactive",
    }
  }
}

impl FromStr for EmployeeStatus {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "active" => Ok(EmployeeStatus::Active),
      "inactive" => Ok(EmployeeStatus::Inactive),
      _ => Err(ValueObjectError::InvalidStatus(format!(
        "Unknown employee status: {}",
        s
      ))),
    }
  }
}
