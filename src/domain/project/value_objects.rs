use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueObjectError {
  #[error("Invalid project name: {0}")]
  InvalidProjectName(String),
  #[error("Invalid billing rate: {0}")]
  InvalidBillingRate(String),
  #[error("Invalid hours: {0}")]
  InvalidHours(String),
  #[error("Invalid status: {0}")]
  InvalidStatus(String),
}

// Project Name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectName(String);

impl ProjectName {
  pub fn new(value: String) -> Result<Self, ValueObjectError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
      return Err(ValueObjectError::InvalidProjectName(
        "Project name cannot be empty".to_string(),
      ));
    }
    if trimmed.len() > 255 {
      return Err(ValueObjectError::InvalidProjectName(
        "Project name cannot exceed 255 characters".to_string(),
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

impl fmt::Display for ProjectName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// Billing Rate - hourly rate carried by an assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingRate(Decimal);

impl BillingRate {
  pub fn new(value: Decimal) -> Result<Self, ValueObjectError> {
    if value <= Decimal::ZERO {
      return Err(ValueObjectError::InvalidBillingRate(
        "Billing rate must be positive".to_string(),
      ));
    }
    // Max 2 decimal places
    if value.scale() > 2 {
      return Err(ValueObjectError::InvalidBillingRate(
        "Billing rate cannot have more than 2 decimal places".to_string(),
      ));
    }
    Ok(Self(value))
  }

  pub fn value(&self) -> Decimal {
    self.0
  }
}

// Hours - quantity recorded on a time entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hours(Decimal);

impl Hours {
  pub fn new(value: Decimal) -> Result<Self, ValueObjectError> {
    if value <= Decimal::ZERO {
      return Err(ValueObjectError::InvalidHours(
        "Hours must be positive".to_string(),
      ));
    }
    if value > Decimal::from(24) {
      return Err(ValueObjectError::InvalidHours(
        "A single entry cannot exceed 24 hours".to_string(),
      ));
    }
    if value.scale() > 2 {
      return Err(ValueObjectError::InvalidHours(
        "Hours cannot have more than 2 decimal places".to_string(),
      ));
    }
    Ok(Self(value))
  }

  pub fn value(&self) -> Decimal {
    self.0
  }
}

// Project Status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
  Active,
  Completed,
  OnHold,
}

impl ProjectStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      ProjectStatus::Active => "active",
      ProjectStatus::Completed => "completed",
      ProjectStatus::OnHold => "on_hold",
    }
  }
}

impl FromStr for ProjectStatus {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "active" => Ok(ProjectStatus::Active),
      "completed" => Ok(ProjectStatus::Completed),
      "on_hold" => Ok(ProjectStatus::OnHold),
      _ => Err(ValueObjectError::InvalidStatus(format!(
        "Unknown project status: {}",
        s
      ))),
    }
  }
}

// Assignment Status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
  Active,
  Completed,
}

impl AssignmentStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      AssignmentStatus::Active => "active",
      AssignmentStatus::Completed => "completed",
    }
  }
}

impl FromStr for AssignmentStatus {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "active" => Ok(AssignmentStatus::Active),
      "completed" => Ok(AssignmentStatus::Completed),
      _ => Err(ValueObjectError::InvalidStatus(format!(
        "Unknown assignment status: {}",
        s
      ))),
    }
  }
}
