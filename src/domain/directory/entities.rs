use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{
  ClientName, ClientStatus, Designation, EmailAddress, EmployeeStatus, PersonName,
};

// Client - owns projects and invoices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
  pub id: Uuid,
  pub name: ClientName,
  pub contact_email: EmailAddress,
  pub contract_start_date: NaiveDate,
  pub contract_end_date: NaiveDate,
  pub status: ClientStatus,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Client {
  pub fn new(
    name: ClientName,
    contact_email: EmailAddress,
    contract_start_date: NaiveDate,
    contract_end_date: NaiveDate,
  ) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      name,
      contact_email,
      contract_start_date,
      contract_end_date,
      status: ClientStatus::Active,
      created_at: now,
      updated_at: now,
    }
  }

  pub fn update(
    &mut self,
    name: ClientName,
    contact_email: EmailAddress,
    contract_start_date: NaiveDate,
    contract_end_date: NaiveDate,
    status: ClientStatus,
  ) {
    self.name = name;
    self.contact_email = contact_email;
    self.contract_start_date = contract_start_date;
    self.contract_end_date = contract_end_date;
    self.status = status;
    self.updated_at = Utc::now();
  }

  pub fn is_active(&self) -> bool {
    self.status == ClientStatus::Active
  }
}

// Employee - designation is the rate-bucketing key for invoicing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
  pub id: Uuid,
  pub first_name: PersonName,
  pub last_name: PersonName,
  pub email: EmailAddress,
  pub hire_date: NaiveDate,
  pub designation: Designation,
  pub status: EmployeeStatus,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Employee {
  pub fn new(
    first_name: PersonName,
    last_name: PersonName,
    email: EmailAddress,
    hire_date: NaiveDate,
    designation: Designation,
  ) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      first_name,
      last_name,
      email,
      hire_date,
      designation,
      status: EmployeeStatus::Active,
      created_at: now,
      updated_at: now,
    }
  }

  pub fn update(
    &mut self,
    first_name: PersonName,
    last_name: PersonName,
    email: EmailAddress,
    designation: Designation,
    status: EmployeeStatus,
  ) {
    self.first_name = first_name;
    self.last_name = last_name;
    self.email = email;
    self.designation = designation;
    self.status = status;
    self.updated_at = Utc::now();
  }

  pub fn full_name(&self) -> String {
    format!("{} {}", self.first_name, self.last_name)
  }

  pub fn is_active(&self) -> bool {
    self.status == EmployeeStatus::Active
  }
}
