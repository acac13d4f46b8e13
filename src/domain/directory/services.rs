use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

use super::entities::{Client, Employee};
use super::errors::DirectoryError;
use super::ports::{ClientRepository, EmployeeRepository};
use super::value_objects::{
  ClientName, ClientStatus, Designation, EmailAddress, EmployeeStatus, PersonName,
};

/// Client creation/update data
pub struct ClientData {
  pub name: ClientName,
  pub contact_email: EmailAddress,
  pub contract_start_date: NaiveDate,
  pub contract_end_date: NaiveDate,
}

/// Employee creation data
pub struct EmployeeData {
  pub first_name: PersonName,
  pub last_name: PersonName,
  pub email: EmailAddress,
  pub hire_date: NaiveDate,
  pub designation: Designation,
}

pub struct DirectoryService {
  client_repo: Arc<dyn ClientRepository>,
  employee_repo: Arc<dyn EmployeeRepository>,
}

impl DirectoryService {
  pub fn new(
    client_repo: Arc<dyn ClientRepository>,
    employee_repo: Arc<dyn EmployeeRepository>,
  ) -> Self {
    Self {
      client_repo,
      employee_repo,
    }
  }

  // Client operations
  pub async fn create_client(&self, data: ClientData) -> Result<Client, DirectoryError> {
    if self
      .client_repo
      .exists_by_name(data.name.value(), None)
      .await?
    {
      return Err(DirectoryError::ClientNameAlreadyExists);
    }

    let client = Client::new(
      data.name,
      data.contact_email,
      data.contract_start_date,
      data.contract_end_date,
    );
    self.client_repo.create(client).await
  }

  pub async fn update_client(
    &self,
    client_id: Uuid,
    data: ClientData,
    status: ClientStatus,
  ) -> Result<Client, DirectoryError> {
    let mut client = self
      .client_repo
      .find_by_id(client_id)
      .await?
      .ok_or(DirectoryError::ClientNotFound(client_id))?;

    // Check for duplicate name (excluding current client)
    if self
      .client_repo
      .exists_by_name(data.name.value(), Some(client_id))
      .await?
    {
      return Err(DirectoryError::ClientNameAlreadyExists);
    }

    client.update(
      data.name,
      data.contact_email,
      data.contract_start_date,
      data.contract_end_date,
      status,
    );
    self.client_repo.update(client).await
  }

  pub async fn get_client(&self, client_id: Uuid) -> Result<Client, DirectoryError> {
    self
      .client_repo
      .find_by_id(client_id)
      .await?
      .ok_or(DirectoryError::ClientNotFound(client_id))
  }

  pub async fn list_clients(&self) -> Result<Vec<Client>, DirectoryError> {
    self.client_repo.find_all().await
  }

  // Employee operations
  pub async fn create_employee(&self, data: EmployeeData) -> Result<Employee, DirectoryError> {
    if self
      .employee_repo
      .exists_by_email(data.email.value(), None)
      .await?
    {
      return Err(DirectoryError::EmployeeEmailAlreadyExists);
    }

    let employee = Employee::new(
      data.first_name,
      data.last_name,
      data.email,
      data.hire_date,
      data.designation,
    );
    self.employee_repo.create(employee).await
  }

  pub async fn update_employee(
    &self,
    employee_id: Uuid,
    first_name: PersonName,
    last_name: PersonName,
    email: EmailAddress,
    designation: Designation,
    status: EmployeeStatus,
  ) -> Result<Employee, DirectoryError> {
    let mut employee = self
      .employee_repo
      .find_by_id(employee_id)
      .await?
      .ok_or(DirectoryError::EmployeeNotFound(employee_id))?;

    if self
      .employee_repo
      .exists_by_email(email.value(), Some(employee_id))
      .await?
    {
      return Err(DirectoryError::EmployeeEmailAlreadyExists);
    }

    employee.update(first_name, last_name, email, designation, status);
    self.employee_repo.update(employee).await
  }

  pub async fn get_employee(&self, employee_id: Uuid) -> Result<Employee, DirectoryError> {
    self
      .employee_repo
      .find_by_id(employee_id)
      .await?
      .ok_or(DirectoryError::EmployeeNotFound(employee_id))
  }

  pub async fn list_employees(&self) -> Result<Vec<Employee>, DirectoryError> {
    self.employee_repo.find_all().await
  }
}
