use async_trait::async_trait;
use uuid::Uuid;

use super::entities::{Client, Employee};
use super::errors::DirectoryError;

#[async_trait]
pub trait ClientRepository: Send + Sync {
  async fn create(&self, client: Client) -> Result<Client, DirectoryError>;
  async fn update(&self, client: Client) -> Result<Client, DirectoryError>;
  async fn find_by_id(&self, id: Uuid) -> Result<Option<Client>, DirectoryError>;
  async fn find_all(&self) -> Result<Vec<Client>, DirectoryError>;
  async fn exists_by_name(
    &self,
    name: &str,
    exclude_id: Option<Uuid>,
  ) -> Result<bool, DirectoryError>;
}

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
  async fn create(&self, employee: Employee) -> Result<Employee, DirectoryError>;
  async fn update(&self, employee: Employee) -> Result<Employee, DirectoryError>;
  async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, DirectoryError>;
  async fn find_all(&self) -> Result<Vec<Employee>, DirectoryError>;
  async fn exists_by_email(
    &self,
    email: &str,
    exclude_id: Option<Uuid>,
  ) -> Result<bool, DirectoryError>;
}
