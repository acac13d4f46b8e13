use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::directory::ports::{ClientRepository, EmployeeRepository};

use super::entities::{Assignment, Project, TimeEntry};
use super::errors::ProjectError;
use super::ports::{AssignmentRepository, ProjectRepository, TimeEntryRepository};
use super::value_objects::{BillingRate, Hours, ProjectName, ProjectStatus};

pub struct ProjectService {
  project_repo: Arc<dyn ProjectRepository>,
  assignment_repo: Arc<dyn AssignmentRepository>,
  time_entry_repo: Arc<dyn TimeEntryRepository>,
  client_repo: Arc<dyn ClientRepository>,
  employee_repo: Arc<dyn EmployeeRepository>,
}

impl ProjectService {
  pub fn new(
    project_repo: Arc<dyn ProjectRepository>,
    assignment_repo: Arc<dyn AssignmentRepository>,
    time_entry_repo: Arc<dyn TimeEntryRepository>,
    client_repo: Arc<dyn ClientRepository>,
    employee_repo: Arc<dyn EmployeeRepository>,
  ) -> Self {
    Self {
      project_repo,
      assignment_repo,
      time_entry_repo,
      client_repo,
      employee_repo,
    }
  }

  pub async fn create_project(
    &self,
    client_id: Uuid,
    project_name: ProjectName,
    start_date: NaiveDate,
    end_date: NaiveDate,
  ) -> Result<Project, ProjectError> {
    // Verify the owning client exists
    self
      .client_repo
      .find_by_id(client_id)
      .await?
      .ok_or(ProjectError::ClientNotFound(client_id))?;

    let project = Project::new(client_id, project_name, start_date, end_date);
    self.project_repo.create(project).await
  }

  pub async fn set_project_status(
    &self,
    project_id: Uuid,
    status: ProjectStatus,
  ) -> Result<Project, ProjectError> {
    let mut project = self
      .project_repo
      .find_by_id(project_id)
      .await?
      .ok_or(ProjectError::ProjectNotFound(project_id))?;

    project.set_status(status);
    self.project_repo.update(project).await
  }

  pub async fn list_projects(
    &self,
    client_filter: Option<Uuid>,
  ) -> Result<Vec<Project>, ProjectError> {
    match client_filter {
      Some(client_id) => self.project_repo.find_by_client_id(client_id).await,
      None => self.project_repo.find_all().await,
    }
  }

  /// Assign an employee to a project with a billing rate.
  ///
  /// The invoicing pipeline resolves rates by (project, designation), so a
  /// second active assignment for the same pair must carry the same rate;
  /// otherwise rate resolution would be ambiguous and the request is rejected.
  pub async fn assign_employee(
    &self,
    project_id: Uuid,
    employee_id: Uuid,
    start_date: NaiveDate,
    end_date: NaiveDate,
    hourly_rate: BillingRate,
  ) -> Result<Assignment, ProjectError> {
    self
      .project_repo
      .find_by_id(project_id)
      .await?
      .ok_or(ProjectError::ProjectNotFound(project_id))?;

    let employee = self
      .employee_repo
      .find_by_id(employee_id)
      .await?
      .ok_or(ProjectError::EmployeeNotFound(employee_id))?;

    if !employee.is_active() {
      return Err(ProjectError::EmployeeInactive);
    }

    let active = self
      .assignment_repo
      .find_active_with_designations(&[project_id])
      .await?;

    for existing in &active {
      if existing.assignment.employee_id == employee_id {
        return Err(ProjectError::AlreadyAssigned);
      }
      if existing.designation == employee.designation
        && existing.assignment.hourly_rate != hourly_rate
      {
        return Err(ProjectError::DesignationRateConflict {
          designation: employee.designation.value().to_string(),
          existing_rate: existing.assignment.hourly_rate.value().to_string(),
        });
      }
    }

    let assignment = Assignment::new(employee_id, project_id, start_date, end_date, hourly_rate);
    self.assignment_repo.create(assignment).await
  }

  pub async fn complete_assignment(&self, assignment_id: Uuid) -> Result<Assignment, ProjectError> {
    let mut assignment = self
      .assignment_repo
      .find_by_id(assignment_id)
      .await?
      .ok_or(ProjectError::AssignmentNotFound(assignment_id))?;

    assignment.complete();
    self.assignment_repo.update(assignment).await
  }

  pub async fn list_assignments(&self, project_id: Uuid) -> Result<Vec<Assignment>, ProjectError> {
    self.assignment_repo.find_by_project_id(project_id).await
  }

  pub async fn record_time_entry(
    &self,
    employee_id: Uuid,
    project_id: Uuid,
    entry_date: NaiveDate,
    hours: Hours,
  ) -> Result<TimeEntry, ProjectError> {
    let employee = self
      .employee_repo
      .find_by_id(employee_id)
      .await?
      .ok_or(ProjectError::EmployeeNotFound(employee_id))?;

    if !employee.is_active() {
      return Err(ProjectError::EmployeeInactive);
    }

    self
      .project_repo
      .find_by_id(project_id)
      .await?
      .ok_or(ProjectError::ProjectNotFound(project_id))?;

    let entry = TimeEntry::new(employee_id, project_id, entry_date, hours);
    self.time_entry_repo.create(entry).await
  }

  pub async fn list_time_entries(
    &self,
    project_id: Uuid,
    start: NaiveDate,
    end: NaiveDate,
  ) -> Result<Vec<TimeEntry>, ProjectError> {
    self
      .time_entry_repo
      .find_by_project_and_period(project_id, start, end)
      .await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::directory::{
    Client, ClientName, Designation, DirectoryError, EmailAddress, Employee, EmployeeStatus,
    PersonName,
  };
  use crate::domain::project::ports::{AssignmentWithDesignation, BillableEntry};
  use async_trait::async_trait;
  use rust_decimal_macros::dec;
  use std::sync::Mutex;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  struct FakeClients(Mutex<Vec<Client>>);

  #[async_trait]
  impl ClientRepository for FakeClients {
    async fn create(&self, client: Client) -> Result<Client, DirectoryError> {
      self.0.lock().unwrap().push(client.clone());
      Ok(client)
    }
    async fn update(&self, client: Client) -> Result<Client, DirectoryError> {
      Ok(client)
    }
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Client>, DirectoryError> {
      Ok(self.0.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }
    async fn find_all(&self) -> Result<Vec<Client>, DirectoryError> {
      Ok(self.0.lock().unwrap().clone())
    }
    async fn exists_by_name(
      &self,
      name: &str,
      exclude_id: Option<Uuid>,
    ) -> Result<bool, DirectoryError> {
      Ok(
        self
          .0
          .lock()
          .unwrap()
          .iter()
          .any(|c| c.name.value() == name && Some(c.id) != exclude_id),
      )
    }
  }

  struct FakeEmployees(Mutex<Vec<Employee>>);

  #[async_trait]
  impl EmployeeRepository for FakeEmployees {
    async fn create(&self, employee: Employee) -> Result<Employee, DirectoryError> {
      self.0.lock().unwrap().push(employee.clone());
      Ok(employee)
    }
    async fn update(&self, employee: Employee) -> Result<Employee, DirectoryError> {
      Ok(employee)
    }
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, DirectoryError> {
      Ok(self.0.lock().unwrap().iter().find(|e| e.id == id).cloned())
    }
    async fn find_all(&self) -> Result<Vec<Employee>, DirectoryError> {
      Ok(self.0.lock().unwrap().clone())
    }
    async fn exists_by_email(
      &self,
      email: &str,
      exclude_id: Option<Uuid>,
    ) -> Result<bool, DirectoryError> {
      Ok(
        self
          .0
          .lock()
          .unwrap()
          .iter()
          .any(|e| e.email.value() == email && Some(e.id) != exclude_id),
      )
    }
  }

  struct FakeProjects(Mutex<Vec<Project>>);

  #[async_trait]
  impl ProjectRepository for FakeProjects {
    async fn create(&self, project: Project) -> Result<Project, ProjectError> {
      self.0.lock().unwrap().push(project.clone());
      Ok(project)
    }
    async fn update(&self, project: Project) -> Result<Project, ProjectError> {
      let mut projects = self.0.lock().unwrap();
      if let Some(slot) = projects.iter_mut().find(|p| p.id == project.id) {
        *slot = project.clone();
      }
      Ok(project)
    }
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, ProjectError> {
      Ok(self.0.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }
    async fn find_by_client_id(&self, client_id: Uuid) -> Result<Vec<Project>, ProjectError> {
      Ok(
        self
          .0
          .lock()
          .unwrap()
          .iter()
          .filter(|p| p.client_id == client_id)
          .cloned()
          .collect(),
      )
    }
    async fn find_all(&self) -> Result<Vec<Project>, ProjectError> {
      Ok(self.0.lock().unwrap().clone())
    }
  }

  /// The fake joins to the shared employee list for designations, as the SQL
  /// repository does with its JOIN.
  struct FakeAssignments {
    items: Mutex<Vec<Assignment>>,
    employees: Arc<FakeEmployees>,
  }

  #[async_trait]
  impl AssignmentRepository for FakeAssignments {
    async fn create(&self, assignment: Assignment) -> Result<Assignment, ProjectError> {
      self.items.lock().unwrap().push(assignment.clone());
      Ok(assignment)
    }
    async fn update(&self, assignment: Assignment) -> Result<Assignment, ProjectError> {
      let mut items = self.items.lock().unwrap();
      if let Some(slot) = items.iter_mut().find(|a| a.id == assignment.id) {
        *slot = assignment.clone();
      }
      Ok(assignment)
    }
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Assignment>, ProjectError> {
      Ok(self.items.lock().unwrap().iter().find(|a| a.id == id).cloned())
    }
    async fn find_by_project_id(&self, project_id: Uuid) -> Result<Vec<Assignment>, ProjectError> {
      Ok(
        self
          .items
          .lock()
          .unwrap()
          .iter()
          .filter(|a| a.project_id == project_id)
          .cloned()
          .collect(),
      )
    }
    async fn find_active_with_designations(
      &self,
      project_ids: &[Uuid],
    ) -> Result<Vec<AssignmentWithDesignation>, ProjectError> {
      let employees = self.employees.0.lock().unwrap();
      Ok(
        self
          .items
          .lock()
          .unwrap()
          .iter()
          .filter(|a| a.is_active() && project_ids.contains(&a.project_id))
          .map(|a| AssignmentWithDesignation {
            assignment: a.clone(),
            designation: employees
              .iter()
              .find(|e| e.id == a.employee_id)
              .map(|e| e.designation.clone())
              .unwrap(),
          })
          .collect(),
      )
    }
  }

  struct FakeTimeEntries(Mutex<Vec<TimeEntry>>);

  #[async_trait]
  impl TimeEntryRepository for FakeTimeEntries {
    async fn create(&self, entry: TimeEntry) -> Result<TimeEntry, ProjectError> {
      self.0.lock().unwrap().push(entry.clone());
      Ok(entry)
    }
    async fn find_by_project_and_period(
      &self,
      project_id: Uuid,
      start: NaiveDate,
      end: NaiveDate,
    ) -> Result<Vec<TimeEntry>, ProjectError> {
      Ok(
        self
          .0
          .lock()
          .unwrap()
          .iter()
          .filter(|e| e.project_id == project_id && e.entry_date >= start && e.entry_date <= end)
          .cloned()
          .collect(),
      )
    }
    async fn find_billable_in_period(
      &self,
      _project_ids: &[Uuid],
      _start: NaiveDate,
      _end: NaiveDate,
    ) -> Result<Vec<BillableEntry>, ProjectError> {
      Ok(Vec::new())
    }
  }

  struct World {
    clients: Arc<FakeClients>,
    employees: Arc<FakeEmployees>,
    projects: Arc<FakeProjects>,
  }

  impl World {
    fn new() -> Self {
      Self {
        clients: Arc::new(FakeClients(Mutex::new(Vec::new()))),
        employees: Arc::new(FakeEmployees(Mutex::new(Vec::new()))),
        projects: Arc::new(FakeProjects(Mutex::new(Vec::new()))),
      }
    }

    fn service(&self) -> ProjectService {
      ProjectService::new(
        self.projects.clone(),
        Arc::new(FakeAssignments {
          items: Mutex::new(Vec::new()),
          employees: self.employees.clone(),
        }),
        Arc::new(FakeTimeEntries(Mutex::new(Vec::new()))),
        self.clients.clone(),
        self.employees.clone(),
      )
    }

    fn add_client(&self) -> Client {
      let client = Client::new(
        ClientName::new("Acme Corp".to_string()).unwrap(),
        EmailAddress::new("billing@acme.com".to_string()).unwrap(),
        date(2026, 1, 1),
        date(2026, 12, 31),
      );
      self.clients.0.lock().unwrap().push(client.clone());
      client
    }

    fn add_employee(&self, email: &str, designation: &str) -> Employee {
      let employee = Employee::new(
        PersonName::new("Jane".to_string()).unwrap(),
        PersonName::new("Doe".to_string()).unwrap(),
        EmailAddress::new(email.to_string()).unwrap(),
        date(2025, 6, 1),
        Designation::new(designation.to_string()).unwrap(),
      );
      self.employees.0.lock().unwrap().push(employee.clone());
      employee
    }

    fn add_project(&self, client_id: Uuid) -> Project {
      let project = Project::new(
        client_id,
        ProjectName::new("Platform Rebuild".to_string()).unwrap(),
        date(2026, 1, 1),
        date(2026, 12, 31),
      );
      self.projects.0.lock().unwrap().push(project.clone());
      project
    }
  }

  #[tokio::test]
  async fn test_create_project_requires_existing_client() {
    let world = World::new();
    let service = world.service();

    let result = service
      .create_project(
        Uuid::new_v4(),
        ProjectName::new("Ghost".to_string()).unwrap(),
        date(2026, 1, 1),
        date(2026, 6, 30),
      )
      .await;

    assert!(matches!(result, Err(ProjectError::ClientNotFound(_))));
  }

  #[tokio::test]
  async fn test_assign_employee_happy_path() {
    let world = World::new();
    let client = world.add_client();
    let project = world.add_project(client.id);
    let employee = world.add_employee("jane@example.com", "Senior Developer");
    let service = world.service();

    let assignment = service
      .assign_employee(
        project.id,
        employee.id,
        date(2026, 1, 1),
        date(2026, 6, 30),
        BillingRate::new(dec!(150)).unwrap(),
      )
      .await
      .unwrap();

    assert!(assignment.is_active());
    assert_eq!(assignment.hourly_rate.value(), dec!(150));
  }

  #[tokio::test]
  async fn test_assign_rejects_inactive_employee() {
    let world = World::new();
    let client = world.add_client();
    let project = world.add_project(client.id);
    let mut employee = world.add_employee("jane@example.com", "Senior Developer");
    employee.status = EmployeeStatus::Inactive;
    world.employees.0.lock().unwrap()[0] = employee.clone();
    let service = world.service();

    let result = service
      .assign_employee(
        project.id,
        employee.id,
        date(2026, 1, 1),
        date(2026, 6, 30),
        BillingRate::new(dec!(150)).unwrap(),
      )
      .await;

    assert!(matches!(result, Err(ProjectError::EmployeeInactive)));
  }

  #[tokio::test]
  async fn test_assign_rejects_second_active_assignment_for_same_employee() {
    let world = World::new();
    let client = world.add_client();
    let project = world.add_project(client.id);
    let employee = world.add_employee("jane@example.com", "Senior Developer");
    let service = world.service();

    service
      .assign_employee(
        project.id,
        employee.id,
        date(2026, 1, 1),
        date(2026, 6, 30),
        BillingRate::new(dec!(150)).unwrap(),
      )
      .await
      .unwrap();

    let result = service
      .assign_employee(
        project.id,
        employee.id,
        date(2026, 7, 1),
        date(2026, 12, 31),
        BillingRate::new(dec!(150)).unwrap(),
      )
      .await;

    assert!(matches!(result, Err(ProjectError::AlreadyAssigned)));
  }

  #[tokio::test]
  async fn test_assign_rejects_conflicting_rate_for_shared_designation() {
    let world = World::new();
    let client = world.add_client();
    let project = world.add_project(client.id);
    let first = world.add_employee("jane@example.com", "Senior Developer");
    let second = world.add_employee("john@example.com", "Senior Developer");
    let service = world.service();

    service
      .assign_employee(
        project.id,
        first.id,
        date(2026, 1, 1),
        date(2026, 6, 30),
        BillingRate::new(dec!(150)).unwrap(),
      )
      .await
      .unwrap();

    let result = service
      .assign_employee(
        project.id,
        second.id,
        date(2026, 1, 1),
        date(2026, 6, 30),
        BillingRate::new(dec!(175)).unwrap(),
      )
      .await;

    assert!(matches!(
      result,
      Err(ProjectError::DesignationRateConflict { .. })
    ));
  }

  #[tokio::test]
  async fn test_assign_allows_same_rate_for_shared_designation() {
    let world = World::new();
    let client = world.add_client();
    let project = world.add_project(client.id);
    let first = world.add_employee("jane@example.com", "Senior Developer");
    let second = world.add_employee("john@example.com", "Senior Developer");
    let service = world.service();

    service
      .assign_employee(
        project.id,
        first.id,
        date(2026, 1, 1),
        date(2026, 6, 30),
        BillingRate::new(dec!(150)).unwrap(),
      )
      .await
      .unwrap();

    let result = service
      .assign_employee(
        project.id,
        second.id,
        date(2026, 1, 1),
        date(2026, 6, 30),
        BillingRate::new(dec!(150)).unwrap(),
      )
      .await;

    assert!(result.is_ok());
  }

  #[tokio::test]
  async fn test_record_time_entry_rejects_inactive_employee() {
    let world = World::new();
    let client = world.add_client();
    let project = world.add_project(client.id);
    let mut employee = world.add_employee("jane@example.com", "Senior Developer");
    employee.status = EmployeeStatus::Inactive;
    world.employees.0.lock().unwrap()[0] = employee.clone();
    let service = world.service();

    let result = service
      .record_time_entry(
        employee.id,
        project.id,
        date(2026, 6, 10),
        Hours::new(dec!(8)).unwrap(),
      )
      .await;

    assert!(matches!(result, Err(ProjectError::EmployeeInactive)));
  }

  #[tokio::test]
  async fn test_record_time_entry_rejects_unknown_project() {
    let world = World::new();
    let employee = world.add_employee("jane@example.com", "Senior Developer");
    let service = world.service();

    let result = service
      .record_time_entry(
        employee.id,
        Uuid::new_v4(),
        date(2026, 6, 10),
        Hours::new(dec!(8)).unwrap(),
      )
      .await;

    assert!(matches!(result, Err(ProjectError::ProjectNotFound(_))));
  }

  #[tokio::test]
  async fn test_complete_assignment_flips_status() {
    let world = World::new();
    let client = world.add_client();
    let project = world.add_project(client.id);
    let employee = world.add_employee("jane@example.com", "Senior Developer");
    let service = world.service();

    let assignment = service
      .assign_employee(
        project.id,
        employee.id,
        date(2026, 1, 1),
        date(2026, 6, 30),
        BillingRate::new(dec!(150)).unwrap(),
      )
      .await
      .unwrap();

    let completed = service.complete_assignment(assignment.id).await.unwrap();
    assert!(!completed.is_active());
  }
}
