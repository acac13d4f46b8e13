use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::directory::ports::ClientRepository;
use crate::domain::directory::EmailAddress;
use crate::domain::project::ports::{
  AssignmentRepository, ProjectRepository, TimeEntryRepository,
};
use crate::domain::project::{BillableEntry, Project};

use super::aggregator::{self, BillingSummary, RateCard};
use super::entities::{Invoice, InvoiceLineItem};
use super::errors::{InvoiceEntityError, InvoiceError};
use super::ports::{
  InvoiceEmailSender, InvoiceLineItemRepository, InvoiceRepository, InvoiceWriter,
};
use super::value_objects::{
  Currency, InvoiceNumber, InvoiceStatus, Money, ServiceDescription, ValueObjectError,
};

/// The invoice number carries a random 3-digit disambiguator, so a same-day
/// collision for one client is possible. The unique constraint catches it and
/// we retry with a fresh number a few times before giving up.
const MAX_NUMBER_ATTEMPTS: u32 = 3;

/// One priced group ready to become a line item, before an invoice id exists.
struct LineItemDraft {
  project_id: Uuid,
  employee_id: Uuid,
  assignment_id: Uuid,
  description: ServiceDescription,
  quantity: Decimal,
  rate: Money,
}

pub struct InvoiceService {
  invoice_repo: Arc<dyn InvoiceRepository>,
  line_item_repo: Arc<dyn InvoiceLineItemRepository>,
  invoice_writer: Arc<dyn InvoiceWriter>,
  email_sender: Arc<dyn InvoiceEmailSender>,
  client_repo: Arc<dyn ClientRepository>,
  project_repo: Arc<dyn ProjectRepository>,
  assignment_repo: Arc<dyn AssignmentRepository>,
  time_entry_repo: Arc<dyn TimeEntryRepository>,
}

impl InvoiceService {
  #[allow(clippy::too_many_arguments)]
  pub fn new(
    invoice_repo: Arc<dyn InvoiceRepository>,
    line_item_repo: Arc<dyn InvoiceLineItemRepository>,
    invoice_writer: Arc<dyn InvoiceWriter>,
    email_sender: Arc<dyn InvoiceEmailSender>,
    client_repo: Arc<dyn ClientRepository>,
    project_repo: Arc<dyn ProjectRepository>,
    assignment_repo: Arc<dyn AssignmentRepository>,
    time_entry_repo: Arc<dyn TimeEntryRepository>,
  ) -> Self {
    Self {
      invoice_repo,
      line_item_repo,
      invoice_writer,
      email_sender,
      client_repo,
      project_repo,
      assignment_repo,
      time_entry_repo,
    }
  }

  /// Aggregates a client's billable time for the period without persisting
  /// anything. Unresolved designations are priced at the default rate here;
  /// generation rejects them.
  pub async fn preview_billing(
    &self,
    client_id: Uuid,
    period_start: NaiveDate,
    period_end: NaiveDate,
  ) -> Result<BillingSummary, InvoiceError> {
    let (projects, rate_card, entries) = self
      .billing_inputs(client_id, period_start, period_end)
      .await?;

    Ok(aggregator::aggregate(&projects, &rate_card, &entries))
  }

  /// Generates a draft invoice from the period's billable time.
  ///
  /// Every (project, designation) group must resolve to an active assignment;
  /// a group that cannot be attributed fails the whole operation rather than
  /// silently under-stating the total. The invoice and its line items are
  /// persisted in one transaction.
  pub async fn generate_invoice(
    &self,
    client_id: Uuid,
    period_start: NaiveDate,
    period_end: NaiveDate,
    due_date: NaiveDate,
    currency: Currency,
  ) -> Result<(Invoice, Vec<InvoiceLineItem>), InvoiceError> {
    let (projects, rate_card, entries) = self
      .billing_inputs(client_id, period_start, period_end)
      .await?;

    let summary = aggregator::aggregate(&projects, &rate_card, &entries);
    if summary.is_empty() {
      return Err(InvoiceError::NoBillableTime);
    }

    let mut drafts = Vec::new();
    for sheet in &summary.timesheets {
      for line in &sheet.lines {
        let (assignment_id, employee_id) = rate_card
          .resolve_attribution(sheet.project_id, &line.designation)
          .ok_or_else(|| InvoiceError::UnresolvedAssignment {
            project_id: sheet.project_id,
            designation: line.designation.value().to_string(),
          })?;

        drafts.push(LineItemDraft {
          project_id: sheet.project_id,
          employee_id,
          assignment_id,
          description: ServiceDescription::for_group(
            line.designation.value(),
            &sheet.project_name,
          ),
          quantity: line.quantity,
          rate: Money::new(line.rate, currency)?,
        });
      }
    }

    let total_amount = Money::new(summary.grand_total, currency)?;
    let invoice_date = Utc::now().date_naive();

    for attempt in 1..=MAX_NUMBER_ATTEMPTS {
      let invoice_number = InvoiceNumber::generate(invoice_date, client_id);
      let invoice = Invoice::new(
        client_id,
        invoice_number,
        invoice_date,
        due_date,
        period_start,
        period_end,
        total_amount,
      );

      let line_items: Vec<InvoiceLineItem> = drafts
        .iter()
        .map(|draft| {
          InvoiceLineItem::new(
            invoice.id,
            draft.project_id,
            draft.employee_id,
            draft.assignment_id,
            draft.description.clone(),
            draft.quantity,
            draft.rate,
          )
        })
        .collect();

      match self
        .invoice_writer
        .write(invoice, line_items.clone())
        .await
      {
        Ok(created) => return Ok((created, line_items)),
        Err(InvoiceError::InvoiceNumberAlreadyExists(number)) => {
          tracing::warn!(
            invoice_number = %number,
            attempt,
            "invoice number collision, regenerating"
          );
        }
        Err(e) => return Err(e),
      }
    }

    Err(InvoiceError::NumberAllocationExhausted(MAX_NUMBER_ATTEMPTS))
  }

  /// Emails the invoice and marks it sent. The recipient defaults to the
  /// client's contact address. A delivery failure leaves the invoice
  /// untouched.
  pub async fn send_invoice(
    &self,
    invoice_id: Uuid,
    recipient_override: Option<EmailAddress>,
  ) -> Result<Invoice, InvoiceError> {
    let mut invoice = self
      .invoice_repo
      .find_by_id(invoice_id)
      .await?
      .ok_or(InvoiceError::InvoiceNotFound(invoice_id))?;

    if !invoice.status.can_transition_to(InvoiceStatus::Sent) {
      return Err(
        InvoiceEntityError::InvalidStatusTransition {
          from: invoice.status,
          to: InvoiceStatus::Sent,
        }
        .into(),
      );
    }

    let client = self
      .client_repo
      .find_by_id(invoice.client_id)
      .await?
      .ok_or(InvoiceError::ClientNotFound(invoice.client_id))?;

    let line_items = self.line_item_repo.find_by_invoice_id(invoice_id).await?;
    let recipient = recipient_override.unwrap_or_else(|| client.contact_email.clone());

    self
      .email_sender
      .send_invoice(&recipient, &client, &invoice, &line_items)
      .await?;

    invoice.mark_sent()?;
    self.invoice_repo.update(invoice).await
  }

  /// Records a payment date and marks the invoice paid, atomically from the
  /// caller's point of view.
  pub async fn record_payment(
    &self,
    invoice_id: Uuid,
    payment_date: NaiveDate,
  ) -> Result<Invoice, InvoiceError> {
    let mut invoice = self
      .invoice_repo
      .find_by_id(invoice_id)
      .await?
      .ok_or(InvoiceError::InvoiceNotFound(invoice_id))?;

    invoice.record_payment(payment_date)?;
    self.invoice_repo.update(invoice).await
  }

  pub async fn get_invoice(
    &self,
    invoice_id: Uuid,
  ) -> Result<(Invoice, Vec<InvoiceLineItem>), InvoiceError> {
    let invoice = self
      .invoice_repo
      .find_by_id(invoice_id)
      .await?
      .ok_or(InvoiceError::InvoiceNotFound(invoice_id))?;

    let line_items = self.line_item_repo.find_by_invoice_id(invoice_id).await?;

    Ok((Self::classify(invoice), line_items))
  }

  pub async fn list_invoices(
    &self,
    client_filter: Option<Uuid>,
    status_filter: Option<InvoiceStatus>,
  ) -> Result<Vec<Invoice>, InvoiceError> {
    let invoices = match client_filter {
      Some(client_id) => self.invoice_repo.find_by_client_id(client_id).await?,
      None => self.invoice_repo.find_all().await?,
    };

    let mut classified: Vec<Invoice> = invoices.into_iter().map(Self::classify).collect();

    if let Some(status) = status_filter {
      classified.retain(|invoice| invoice.status == status);
    }

    Ok(classified)
  }

  async fn billing_inputs(
    &self,
    client_id: Uuid,
    period_start: NaiveDate,
    period_end: NaiveDate,
  ) -> Result<(Vec<Project>, RateCard, Vec<BillableEntry>), InvoiceError> {
    if period_start > period_end {
      return Err(
        ValueObjectError::InvalidPeriod(format!(
          "Period start {} is after period end {}",
          period_start, period_end
        ))
        .into(),
      );
    }

    self
      .client_repo
      .find_by_id(client_id)
      .await?
      .ok_or(InvoiceError::ClientNotFound(client_id))?;

    // All of the client's projects are considered, regardless of status
    let projects = self.project_repo.find_by_client_id(client_id).await?;

    let project_ids: Vec<Uuid> = projects.iter().map(|p| p.id).collect();

    let assignments = self
      .assignment_repo
      .find_active_with_designations(&project_ids)
      .await?;
    let rate_card = RateCard::from_assignments(&assignments)?;

    let entries = self
      .time_entry_repo
      .find_billable_in_period(&project_ids, period_start, period_end)
      .await?;

    Ok((projects, rate_card, entries))
  }

  /// Overdue is derived, so every read reports the effective status instead
  /// of the stored one. The stored row catches up on the next write that
  /// touches the invoice anyway.
  fn classify(mut invoice: Invoice) -> Invoice {
    invoice.status = invoice.effective_status(Utc::now().date_naive());
    invoice
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::directory::{Client, ClientName, Designation, DirectoryError};
  use crate::domain::project::ports::AssignmentWithDesignation;
  use crate::domain::project::{
    Assignment, BillingRate, Hours, ProjectError, ProjectName, TimeEntry,
  };
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
      let mut clients = self.0.lock().unwrap();
      if let Some(slot) = clients.iter_mut().find(|c| c.id == client.id) {
        *slot = client.clone();
      }
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

  struct FakeProjects(Mutex<Vec<Project>>);

  #[async_trait]
  impl ProjectRepository for FakeProjects {
    async fn create(&self, project: Project) -> Result<Project, ProjectError> {
      self.0.lock().unwrap().push(project.clone());
      Ok(project)
    }
    async fn update(&self, project: Project) -> Result<Project, ProjectError> {
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

  struct FakeAssignments(Mutex<Vec<AssignmentWithDesignation>>);

  #[async_trait]
  impl AssignmentRepository for FakeAssignments {
    async fn create(&self, assignment: Assignment) -> Result<Assignment, ProjectError> {
      Ok(assignment)
    }
    async fn update(&self, assignment: Assignment) -> Result<Assignment, ProjectError> {
      Ok(assignment)
    }
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Assignment>, ProjectError> {
      Ok(
        self
          .0
          .lock()
          .unwrap()
          .iter()
          .map(|a| a.assignment.clone())
          .find(|a| a.id == id),
      )
    }
    async fn find_by_project_id(&self, project_id: Uuid) -> Result<Vec<Assignment>, ProjectError> {
      Ok(
        self
          .0
          .lock()
          .unwrap()
          .iter()
          .filter(|a| a.assignment.project_id == project_id)
          .map(|a| a.assignment.clone())
          .collect(),
      )
    }
    async fn find_active_with_designations(
      &self,
      project_ids: &[Uuid],
    ) -> Result<Vec<AssignmentWithDesignation>, ProjectError> {
      Ok(
        self
          .0
          .lock()
          .unwrap()
          .iter()
          .filter(|a| a.assignment.is_active() && project_ids.contains(&a.assignment.project_id))
          .cloned()
          .collect(),
      )
    }
  }

  struct FakeTimeEntries(Mutex<Vec<BillableEntry>>);

  #[async_trait]
  impl TimeEntryRepository for FakeTimeEntries {
    async fn create(&self, entry: TimeEntry) -> Result<TimeEntry, ProjectError> {
      Ok(entry)
    }
    async fn find_by_project_and_period(
      &self,
      _project_id: Uuid,
      _start: NaiveDate,
      _end: NaiveDate,
    ) -> Result<Vec<TimeEntry>, ProjectError> {
      Ok(Vec::new())
    }
    async fn find_billable_in_period(
      &self,
      project_ids: &[Uuid],
      start: NaiveDate,
      end: NaiveDate,
    ) -> Result<Vec<BillableEntry>, ProjectError> {
      Ok(
        self
          .0
          .lock()
          .unwrap()
          .iter()
          .filter(|e| {
            project_ids.contains(&e.project_id) && e.entry_date >= start && e.entry_date <= end
          })
          .cloned()
          .collect(),
      )
    }
  }

  struct FakeInvoices(Mutex<Vec<Invoice>>);

  #[async_trait]
  impl InvoiceRepository for FakeInvoices {
    async fn update(&self, invoice: Invoice) -> Result<Invoice, InvoiceError> {
      let mut invoices = self.0.lock().unwrap();
      if let Some(slot) = invoices.iter_mut().find(|i| i.id == invoice.id) {
        *slot = invoice.clone();
      }
      Ok(invoice)
    }
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, InvoiceError> {
      Ok(self.0.lock().unwrap().iter().find(|i| i.id == id).cloned())
    }
    async fn find_by_client_id(&self, client_id: Uuid) -> Result<Vec<Invoice>, InvoiceError> {
      Ok(
        self
          .0
          .lock()
          .unwrap()
          .iter()
          .filter(|i| i.client_id == client_id)
          .cloned()
          .collect(),
      )
    }
    async fn find_all(&self) -> Result<Vec<Invoice>, InvoiceError> {
      Ok(self.0.lock().unwrap().clone())
    }
  }

  struct FakeLineItems(Mutex<Vec<InvoiceLineItem>>);

  #[async_trait]
  impl InvoiceLineItemRepository for FakeLineItems {
    async fn find_by_invoice_id(
      &self,
      invoice_id: Uuid,
    ) -> Result<Vec<InvoiceLineItem>, InvoiceError> {
      Ok(
        self
          .0
          .lock()
          .unwrap()
          .iter()
          .filter(|i| i.invoice_id == invoice_id)
          .cloned()
          .collect(),
      )
    }
  }

  /// Stores atomically, simulating a configurable number of unique-constraint
  /// hits on the invoice number first.
  struct FakeWriter {
    invoices: Arc<FakeInvoices>,
    line_items: Arc<FakeLineItems>,
    conflicts_remaining: Mutex<u32>,
  }

  #[async_trait]
  impl InvoiceWriter for FakeWriter {
    async fn write(
      &self,
      invoice: Invoice,
      line_items: Vec<InvoiceLineItem>,
    ) -> Result<Invoice, InvoiceError> {
      {
        let mut conflicts = self.conflicts_remaining.lock().unwrap();
        if *conflicts > 0 {
          *conflicts -= 1;
          return Err(InvoiceError::InvoiceNumberAlreadyExists(
            invoice.invoice_number.value().to_string(),
          ));
        }
      }
      self.invoices.0.lock().unwrap().push(invoice.clone());
      self.line_items.0.lock().unwrap().extend(line_items);
      Ok(invoice)
    }
  }

  struct FakeEmailSender {
    fail: bool,
    sent_to: Mutex<Vec<String>>,
  }

  #[async_trait]
  impl InvoiceEmailSender for FakeEmailSender {
    async fn send_invoice(
      &self,
      recipient: &EmailAddress,
      _client: &Client,
      _invoice: &Invoice,
      _line_items: &[InvoiceLineItem],
    ) -> Result<(), super::super::errors::EmailError> {
      if self.fail {
        return Err(super::super::errors::EmailError::Transport(
          "connection refused".to_string(),
        ));
      }
      self
        .sent_to
        .lock()
        .unwrap()
        .push(recipient.value().to_string());
      Ok(())
    }
  }

  struct World {
    clients: Arc<FakeClients>,
    projects: Arc<FakeProjects>,
    assignments: Arc<FakeAssignments>,
    time_entries: Arc<FakeTimeEntries>,
    invoices: Arc<FakeInvoices>,
    line_items: Arc<FakeLineItems>,
    email: Arc<FakeEmailSender>,
  }

  impl World {
    fn new() -> Self {
      Self {
        clients: Arc::new(FakeClients(Mutex::new(Vec::new()))),
        projects: Arc::new(FakeProjects(Mutex::new(Vec::new()))),
        assignments: Arc::new(FakeAssignments(Mutex::new(Vec::new()))),
        time_entries: Arc::new(FakeTimeEntries(Mutex::new(Vec::new()))),
        invoices: Arc::new(FakeInvoices(Mutex::new(Vec::new()))),
        line_items: Arc::new(FakeLineItems(Mutex::new(Vec::new()))),
        email: Arc::new(FakeEmailSender {
          fail: false,
          sent_to: Mutex::new(Vec::new()),
        }),
      }
    }

    fn service(&self, number_conflicts: u32) -> InvoiceService {
      let writer = Arc::new(FakeWriter {
        invoices: self.invoices.clone(),
        line_items: self.line_items.clone(),
        conflicts_remaining: Mutex::new(number_conflicts),
      });
      InvoiceService::new(
        self.invoices.clone(),
        self.line_items.clone(),
        writer,
        self.email.clone(),
        self.clients.clone(),
        self.projects.clone(),
        self.assignments.clone(),
        self.time_entries.clone(),
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

    fn add_project(&self, client_id: Uuid, name: &str) -> Project {
      let project = Project::new(
        client_id,
        ProjectName::new(name.to_string()).unwrap(),
        date(2026, 1, 1),
        date(2026, 12, 31),
      );
      self.projects.0.lock().unwrap().push(project.clone());
      project
    }

    fn add_assignment(&self, project_id: Uuid, designation: &str, rate: Decimal) -> Assignment {
      let assignment = Assignment::new(
        Uuid::new_v4(),
        project_id,
        date(2026, 1, 1),
        date(2026, 12, 31),
        BillingRate::new(rate).unwrap(),
      );
      self
        .assignments
        .0
        .lock()
        .unwrap()
        .push(AssignmentWithDesignation {
          assignment: assignment.clone(),
          designation: Designation::new(designation.to_string()).unwrap(),
        });
      assignment
    }

    fn add_entry(&self, project_id: Uuid, designation: &str, day: u32, hours: Decimal) {
      self.time_entries.0.lock().unwrap().push(BillableEntry {
        project_id,
        designation: Designation::new(designation.to_string()).unwrap(),
        entry_date: date(2026, 6, day),
        hours: Hours::new(hours).unwrap(),
      });
    }
  }

  #[tokio::test]
  async fn test_generate_invoice_happy_path() {
    let world = World::new();
    let client = world.add_client();
    let project = world.add_project(client.id, "Platform Rebuild");
    let assignment = world.add_assignment(project.id, "Senior Developer", dec!(150));
    world.add_entry(project.id, "Senior Developer", 10, dec!(3));
    world.add_entry(project.id, "Senior Developer", 11, dec!(5));

    let service = world.service(0);
    let (invoice, line_items) = service
      .generate_invoice(
        client.id,
        date(2026, 6, 1),
        date(2026, 6, 30),
        date(2026, 7, 31),
        Currency::USD,
      )
      .await
      .unwrap();

    assert_eq!(invoice.status, InvoiceStatus::Draft);
    assert_eq!(invoice.total_amount.amount, dec!(1200));
    assert_eq!(line_items.len(), 1);
    assert_eq!(line_items[0].quantity, dec!(8));
    assert_eq!(line_items[0].assignment_id, assignment.id);
    assert_eq!(
      line_items[0].description.value(),
      "Senior Developer services - Platform Rebuild"
    );
    // Persisted through the writer
    assert_eq!(world.invoices.0.lock().unwrap().len(), 1);
    assert_eq!(world.line_items.0.lock().unwrap().len(), 1);
  }

  #[tokio::test]
  async fn test_generate_fails_without_billable_time() {
    let world = World::new();
    let client = world.add_client();
    let project = world.add_project(client.id, "Platform Rebuild");
    world.add_assignment(project.id, "Senior Developer", dec!(150));

    let service = world.service(0);
    let result = service
      .generate_invoice(
        client.id,
        date(2026, 6, 1),
        date(2026, 6, 30),
        date(2026, 7, 31),
        Currency::USD,
      )
      .await;

    assert!(matches!(result, Err(InvoiceError::NoBillableTime)));
    assert!(world.invoices.0.lock().unwrap().is_empty());
  }

  #[tokio::test]
  async fn test_generate_fails_on_unresolved_assignment() {
    let world = World::new();
    let client = world.add_client();
    let project = world.add_project(client.id, "Platform Rebuild");
    // Hours logged under a designation with no active assignment
    world.add_entry(project.id, "Consultant", 10, dec!(4));

    let service = world.service(0);
    let result = service
      .generate_invoice(
        client.id,
        date(2026, 6, 1),
        date(2026, 6, 30),
        date(2026, 7, 31),
        Currency::USD,
      )
      .await;

    assert!(matches!(
      result,
      Err(InvoiceError::UnresolvedAssignment { .. })
    ));
    assert!(world.invoices.0.lock().unwrap().is_empty());
  }

  #[tokio::test]
  async fn test_preview_prices_unresolved_groups_at_default_rate() {
    let world = World::new();
    let client = world.add_client();
    let project = world.add_project(client.id, "Platform Rebuild");
    world.add_entry(project.id, "Consultant", 10, dec!(4));

    let service = world.service(0);
    let summary = service
      .preview_billing(client.id, date(2026, 6, 1), date(2026, 6, 30))
      .await
      .unwrap();

    assert_eq!(summary.timesheets[0].lines[0].rate, dec!(75));
    assert_eq!(summary.grand_total, dec!(300));
  }

  #[tokio::test]
  async fn test_inverted_period_is_rejected_before_aggregation() {
    let world = World::new();
    let client = world.add_client();
    let project = world.add_project(client.id, "Platform Rebuild");
    world.add_assignment(project.id, "Senior Developer", dec!(150));
    world.add_entry(project.id, "Senior Developer", 10, dec!(3));

    let service = world.service(0);
    let preview = service
      .preview_billing(client.id, date(2026, 6, 30), date(2026, 6, 1))
      .await;
    assert!(matches!(preview, Err(InvoiceError::Validation(_))));

    let generated = service
      .generate_invoice(
        client.id,
        date(2026, 6, 30),
        date(2026, 6, 1),
        date(2026, 7, 31),
        Currency::USD,
      )
      .await;
    assert!(matches!(generated, Err(InvoiceError::Validation(_))));
    assert!(world.invoices.0.lock().unwrap().is_empty());
  }

  #[tokio::test]
  async fn test_preview_excludes_entries_outside_period() {
    let world = World::new();
    let client = world.add_client();
    let project = world.add_project(client.id, "Platform Rebuild");
    world.add_assignment(project.id, "Senior Developer", dec!(150));
    world.add_entry(project.id, "Senior Developer", 5, dec!(8));
    world.add_entry(project.id, "Senior Developer", 15, dec!(8));

    let service = world.service(0);
    let summary = service
      .preview_billing(client.id, date(2026, 6, 10), date(2026, 6, 30))
      .await
      .unwrap();

    assert_eq!(summary.timesheets[0].lines[0].quantity, dec!(8));
  }

  #[tokio::test]
  async fn test_number_conflict_retries_then_succeeds() {
    let world = World::new();
    let client = world.add_client();
    let project = world.add_project(client.id, "Platform Rebuild");
    world.add_assignment(project.id, "Senior Developer", dec!(150));
    world.add_entry(project.id, "Senior Developer", 10, dec!(8));

    // Two conflicts, success on the third attempt
    let service = world.service(2);
    let result = service
      .generate_invoice(
        client.id,
        date(2026, 6, 1),
        date(2026, 6, 30),
        date(2026, 7, 31),
        Currency::USD,
      )
      .await;

    assert!(result.is_ok());
    assert_eq!(world.invoices.0.lock().unwrap().len(), 1);
  }

  #[tokio::test]
  async fn test_number_conflicts_exhaust_retries() {
    let world = World::new();
    let client = world.add_client();
    let project = world.add_project(client.id, "Platform Rebuild");
    world.add_assignment(project.id, "Senior Developer", dec!(150));
    world.add_entry(project.id, "Senior Developer", 10, dec!(8));

    let service = world.service(3);
    let result = service
      .generate_invoice(
        client.id,
        date(2026, 6, 1),
        date(2026, 6, 30),
        date(2026, 7, 31),
        Currency::USD,
      )
      .await;

    assert!(matches!(
      result,
      Err(InvoiceError::NumberAllocationExhausted(3))
    ));
    assert!(world.invoices.0.lock().unwrap().is_empty());
  }

  #[tokio::test]
  async fn test_unknown_client_is_rejected() {
    let world = World::new();
    let service = world.service(0);

    let result = service
      .preview_billing(Uuid::new_v4(), date(2026, 6, 1), date(2026, 6, 30))
      .await;

    assert!(matches!(result, Err(InvoiceError::ClientNotFound(_))));
  }

  async fn generated_invoice(world: &World, service: &InvoiceService) -> Invoice {
    let client = world.add_client();
    let project = world.add_project(client.id, "Platform Rebuild");
    world.add_assignment(project.id, "Senior Developer", dec!(150));
    world.add_entry(project.id, "Senior Developer", 10, dec!(8));

    service
      .generate_invoice(
        client.id,
        date(2026, 6, 1),
        date(2026, 6, 30),
        date(2026, 7, 31),
        Currency::USD,
      )
      .await
      .unwrap()
      .0
  }

  #[tokio::test]
  async fn test_send_invoice_marks_sent_after_delivery() {
    let world = World::new();
    let service = world.service(0);
    let invoice = generated_invoice(&world, &service).await;

    let sent = service.send_invoice(invoice.id, None).await.unwrap();

    assert_eq!(sent.status, InvoiceStatus::Sent);
    assert_eq!(
      world.email.sent_to.lock().unwrap().as_slice(),
      ["billing@acme.com"]
    );
  }

  #[tokio::test]
  async fn test_failed_delivery_leaves_invoice_draft() {
    let mut world = World::new();
    world.email = Arc::new(FakeEmailSender {
      fail: true,
      sent_to: Mutex::new(Vec::new()),
    });
    let service = world.service(0);
    let invoice = generated_invoice(&world, &service).await;

    let result = service.send_invoice(invoice.id, None).await;

    assert!(matches!(result, Err(InvoiceError::EmailDelivery(_))));
    let stored = world.invoices.0.lock().unwrap()[0].clone();
    assert_eq!(stored.status, InvoiceStatus::Draft);
  }

  #[tokio::test]
  async fn test_send_rejected_for_already_sent_invoice() {
    let world = World::new();
    let service = world.service(0);
    let invoice = generated_invoice(&world, &service).await;

    service.send_invoice(invoice.id, None).await.unwrap();
    let result = service.send_invoice(invoice.id, None).await;

    assert!(matches!(result, Err(InvoiceError::Entity(_))));
    // No second email went out
    assert_eq!(world.email.sent_to.lock().unwrap().len(), 1);
  }

  #[tokio::test]
  async fn test_record_payment_on_sent_invoice() {
    let world = World::new();
    let service = world.service(0);
    let invoice = generated_invoice(&world, &service).await;
    service.send_invoice(invoice.id, None).await.unwrap();

    let paid = service
      .record_payment(invoice.id, date(2026, 7, 20))
      .await
      .unwrap();

    assert_eq!(paid.status, InvoiceStatus::Paid);
    assert_eq!(paid.payment_date, Some(date(2026, 7, 20)));
  }

  #[tokio::test]
  async fn test_record_payment_rejected_for_draft() {
    let world = World::new();
    let service = world.service(0);
    let invoice = generated_invoice(&world, &service).await;

    let result = service.record_payment(invoice.id, date(2026, 7, 20)).await;

    assert!(matches!(result, Err(InvoiceError::Entity(_))));
  }

  #[tokio::test]
  async fn test_listing_reports_overdue_without_rewriting_storage() {
    let world = World::new();
    let service = world.service(0);
    let invoice = generated_invoice(&world, &service).await;
    service.send_invoice(invoice.id, None).await.unwrap();

    // Age the stored invoice past its due date
    {
      let mut invoices = world.invoices.0.lock().unwrap();
      invoices[0].due_date = date(2020, 1, 1);
    }

    let listed = service.list_invoices(None, None).await.unwrap();
    assert_eq!(listed[0].status, InvoiceStatus::Overdue);
    // Reads classify; they do not write the derived status back
    let stored = world.invoices.0.lock().unwrap()[0].clone();
    assert_eq!(stored.status, InvoiceStatus::Sent);

    // Recording a payment still works from the stored SENT state
    let paid = service
      .record_payment(invoice.id, date(2026, 8, 1))
      .await
      .unwrap();
    assert_eq!(paid.status, InvoiceStatus::Paid);
  }

  #[tokio::test]
  async fn test_list_filters_by_effective_status() {
    let world = World::new();
    let service = world.service(0);
    let invoice = generated_invoice(&world, &service).await;
    service.send_invoice(invoice.id, None).await.unwrap();
    {
      let mut invoices = world.invoices.0.lock().unwrap();
      invoices[0].due_date = date(2020, 1, 1);
    }

    let overdue = service
      .list_invoices(None, Some(InvoiceStatus::Overdue))
      .await
      .unwrap();
    assert_eq!(overdue.len(), 1);

    let sent = service
      .list_invoices(None, Some(InvoiceStatus::Sent))
      .await
      .unwrap();
    assert!(sent.is_empty());
  }
}
