use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

use crate::domain::directory::Designation;
use crate::domain::project::{AssignmentWithDesignation, BillableEntry, Project};

use super::errors::InvoiceError;

/// Applied when a (project, designation) pair has billed hours but no active
/// assignment carrying a rate. Previews surface it as-is; invoice generation
/// refuses such groups because no assignment can be attributed.
pub const DEFAULT_HOURLY_RATE: Decimal = Decimal::from_parts(75, 0, 0, false, 0);

#[derive(Debug, Clone)]
struct RateEntry {
  assignment_id: Uuid,
  employee_id: Uuid,
  rate: Decimal,
}

/// Rate lookup keyed by (project, designation), built from the active
/// assignments of a client's projects.
///
/// The assignment layer enforces one rate per (project, designation), so a
/// conflict here means stored data predates that rule. Billing against an
/// ambiguous rate is never acceptable, so construction fails instead of
/// picking one.
#[derive(Debug, Default)]
pub struct RateCard {
  entries: HashMap<(Uuid, Designation), RateEntry>,
}

impl RateCard {
  pub fn from_assignments(
    assignments: &[AssignmentWithDesignation],
  ) -> Result<Self, InvoiceError> {
    let mut entries: HashMap<(Uuid, Designation), RateEntry> = HashMap::new();

    for item in assignments {
      let key = (item.assignment.project_id, item.designation.clone());
      match entries.get(&key) {
        Some(existing) if existing.rate != item.assignment.hourly_rate.value() => {
          return Err(InvoiceError::AmbiguousRate {
            project_id: item.assignment.project_id,
            designation: item.designation.value().to_string(),
          });
        }
        Some(_) => {}
        None => {
          entries.insert(
            key,
            RateEntry {
              assignment_id: item.assignment.id,
              employee_id: item.assignment.employee_id,
              rate: item.assignment.hourly_rate.value(),
            },
          );
        }
      }
    }

    Ok(Self { entries })
  }

  pub fn resolve_rate(&self, project_id: Uuid, designation: &Designation) -> Decimal {
    self
      .entries
      .get(&(project_id, designation.clone()))
      .map(|entry| entry.rate)
      .unwrap_or(DEFAULT_HOURLY_RATE)
  }

  /// The assignment backing a (project, designation) group, if any. Groups
  /// without one cannot be written to an invoice.
  pub fn resolve_attribution(
    &self,
    project_id: Uuid,
    designation: &Designation,
  ) -> Option<(Uuid, Uuid)> {
    self
      .entries
      .get(&(project_id, designation.clone()))
      .map(|entry| (entry.assignment_id, entry.employee_id))
  }
}

/// One billable group: every hour logged under one designation on one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetLine {
  pub designation: Designation,
  pub quantity: Decimal,
  pub rate: Decimal,
  pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectTimesheet {
  pub project_id: Uuid,
  pub project_name: String,
  pub lines: Vec<TimesheetLine>,
  pub subtotal: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingSummary {
  pub timesheets: Vec<ProjectTimesheet>,
  pub grand_total: Decimal,
}

impl BillingSummary {
  pub fn is_empty(&self) -> bool {
    self.timesheets.is_empty()
  }
}

/// Groups billable entries by (project, designation) and prices each group.
///
/// Projects with no entries in the period are dropped rather than emitted as
/// zero-amount rows. Entries from different employees sharing a designation
/// on one project merge into a single line. The amount is recomputed from the
/// accumulated quantity on every addition rather than summed incrementally.
pub fn aggregate(
  projects: &[Project],
  rate_card: &RateCard,
  entries: &[BillableEntry],
) -> BillingSummary {
  let mut grouped: HashMap<Uuid, BTreeMap<Designation, Decimal>> = HashMap::new();

  for entry in entries {
    let quantity = grouped
      .entry(entry.project_id)
      .or_default()
      .entry(entry.designation.clone())
      .or_insert(Decimal::ZERO);
    *quantity += entry.hours.value();
  }

  let mut timesheets = Vec::new();
  let mut grand_total = Decimal::ZERO;

  for project in projects {
    let Some(groups) = grouped.get(&project.id) else {
      continue;
    };

    let mut lines = Vec::with_capacity(groups.len());
    let mut subtotal = Decimal::ZERO;

    for (designation, quantity) in groups {
      let rate = rate_card.resolve_rate(project.id, designation);
      let amount = *quantity * rate;
      subtotal += amount;
      lines.push(TimesheetLine {
        designation: designation.clone(),
        quantity: *quantity,
        rate,
        amount,
      });
    }

    grand_total += subtotal;
    timesheets.push(ProjectTimesheet {
      project_id: project.id,
      project_name: project.project_name.value().to_string(),
      lines,
      subtotal,
    });
  }

  BillingSummary {
    timesheets,
    grand_total,
  }
}
