pub mod assignment_repository;
pub mod client_repository;
pub mod employee_repository;
pub mod invoice_line_item_repository;
pub mod invoice_repository;
pub mod invoice_writer;
pub mod project_repository;
pub mod time_entry_repository;

pub use assignment_repository::PostgresAssignmentRepository;
pub use client_repository::PostgresClientRepository;
pub use employee_repository::PostgresEmployeeRepository;
pub use invoice_line_item_repository::PostgresInvoiceLineItemRepository;
pub use invoice_repository::PostgresInvoiceRepository;
pub use invoice_writer::PostgresInvoiceWriter;
pub use project_repository::PostgresProjectRepository;
pub use time_entry_repository::PostgresTimeEntryRepository;

/// Postgres error code for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// True when the error is a unique violation on the named constraint.
///
/// Service-level existence checks race with concurrent writers; the
/// constraint is the arbiter, and repositories translate its violation into
/// the same domain conflict the pre-check reports.
fn violates_unique_constraint(error: &sqlx::Error, constraint: &str) -> bool {
  match error {
    sqlx::Error::Database(db_err) => {
      db_err.code().as_deref() == Some(UNIQUE_VIOLATION) && db_err.constraint() == Some(constraint)
    }
    _ => false,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use sqlx::error::{DatabaseError, ErrorKind};
  use std::borrow::Cow;
  use std::error::Error as StdError;
  use std::fmt;

  #[derive(Debug)]
  struct StubDbError {
    code: &'static str,
    constraint: Option<&'static str>,
  }

  impl fmt::Display for StubDbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "duplicate key value violates unique constraint")
    }
  }

  impl StdError for StubDbError {}

  impl DatabaseError for StubDbError {
    fn message(&self) -> &str {
      "duplicate key value violates unique constraint"
    }

    fn code(&self) -> Option<Cow<'_, str>> {
      Some(Cow::Borrowed(self.code))
    }

    fn constraint(&self) -> Option<&str> {
      self.constraint
    }

    fn kind(&self) -> ErrorKind {
      ErrorKind::UniqueViolation
    }

    fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
      self
    }

    fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
      self
    }

    fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
      self
    }
  }

  fn db_error(code: &'static str, constraint: Option<&'static str>) -> sqlx::Error {
    sqlx::Error::Database(Box::new(StubDbError { code, constraint }))
  }

  #[test]
  fn test_unique_violation_matches_named_constraint() {
    let err = db_error(UNIQUE_VIOLATION, Some("clients_name_unique"));
    assert!(violates_unique_constraint(&err, "clients_name_unique"));

    let err = db_error(UNIQUE_VIOLATION, Some("employees_email_unique"));
    assert!(violates_unique_constraint(&err, "employees_email_unique"));
  }

  #[test]
  fn test_other_constraints_and_codes_do_not_match() {
    let err = db_error(UNIQUE_VIOLATION, Some("employees_email_unique"));
    assert!(!violates_unique_constraint(&err, "clients_name_unique"));

    let err = db_error("23503", Some("clients_name_unique"));
    assert!(!violates_unique_constraint(&err, "clients_name_unique"));

    let err = db_error(UNIQUE_VIOLATION, None);
    assert!(!violates_unique_constraint(&err, "clients_name_unique"));

    assert!(!violates_unique_constraint(
      &sqlx::Error::PoolTimedOut,
      "clients_name_unique"
    ));
  }
}
