//! Client-billing administration service.
//!
//! Manages clients, employees, projects, assignments and time entries, and
//! generates invoices by aggregating billable time over a period. Organized
//! hexagonally: domain logic behind ports, use cases in the application
//! layer, actix-web and Postgres at the edges.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
