pub mod clients;
pub mod employees;
pub mod health;
pub mod invoices;
pub mod projects;
pub mod time_entries;
