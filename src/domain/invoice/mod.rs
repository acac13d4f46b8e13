pub mod aggregator;
pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use aggregator::{BillingSummary, ProjectTimesheet, RateCard, TimesheetLine};
pub use entities::{Invoice, InvoiceLineItem};
pub use errors::{EmailError, InvoiceEntityError, InvoiceError};
pub use ports::{
  InvoiceEmailSender, InvoiceLineItemRepository, InvoiceRepository, InvoiceWriter,
};
pub use services::InvoiceService;
pub use value_objects::{Currency, InvoiceNumber, InvoiceStatus, Money, ServiceDescription};
