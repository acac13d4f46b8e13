pub mod generate_invoice;
pub mod get_invoice_details;
pub mod list_invoices;
pub mod preview_billing;
pub mod record_payment;
pub mod send_invoice;

pub use generate_invoice::{
  GenerateInvoiceCommand, GenerateInvoiceResponse, GenerateInvoiceUseCase,
};
pub use get_invoice_details::{
  GetInvoiceDetailsCommand, GetInvoiceDetailsUseCase, InvoiceDetailsResponse, InvoiceLineItemDto,
};
pub use list_invoices::{
  InvoiceListItemDto, ListInvoicesCommand, ListInvoicesResponse, ListInvoicesUseCase,
};
pub use preview_billing::{
  PreviewBillingCommand, PreviewBillingResponse, PreviewBillingUseCase, ProjectTimesheetDto,
  TimesheetLineDto,
};
pub use record_payment::{RecordPaymentCommand, RecordPaymentResponse, RecordPaymentUseCase};
pub use send_invoice::{SendInvoiceCommand, SendInvoiceResponse, SendInvoiceUseCase};
