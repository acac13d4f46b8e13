use async_trait::async_trait;
use serde::Serialize;

use crate::domain::directory::{Client, EmailAddress};
use crate::domain::invoice::{
  EmailError, Invoice, InvoiceLineItem, ports::InvoiceEmailSender,
};

/// Resend-compatible HTTP payload for sending a single email.
#[derive(Debug, Serialize)]
struct SendEmailPayload {
  from: String,
  to: Vec<String>,
  subject: String,
  html: String,
}

/// Invoice email sender backed by a Resend-style HTTP API.
///
/// Renders the invoice as an HTML table and posts it to `{base}/emails`
/// with a bearer token. Resend's test mode only delivers to the account
/// owner's address and answers 403 for anything else; that case is
/// reported separately so callers can distinguish it from a hard failure.
pub struct ResendEmailSender {
  client: reqwest::Client,
  api_base_url: String,
  api_key: String,
  from_address: String,
}

impl ResendEmailSender {
  pub fn new(api_base_url: String, api_key: String, from_address: String) -> Self {
    Self {
      client: reqwest::Client::new(),
      api_base_url,
      api_key,
      from_address,
    }
  }

  fn render_html(client: &Client, invoice: &Invoice, line_items: &[InvoiceLineItem]) -> String {
    let mut rows = String::new();
    for item in line_items {
      rows.push_str(&format!(
        "<tr><td>{}</td><td style=\"text-align:right\">{}</td>\
         <td style=\"text-align:right\">{}</td><td style=\"text-align:right\">{}</td></tr>",
        item.description.value(),
        item.quantity,
        item.rate,
        item.total(),
      ));
    }

    format!(
      r#"<html><body>
<h2>Invoice {number}</h2>
<p>Dear {client_name},</p>
<p>Please find below the invoice for services rendered between {period_start} and {period_end}.</p>
<table border="1" cellpadding="6" cellspacing="0">
<tr><th>Description</th><th>Hours</th><th>Rate</th><th>Amount</th></tr>
{rows}
<tr><td colspan="3" style="text-align:right"><strong>Total</strong></td>
<td style="text-align:right"><strong>{total}</strong></td></tr>
</table>
<p>Payment is due by {due_date}.</p>
</body></html>"#,
      number = invoice.invoice_number.value(),
      client_name = client.name.value(),
      period_start = invoice.period_start,
      period_end = invoice.period_end,
      rows = rows,
      total = invoice.total_amount,
      due_date = invoice.due_date,
    )
  }
}

#[async_trait]
impl InvoiceEmailSender for ResendEmailSender {
  async fn send_invoice(
    &self,
    recipient: &EmailAddress,
    client: &Client,
    invoice: &Invoice,
    line_items: &[InvoiceLineItem],
  ) -> Result<(), EmailError> {
    let payload = SendEmailPayload {
      from: self.from_address.clone(),
      to: vec![recipient.value().to_string()],
      subject: format!(
        "Invoice {} for {}",
        invoice.invoice_number.value(),
        client.name.value()
      ),
      html: Self::render_html(client, invoice, line_items),
    };

    let response = self
      .client
      .post(format!("{}/emails", self.api_base_url))
      .bearer_auth(&self.api_key)
      .json(&payload)
      .send()
      .await
      .map_err(|e| EmailError::Transport(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
      tracing::info!(
        invoice_number = %invoice.invoice_number.value(),
        recipient = %recipient.value(),
        "invoice email delivered"
      );
      return Ok(());
    }

    let body = response
      .text()
      .await
      .unwrap_or_else(|_| "<unreadable response body>".to_string());

    if status == reqwest::StatusCode::FORBIDDEN {
      return Err(EmailError::SandboxRestricted(body));
    }

    Err(EmailError::Rejected(format!("{}: {}", status, body)))
  }
}
