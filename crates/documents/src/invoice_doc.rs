use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ledgercraft_clients::Client;
use ledgercraft_core::{DomainError, DomainResult};
use ledgercraft_format::{format_currency, format_date, format_percentage};
use ledgercraft_invoicing::{Invoice, InvoiceItem};
use ledgercraft_tax::TaxMode;

use crate::profile::BusinessProfile;

/// One party identity block (seller or bill-to).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyBlock {
    pub name: String,
    pub address_lines: Vec<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gstin: Option<String>,
}

/// One row of the line-item table, with display strings precomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentLine {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub line_total: f64,
    pub unit_price_display: String,
    pub line_total_display: String,
}

/// One tax line in the totals block (`GST (18%)`, or `SGST (9%)` + `CGST (9%)`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxLine {
    pub label: String,
    pub amount: f64,
    pub amount_display: String,
}

/// The totals block. Amounts come from the tax calculator's rounded output;
/// the renderer never does its own arithmetic on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalsBlock {
    pub subtotal: f64,
    pub subtotal_display: String,
    pub tax_lines: Vec<TaxLine>,
    pub total: f64,
    pub total_display: String,
}

/// Structured, print-oriented invoice representation handed to the external
/// print/PDF collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDocument {
    pub invoice_number: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub issue_date_display: String,
    pub due_date_display: String,
    pub seller: PartyBlock,
    pub bill_to: PartyBlock,
    pub lines: Vec<DocumentLine>,
    pub totals: TotalsBlock,
}

/// Render `invoice` + `client` + ordered `items` into a document.
///
/// Fails when the pieces are mis-wired (client or item not belonging to the
/// invoice); the totals block is the calculator's rounded output for exactly
/// these items and the invoice's tax terms.
pub fn render_invoice(
    invoice: &Invoice,
    client: &Client,
    items: &[InvoiceItem],
    profile: &BusinessProfile,
) -> DomainResult<InvoiceDocument> {
    if client.id != invoice.client_id {
        return Err(DomainError::invariant(
            "client does not match the invoice's client_id",
        ));
    }

    let totals = invoice.compute(items)?.rounded();

    let lines = items
        .iter()
        .map(|item| {
            let line_total = item.line_total();
            DocumentLine {
                description: item.description.clone(),
                quantity: item.quantity,
                unit_price: item.unit_price,
                line_total,
                unit_price_display: format_currency(item.unit_price),
                line_total_display: format_currency(line_total),
            }
        })
        .collect();

    let tax_lines = match invoice.tax_mode {
        TaxMode::Gst => vec![TaxLine {
            label: format!("GST ({})", format_percentage(invoice.tax_rate)),
            amount: totals.tax_amount,
            amount_display: format_currency(totals.tax_amount),
        }],
        TaxMode::Igst => vec![TaxLine {
            label: format!("IGST ({})", format_percentage(invoice.tax_rate)),
            amount: totals.tax_amount,
            amount_display: format_currency(totals.tax_amount),
        }],
        TaxMode::SgstCgst => {
            let half_rate = format_percentage(invoice.tax_rate / 2.0);
            let sgst = totals.sgst_amount.unwrap_or(0.0);
            let cgst = totals.cgst_amount.unwrap_or(0.0);
            vec![
                TaxLine {
                    label: format!("SGST ({half_rate})"),
                    amount: sgst,
                    amount_display: format_currency(sgst),
                },
                TaxLine {
                    label: format!("CGST ({half_rate})"),
                    amount: cgst,
                    amount_display: format_currency(cgst),
                },
            ]
        }
    };

    let document = InvoiceDocument {
        invoice_number: invoice.invoice_number.clone(),
        issue_date: invoice.issue_date,
        due_date: invoice.due_date,
        issue_date_display: format_date(invoice.issue_date),
        due_date_display: format_date(invoice.due_date),
        seller: PartyBlock {
            name: profile.name.clone(),
            address_lines: profile.address_lines.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            gstin: profile.gstin.clone(),
        },
        bill_to: PartyBlock {
            name: client.name.clone(),
            address_lines: client
                .contact
                .address
                .iter()
                .cloned()
                .collect(),
            email: client.contact.email.clone(),
            phone: client.contact.phone.clone(),
            gstin: client.contact.gstin.clone(),
        },
        lines,
        totals: TotalsBlock {
            subtotal: totals.subtotal,
            subtotal_display: format_currency(totals.subtotal),
            tax_lines,
            total: totals.total,
            total_display: format_currency(totals.total),
        },
    };

    tracing::debug!(
        invoice_number = %document.invoice_number,
        lines = document.lines.len(),
        total = document.totals.total,
        "rendered invoice document"
    );

    Ok(document)
}

impl InvoiceDocument {
    /// Plain-text rendering for print preview and logs.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("INVOICE {}\n", self.invoice_number));
        out.push_str(&format!(
            "Issued {}    Due {}\n\n",
            self.issue_date_display, self.due_date_display
        ));

        out.push_str(&format!("From: {}\n", self.seller.name));
        for line in &self.seller.address_lines {
            out.push_str(&format!("      {line}\n"));
        }
        if let Some(gstin) = &self.seller.gstin {
            out.push_str(&format!("      GSTIN {gstin}\n"));
        }

        out.push_str(&format!("\nBill to: {}\n", self.bill_to.name));
        for line in &self.bill_to.address_lines {
            out.push_str(&format!("         {line}\n"));
        }
        if let Some(gstin) = &self.bill_to.gstin {
            out.push_str(&format!("         GSTIN {gstin}\n"));
        }

        out.push('\n');
        for line in &self.lines {
            out.push_str(&format!(
                "{}  x{}  @ {}  =  {}\n",
                line.description, line.quantity, line.unit_price_display, line.line_total_display
            ));
        }

        out.push_str(&format!("\nSubtotal  {}\n", self.totals.subtotal_display));
        for tax in &self.totals.tax_lines {
            out.push_str(&format!("{}  {}\n", tax.label, tax.amount_display));
        }
        out.push_str(&format!("TOTAL     {}\n", self.totals.total_display));

        out
    }
}
