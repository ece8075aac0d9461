//! Invoice document rendering.
//!
//! Turns a finalized invoice, its client and its ordered line items into a
//! structured, print-oriented representation. The totals block is taken
//! verbatim from the tax calculator; this crate never recomputes tax on its
//! own. Byte-level export (browser print, PDF generation) is the external
//! collaborator's job: it consumes the serde-serializable
//! [`InvoiceDocument`].

pub mod invoice_doc;
pub mod profile;

pub use invoice_doc::{render_invoice, DocumentLine, InvoiceDocument, PartyBlock, TaxLine, TotalsBlock};
pub use profile::{BankDetails, BusinessProfile};
