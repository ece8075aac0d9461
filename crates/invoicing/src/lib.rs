//! Invoicing domain module.
//!
//! This crate contains business rules for invoices and their line items,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). Monetary fields on an invoice (`subtotal`, `tax_amount`,
//! `total`) are derived through the tax calculator and never authored
//! directly; quantity and unit price on the items are the source of truth.

pub mod invoice;
pub mod item;

pub use invoice::{Invoice, InvoiceStatus};
pub use item::InvoiceItem;
