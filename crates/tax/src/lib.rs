//! Tax & totals calculator.
//!
//! Derives `subtotal`, tax amount(s) and grand total for an invoice (or a
//! project's cost breakdown) from its line amounts, implemented purely as
//! deterministic domain logic (no IO, no storage).
//!
//! Indian GST has two collection shapes: a single integrated levy (IGST, used
//! for inter-state supply; plain GST is treated the same way) and an even
//! split between state and central halves (SGST + CGST, intra-state supply).
//! The split must be *tax-neutral*: for the same rate, the sum of the halves
//! equals the single-rate amount.

pub mod totals;

pub use totals::{compute_totals, LineInput, TaxMode, TaxTotals};
