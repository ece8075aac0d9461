use serde::{Deserialize, Serialize};

use ledgercraft_core::{round_half_up, ValueObject};

/// How the tax on an invoice is levied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaxMode {
    /// Single-rate GST (default for domestic billing).
    Gst,
    /// Integrated GST, single rate (inter-state supply).
    Igst,
    /// Even split into state + central halves (intra-state supply).
    SgstCgst,
}

/// One line's billable amounts, as entered by the user.
///
/// Quantity and unit price are the source of truth; line totals are always
/// derived from them, never stored independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineInput {
    pub quantity: f64,
    pub unit_price: f64,
}

impl LineInput {
    pub fn new(quantity: f64, unit_price: f64) -> Self {
        Self {
            quantity,
            unit_price,
        }
    }

    pub fn amount(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// Computed totals for a set of lines under a tax rate and mode.
///
/// Amounts are full-precision `f64`; call [`TaxTotals::rounded`] at the
/// display/handoff boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxTotals {
    pub subtotal: f64,
    pub tax_amount: f64,
    /// Present only under [`TaxMode::SgstCgst`].
    pub sgst_amount: Option<f64>,
    /// Present only under [`TaxMode::SgstCgst`]. Always equals `sgst_amount`.
    pub cgst_amount: Option<f64>,
    pub total: f64,
}

impl ValueObject for TaxTotals {}
impl ValueObject for LineInput {}

impl TaxTotals {
    /// All-zero totals (an invoice with no items owes nothing).
    pub fn zero() -> Self {
        Self {
            subtotal: 0.0,
            tax_amount: 0.0,
            sgst_amount: None,
            cgst_amount: None,
            total: 0.0,
        }
    }

    /// Totals rounded half-up to two decimals, for display or document
    /// handoff.
    pub fn rounded(&self) -> Self {
        Self {
            subtotal: round_half_up(self.subtotal),
            tax_amount: round_half_up(self.tax_amount),
            sgst_amount: self.sgst_amount.map(round_half_up),
            cgst_amount: self.cgst_amount.map(round_half_up),
            total: round_half_up(self.total),
        }
    }
}

/// Compute subtotal, tax amount(s) and grand total for `items`.
///
/// `tax_rate` is a percentage (18.0 means 18%). Under [`TaxMode::SgstCgst`]
/// the rate splits evenly into state and central halves; the combined amount
/// equals the single-rate amount for the same rate (tax neutrality).
///
/// Arithmetic stays at full `f64` precision; no rounding happens here. Zero
/// items yield all-zero totals. Negative quantities or prices are the
/// validation layer's job to reject; this function propagates whatever it is
/// given.
pub fn compute_totals(items: &[LineInput], tax_rate: f64, mode: TaxMode) -> TaxTotals {
    let subtotal: f64 = items.iter().map(LineInput::amount).sum();

    match mode {
        TaxMode::Gst | TaxMode::Igst => {
            let tax_amount = subtotal * tax_rate / 100.0;
            TaxTotals {
                subtotal,
                tax_amount,
                sgst_amount: None,
                cgst_amount: None,
                total: subtotal + tax_amount,
            }
        }
        TaxMode::SgstCgst => {
            let half = subtotal * tax_rate / 200.0;
            let tax_amount = half + half;
            TaxTotals {
                subtotal,
                tax_amount,
                sgst_amount: Some(half),
                cgst_amount: Some(half),
                total: subtotal + tax_amount,
            }
        }
    }
}
