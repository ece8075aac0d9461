use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use ledgercraft_core::{ClientId, DomainError, DomainResult, Entity, InvoiceId, ProjectId};
use ledgercraft_tax::{compute_totals, LineInput, TaxMode, TaxTotals};

use crate::item::InvoiceItem;

/// Invoice status lifecycle.
///
/// `Overdue` is never set by the user: a `Sent` invoice past its due date
/// *displays* as overdue via [`InvoiceStatus::display`], and the stored
/// status only moves there through the same derivation applied at
/// persistence time. `Paid` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    /// Whether the state machine permits moving from `self` to `to`.
    pub fn can_transition(self, to: InvoiceStatus) -> bool {
        use InvoiceStatus::*;
        matches!(
            (self, to),
            (Draft, Sent | Cancelled)
                | (Sent, Paid | Overdue | Cancelled)
                | (Overdue, Paid | Cancelled)
        )
    }

    /// Validate and perform a transition.
    pub fn transition(self, to: InvoiceStatus) -> DomainResult<InvoiceStatus> {
        if !self.can_transition(to) {
            return Err(DomainError::conflict(format!(
                "cannot move invoice from {self:?} to {to:?}"
            )));
        }
        Ok(to)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, InvoiceStatus::Paid | InvoiceStatus::Cancelled)
    }

    /// Read-time derivation: a sent invoice past its due date displays as
    /// overdue without mutating the stored status.
    pub fn display(self, due_date: NaiveDate, today: NaiveDate) -> InvoiceStatus {
        if self == InvoiceStatus::Sent && due_date < today {
            InvoiceStatus::Overdue
        } else {
            self
        }
    }
}

/// A client invoice.
///
/// `subtotal`, `tax_amount` and `total` are derived fields: the only writer
/// is [`Invoice::recalculate`], which routes through the tax calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub invoice_number: String,
    pub client_id: ClientId,
    pub project_id: Option<ProjectId>,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    pub tax_rate: f64,
    pub tax_mode: TaxMode,
    pub subtotal: f64,
    pub tax_amount: f64,
    pub total: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: InvoiceId,
        invoice_number: impl Into<String>,
        client_id: ClientId,
        project_id: Option<ProjectId>,
        issue_date: NaiveDate,
        due_date: NaiveDate,
        tax_rate: f64,
        tax_mode: TaxMode,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let invoice_number = invoice_number.into();
        if invoice_number.trim().is_empty() {
            return Err(DomainError::validation("invoice number cannot be empty"));
        }
        if issue_date > due_date {
            return Err(DomainError::validation(
                "issue date must not be after due date",
            ));
        }
        if !tax_rate.is_finite() || tax_rate < 0.0 {
            return Err(DomainError::validation(
                "tax rate must be a non-negative number",
            ));
        }

        Ok(Self {
            id,
            invoice_number,
            client_id,
            project_id,
            issue_date,
            due_date,
            status: InvoiceStatus::Draft,
            tax_rate,
            tax_mode,
            subtotal: 0.0,
            tax_amount: 0.0,
            total: 0.0,
            created_at,
            updated_at: created_at,
        })
    }

    /// Re-derive `subtotal`/`tax_amount`/`total` from `items` through the
    /// tax calculator, and return the full-precision totals.
    ///
    /// Every item must belong to this invoice; edits to items must call this
    /// again (recomputation-on-write is the consistency mechanism, there is
    /// no separate mismatch detection).
    pub fn recalculate(&mut self, items: &[InvoiceItem]) -> DomainResult<TaxTotals> {
        let totals = self.compute(items)?;
        self.subtotal = totals.subtotal;
        self.tax_amount = totals.tax_amount;
        self.total = totals.total;
        Ok(totals)
    }

    /// Calculator output for `items` under this invoice's tax terms, without
    /// touching the stored fields.
    pub fn compute(&self, items: &[InvoiceItem]) -> DomainResult<TaxTotals> {
        let lines = self.lines_for(items)?;
        Ok(compute_totals(&lines, self.tax_rate, self.tax_mode))
    }

    fn lines_for(&self, items: &[InvoiceItem]) -> DomainResult<Vec<LineInput>> {
        items
            .iter()
            .map(|item| {
                if item.invoice_id != self.id {
                    return Err(DomainError::invariant(
                        "item does not belong to this invoice",
                    ));
                }
                Ok(LineInput::new(item.quantity, item.unit_price))
            })
            .collect()
    }

    /// Move to `to` if the state machine allows it.
    pub fn transition_status(
        &mut self,
        to: InvoiceStatus,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.status = self.status.transition(to)?;
        self.updated_at = updated_at;
        Ok(())
    }

    /// The status this invoice should display as of `today` (see
    /// [`InvoiceStatus::display`]).
    pub fn display_status(&self, today: NaiveDate) -> InvoiceStatus {
        self.status.display(self.due_date, today)
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgercraft_core::InvoiceItemId;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    fn test_invoice(tax_rate: f64, tax_mode: TaxMode) -> Invoice {
        Invoice::new(
            InvoiceId::new(),
            "INV-2026-0001",
            ClientId::new(),
            None,
            date(2026, 8, 1),
            date(2026, 8, 31),
            tax_rate,
            tax_mode,
            test_time(),
        )
        .unwrap()
    }

    fn item_for(invoice: &Invoice, quantity: f64, unit_price: f64) -> InvoiceItem {
        InvoiceItem::new(
            InvoiceItemId::new(),
            invoice.id,
            "Consulting",
            quantity,
            unit_price,
        )
        .unwrap()
    }

    #[test]
    fn new_invoice_is_draft_with_zero_totals() {
        let invoice = test_invoice(18.0, TaxMode::Gst);
        assert_eq!(invoice.status, InvoiceStatus::Draft);
        assert_eq!(invoice.subtotal, 0.0);
        assert_eq!(invoice.total, 0.0);
    }

    #[test]
    fn rejects_due_date_before_issue_date() {
        let err = Invoice::new(
            InvoiceId::new(),
            "INV-2026-0001",
            ClientId::new(),
            None,
            date(2026, 8, 31),
            date(2026, 8, 1),
            18.0,
            TaxMode::Gst,
            test_time(),
        )
        .unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for inverted dates"),
        }
    }

    #[test]
    fn recalculate_derives_totals_through_the_calculator() {
        let mut invoice = test_invoice(18.0, TaxMode::Gst);
        let items = vec![item_for(&invoice, 1.0, 1000.0)];
        invoice.recalculate(&items).unwrap();
        assert_eq!(invoice.subtotal, 1000.0);
        assert_eq!(invoice.tax_amount, 180.0);
        assert_eq!(invoice.total, 1180.0);
    }

    #[test]
    fn item_edit_then_recalculate_updates_totals() {
        let mut invoice = test_invoice(18.0, TaxMode::Gst);
        let mut items = vec![item_for(&invoice, 1.0, 1000.0)];
        invoice.recalculate(&items).unwrap();

        items[0].set_quantity(2.0).unwrap();
        invoice.recalculate(&items).unwrap();
        assert_eq!(invoice.subtotal, 2000.0);
        assert_eq!(invoice.total, 2360.0);
    }

    #[test]
    fn recalculate_rejects_foreign_items() {
        let mut invoice = test_invoice(18.0, TaxMode::Gst);
        let other = test_invoice(18.0, TaxMode::Gst);
        let items = vec![item_for(&other, 1.0, 1000.0)];
        let err = invoice.recalculate(&items).unwrap_err();
        match err {
            DomainError::InvariantViolation(_) => {}
            _ => panic!("Expected InvariantViolation for foreign item"),
        }
    }

    #[test]
    fn happy_path_draft_sent_paid() {
        let mut invoice = test_invoice(18.0, TaxMode::Gst);
        invoice
            .transition_status(InvoiceStatus::Sent, test_time())
            .unwrap();
        invoice
            .transition_status(InvoiceStatus::Paid, test_time())
            .unwrap();
        assert!(invoice.status.is_terminal());
    }

    #[test]
    fn draft_cannot_jump_straight_to_paid() {
        let mut invoice = test_invoice(18.0, TaxMode::Gst);
        let err = invoice
            .transition_status(InvoiceStatus::Paid, test_time())
            .unwrap_err();
        match err {
            DomainError::Conflict(_) => {}
            _ => panic!("Expected Conflict for draft -> paid"),
        }
    }

    #[test]
    fn terminal_statuses_admit_no_transition() {
        for terminal in [InvoiceStatus::Paid, InvoiceStatus::Cancelled] {
            for to in [
                InvoiceStatus::Draft,
                InvoiceStatus::Sent,
                InvoiceStatus::Paid,
                InvoiceStatus::Overdue,
                InvoiceStatus::Cancelled,
            ] {
                assert!(!terminal.can_transition(to), "{terminal:?} -> {to:?}");
            }
        }
    }

    #[test]
    fn overdue_invoice_can_still_be_paid() {
        assert!(InvoiceStatus::Overdue.can_transition(InvoiceStatus::Paid));
        assert!(InvoiceStatus::Overdue.can_transition(InvoiceStatus::Cancelled));
        assert!(!InvoiceStatus::Overdue.can_transition(InvoiceStatus::Sent));
    }

    #[test]
    fn display_status_derives_overdue_without_mutation() {
        let mut invoice = test_invoice(18.0, TaxMode::Gst);
        invoice
            .transition_status(InvoiceStatus::Sent, test_time())
            .unwrap();

        assert_eq!(
            invoice.display_status(date(2026, 8, 30)),
            InvoiceStatus::Sent
        );
        assert_eq!(
            invoice.display_status(date(2026, 9, 1)),
            InvoiceStatus::Overdue
        );
        // Stored status is untouched by the derivation.
        assert_eq!(invoice.status, InvoiceStatus::Sent);

        // Due date itself is not overdue yet.
        assert_eq!(
            invoice.display_status(date(2026, 8, 31)),
            InvoiceStatus::Sent
        );
    }

    #[test]
    fn draft_past_due_does_not_display_overdue() {
        let invoice = test_invoice(18.0, TaxMode::Gst);
        assert_eq!(
            invoice.display_status(date(2027, 1, 1)),
            InvoiceStatus::Draft
        );
    }

    #[test]
    fn status_serde_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&InvoiceStatus::Overdue).unwrap(),
            "\"overdue\""
        );
        let status: InvoiceStatus = serde_json::from_str("\"sent\"").unwrap();
        assert_eq!(status, InvoiceStatus::Sent);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: recalculation is idempotent and always matches the
        /// calculator called directly on the same lines.
        #[test]
        fn recalculate_matches_direct_calculator_output(
            lines in prop::collection::vec((0.01f64..100.0, 0.0f64..10_000.0), 0..8),
            rate in 0.0f64..40.0,
        ) {
            let mut invoice = test_invoice(rate, TaxMode::SgstCgst);
            let items: Vec<InvoiceItem> = lines
                .iter()
                .map(|&(q, p)| item_for(&invoice, q, p))
                .collect();

            let first = invoice.recalculate(&items).unwrap();
            let second = invoice.recalculate(&items).unwrap();
            prop_assert_eq!(first, second);

            let direct: Vec<LineInput> = lines
                .iter()
                .map(|&(q, p)| LineInput::new(q, p))
                .collect();
            let expected = compute_totals(&direct, rate, TaxMode::SgstCgst);
            prop_assert_eq!(invoice.subtotal, expected.subtotal);
            prop_assert_eq!(invoice.tax_amount, expected.tax_amount);
            prop_assert_eq!(invoice.total, expected.total);
        }
    }
}
