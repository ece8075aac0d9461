use serde::{Deserialize, Serialize};

use ledgercraft_core::{DomainError, DomainResult, Entity, InvoiceId, InvoiceItemId};

/// One billable line on an invoice.
///
/// `total` is always `quantity * unit_price`; the constructor and setters
/// recompute it on every write, and [`InvoiceItem::line_total`] derives it
/// fresh on read. Stored totals are never trusted over the factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub id: InvoiceItemId,
    pub invoice_id: InvoiceId,
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
}

impl InvoiceItem {
    pub fn new(
        id: InvoiceItemId,
        invoice_id: InvoiceId,
        description: impl Into<String>,
        quantity: f64,
        unit_price: f64,
    ) -> DomainResult<Self> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(DomainError::validation("item description cannot be empty"));
        }
        check_quantity(quantity)?;
        check_unit_price(unit_price)?;

        Ok(Self {
            id,
            invoice_id,
            description,
            quantity,
            unit_price,
            total: quantity * unit_price,
        })
    }

    /// Line amount derived from the factors, ignoring the stored `total`.
    pub fn line_total(&self) -> f64 {
        self.quantity * self.unit_price
    }

    pub fn set_quantity(&mut self, quantity: f64) -> DomainResult<()> {
        check_quantity(quantity)?;
        self.quantity = quantity;
        self.total = self.line_total();
        Ok(())
    }

    pub fn set_unit_price(&mut self, unit_price: f64) -> DomainResult<()> {
        check_unit_price(unit_price)?;
        self.unit_price = unit_price;
        self.total = self.line_total();
        Ok(())
    }
}

fn check_quantity(quantity: f64) -> DomainResult<()> {
    if !quantity.is_finite() || quantity <= 0.0 {
        return Err(DomainError::validation("item quantity must be positive"));
    }
    Ok(())
}

fn check_unit_price(unit_price: f64) -> DomainResult<()> {
    if !unit_price.is_finite() || unit_price < 0.0 {
        return Err(DomainError::validation(
            "item unit price must be non-negative",
        ));
    }
    Ok(())
}

impl Entity for InvoiceItem {
    type Id = InvoiceItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
