use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ledgercraft_core::{ClientId, DomainError, DomainResult, Entity, ProjectId, ValueObject};
use ledgercraft_tax::{compute_totals, LineInput, TaxMode};

/// Project status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Active,
    OnHold,
    Completed,
    Cancelled,
}

/// Agreed billing for a project: a flat amount plus the tax treatment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BillingTerms {
    pub amount: f64,
    pub tax_rate: f64,
    pub tax_mode: TaxMode,
}

impl ValueObject for BillingTerms {}

/// Derived cost summary shown on project cards and reports.
///
/// Always equals the tax calculator's (rounded) output for the project's
/// billing terms; [`Project::recalculate_costing`] is the only writer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub subtotal: f64,
    pub gst_amount: f64,
    pub total: f64,
}

impl ValueObject for CostBreakdown {}

/// A client engagement with agreed billing terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub project_code: String,
    pub client_id: ClientId,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub billing: BillingTerms,
    pub cost_breakdown: CostBreakdown,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn new(
        id: ProjectId,
        project_code: impl Into<String>,
        client_id: ClientId,
        name: impl Into<String>,
        description: Option<String>,
        billing: BillingTerms,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let project_code = project_code.into();
        let name = name.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("project name cannot be empty"));
        }
        if project_code.trim().is_empty() {
            return Err(DomainError::validation("project code cannot be empty"));
        }
        if !billing.amount.is_finite() || billing.amount < 0.0 {
            return Err(DomainError::validation(
                "billing amount must be a non-negative number",
            ));
        }
        if !billing.tax_rate.is_finite() || billing.tax_rate < 0.0 {
            return Err(DomainError::validation(
                "tax rate must be a non-negative number",
            ));
        }

        let mut project = Self {
            id,
            project_code,
            client_id,
            name,
            description,
            status: ProjectStatus::Active,
            billing,
            cost_breakdown: CostBreakdown {
                subtotal: 0.0,
                gst_amount: 0.0,
                total: 0.0,
            },
            created_at,
            updated_at: created_at,
        };
        project.recalculate_costing();
        Ok(project)
    }

    /// Replace the billing terms and re-derive the cost breakdown.
    pub fn set_billing(&mut self, billing: BillingTerms, updated_at: DateTime<Utc>) -> DomainResult<()> {
        if !billing.amount.is_finite() || billing.amount < 0.0 {
            return Err(DomainError::validation(
                "billing amount must be a non-negative number",
            ));
        }
        if !billing.tax_rate.is_finite() || billing.tax_rate < 0.0 {
            return Err(DomainError::validation(
                "tax rate must be a non-negative number",
            ));
        }
        self.billing = billing;
        self.recalculate_costing();
        self.updated_at = updated_at;
        Ok(())
    }

    /// Re-derive `cost_breakdown` from the current billing terms.
    ///
    /// The breakdown is the rounded calculator output; billing terms are the
    /// source of truth and this is the only writer of the breakdown.
    pub fn recalculate_costing(&mut self) {
        let totals = compute_totals(
            &[LineInput::new(1.0, self.billing.amount)],
            self.billing.tax_rate,
            self.billing.tax_mode,
        )
        .rounded();

        self.cost_breakdown = CostBreakdown {
            subtotal: totals.subtotal,
            gst_amount: totals.tax_amount,
            total: totals.total,
        };
    }

    pub fn transition_status(&mut self, to: ProjectStatus, updated_at: DateTime<Utc>) -> DomainResult<()> {
        use ProjectStatus::*;
        let allowed = matches!(
            (self.status, to),
            (Active, OnHold | Completed | Cancelled) | (OnHold, Active | Cancelled)
        );
        if !allowed {
            return Err(DomainError::conflict(format!(
                "cannot move project from {:?} to {:?}",
                self.status, to
            )));
        }
        self.status = to;
        self.updated_at = updated_at;
        Ok(())
    }
}

impl Entity for Project {
    type Id = ProjectId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
