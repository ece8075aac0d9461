use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use ledgercraft_core::{DomainError, DomainResult, Entity, ExpenseId, ProjectId};

/// Expense category used for reporting buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Travel,
    Equipment,
    Software,
    Office,
    Utilities,
    Other,
}

/// A business expense, optionally attributed to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub expense_code: String,
    pub category: ExpenseCategory,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub project_id: Option<ProjectId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ExpenseId,
        expense_code: impl Into<String>,
        category: ExpenseCategory,
        description: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        project_id: Option<ProjectId>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let expense_code = expense_code.into();
        let description = description.into();

        if expense_code.trim().is_empty() {
            return Err(DomainError::validation("expense code cannot be empty"));
        }
        if description.trim().is_empty() {
            return Err(DomainError::validation("description cannot be empty"));
        }
        if !amount.is_finite() || amount < 0.0 {
            return Err(DomainError::validation(
                "expense amount must be a non-negative number",
            ));
        }

        Ok(Self {
            id,
            expense_code,
            category,
            description,
            amount,
            date,
            project_id,
            created_at,
            updated_at: created_at,
        })
    }

    pub fn set_amount(&mut self, amount: f64, updated_at: DateTime<Utc>) -> DomainResult<()> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(DomainError::validation(
                "expense amount must be a non-negative number",
            ));
        }
        self.amount = amount;
        self.updated_at = updated_at;
        Ok(())
    }
}

impl Entity for Expense {
    type Id = ExpenseId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
