use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use ledgercraft_core::{DomainError, DomainResult, Entity, ProjectId, TimesheetId, ValueObject};

/// One logged day of work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetEntry {
    pub date: NaiveDate,
    pub hours: f64,
    pub note: Option<String>,
}

impl ValueObject for TimesheetEntry {}

impl TimesheetEntry {
    pub fn new(date: NaiveDate, hours: f64, note: Option<String>) -> DomainResult<Self> {
        if !hours.is_finite() || hours <= 0.0 || hours > 24.0 {
            return Err(DomainError::validation(
                "logged hours must be between 0 and 24",
            ));
        }
        Ok(Self { date, hours, note })
    }
}

/// A month of logged hours for one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timesheet {
    pub id: TimesheetId,
    pub timesheet_code: String,
    pub project_id: ProjectId,
    pub period_year: i32,
    pub period_month: u32,
    pub entries: Vec<TimesheetEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Timesheet {
    pub fn new(
        id: TimesheetId,
        timesheet_code: impl Into<String>,
        project_id: ProjectId,
        period_year: i32,
        period_month: u32,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let timesheet_code = timesheet_code.into();
        if timesheet_code.trim().is_empty() {
            return Err(DomainError::validation("timesheet code cannot be empty"));
        }
        if !(1..=12).contains(&period_month) {
            return Err(DomainError::validation("period month must be 1-12"));
        }

        Ok(Self {
            id,
            timesheet_code,
            project_id,
            period_year,
            period_month,
            entries: Vec::new(),
            created_at,
            updated_at: created_at,
        })
    }

    /// Log an entry. The entry's date must fall inside this sheet's period.
    pub fn add_entry(&mut self, entry: TimesheetEntry, updated_at: DateTime<Utc>) -> DomainResult<()> {
        if entry.date.year() != self.period_year || entry.date.month() != self.period_month {
            return Err(DomainError::invariant(
                "entry date falls outside the timesheet period",
            ));
        }
        self.entries.push(entry);
        self.updated_at = updated_at;
        Ok(())
    }

    /// Total logged hours, derived from the entries on every read.
    pub fn total_hours(&self) -> f64 {
        self.entries.iter().map(|e| e.hours).sum()
    }
}

impl Entity for Timesheet {
    type Id = TimesheetId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
